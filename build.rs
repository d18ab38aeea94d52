use std::process::Command;

fn main() {
    // Prefer DFS_STEPPER_VERSION env (set by CI), fall back to git tag, then the crate version.
    let version = std::env::var("DFS_STEPPER_VERSION")
        .ok()
        .filter(|s| !s.is_empty() && s != "dev")
        .or_else(|| {
            Command::new("git")
                .args(["describe", "--tags", "--always"])
                .output()
                .ok()
                .filter(|o| o.status.success())
                .and_then(|o| String::from_utf8(o.stdout).ok())
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        })
        .unwrap_or_else(|| std::env::var("CARGO_PKG_VERSION").unwrap_or_else(|_| "dev".into()));

    println!("cargo:rustc-env=DFS_STEPPER_VERSION={}", version);
    println!("cargo:rerun-if-env-changed=DFS_STEPPER_VERSION");

    // Re-run after a new commit or tag so `git describe` stays current.
    for path in [".git/HEAD", ".git/refs/heads", ".git/refs/tags", ".git/packed-refs"] {
        if std::path::Path::new(path).exists() {
            println!("cargo:rerun-if-changed={}", path);
        }
    }
}
