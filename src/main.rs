//! dfs-stepper CLI entry point.
//!
//! Reads an adjacency list (file, stdin, or the built-in graph), runs the
//! step engine and prints each step as it is produced, optionally pausing
//! between steps.

use std::fs;
use std::io::{self, Read, Write};
use std::process;
use std::thread;
use std::time::Duration;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use dfs_stepper::config::{OutputFormat, TraceConfig};
use dfs_stepper::engine::TraversalPolicy;
use dfs_stepper::parser::{GraphSource, ParseOptions, build};
use dfs_stepper::{Error, Frame, trace_with};

/// Exit status when the traversal stopped on an undefined node.
const EXIT_HALTED: i32 = 2;

/// Animate a depth-first traversal, showing the stack and visited set per step.
#[derive(Parser, Debug)]
#[command(
    name = "dfs-stepper",
    version = env!("DFS_STEPPER_VERSION"),
    about = "Animate a depth-first traversal, showing the stack and visited set per step"
)]
struct Cli {
    /// Adjacency-list file, one `Node:Succ1,Succ2` per line ("-" for stdin)
    input: Option<String>,

    /// Use the built-in graph instead of reading input
    #[arg(short = 'b', long = "builtin", conflicts_with = "input")]
    builtin: bool,

    /// Start node (defaults to the first node listed)
    #[arg(short = 's', long = "start")]
    start: Option<String>,

    /// Push this node again whenever it is an unvisited successor of the current node
    #[arg(short = 't', long = "target")]
    target: Option<String>,

    /// Reject malformed lines instead of skipping them
    #[arg(long = "strict")]
    strict: bool,

    /// Reject successors that have no line of their own
    #[arg(long = "validate")]
    validate: bool,

    /// Use plain ASCII instead of Unicode markers
    #[arg(short = 'a', long = "ascii")]
    use_ascii: bool,

    /// Output format: text or json
    #[arg(short = 'f', long = "format", default_value = "text")]
    format: OutputFormat,

    /// Pause between steps, in milliseconds
    #[arg(long = "delay-ms", default_value = "0")]
    delay_ms: u64,

    /// Write output to this file instead of stdout
    #[arg(short = 'o', long = "output")]
    output: Option<String>,

    /// Print the graph's nodes and exit
    #[arg(long = "list-nodes")]
    list_nodes: bool,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn read_source(cli: &Cli) -> GraphSource {
    if cli.builtin {
        return GraphSource::Builtin;
    }
    let text = match cli.input.as_deref() {
        Some(path) if path != "-" => match fs::read_to_string(path) {
            Ok(s) => s,
            Err(e) => {
                eprintln!("error: cannot read '{}': {}", path, e);
                process::exit(1);
            }
        },
        _ => {
            let mut buf = String::new();
            if let Err(e) = io::stdin().read_to_string(&mut buf) {
                eprintln!("error: cannot read stdin: {}", e);
                process::exit(1);
            }
            buf
        }
    };
    GraphSource::Text(text)
}

fn main() {
    let cli = Cli::parse();
    init_tracing();

    let config = TraceConfig {
        source: read_source(&cli),
        start: cli.start.clone(),
        policy: cli
            .target
            .clone()
            .map_or(TraversalPolicy::Plain, TraversalPolicy::ForceTarget),
        parse: ParseOptions {
            strict: cli.strict,
            validate_references: cli.validate,
        },
        unicode: !cli.use_ascii,
        format: cli.format,
    };

    if cli.list_nodes {
        match build(&config.source, &config.parse) {
            Ok(parsed) => {
                for node in parsed.graph.nodes() {
                    println!("{}", node);
                }
                return;
            }
            Err(e) => {
                eprintln!("error: {}", e);
                process::exit(1);
            }
        }
    }

    let mut sink: Box<dyn Write> = match cli.output.as_deref() {
        Some(path) => match fs::File::create(path) {
            Ok(f) => Box::new(f),
            Err(e) => {
                eprintln!("error: cannot write '{}': {}", path, e);
                process::exit(1);
            }
        },
        None => Box::new(io::stdout()),
    };

    let spaced = config.format == OutputFormat::Text;
    let delay = Duration::from_millis(cli.delay_ms);
    let mut write_err: Option<io::Error> = None;
    let result = trace_with(&config, |frame, chunk| {
        if write_err.is_some() {
            return;
        }
        if let Frame::Step(i) = frame {
            if i > 0 && !delay.is_zero() {
                thread::sleep(delay);
            }
        }
        let sep = if spaced && matches!(frame, Frame::Step(_)) { "\n" } else { "" };
        if let Err(e) = write!(sink, "{}{}", sep, chunk).and_then(|()| sink.flush()) {
            write_err = Some(e);
        }
    });

    if let Some(e) = write_err {
        eprintln!("error: cannot write output: {}", e);
        process::exit(1);
    }

    match result {
        Ok(_) => {}
        Err(Error::Halted { steps, source, .. }) => {
            eprintln!("error: traversal halted after {} step(s): {}", steps, source);
            process::exit(EXIT_HALTED);
        }
        Err(e) => {
            eprintln!("error: {}", e);
            process::exit(1);
        }
    }
}
