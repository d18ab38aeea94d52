//! WASM bindings for dfs-stepper.
//!
//! Exposes `trace` and `traceWithOptions` to JavaScript via wasm-bindgen.

use wasm_bindgen::prelude::*;

use crate::config::{OutputFormat, TraceConfig};
use crate::parser::GraphSource;

fn start_arg(start: &str) -> Option<String> {
    if start.is_empty() {
        None
    } else {
        Some(start.to_string())
    }
}

/// Trace a DFS over adjacency-list text as Unicode text.
///
/// An empty `start` means the first node in the text.
#[wasm_bindgen]
pub fn trace(src: &str, start: &str) -> Result<String, JsError> {
    crate::trace_dsl(src, start_arg(start).as_deref(), true).map_err(|e| JsError::new(&e.to_string()))
}

/// Trace with full control over output.
///
/// - `unicode`: Unicode markers (true) or plain ASCII (false)
/// - `json`: line-delimited JSON events instead of text
/// - `target`: node to force onto the stack, or empty for plain DFS
#[wasm_bindgen(js_name = "traceWithOptions")]
pub fn trace_with_options(
    src: &str,
    start: &str,
    unicode: bool,
    json: bool,
    target: &str,
) -> Result<String, JsError> {
    let config = TraceConfig {
        source: GraphSource::Text(src.to_string()),
        start: start_arg(start),
        policy: start_arg(target)
            .map_or(crate::engine::TraversalPolicy::Plain, crate::engine::TraversalPolicy::ForceTarget),
        unicode,
        format: if json { OutputFormat::Json } else { OutputFormat::Text },
        ..TraceConfig::default()
    };
    crate::trace(&config).map_err(|e| JsError::new(&e.to_string()))
}
