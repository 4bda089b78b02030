//! Trace output for machine runs.
//!
//! The machine emits the structural rendering of `(term, environment)`
//! before each step and once more at the terminal state. Output can be
//! directed to different destinations:
//! - Stdout: interactive transcripts (default for traced runs)
//! - Buffer: capture for assertions
//! - Silent: untraced runs
//!
//! Enum dispatch instead of trait objects keeps this frequently-hit path
//! free of vtable indirection.

use parking_lot::Mutex;

use imp_ir::Term;

use crate::environment::Environment;

/// Trace handler that writes each state to stdout.
#[derive(Default)]
pub struct StdoutTraceHandler;

impl StdoutTraceHandler {
    /// Record one machine state.
    pub fn record(&self, term: &Term, env: &Environment) {
        println!("{term}, {env}");
    }
}

/// Trace handler that captures each state into a buffer.
pub struct BufferTraceHandler {
    buffer: Mutex<String>,
}

impl BufferTraceHandler {
    /// Create an empty buffer handler.
    pub fn new() -> Self {
        BufferTraceHandler {
            buffer: Mutex::new(String::new()),
        }
    }

    /// Record one machine state.
    pub fn record(&self, term: &Term, env: &Environment) {
        let mut buf = self.buffer.lock();
        buf.push_str(&format!("{term}, {env}\n"));
    }

    /// Get all captured output.
    pub fn output(&self) -> String {
        self.buffer.lock().clone()
    }

    /// Clear captured output.
    pub fn clear(&self) {
        self.buffer.lock().clear();
    }
}

impl Default for BufferTraceHandler {
    fn default() -> Self {
        Self::new()
    }
}

/// Trace handler implementation using enum dispatch.
pub enum TraceHandler {
    /// Writes to stdout.
    Stdout(StdoutTraceHandler),
    /// Captures to a buffer.
    Buffer(BufferTraceHandler),
    /// Discards all trace output.
    Silent,
}

impl TraceHandler {
    /// Handler writing to stdout.
    pub fn stdout() -> Self {
        TraceHandler::Stdout(StdoutTraceHandler)
    }

    /// Handler capturing into a fresh buffer.
    pub fn buffer() -> Self {
        TraceHandler::Buffer(BufferTraceHandler::new())
    }

    /// Record one machine state.
    pub fn record(&self, term: &Term, env: &Environment) {
        match self {
            Self::Stdout(h) => h.record(term, env),
            Self::Buffer(h) => h.record(term, env),
            Self::Silent => {}
        }
    }

    /// Get captured output.
    ///
    /// Empty for handlers that do not capture.
    pub fn output(&self) -> String {
        match self {
            Self::Buffer(h) => h.output(),
            Self::Stdout(_) | Self::Silent => String::new(),
        }
    }
}
