//! Diagnostic emission for the scanner.
//!
//! The scanner does not write to process-wide output directly; it reports
//! through an injected [`DiagnosticSink`] so tests can capture messages
//! without intercepting stderr. Production code uses [`StderrSink`].
//!
//! The one-line shape `<source-id>:<line>: error: <message>` is a contract:
//! tooling that parses compiler diagnostics depends on it. Lines are emitted
//! immediately as errors are discovered, never batched, so a single pass
//! surfaces every independent defect in the input.

use std::io::{self, Write};

/// Receiver for scanner diagnostics.
pub trait DiagnosticSink {
    /// Report one lexical error. Must not panic or abort scanning.
    fn error(&mut self, source_id: &str, line: u32, message: &str);
}

/// Render the canonical diagnostic line (without trailing newline).
fn render(source_id: &str, line: u32, message: &str) -> String {
    format!("{source_id}:{line}: error: {message}")
}

/// Production sink: one line per error to the process error stream.
///
/// Write failures are swallowed; a broken stderr must not abort scanning.
#[derive(Clone, Copy, Debug, Default)]
pub struct StderrSink;

impl DiagnosticSink for StderrSink {
    fn error(&mut self, source_id: &str, line: u32, message: &str) {
        let mut stderr = io::stderr().lock();
        let _ = writeln!(stderr, "{}", render(source_id, line, message));
    }
}

/// Test sink: collects rendered diagnostic lines in order of emission.
#[derive(Clone, Debug, Default)]
pub struct CollectingSink {
    lines: Vec<String>,
}

impl CollectingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// The rendered diagnostic lines, in emission order.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

impl DiagnosticSink for CollectingSink {
    fn error(&mut self, source_id: &str, line: u32, message: &str) {
        self.lines.push(render(source_id, line, message));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn rendered_shape_is_stable() {
        // Tooling parses this exact shape; do not change it.
        assert_eq!(
            render("Foo.java", 12, "unterminated multiline comment"),
            "Foo.java:12: error: unterminated multiline comment"
        );
    }

    #[test]
    fn collecting_sink_preserves_emission_order() {
        let mut sink = CollectingSink::new();
        assert!(sink.is_empty());
        sink.error("A.java", 1, "first");
        sink.error("A.java", 9, "second");
        assert_eq!(
            sink.lines(),
            ["A.java:1: error: first", "A.java:9: error: second"]
        );
    }
}
