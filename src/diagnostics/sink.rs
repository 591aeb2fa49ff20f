use std::io::Write;

use serde::Serialize;

/// Telemetry event emitted at stream lifecycle boundaries.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum DiagnosticEvent {
    DocumentBuffered { lines: usize, candidates: usize },
    StreamFinalized { emitted: usize, skipped: usize },
}

/// Optional sink for tokenizer telemetry.
///
/// Sinks observe lifecycle events without coupling to tokenization logic:
/// recording must never fail the stream and correctness never depends on it.
pub trait DiagnosticSink: Send {
    fn record(&mut self, event: DiagnosticEvent);
}

/// Default sink: discards everything.
pub struct NoopSink;

impl DiagnosticSink for NoopSink {
    fn record(&mut self, _event: DiagnosticEvent) {}
}

/// Writes one JSON object per event. Encoding or write failures are
/// swallowed; diagnostics must not disturb tokenization.
pub struct JsonLinesSink<W: Write> {
    writer: W,
}

impl<W: Write> JsonLinesSink<W> {
    pub fn new(writer: W) -> Self {
        JsonLinesSink { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write + Send> DiagnosticSink for JsonLinesSink<W> {
    fn record(&mut self, event: DiagnosticEvent) {
        if let Ok(mut line) = serde_json::to_string(&event) {
            line.push('\n');
            let _ = self.writer.write_all(line.as_bytes());
        }
    }
}
