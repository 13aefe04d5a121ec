//! Where reported diagnostics are delivered.

use crate::diagnostic::Diagnostic;
use std::sync::Mutex;

/// A destination for reported diagnostics.
///
/// The [`Session`](crate::Session) holds one sink at a time and a host
/// may swap it out — for capturing output in tests, or for routing
/// diagnostics into an editor protocol instead of a terminal.
pub trait DiagnosticSink {
    /// Delivers one diagnostic.
    fn emit(&self, diag: &Diagnostic);
}

impl<S: DiagnosticSink + ?Sized> DiagnosticSink for std::sync::Arc<S> {
    fn emit(&self, diag: &Diagnostic) {
        (**self).emit(diag);
    }
}

/// The default sink: renders each diagnostic to standard error.
#[derive(Clone, Copy, Debug, Default)]
pub struct StderrSink;

impl DiagnosticSink for StderrSink {
    fn emit(&self, diag: &Diagnostic) {
        eprintln!("{diag}");
    }
}

/// A sink that accumulates diagnostics for later inspection.
///
/// The test double for anything that reports through a session: hand the
/// session a clone of an `Arc<CaptureSink>` and assert on
/// [`diagnostics`](Self::diagnostics) afterwards.
#[derive(Debug, Default)]
pub struct CaptureSink {
    diagnostics: Mutex<Vec<Diagnostic>>,
}

impl CaptureSink {
    /// Creates an empty capture sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// A snapshot of everything captured so far.
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.diagnostics.lock().unwrap().clone()
    }

    /// Takes everything captured so far, leaving the sink empty.
    pub fn take_all(&self) -> Vec<Diagnostic> {
        std::mem::take(&mut *self.diagnostics.lock().unwrap())
    }

    /// The number of diagnostics captured so far.
    pub fn len(&self) -> usize {
        self.diagnostics.lock().unwrap().len()
    }

    /// Returns `true` if nothing has been captured.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl DiagnosticSink for CaptureSink {
    fn emit(&self, diag: &Diagnostic) {
        self.diagnostics.lock().unwrap().push(diag.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::code::DiagCode;
    use crate::flags::DiagFlags;
    use crate::severity::Severity;
    use std::sync::Arc;

    fn make(message: &str) -> Diagnostic {
        Diagnostic::new(
            DiagCode::new(Severity::Warning, DiagFlags::NONE),
            message,
            None,
        )
    }

    #[test]
    fn capture_accumulates_in_order() {
        let sink = CaptureSink::new();
        sink.emit(&make("first"));
        sink.emit(&make("second"));
        let all = sink.diagnostics();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].message, "first");
        assert_eq!(all[1].message, "second");
    }

    #[test]
    fn take_all_drains() {
        let sink = CaptureSink::new();
        sink.emit(&make("one"));
        assert_eq!(sink.take_all().len(), 1);
        assert!(sink.is_empty());
    }

    #[test]
    fn arc_sink_shares_the_capture() {
        let sink = Arc::new(CaptureSink::new());
        let handle: Arc<CaptureSink> = Arc::clone(&sink);
        handle.emit(&make("through the handle"));
        assert_eq!(sink.len(), 1);
    }

    #[test]
    fn stderr_sink_is_constructible() {
        // Output goes to the real stderr; just exercise the call.
        StderrSink.emit(&make("rendered to stderr"));
    }
}
