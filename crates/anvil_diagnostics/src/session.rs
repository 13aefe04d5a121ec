//! The per-compilation context: position, sink, warnings, pass, errors.

use crate::code::DiagCode;
use crate::diagnostic::Diagnostic;
use crate::flags::DiagFlags;
use crate::severity::Severity;
use crate::sink::{DiagnosticSink, StderrSink};
use crate::warning::{WarningClass, WarningSet};
use anvil_source::SourceTracker;

/// Which traversal of the input is currently running.
///
/// Forward references are resolved by re-reading the input; pass-scoped
/// diagnostics keep one call site from reporting the same problem once
/// per traversal.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Pass {
    /// The first traversal.
    First,
    /// A stabilization traversal between the first and the final one.
    Intermediate,
    /// The final, code-emitting traversal.
    Final,
}

/// An unrecoverable failure on its way to the top-level handler.
///
/// Leaf code never terminates the process; it reports at `Fatal` or
/// `Panic` severity and hands this value up the call chain. The driver
/// alone calls [`terminate`](Self::terminate).
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum Abort {
    /// Ordinary unrecoverable failure; exits with an error code.
    #[error("fatal: {0}")]
    Fatal(String),
    /// Internal-consistency violation; aborts preserving a core image.
    #[error("panic: {0}")]
    Panic(String),
}

impl Abort {
    /// The severity tier this abort was reported at.
    pub fn severity(&self) -> Severity {
        match self {
            Abort::Fatal(_) => Severity::Fatal,
            Abort::Panic(_) => Severity::Panic,
        }
    }

    /// Ends the process: exit code 1 for `Fatal`, an abnormal abort for
    /// `Panic`.
    pub fn terminate(self) -> ! {
        match self {
            Abort::Fatal(_) => std::process::exit(1),
            Abort::Panic(_) => std::process::abort(),
        }
    }
}

/// One compilation pipeline's diagnostic context.
///
/// Owns the source-position tracker, the swappable sink, the warning
/// enable/disable state, the current pass, and the running error count.
/// Every piece of state that was once process-global lives here, so
/// independent sessions are independent compilations.
pub struct Session {
    tracker: SourceTracker,
    sink: Box<dyn DiagnosticSink>,
    warnings: WarningSet,
    pass: Pass,
    error_count: usize,
}

impl Session {
    /// Creates a session reporting to standard error.
    pub fn new() -> Self {
        Self::with_sink(Box::new(StderrSink))
    }

    /// Creates a session reporting to the given sink.
    pub fn with_sink(sink: Box<dyn DiagnosticSink>) -> Self {
        Self {
            tracker: SourceTracker::new(),
            sink,
            warnings: WarningSet::new(),
            pass: Pass::First,
            error_count: 0,
        }
    }

    /// Replaces the sink, returning the previous one.
    pub fn set_sink(&mut self, sink: Box<dyn DiagnosticSink>) -> Box<dyn DiagnosticSink> {
        std::mem::replace(&mut self.sink, sink)
    }

    /// The source-position tracker.
    pub fn tracker(&self) -> &SourceTracker {
        &self.tracker
    }

    /// The source-position tracker, for updating.
    pub fn tracker_mut(&mut self) -> &mut SourceTracker {
        &mut self.tracker
    }

    /// The warning enable/disable state.
    pub fn warnings(&self) -> &WarningSet {
        &self.warnings
    }

    /// The warning enable/disable state, for configuring.
    pub fn warnings_mut(&mut self) -> &mut WarningSet {
        &mut self.warnings
    }

    /// The currently running pass.
    pub fn pass(&self) -> Pass {
        self.pass
    }

    /// Marks a new pass as running.
    pub fn set_pass(&mut self, pass: Pass) {
        self.pass = pass;
    }

    /// The number of build-failing (`Nonfatal`) diagnostics so far.
    pub fn error_count(&self) -> usize {
        self.error_count
    }

    /// Returns `true` once any build-failing diagnostic was reported.
    pub fn has_errors(&self) -> bool {
        self.error_count > 0
    }

    /// Reports a diagnostic.
    ///
    /// Pass-scoped codes are dropped on the passes they do not name, and
    /// warnings are dropped when their class is disabled — or promoted to
    /// `Nonfatal` when the warnings-as-errors meta-class is enabled.
    /// `Debug`, `Warning`, and `Nonfatal` reports return `Ok`; `Fatal`
    /// and `Panic` reports return the `Abort` for the caller to propagate.
    /// Flagging a code for both the first and the final pass is a caller
    /// error and reports an internal-consistency violation instead.
    pub fn report(&mut self, code: DiagCode, message: impl Into<String>) -> Result<(), Abort> {
        let flags = code.flags();
        if flags.contains(DiagFlags::PASS1 | DiagFlags::PASS2) {
            return Err(self.internal(
                "diagnostic flagged for both the first and the final pass",
            ));
        }
        let wanted = match self.pass {
            Pass::First => !flags.contains(DiagFlags::PASS2),
            Pass::Intermediate => {
                !flags.contains(DiagFlags::PASS1) && !flags.contains(DiagFlags::PASS2)
            }
            Pass::Final => !flags.contains(DiagFlags::PASS1),
        };
        if !wanted {
            return Ok(());
        }

        let mut code = code;
        if code.severity() == Severity::Warning {
            // Index 0 on a reported warning means "no specific class":
            // the meta-class toggle never suppresses, only promotes.
            if code.warning_index() != 0 {
                if let Some(class) = code.warning_class() {
                    if !self.warnings.enabled(class) {
                        return Ok(());
                    }
                }
            }
            if self.warnings.enabled(WarningClass::WarningsAsErrors) {
                code = code.with_severity(Severity::Nonfatal);
            }
        }

        let location = if flags.contains(DiagFlags::NOFILE) {
            None
        } else {
            Some(self.tracker.location())
        };
        let diag = Diagnostic::new(code, message, location);
        self.sink.emit(&diag);

        match code.severity() {
            Severity::Debug | Severity::Warning => Ok(()),
            Severity::Nonfatal => {
                self.error_count += 1;
                Ok(())
            }
            Severity::Fatal => Err(Abort::Fatal(diag.message)),
            Severity::Panic => Err(Abort::Panic(diag.message)),
        }
    }

    /// Reports an ordinary unrecoverable failure and returns its `Abort`.
    pub fn fatal(&mut self, message: impl Into<String>) -> Abort {
        let message = message.into();
        let diag = Diagnostic::new(
            DiagCode::new(Severity::Fatal, DiagFlags::NONE),
            message.clone(),
            Some(self.tracker.location()),
        );
        self.sink.emit(&diag);
        Abort::Fatal(message)
    }

    /// Reports an internal-consistency violation and returns its `Abort`.
    pub fn internal(&mut self, message: impl Into<String>) -> Abort {
        let message = message.into();
        let diag = Diagnostic::new(
            DiagCode::new(Severity::Panic, DiagFlags::NONE),
            message.clone(),
            Some(self.tracker.location()),
        );
        self.sink.emit(&diag);
        Abort::Panic(message)
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::CaptureSink;
    use std::sync::Arc;

    fn capture_session() -> (Session, Arc<CaptureSink>) {
        let sink = Arc::new(CaptureSink::new());
        let session = Session::with_sink(Box::new(Arc::clone(&sink)));
        (session, sink)
    }

    #[test]
    fn warning_reaches_the_sink() {
        let (mut session, sink) = capture_session();
        session.tracker_mut().set(3, "main.asm");
        session
            .report(
                DiagCode::warning(WarningClass::NumberOverflow, DiagFlags::NONE),
                "constant does not fit",
            )
            .unwrap();
        let all = sink.diagnostics();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].severity(), Severity::Warning);
        assert_eq!(all[0].location.as_ref().unwrap().line, 3);
        assert!(!session.has_errors());
    }

    #[test]
    fn disabled_class_is_dropped() {
        let (mut session, sink) = capture_session();
        session.warnings_mut().disable(WarningClass::OrphanLabels);
        session
            .report(
                DiagCode::warning(WarningClass::OrphanLabels, DiagFlags::NONE),
                "label alone on line",
            )
            .unwrap();
        assert!(sink.is_empty());
    }

    #[test]
    fn warnings_as_errors_promotes() {
        let (mut session, sink) = capture_session();
        session.warnings_mut().enable(WarningClass::WarningsAsErrors);
        session
            .report(
                DiagCode::warning(WarningClass::NumberOverflow, DiagFlags::NONE),
                "constant does not fit",
            )
            .unwrap();
        let all = sink.diagnostics();
        assert_eq!(all[0].severity(), Severity::Nonfatal);
        assert_eq!(
            all[0].code.warning_class(),
            Some(WarningClass::NumberOverflow)
        );
        assert!(session.has_errors());
        assert_eq!(session.error_count(), 1);
    }

    #[test]
    fn promotion_still_respects_disabled_classes() {
        let (mut session, sink) = capture_session();
        session.warnings_mut().enable(WarningClass::WarningsAsErrors);
        session.warnings_mut().disable(WarningClass::User);
        session
            .report(
                DiagCode::warning(WarningClass::User, DiagFlags::NONE),
                "user warning",
            )
            .unwrap();
        assert!(sink.is_empty());
        assert!(!session.has_errors());
    }

    #[test]
    fn unclassed_warning_is_never_class_gated() {
        let (mut session, sink) = capture_session();
        // Class 0 (the meta-class) is disabled by default; an unclassed
        // warning carries index 0 but must still be reported.
        session
            .report(
                DiagCode::new(Severity::Warning, DiagFlags::NONE),
                "plain warning",
            )
            .unwrap();
        assert_eq!(sink.len(), 1);
    }

    #[test]
    fn pass_scoping() {
        let (mut session, sink) = capture_session();
        let first_only = DiagCode::warning(WarningClass::OrphanLabels, DiagFlags::PASS1);
        let final_only = DiagCode::warning(WarningClass::OrphanLabels, DiagFlags::PASS2);

        session.report(first_only, "seen on pass one").unwrap();
        session.report(final_only, "not yet").unwrap();
        assert_eq!(sink.len(), 1);

        session.set_pass(Pass::Intermediate);
        session.report(first_only, "suppressed").unwrap();
        session.report(final_only, "suppressed").unwrap();
        assert_eq!(sink.len(), 1);

        session.set_pass(Pass::Final);
        session.report(first_only, "suppressed").unwrap();
        session.report(final_only, "seen on final pass").unwrap();
        let all = sink.diagnostics();
        assert_eq!(all.len(), 2);
        assert_eq!(all[1].message, "seen on final pass");
    }

    #[test]
    fn both_pass_flags_is_a_caller_error() {
        let (mut session, sink) = capture_session();
        let result = session.report(
            DiagCode::warning(WarningClass::User, DiagFlags::PASS1 | DiagFlags::PASS2),
            "never printable",
        );
        let abort = result.unwrap_err();
        assert_eq!(abort.severity(), Severity::Panic);
        let all = sink.diagnostics();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].severity(), Severity::Panic);
    }

    #[test]
    fn nonfatal_counts_errors_and_returns() {
        let (mut session, _sink) = capture_session();
        for _ in 0..3 {
            session
                .report(
                    DiagCode::new(Severity::Nonfatal, DiagFlags::NONE),
                    "bad operand",
                )
                .unwrap();
        }
        assert_eq!(session.error_count(), 3);
    }

    #[test]
    fn debug_does_not_count() {
        let (mut session, sink) = capture_session();
        session
            .report(DiagCode::new(Severity::Debug, DiagFlags::NONE), "trace")
            .unwrap();
        assert_eq!(sink.len(), 1);
        assert!(!session.has_errors());
    }

    #[test]
    fn fatal_report_aborts() {
        let (mut session, sink) = capture_session();
        let result = session.report(
            DiagCode::new(Severity::Fatal, DiagFlags::NONE),
            "cannot open output file",
        );
        assert_eq!(
            result.unwrap_err(),
            Abort::Fatal("cannot open output file".into())
        );
        assert_eq!(sink.len(), 1);
    }

    #[test]
    fn fatal_helper_reports_and_returns_abort() {
        let (mut session, sink) = capture_session();
        let abort = session.fatal("disk full");
        assert_eq!(abort, Abort::Fatal("disk full".into()));
        assert_eq!(abort.severity(), Severity::Fatal);
        assert_eq!(sink.diagnostics()[0].severity(), Severity::Fatal);
    }

    #[test]
    fn nofile_strips_location() {
        let (mut session, sink) = capture_session();
        session.tracker_mut().set(9, "main.asm");
        session
            .report(
                DiagCode::new(Severity::Warning, DiagFlags::NOFILE),
                "no position",
            )
            .unwrap();
        assert_eq!(sink.diagnostics()[0].location, None);
    }

    #[test]
    fn sink_swap_returns_previous() {
        let first = Arc::new(CaptureSink::new());
        let second = Arc::new(CaptureSink::new());
        let mut session = Session::with_sink(Box::new(Arc::clone(&first)));

        session
            .report(DiagCode::new(Severity::Debug, DiagFlags::NONE), "to first")
            .unwrap();
        let _previous = session.set_sink(Box::new(Arc::clone(&second)));
        session
            .report(DiagCode::new(Severity::Debug, DiagFlags::NONE), "to second")
            .unwrap();

        assert_eq!(first.len(), 1);
        assert_eq!(second.len(), 1);
        assert_eq!(second.diagnostics()[0].message, "to second");
    }

    #[test]
    fn abort_display() {
        assert_eq!(
            format!("{}", Abort::Fatal("out of space".into())),
            "fatal: out of space"
        );
        assert_eq!(
            format!("{}", Abort::Panic("bad state".into())),
            "panic: bad state"
        );
    }
}
