//! A reported diagnostic: code, message, and position snapshot.

use crate::code::DiagCode;
use crate::flags::DiagFlags;
use crate::severity::Severity;
use anvil_source::Location;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One diagnostic as delivered to a [`DiagnosticSink`](crate::DiagnosticSink).
///
/// The location is the tracker's position at report time, or `None` when
/// the code carries [`DiagFlags::NOFILE`].
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Diagnostic {
    /// The packed severity/flags/class code.
    pub code: DiagCode,
    /// The formatted message text.
    pub message: String,
    /// Where in the source the problem was noticed, if anywhere.
    pub location: Option<Location>,
}

impl Diagnostic {
    /// Creates a diagnostic.
    pub fn new(code: DiagCode, message: impl Into<String>, location: Option<Location>) -> Self {
        Self {
            code,
            message: message.into(),
            location,
        }
    }

    /// The severity tier of this diagnostic.
    pub fn severity(&self) -> Severity {
        self.code.severity()
    }
}

impl fmt::Display for Diagnostic {
    /// Renders as `file:line: severity: message`, omitting the position
    /// when absent and the severity label under
    /// [`DiagFlags::NO_SEVERITY`].
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(location) = &self.location {
            write!(f, "{location}: ")?;
        }
        if !self.code.flags().contains(DiagFlags::NO_SEVERITY) {
            write!(f, "{}: ", self.severity())?;
        }
        f.write_str(&self.message)
    }
}
