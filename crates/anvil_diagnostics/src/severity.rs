//! Diagnostic severity tiers ordered from least to most severe.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The severity tier of a diagnostic.
///
/// Ordered from least severe (`Debug`) to most severe (`Panic`), matching
/// the derived `PartialOrd`/`Ord` implementation based on declaration
/// order. Each tier has a fixed 3-bit encoding (see [`bits`](Self::bits));
/// the values 3 through 5 are reserved.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize)]
pub enum Severity {
    /// A debugging message with no effect on the build.
    Debug,
    /// A warning: reported (subject to its warning class) and nothing more.
    Warning,
    /// An error that lets the current phase finish, then fails the build.
    Nonfatal,
    /// An ordinary unrecoverable failure; the process exits with an error
    /// code once the report reaches the top-level handler.
    Fatal,
    /// An internal-consistency violation; the process aborts in a way that
    /// preserves a core image.
    Panic,
}

impl Severity {
    /// The 3-bit encoding of this tier within a packed diagnostic code.
    pub fn bits(self) -> u32 {
        match self {
            Severity::Debug => 0,
            Severity::Warning => 1,
            Severity::Nonfatal => 2,
            Severity::Fatal => 6,
            Severity::Panic => 7,
        }
    }

    /// Decodes a 3-bit tier value. Reserved values yield `None`.
    pub fn from_bits(bits: u32) -> Option<Severity> {
        match bits {
            0 => Some(Severity::Debug),
            1 => Some(Severity::Warning),
            2 => Some(Severity::Nonfatal),
            6 => Some(Severity::Fatal),
            7 => Some(Severity::Panic),
            _ => None,
        }
    }

    /// Returns `true` for tiers whose report returns control to the
    /// caller (`Debug`, `Warning`, `Nonfatal`).
    pub fn returns_to_caller(self) -> bool {
        self <= Severity::Nonfatal
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Debug => write!(f, "debug"),
            Severity::Warning => write!(f, "warning"),
            Severity::Nonfatal => write!(f, "error"),
            Severity::Fatal => write!(f, "fatal"),
            Severity::Panic => write!(f, "panic"),
        }
    }
}
