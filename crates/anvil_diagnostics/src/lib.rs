//! Diagnostic severity encoding and reporting for the Anvil toolchain.
//!
//! Severity tiers, behavioral flags, and suppressible-warning classes pack
//! into a single [`DiagCode`] whose bit layout is stable — external
//! warning enable/disable configuration references classes by their
//! numeric identity. Reporting runs through a per-[`Session`] swappable
//! [`DiagnosticSink`], and process termination is concentrated in the
//! single [`Abort`] value fatal reports return.

#![warn(missing_docs)]

pub mod code;
pub mod diagnostic;
pub mod flags;
pub mod session;
pub mod severity;
pub mod sink;
pub mod warning;

pub use code::DiagCode;
pub use diagnostic::Diagnostic;
pub use flags::DiagFlags;
pub use session::{Abort, Pass, Session};
pub use severity::Severity;
pub use sink::{CaptureSink, DiagnosticSink, StderrSink};
pub use warning::{WarningClass, WarningSet, WarningToggles};
