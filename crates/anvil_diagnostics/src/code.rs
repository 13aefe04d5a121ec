//! The packed diagnostic code: tier, flags, and warning class in one word.

use crate::flags::DiagFlags;
use crate::severity::Severity;
use crate::warning::WarningClass;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A diagnostic code packing a severity tier, behavioral flags, and a
/// suppressible-warning class into one 32-bit word.
///
/// Layout, which is stable and consumed by external warning-toggle
/// configuration:
///
/// ```text
/// bits  0..3   severity tier
/// bits  4..11  behavioral flags
/// bits 12..32  warning-class index
/// ```
///
/// Encoding and decoding round-trip exactly. The class field leaves room
/// for 2^20 classes; 17 are defined.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct DiagCode(u32);

impl DiagCode {
    const SEVERITY_MASK: u32 = 0x7;
    /// How far the warning-class index is shifted left.
    pub const WARN_SHIFT: u32 = 12;
    /// Mask covering the warning-class field.
    pub const WARN_MASK: u32 = 0xFFFF_F000;

    /// Builds a code with the given tier and flags and no warning class.
    pub fn new(severity: Severity, flags: DiagFlags) -> Self {
        Self(severity.bits() | flags.bits())
    }

    /// Builds a warning-tier code carrying the given warning class.
    pub fn warning(class: WarningClass, flags: DiagFlags) -> Self {
        Self(Severity::Warning.bits() | flags.bits() | (class.index() << Self::WARN_SHIFT))
    }

    /// The same code with its tier replaced.
    pub fn with_severity(self, severity: Severity) -> Self {
        Self((self.0 & !Self::SEVERITY_MASK) | severity.bits())
    }

    /// The severity tier of this code.
    pub fn severity(self) -> Severity {
        // The constructors and from_bits only admit defined tiers.
        Severity::from_bits(self.0 & Self::SEVERITY_MASK).unwrap_or(Severity::Panic)
    }

    /// The behavioral flags of this code.
    pub fn flags(self) -> DiagFlags {
        DiagFlags::from_bits(self.0 & DiagFlags::MASK).unwrap_or(DiagFlags::NONE)
    }

    /// The warning-class index, extracted by the fixed shift and mask
    /// regardless of tier and flag bits.
    pub fn warning_index(self) -> u32 {
        (self.0 & Self::WARN_MASK) >> Self::WARN_SHIFT
    }

    /// The warning class of this code, when the index names a defined one.
    ///
    /// Index 0 decodes to the warnings-as-errors meta-class; on a reported
    /// warning it means "no specific class", and only the
    /// [`Session`](crate::Session) distinguishes the two readings.
    pub fn warning_class(self) -> Option<WarningClass> {
        WarningClass::from_index(self.warning_index())
    }

    /// The raw packed word.
    pub fn bits(self) -> u32 {
        self.0
    }

    /// Rebuilds a code from a raw word, validating that the tier is
    /// defined, no undefined flag bits are set, and the class index names
    /// a defined class.
    pub fn from_bits(bits: u32) -> Option<DiagCode> {
        Severity::from_bits(bits & Self::SEVERITY_MASK)?;
        DiagFlags::from_bits(bits & !Self::SEVERITY_MASK & !Self::WARN_MASK)?;
        WarningClass::from_index((bits & Self::WARN_MASK) >> Self::WARN_SHIFT)?;
        Some(DiagCode(bits))
    }
}

impl fmt::Display for DiagCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.severity(), self.warning_class()) {
            (Severity::Warning, Some(class)) => {
                write!(f, "{} [{}]", self.severity(), class.name())
            }
            (severity, _) => write!(f, "{severity}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severity_and_flags_roundtrip() {
        let code = DiagCode::new(Severity::Nonfatal, DiagFlags::PASS2 | DiagFlags::NOFILE);
        assert_eq!(code.severity(), Severity::Nonfatal);
        assert_eq!(code.flags(), DiagFlags::PASS2 | DiagFlags::NOFILE);
        assert_eq!(code.warning_index(), 0);
    }

    #[test]
    fn warning_class_roundtrip_all_classes() {
        for class in WarningClass::ALL {
            for flags in [DiagFlags::NONE, DiagFlags::PASS1 | DiagFlags::NO_SEVERITY] {
                let code = DiagCode::warning(class, flags);
                assert_eq!(code.severity(), Severity::Warning);
                assert_eq!(code.flags(), flags);
                assert_eq!(code.warning_class(), Some(class));
                assert_eq!(code.warning_index(), class.index());
            }
        }
    }

    #[test]
    fn class_extraction_ignores_tier_and_flags() {
        let base = DiagCode::warning(WarningClass::NumberOverflow, DiagFlags::NONE);
        let noisy = DiagCode::warning(
            WarningClass::NumberOverflow,
            DiagFlags::NOFILE | DiagFlags::USAGE | DiagFlags::PP_LISTMACRO,
        )
        .with_severity(Severity::Nonfatal);
        assert_eq!(noisy.warning_index(), base.warning_index());
    }

    #[test]
    fn with_severity_replaces_only_the_tier() {
        let code = DiagCode::warning(WarningClass::OrphanLabels, DiagFlags::PASS1);
        let promoted = code.with_severity(Severity::Nonfatal);
        assert_eq!(promoted.severity(), Severity::Nonfatal);
        assert_eq!(promoted.flags(), DiagFlags::PASS1);
        assert_eq!(promoted.warning_class(), Some(WarningClass::OrphanLabels));
    }

    #[test]
    fn known_bit_layout() {
        // The layout is a wire format; spot-check the raw words.
        let code = DiagCode::warning(WarningClass::NumberOverflow, DiagFlags::PASS1);
        assert_eq!(code.bits(), 1 | 0x40 | (5 << 12));
        assert_eq!(DiagCode::new(Severity::Panic, DiagFlags::NONE).bits(), 7);
    }

    #[test]
    fn raw_roundtrip() {
        let code = DiagCode::warning(WarningClass::UnknownKeyword, DiagFlags::PASS2);
        assert_eq!(DiagCode::from_bits(code.bits()), Some(code));
    }

    #[test]
    fn from_bits_rejects_malformed_words() {
        assert_eq!(DiagCode::from_bits(3), None); // reserved tier
        assert_eq!(DiagCode::from_bits(0x8), None); // undefined flag bit
        assert_eq!(DiagCode::from_bits(17 << 12), None); // class past the defined range
    }

    #[test]
    fn display() {
        let warning = DiagCode::warning(WarningClass::OrphanLabels, DiagFlags::NONE);
        assert_eq!(format!("{warning}"), "warning [orphan-labels]");
        let fatal = DiagCode::new(Severity::Fatal, DiagFlags::NONE);
        assert_eq!(format!("{fatal}"), "fatal");
    }

    #[test]
    fn serde_is_the_raw_word() {
        let code = DiagCode::warning(WarningClass::User, DiagFlags::NONE);
        let json = serde_json::to_string(&code).unwrap();
        assert_eq!(json, format!("{}", code.bits()));
        let back: DiagCode = serde_json::from_str(&json).unwrap();
        assert_eq!(code, back);
    }
}
