//! Behavioral flags carried by a diagnostic, independent of its tier.

use serde::{Deserialize, Serialize};
use std::ops::{BitOr, BitOrAssign};

/// A set of behavioral flags for one diagnostic.
///
/// Flags occupy bits 4 through 10 of a packed [`DiagCode`](crate::DiagCode),
/// disjoint from both the severity tier (bits 0–2) and the warning class
/// (bits 12 and up). No `bitflags`-style crate is involved; the bit values
/// themselves are part of the stable code layout.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, Serialize, Deserialize)]
pub struct DiagFlags(u32);

impl DiagFlags {
    /// No flags.
    pub const NONE: DiagFlags = DiagFlags(0);
    /// Suppress the source file name and line number in the rendering.
    pub const NOFILE: DiagFlags = DiagFlags(0x10);
    /// Ask the host to follow the message with its usage summary.
    pub const USAGE: DiagFlags = DiagFlags(0x20);
    /// Report only on the first pass.
    pub const PASS1: DiagFlags = DiagFlags(0x40);
    /// Report only on the final pass.
    pub const PASS2: DiagFlags = DiagFlags(0x80);
    /// Suppress the severity label in the rendering.
    pub const NO_SEVERITY: DiagFlags = DiagFlags(0x100);
    /// Raised from a preprocessor conditional precondition.
    pub const PP_PRECOND: DiagFlags = DiagFlags(0x200);
    /// Ask the preprocessor to list the macro expansion chain afterwards.
    pub const PP_LISTMACRO: DiagFlags = DiagFlags(0x400);

    /// Mask of every defined flag bit.
    pub const MASK: u32 = 0x7f0;

    /// The raw flag bits.
    pub fn bits(self) -> u32 {
        self.0
    }

    /// Builds a flag set from raw bits, rejecting bits outside
    /// [`MASK`](Self::MASK).
    pub fn from_bits(bits: u32) -> Option<DiagFlags> {
        ((bits & !Self::MASK) == 0).then_some(DiagFlags(bits))
    }

    /// Returns `true` if every flag in `other` is set in `self`.
    pub fn contains(self, other: DiagFlags) -> bool {
        self.0 & other.0 == other.0
    }

    /// Returns `true` if no flags are set.
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl BitOr for DiagFlags {
    type Output = DiagFlags;

    fn bitor(self, rhs: DiagFlags) -> DiagFlags {
        DiagFlags(self.0 | rhs.0)
    }
}

impl BitOrAssign for DiagFlags {
    fn bitor_assign(&mut self, rhs: DiagFlags) {
        self.0 |= rhs.0;
    }
}
