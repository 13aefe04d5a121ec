//! Suppressible-warning classes and their enable/disable state.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A suppressible-warning class.
///
/// Each class has a stable numeric identity — external configuration
/// toggles classes by index or by name, so identities are never
/// renumbered. Class 0 is the meta-class that promotes every reported
/// warning to a build-failing error.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WarningClass {
    /// Treat reported warnings as errors.
    WarningsAsErrors = 0,
    /// Macro invoked with a suspicious parameter count.
    MacroParams = 1,
    /// Macro expanding to a reference to itself.
    MacroSelfRef = 2,
    /// Macro default-parameter declaration inconsistencies.
    MacroDefaults = 3,
    /// Label alone on its line without a trailing colon.
    OrphanLabels = 4,
    /// Numeric constant does not fit its field.
    NumberOverflow = 5,
    /// Use of GNU ELF extensions.
    GnuElfExtensions = 6,
    /// Floating-point constant overflow.
    FloatOverflow = 7,
    /// Floating-point constant is denormal.
    FloatDenorm = 8,
    /// Floating-point constant underflow.
    FloatUnderflow = 9,
    /// Floating-point constant has too many digits.
    FloatTooLong = 10,
    /// User-requested warning directive.
    User = 11,
    /// LOCK prefix on an instruction that cannot take it.
    LockPrefix = 12,
    /// HLE prefix used where it has no effect.
    HlePrefix = 13,
    /// BND prefix used where it has no effect.
    BndPrefix = 14,
    /// Relocation was zero-extended to fit its field.
    ZextReloc = 15,
    /// Token is not a recognized keyword.
    UnknownKeyword = 16,
}

impl WarningClass {
    /// Every defined class, in index order.
    pub const ALL: [WarningClass; 17] = [
        WarningClass::WarningsAsErrors,
        WarningClass::MacroParams,
        WarningClass::MacroSelfRef,
        WarningClass::MacroDefaults,
        WarningClass::OrphanLabels,
        WarningClass::NumberOverflow,
        WarningClass::GnuElfExtensions,
        WarningClass::FloatOverflow,
        WarningClass::FloatDenorm,
        WarningClass::FloatUnderflow,
        WarningClass::FloatTooLong,
        WarningClass::User,
        WarningClass::LockPrefix,
        WarningClass::HlePrefix,
        WarningClass::BndPrefix,
        WarningClass::ZextReloc,
        WarningClass::UnknownKeyword,
    ];

    /// The highest defined class index.
    pub const MAX_INDEX: u32 = 16;

    /// The stable numeric identity of this class.
    pub fn index(self) -> u32 {
        self as u32
    }

    /// Looks a class up by its stable index.
    pub fn from_index(index: u32) -> Option<WarningClass> {
        Self::ALL.get(index as usize).copied()
    }

    /// The stable configuration name of this class.
    pub fn name(self) -> &'static str {
        match self {
            WarningClass::WarningsAsErrors => "warnings-as-errors",
            WarningClass::MacroParams => "macro-params",
            WarningClass::MacroSelfRef => "macro-self-ref",
            WarningClass::MacroDefaults => "macro-defaults",
            WarningClass::OrphanLabels => "orphan-labels",
            WarningClass::NumberOverflow => "number-overflow",
            WarningClass::GnuElfExtensions => "gnu-elf-extensions",
            WarningClass::FloatOverflow => "float-overflow",
            WarningClass::FloatDenorm => "float-denorm",
            WarningClass::FloatUnderflow => "float-underflow",
            WarningClass::FloatTooLong => "float-too-long",
            WarningClass::User => "user",
            WarningClass::LockPrefix => "lock-prefix",
            WarningClass::HlePrefix => "hle-prefix",
            WarningClass::BndPrefix => "bnd-prefix",
            WarningClass::ZextReloc => "zext-reloc",
            WarningClass::UnknownKeyword => "unknown-keyword",
        }
    }

    /// Looks a class up by its stable configuration name.
    pub fn from_name(name: &str) -> Option<WarningClass> {
        Self::ALL.iter().copied().find(|c| c.name() == name)
    }

    /// Whether this class starts enabled in a fresh [`WarningSet`].
    pub fn default_enabled(self) -> bool {
        !matches!(
            self,
            WarningClass::WarningsAsErrors | WarningClass::GnuElfExtensions
        )
    }
}

impl fmt::Display for WarningClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The enable/disable state of every warning class.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct WarningSet {
    mask: u32,
}

impl WarningSet {
    /// A set with every class in its default state.
    pub fn new() -> Self {
        let mut mask = 0;
        for class in WarningClass::ALL {
            if class.default_enabled() {
                mask |= 1 << class.index();
            }
        }
        Self { mask }
    }

    /// Returns `true` if `class` is enabled.
    pub fn enabled(self, class: WarningClass) -> bool {
        self.mask & (1 << class.index()) != 0
    }

    /// Enables `class`.
    pub fn enable(&mut self, class: WarningClass) {
        self.mask |= 1 << class.index();
    }

    /// Disables `class`.
    pub fn disable(&mut self, class: WarningClass) {
        self.mask &= !(1 << class.index());
    }

    /// Sets `class` to the given state.
    pub fn set(&mut self, class: WarningClass, on: bool) {
        if on {
            self.enable(class);
        } else {
            self.disable(class);
        }
    }

    /// Applies a host-configured batch of toggles, disables last so a
    /// class named in both lists ends up disabled.
    pub fn apply(&mut self, toggles: &WarningToggles) {
        for &class in &toggles.enable {
            self.enable(class);
        }
        for &class in &toggles.disable {
            self.disable(class);
        }
    }
}

impl Default for WarningSet {
    fn default() -> Self {
        Self::new()
    }
}

/// Warning toggles as they appear in host configuration.
///
/// Classes are referenced by their stable names, e.g.
///
/// ```toml
/// enable = ["warnings-as-errors"]
/// disable = ["orphan-labels"]
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WarningToggles {
    /// Classes to enable.
    #[serde(default)]
    pub enable: Vec<WarningClass>,
    /// Classes to disable.
    #[serde(default)]
    pub disable: Vec<WarningClass>,
}
