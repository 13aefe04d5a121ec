//! The current (file, line) position and its change-detection protocol.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// A snapshot of a source position.
///
/// The filename is a shared string: positions referring to the same file
/// hold clones of one allocation, and the tracker replaces (never mutates)
/// it on file change.
#[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct Location {
    /// The name of the source file.
    pub file: Arc<str>,
    /// The 1-based line number within the file.
    pub line: i32,
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.file, self.line)
    }
}

/// What moved since a caller's cached copy of the position.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum LocationDelta {
    /// Neither the filename nor the line changed.
    Unchanged,
    /// Same file, line moved by the contained nonzero amount.
    LineShift(i32),
    /// The filename changed. Takes precedence over any simultaneous line
    /// difference; the caller must refresh everything it derived from the
    /// old name.
    FileChanged,
}

/// The current source position of one compilation pipeline.
///
/// A multi-pass assembler revisits the same logical position many times,
/// and position consumers (listing writers, diagnostic emitters) are
/// invoked on every statement. [`sync`](Self::sync) tells such a caller
/// what moved since its last look for the price of a pointer comparison
/// and an integer subtraction in the common case.
#[derive(Clone, Debug)]
pub struct SourceTracker {
    file: Arc<str>,
    line: i32,
}

impl SourceTracker {
    /// Creates a tracker positioned at line 0 of an unnamed file.
    pub fn new() -> Self {
        Self {
            file: Arc::from(""),
            line: 0,
        }
    }

    /// Replaces the current filename, returning the previous one.
    pub fn set_fname(&mut self, name: impl Into<Arc<str>>) -> Arc<str> {
        std::mem::replace(&mut self.file, name.into())
    }

    /// Replaces the current line number, returning the previous one.
    pub fn set_line(&mut self, line: i32) -> i32 {
        std::mem::replace(&mut self.line, line)
    }

    /// Sets both line and filename when the previous values are not needed.
    pub fn set(&mut self, line: i32, name: impl Into<Arc<str>>) {
        self.file = name.into();
        self.line = line;
    }

    /// The current filename.
    pub fn fname(&self) -> &str {
        &self.file
    }

    /// The current line number.
    pub fn line(&self) -> i32 {
        self.line
    }

    /// A snapshot of the current position, sharing the filename string.
    pub fn location(&self) -> Location {
        Location {
            file: Arc::clone(&self.file),
            line: self.line,
        }
    }

    /// A fresh cache observing the current position.
    pub fn cache(&self) -> LocationCache {
        LocationCache {
            file: Arc::clone(&self.file),
            line: self.line,
        }
    }

    /// Compares the current position against `cache`, updates the cache,
    /// and reports what moved.
    ///
    /// A filename replacement wins over any line movement. When only the
    /// line moved, the shift is `current - cached`. Because the filename
    /// is replaced rather than mutated, the unchanged-file check is a
    /// pointer comparison; the string itself is only walked when the
    /// pointer differs.
    pub fn sync(&self, cache: &mut LocationCache) -> LocationDelta {
        if !Arc::ptr_eq(&self.file, &cache.file) {
            if self.file != cache.file {
                cache.file = Arc::clone(&self.file);
                cache.line = self.line;
                return LocationDelta::FileChanged;
            }
            // Same name in a fresh allocation: re-point the cache so the
            // next sync takes the pointer fast path.
            cache.file = Arc::clone(&self.file);
        }
        let shift = self.line.wrapping_sub(cache.line);
        if shift == 0 {
            LocationDelta::Unchanged
        } else {
            cache.line = self.line;
            LocationDelta::LineShift(shift)
        }
    }
}

impl Default for SourceTracker {
    fn default() -> Self {
        Self::new()
    }
}

/// A caller-held copy of the last observed position.
///
/// Fed to [`SourceTracker::sync`], which refreshes it in place.
#[derive(Clone, Debug)]
pub struct LocationCache {
    file: Arc<str>,
    line: i32,
}

impl LocationCache {
    /// The cached filename.
    pub fn fname(&self) -> &str {
        &self.file
    }

    /// The cached line number.
    pub fn line(&self) -> i32 {
        self.line
    }
}
