//! File access wrappers with the toolchain's open-failure policy.

use anvil_diagnostics::{Abort, Session};
use std::fs::{self, File};
use std::io::{self, Read, Seek, SeekFrom};
use std::ops::{BitOr, BitOrAssign};
use std::path::{Path, PathBuf};

/// Flags describing how a file is opened and what it is for.
///
/// Binary access and recoverable open failure are the defaults; the
/// flags opt into the alternatives.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub struct FileFlags(u32);

impl FileFlags {
    /// Binary access, recoverable open failure.
    pub const NONE: FileFlags = FileFlags(0);
    /// Line-oriented text access. Opening works the same either way on
    /// hosts without line-ending translation; the intent is recorded for
    /// those with it.
    pub const TEXT: FileFlags = FileFlags(0x1);
    /// Escalate open failure to a fatal diagnostic instead of returning
    /// `None`.
    pub const FATAL: FileFlags = FileFlags(0x2);
    /// The handle is intended for [`FileView::map`].
    pub const FOR_MAP: FileFlags = FileFlags(0x4);

    /// The raw flag bits.
    pub fn bits(self) -> u32 {
        self.0
    }

    /// Returns `true` if every flag in `other` is set in `self`.
    pub fn contains(self, other: FileFlags) -> bool {
        self.0 & other.0 == other.0
    }
}

impl BitOr for FileFlags {
    type Output = FileFlags;

    fn bitor(self, rhs: FileFlags) -> FileFlags {
        FileFlags(self.0 | rhs.0)
    }
}

impl BitOrAssign for FileFlags {
    fn bitor_assign(&mut self, rhs: FileFlags) {
        self.0 |= rhs.0;
    }
}

/// Opens a file for reading under the toolchain's open-failure policy.
///
/// With [`FileFlags::FATAL`], failure reports a fatal diagnostic through
/// the session and returns its `Abort`; otherwise failure is `Ok(None)`
/// and the caller decides what the missing file means.
pub fn open_read(
    path: &Path,
    flags: FileFlags,
    session: &mut Session,
) -> Result<Option<File>, Abort> {
    match File::open(path) {
        Ok(file) => Ok(Some(file)),
        Err(err) if flags.contains(FileFlags::FATAL) => Err(session.fatal(format!(
            "unable to open input file '{}': {err}",
            path.display()
        ))),
        Err(_) => Ok(None),
    }
}

/// Opens (creating or truncating) a file for writing under the
/// toolchain's open-failure policy.
///
/// Failure handling matches [`open_read`].
pub fn open_write(
    path: &Path,
    flags: FileFlags,
    session: &mut Session,
) -> Result<Option<File>, Abort> {
    match File::create(path) {
        Ok(file) => Ok(Some(file)),
        Err(err) if flags.contains(FileFlags::FATAL) => Err(session.fatal(format!(
            "unable to open output file '{}': {err}",
            path.display()
        ))),
        Err(_) => Ok(None),
    }
}

/// Probes for the existence of a file.
pub fn file_exists(path: &Path) -> bool {
    fs::metadata(path).is_ok()
}

/// The total size of an open file.
pub fn file_size(file: &File) -> io::Result<u64> {
    Ok(file.metadata()?.len())
}

/// The total size of the file at `path`.
pub fn file_size_by_path(path: &Path) -> io::Result<u64> {
    Ok(fs::metadata(path)?.len())
}

/// A read-only view of the byte range `[start, start + len)` of a file.
///
/// The view owns its bytes — it is filled by positioned reads rather
/// than an OS mapping, which behaves identically on every host including
/// strict-alignment ones. Dropping the view releases it.
pub struct FileView {
    bytes: Vec<u8>,
}

impl FileView {
    /// Maps `len` bytes starting at offset `start` of `file`.
    ///
    /// Fails if the range extends past the end of the file.
    pub fn map(file: &mut File, start: u64, len: usize) -> io::Result<FileView> {
        file.seek(SeekFrom::Start(start))?;
        let mut bytes = vec![0u8; len];
        file.read_exact(&mut bytes)?;
        Ok(FileView { bytes })
    }

    /// The viewed bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// The length of the view.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Returns `true` for a zero-length view.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

impl AsRef<[u8]> for FileView {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

/// Errors from output-path derivation.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum PathError {
    /// The derived output path names the input file itself.
    #[error("output file '{}' would overwrite the input file", .0.display())]
    CollidesWithInput(PathBuf),
}

/// Derives an output filename from the input by replacing its extension.
///
/// Refuses to derive a path equal to the input, which would overwrite
/// the source being assembled.
pub fn standard_extension(input: &Path, extension: &str) -> Result<PathBuf, PathError> {
    let output = input.with_extension(extension);
    if output == input {
        return Err(PathError::CollidesWithInput(output));
    }
    Ok(output)
}
