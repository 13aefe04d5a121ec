//! Byte-level output for the Anvil assembler toolchain.
//!
//! Machine-code fields are emitted as little-endian byte sequences
//! regardless of host byte order or alignment: [`wire`] encodes into
//! in-memory buffers, [`stream`] performs the same encoding directly on
//! output streams (with an efficient zero-fill for padding), and [`file`]
//! wraps file access with the toolchain's fatal-vs-recoverable open
//! policy, byte-range views, and output-name derivation.

#![warn(missing_docs)]

pub mod file;
pub mod stream;
pub mod wire;

pub use file::{
    file_exists, file_size, file_size_by_path, open_read, open_write, standard_extension,
    FileFlags, FileView, PathError,
};
pub use stream::{
    write_u16, write_u32, write_u64, write_u8, write_uint, write_zeroes, ZERO_BUF_SIZE,
};
pub use wire::{
    get_u16, get_u32, get_u64, get_u8, get_uint, put_u16, put_u32, put_u64, put_u8, put_uint,
};
