//! Shared foundational utilities for the Anvil assembler toolchain.
//!
//! This crate provides the numeric substrate the rest of the toolchain is
//! built on: fixed-width range checks for operand fields, bit-width
//! truncation with sign extension, bit-log and alignment helpers, sorted
//! keyword lookup, numeric literal scanning, and a removal-safe sequence
//! type for statement chains.

#![warn(missing_docs)]

pub mod chain;
pub mod lookup;
pub mod num;
pub mod scan;

pub use chain::Chain;
pub use lookup::{keyword_index, keyword_index_ignore_case};
pub use num::{
    align_up, alignlog2, ilog2, is_aligned, is_power2, overflows, signed_bits, OverflowPolicy,
};
pub use scan::{opt_val, read_num, read_str_num, skip_spaces, split_word, NumError};
