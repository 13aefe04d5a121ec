//! Source position tracking for the Anvil assembler toolchain.
//!
//! This crate owns the notion of "where are we in the input": the current
//! filename and line number, plus a change-detection protocol that lets
//! callers invoked on every statement learn cheaply whether the position
//! moved since they last looked.

#![warn(missing_docs)]

pub mod location;

pub use location::{Location, LocationCache, LocationDelta, SourceTracker};
