//! Character-class filters applied to raw RUT input.
//!
//! These are the first step of every other operation in the crate: the
//! checksum, the validator and the formatter all read digits through here.
//! Filtering is purely by character class, so garbage input simply shrinks
//! to whatever digits (and `K`s) it happens to contain.

pub mod filters;

pub use filters::{fully_sanitise, sanitise};
