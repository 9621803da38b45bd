// rut-core/src/lib.rs
//! # RUT Core Library
//!
//! `rut-core` validates, sanitises, formats and generates Chilean RUT numbers
//! (Rol Único Tributario): a numeric *correlative* followed by a modulo-11
//! *check digit* (`0`-`9` or `K`).
//!
//! Every operation is a pure string transform. There is no I/O and no shared
//! mutable state; the only external resource is the random source used by the
//! generator.
//!
//! ## Modules
//!
//! * `sanitizers`: Character-class filters (`sanitise`, `fully_sanitise`).
//! * `validators`: Check digit computation and layout + checksum validation.
//! * `formatting`: Thousand grouping and display formatting.
//! * `generator`: Random valid RUTs, singly or in batches.
//! * `rut`: The validated [`Rut`] value type.
//! * `config`: Separator constants and generator options.
//! * `errors`: The [`RutError`] type returned by the checked APIs.
//!
//! The checksum itself lives in the `no_std` `rut-checksum` crate.
//!
//! ## Usage Example
//!
//! ```rust
//! use rut_core::{check_digit, format, generate_many, sanitise, validate, GenerateManyOptions, Rut};
//!
//! assert!(validate("23.831.058-K"));
//! assert!(!validate("11.553.392-3"));
//!
//! assert_eq!(check_digit("23.831.058"), 'K');
//! assert_eq!(format(&sanitise("1.108.244-0")), "1.108.244-0");
//!
//! let rut: Rut = "15.638.169-1".parse().unwrap();
//! assert_eq!(rut.correlative(), 15_638_169);
//!
//! let batch = generate_many(Some(&GenerateManyOptions::with_count(5)));
//! assert!(batch.iter().all(|r| validate(r)));
//! ```
//!
//! ## Error Handling
//!
//! `validate` answers with a `bool`. Only the checked entry points
//! ([`Rut::parse`], [`try_format`]) return [`RutError`]; option parsing
//! returns `anyhow::Result`.
//!
//! ---
//! License: MIT OR Apache-2.0

pub mod config;
pub mod errors;
pub mod formatting;
pub mod generator;
pub mod rut;
pub mod sanitizers;
pub mod validators;

/// Re-exports the separator constants and generator options.
pub use config::{
    GenerateManyOptions,
    GenerateOptions,
    CHECK_SEPARATOR,
    COUNT_WHEN_UNSET,
    DEFAULT_COUNT,
    GROUP_SEPARATOR,
    MAX_CORRELATIVE,
    MIN_CORRELATIVE,
};

/// Re-exports the custom error type for clear error reporting.
pub use errors::RutError;

pub use formatting::{format, group_thousands, try_format};
pub use generator::{generate, generate_many, generate_many_with_rng, generate_with_rng};
pub use rut::{Rut, MAX_RUT_CORRELATIVE, MIN_RUT_CORRELATIVE};
pub use sanitizers::{fully_sanitise, sanitise};
pub use validators::{check_digit, has_valid_layout, validate};

/// Re-exports the check digit value type from the checksum engine.
pub use rut_checksum::CheckDigit;
