//! Configuration for `rut-core`.
//!
//! This module holds the separator constants, the correlative range used by the
//! generator, and the option structs accepted by `generate` and
//! `generate_many`. Option structs derive `serde` traits so callers can build
//! them from JSON or YAML documents.
//!
//! License: MIT OR Apache-2.0

use anyhow::{Context, Result};
use log::debug;
use serde::{Deserialize, Serialize};

/// Separator inserted between thousand groups of the correlative.
pub const GROUP_SEPARATOR: char = '.';

/// Separator placed between the correlative and the check digit.
pub const CHECK_SEPARATOR: char = '-';

/// Number of RUTs produced by `generate_many` when called without options.
pub const DEFAULT_COUNT: usize = 30;

/// Number of RUTs produced when options are given but `count` is not.
pub const COUNT_WHEN_UNSET: usize = 1;

/// Smallest correlative the generator draws (inclusive).
pub const MIN_CORRELATIVE: u32 = 100_000;

/// Upper bound of generated correlatives (exclusive).
pub const MAX_CORRELATIVE: u32 = 29_100_000;

/// Rendering options for a single generated RUT.
///
/// Missing fields fall back to `true`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(default)]
pub struct GenerateOptions {
    /// Group the correlative with `.` every three digits.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dots: Option<bool>,
    /// Put a `-` before the check digit.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hyphen: Option<bool>,
}

impl GenerateOptions {
    pub fn new(dots: bool, hyphen: bool) -> Self {
        Self { dots: Some(dots), hyphen: Some(hyphen) }
    }

    pub fn dots(&self) -> bool {
        self.dots.unwrap_or(true)
    }

    pub fn hyphen(&self) -> bool {
        self.hyphen.unwrap_or(true)
    }
}

/// Options for `generate_many`.
///
/// An instance with every field unset is treated as an explicitly empty
/// request and yields no RUTs; see [`GenerateManyOptions::is_empty`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(default)]
pub struct GenerateManyOptions {
    /// How many RUTs to produce. Unset yields [`COUNT_WHEN_UNSET`] unless
    /// every other field is unset too.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dots: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hyphen: Option<bool>,
}

impl GenerateManyOptions {
    /// The options used when `generate_many` receives `None`.
    pub fn defaults() -> Self {
        Self {
            count: Some(DEFAULT_COUNT),
            dots: Some(true),
            hyphen: Some(true),
        }
    }

    pub fn with_count(count: usize) -> Self {
        Self { count: Some(count), ..Self::default() }
    }

    /// `true` when no field is set, i.e. the options came from `{}` or from a
    /// document whose keys were all unrecognised.
    pub fn is_empty(&self) -> bool {
        self.count.is_none() && self.dots.is_none() && self.hyphen.is_none()
    }

    /// The per-RUT rendering options carried by this request.
    pub fn generate_options(&self) -> GenerateOptions {
        GenerateOptions { dots: self.dots, hyphen: self.hyphen }
    }

    /// Parses options from a JSON object. Unknown keys are ignored.
    pub fn from_json_str(text: &str) -> Result<Self> {
        let options: Self = serde_json::from_str(text)
            .context("Failed to parse generate options as JSON")?;
        debug!("Parsed generate options from JSON: {:?}", options);
        Ok(options)
    }

    /// Parses options from a YAML mapping. Unknown keys are ignored.
    pub fn from_yaml_str(text: &str) -> Result<Self> {
        let options: Self = serde_yml::from_str(text)
            .context("Failed to parse generate options as YAML")?;
        debug!("Parsed generate options from YAML: {:?}", options);
        Ok(options)
    }
}
