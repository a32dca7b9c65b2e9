//! Domain models for the dental clinic.

mod appointment;
mod catalog;
mod patient;
mod treatment;

pub use appointment::*;
pub use catalog::*;
pub use patient::*;
pub use treatment::*;

use serde::{Deserialize, Deserializer};
use std::fmt::Display;
use std::str::FromStr;

/// Read an optional field where an empty or whitespace-only string means absent.
pub(crate) fn blank_as_none<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    T::Err: Display,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => value.parse().map(Some).map_err(serde::de::Error::custom),
    }
}

/// Trim an optional input string, collapsing blanks to `None`.
pub(crate) fn normalize_optional(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
