//! Parameter structures shared by the catalog and its front ends.
//!
//! These types carry caller input (keys, lookups, JSON payloads) into the
//! core and perform the validation that turns malformed input into
//! [`ArmoryError::InvalidInput`].

use std::{fmt, str::FromStr};

use serde::{de::DeserializeOwned, Deserialize, Serialize};

use crate::error::{ArmoryError, Result};

/// Identity of one stored resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResourceKey(i64);

impl ResourceKey {
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    pub fn get(self) -> i64 {
        self.0
    }
}

impl From<i64> for ResourceKey {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl fmt::Display for ResourceKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ResourceKey {
    type Err = ArmoryError;

    fn from_str(s: &str) -> Result<Self> {
        s.trim().parse::<i64>().map(Self).map_err(|_| {
            ArmoryError::invalid_input("id").with_reason(format!("'{s}' is not a valid ID"))
        })
    }
}

/// How a lookup value is compared against the column.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchMode {
    /// Column equals the value
    #[default]
    Exact,
    /// Column starts with the value (text columns only)
    Prefix,
}

/// A single-column predicate for fetching resources.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lookup {
    /// Schema column name
    pub column: String,
    /// Raw value, converted to the column's kind before binding
    pub value: String,
    #[serde(default)]
    pub mode: MatchMode,
}

impl Lookup {
    pub fn exact(column: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            column: column.into(),
            value: value.into(),
            mode: MatchMode::Exact,
        }
    }

    pub fn prefix(column: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            column: column.into(),
            value: value.into(),
            mode: MatchMode::Prefix,
        }
    }
}

/// Capitalizes the first letter of every word and leaves the rest as typed.
///
/// A letter starts a word when it follows anything that is not a letter,
/// digit or underscore, so "dimitri alexandre" becomes "Dimitri Alexandre"
/// and "o'neil" becomes "O'Neil".
pub fn title_case(input: &str) -> String {
    let mut output = String::with_capacity(input.len());
    let mut previous: Option<char> = None;
    for c in input.chars() {
        let starts_word = !matches!(previous, Some(p) if p.is_alphanumeric() || p == '_');
        if starts_word {
            output.extend(c.to_uppercase());
        } else {
            output.push(c);
        }
        previous = Some(c);
    }
    output
}

/// Decodes a JSON request body into a resource or a patch.
///
/// Any decoding failure, including unknown fields on a patch, is reported
/// as invalid input for the `payload` field.
pub fn decode_payload<T: DeserializeOwned>(body: &str) -> Result<T> {
    serde_json::from_str(body)
        .map_err(|e| ArmoryError::invalid_input("payload").with_reason(e.to_string()))
}
