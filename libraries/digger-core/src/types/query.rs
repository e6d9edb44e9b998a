//! Listing and search request types

use crate::error::{DiggerError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Offset/count window over the store's default ordering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    /// Number of records to skip
    #[serde(default)]
    pub offset: u32,
    /// Maximum number of records to return
    #[serde(default = "default_count")]
    pub count: u32,
}

fn default_count() -> u32 {
    10
}

impl PageRequest {
    /// Create a page request
    pub fn new(offset: u32, count: u32) -> Self {
        Self { offset, count }
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            offset: 0,
            count: default_count(),
        }
    }
}

/// Album fields covered by the full-text index
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchField {
    Artist,
    Owner,
    Title,
    Format,
    Comments,
}

impl SearchField {
    /// Every searchable field, in schema order
    pub const ALL: [SearchField; 5] = [
        SearchField::Artist,
        SearchField::Owner,
        SearchField::Title,
        SearchField::Format,
        SearchField::Comments,
    ];

    /// Field name, identical on the wire and in the store
    pub fn as_str(&self) -> &'static str {
        match self {
            SearchField::Artist => "artist",
            SearchField::Owner => "owner",
            SearchField::Title => "title",
            SearchField::Format => "format",
            SearchField::Comments => "comments",
        }
    }
}

impl fmt::Display for SearchField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SearchField {
    type Err = DiggerError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| {
                let allowed = Self::ALL.map(|f| f.as_str()).join(", ");
                DiggerError::invalid_input(
                    "search",
                    format!("'{}' is not searchable (expected one of: {})", s, allowed),
                )
            })
    }
}

/// A single-field full-text search
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    pub field: SearchField,
    pub value: String,
}

impl SearchRequest {
    /// Build a search request, rejecting values with nothing to match on
    pub fn new(field: SearchField, value: impl Into<String>) -> Result<Self> {
        let value = value.into();
        let request = Self { field, value };
        if request.terms().is_empty() {
            return Err(DiggerError::invalid_input(
                request.field.as_str(),
                "search value must contain at least one word",
            ));
        }
        Ok(request)
    }

    /// Build a search request from decoded query-string pairs
    ///
    /// Exactly one `field=value` pair is accepted.
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Result<Self> {
        let mut pairs = pairs.into_iter();
        match (pairs.next(), pairs.next()) {
            (Some((field, value)), None) => Self::new(field.parse()?, value),
            (None, _) => Err(DiggerError::invalid_input(
                "search",
                "expected one field=value query parameter",
            )),
            (Some(_), Some(_)) => Err(DiggerError::invalid_input(
                "search",
                "only one field=value query parameter is allowed",
            )),
        }
    }

    /// Alphanumeric runs of the value
    ///
    /// Each term is matched as a quoted phrase, so the index tokenizer may
    /// split it further without changing the result.
    pub fn terms(&self) -> Vec<&str> {
        self.value
            .split(|c: char| !c.is_alphanumeric())
            .filter(|term| !term.is_empty())
            .collect()
    }
}
