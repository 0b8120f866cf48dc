//! Wire records and endpoint layout of the remote trivia catalog.
//!
//! The catalog exposes two read-only listings: a page of categories starting at
//! an offset, and every clue filed under one category id. Only the fields the
//! game needs are modeled; anything else in a response is ignored.

#![no_std]

extern crate alloc;

use alloc::format;
use alloc::string::String;
use serde::{Deserialize, Serialize};

/// Catalog base used when no override is configured.
pub const DEFAULT_API_BASE: &str = "https://jservice.io/api";

/// Identifier of a category in the remote catalog.
pub type CategoryId = u64;

/// One entry of the category listing.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryRecord {
    pub id: CategoryId,
    pub title: String,
    #[serde(default)]
    pub clues_count: Option<u32>,
}

/// One clue of a category. Questions and answers can come back as `null` for
/// retracted clues, those decode as empty strings.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClueRecord {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub question: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub answer: String,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Builds request URLs against a catalog base.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Endpoint {
    base: String,
}

impl Endpoint {
    pub fn new(base: impl Into<String>) -> Self {
        let mut base = base.into();
        while base.ends_with('/') {
            base.pop();
        }
        Self { base }
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    /// `GET` listing `count` categories starting at `offset`.
    pub fn categories(&self, count: u16, offset: u32) -> String {
        format!("{}/categories?count={}&offset={}", self.base, count, offset)
    }

    /// `GET` listing every clue filed under `id`.
    pub fn clues(&self, id: CategoryId) -> String {
        format!("{}/clues?category={}", self.base, id)
    }
}

impl Default for Endpoint {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE)
    }
}
