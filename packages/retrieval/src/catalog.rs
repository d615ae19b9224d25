//! Read-only listing catalog.
//!
//! The catalog is loaded once at startup and shared across queries as
//! immutable state (`Arc<Catalog>`). No query ever mutates it, so
//! concurrent reads need no locking.

use std::collections::HashSet;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use crate::error::Result;
use crate::types::listing::Listing;

/// The full set of property listings the service answers over.
#[derive(Debug, Clone)]
pub struct Catalog {
    listings: Vec<Listing>,
}

impl Catalog {
    /// Build a catalog from already-loaded listings.
    pub fn from_listings(listings: Vec<Listing>) -> Self {
        Self { listings }
    }

    /// Load the catalog from a JSON file (an array of listing records).
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    /// Load the catalog from any JSON reader.
    pub fn from_reader(reader: impl Read) -> Result<Self> {
        let listings: Vec<Listing> = serde_json::from_reader(reader)?;
        Ok(Self::from_listings(listings))
    }

    /// All listings, in catalog order.
    pub fn listings(&self) -> &[Listing] {
        &self.listings
    }

    /// Number of listings.
    pub fn len(&self) -> usize {
        self.listings.len()
    }

    /// True if the catalog holds no listings.
    pub fn is_empty(&self) -> bool {
        self.listings.is_empty()
    }

    /// The `search_text` column, in catalog order. Used to build the
    /// semantic index at startup.
    pub fn search_texts(&self) -> Vec<&str> {
        self.listings.iter().map(|l| l.search_text.as_str()).collect()
    }

    /// Join recall snippets back to catalog rows.
    ///
    /// A listing is included when its `search_text` exactly equals one of
    /// the snippets. The core owns this join, not the recall service; the
    /// snippet set is unordered and the result keeps catalog order.
    pub fn match_snippets(&self, snippets: &[String]) -> Vec<Listing> {
        let wanted: HashSet<&str> = snippets.iter().map(String::as_str).collect();
        self.listings
            .iter()
            .filter(|l| wanted.contains(l.search_text.as_str()))
            .cloned()
            .collect()
    }
}
