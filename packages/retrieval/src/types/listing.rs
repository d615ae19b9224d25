//! Listing type - one property record in the catalog.

use serde::{Deserialize, Serialize};

/// A single property listing.
///
/// Listings are immutable for the lifetime of a query; the catalog is
/// loaded once at startup and shared read-only.
///
/// Wire and catalog field names follow the property dataset's camelCase
/// schema (`projectName`, `fullAddress`, `type`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Listing {
    /// Stable catalog identifier
    pub id: u64,

    /// Project or building name
    #[serde(rename = "projectName")]
    pub project_name: String,

    /// City the property is in
    pub city: String,

    /// Unit type token, e.g. "2BHK", "3BHK"
    #[serde(rename = "type")]
    pub unit_type: String,

    /// Asking price in rupees (base currency unit)
    pub price: u64,

    /// Construction status, e.g. "Under Construction", "Ready to Move"
    pub status: String,

    /// Nearby landmark
    pub landmark: String,

    /// Full postal address
    #[serde(rename = "fullAddress")]
    pub full_address: String,

    /// Concatenated human-readable description the semantic index was
    /// built over. Stable join key between recall output and the catalog.
    pub search_text: String,
}

impl Listing {
    /// One prompt row for the summarizer, matching the dataset's
    /// human-readable rendering of a listing.
    pub fn prompt_row(&self) -> String {
        format!(
            "{}, {}, located at {} {}, Price ₹{}, Status {}",
            self.project_name, self.unit_type, self.landmark, self.city, self.price, self.status
        )
    }
}
