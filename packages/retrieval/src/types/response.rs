//! Response type returned to the caller.

use serde::{Deserialize, Serialize};

use crate::types::listing::Listing;

/// The answer to one query: a natural-language summary plus the final
/// candidate set with all retained listing attributes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryAnswer {
    /// Natural-language summary of the results
    pub summary: String,

    /// Final candidate set, one record per listing
    pub results: Vec<Listing>,
}
