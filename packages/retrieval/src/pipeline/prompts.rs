//! Prompt construction for the result summarizer.
//!
//! The pipeline owns the prompt so every summarizer implementation renders
//! listings identically and the factuality rules live in one place.

use crate::types::listing::Listing;

/// Fixed system instruction for the result summarizer.
///
/// Forbids fabricating data not present in the supplied rows, requires
/// prices in crore/lakh units, and demands a gracious response when the
/// supplied set is a fallback (non-exact) set or empty.
pub const SUMMARY_SYSTEM_INSTRUCTION: &str = "You are a real-estate assistant. \
Use ONLY the given property rows. Write a factual 3-4 line summary. Do not hallucinate. \
Give prices in crore/lakh format. \
If nothing matched the request exactly, reply graciously, for example: \
\"No ready 3BHK options found under ₹1.2 Cr in Baner. Expanding search to Wakad and Thergaon found 4 options.\" \
MUST NOT use terms like \"provided data\"; act as the assistant only.";

/// Build the user prompt for a query and its final candidate set.
///
/// One line per listing, in the dataset's human-readable rendering. An
/// empty candidate set yields an empty data block - the summarizer is
/// still invoked and responds with a no-results message.
pub fn format_summary_prompt(query: &str, listings: &[Listing]) -> String {
    let rows = listings
        .iter()
        .map(Listing::prompt_row)
        .collect::<Vec<_>>()
        .join("\n");

    format!("User query:\n{}\n\nProperty Data:\n{}\n", query, rows)
}
