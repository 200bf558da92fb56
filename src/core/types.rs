//! Core data types shared between core logic and the UI.
//!
//! Rule of thumb:
//! - These structs should be “boring bags of data”
//! - No GUI code
//! - No network code
//!
//! 'Quote' is ONE record from the quotes API.
//! 'DisplayState' is what the two text fields on screen currently say.

use serde::Deserialize;

/// Shown in the quote field when the load fails (any reason).
pub const LOAD_FAILED_TEXT: &str = "Unable to load quote.";

/// Shown until the first load finishes.
pub const LOADING_TEXT: &str = "Loading…";

/// Shown when the API answered fine but had nothing in it.
pub const NO_QUOTES_TEXT: &str = "No quotes available.";

/// Prefix in front of the author name.
pub const ATTRIBUTION: &str = "— ";

/// One quote record.
///
/// The API calls the text field `quote`; we call it `text`.
/// Any other keys in the JSON object (like `id`) are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Quote {
    #[serde(rename = "quote")]
    pub text: String,
    pub author: String,
}

/// Top-level JSON body: `{ "quotes": [...], "total": .., ... }`.
/// Only the `quotes` array matters.
#[derive(Debug, Deserialize)]
pub(crate) struct QuotesPayload {
    pub quotes: Vec<Quote>,
}

/// The two display fields: quote text + author line.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DisplayState {
    pub text: String,
    pub author: String,
}

impl DisplayState {
    pub fn loading() -> Self {
        Self {
            text: LOADING_TEXT.to_string(),
            author: String::new(),
        }
    }

    pub fn load_failed() -> Self {
        Self {
            text: LOAD_FAILED_TEXT.to_string(),
            author: String::new(),
        }
    }

    pub fn no_quotes() -> Self {
        Self {
            text: NO_QUOTES_TEXT.to_string(),
            author: String::new(),
        }
    }

    /// Ex: Quote { "A", "X" } -> text `"A"`, author `— X`
    pub fn from_quote(quote: &Quote) -> Self {
        Self {
            text: format!("\"{}\"", quote.text),
            author: format!("{ATTRIBUTION}{}", quote.author),
        }
    }
}
