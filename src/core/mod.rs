//! core/mod.rs
//!
//! The brain of the app:
//! - Fetch the quote list (network IO)
//! - Pick a random quote and format it
//! - Return plain data structs for the GUI to render
//!
//! This keeps the GUI dumb: it only stores what core hands back.

pub mod error;
pub mod loader;
pub mod presenter;
pub mod types;

pub use error::LoadFailure;
pub use types::{DisplayState, Quote};
