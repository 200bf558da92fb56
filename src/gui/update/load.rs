//! gui/update/load.rs
//! Load lifecycle + async boundary.
//!
//! - `start_load` kicks off the one network fetch as a `Task`.
//! - The result comes back as `Message::QuotesLoaded(...)`.
//! - `quotes_loaded` is the error boundary: failures become the fixed
//!   on-screen message and stop here.

use iced::Task;
use tracing::{info, warn};

use crate::core::loader;
use crate::core::{DisplayState, LoadFailure, Quote};

use super::super::state::{App, Message};
use super::present::next_quote;

pub(crate) fn start_load(state: &mut App) -> Task<Message> {
    if state.loading {
        return Task::none();
    }

    let client = match loader::build_client(state.timeout) {
        Ok(client) => client,
        Err(e) => {
            warn!(error = %e, "could not build HTTP client");
            state.display = DisplayState::load_failed();
            return Task::none();
        }
    };

    state.loading = true;
    state.load_requests += 1;
    state.display = DisplayState::loading();

    info!(endpoint = %state.endpoint, "fetching quotes");

    Task::perform(
        loader::fetch_quotes(client, state.endpoint.clone()),
        Message::QuotesLoaded,
    )
}

pub(crate) fn quotes_loaded(
    state: &mut App,
    result: Result<Vec<Quote>, LoadFailure>,
) -> Task<Message> {
    state.loading = false;

    match result {
        Ok(quotes) => {
            info!(count = quotes.len(), "quotes loaded");

            state.quotes = quotes;

            if state.quotes.is_empty() {
                state.display = DisplayState::no_quotes();
                return Task::none();
            }

            // Show something right away, no click needed.
            next_quote(state)
        }
        Err(e) => {
            warn!(error = %e, "unable to load quotes");
            state.quotes.clear();
            state.display = DisplayState::load_failed();
            Task::none()
        }
    }
}
