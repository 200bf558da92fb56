//! GUI state + messages.
//! Pure data definitions used by update + view.

use std::time::Duration;

use iced::Task;
use rand::rngs::StdRng;

use crate::config::Config;
use crate::core::{DisplayState, LoadFailure, Quote};

use super::update::load::start_load;

/// App state
pub(crate) struct App {
    // Where + how to fetch
    pub endpoint: String,
    pub timeout: Duration,

    // Library
    /// Empty until the load succeeds; replaced once, never edited.
    pub quotes: Vec<Quote>,

    // Screen
    pub display: DisplayState,

    // Load bookkeeping
    pub loading: bool,
    /// How many fetches were started. Clicking "New quote" must never bump this.
    pub load_requests: usize,

    pub rng: StdRng,
}

impl App {
    pub(crate) fn new(config: &Config) -> Self {
        Self {
            endpoint: config.endpoint.clone(),
            timeout: config.timeout(),

            quotes: Vec::new(),

            display: DisplayState::loading(),

            loading: false,
            load_requests: 0,

            rng: config.rng(),
        }
    }

    /// Initial state + the one startup fetch.
    pub(crate) fn boot(config: &Config) -> (Self, Task<Message>) {
        let mut app = Self::new(config);
        let task = start_load(&mut app);
        (app, task)
    }
}

/// Message = “something happened”.
#[derive(Debug, Clone)]
pub(crate) enum Message {
    /// Startup fetch finished.
    QuotesLoaded(Result<Vec<Quote>, LoadFailure>),
    /// User clicked "New quote".
    NextQuote,
}
