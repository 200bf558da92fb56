//! Quotebox GUI
//!
//! # What this program is
//! A small desktop app (built with the `iced` GUI library) that fetches a list of quotes
//! from a web API once, shows one at random, and has a "New quote" button for another.
//!
//! # How Iced works (super simple mental model)
//! - `App` = the *entire memory* of the app (quotes + what's on screen)
//! - `Message` = “something happened” (fetch finished, button clicked)
//! - `update(state, message)` = handles that thing and updates state
//! - `view(state)` = draws UI based on the current state
//!
//! **Message happens -> update changes state -> view redraws**
//!
//! # Flow
//! - Startup: one fetch runs in the background (`Task`).
//! - Fetch done: store the quotes, show a random one right away.
//!   Fetch failed: show "Unable to load quote.".
//! - Click: pick another random quote from memory. No re-fetch.
//!
//! # Architecture constraints (on purpose)
//! - UI layer calls `core::*` for fetching/picking.
//! - `core` knows nothing about iced, so it is testable on its own.

mod config;
mod core;
mod gui;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::config::Config;
use crate::gui::App;
use crate::gui::view::constants::{WINDOW_H, WINDOW_W};

const DEFAULT_LOG_FILTER: &str = "quotebox=info";

fn main() -> iced::Result {
    let config = Config::parse();

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    tracing::info!(
        endpoint = %config.endpoint,
        timeout_secs = config.timeout_secs,
        seeded = config.seed.is_some(),
        "starting quotebox"
    );

    // `iced::application` glues together:
    // - boot (initial state + the startup fetch)
    // - update function (logic)
    // - view function (UI layout)
    iced::application(move || App::boot(&config), gui::update, gui::view)
        .title("Quotebox")
        .window_size((WINDOW_W, WINDOW_H))
        .run()
}
