//! gui/update/present.rs
//! "New quote" click -> pick + display. Never touches the network.

use iced::Task;
use tracing::debug;

use crate::core::presenter;

use super::super::state::{App, Message};

pub(crate) fn next_quote(state: &mut App) -> Task<Message> {
    match presenter::show_random(&state.quotes, &mut state.rng) {
        Some(shown) => {
            debug!(author = %shown.author, "showing quote");
            state.display = shown;
        }
        None => {
            // Nothing loaded (yet, or ever). Leave the screen as is.
            debug!("no quotes to pick from");
        }
    }

    Task::none()
}
