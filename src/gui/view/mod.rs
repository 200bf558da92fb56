//! GUI renderer (reads state, produces widgets; no mutation).

pub(crate) mod constants;

use iced::widget::{Container, button, column, container, text};
use iced::{Alignment, Length};

use super::state::{App, Message};
use constants::{AUTHOR_TEXT, CONTENT_MAX_W, PADDING, QUOTE_TEXT, SPACING};

pub(crate) fn view(state: &App) -> Container<'_, Message> {
    let quote = text(state.display.text.as_str()).size(QUOTE_TEXT);
    let author = text(state.display.author.as_str()).size(AUTHOR_TEXT);

    // Nothing to pick from -> button is inert (update would no-op anyway).
    let next_btn = if state.loading {
        button("Loading…")
    } else if state.quotes.is_empty() {
        button("New quote")
    } else {
        button("New quote").on_press(Message::NextQuote)
    };

    let content = column![quote, author, next_btn]
        .spacing(SPACING)
        .align_x(Alignment::Center)
        .max_width(CONTENT_MAX_W);

    container(content)
        .padding(PADDING)
        .center_x(Length::Fill)
        .center_y(Length::Fill)
}
