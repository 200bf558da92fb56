//! gui/update/mod.rs
//! Update logic (router).
//! Mutates state in response to `Message` events.

use iced::Task;

use super::state::{App, Message};

pub(crate) mod load;
mod present;

pub(crate) fn update(state: &mut App, message: Message) -> Task<Message> {
    match message {
        // Load
        Message::QuotesLoaded(result) => load::quotes_loaded(state, result),

        // Click
        Message::NextQuote => present::next_quote(state),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::config::Config;
    use crate::core::{DisplayState, LoadFailure, Quote};

    fn seeded_app(seed: u64) -> App {
        App::new(&Config {
            seed: Some(seed),
            ..Config::default()
        })
    }

    fn quote(text: &str, author: &str) -> Quote {
        Quote {
            text: text.into(),
            author: author.into(),
        }
    }

    fn many_quotes() -> Vec<Quote> {
        (0..20)
            .map(|i| quote(&format!("q{i}"), &format!("a{i}")))
            .collect()
    }

    #[test]
    fn boot_starts_exactly_one_load() {
        let (app, _task) = App::boot(&Config::default());
        assert_eq!(app.load_requests, 1);
        assert!(app.loading);
        assert!(app.quotes.is_empty());
        assert_eq!(app.display, DisplayState::loading());
    }

    #[test]
    fn successful_load_shows_a_quote_immediately() {
        let mut app = seeded_app(1);
        let _ = update(&mut app, Message::QuotesLoaded(Ok(vec![quote("A", "X")])));

        assert!(!app.loading);
        assert_eq!(app.quotes.len(), 1);
        assert_eq!(app.display.text, "\"A\"");
        assert_eq!(app.display.author, "— X");
    }

    #[test]
    fn every_failure_kind_shows_fixed_error() {
        let failures = [
            LoadFailure::Network("connection refused".into()),
            LoadFailure::Status(503),
            LoadFailure::Payload("expected value".into()),
        ];

        for failure in failures {
            let mut app = seeded_app(1);
            let _ = update(&mut app, Message::QuotesLoaded(Err(failure)));

            assert!(!app.loading);
            assert!(app.quotes.is_empty());
            assert_eq!(app.display.text, "Unable to load quote.");
            assert_eq!(app.display.author, "");
        }
    }

    #[test]
    fn empty_success_shows_placeholder() {
        let mut app = seeded_app(1);
        let _ = update(&mut app, Message::QuotesLoaded(Ok(Vec::new())));
        assert!(!app.loading);
        assert!(app.quotes.is_empty());
        assert_eq!(app.display, DisplayState::no_quotes());

        // Nothing to pick, so a click keeps the placeholder.
        let _ = update(&mut app, Message::NextQuote);
        assert_eq!(app.display, DisplayState::no_quotes());
    }

    #[test]
    fn click_before_load_keeps_display() {
        let mut app = seeded_app(1);
        let _ = update(&mut app, Message::NextQuote);
        assert_eq!(app.display, DisplayState::loading());
    }

    #[test]
    fn click_after_failure_keeps_error() {
        let mut app = seeded_app(1);
        let _ = update(&mut app, Message::QuotesLoaded(Err(LoadFailure::Status(404))));
        let _ = update(&mut app, Message::NextQuote);
        assert_eq!(app.display, DisplayState::load_failed());
    }

    #[test]
    fn clicks_reselect_without_fetching() {
        let (mut app, _task) = App::boot(&Config {
            seed: Some(5),
            ..Config::default()
        });
        let qs = many_quotes();
        let _ = update(&mut app, Message::QuotesLoaded(Ok(qs.clone())));

        for _ in 0..10 {
            let _ = update(&mut app, Message::NextQuote);

            assert_eq!(app.load_requests, 1);
            assert!(!app.loading);
            assert_eq!(app.quotes, qs);
            assert!(
                qs.iter()
                    .any(|q| DisplayState::from_quote(q) == app.display)
            );
        }
    }

    #[test]
    fn same_seed_same_sequence() {
        let mut a = seeded_app(77);
        let mut b = seeded_app(77);
        let _ = update(&mut a, Message::QuotesLoaded(Ok(many_quotes())));
        let _ = update(&mut b, Message::QuotesLoaded(Ok(many_quotes())));

        for _ in 0..5 {
            assert_eq!(a.display, b.display);
            let _ = update(&mut a, Message::NextQuote);
            let _ = update(&mut b, Message::NextQuote);
        }
    }
}
