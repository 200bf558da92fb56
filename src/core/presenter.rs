//! core/presenter.rs
//! Quote Presenter: pick one quote at random and format it for display.
//!
//! No iced in here. The GUI passes in the collection + its RNG.
//!
//! Empty collection (click before load finished, or load failed):
//! returns `None` and the caller keeps whatever is on screen.

use rand::Rng;

use super::types::{DisplayState, Quote};

/// Uniform index in `[0, len)`, or `None` when there is nothing to pick.
pub fn pick_index<R: Rng + ?Sized>(len: usize, rng: &mut R) -> Option<usize> {
    if len == 0 {
        return None;
    }
    Some(rng.random_range(0..len))
}

pub fn show_random<R: Rng + ?Sized>(quotes: &[Quote], rng: &mut R) -> Option<DisplayState> {
    let i = pick_index(quotes.len(), rng)?;
    quotes.get(i).map(DisplayState::from_quote)
}
