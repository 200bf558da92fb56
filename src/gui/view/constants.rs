//! View constants (layout/sizing).

pub(crate) const QUOTE_TEXT: f32 = 24.0;
pub(crate) const AUTHOR_TEXT: f32 = 16.0;

pub(crate) const CONTENT_MAX_W: f32 = 560.0;
pub(crate) const SPACING: f32 = 16.0;
pub(crate) const PADDING: f32 = 24.0;

pub(crate) const WINDOW_W: f32 = 640.0;
pub(crate) const WINDOW_H: f32 = 320.0;
