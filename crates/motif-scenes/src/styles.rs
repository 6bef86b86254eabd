//! Shared text styles for the film.

use motif_core::Color;
use motif_scene::TextStyle;

pub(crate) fn title(color: Color) -> TextStyle {
    TextStyle::new(0.9, color)
}

pub(crate) fn heading(color: Color) -> TextStyle {
    TextStyle::new(0.65, color)
}

pub(crate) fn body() -> TextStyle {
    TextStyle::new(0.5, Color::WHITE)
}

pub(crate) fn small() -> TextStyle {
    TextStyle::new(0.35, Color::WHITE)
}

pub(crate) fn formula() -> TextStyle {
    TextStyle::new(0.55, Color::WHITE)
}
