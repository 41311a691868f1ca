//! Contains the ANSI escape codes used to color and style console output.
//!
//! Escape codes are written only while formatting is enabled, see [`set_enabled`].

use std::{
    fmt::Display,
    sync::atomic::{AtomicBool, Ordering},
};

static ENABLED: AtomicBool = AtomicBool::new(true);

/// Turns the escape codes on or off for every [`WithStyle`] and [`WithColor`] displayed
/// afterwards.
pub fn set_enabled(enabled: bool) { ENABLED.store(enabled, Ordering::Relaxed); }

/// Checks whether the escape codes are currently written.
#[must_use]
pub fn is_enabled() -> bool { ENABLED.load(Ordering::Relaxed) }

fn write_escaped(
    f: &mut std::fmt::Formatter<'_>,
    code: &str,
    display: &impl Display,
) -> std::fmt::Result {
    if is_enabled() {
        write!(f, "{code}{display}\x1B[0m")
    } else {
        write!(f, "{display}")
    }
}

/// Represents a style that can be applied to the text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[allow(missing_docs)]
pub enum Style {
    Bold,
    Underline,
}

impl Style {
    /// Applies the style to the given displayable object.
    pub fn with<T>(self, display: T) -> WithStyle<T> {
        WithStyle {
            style: self,
            display,
        }
    }
}

/// Is a struct implementing [`Display`] that represents a displayable object with a style applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WithStyle<T> {
    /// The style applied to the displayable object.
    pub style: Style,

    /// The displayable object.
    pub display: T,
}

impl<T: Display> Display for WithStyle<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let code = match self.style {
            Style::Bold => "\x1B[1m",
            Style::Underline => "\x1B[4m",
        };

        write_escaped(f, code, &self.display)
    }
}

/// Represents a color that can be applied to the text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[allow(missing_docs)]
pub enum Color {
    Red,
    Yellow,
    Cyan,
}

impl Color {
    /// Applies the color to the given displayable object.
    pub fn with<T>(self, display: T) -> WithColor<T> {
        WithColor {
            color: self,
            display,
        }
    }
}

/// Is a struct implementing [`Display`] that represents a displayable object with a color applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WithColor<T> {
    /// The color applied to the displayable object.
    pub color: Color,

    /// The displayable object.
    pub display: T,
}

impl<T: Display> Display for WithColor<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let code = match self.color {
            Color::Red => "\x1B[31m",
            Color::Yellow => "\x1B[33m",
            Color::Cyan => "\x1B[36m",
        };

        write_escaped(f, code, &self.display)
    }
}
