//! Badges, glyphs, and color styles.

use owo_colors::{OwoColorize, Style};

use surf_core::storage::MAX_RATING;

/// Symbol with an ASCII fallback for `--ascii`.
#[derive(Debug, Clone, Copy)]
pub struct SymbolPair {
    pub ascii: &'static str,
    pub unicode: &'static str,
}

impl SymbolPair {
    pub const fn new(ascii: &'static str, unicode: &'static str) -> Self {
        Self { ascii, unicode }
    }

    pub fn get(&self, unicode: bool) -> &'static str {
        if unicode {
            self.unicode
        } else {
            self.ascii
        }
    }
}

pub const STAR_FILLED: SymbolPair = SymbolPair::new("*", "\u{2605}"); // ★
pub const STAR_EMPTY: SymbolPair = SymbolPair::new(".", "\u{2606}"); // ☆

/// Status badges.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Badge {
    Ok,
    Err,
    Info,
}

impl Badge {
    pub fn display(&self, unicode: bool) -> &'static str {
        let pair = match self {
            Self::Ok => SymbolPair::new("[OK]", "[\u{2713}]"),
            Self::Err => SymbolPair::new("[ERR]", "[\u{2717}]"),
            Self::Info => SymbolPair::new("[INFO]", "[\u{2139}]"),
        };
        pair.get(unicode)
    }

    pub fn style(&self) -> Style {
        match self {
            Self::Ok => styles::ok(),
            Self::Err => styles::err(),
            Self::Info => styles::info(),
        }
    }
}

pub mod styles {
    use owo_colors::Style;

    pub fn dim() -> Style {
        Style::new().dimmed()
    }

    pub fn ok() -> Style {
        Style::new().green()
    }

    pub fn err() -> Style {
        Style::new().red()
    }

    pub fn info() -> Style {
        Style::new().cyan()
    }

    pub fn stars() -> Style {
        Style::new().yellow()
    }
}

/// Apply `style` when color is enabled.
pub fn styled(text: &str, style: Style, color: bool) -> String {
    if color {
        text.style(style).to_string()
    } else {
        text.to_string()
    }
}

/// Rating as a row of filled and empty stars, always `MAX_RATING` wide.
pub fn star_glyphs(count: usize, unicode: bool) -> String {
    let filled = count.min(MAX_RATING as usize);
    let mut out = STAR_FILLED.get(unicode).repeat(filled);
    out.push_str(&STAR_EMPTY.get(unicode).repeat(MAX_RATING as usize - filled));
    out
}

/// Spinner frames; the last one is shown once finished.
pub fn spinner_frames(unicode: bool) -> &'static [&'static str] {
    if unicode {
        &[
            "\u{280B}", "\u{2819}", "\u{2839}", "\u{2838}", "\u{283C}", "\u{2834}", "\u{2826}",
            "\u{2827}", "\u{2807}", "\u{280F}", "\u{2713}",
        ]
    } else {
        &["|", "/", "-", "\\", "+"]
    }
}
