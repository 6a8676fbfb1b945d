//! Transcript themes and their color palettes

use crate::Color;
use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;
use tracing::warn;

/// Document theme
///
/// Parsing never fails: anything that is not `light` selects [`Theme::Dark`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    /// Parse a theme name, failing closed to [`Theme::Dark`]
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "light" => Theme::Light,
            "dark" => Theme::Dark,
            other => {
                warn!(theme = other, "unknown theme, using dark");
                Theme::Dark
            }
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn palette(&self) -> Palette {
        palette(*self)
    }
}

impl From<String> for Theme {
    fn from(name: String) -> Self {
        Theme::from_name(&name)
    }
}

impl FromStr for Theme {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Theme::from_name(s))
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Colors used to draw a transcript
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Palette {
    /// Title text
    pub header: Color,
    /// User name and timestamp line
    pub metadata: Color,
    /// Rule under the header block
    pub header_rule: Color,
    /// Sender label for user messages
    pub sender_user: Color,
    /// Sender label for everyone else
    pub sender_other: Color,
    /// Message body text
    pub text: Color,
    /// Rule between messages
    pub separator: Color,
    pub footer: Color,
    /// Fill behind every page, if any
    pub page_background: Option<Color>,
}

const DARK: Palette = Palette {
    header: Color::rgb(59, 130, 246),
    metadata: Color::rgb(180, 190, 200),
    header_rule: Color::rgb(70, 70, 70),
    sender_user: Color::rgb(96, 165, 250),
    sender_other: Color::rgb(240, 240, 240),
    text: Color::WHITE,
    separator: Color::rgb(80, 80, 80),
    footer: Color::rgb(160, 160, 160),
    page_background: Some(Color::rgb(24, 24, 27)),
};

const LIGHT: Palette = Palette {
    header: Color::rgb(37, 99, 235),
    metadata: Color::rgb(90, 100, 110),
    header_rule: Color::rgb(180, 180, 180),
    sender_user: Color::rgb(37, 99, 235),
    sender_other: Color::rgb(20, 20, 20),
    text: Color::BLACK,
    separator: Color::rgb(200, 200, 200),
    footer: Color::rgb(100, 100, 100),
    page_background: None,
};

/// Palette for a theme
pub fn palette(theme: Theme) -> Palette {
    match theme {
        Theme::Light => LIGHT,
        Theme::Dark => DARK,
    }
}
