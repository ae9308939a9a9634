//! Cosmetic preferences: the calculator's name and accent color.
//!
//! Nothing here affects calculation.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Name shown in the header when none is configured.
pub const DEFAULT_NAME: &str = "Calculator Pro";

/// The fixed accent palette.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AccentColor {
    #[default]
    Orange,
    Blue,
    Green,
    Purple,
    Red,
    Pink,
    Teal,
    Amber,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown accent color '{0}' (expected one of: orange, blue, green, purple, red, pink, teal, amber)")]
pub struct UnknownAccent(pub String);

impl AccentColor {
    pub const ALL: [AccentColor; 8] = [
        Self::Orange,
        Self::Blue,
        Self::Green,
        Self::Purple,
        Self::Red,
        Self::Pink,
        Self::Teal,
        Self::Amber,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::Orange => "Orange",
            Self::Blue => "Blue",
            Self::Green => "Green",
            Self::Purple => "Purple",
            Self::Red => "Red",
            Self::Pink => "Pink",
            Self::Teal => "Teal",
            Self::Amber => "Amber",
        }
    }

    pub fn hex(self) -> &'static str {
        match self {
            Self::Orange => "#ff9500",
            Self::Blue => "#3b82f6",
            Self::Green => "#10b981",
            Self::Purple => "#8b5cf6",
            Self::Red => "#ef4444",
            Self::Pink => "#ec4899",
            Self::Teal => "#14b8a6",
            Self::Amber => "#f59e0b",
        }
    }

    /// The color as `(r, g, b)`.
    pub fn rgb(self) -> (u8, u8, u8) {
        let hex = &self.hex()[1..];
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).unwrap_or(0);
        (channel(0), channel(2), channel(4))
    }

    /// Next color in palette order, wrapping around.
    pub fn next(self) -> Self {
        let index = self.index();
        Self::ALL[(index + 1) % Self::ALL.len()]
    }

    pub fn previous(self) -> Self {
        let index = self.index();
        Self::ALL[(index + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    fn index(self) -> usize {
        Self::ALL.iter().position(|&c| c == self).unwrap_or(0)
    }
}

impl fmt::Display for AccentColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for AccentColor {
    type Err = UnknownAccent;

    /// Accepts a palette name (any case) or its hex value.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|c| c.name().eq_ignore_ascii_case(wanted) || c.hex().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| UnknownAccent(s.to_string()))
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct ThemePreferences {
    pub name: String,
    pub accent: AccentColor,
}

impl Default for ThemePreferences {
    fn default() -> Self {
        Self {
            name: DEFAULT_NAME.to_string(),
            accent: AccentColor::default(),
        }
    }
}

impl ThemePreferences {
    /// Rename, falling back to the default for blank input.
    pub fn rename(&mut self, name: &str) {
        let name = name.trim();
        self.name = if name.is_empty() {
            DEFAULT_NAME.to_string()
        } else {
            name.to_string()
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_accent_by_name_and_hex() {
        assert_eq!("blue".parse(), Ok(AccentColor::Blue));
        assert_eq!("Teal".parse(), Ok(AccentColor::Teal));
        assert_eq!("#FF9500".parse(), Ok(AccentColor::Orange));
        assert_eq!(
            "mauve".parse::<AccentColor>(),
            Err(UnknownAccent("mauve".to_string()))
        );
    }

    #[test]
    fn test_rgb() {
        assert_eq!(AccentColor::Orange.rgb(), (0xff, 0x95, 0x00));
        assert_eq!(AccentColor::Blue.rgb(), (0x3b, 0x82, 0xf6));
    }

    #[test]
    fn test_cycle_wraps() {
        assert_eq!(AccentColor::Amber.next(), AccentColor::Orange);
        assert_eq!(AccentColor::Orange.previous(), AccentColor::Amber);
        assert_eq!(AccentColor::Blue.next().previous(), AccentColor::Blue);
    }

    #[test]
    fn test_rename() {
        let mut prefs = ThemePreferences::default();
        prefs.rename("  My Calc ");
        assert_eq!(prefs.name, "My Calc");
        prefs.rename("   ");
        assert_eq!(prefs.name, DEFAULT_NAME);
    }
}
