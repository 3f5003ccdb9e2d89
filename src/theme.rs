use std::str::FromStr;

use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown theme: {0}")]
pub struct UnknownTheme(String);

impl FromStr for Theme {
    type Err = UnknownTheme;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dark" => Ok(Theme::Dark),
            "light" => Ok(Theme::Light),
            other => Err(UnknownTheme(other.to_string())),
        }
    }
}

impl Theme {
    /// Root class; every themed rule in the page stylesheet hangs off it.
    pub fn class(self) -> &'static str {
        match self {
            Theme::Dark => "paired theme-dark",
            Theme::Light => "paired theme-light",
        }
    }

    pub fn has_tagline_toggle(self) -> bool {
        matches!(self, Theme::Light)
    }

    pub fn has_glow(self) -> bool {
        matches!(self, Theme::Dark)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_themes_case_insensitively() {
        assert_eq!("dark".parse::<Theme>(), Ok(Theme::Dark));
        assert_eq!(" Light ".parse::<Theme>(), Ok(Theme::Light));
        assert!("sepia".parse::<Theme>().is_err());
    }

    #[test]
    fn only_light_theme_toggles_tagline() {
        assert!(Theme::Light.has_tagline_toggle());
        assert!(!Theme::Dark.has_tagline_toggle());
        assert!(Theme::Dark.has_glow());
    }
}
