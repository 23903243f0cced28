//! Light/dark terminal palettes.

use serde::{Deserialize, Serialize};

use crate::pass::strength::StrengthLevel;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn toggle(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Color for chrome accents (titles, checkmarks).
    pub fn accent(self) -> &'static str {
        match self {
            Self::Dark => "\x1b[38;5;81m",
            Self::Light => "\x1b[38;5;25m",
        }
    }

    /// Color for de-emphasized text (legend, unlit meter segments).
    pub fn dim(self) -> &'static str {
        match self {
            Self::Dark => "\x1b[38;5;245m",
            Self::Light => "\x1b[38;5;102m",
        }
    }

    /// Color for warnings and error messages.
    pub fn warn(self) -> &'static str {
        match self {
            Self::Dark => "\x1b[38;5;214m",
            Self::Light => "\x1b[38;5;130m",
        }
    }

    /// Meter and label color for a strength level. Bright shades on dark
    /// backgrounds, deeper shades on light ones.
    pub fn level_color(self, level: StrengthLevel) -> &'static str {
        match self {
            Self::Dark => match level {
                StrengthLevel::VeryWeak => "\x1b[38;5;196m",
                StrengthLevel::Weak => "\x1b[38;5;208m",
                StrengthLevel::Medium => "\x1b[38;5;226m",
                StrengthLevel::Strong => "\x1b[38;5;118m",
                StrengthLevel::VeryStrong => "\x1b[38;5;46m",
            },
            Self::Light => match level {
                StrengthLevel::VeryWeak => "\x1b[38;5;124m",
                StrengthLevel::Weak => "\x1b[38;5;166m",
                StrengthLevel::Medium => "\x1b[38;5;136m",
                StrengthLevel::Strong => "\x1b[38;5;28m",
                StrengthLevel::VeryStrong => "\x1b[38;5;22m",
            },
        }
    }
}

impl std::str::FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(format!("unknown theme: {other} (expected light or dark)")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_flips_between_light_and_dark() {
        assert_eq!(Theme::Light.toggle(), Theme::Dark);
        assert_eq!(Theme::Dark.toggle(), Theme::Light);
    }

    #[test]
    fn serializes_as_lowercase_strings() {
        assert_eq!(serde_json::to_string(&Theme::Dark).unwrap(), "\"dark\"");
        assert_eq!(
            serde_json::from_str::<Theme>("\"light\"").unwrap(),
            Theme::Light
        );
    }
}
