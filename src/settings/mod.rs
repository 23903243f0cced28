//! Persisted user preferences.

mod file;

use serde::{Deserialize, Serialize};

use crate::pass::CategoryFlags;
use crate::terminal::Theme;

/// The flat settings record, stored as a single JSON blob. Unknown or missing
/// fields fall back to their defaults so older files keep loading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub length: usize,
    pub uppercase: bool,
    pub lowercase: bool,
    pub numbers: bool,
    pub symbols: bool,
    pub theme: Theme,
}

impl Settings {
    pub fn load_from_file() -> std::io::Result<Self> {
        file::load(&file::default_path())
    }

    pub fn save_to_file(&self) -> std::io::Result<()> {
        file::save(self, &file::default_path())
    }

    pub fn flags(&self) -> CategoryFlags {
        CategoryFlags {
            uppercase: self.uppercase,
            lowercase: self.lowercase,
            numbers: self.numbers,
            symbols: self.symbols,
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            length: 16,
            uppercase: true,
            lowercase: true,
            numbers: true,
            symbols: true,
            theme: Theme::Dark,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_mirror_the_category_fields() {
        let settings = Settings {
            uppercase: false,
            symbols: false,
            ..Default::default()
        };
        let flags = settings.flags();
        assert!(!flags.uppercase && flags.lowercase && flags.numbers && !flags.symbols);
    }

    #[test]
    fn json_round_trips() {
        let settings = Settings {
            length: 32,
            theme: Theme::Light,
            ..Default::default()
        };
        let blob = serde_json::to_string(&settings).unwrap();
        assert_eq!(serde_json::from_str::<Settings>(&blob).unwrap(), settings);
    }

    #[test]
    fn missing_fields_take_defaults() {
        let settings: Settings = serde_json::from_str(r#"{"length": 24}"#).unwrap();
        assert_eq!(settings.length, 24);
        assert!(settings.symbols);
        assert_eq!(settings.theme, Theme::Dark);
    }
}
