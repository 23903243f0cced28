//! Settings file persistence.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, warn};

use super::Settings;

pub fn default_path() -> PathBuf {
    let home = env::var("HOME").unwrap_or_else(|_| ".".into());
    PathBuf::from(home).join(".config/genpass/settings.json")
}

pub fn save(settings: &Settings, path: &Path) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let blob = serde_json::to_string_pretty(settings).map_err(std::io::Error::other)?;
    fs::write(path, blob)?;
    debug!("settings saved to {}", path.display());
    Ok(())
}

/// Load settings, writing defaults when the file is missing and rewriting it
/// when the contents do not parse.
pub fn load(path: &Path) -> std::io::Result<Settings> {
    if !path.exists() {
        let settings = Settings::default();
        save(&settings, path)?;
        return Ok(settings);
    }

    let blob = fs::read_to_string(path)?;
    match serde_json::from_str(&blob) {
        Ok(settings) => Ok(settings),
        Err(e) => {
            warn!(
                "settings file {} is malformed ({e}), rewriting defaults",
                path.display()
            );
            let settings = Settings::default();
            save(&settings, path)?;
            Ok(settings)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::terminal::Theme;

    #[test]
    fn save_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");

        let settings = Settings {
            length: 40,
            numbers: false,
            theme: Theme::Light,
            ..Default::default()
        };
        save(&settings, &path).unwrap();
        assert_eq!(load(&path).unwrap(), settings);
    }

    #[test]
    fn missing_file_creates_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/settings.json");

        assert_eq!(load(&path).unwrap(), Settings::default());
        assert!(path.exists());
    }

    #[test]
    fn corrupt_file_is_replaced_with_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, "{not json").unwrap();

        assert_eq!(load(&path).unwrap(), Settings::default());
        // The rewrite leaves a loadable file behind.
        assert_eq!(load(&path).unwrap(), Settings::default());
    }
}
