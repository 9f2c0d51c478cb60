//! Saved-preference storage
//!
//! Persists the last searched city to a JSON file so the next launch opens on
//! it. Entries carry a saved-at timestamp and go stale after seven days, at
//! which point they are ignored on load. Only the city name is stored; no
//! fetched weather data is ever written to disk.

use chrono::{DateTime, Duration, Utc};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// How long a saved favorite stays valid
const FAVORITE_TTL_DAYS: i64 = 7;

/// File name under the config directory
const FAVORITE_FILE: &str = "favorite_city.json";

/// On-disk shape of the saved favorite
#[derive(Debug, Serialize, Deserialize)]
struct FavoriteEntry {
    /// City name as the user typed it
    city: String,
    /// When the favorite was saved
    saved_at: DateTime<Utc>,
}

/// Reads and writes the favorite-city file
///
/// Uses an XDG-compliant config directory (`~/.config/skycast/` on Linux).
#[derive(Debug, Clone)]
pub struct FavoriteStore {
    /// Directory where the preference file lives
    config_dir: PathBuf,
}

impl FavoriteStore {
    /// Creates a store rooted at the platform config directory.
    ///
    /// Returns `None` if the directory cannot be determined (e.g. no home
    /// directory).
    pub fn new() -> Option<Self> {
        let project_dirs = ProjectDirs::from("", "", "skycast")?;
        Some(Self {
            config_dir: project_dirs.config_dir().to_path_buf(),
        })
    }

    /// Creates a store rooted at a custom directory (used by tests).
    #[allow(dead_code)]
    pub fn with_dir(config_dir: PathBuf) -> Self {
        Self { config_dir }
    }

    /// Path of the favorite-city file
    fn favorite_path(&self) -> PathBuf {
        self.config_dir.join(FAVORITE_FILE)
    }

    /// Saves `city` as the favorite, stamping it with the current time.
    ///
    /// # Returns
    /// * `Ok(())` on success
    /// * `Err` if directory creation or file writing fails
    pub fn save(&self, city: &str) -> std::io::Result<()> {
        fs::create_dir_all(&self.config_dir)?;

        let entry = FavoriteEntry {
            city: city.to_string(),
            saved_at: Utc::now(),
        };
        let json = serde_json::to_string_pretty(&entry)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;

        fs::write(self.favorite_path(), json)
    }

    /// Loads the saved favorite city.
    ///
    /// Returns `None` when the file is missing, unparseable, or older than
    /// seven days; a stale favorite is treated the same as no favorite.
    pub fn load(&self) -> Option<String> {
        let content = fs::read_to_string(self.favorite_path()).ok()?;
        let entry: FavoriteEntry = serde_json::from_str(&content).ok()?;

        if Utc::now() - entry.saved_at > Duration::days(FAVORITE_TTL_DAYS) {
            return None;
        }

        Some(entry.city)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_test_store() -> (FavoriteStore, TempDir) {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let store = FavoriteStore::with_dir(temp_dir.path().to_path_buf());
        (store, temp_dir)
    }

    #[test]
    fn test_save_then_load_roundtrip() {
        let (store, _temp_dir) = create_test_store();

        store.save("Reykjavik").expect("Save should succeed");

        assert_eq!(store.load(), Some("Reykjavik".to_string()));
    }

    #[test]
    fn test_load_without_a_saved_favorite() {
        let (store, _temp_dir) = create_test_store();
        assert_eq!(store.load(), None);
    }

    #[test]
    fn test_save_overwrites_previous_favorite() {
        let (store, _temp_dir) = create_test_store();

        store.save("Oslo").expect("First save should succeed");
        store.save("Bergen").expect("Second save should succeed");

        assert_eq!(store.load(), Some("Bergen".to_string()));
    }

    #[test]
    fn test_stale_favorite_is_ignored() {
        let (store, _temp_dir) = create_test_store();

        // Write an entry dated past the TTL by hand
        fs::create_dir_all(&store.config_dir).unwrap();
        let stale = FavoriteEntry {
            city: "Tromso".to_string(),
            saved_at: Utc::now() - Duration::days(FAVORITE_TTL_DAYS + 1),
        };
        fs::write(
            store.favorite_path(),
            serde_json::to_string(&stale).unwrap(),
        )
        .unwrap();

        assert_eq!(store.load(), None);
    }

    #[test]
    fn test_unparseable_file_is_ignored() {
        let (store, _temp_dir) = create_test_store();

        fs::create_dir_all(&store.config_dir).unwrap();
        fs::write(store.favorite_path(), "{ not json }").unwrap();

        assert_eq!(store.load(), None);
    }

    #[test]
    fn test_save_creates_missing_directories() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let nested = temp_dir.path().join("deep").join("config");
        let store = FavoriteStore::with_dir(nested.clone());

        store.save("Vik").expect("Save should succeed");

        assert!(nested.join(FAVORITE_FILE).exists());
    }
}
