//! Profile persistence: a checksummed binary save plus JSON helpers.
//!
//! The binary format is `[version: u32 LE][sha256 of payload][bincode
//! payload]`. A bad checksum or unsupported version surfaces as a typed
//! error so the host can fall back to a fresh profile instead of loading
//! silently corrupted progress.

use crate::core::constants::SAVE_FILE_VERSION;
use crate::store::profile::Profile;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fs;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

const CHECKSUM_LEN: usize = 32;
const HEADER_LEN: usize = 4 + CHECKSUM_LEN;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("could not determine a save directory for this platform")]
    NoSaveDir,
    #[error("save file is corrupt: {0}")]
    Corrupt(String),
    #[error("unsupported save version {0}")]
    UnsupportedVersion(u32),
    #[error("serialization failed: {0}")]
    Serialize(String),
    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Payload written to disk alongside the profile.
#[derive(Debug, Serialize, Deserialize)]
struct SaveFile {
    saved_at_ms: i64,
    profile: Profile,
}

/// Saves and loads profiles in the platform config directory.
pub struct SaveManager {
    save_path: PathBuf,
}

impl SaveManager {
    pub fn new() -> Result<Self, StoreError> {
        let project_dirs =
            ProjectDirs::from("", "", "everforge").ok_or(StoreError::NoSaveDir)?;
        let config_dir = project_dirs.config_dir();
        fs::create_dir_all(config_dir)?;
        Ok(Self {
            save_path: config_dir.join("profile.dat"),
        })
    }

    /// Uses an explicit path instead of the platform directory. Tests and
    /// hosts with custom storage use this.
    pub fn with_path(save_path: PathBuf) -> Self {
        Self { save_path }
    }

    pub fn save_exists(&self) -> bool {
        self.save_path.exists()
    }

    /// Writes the profile with a version header and payload checksum.
    pub fn save(&self, profile: &Profile, now_ms: i64) -> Result<(), StoreError> {
        let payload = bincode::serialize(&SaveFile {
            saved_at_ms: now_ms,
            profile: profile.clone(),
        })
        .map_err(|e| StoreError::Serialize(e.to_string()))?;

        let mut hasher = Sha256::new();
        hasher.update(&payload);
        let checksum = hasher.finalize();

        let mut data = Vec::with_capacity(HEADER_LEN + payload.len());
        data.extend_from_slice(&SAVE_FILE_VERSION.to_le_bytes());
        data.extend_from_slice(&checksum);
        data.extend_from_slice(&payload);

        fs::write(&self.save_path, data)?;
        Ok(())
    }

    /// Loads and verifies the profile. `Ok(None)` when no save exists.
    pub fn load(&self) -> Result<Option<Profile>, StoreError> {
        if !self.save_path.exists() {
            return Ok(None);
        }
        let data = fs::read(&self.save_path)?;
        if data.len() < HEADER_LEN {
            return Err(StoreError::Corrupt("file shorter than header".into()));
        }

        let version = u32::from_le_bytes([data[0], data[1], data[2], data[3]]);
        if version != SAVE_FILE_VERSION {
            return Err(StoreError::UnsupportedVersion(version));
        }

        let stored_checksum = &data[4..HEADER_LEN];
        let payload = &data[HEADER_LEN..];

        let mut hasher = Sha256::new();
        hasher.update(payload);
        let checksum = hasher.finalize();
        if checksum.as_slice() != stored_checksum {
            return Err(StoreError::Corrupt("checksum mismatch".into()));
        }

        let save: SaveFile = bincode::deserialize(payload)
            .map_err(|e| StoreError::Corrupt(e.to_string()))?;
        Ok(Some(save.profile))
    }
}

/// Returns the `~/.everforge/` directory, creating it if needed. Hosts use
/// this for auxiliary JSON files (settings, event logs) next to the save.
pub fn data_dir() -> Result<PathBuf, StoreError> {
    let home = dirs::home_dir().ok_or(StoreError::NoSaveDir)?;
    let dir = home.join(".everforge");
    fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// Loads a JSON file from `~/.everforge/`, returning `T::default()` when
/// the file is missing or unreadable.
pub fn load_json_or_default<T: Default + serde::de::DeserializeOwned>(filename: &str) -> T {
    let path = match data_dir() {
        Ok(dir) => dir.join(filename),
        Err(_) => return T::default(),
    };
    match fs::read_to_string(&path) {
        Ok(json) => serde_json::from_str(&json).unwrap_or_default(),
        Err(_) => T::default(),
    }
}

/// Saves a value as pretty-printed JSON to `~/.everforge/`.
pub fn save_json<T: serde::Serialize>(filename: &str, data: &T) -> Result<(), StoreError> {
    let path = data_dir()?.join(filename);
    let json = serde_json::to_string_pretty(data)
        .map_err(|e| StoreError::Serialize(e.to_string()))?;
    fs::write(path, json)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU64, Ordering};

    fn temp_save_path() -> PathBuf {
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        let n = COUNTER.fetch_add(1, Ordering::SeqCst);
        std::env::temp_dir().join(format!("everforge_save_test_{}_{}.dat", std::process::id(), n))
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let path = temp_save_path();
        let manager = SaveManager::with_path(path.clone());

        let mut profile = Profile::new("Saver", 0);
        profile.add_gold(123);
        manager.save(&profile, 1_000).expect("save");

        let loaded = manager.load().expect("load").expect("profile present");
        assert_eq!(loaded.player.name, "Saver");
        assert_eq!(loaded.gold, 123);

        fs::remove_file(path).ok();
    }

    #[test]
    fn test_load_missing_returns_none() {
        let manager = SaveManager::with_path(temp_save_path());
        assert!(manager.load().expect("load").is_none());
    }

    #[test]
    fn test_corrupted_payload_is_detected() {
        let path = temp_save_path();
        let manager = SaveManager::with_path(path.clone());
        manager.save(&Profile::new("Corrupt", 0), 0).expect("save");

        // Flip a byte in the payload
        let mut data = fs::read(&path).expect("read");
        let last = data.len() - 1;
        data[last] ^= 0xFF;
        fs::write(&path, data).expect("write");

        assert!(matches!(manager.load(), Err(StoreError::Corrupt(_))));
        fs::remove_file(path).ok();
    }

    #[test]
    fn test_unknown_version_is_rejected() {
        let path = temp_save_path();
        let manager = SaveManager::with_path(path.clone());
        manager.save(&Profile::new("Version", 0), 0).expect("save");

        let mut data = fs::read(&path).expect("read");
        data[0] = 0xFE;
        fs::write(&path, data).expect("write");

        assert!(matches!(
            manager.load(),
            Err(StoreError::UnsupportedVersion(_))
        ));
        fs::remove_file(path).ok();
    }

    #[test]
    fn test_truncated_file_is_corrupt_not_panic() {
        let path = temp_save_path();
        fs::write(&path, [1, 2, 3]).expect("write");
        let manager = SaveManager::with_path(path.clone());
        assert!(matches!(manager.load(), Err(StoreError::Corrupt(_))));
        fs::remove_file(path).ok();
    }
}
