use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use parking_lot::RwLock;
use tracing::warn;

use crate::errors::ApiError;

/// Key under which the raw bearer token is persisted.
pub const TOKEN_KEY: &str = "token";
/// Key under which the serialized identity record is persisted.
pub const USER_KEY: &str = "user";

/// File-backed string map — the durable client state (localStorage analog).
///
/// Exactly two keys exist in practice (`token`, `user`); the whole map is
/// persisted as one JSON object on every write. A missing or corrupt file at
/// open time degrades to an empty map: boot must never fail on bad state.
pub struct StateStorage {
    path: PathBuf,
    map: RwLock<BTreeMap<String, String>>,
}

impl StateStorage {
    pub fn open(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref().to_path_buf();
        let map = match fs::read_to_string(&path) {
            Ok(raw) => match serde_json::from_str::<BTreeMap<String, String>>(&raw) {
                Ok(map) => map,
                Err(e) => {
                    warn!("State file {} is corrupt ({e}); starting empty", path.display());
                    BTreeMap::new()
                }
            },
            Err(_) => BTreeMap::new(),
        };
        StateStorage {
            path,
            map: RwLock::new(map),
        }
    }

    pub fn get_item(&self, key: &str) -> Option<String> {
        self.map.read().get(key).cloned()
    }

    pub fn set_item(&self, key: &str, value: &str) -> Result<(), ApiError> {
        let mut map = self.map.write();
        map.insert(key.to_string(), value.to_string());
        self.persist(&map)
    }

    pub fn remove_item(&self, key: &str) -> Result<(), ApiError> {
        let mut map = self.map.write();
        map.remove(key);
        self.persist(&map)
    }

    /// Writes through a sibling temp file and renames, so a crash mid-write
    /// never leaves a half-written state file behind.
    fn persist(&self, map: &BTreeMap<String, String>) -> Result<(), ApiError> {
        let json = serde_json::to_string_pretty(map)
            .map_err(|e| ApiError::Storage(e.to_string()))?;
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, json).map_err(|e| ApiError::Storage(e.to_string()))?;
        fs::rename(&tmp, &self.path).map_err(|e| ApiError::Storage(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip_across_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state.json");

        let storage = StateStorage::open(&path);
        storage.set_item(TOKEN_KEY, "abc123").unwrap();
        storage.set_item(USER_KEY, r#"{"user_id":"u1"}"#).unwrap();

        let reopened = StateStorage::open(&path);
        assert_eq!(reopened.get_item(TOKEN_KEY).as_deref(), Some("abc123"));
        assert_eq!(reopened.get_item(USER_KEY).as_deref(), Some(r#"{"user_id":"u1"}"#));
    }

    #[test]
    fn test_remove_item_persists() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state.json");

        let storage = StateStorage::open(&path);
        storage.set_item(TOKEN_KEY, "abc123").unwrap();
        storage.remove_item(TOKEN_KEY).unwrap();

        let reopened = StateStorage::open(&path);
        assert_eq!(reopened.get_item(TOKEN_KEY), None);
    }

    #[test]
    fn test_corrupt_file_degrades_to_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state.json");
        fs::write(&path, "{not valid json").unwrap();

        let storage = StateStorage::open(&path);
        assert_eq!(storage.get_item(TOKEN_KEY), None);
    }

    #[test]
    fn test_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let storage = StateStorage::open(dir.path().join("nope.json"));
        assert_eq!(storage.get_item(USER_KEY), None);
    }
}
