// ABOUTME: JSON-file favorites store: load once at startup, full rewrite per mutation
// ABOUTME: Fails soft to an empty list on a missing or unreadable file
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Savora Project

use savora_core::errors::StoreError;
use savora_core::models::FavoriteEntry;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// File name inside the platform data directory.
const FAVORITES_FILE: &str = "favorites.json";

/// Application directory inside the platform data directory.
const APP_DIR: &str = "savora";

/// Favorites persistence: one JSON array of [`FavoriteEntry`] snapshots,
/// read once at startup and fully rewritten on every mutation.
#[derive(Debug, Clone)]
pub struct FavoritesStore {
    path: PathBuf,
}

impl FavoritesStore {
    /// Store backed by the given file path.
    #[must_use]
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Store at the platform default location
    /// (`<data dir>/savora/favorites.json`).
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NoDataDir`] when the platform reports no data
    /// directory.
    pub fn at_default_path() -> Result<Self, StoreError> {
        let base = dirs::data_dir().ok_or(StoreError::NoDataDir)?;
        Ok(Self::new(base.join(APP_DIR).join(FAVORITES_FILE)))
    }

    /// The backing file path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the persisted favorites.
    ///
    /// Fails soft: a missing file is a fresh start, and an unreadable or
    /// unparsable file logs a warning and also starts empty (the next
    /// mutation rewrites it).
    #[must_use]
    pub fn load(&self) -> Vec<FavoriteEntry> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == ErrorKind::NotFound => return Vec::new(),
            Err(err) => {
                warn!(path = %self.path.display(), %err, "favorites file unreadable, starting empty");
                return Vec::new();
            }
        };

        match serde_json::from_str::<Vec<FavoriteEntry>>(&raw) {
            Ok(entries) => {
                info!(count = entries.len(), "favorites loaded");
                entries
            }
            Err(err) => {
                warn!(path = %self.path.display(), %err, "favorites file corrupt, starting empty");
                Vec::new()
            }
        }
    }

    /// Rewrite the whole blob from the in-memory list.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] when the parent directory cannot be created
    /// or the file cannot be written.
    pub fn save(&self, entries: &[FavoriteEntry]) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let blob = serde_json::to_string_pretty(entries)?;
        fs::write(&self.path, blob)?;
        info!(count = entries.len(), "favorites persisted");
        Ok(())
    }
}
