//! Batch asset loading.
//!
//! The whole manifest loads as one unit: either every sprite is available or
//! the caller gets the first error. `AssetLoader` runs the batch on a worker
//! thread so the intro screen keeps drawing while files are read.

use super::{AssetError, AssetKey, Sprite, SpriteSheet};
use log::{debug, info};
use std::fs;
use std::path::{Path, PathBuf};
use std::thread::{self, JoinHandle};

/// Load every manifest entry from `dir`.
pub fn load_all(dir: &Path) -> Result<SpriteSheet, AssetError> {
    let mut sheet = SpriteSheet::default();
    for key in AssetKey::ALL {
        let path = dir.join(key.relative_path());
        let text = fs::read_to_string(&path).map_err(|source| AssetError::Read {
            key,
            path: path.clone(),
            source,
        })?;
        let sprite = Sprite::parse(&text).ok_or_else(|| AssetError::Empty {
            key,
            path: path.clone(),
        })?;
        debug!(
            "[Assets] Loaded {} ({}x{}) from {}",
            key.name(),
            sprite.width(),
            sprite.height(),
            path.display()
        );
        sheet.insert(key, sprite);
    }
    info!("[Assets] {} sprites loaded from {}", sheet.len(), dir.display());
    Ok(sheet)
}

/// Handle to a batch load running in the background.
pub struct AssetLoader {
    handle: Option<JoinHandle<Result<SpriteSheet, AssetError>>>,
}

impl AssetLoader {
    /// Start loading `dir` on a worker thread.
    pub fn spawn(dir: PathBuf) -> Self {
        let handle = thread::spawn(move || load_all(&dir));
        Self {
            handle: Some(handle),
        }
    }

    /// `None` while loading. Yields the batch result exactly once, then `None` again.
    pub fn poll(&mut self) -> Option<Result<SpriteSheet, AssetError>> {
        let handle = self.handle.take()?;
        if !handle.is_finished() {
            self.handle = Some(handle);
            return None;
        }
        Some(handle.join().unwrap_or(Err(AssetError::LoaderPanicked)))
    }
}

/// Where the asset batch stands, as seen by the frame loop.
pub enum AssetState {
    Loading(AssetLoader),
    Ready(SpriteSheet),
    Failed(AssetError),
}

impl AssetState {
    /// Kick off a background load of `dir`.
    pub fn start(dir: PathBuf) -> Self {
        Self::Loading(AssetLoader::spawn(dir))
    }

    /// Check a running load. Returns true on the call that finishes it.
    pub fn poll(&mut self) -> bool {
        let result = match self {
            Self::Loading(loader) => loader.poll(),
            _ => return false,
        };
        match result {
            None => false,
            Some(Ok(sheet)) => {
                *self = Self::Ready(sheet);
                true
            }
            Some(Err(err)) => {
                *self = Self::Failed(err);
                true
            }
        }
    }

    pub fn sprites(&self) -> Option<&SpriteSheet> {
        match self {
            Self::Ready(sheet) => Some(sheet),
            _ => None,
        }
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, Self::Ready(_))
    }
}
