//! Sprite assets: the fixed manifest, parsed text-art sprites and load errors.
//!
//! Every asset is a block of characters. Sprites are stretched to the box
//! they are drawn into, so their size in characters only sets the detail.

pub mod loader;

pub use loader::{load_all, AssetLoader, AssetState};

use ratatui::style::Color;
use std::collections::HashMap;
use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

/// Logical asset names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssetKey {
    Background,
    Thief,
    Cop,
    Sensor,
    Laser,
    WebMockup,
    Reset,
}

impl AssetKey {
    pub const ALL: [AssetKey; 7] = [
        AssetKey::Background,
        AssetKey::Thief,
        AssetKey::Cop,
        AssetKey::Sensor,
        AssetKey::Laser,
        AssetKey::WebMockup,
        AssetKey::Reset,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Background => "background",
            Self::Thief => "thief",
            Self::Cop => "cop",
            Self::Sensor => "sensor",
            Self::Laser => "laser",
            Self::WebMockup => "webmockup",
            Self::Reset => "reset",
        }
    }

    /// Path relative to the assets directory.
    pub fn relative_path(&self) -> &'static str {
        match self {
            Self::Background => "Other/MuseumTrack.txt",
            Self::Thief => "Thief/ThiefRun1.txt",
            Self::Cop => "Obstacles/Cop.txt",
            Self::Sensor => "Obstacles/MotionZone.txt",
            Self::Laser => "Obstacles/LaserMaze.txt",
            Self::WebMockup => "Other/WebMockup.txt",
            Self::Reset => "Other/Reset.txt",
        }
    }

    /// Foreground color used when stamping this sprite.
    pub fn color(&self) -> Color {
        match self {
            Self::Background => Color::Rgb(120, 110, 95),
            Self::Thief => Color::LightYellow,
            Self::Cop => Color::Rgb(90, 140, 230),
            Self::Sensor => Color::Rgb(230, 160, 60),
            Self::Laser => Color::LightRed,
            Self::WebMockup => Color::Rgb(110, 110, 130),
            Self::Reset => Color::Green,
        }
    }
}

/// Directory the crate ships its sprites in.
pub fn bundled_assets_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("assets")
}

/// A rectangular grid of characters. Short rows are padded with spaces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sprite {
    rows: Vec<Vec<char>>,
    width: usize,
}

impl Sprite {
    /// Parse text art. Returns `None` if there is nothing visible.
    pub fn parse(text: &str) -> Option<Self> {
        let mut rows: Vec<Vec<char>> = text
            .lines()
            .map(|line| line.trim_end().chars().collect())
            .collect();

        // Drop blank lines around the art
        while rows.last().is_some_and(|r| r.is_empty()) {
            rows.pop();
        }
        let leading = rows.iter().take_while(|r| r.is_empty()).count();
        rows.drain(..leading);

        let width = rows.iter().map(|r| r.len()).max().unwrap_or(0);
        if width == 0 {
            return None;
        }
        for row in &mut rows {
            row.resize(width, ' ');
        }
        Some(Self { rows, width })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Nearest-neighbour sample for a target of `target_w` x `target_h` cells.
    pub fn sample(&self, col: usize, row: usize, target_w: usize, target_h: usize) -> char {
        if target_w == 0 || target_h == 0 {
            return ' ';
        }
        let src_col = (col * self.width / target_w).min(self.width - 1);
        let src_row = (row * self.height() / target_h).min(self.height() - 1);
        self.rows[src_row][src_col]
    }
}

/// Every sprite in the manifest, keyed by `AssetKey`.
#[derive(Debug, Clone, Default)]
pub struct SpriteSheet {
    sprites: HashMap<AssetKey, Sprite>,
}

impl SpriteSheet {
    pub fn insert(&mut self, key: AssetKey, sprite: Sprite) {
        self.sprites.insert(key, sprite);
    }

    pub fn get(&self, key: AssetKey) -> Option<&Sprite> {
        self.sprites.get(&key)
    }

    pub fn len(&self) -> usize {
        self.sprites.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sprites.is_empty()
    }
}

/// Why the asset batch did not load.
#[derive(Debug)]
pub enum AssetError {
    Read {
        key: AssetKey,
        path: PathBuf,
        source: io::Error,
    },
    Empty {
        key: AssetKey,
        path: PathBuf,
    },
    /// The background loader thread died before reporting.
    LoaderPanicked,
}

impl fmt::Display for AssetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssetError::Read { key, path, source } => write!(
                f,
                "could not read asset '{}' from {}: {}",
                key.name(),
                path.display(),
                source
            ),
            AssetError::Empty { key, path } => write!(
                f,
                "asset '{}' at {} has no visible content",
                key.name(),
                path.display()
            ),
            AssetError::LoaderPanicked => write!(f, "asset loader stopped unexpectedly"),
        }
    }
}

impl std::error::Error for AssetError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AssetError::Read { source, .. } => Some(source),
            _ => None,
        }
    }
}
