//! Museum Heist - terminal side-scrolling runner.
//!
//! This module exposes the game logic for testing and for the binary.

pub mod assets;
pub mod config;
pub mod constants;
pub mod heist;
pub mod input;
pub mod ui;
pub mod utils;

pub use config::GameConfig;
pub use heist::{HeistGame, HeistInput, Screen};
