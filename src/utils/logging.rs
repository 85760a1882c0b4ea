//! Logger setup.
//!
//! The terminal is owned by the TUI, so records go to a file instead of
//! stderr. `RUST_LOG` overrides the default `info` level.

use env_logger::{Builder, Env, Target};
use std::fs::OpenOptions;
use std::io;
use std::path::Path;

/// Route `log` records to `path`, appending.
pub fn init_file_logger(path: &Path) -> io::Result<()> {
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    Builder::from_env(Env::default().default_filter_or("info"))
        .target(Target::Pipe(Box::new(file)))
        .format_timestamp_millis()
        .try_init()
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e))
}
