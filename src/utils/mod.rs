//! Utility modules: build info, per-user paths, logging.

pub mod build_info;
pub mod logging;
pub mod paths;
