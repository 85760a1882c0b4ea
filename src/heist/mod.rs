//! Museum Heist runner.
//!
//! A real-time side-scroller: the thief runs at a fixed column while guards,
//! sensors and lasers scroll in from the right. Any key jumps. Touching an
//! obstacle ends the run; reaching the points target wins it.

pub mod logic;
pub mod types;

pub use logic::*;
pub use types::*;
