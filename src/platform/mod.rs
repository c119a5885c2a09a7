//! Platform layer
//!
//! Turns host input into the single ordered event stream the reducer folds:
//! - `input`: key names to semantic events, with auto-repeat suppression
//! - `clock`: wall-clock milliseconds to fixed-cadence ticks
//! - `queue`: the ordered, lossless event queue both sources feed

pub mod clock;
pub mod input;
pub mod queue;

pub use clock::TickClock;
pub use input::{Key, KeyMapper};
pub use queue::EventQueue;
