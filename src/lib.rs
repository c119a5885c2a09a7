//! River Crossing - A Frogger-style arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (spawning, collisions, state reducer)
//! - `config`: Board layout and tuning constants
//! - `game`: Driver folding the event queue through the reducer
//! - `platform`: Input capture, tick clock and the ordered event queue
//! - `view`: Render cache diffed against each simulation state

pub mod config;
pub mod error;
pub mod game;
pub mod platform;
pub mod sim;
pub mod view;

pub use config::{Band, GameConfig, TargetZone};
pub use error::ConfigError;
pub use game::Game;

use glam::Vec2;

/// Fixed timing and progression constants
pub mod consts {
    /// Interval between clock ticks, in milliseconds
    pub const TICK_INTERVAL_MS: f64 = 10.0;
    /// Longest frame gap replayed by the tick clock, in milliseconds
    pub const MAX_FRAME_MS: f64 = 100.0;
    /// Maximum ticks emitted per animation frame (prevents spiral of death)
    pub const MAX_TICKS_PER_FRAME: u32 = 16;
    /// Turtles dive or surface every this many ticks
    pub const SUBMERGE_PERIOD_TICKS: u64 = 100;
    /// Number of target zones; reaching all of them ends the run
    pub const TARGET_COUNT: u8 = 4;
    /// Extra lane speed granted per level
    pub const LEVEL_SPEED_STEP: f32 = 0.1;
}

/// Wrap a horizontal coordinate onto `[0, width]`.
///
/// Values exactly on either boundary are left untouched.
#[inline]
pub fn wrap_x(x: f32, width: f32) -> f32 {
    if x > width {
        x - width
    } else if x < 0.0 {
        x + width
    } else {
        x
    }
}

/// Toroidal wrap along x, y is unchanged
#[inline]
pub fn torus_wrap(pos: Vec2, width: f32) -> Vec2 {
    Vec2::new(wrap_x(pos.x, width), pos.y)
}
