//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One event in, one state out
//! - No randomness
//! - Stable iteration order (lane order, then spawn order)
//! - No rendering or platform dependencies

pub mod collision;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collision::{closest_point, collides, collides_any};
pub use spawn::{RowDescriptor, entity_id, spawn_row};
pub use state::{
    ACTOR_ID, Axis, Category, Entity, GamePhase, GameState, Lanes, MotionDirection,
};
pub use tick::{Contacts, Event, advance, apply_move, reduce, restart, submerge_due, tick};
