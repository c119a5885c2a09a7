//! State reducer
//!
//! Folds one event into the previous state. Every branch is total: nothing
//! here can fail or panic, and the incoming state is consumed rather than
//! mutated behind the caller's back.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::collides_any;
use super::state::{Axis, Category, Entity, GameState};
use crate::config::GameConfig;
use crate::consts::{LEVEL_SPEED_STEP, SUBMERGE_PERIOD_TICKS};
use crate::torus_wrap;

/// A discrete event fed to the reducer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Event {
    /// Clock tick carrying the running tick count
    Tick { elapsed: u64 },
    /// Actor move; `direction` is -1 or +1 along `axis`
    Move { direction: i8, axis: Axis },
    /// Rebuild the initial state, keeping the high score
    Restart,
}

impl Event {
    /// Upward moves earn points
    pub fn is_upward(&self) -> bool {
        matches!(
            self,
            Event::Move {
                direction,
                axis: Axis::Vertical,
            } if *direction < 0
        )
    }
}

/// Advance the game by one event
pub fn reduce(config: &GameConfig, state: GameState, event: &Event) -> GameState {
    match *event {
        Event::Tick { elapsed } => tick(config, state, elapsed),
        Event::Move { direction, axis } => apply_move(config, state, direction, axis),
        Event::Restart => restart(config, &state),
    }
}

/// Displace the actor by one step. Collisions are resolved on the next tick.
pub fn apply_move(config: &GameConfig, state: GameState, direction: i8, axis: Axis) -> GameState {
    if state.is_over() {
        return state;
    }

    let step = f32::from(direction.signum()) * state.actor.velocity;
    let offset = match axis {
        Axis::Horizontal => Vec2::new(step, 0.0),
        Axis::Vertical => Vec2::new(0.0, step),
    };
    let pos = state.actor.pos + offset;
    let bonus = if (Event::Move { direction, axis }).is_upward() {
        config.points_per_move
    } else {
        0
    };

    let actor = state.actor.with_pos(pos);
    GameState {
        actor,
        actor_last_position: pos,
        movement_axis: axis,
        current_score: state.current_score + bonus,
        ..state
    }
}

/// Fresh run, carrying the best score seen so far
pub fn restart(config: &GameConfig, state: &GameState) -> GameState {
    let high_score = state.high_score.max(state.current_score);
    log::debug!("Restart (high score {})", high_score);
    GameState {
        restart_flag: true,
        high_score,
        ..GameState::with_config(config)
    }
}

/// Whether turtles dive or surface on this tick
#[inline]
pub fn submerge_due(elapsed: u64) -> bool {
    elapsed > 0 && elapsed % SUBMERGE_PERIOD_TICKS == 0
}

/// Move a lane entity one tick along its lane, wrapping at the canvas edge
pub fn advance(entity: Entity, speed_bonus: f32, width: f32) -> Entity {
    let dx = (entity.velocity + speed_bonus) * entity.direction.sign();
    let pos = torus_wrap(entity.pos + Vec2::new(dx, 0.0), width);
    Entity { pos, ..entity }
}

/// What the actor is touching after motion
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Contacts {
    /// Touching a road hazard
    pub ground: bool,
    /// Standing on something that floats
    pub platform: bool,
    /// Standing on a turtle that is diving
    pub submerged_turtle: bool,
}

impl Contacts {
    /// Resolve the actor against every lane
    pub fn resolve(
        config: &GameConfig,
        actor: &Entity,
        state: &GameState,
        submerged: bool,
    ) -> Self {
        let mut contacts = Self::default();
        for (category, lane) in state.lanes.iter() {
            let hit = collides_any(
                actor,
                lane,
                config.edge_inset(category),
                config.actor_radius,
            );
            if !hit {
                continue;
            }
            if category.is_ground() {
                contacts.ground = true;
            } else if category == Category::Turtle && submerged {
                contacts.submerged_turtle = true;
            } else {
                contacts.platform = true;
            }
        }
        contacts
    }

    /// Any condition that ends the run at `y`
    pub fn is_lethal(&self, config: &GameConfig, y: f32) -> bool {
        self.ground || self.submerged_turtle || (config.in_river(y) && !self.platform)
    }
}

/// Per-frame update
pub fn tick(config: &GameConfig, state: GameState, elapsed: u64) -> GameState {
    // Frozen once the run is over; only a restart leaves this phase
    if state.is_over() {
        return state;
    }

    let speed_bonus = state.level as f32 * LEVEL_SPEED_STEP;
    let submerged = submerge_due(elapsed);
    let width = config.canvas_width;

    // Landing is judged on where the actor stood when the tick began
    let landed = config.target_zone_at(state.actor.pos);

    let actor_pos = if landed.is_some() {
        config.actor_start
    } else if state.on_platform {
        torus_wrap(
            state.actor.pos + Vec2::new(config.water_speed + speed_bonus, 0.0),
            width,
        )
    } else {
        torus_wrap(state.actor.pos, width)
    };
    let actor = state.actor.with_pos(actor_pos);

    let moved = GameState {
        lanes: state.lanes.map(|entity| advance(entity, speed_bonus, width)),
        ..state
    };

    let contacts = Contacts::resolve(config, &actor, &moved, submerged);
    let game_over = contacts.is_lethal(config, actor.pos.y);
    if game_over {
        log::debug!("Game over at tick {} ({:?})", elapsed, contacts);
    }

    let (current_score, targets_reached, level) = match landed {
        Some(zone) => {
            log::debug!("Target zone {} reached at tick {}", zone, elapsed);
            (
                moved.current_score + config.target_bonus,
                moved.targets_reached + 1,
                moved.level + 1,
            )
        }
        None => (moved.current_score, moved.targets_reached, moved.level),
    };

    GameState {
        time: elapsed,
        actor,
        game_over,
        on_platform: contacts.platform,
        show_reached_marker: landed.is_some(),
        targets_reached,
        restart_flag: false,
        high_score: moved.high_score.max(moved.current_score),
        current_score,
        level,
        submerged,
        ..moved
    }
}
