//! Game state and core simulation types
//!
//! A `GameState` is a complete snapshot of one discrete time step. The
//! reducer in [`super::tick`] derives every new snapshot from the previous
//! one plus a single event.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::spawn::spawn_row;
use crate::config::GameConfig;
use crate::consts::TARGET_COUNT;

/// Id of the player-controlled actor, constant for the process lifetime
pub const ACTOR_ID: &str = "frogCharacter";

/// Coarse phase of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Simulation advancing, input accepted
    Playing,
    /// Game over or all targets reached; only a restart leaves this phase
    Over,
}

/// Horizontal travel direction of a lane entity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum MotionDirection {
    /// Towards +x
    Forward,
    /// Towards -x
    Backward,
    #[default]
    None,
}

impl MotionDirection {
    /// Unit sign applied to speed
    pub fn sign(self) -> f32 {
        match self {
            MotionDirection::Forward => 1.0,
            MotionDirection::Backward => -1.0,
            MotionDirection::None => 0.0,
        }
    }
}

/// Axis of an actor move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Axis {
    Horizontal,
    #[default]
    Vertical,
}

/// Lane entity categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Car,
    Truck,
    SportCar,
    HeavyTruck,
    Log,
    TimberLog,
    LightLog,
    Crocodile,
    Turtle,
}

impl Category {
    /// Every category, in lane storage order
    pub const ALL: [Category; 9] = [
        Category::Car,
        Category::Truck,
        Category::SportCar,
        Category::HeavyTruck,
        Category::Log,
        Category::TimberLog,
        Category::LightLog,
        Category::Crocodile,
        Category::Turtle,
    ];

    /// Road hazards; touching one is always lethal
    pub fn is_ground(self) -> bool {
        matches!(
            self,
            Category::Car | Category::Truck | Category::SportCar | Category::HeavyTruck
        )
    }

    /// River platforms that can carry the actor
    pub fn is_platform(self) -> bool {
        !self.is_ground()
    }

    /// Short name, also used as the entity id suffix
    pub fn name(self) -> &'static str {
        match self {
            Category::Car => "car",
            Category::Truck => "truck",
            Category::SportCar => "sportcar",
            Category::HeavyTruck => "monstruck",
            Category::Log => "log",
            Category::TimberLog => "timberlog",
            Category::LightLog => "lightlog",
            Category::Crocodile => "croc",
            Category::Turtle => "turtle",
        }
    }

    fn index(self) -> usize {
        match self {
            Category::Car => 0,
            Category::Truck => 1,
            Category::SportCar => 2,
            Category::HeavyTruck => 3,
            Category::Log => 4,
            Category::TimberLog => 5,
            Category::LightLog => 6,
            Category::Crocodile => 7,
            Category::Turtle => 8,
        }
    }
}

/// Any moving or static object on the board
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    /// Stable id, unique across all lanes for the run
    pub id: String,
    /// Top-left corner for lane entities, centre for the actor
    pub pos: Vec2,
    /// Speed magnitude (per tick for lanes, per move for the actor)
    pub velocity: f32,
    pub height: f32,
    pub width: f32,
    /// 0xRRGGBB
    pub color: u32,
    pub direction: MotionDirection,
    pub spawn_time: u64,
}

impl Entity {
    /// The player actor at its start position
    pub fn actor(config: &GameConfig) -> Self {
        Self {
            id: ACTOR_ID.to_string(),
            pos: config.actor_start,
            velocity: config.actor_velocity,
            height: config.actor_height,
            width: config.actor_width,
            color: config.actor_color,
            direction: MotionDirection::None,
            spawn_time: 0,
        }
    }

    /// Copy of this entity at a new position
    pub fn with_pos(&self, pos: Vec2) -> Self {
        Self {
            pos,
            ..self.clone()
        }
    }
}

/// Lane entities, one ordered sequence per category
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Lanes {
    lanes: [Vec<Entity>; 9],
}

impl Lanes {
    /// Spawn every row of the board
    pub fn spawn(config: &GameConfig) -> Self {
        let mut lanes = Self::default();
        for row in &config.rows {
            lanes.lanes[row.category.index()].extend(spawn_row(row));
        }
        lanes
    }

    pub fn get(&self, category: Category) -> &[Entity] {
        &self.lanes[category.index()]
    }

    /// Iterate `(category, entities)` in storage order
    pub fn iter(&self) -> impl Iterator<Item = (Category, &[Entity])> {
        Category::ALL
            .into_iter()
            .map(move |category| (category, self.get(category)))
    }

    /// Apply `f` to every entity of every lane
    pub fn map(self, mut f: impl FnMut(Entity) -> Entity) -> Self {
        Self {
            lanes: self.lanes.map(|lane| lane.into_iter().map(&mut f).collect()),
        }
    }

    /// Total entity count across lanes
    pub fn len(&self) -> usize {
        self.lanes.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    /// Elapsed tick count of the last processed tick
    pub time: u64,
    /// Player actor
    pub actor: Entity,
    /// Hazards and platforms
    pub lanes: Lanes,
    /// Reserved; never populated
    pub removable: Vec<Entity>,
    /// Reserved; never read
    pub object_count: u32,
    pub game_over: bool,
    /// Actor was supported by a platform on the last tick
    pub on_platform: bool,
    /// Actor position after the most recent move
    pub actor_last_position: Vec2,
    /// A target zone was reached on the last tick
    pub show_reached_marker: bool,
    /// Axis of the most recent move
    pub movement_axis: Axis,
    pub targets_reached: u8,
    /// Set by a restart, cleared by the next tick
    pub restart_flag: bool,
    pub current_score: u64,
    pub high_score: u64,
    pub level: u32,
    /// Turtles dived or surfaced on the last tick
    pub submerged: bool,
}

impl GameState {
    /// Initial state of the stock board
    pub fn new() -> Self {
        Self::with_config(&GameConfig::default())
    }

    /// Initial state for an already validated config
    pub fn with_config(config: &GameConfig) -> Self {
        let actor = Entity::actor(config);
        Self {
            time: 0,
            actor_last_position: actor.pos,
            actor,
            lanes: Lanes::spawn(config),
            removable: Vec::new(),
            object_count: 0,
            game_over: false,
            on_platform: false,
            show_reached_marker: false,
            movement_axis: Axis::Vertical,
            targets_reached: 0,
            restart_flag: false,
            current_score: 0,
            high_score: 0,
            level: 0,
            submerged: false,
        }
    }

    /// Validate `config` and build the initial state from it
    pub fn try_with_config(config: &GameConfig) -> Result<Self, crate::ConfigError> {
        config.validate()?;
        Ok(Self::with_config(config))
    }

    pub fn phase(&self) -> GamePhase {
        if self.is_over() {
            GamePhase::Over
        } else {
            GamePhase::Playing
        }
    }

    /// Game over or every target reached
    pub fn is_over(&self) -> bool {
        self.game_over || self.all_targets_reached()
    }

    pub fn all_targets_reached(&self) -> bool {
        self.targets_reached >= TARGET_COUNT
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_initial_state() {
        let state = GameState::new();
        assert_eq!(state.phase(), GamePhase::Playing);
        assert_eq!(state.actor.id, ACTOR_ID);
        assert_eq!(state.actor.pos, Vec2::new(270.0, 580.0));
        assert_eq!(state.actor_last_position, state.actor.pos);
        assert_eq!(state.targets_reached, 0);
        assert_eq!(state.level, 0);
        assert!(state.removable.is_empty());
    }

    #[test]
    fn test_lane_sizes() {
        let state = GameState::new();
        assert_eq!(state.lanes.get(Category::Car).len(), 3);
        assert_eq!(state.lanes.get(Category::TimberLog).len(), 2);
        assert_eq!(state.lanes.get(Category::LightLog).len(), 2);
        assert_eq!(state.lanes.get(Category::Turtle).len(), 3);
        assert_eq!(state.lanes.len(), 25);
    }

    #[test]
    fn test_entity_ids_unique_across_lanes() {
        let state = GameState::new();
        let mut seen = HashSet::new();
        for (_, lane) in state.lanes.iter() {
            for entity in lane {
                assert!(seen.insert(entity.id.clone()), "duplicate id {}", entity.id);
            }
        }
        assert!(!seen.contains(ACTOR_ID));
    }

    #[test]
    fn test_phase_over_when_all_targets_reached() {
        let state = GameState {
            targets_reached: TARGET_COUNT,
            ..GameState::new()
        };
        assert_eq!(state.phase(), GamePhase::Over);
        assert!(!state.game_over);
    }

    #[test]
    fn test_category_partition() {
        let ground: Vec<_> = Category::ALL.into_iter().filter(|c| c.is_ground()).collect();
        assert_eq!(
            ground,
            vec![Category::Car, Category::Truck, Category::SportCar, Category::HeavyTruck]
        );
        assert!(Category::Turtle.is_platform());
        assert!(Category::Crocodile.is_platform());
    }

    #[test]
    fn test_try_with_config_rejects_invalid() {
        let config = GameConfig {
            actor_radius: -1.0,
            ..Default::default()
        };
        assert!(GameState::try_with_config(&config).is_err());
    }

    #[test]
    fn test_state_serializes() {
        let json = serde_json::to_string(&GameState::new()).unwrap();
        assert!(json.contains("frogCharacter"));
        assert!(json.contains("\"00turtle\""));
    }
}
