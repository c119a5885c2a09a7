//! Board layout and tuning
//!
//! Everything the spawner and reducer need to know about the board lives in
//! [`GameConfig`]. The default reproduces the stock 600x600 board.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::sim::spawn::RowDescriptor;
use crate::sim::state::{Category, MotionDirection};

/// Closed numeric interval `[min, max]`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Band {
    pub min: f32,
    pub max: f32,
}

impl Band {
    pub const fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    /// Inclusive containment
    #[inline]
    pub fn contains(&self, v: f32) -> bool {
        v >= self.min && v <= self.max
    }

    /// Exclusive containment (both edges outside)
    #[inline]
    pub fn contains_open(&self, v: f32) -> bool {
        v > self.min && v < self.max
    }

    pub fn center(&self) -> f32 {
        (self.min + self.max) / 2.0
    }
}

/// One landing slot at the top of the board
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TargetZone {
    /// Horizontal extent of the slot
    pub x: Band,
    /// Whether an actor exactly on either edge counts as landed
    pub inclusive: bool,
}

impl TargetZone {
    /// Slot whose edges count as inside
    pub const fn closed(min: f32, max: f32) -> Self {
        Self {
            x: Band::new(min, max),
            inclusive: true,
        }
    }

    /// Slot whose edges count as outside
    pub const fn open(min: f32, max: f32) -> Self {
        Self {
            x: Band::new(min, max),
            inclusive: false,
        }
    }

    /// Whether `x` lies in the slot
    #[inline]
    pub fn contains(&self, x: f32) -> bool {
        if self.inclusive {
            self.x.contains(x)
        } else {
            self.x.contains_open(x)
        }
    }
}

/// Colors as 0xRRGGBB
pub mod colors {
    pub const WHITE: u32 = 0xFF_FF_FF;
    pub const RED: u32 = 0xFF_00_00;
    pub const GREEN: u32 = 0x00_80_00;
    pub const YELLOW: u32 = 0xFF_FF_00;
    pub const LOG_BROWN: u32 = 0x80_47_1C;
    pub const CROC_GREEN: u32 = 0x01_32_20;
}

/// Immutable board configuration threaded into the spawner and reducer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Canvas width; lanes wrap horizontally at this width
    pub canvas_width: f32,
    pub canvas_height: f32,

    // === Actor ===
    pub actor_start: Vec2,
    /// Distance covered by a single move
    pub actor_velocity: f32,
    /// Collision radius of the actor circle
    pub actor_radius: f32,
    pub actor_width: f32,
    pub actor_height: f32,
    pub actor_color: u32,

    // === Scoring ===
    /// Awarded for every upward move
    pub points_per_move: u64,
    /// Awarded when the actor lands in a target zone
    pub target_bonus: u64,

    // === Lanes ===
    /// Base speed of every river platform and of the current carrying the actor
    pub water_speed: f32,
    /// Base speed of every road hazard
    pub ground_speed: f32,
    /// River y-range (exclusive); unsupported actors inside it drown
    pub river: Band,
    /// Landing row. The actor has landed when `y < landing.max`; `min` is
    /// the top edge of the landing blocks.
    pub landing: Band,
    pub target_zones: [TargetZone; 4],
    /// Right-edge inset applied to crocodile hitboxes (the open mouth)
    pub crocodile_inset: f32,
    /// Lane rows, spawned in order at state construction
    pub rows: Vec<RowDescriptor>,
}

impl Default for GameConfig {
    fn default() -> Self {
        let water_speed = 0.5;
        let ground_speed = 1.0;
        Self {
            canvas_width: 600.0,
            canvas_height: 600.0,

            actor_start: Vec2::new(270.0, 580.0),
            actor_velocity: 40.0,
            actor_radius: 10.0,
            actor_width: 20.0,
            actor_height: 20.0,
            actor_color: colors::GREEN,

            points_per_move: 10,
            target_bonus: 40,

            water_speed,
            ground_speed,
            river: Band::new(120.0, 312.0),
            landing: Band::new(56.0, 91.0),
            target_zones: [
                // The leftmost slot excludes its edges
                TargetZone::open(71.0, 130.0),
                TargetZone::closed(200.0, 260.0),
                TargetZone::closed(330.0, 395.0),
                TargetZone::closed(465.0, 529.0),
            ],
            crocodile_inset: 50.0,
            rows: stock_rows(ground_speed, water_speed),
        }
    }
}

/// Lane table of the stock board
fn stock_rows(ground_speed: f32, water_speed: f32) -> Vec<RowDescriptor> {
    use MotionDirection::{Backward, Forward};

    vec![
        RowDescriptor::new(Category::Car, 3, ground_speed, Backward)
            .at(580.0, 520.0)
            .spacing(-150.0)
            .size(25.0, 20.0)
            .color(colors::WHITE),
        RowDescriptor::new(Category::Truck, 3, ground_speed, Forward)
            .at(0.0, 465.0)
            .spacing(150.0)
            .size(25.0, 70.0)
            .color(colors::RED),
        RowDescriptor::new(Category::SportCar, 3, ground_speed, Backward)
            .at(550.0, 425.0)
            .spacing(-150.0)
            .size(25.0, 20.0)
            .color(colors::WHITE),
        RowDescriptor::new(Category::HeavyTruck, 3, ground_speed, Forward)
            .at(50.0, 385.0)
            .spacing(150.0)
            .size(25.0, 70.0)
            .color(colors::RED),
        RowDescriptor::new(Category::Log, 3, water_speed, Forward)
            .at(0.0, 280.0)
            .spacing(300.0)
            .size(20.0, 280.0)
            .color(colors::LOG_BROWN),
        RowDescriptor::new(Category::TimberLog, 2, water_speed, Forward)
            .at(50.0, 200.0)
            .spacing(300.0)
            .size(20.0, 280.0)
            .color(colors::LOG_BROWN),
        RowDescriptor::new(Category::Crocodile, 3, water_speed, Forward)
            .at(0.0, 240.0)
            .spacing(200.0)
            .size(20.0, 130.0)
            .color(colors::CROC_GREEN),
        RowDescriptor::new(Category::LightLog, 2, water_speed, Forward)
            .at(50.0, 120.0)
            .spacing(300.0)
            .size(20.0, 280.0)
            .color(colors::LOG_BROWN),
        RowDescriptor::new(Category::Turtle, 3, water_speed, Forward)
            .at(0.0, 160.0)
            .spacing(200.0)
            .size(20.0, 100.0)
            .color(colors::YELLOW),
    ]
}

impl GameConfig {
    /// Check the board is playable
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.canvas_width.is_finite() && self.canvas_width > 0.0) {
            return Err(ConfigError::InvalidCanvasWidth(self.canvas_width));
        }
        if !(self.actor_radius.is_finite() && self.actor_radius > 0.0) {
            return Err(ConfigError::InvalidActorRadius(self.actor_radius));
        }

        let speeds = [
            ("actor_velocity", self.actor_velocity),
            ("water_speed", self.water_speed),
            ("ground_speed", self.ground_speed),
        ];
        for (name, value) in speeds {
            if !value.is_finite() {
                return Err(ConfigError::NonFiniteSpeed { name, value });
            }
        }

        for (index, zone) in self.target_zones.iter().enumerate() {
            if zone.x.min < 0.0 || zone.x.max > self.canvas_width || zone.x.min > zone.x.max {
                return Err(ConfigError::TargetZoneOutOfBounds {
                    index,
                    min: zone.x.min,
                    max: zone.x.max,
                    width: self.canvas_width,
                });
            }
        }

        for row in &self.rows {
            if row.column_count == 0 {
                return Err(ConfigError::EmptyLane(row.category.name()));
            }
            if !row.velocity.is_finite() {
                return Err(ConfigError::NonFiniteSpeed {
                    name: row.category.name(),
                    value: row.velocity,
                });
            }
        }

        Ok(())
    }

    /// Index of the target zone containing `pos`, if the actor has landed
    pub fn target_zone_at(&self, pos: Vec2) -> Option<usize> {
        if pos.y >= self.landing.max {
            return None;
        }
        self.target_zones.iter().position(|zone| zone.contains(pos.x))
    }

    /// Whether `y` lies strictly inside the river
    pub fn in_river(&self, y: f32) -> bool {
        self.river.contains_open(y)
    }

    /// Collision inset for a lane category
    pub fn edge_inset(&self, category: Category) -> f32 {
        match category {
            Category::Crocodile => self.crocodile_inset,
            _ => 0.0,
        }
    }
}
