//! Lane spawning
//!
//! Turns declarative row descriptors into the initial lane entities. Runs
//! once per lane when a state is built; there is no randomness.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::state::{Category, Entity, MotionDirection};

/// Declarative description of one lane row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RowDescriptor {
    pub category: Category,
    /// Informational row count; ids always use row 0
    pub row_count: u32,
    /// Number of entities in the row
    pub column_count: u32,
    pub velocity: f32,
    pub start_x: f32,
    pub start_y: f32,
    /// Horizontal distance between neighbours (negative lays them out leftwards)
    pub x_spacing: f32,
    pub direction: MotionDirection,
    pub height: f32,
    pub width: f32,
    pub color: u32,
}

impl RowDescriptor {
    /// Row of `column_count` entities at the origin, sized zero
    pub fn new(
        category: Category,
        column_count: u32,
        velocity: f32,
        direction: MotionDirection,
    ) -> Self {
        Self {
            category,
            row_count: 0,
            column_count,
            velocity,
            start_x: 0.0,
            start_y: 0.0,
            x_spacing: 0.0,
            direction,
            height: 0.0,
            width: 0.0,
            color: 0,
        }
    }

    /// Position of the first entity
    pub fn at(self, start_x: f32, start_y: f32) -> Self {
        Self {
            start_x,
            start_y,
            ..self
        }
    }

    pub fn spacing(self, x_spacing: f32) -> Self {
        Self { x_spacing, ..self }
    }

    pub fn size(self, height: f32, width: f32) -> Self {
        Self {
            height,
            width,
            ..self
        }
    }

    pub fn color(self, color: u32) -> Self {
        Self { color, ..self }
    }
}

/// Stable id for the entity at `index` of a row.
///
/// Format is `{row}{column}{category}`, e.g. `00car`, `12turtle`.
pub fn entity_id(category: Category, index: u32, column_count: u32) -> String {
    let columns = column_count.max(1);
    format!("{}{}{}", index / columns, index % columns, category.name())
}

/// Spawn the entities of one row, left to right in spawn order
pub fn spawn_row(row: &RowDescriptor) -> Vec<Entity> {
    (0..row.column_count)
        .map(|index| {
            let column = index % row.column_count;
            Entity {
                id: entity_id(row.category, index, row.column_count),
                pos: Vec2::new(row.start_x + column as f32 * row.x_spacing, row.start_y),
                velocity: row.velocity,
                height: row.height,
                width: row.width,
                color: row.color,
                direction: row.direction,
                spawn_time: 0,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;

    fn car_row() -> RowDescriptor {
        RowDescriptor {
            category: Category::Car,
            row_count: 0,
            column_count: 3,
            velocity: 1.0,
            start_x: 580.0,
            start_y: 520.0,
            x_spacing: -150.0,
            direction: MotionDirection::Backward,
            height: 25.0,
            width: 20.0,
            color: 0xFFFFFF,
        }
    }

    #[test]
    fn test_builder_matches_literal() {
        let built = RowDescriptor::new(Category::Car, 3, 1.0, MotionDirection::Backward)
            .at(580.0, 520.0)
            .spacing(-150.0)
            .size(25.0, 20.0)
            .color(0xFFFFFF);
        assert_eq!(built, car_row());
    }

    #[test]
    fn test_spawn_positions() {
        let cars = spawn_row(&car_row());
        let xs: Vec<f32> = cars.iter().map(|c| c.pos.x).collect();
        assert_eq!(xs, vec![580.0, 430.0, 280.0]);
        assert!(cars.iter().all(|c| c.pos.y == 520.0));
    }

    #[test]
    fn test_spawn_ids() {
        let cars = spawn_row(&car_row());
        let ids: Vec<&str> = cars.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["00car", "01car", "02car"]);
    }

    #[test]
    fn test_spawn_copies_row_properties() {
        let cars = spawn_row(&car_row());
        for car in &cars {
            assert_eq!(car.direction, MotionDirection::Backward);
            assert_eq!(car.velocity, 1.0);
            assert_eq!((car.width, car.height), (20.0, 25.0));
            assert_eq!(car.spawn_time, 0);
        }
    }

    #[test]
    fn test_spawn_empty_row() {
        let row = RowDescriptor {
            column_count: 0,
            ..car_row()
        };
        assert!(spawn_row(&row).is_empty());
    }

    #[test]
    fn test_spawn_is_deterministic() {
        let config = GameConfig::default();
        for row in &config.rows {
            assert_eq!(spawn_row(row), spawn_row(row));
        }
    }
}
