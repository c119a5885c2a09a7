//! Collision detection
//!
//! The actor is a circle, every lane entity an axis-aligned rectangle. A
//! right-edge inset shrinks the rectangle so a category can expose a
//! smaller hitbox than it draws (crocodile mouths).

use glam::Vec2;

use super::state::Entity;

/// Closest point on `other`'s (inset) rectangle to `point`
#[inline]
pub fn closest_point(point: Vec2, other: &Entity, edge_inset: f32) -> Vec2 {
    let left = other.pos.x;
    let right = other.pos.x + (other.width - edge_inset);
    let top = other.pos.y;
    let bottom = other.pos.y + other.height;

    let x = if point.x < left {
        left
    } else if point.x > right {
        right
    } else {
        point.x
    };
    let y = if point.y < top {
        top
    } else if point.y > bottom {
        bottom
    } else {
        point.y
    };
    Vec2::new(x, y)
}

/// Check whether the actor circle touches `other`
///
/// Touching counts: a distance equal to `radius` is a hit.
pub fn collides(actor: &Entity, other: &Entity, edge_inset: f32, radius: f32) -> bool {
    let closest = closest_point(actor.pos, other, edge_inset);
    actor.pos.distance(closest) <= radius
}

/// Check the actor against a whole lane
pub fn collides_any(actor: &Entity, lane: &[Entity], edge_inset: f32, radius: f32) -> bool {
    lane.iter().any(|other| collides(actor, other, edge_inset, radius))
}
