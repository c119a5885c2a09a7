//! View layer
//!
//! The simulation never touches rendering. [`SceneCache`] is the view's own
//! mutable cache of drawable elements, keyed by entity id and diffed against
//! every state the reducer emits. Painters read the cache.

#[cfg(target_arch = "wasm32")]
pub mod canvas;

use std::collections::HashMap;

use glam::Vec2;

use crate::config::GameConfig;
use crate::sim::{ACTOR_ID, Category, Entity, GameState};

/// Text shown over a finished run
pub const GAME_OVER_TEXT: &str = "Game Over: Press r to restart";

/// Radius of the circle marking a reached target zone
pub const MARKER_RADIUS: f32 = 15.0;

/// CSS color string for a 0xRRGGBB value
pub fn css_color(rgb: u32) -> String {
    format!("#{:06x}", rgb & 0xFF_FF_FF)
}

/// Rendering class of an element
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementKind {
    Actor,
    Lane(Category),
}

/// One drawable element
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    pub id: String,
    pub kind: ElementKind,
    pub pos: Vec2,
    pub width: f32,
    pub height: f32,
    pub color: u32,
    pub visible: bool,
}

impl Element {
    fn from_entity(entity: &Entity, kind: ElementKind) -> Self {
        Self {
            id: entity.id.clone(),
            kind,
            pos: entity.pos,
            width: entity.width,
            height: entity.height,
            color: entity.color,
            visible: true,
        }
    }
}

/// Change applied to the cache while projecting one state
#[derive(Debug, Clone, PartialEq)]
pub enum ViewOp {
    Create { id: String },
    Reposition { id: String, pos: Vec2 },
    SetVisible { id: String, visible: bool },
    Remove { id: String },
    AddMarker { center: Vec2 },
    ClearMarkers,
    ShowBanner,
    HideBanner,
}

/// Scoreboard values
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Hud {
    pub current_score: u64,
    pub high_score: u64,
    pub level: u32,
}

/// Rendering cache keyed by entity id
#[derive(Debug, Clone, Default)]
pub struct SceneCache {
    elements: HashMap<String, Element>,
    /// Paint order (creation order)
    order: Vec<String>,
    markers: Vec<Vec2>,
    banner: bool,
    hud: Hud,
}

impl SceneCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn element(&self, id: &str) -> Option<&Element> {
        self.elements.get(id)
    }

    /// Elements in paint order
    pub fn elements(&self) -> impl Iterator<Item = &Element> {
        self.order.iter().filter_map(|id| self.elements.get(id))
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Centres of the reached-zone markers
    pub fn markers(&self) -> &[Vec2] {
        &self.markers
    }

    pub fn banner_visible(&self) -> bool {
        self.banner
    }

    pub fn hud(&self) -> Hud {
        self.hud
    }

    /// Project `state` onto the cache, returning what changed
    pub fn apply(&mut self, config: &GameConfig, state: &GameState) -> Vec<ViewOp> {
        let mut ops = Vec::new();
        let over = state.is_over();

        self.hud = Hud {
            current_score: state.current_score,
            high_score: if over {
                state.high_score.max(state.current_score)
            } else {
                state.high_score
            },
            level: state.level,
        };

        if over {
            if !self.banner {
                self.banner = true;
                ops.push(ViewOp::ShowBanner);
            }
        } else {
            if self.banner {
                self.banner = false;
                ops.push(ViewOp::HideBanner);
            }
            if state.restart_flag && !self.markers.is_empty() {
                self.markers.clear();
                ops.push(ViewOp::ClearMarkers);
            }
        }

        if state.show_reached_marker {
            match marker_center(config, state.actor_last_position) {
                Some(center) => {
                    self.markers.push(center);
                    ops.push(ViewOp::AddMarker { center });
                }
                None => log::warn!(
                    "Reached marker requested outside any zone at {:?}",
                    state.actor_last_position
                ),
            }
        }

        if over {
            // Clear the board for the end screen
            let ids: Vec<String> = std::iter::once(&state.actor)
                .chain(state.lanes.iter().flat_map(|(_, lane)| lane.iter()))
                .map(|entity| entity.id.clone())
                .collect();
            for id in ids {
                self.remove(&id, &mut ops);
            }
            return ops;
        }

        self.upsert(&state.actor, ElementKind::Actor, &mut ops);
        for (category, lane) in state.lanes.iter() {
            for entity in lane {
                self.upsert(entity, ElementKind::Lane(category), &mut ops);
            }
        }

        if state.submerged {
            for turtle in state.lanes.get(Category::Turtle) {
                if let Some(element) = self.elements.get_mut(&turtle.id) {
                    element.visible = !element.visible;
                    ops.push(ViewOp::SetVisible {
                        id: turtle.id.clone(),
                        visible: element.visible,
                    });
                }
            }
        }

        ops
    }

    fn upsert(&mut self, entity: &Entity, kind: ElementKind, ops: &mut Vec<ViewOp>) {
        match self.elements.get_mut(&entity.id) {
            Some(element) => {
                if element.pos != entity.pos {
                    element.pos = entity.pos;
                    ops.push(ViewOp::Reposition {
                        id: entity.id.clone(),
                        pos: entity.pos,
                    });
                }
            }
            None => {
                self.elements
                    .insert(entity.id.clone(), Element::from_entity(entity, kind));
                self.order.push(entity.id.clone());
                ops.push(ViewOp::Create {
                    id: entity.id.clone(),
                });
            }
        }
    }

    /// Removing an element that is not present is a no-op
    fn remove(&mut self, id: &str, ops: &mut Vec<ViewOp>) {
        if self.elements.remove(id).is_some() {
            self.order.retain(|other| other != id);
            ops.push(ViewOp::Remove { id: id.to_string() });
        }
    }

    /// Whether the actor element is currently drawn
    pub fn actor_visible(&self) -> bool {
        self.elements.contains_key(ACTOR_ID)
    }
}

/// Marker position for the zone containing `last_position`
pub fn marker_center(config: &GameConfig, last_position: Vec2) -> Option<Vec2> {
    config
        .target_zones
        .iter()
        .find(|zone| zone.contains(last_position.x))
        .map(|zone| Vec2::new(zone.x.center(), config.landing.center()))
}
