//! 2D canvas painter (wasm only)
//!
//! Draws the static scenery from the config, then every element of the
//! scene cache. Holds no game state of its own.

use web_sys::CanvasRenderingContext2d;

use super::{ElementKind, GAME_OVER_TEXT, MARKER_RADIUS, SceneCache, css_color};
use crate::config::GameConfig;

/// Height of the safe strip between road and river
const SAFE_STRIP_HEIGHT: f64 = 50.0;
/// Top of the hedge row above the landing blocks
const HEDGE_Y: f64 = 35.0;
const HEDGE_HEIGHT: f64 = 20.0;
const LANDING_BLOCK_HEIGHT: f64 = 30.0;

pub struct CanvasPainter {
    ctx: CanvasRenderingContext2d,
}

impl CanvasPainter {
    pub fn new(ctx: CanvasRenderingContext2d) -> Self {
        Self { ctx }
    }

    /// Repaint the whole frame
    pub fn paint(&self, config: &GameConfig, scene: &SceneCache) {
        let width = f64::from(config.canvas_width);
        let height = f64::from(config.canvas_height);
        self.ctx.clear_rect(0.0, 0.0, width, height);

        self.paint_scenery(config);

        for element in scene.elements().filter(|e| e.visible) {
            self.ctx.set_fill_style_str(&css_color(element.color));
            match element.kind {
                ElementKind::Actor => {
                    self.circle(
                        f64::from(element.pos.x),
                        f64::from(element.pos.y),
                        f64::from(config.actor_radius),
                    );
                }
                ElementKind::Lane(_) => self.ctx.fill_rect(
                    f64::from(element.pos.x),
                    f64::from(element.pos.y),
                    f64::from(element.width),
                    f64::from(element.height),
                ),
            }
        }

        self.ctx.set_fill_style_str("red");
        self.ctx.set_stroke_style_str("purple");
        for marker in scene.markers() {
            self.circle(
                f64::from(marker.x),
                f64::from(marker.y),
                f64::from(MARKER_RADIUS),
            );
            self.ctx.stroke();
        }

        if scene.banner_visible() {
            self.ctx.set_font("40px sans-serif");
            self.ctx.set_fill_style_str("black");
            self.ctx.set_stroke_style_str("white");
            let _ = self.ctx.fill_text(GAME_OVER_TEXT, 35.0, 300.0);
            let _ = self.ctx.stroke_text(GAME_OVER_TEXT, 35.0, 300.0);
        }
    }

    fn paint_scenery(&self, config: &GameConfig) {
        let width = f64::from(config.canvas_width);
        let river_top = f64::from(config.river.min);
        let river_bottom = f64::from(config.river.max);

        // Water
        self.ctx.set_global_alpha(0.4);
        self.ctx.set_fill_style_str("#007577");
        self.ctx.fill_rect(0.0, river_top, width, river_bottom - river_top);

        // Safe strip
        self.ctx.set_global_alpha(0.1);
        self.ctx.set_fill_style_str("yellow");
        self.ctx.fill_rect(0.0, river_bottom, width, SAFE_STRIP_HEIGHT);
        self.ctx.set_global_alpha(1.0);

        // Hedge and the landing blocks between target zones
        self.ctx.set_fill_style_str("green");
        self.ctx.fill_rect(0.0, HEDGE_Y, width, HEDGE_HEIGHT);

        let top = f64::from(config.landing.min);
        let mut left = 0.0;
        for zone in &config.target_zones {
            let right = f64::from(zone.x.min);
            if right > left {
                self.ctx.fill_rect(left, top, right - left, LANDING_BLOCK_HEIGHT);
            }
            left = f64::from(zone.x.max);
        }
        if width > left {
            self.ctx.fill_rect(left, top, width - left, LANDING_BLOCK_HEIGHT);
        }
    }

    fn circle(&self, x: f64, y: f64, r: f64) {
        self.ctx.begin_path();
        if let Err(e) = self.ctx.arc(x, y, r, 0.0, std::f64::consts::TAU) {
            log::warn!("Canvas arc failed: {:?}", e);
            return;
        }
        self.ctx.fill();
    }
}
