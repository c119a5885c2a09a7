//! Game driver
//!
//! Owns the config, the current state and the event sources, and folds the
//! event queue through the reducer. Host-agnostic: the wasm entry point and
//! the native demo both drive it.

use crate::config::GameConfig;
use crate::error::ConfigError;
use crate::platform::{EventQueue, KeyMapper, TickClock};
use crate::sim::{Event, GamePhase, GameState, reduce};

#[derive(Debug, Clone)]
pub struct Game {
    config: GameConfig,
    state: GameState,
    queue: EventQueue,
    clock: TickClock,
    keys: KeyMapper,
}

impl Game {
    /// Game on the stock board
    pub fn new() -> Self {
        let config = GameConfig::default();
        Self {
            state: GameState::with_config(&config),
            config,
            queue: EventQueue::new(),
            clock: TickClock::new(),
            keys: KeyMapper::new(),
        }
    }

    /// Game on a custom board
    pub fn with_config(config: GameConfig) -> Result<Self, ConfigError> {
        let state = GameState::try_with_config(&config)?;
        Ok(Self {
            config,
            state,
            queue: EventQueue::new(),
            clock: TickClock::new(),
            keys: KeyMapper::new(),
        })
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn phase(&self) -> GamePhase {
        self.state.phase()
    }

    /// Queue an event behind everything already pending
    pub fn push(&mut self, event: Event) {
        self.queue.push(event);
    }

    /// Key press from the host. Returns true if the key belongs to the game.
    pub fn key_down(&mut self, name: &str, repeat: bool) -> bool {
        match self.keys.key_down(name, repeat) {
            Some(event) => {
                self.queue.push(event);
                true
            }
            None => crate::platform::Key::from_name(name).is_some(),
        }
    }

    pub fn key_up(&mut self, name: &str) {
        self.keys.key_up(name);
    }

    /// Focus lost: held keys will never see their release
    pub fn blur(&mut self) {
        self.keys.release_all();
        self.clock.reset_frame();
    }

    /// Animation frame at `now_ms`: queue the ticks that are due
    pub fn frame(&mut self, now_ms: f64) {
        let ticks = self.clock.advance(now_ms);
        self.queue.extend(ticks);
    }

    /// Fold every pending event, handing each resulting state to `on_state`
    /// in order. Returns the number of events processed.
    pub fn process(&mut self, mut on_state: impl FnMut(&GameConfig, &GameState)) -> usize {
        let mut processed = 0;
        while let Some(event) = self.queue.pop() {
            let was_over = self.state.is_over();
            self.state = reduce(&self.config, self.state.clone(), &event);
            if !was_over && self.state.is_over() {
                log::info!(
                    "Run over: score {}, targets {}, level {}",
                    self.state.current_score,
                    self.state.targets_reached,
                    self.state.level
                );
            }
            on_state(&self.config, &self.state);
            processed += 1;
        }
        processed
    }

    /// Current state as JSON for the host page
    pub fn snapshot_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.state)
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    #[test]
    fn test_keys_and_ticks_fold_in_order() {
        let mut game = Game::new();
        game.frame(0.0);
        game.frame(20.0);
        assert!(game.key_down("ArrowUp", false));
        game.frame(30.0);

        let mut times = Vec::new();
        let mut scores = Vec::new();
        let processed = game.process(|_, state| {
            times.push(state.time);
            scores.push(state.current_score);
        });
        assert_eq!(processed, 4);
        // tick 0, tick 1, move up, tick 2
        assert_eq!(times, vec![0, 1, 1, 2]);
        assert_eq!(scores, vec![0, 0, 10, 10]);
        assert_eq!(game.state().actor.pos, Vec2::new(270.0, 540.0));
    }

    #[test]
    fn test_held_key_moves_once() {
        let mut game = Game::new();
        assert!(game.key_down("ArrowUp", false));
        assert!(game.key_down("ArrowUp", true));
        assert!(game.key_down("ArrowUp", false));
        game.process(|_, _| {});
        assert_eq!(game.state().current_score, 10);

        game.key_up("ArrowUp");
        game.key_down("ArrowUp", false);
        game.process(|_, _| {});
        assert_eq!(game.state().current_score, 20);
    }

    #[test]
    fn test_unmapped_key_not_consumed() {
        let mut game = Game::new();
        assert!(!game.key_down("x", false));
        assert_eq!(game.process(|_, _| {}), 0);
    }

    #[test]
    fn test_restart_key_after_game_over() {
        let mut game = Game::new();
        // Walk into the road until something hits
        for _ in 0..3 {
            game.push(Event::Move {
                direction: -1,
                axis: crate::sim::Axis::Vertical,
            });
        }
        let mut elapsed = 0;
        while game.phase() == GamePhase::Playing && elapsed < 2000 {
            game.push(Event::Tick { elapsed });
            game.process(|_, _| {});
            elapsed += 1;
        }
        assert_eq!(game.phase(), GamePhase::Over);
        let score = game.state().current_score;

        game.key_down("r", false);
        game.process(|_, _| {});
        assert_eq!(game.phase(), GamePhase::Playing);
        assert!(game.state().restart_flag);
        assert_eq!(game.state().high_score, score);
    }

    #[test]
    fn test_with_config_rejects_invalid() {
        let config = GameConfig {
            canvas_width: -1.0,
            ..Default::default()
        };
        assert!(Game::with_config(config).is_err());
    }

    #[test]
    fn test_snapshot_json() {
        let game = Game::new();
        let json = game.snapshot_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["targets_reached"], 0);
        assert_eq!(value["actor"]["id"], "frogCharacter");
    }
}
