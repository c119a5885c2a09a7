//! Keyboard mapping
//!
//! Exactly five keys drive the game. A key produces one event per
//! press-and-release cycle; holding it down does nothing more.

use crate::sim::{Axis, Event};

/// Game control keys
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Left,
    Right,
    Up,
    Down,
    Restart,
}

impl Key {
    const COUNT: usize = 5;

    /// Map a DOM `KeyboardEvent.key` value
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "ArrowLeft" => Some(Key::Left),
            "ArrowRight" => Some(Key::Right),
            "ArrowUp" => Some(Key::Up),
            "ArrowDown" => Some(Key::Down),
            "r" => Some(Key::Restart),
            _ => None,
        }
    }

    /// Event produced by pressing this key
    pub fn event(self) -> Event {
        match self {
            Key::Left => Event::Move {
                direction: -1,
                axis: Axis::Horizontal,
            },
            Key::Right => Event::Move {
                direction: 1,
                axis: Axis::Horizontal,
            },
            Key::Up => Event::Move {
                direction: -1,
                axis: Axis::Vertical,
            },
            Key::Down => Event::Move {
                direction: 1,
                axis: Axis::Vertical,
            },
            Key::Restart => Event::Restart,
        }
    }

    fn slot(self) -> usize {
        self as usize
    }
}

/// Tracks held keys so auto-repeat never reaches the reducer
#[derive(Debug, Clone, Default)]
pub struct KeyMapper {
    held: [bool; Key::COUNT],
}

impl KeyMapper {
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle a key press. `repeat` is the host's auto-repeat flag.
    ///
    /// Returns the event for the first press of a mapped key, `None` for
    /// unmapped keys and repeats.
    pub fn key_down(&mut self, name: &str, repeat: bool) -> Option<Event> {
        let key = Key::from_name(name)?;
        if repeat || self.held[key.slot()] {
            return None;
        }
        self.held[key.slot()] = true;
        Some(key.event())
    }

    /// Handle a key release
    pub fn key_up(&mut self, name: &str) {
        if let Some(key) = Key::from_name(name) {
            self.held[key.slot()] = false;
        }
    }

    /// Forget every held key (focus lost: releases will never arrive)
    pub fn release_all(&mut self) {
        self.held = [false; Key::COUNT];
    }

    pub fn is_held(&self, key: Key) -> bool {
        self.held[key.slot()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arrow_mapping() {
        let mut keys = KeyMapper::new();
        assert_eq!(
            keys.key_down("ArrowUp", false),
            Some(Event::Move {
                direction: -1,
                axis: Axis::Vertical
            })
        );
        assert_eq!(
            keys.key_down("ArrowRight", false),
            Some(Event::Move {
                direction: 1,
                axis: Axis::Horizontal
            })
        );
        assert_eq!(keys.key_down("r", false), Some(Event::Restart));
    }

    #[test]
    fn test_only_up_is_upward() {
        assert!(Key::Up.event().is_upward());
        assert!(!Key::Down.event().is_upward());
        assert!(!Key::Left.event().is_upward());
        assert!(!Key::Restart.event().is_upward());
    }

    #[test]
    fn test_unmapped_keys_ignored() {
        let mut keys = KeyMapper::new();
        assert_eq!(keys.key_down("a", false), None);
        assert_eq!(keys.key_down("R", false), None);
        assert_eq!(keys.key_down(" ", false), None);
    }

    #[test]
    fn test_held_key_fires_once() {
        let mut keys = KeyMapper::new();
        assert!(keys.key_down("ArrowLeft", false).is_some());
        assert!(keys.is_held(Key::Left));
        assert_eq!(keys.key_down("ArrowLeft", false), None);
        assert_eq!(keys.key_down("ArrowLeft", true), None);

        keys.key_up("ArrowLeft");
        assert!(!keys.is_held(Key::Left));
        assert!(keys.key_down("ArrowLeft", false).is_some());
    }

    #[test]
    fn test_host_repeat_flag_suppressed() {
        let mut keys = KeyMapper::new();
        assert_eq!(keys.key_down("ArrowDown", true), None);
        assert!(!keys.is_held(Key::Down));
    }

    #[test]
    fn test_keys_tracked_independently() {
        let mut keys = KeyMapper::new();
        assert!(keys.key_down("ArrowUp", false).is_some());
        assert!(keys.key_down("ArrowLeft", false).is_some());
        keys.key_up("ArrowUp");
        assert!(keys.key_down("ArrowUp", false).is_some());
        assert_eq!(keys.key_down("ArrowLeft", false), None);
    }

    #[test]
    fn test_release_all() {
        let mut keys = KeyMapper::new();
        keys.key_down("ArrowUp", false);
        keys.release_all();
        assert!(keys.key_down("ArrowUp", false).is_some());
    }
}
