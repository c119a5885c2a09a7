//! Fixed-cadence tick clock
//!
//! Animation frames arrive at whatever rate the browser likes; the reducer
//! wants one tick every `TICK_INTERVAL_MS`. The clock accumulates frame time
//! and emits the ticks that are due, numbering them from zero.

use crate::consts::{MAX_FRAME_MS, MAX_TICKS_PER_FRAME, TICK_INTERVAL_MS};
use crate::sim::Event;

#[derive(Debug, Clone, Default)]
pub struct TickClock {
    accumulator: f64,
    last_time: Option<f64>,
    next_elapsed: u64,
}

impl TickClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of ticks emitted so far
    pub fn elapsed(&self) -> u64 {
        self.next_elapsed
    }

    /// Feed a frame timestamp (ms) and collect the ticks now due
    pub fn advance(&mut self, now_ms: f64) -> Vec<Event> {
        let Some(last) = self.last_time.replace(now_ms) else {
            return Vec::new();
        };

        // Long stalls (tab in background) are not replayed
        let dt = (now_ms - last).clamp(0.0, MAX_FRAME_MS);
        self.accumulator += dt;

        let mut ticks = Vec::new();
        while self.accumulator >= TICK_INTERVAL_MS && (ticks.len() as u32) < MAX_TICKS_PER_FRAME {
            ticks.push(Event::Tick {
                elapsed: self.next_elapsed,
            });
            self.next_elapsed += 1;
            self.accumulator -= TICK_INTERVAL_MS;
        }
        ticks
    }

    /// Drop any pending time, e.g. after the page was hidden
    pub fn reset_frame(&mut self) {
        self.accumulator = 0.0;
        self.last_time = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn elapsed_of(events: &[Event]) -> Vec<u64> {
        events
            .iter()
            .filter_map(|e| match e {
                Event::Tick { elapsed } => Some(*elapsed),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_first_frame_emits_nothing() {
        let mut clock = TickClock::new();
        assert!(clock.advance(1000.0).is_empty());
    }

    #[test]
    fn test_ticks_every_interval() {
        let mut clock = TickClock::new();
        clock.advance(0.0);
        assert_eq!(elapsed_of(&clock.advance(16.0)), vec![0]);
        // 6 ms carried over + 16 ms
        assert_eq!(elapsed_of(&clock.advance(32.0)), vec![1, 2]);
        assert_eq!(clock.elapsed(), 3);
    }

    #[test]
    fn test_short_frames_accumulate() {
        let mut clock = TickClock::new();
        clock.advance(0.0);
        assert!(clock.advance(4.0).is_empty());
        assert!(clock.advance(8.0).is_empty());
        assert_eq!(elapsed_of(&clock.advance(12.0)), vec![0]);
    }

    #[test]
    fn test_long_stall_is_capped() {
        let mut clock = TickClock::new();
        clock.advance(0.0);
        let ticks = clock.advance(60_000.0);
        let cap = MAX_TICKS_PER_FRAME.min((MAX_FRAME_MS / TICK_INTERVAL_MS) as u32);
        assert_eq!(ticks.len() as u32, cap);
    }

    #[test]
    fn test_time_going_backwards_is_ignored() {
        let mut clock = TickClock::new();
        clock.advance(100.0);
        assert!(clock.advance(50.0).is_empty());
        assert_eq!(clock.elapsed(), 0);
    }

    #[test]
    fn test_reset_frame_keeps_count() {
        let mut clock = TickClock::new();
        clock.advance(0.0);
        clock.advance(25.0);
        assert_eq!(clock.elapsed(), 2);
        clock.reset_frame();
        assert!(clock.advance(5000.0).is_empty());
        assert_eq!(elapsed_of(&clock.advance(5010.0)), vec![2]);
    }
}
