//! Resumable wall-clock animation timer.
//!
//! The clock keeps an anchor instant plus the time already elapsed when it
//! was (re)started; `current_time = resumed_from + (now - anchor)`. Time only
//! advances when [`AnimationClock::tick`] samples a [`TimeSource`].

use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

use instant::Instant;
use serde::{Deserialize, Serialize};

/// Source of wall-clock instants.
pub trait TimeSource {
    fn now(&self) -> Instant;
}

/// Real time.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl TimeSource for SystemClock {
    #[inline]
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// Manually advanced time. Clones share the same offset, so a host (or test)
/// can keep a handle and advance the clock an engine reads from.
#[derive(Clone, Debug)]
pub struct ManualClock {
    origin: Instant,
    offset: Rc<Cell<Duration>>,
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}

impl ManualClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
            offset: Rc::new(Cell::new(Duration::ZERO)),
        }
    }

    /// Move time forward by `seconds` (negative and non-finite values are ignored).
    pub fn advance(&self, seconds: f32) {
        if seconds.is_finite() && seconds > 0.0 {
            self.offset
                .set(self.offset.get() + Duration::from_secs_f32(seconds));
        }
    }

    /// Seconds elapsed since this clock was created.
    pub fn elapsed(&self) -> f32 {
        self.offset.get().as_secs_f32()
    }
}

impl TimeSource for ManualClock {
    #[inline]
    fn now(&self) -> Instant {
        self.origin + self.offset.get()
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClockState {
    Stopped,
    Running,
}

/// Result of one [`AnimationClock::tick`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Tick {
    /// Clock is stopped; nothing changed.
    Idle,
    /// Time was resampled; still running.
    Advanced,
    /// End time reached; the clock stopped.
    Finished,
}

#[derive(Clone, Debug)]
pub struct AnimationClock {
    state: ClockState,
    anchor: Option<Instant>,
    resumed_from: f32,
    current_time: f32,
    end_time: f32,
}

impl AnimationClock {
    /// Stopped clock at time zero. `end_time` must be positive.
    pub fn new(end_time: f32) -> Self {
        Self {
            state: ClockState::Stopped,
            anchor: None,
            resumed_from: 0.0,
            current_time: 0.0,
            end_time,
        }
    }

    #[inline]
    pub fn state(&self) -> ClockState {
        self.state
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.state == ClockState::Running
    }

    #[inline]
    pub fn current_time(&self) -> f32 {
        self.current_time
    }

    #[inline]
    pub fn end_time(&self) -> f32 {
        self.end_time
    }

    /// Start or resume from the current time. Returns false if already running.
    pub fn start(&mut self, now: Instant) -> bool {
        if self.is_running() {
            return false;
        }
        self.anchor = Some(now);
        self.resumed_from = self.current_time;
        self.state = ClockState::Running;
        true
    }

    /// Pause; the current time is kept. Returns false if already stopped.
    pub fn stop(&mut self) -> bool {
        let was_running = self.is_running();
        self.state = ClockState::Stopped;
        was_running
    }

    /// Stop and rewind to zero.
    pub fn reset(&mut self) {
        self.state = ClockState::Stopped;
        self.anchor = None;
        self.resumed_from = 0.0;
        self.current_time = 0.0;
    }

    /// Resample the current time from `now` while running.
    pub fn tick(&mut self, now: Instant) -> Tick {
        if !self.is_running() {
            return Tick::Idle;
        }
        let elapsed = match self.anchor {
            Some(anchor) => now.saturating_duration_since(anchor).as_secs_f32(),
            None => 0.0,
        };
        self.current_time = self.resumed_from + elapsed;
        if self.current_time >= self.end_time {
            self.current_time = self.end_time;
            self.state = ClockState::Stopped;
            return Tick::Finished;
        }
        Tick::Advanced
    }

    /// Change the end time without touching the anchor; the current time is
    /// clamped to the new end.
    pub fn set_end_time(&mut self, end_time: f32) {
        self.end_time = end_time;
        self.current_time = self.current_time.min(end_time);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manual_clock_clones_share_offset() {
        let clock = ManualClock::new();
        let handle = clock.clone();
        let before = clock.now();
        handle.advance(1.5);
        assert!(((clock.now() - before).as_secs_f32() - 1.5).abs() < 1e-6);
        assert!((clock.elapsed() - 1.5).abs() < 1e-6);
    }

    #[test]
    fn manual_clock_ignores_non_finite_steps() {
        let clock = ManualClock::new();
        clock.advance(0.5);
        clock.advance(f32::INFINITY);
        clock.advance(f32::NAN);
        clock.advance(-1.0);
        assert!((clock.elapsed() - 0.5).abs() < 1e-6);
    }

    #[test]
    fn tick_is_idle_when_stopped() {
        let time = ManualClock::new();
        let mut clock = AnimationClock::new(5.0);
        time.advance(1.0);
        assert_eq!(clock.tick(time.now()), Tick::Idle);
        assert_eq!(clock.current_time(), 0.0);
    }

    #[test]
    fn reaching_end_stops_without_rewinding() {
        let time = ManualClock::new();
        let mut clock = AnimationClock::new(2.0);
        assert!(clock.start(time.now()));
        time.advance(3.0);
        assert_eq!(clock.tick(time.now()), Tick::Finished);
        assert_eq!(clock.current_time(), 2.0);
        assert_eq!(clock.state(), ClockState::Stopped);
    }

    #[test]
    fn start_twice_keeps_anchor() {
        let time = ManualClock::new();
        let mut clock = AnimationClock::new(10.0);
        assert!(clock.start(time.now()));
        time.advance(1.0);
        assert!(!clock.start(time.now()));
        time.advance(1.0);
        clock.tick(time.now());
        assert!((clock.current_time() - 2.0).abs() < 1e-4);
    }
}
