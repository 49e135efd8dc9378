//! Engine: pose ownership, clock control and frame fan-out.
//!
//! Methods:
//! - new, with_time_source, from_config (construction recomputes all frames)
//! - start, stop, reset, tick (clock control; start/stop never recompute)
//! - start/end pose accessors, set_duration, set_intermediate_frame_count
//!   (every setter recomputes all frames immediately)
//! - sample (pure query), update_frames (fan-out into the targets)

use std::collections::VecDeque;

use log::{debug, info, trace, warn};

use crate::clock::{AnimationClock, ClockState, SystemClock, Tick, TimeSource};
use crate::config::{
    Config, MAX_DURATION, MAX_INTERMEDIATE_FRAMES, MIN_DURATION, MIN_INTERMEDIATE_FRAMES,
};
use crate::frames::{FrameSet, FrameSlot, FrameTargets};
use crate::interp::functions::{lerp_euler, lerp_position, lerp_quat, slerp_quat};
use crate::interp::InterpolationKind;
use crate::outputs::ClockEvent;
use crate::pose::{Orientation, Pose, SampledPose};
use crate::rotation::{Quat, Vec3};

/// Interpolation engine for one scene.
///
/// `T` receives the computed poses; `C` supplies wall-clock time to
/// [`Engine::tick`].
#[derive(Debug)]
pub struct Engine<T: FrameTargets = FrameSet, C: TimeSource = SystemClock> {
    targets: T,
    time: C,
    clock: AnimationClock,
    start: Pose,
    end: Pose,
    intermediate_frames: usize,
    events: VecDeque<ClockEvent>,
    max_pending_events: usize,
}

impl<T: FrameTargets> Engine<T, SystemClock> {
    /// Engine with default poses and duration, driven by real time.
    pub fn new(targets: T) -> Self {
        Self::with_time_source(targets, SystemClock)
    }

    /// Engine initialized from a validated config, driven by real time.
    pub fn from_config(targets: T, cfg: &Config) -> crate::Result<Self> {
        Self::from_config_with_time_source(targets, cfg, SystemClock)
    }
}

impl<T: FrameTargets, C: TimeSource> Engine<T, C> {
    pub fn with_time_source(targets: T, time: C) -> Self {
        Self::build(targets, &Config::default(), time)
    }

    pub fn from_config_with_time_source(targets: T, cfg: &Config, time: C) -> crate::Result<Self> {
        cfg.validate()?;
        Ok(Self::build(targets, cfg, time))
    }

    fn build(mut targets: T, cfg: &Config, time: C) -> Self {
        targets.resize_intermediates(cfg.intermediate_frames);
        let mut engine = Self {
            targets,
            time,
            clock: AnimationClock::new(cfg.duration),
            start: cfg.start.to_pose(),
            end: cfg.end.to_pose(),
            intermediate_frames: cfg.intermediate_frames,
            events: VecDeque::new(),
            max_pending_events: cfg.max_pending_events,
        };
        engine.update_frames();
        engine
    }

    /// Frame targets as last written.
    #[inline]
    pub fn targets(&self) -> &T {
        &self.targets
    }

    #[inline]
    pub fn time_source(&self) -> &C {
        &self.time
    }

    /// Give the targets back to the scene.
    pub fn into_targets(self) -> T {
        self.targets
    }

    // ---- clock -----------------------------------------------------------

    /// Start or resume from the current time. No-op while running.
    pub fn start(&mut self) {
        let now = self.time.now();
        if self.clock.start(now) {
            let time = self.clock.current_time();
            debug!("clock started at t={time:.3}");
            self.push_event(ClockEvent::Started { time });
        }
    }

    /// Pause, keeping the current time.
    pub fn stop(&mut self) {
        if self.clock.stop() {
            let time = self.clock.current_time();
            debug!("clock stopped at t={time:.3}");
            self.push_event(ClockEvent::Stopped { time });
        }
    }

    /// Stop, rewind to zero and recompute every frame.
    pub fn reset(&mut self) {
        self.clock.reset();
        debug!("clock reset");
        self.push_event(ClockEvent::Reset);
        self.update_frames();
    }

    /// Advance from wall-clock time and recompute every frame. No-op when stopped.
    pub fn tick(&mut self) {
        match self.clock.tick(self.time.now()) {
            Tick::Idle => return,
            Tick::Advanced => {}
            Tick::Finished => {
                let time = self.clock.current_time();
                info!("animation finished at t={time:.3}");
                self.push_event(ClockEvent::Finished { time });
            }
        }
        self.update_frames();
    }

    #[inline]
    pub fn current_time(&self) -> f32 {
        self.clock.current_time()
    }

    /// Animation length (end time) in seconds.
    #[inline]
    pub fn duration(&self) -> f32 {
        self.clock.end_time()
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.clock.is_running()
    }

    #[inline]
    pub fn clock_state(&self) -> ClockState {
        self.clock.state()
    }

    /// Set the animation length, clamped to `[MIN_DURATION, MAX_DURATION]`.
    ///
    /// A running clock keeps its anchor; the current time is clamped to the
    /// new end. NaN is ignored.
    pub fn set_duration(&mut self, duration: f32) {
        if duration.is_nan() {
            warn!("ignoring NaN duration");
            return;
        }
        let clamped = duration.clamp(MIN_DURATION, MAX_DURATION);
        if clamped != duration {
            warn!("duration {duration} clamped to {clamped}");
        }
        let old = self.clock.end_time();
        self.clock.set_end_time(clamped);
        if old != clamped {
            self.push_event(ClockEvent::DurationChanged { old, new: clamped });
        }
        self.update_frames();
    }

    // ---- frames ----------------------------------------------------------

    #[inline]
    pub fn intermediate_frame_count(&self) -> usize {
        self.intermediate_frames
    }

    /// Resize every scheme's intermediate sequence and recompute.
    ///
    /// `count` is clamped to `[MIN_INTERMEDIATE_FRAMES, MAX_INTERMEDIATE_FRAMES]`;
    /// the applied count is returned.
    pub fn set_intermediate_frame_count(&mut self, count: usize) -> usize {
        let clamped = count.clamp(MIN_INTERMEDIATE_FRAMES, MAX_INTERMEDIATE_FRAMES);
        if clamped != count {
            warn!("intermediate frame count {count} clamped to {clamped}");
        }
        if clamped != self.intermediate_frames {
            self.push_event(ClockEvent::FramesResized { count: clamped });
        }
        self.intermediate_frames = clamped;
        self.targets.resize_intermediates(clamped);
        self.update_frames();
        clamped
    }

    /// Time spacing between consecutive intermediate frames.
    #[inline]
    pub fn sample_spacing(&self) -> f32 {
        self.clock.end_time() / (self.intermediate_frames - 1) as f32
    }

    /// Sample time of every intermediate frame, in index order.
    pub fn sample_times(&self) -> impl Iterator<Item = f32> + '_ {
        let dt = self.sample_spacing();
        (0..self.intermediate_frames).map(move |i| i as f32 * dt)
    }

    /// Interpolated pose for `kind` at `time` (seconds in `[0, duration]`).
    pub fn sample(&self, kind: InterpolationKind, time: f32) -> SampledPose {
        let end_time = self.clock.end_time();
        let t = time / end_time;
        let position = lerp_position(self.start.position(), self.end.position(), time, end_time);
        let orientation = match kind {
            InterpolationKind::Euler => Orientation::Euler(lerp_euler(
                self.start.euler_angles(),
                self.end.euler_angles(),
                t,
            )),
            InterpolationKind::QuatLinear => {
                Orientation::Quat(lerp_quat(self.start.quat(), self.end.quat(), t))
            }
            InterpolationKind::QuatSlerp => {
                Orientation::Quat(slerp_quat(self.start.quat(), self.end.quat(), t))
            }
        };
        SampledPose {
            position,
            orientation,
        }
    }

    /// Recompute the main frame at the current time and every intermediate
    /// frame, for all schemes, and write them into the targets.
    pub fn update_frames(&mut self) {
        let now = self.clock.current_time();
        for kind in InterpolationKind::ALL {
            let pose = self.sample(kind, now);
            self.targets.write(kind, FrameSlot::Main, &pose);
        }

        let dt = self.sample_spacing();
        for i in 0..self.intermediate_frames {
            let time = i as f32 * dt;
            for kind in InterpolationKind::ALL {
                let pose = self.sample(kind, time);
                self.targets.write(kind, FrameSlot::Intermediate(i), &pose);
            }
        }
        trace!(
            "frames updated: t={now:.3}, {} intermediate per scheme",
            self.intermediate_frames
        );
    }

    // ---- poses -----------------------------------------------------------

    #[inline]
    pub fn start_pose(&self) -> &Pose {
        &self.start
    }

    #[inline]
    pub fn end_pose(&self) -> &Pose {
        &self.end
    }

    pub fn set_start_pose(&mut self, pose: Pose) {
        self.start = pose;
        self.update_frames();
    }

    pub fn set_end_pose(&mut self, pose: Pose) {
        self.end = pose;
        self.update_frames();
    }

    pub fn start_position(&self) -> Vec3 {
        self.start.position()
    }

    pub fn set_start_position(&mut self, position: Vec3) {
        self.start.set_position(position);
        self.update_frames();
    }

    pub fn start_euler_angles(&self) -> Vec3 {
        self.start.euler_angles()
    }

    pub fn set_start_euler_angles(&mut self, euler: Vec3) {
        self.start.set_euler_angles(euler);
        self.update_frames();
    }

    pub fn start_quat(&self) -> Quat {
        self.start.quat()
    }

    pub fn set_start_quat(&mut self, quat: Quat) {
        self.start.set_quat(quat);
        self.update_frames();
    }

    pub fn normalize_start_quat(&mut self) {
        self.start.normalize_quat();
        self.update_frames();
    }

    pub fn end_position(&self) -> Vec3 {
        self.end.position()
    }

    pub fn set_end_position(&mut self, position: Vec3) {
        self.end.set_position(position);
        self.update_frames();
    }

    pub fn end_euler_angles(&self) -> Vec3 {
        self.end.euler_angles()
    }

    pub fn set_end_euler_angles(&mut self, euler: Vec3) {
        self.end.set_euler_angles(euler);
        self.update_frames();
    }

    pub fn end_quat(&self) -> Quat {
        self.end.quat()
    }

    pub fn set_end_quat(&mut self, quat: Quat) {
        self.end.set_quat(quat);
        self.update_frames();
    }

    pub fn normalize_end_quat(&mut self) {
        self.end.normalize_quat();
        self.update_frames();
    }

    // ---- events ----------------------------------------------------------

    /// Pending events, oldest first.
    pub fn events(&self) -> impl Iterator<Item = &ClockEvent> {
        self.events.iter()
    }

    /// Take all pending events, oldest first.
    pub fn drain_events(&mut self) -> Vec<ClockEvent> {
        self.events.drain(..).collect()
    }

    fn push_event(&mut self, event: ClockEvent) {
        if self.max_pending_events == 0 {
            return;
        }
        if self.events.len() >= self.max_pending_events {
            self.events.pop_front();
        }
        self.events.push_back(event);
    }
}
