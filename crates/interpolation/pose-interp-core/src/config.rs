//! Engine configuration: initial poses, duration and frame count.

use serde::{Deserialize, Serialize};

use crate::error::InterpError;
use crate::pose::Pose;
use crate::rotation::{Quat, Vec3};

pub const DEFAULT_DURATION: f32 = 5.0;
pub const MIN_DURATION: f32 = 0.01;
pub const MAX_DURATION: f32 = 3600.0;

pub const DEFAULT_INTERMEDIATE_FRAMES: usize = 10;
pub const MIN_INTERMEDIATE_FRAMES: usize = 2;
pub const MAX_INTERMEDIATE_FRAMES: usize = 100;

pub const DEFAULT_MAX_PENDING_EVENTS: usize = 1024;

/// Initial pose. The orientation is taken from `quat` when present,
/// otherwise from `euler`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PoseConfig {
    pub position: Vec3,
    pub euler: Vec3,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quat: Option<Quat>,
}

impl PoseConfig {
    pub fn at(position: Vec3) -> Self {
        Self {
            position,
            ..Self::default()
        }
    }

    pub fn to_pose(&self) -> Pose {
        match self.quat {
            Some(q) => Pose::from_quat(self.position, q),
            None => Pose::from_euler(self.position, self.euler),
        }
    }
}

/// Initial engine state.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Animation length in seconds.
    pub duration: f32,
    /// Intermediate samples per scheme.
    pub intermediate_frames: usize,
    pub start: PoseConfig,
    pub end: PoseConfig,
    /// Events kept until drained; the oldest are dropped beyond this.
    pub max_pending_events: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            duration: DEFAULT_DURATION,
            intermediate_frames: DEFAULT_INTERMEDIATE_FRAMES,
            start: PoseConfig::at([-1.0, 0.0, 0.0]),
            end: PoseConfig::at([1.0, 0.0, 0.0]),
            max_pending_events: DEFAULT_MAX_PENDING_EVENTS,
        }
    }
}

impl Config {
    /// Parse and validate a JSON config. Missing fields take their defaults.
    pub fn from_json(text: &str) -> crate::Result<Self> {
        let cfg: Config = serde_json::from_str(text)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn to_json(&self) -> crate::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> crate::Result<()> {
        if !(MIN_DURATION..=MAX_DURATION).contains(&self.duration) {
            return Err(InterpError::InvalidDuration {
                duration: self.duration,
                min: MIN_DURATION,
                max: MAX_DURATION,
            });
        }
        if !(MIN_INTERMEDIATE_FRAMES..=MAX_INTERMEDIATE_FRAMES).contains(&self.intermediate_frames)
        {
            return Err(InterpError::InvalidFrameCount {
                count: self.intermediate_frames,
                min: MIN_INTERMEDIATE_FRAMES,
                max: MAX_INTERMEDIATE_FRAMES,
            });
        }
        Ok(())
    }
}
