//! Pose Interpolation Core (renderer-agnostic)
//!
//! Drives a side-by-side comparison of three rotation interpolation schemes
//! between a start and an end pose:
//! - Euler-angle linear interpolation with per-axis wrap correction,
//! - component-wise quaternion linear interpolation (no sign correction),
//! - quaternion slerp built from the relative rotation.
//!
//! The [`Engine`] owns both poses and a resumable wall-clock timer. Every state
//! change fans the interpolated poses out to a main frame and `N` evenly
//! spaced intermediate frames per scheme, written through the [`PoseSink`]
//! contract. Hosts (renderers, UIs) own the frame targets and only read them.

pub mod clock;
pub mod config;
pub mod engine;
pub mod error;
pub mod frames;
pub mod interp;
pub mod outputs;
pub mod pose;
pub mod rotation;

// Re-exports for consumers (scenes/adapters)
pub use clock::{AnimationClock, ClockState, ManualClock, SystemClock, Tick, TimeSource};
pub use config::{Config, PoseConfig};
pub use engine::Engine;
pub use error::InterpError;
pub use frames::{Frame, FrameGroup, FrameSet, FrameSlot, FrameTargets, PoseSink};
pub use interp::InterpolationKind;
pub use outputs::ClockEvent;
pub use pose::{Orientation, Pose, SampledPose};
pub use rotation::{Quat, Vec3};

/// Result type for the fallible (configuration) surfaces of this crate.
pub type Result<T> = std::result::Result<T, InterpError>;
