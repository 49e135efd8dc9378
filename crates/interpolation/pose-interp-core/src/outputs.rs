//! Discrete signals emitted by the engine.
//!
//! Events are queued as state changes happen and drained by the host, e.g. to
//! refresh a control panel. Pose values themselves go through the frame
//! targets, not through events.

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[non_exhaustive]
pub enum ClockEvent {
    /// Clock went from stopped to running at `time`.
    Started { time: f32 },
    /// Clock was paused at `time`.
    Stopped { time: f32 },
    /// Clock reached the end time and stopped.
    Finished { time: f32 },
    /// Clock was rewound to zero.
    Reset,
    DurationChanged { old: f32, new: f32 },
    FramesResized { count: usize },
}
