//! Interpolation schemes compared by the engine.
//!
//! Position blending is shared; only the orientation path differs between
//! schemes. See [`functions`] for the closed-form implementations.

pub mod functions;

use serde::{Deserialize, Serialize};

/// Rotation interpolation scheme.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InterpolationKind {
    /// Per-axis linear blend of Euler angles.
    Euler,
    /// Component-wise quaternion blend, renormalized.
    QuatLinear,
    /// Constant angular velocity along the relative rotation.
    QuatSlerp,
}

impl InterpolationKind {
    pub const ALL: [InterpolationKind; 3] = [
        InterpolationKind::Euler,
        InterpolationKind::QuatLinear,
        InterpolationKind::QuatSlerp,
    ];

    /// Display label used by control panels.
    pub fn label(self) -> &'static str {
        match self {
            InterpolationKind::Euler => "Euler",
            InterpolationKind::QuatLinear => "Quaternion linear",
            InterpolationKind::QuatSlerp => "Quaternion slerp",
        }
    }

    /// Whether targets of this scheme receive quaternion orientations.
    #[inline]
    pub fn uses_quaternion(self) -> bool {
        !matches!(self, InterpolationKind::Euler)
    }
}

impl std::fmt::Display for InterpolationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
