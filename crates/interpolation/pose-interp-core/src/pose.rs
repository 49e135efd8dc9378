//! Pose value type with eagerly synchronized Euler/quaternion orientation.

use serde::{Deserialize, Serialize};

use crate::frames::PoseSink;
use crate::rotation::{euler_to_quat, normalize4, quat_to_euler, Quat, Vec3, IDENTITY};

/// Position plus orientation kept in two representations.
///
/// Setting either orientation representation immediately re-derives the
/// other. The quaternion is stored as given and may be non-unit until
/// [`Pose::normalize_quat`] is called; the Euler angles are always derived
/// from its normalized form.
///
/// Serialize-only: a deserialized pose would bypass the re-derivation. Use
/// [`crate::PoseConfig`] to load poses.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Pose {
    position: Vec3,
    euler: Vec3,
    quat: Quat,
}

impl Default for Pose {
    fn default() -> Self {
        Self::at([0.0, 0.0, 0.0])
    }
}

impl Pose {
    /// Pose with identity orientation at `position`.
    pub fn at(position: Vec3) -> Self {
        Self {
            position,
            euler: [0.0, 0.0, 0.0],
            quat: IDENTITY,
        }
    }

    /// Pose from a position and Euler angles `[roll, pitch, yaw]`.
    pub fn from_euler(position: Vec3, euler: Vec3) -> Self {
        let mut pose = Self::at(position);
        pose.set_euler_angles(euler);
        pose
    }

    /// Pose from a position and a quaternion `(x, y, z, w)`.
    pub fn from_quat(position: Vec3, quat: Quat) -> Self {
        let mut pose = Self::at(position);
        pose.set_quat(quat);
        pose
    }

    #[inline]
    pub fn position(&self) -> Vec3 {
        self.position
    }

    #[inline]
    pub fn euler_angles(&self) -> Vec3 {
        self.euler
    }

    #[inline]
    pub fn quat(&self) -> Quat {
        self.quat
    }

    #[inline]
    pub fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }

    pub fn set_euler_angles(&mut self, euler: Vec3) {
        self.euler = euler;
        self.quat = euler_to_quat(euler);
    }

    pub fn set_quat(&mut self, quat: Quat) {
        self.quat = quat;
        self.euler = quat_to_euler(normalize4(quat));
    }

    /// Rescale the stored quaternion to unit length.
    pub fn normalize_quat(&mut self) {
        self.set_quat(normalize4(self.quat));
    }
}

/// Orientation in the representation a pose target expects.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum Orientation {
    /// Euler angles `[roll, pitch, yaw]`.
    Euler(Vec3),
    /// Quaternion (x, y, z, w)
    Quat(Quat),
}

impl Orientation {
    /// Quaternion form of this orientation.
    pub fn to_quat(self) -> Quat {
        match self {
            Orientation::Euler(e) => euler_to_quat(e),
            Orientation::Quat(q) => q,
        }
    }
}

/// One interpolated sample: shared position plus scheme-specific orientation.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SampledPose {
    pub position: Vec3,
    pub orientation: Orientation,
}

impl SampledPose {
    /// Push this sample through the sink contract.
    pub fn apply_to<S: PoseSink + ?Sized>(&self, sink: &mut S) {
        sink.set_position(self.position);
        match self.orientation {
            Orientation::Euler(e) => sink.set_orientation_euler(e),
            Orientation::Quat(q) => sink.set_orientation_quat(q),
        }
    }
}
