//! Pose targets the engine writes into.
//!
//! The engine never reads targets back. A scene hands the engine a
//! [`FrameTargets`] handle at construction: an owned [`FrameSet`], a
//! `&mut` borrow of one, or a shared `Rc<RefCell<_>>` it keeps a clone of.

use std::cell::RefCell;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

use crate::interp::InterpolationKind;
use crate::pose::{Orientation, SampledPose};
use crate::rotation::{Quat, Vec3, IDENTITY};

/// Receiver for one computed pose.
pub trait PoseSink {
    fn set_position(&mut self, position: Vec3);

    /// Called for Euler targets only.
    fn set_orientation_euler(&mut self, _euler: Vec3) {}

    /// Called for quaternion targets only.
    fn set_orientation_quat(&mut self, _quat: Quat) {}
}

/// Which frame of a scheme's group a pose belongs to.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FrameSlot {
    /// The animated frame at the clock's current time.
    Main,
    /// The `i`-th evenly spaced sample.
    Intermediate(usize),
}

/// Main + intermediate pose targets for all three schemes.
pub trait FrameTargets {
    /// Recreate every scheme's intermediate sequence with `count` entries.
    fn resize_intermediates(&mut self, count: usize);

    /// Store `pose` for `kind` at `slot`.
    fn write(&mut self, kind: InterpolationKind, slot: FrameSlot, pose: &SampledPose);
}

impl<T: FrameTargets + ?Sized> FrameTargets for &mut T {
    fn resize_intermediates(&mut self, count: usize) {
        (**self).resize_intermediates(count);
    }

    fn write(&mut self, kind: InterpolationKind, slot: FrameSlot, pose: &SampledPose) {
        (**self).write(kind, slot, pose);
    }
}

impl<T: FrameTargets + ?Sized> FrameTargets for Rc<RefCell<T>> {
    fn resize_intermediates(&mut self, count: usize) {
        self.borrow_mut().resize_intermediates(count);
    }

    fn write(&mut self, kind: InterpolationKind, slot: FrameSlot, pose: &SampledPose) {
        self.borrow_mut().write(kind, slot, pose);
    }
}

/// Stored pose of a single rendered frame.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    pub position: Vec3,
    pub orientation: Orientation,
}

impl Default for Frame {
    fn default() -> Self {
        Self::for_kind(InterpolationKind::QuatSlerp)
    }
}

impl Frame {
    /// Frame at the origin with the identity orientation in the
    /// representation `kind` produces.
    pub fn for_kind(kind: InterpolationKind) -> Self {
        let orientation = if kind.uses_quaternion() {
            Orientation::Quat(IDENTITY)
        } else {
            Orientation::Euler([0.0, 0.0, 0.0])
        };
        Self {
            position: [0.0, 0.0, 0.0],
            orientation,
        }
    }
}

impl PoseSink for Frame {
    fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }

    fn set_orientation_euler(&mut self, euler: Vec3) {
        self.orientation = Orientation::Euler(euler);
    }

    fn set_orientation_quat(&mut self, quat: Quat) {
        self.orientation = Orientation::Quat(quat);
    }
}

/// One scheme's main frame and its intermediate samples.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FrameGroup {
    pub main: Frame,
    pub intermediate: Vec<Frame>,
}

impl FrameGroup {
    pub fn new(kind: InterpolationKind, count: usize) -> Self {
        Self {
            main: Frame::for_kind(kind),
            intermediate: vec![Frame::for_kind(kind); count],
        }
    }

    fn slot_mut(&mut self, slot: FrameSlot) -> Option<&mut Frame> {
        match slot {
            FrameSlot::Main => Some(&mut self.main),
            FrameSlot::Intermediate(i) => self.intermediate.get_mut(i),
        }
    }
}

/// Frame groups for the three compared schemes.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FrameSet {
    pub euler: FrameGroup,
    pub quat_linear: FrameGroup,
    pub quat_slerp: FrameGroup,
}

impl FrameSet {
    pub fn new(intermediate_count: usize) -> Self {
        Self {
            euler: FrameGroup::new(InterpolationKind::Euler, intermediate_count),
            quat_linear: FrameGroup::new(InterpolationKind::QuatLinear, intermediate_count),
            quat_slerp: FrameGroup::new(InterpolationKind::QuatSlerp, intermediate_count),
        }
    }

    /// Group rendered for `kind` (e.g. by one split-screen pane).
    pub fn group(&self, kind: InterpolationKind) -> &FrameGroup {
        match kind {
            InterpolationKind::Euler => &self.euler,
            InterpolationKind::QuatLinear => &self.quat_linear,
            InterpolationKind::QuatSlerp => &self.quat_slerp,
        }
    }

    pub fn group_mut(&mut self, kind: InterpolationKind) -> &mut FrameGroup {
        match kind {
            InterpolationKind::Euler => &mut self.euler,
            InterpolationKind::QuatLinear => &mut self.quat_linear,
            InterpolationKind::QuatSlerp => &mut self.quat_slerp,
        }
    }
}

impl Default for FrameSet {
    fn default() -> Self {
        Self::new(0)
    }
}

impl FrameTargets for FrameSet {
    fn resize_intermediates(&mut self, count: usize) {
        for kind in InterpolationKind::ALL {
            let group = self.group_mut(kind);
            group.intermediate.clear();
            group.intermediate.resize(count, Frame::for_kind(kind));
        }
    }

    fn write(&mut self, kind: InterpolationKind, slot: FrameSlot, pose: &SampledPose) {
        if let Some(frame) = self.group_mut(kind).slot_mut(slot) {
            pose.apply_to(frame);
        }
    }
}
