//! Interpolation helpers:
//! - lerp_f32 / lerp_vec4 (component-wise)
//! - lerp_position (time-based, shared by every scheme)
//! - lerp_euler (per-axis unwrap, then linear)
//! - lerp_quat (normalized component-wise blend, no shortest-arc flip)
//! - slerp_quat (relative-rotation slerp)

use std::f32::consts::{PI, TAU};

use crate::rotation::{conjugate, normalize4, quat_mul, Quat, Vec3};

/// Linear interpolation of scalars.
#[inline]
pub fn lerp_f32(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

#[inline]
pub fn lerp_vec4(a: [f32; 4], b: [f32; 4], t: f32) -> [f32; 4] {
    [
        lerp_f32(a[0], b[0], t),
        lerp_f32(a[1], b[1], t),
        lerp_f32(a[2], b[2], t),
        lerp_f32(a[3], b[3], t),
    ]
}

/// Position at `time` on the straight line from `start` to `end`.
///
/// Evaluated as `start + (end - start) * time / end_time` so that every scheme
/// produces bit-identical positions. `end_time` must be positive.
#[inline]
pub fn lerp_position(start: Vec3, end: Vec3, time: f32, end_time: f32) -> Vec3 {
    [
        start[0] + (end[0] - start[0]) * time / end_time,
        start[1] + (end[1] - start[1]) * time / end_time,
        start[2] + (end[2] - start[2]) * time / end_time,
    ]
}

/// Shift `start` by a full turn when the raw difference to `end` exceeds π,
/// so the blend between them covers the shorter arc.
#[inline]
pub fn unwrap_angle_pair(start: f32, end: f32) -> (f32, f32) {
    let diff = end - start;
    if diff > PI {
        (start + TAU, end)
    } else if diff < -PI {
        (start - TAU, end)
    } else {
        (start, end)
    }
}

/// Per-axis Euler interpolation.
///
/// Only the endpoint difference is unwrapped; a multi-turn delta can still
/// travel the long way around.
pub fn lerp_euler(start: Vec3, end: Vec3, t: f32) -> Vec3 {
    let mut out = [0.0; 3];
    for axis in 0..3 {
        let (a, b) = unwrap_angle_pair(start[axis], end[axis]);
        out[axis] = lerp_f32(a, b, t);
    }
    out
}

/// Quaternion linear interpolation: normalize endpoints, blend, renormalize.
///
/// No double-cover correction is applied; antipodal endpoints blend the long way.
#[inline]
pub fn lerp_quat(start: Quat, end: Quat, t: f32) -> Quat {
    normalize4(lerp_vec4(normalize4(start), normalize4(end), t))
}

/// Quaternion slerp through the relative rotation `conj(start) ⊗ end`.
///
/// The relative rotation's angle is scaled by `t` about its own axis and the
/// resulting increment is applied to `start`. A relative rotation with an
/// exactly zero vector part contributes the identity increment.
pub fn slerp_quat(start: Quat, end: Quat, t: f32) -> Quat {
    let start = normalize4(start);
    let end = normalize4(end);
    let rel = quat_mul(conjugate(start), end);

    let v_len = (rel[0] * rel[0] + rel[1] * rel[1] + rel[2] * rel[2]).sqrt();
    if v_len == 0.0 {
        return start;
    }

    let angle = 2.0 * v_len.atan2(rel[3]);
    let (s, c) = (angle * t * 0.5).sin_cos();
    let inv = v_len.recip();
    let increment = [rel[0] * inv * s, rel[1] * inv * s, rel[2] * inv * s, c];
    quat_mul(start, increment)
}
