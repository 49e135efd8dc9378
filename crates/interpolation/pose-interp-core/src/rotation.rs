//! Quaternion and Euler-angle helpers.
//!
//! Quaternions are stored as `[x, y, z, w]`. Euler angles are
//! `[roll, pitch, yaw]` in radians (rotations about x, y and z), composed in
//! the aerospace order `q = qz(yaw) * qy(pitch) * qx(roll)`.

/// 3-component vector (positions, Euler angles).
pub type Vec3 = [f32; 3];

/// Quaternion (x, y, z, w).
pub type Quat = [f32; 4];

/// Identity rotation.
pub const IDENTITY: Quat = [0.0, 0.0, 0.0, 1.0];

#[inline]
pub fn dot4(a: Quat, b: Quat) -> f32 {
    a[0] * b[0] + a[1] * b[1] + a[2] * b[2] + a[3] * b[3]
}

#[inline]
pub fn length4(q: Quat) -> f32 {
    dot4(q, q).sqrt()
}

/// Scale `q` to unit length. The zero quaternion is returned unchanged.
#[inline]
pub fn normalize4(mut q: Quat) -> Quat {
    let len2 = dot4(q, q);
    if len2 > 0.0 {
        let inv_len = len2.sqrt().recip();
        q[0] *= inv_len;
        q[1] *= inv_len;
        q[2] *= inv_len;
        q[3] *= inv_len;
    }
    q
}

/// Negate the vector part, keep the scalar part.
#[inline]
pub fn conjugate(q: Quat) -> Quat {
    [-q[0], -q[1], -q[2], q[3]]
}

/// Hamilton product `a ⊗ b`.
#[inline]
pub fn quat_mul(a: Quat, b: Quat) -> Quat {
    let [ax, ay, az, aw] = a;
    let [bx, by, bz, bw] = b;
    [
        aw * bx + ax * bw + ay * bz - az * by,
        aw * by - ax * bz + ay * bw + az * bx,
        aw * bz + ax * by - ay * bx + az * bw,
        aw * bw - ax * bx - ay * by - az * bz,
    ]
}

/// Build a quaternion from `[roll, pitch, yaw]` via half-angle products.
///
/// The result is unit length for finite input; it is not re-normalized.
pub fn euler_to_quat(euler: Vec3) -> Quat {
    let (sr, cr) = (euler[0] * 0.5).sin_cos();
    let (sp, cp) = (euler[1] * 0.5).sin_cos();
    let (sy, cy) = (euler[2] * 0.5).sin_cos();
    [
        sr * cp * cy - cr * sp * sy,
        cr * sp * cy + sr * cp * sy,
        cr * cp * sy - sr * sp * cy,
        cr * cp * cy + sr * sp * sy,
    ]
}

/// Recover `[roll, pitch, yaw]` from a unit quaternion.
///
/// Pitch goes through `asin` and is ill-conditioned near ±90° (gimbal lock).
/// The `asin` argument is clamped to `[-1, 1]` so rounding at exactly ±90°
/// yields ±π/2 rather than NaN. Non-unit input yields meaningless angles;
/// callers normalize first.
pub fn quat_to_euler(q: Quat) -> Vec3 {
    let [x, y, z, w] = q;
    let roll = (2.0 * (w * x + y * z)).atan2(1.0 - 2.0 * (x * x + y * y));
    let pitch = (2.0 * (w * y - x * z)).clamp(-1.0, 1.0).asin();
    let yaw = (2.0 * (w * z + x * y)).atan2(1.0 - 2.0 * (y * y + z * z));
    [roll, pitch, yaw]
}

/// Rotation angle in radians between two unit quaternions, accounting for
/// the double cover (`q` and `-q` are the same rotation).
///
/// Hosts use it to measure how far two schemes' outputs diverge at the same
/// sample time.
pub fn rotation_angle_between(a: Quat, b: Quat) -> f32 {
    let d = dot4(normalize4(a), normalize4(b)).abs().min(1.0);
    2.0 * d.acos()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    fn approx4(a: Quat, b: Quat, eps: f32) {
        for i in 0..4 {
            assert!((a[i] - b[i]).abs() <= eps, "component {i}: {a:?} vs {b:?}");
        }
    }

    #[test]
    fn quarter_pitch_stays_finite() {
        let h = std::f32::consts::FRAC_1_SQRT_2;
        for (q, expected) in [([0.0, h, 0.0, h], FRAC_PI_2), ([0.0, -h, 0.0, h], -FRAC_PI_2)] {
            let e = quat_to_euler(q);
            assert!(e.iter().all(|a| a.is_finite()), "{e:?}");
            assert!((e[1] - expected).abs() < 1e-3, "{e:?}");
        }
    }

    #[test]
    fn angle_between_is_zero_for_negated_quat() {
        let q = euler_to_quat([0.4, -0.2, 1.0]);
        assert!(rotation_angle_between(q, [-q[0], -q[1], -q[2], -q[3]]) < 1e-3);
        let half = euler_to_quat([0.0, 0.0, 1.0]);
        assert!((rotation_angle_between(IDENTITY, half) - 1.0).abs() < 1e-4);
    }

    #[test]
    fn identity_is_neutral_for_product() {
        let q = normalize4([0.1, -0.4, 0.3, 0.8]);
        approx4(quat_mul(IDENTITY, q), q, 1e-6);
        approx4(quat_mul(q, IDENTITY), q, 1e-6);
    }

    #[test]
    fn conjugate_product_is_identity() {
        let q = normalize4([0.2, 0.5, -0.1, 0.7]);
        approx4(quat_mul(conjugate(q), q), IDENTITY, 1e-6);
    }

    #[test]
    fn yaw_quarter_turn_matches_axis_angle() {
        let q = euler_to_quat([0.0, 0.0, FRAC_PI_2]);
        let h = std::f32::consts::FRAC_1_SQRT_2;
        approx4(q, [0.0, 0.0, h, h], 1e-6);
    }

    #[test]
    fn euler_composition_order_is_yaw_pitch_roll() {
        let e = [0.3, -0.2, 1.1];
        let qx = euler_to_quat([e[0], 0.0, 0.0]);
        let qy = euler_to_quat([0.0, e[1], 0.0]);
        let qz = euler_to_quat([0.0, 0.0, e[2]]);
        approx4(euler_to_quat(e), quat_mul(qz, quat_mul(qy, qx)), 1e-6);
    }

    #[test]
    fn normalize_leaves_zero_quaternion() {
        assert_eq!(normalize4([0.0; 4]), [0.0; 4]);
    }

    #[test]
    fn angle_between_ignores_sign() {
        let q = euler_to_quat([0.4, 0.1, -0.3]);
        let neg = [-q[0], -q[1], -q[2], -q[3]];
        assert!(rotation_angle_between(q, neg) < 1e-3);
    }
}
