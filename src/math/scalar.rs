use glam::{Vec2, Vec3};
use std::f32::consts::{PI, TAU};

/// Vectors shorter than this normalize to zero.
pub const NORMALIZE_EPSILON: f32 = 1.0e-4;

pub fn clamp(min: f32, value: f32, max: f32) -> f32 {
    if value < min {
        min
    } else if value > max {
        max
    } else {
        value
    }
}

pub fn clamp01(value: f32) -> f32 {
    clamp(0.0, value, 1.0)
}

/// Normalize or zero: returns the unit vector, or zero when `v` is too short
/// to normalize without producing NaN/Inf.
pub fn noz(v: Vec3) -> Vec3 {
    let length_squared = v.length_squared();
    if length_squared > NORMALIZE_EPSILON * NORMALIZE_EPSILON {
        v * length_squared.sqrt().recip()
    } else {
        Vec3::ZERO
    }
}

/// Width over height. Degenerate sizes report 1.0.
pub fn aspect(size: Vec2) -> f32 {
    if size.y.abs() < f32::EPSILON {
        1.0
    } else {
        size.x / size.y
    }
}

/// Folds an accumulated angle back into `[-PI, PI)` once it has drifted past
/// a full turn. Smaller angles come back untouched.
pub fn wrap_angle(angle: f32) -> f32 {
    if angle.abs() > TAU {
        (angle + PI).rem_euclid(TAU) - PI
    } else {
        angle
    }
}
