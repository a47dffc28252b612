use glam::{Mat3, Vec3};

/// Combined yaw-then-pitch rotation used by both camera modes.
///
/// Columns are laid out for glam's column-major `Mat3 * Vec3`, so
/// `rot3xy(pitch, yaw) * v` rotates `v` about Y by `yaw` and then tilts it
/// about the rotated X axis by `pitch`. `rot3xy(0.0, 0.0)` is the identity.
pub fn rot3xy(pitch: f32, yaw: f32) -> Mat3 {
    let (sp, cp) = pitch.sin_cos();
    let (sy, cy) = yaw.sin_cos();

    Mat3::from_cols(
        Vec3::new(cy, 0.0, -sy),
        Vec3::new(sy * sp, cp, cy * sp),
        Vec3::new(sy * cp, -sp, cy * cp),
    )
}
