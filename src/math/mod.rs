mod rotation;
mod scalar;

pub use rotation::rot3xy;
pub use scalar::{aspect, clamp, clamp01, noz, wrap_angle, NORMALIZE_EPSILON};
