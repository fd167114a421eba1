//! Orientation angles to generic-space coordinates for the TC70.

use serde::Serialize;
use std::ops::Sub;

/// TC70 range of motion.
pub const PAN_RANGE_DEG: f32 = 360.0;
pub const TILT_RANGE_DEG: f32 = 114.0;

/// Folds an angle into `[-180, 180)`.
pub fn normalize_deg(deg: f32) -> f32 {
    let folded = (deg + 180.0).rem_euclid(360.0) - 180.0;
    if folded >= 180.0 {
        folded - 360.0
    } else {
        folded
    }
}

/// Linear share of `range_deg` scaled onto the width of `[min, max]`, then clamped.
pub fn rotation_value(angle_deg: f32, range_deg: f32, min: f32, max: f32) -> f32 {
    let value = angle_deg / range_deg * (max - min);
    if value > max {
        max
    } else if value < min {
        min
    } else {
        value
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct Posture {
    pub roll_deg: f32,
    pub pitch_deg: f32,
    pub yaw_deg: f32,
}

impl Posture {
    pub fn new(roll_deg: f32, pitch_deg: f32, yaw_deg: f32) -> Self {
        Self {
            roll_deg: normalize_deg(roll_deg),
            pitch_deg: normalize_deg(pitch_deg),
            yaw_deg: normalize_deg(yaw_deg),
        }
    }
}

/// Offset from a calibration reference, normalized per axis.
impl Sub for Posture {
    type Output = Posture;

    fn sub(self, rhs: Posture) -> Posture {
        Posture::new(
            self.roll_deg - rhs.roll_deg,
            self.pitch_deg - rhs.pitch_deg,
            self.yaw_deg - rhs.yaw_deg,
        )
    }
}
