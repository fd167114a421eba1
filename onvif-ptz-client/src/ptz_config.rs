use crate::angle::{rotation_value, PAN_RANGE_DEG, TILT_RANGE_DEG};
use crate::error::ExtractError;
use crate::onvif_xml::{self, Located, BODY, ENVELOPE};
use serde::Serialize;

/// Absolute pan/tilt position range and pan/tilt speed range reported by the device.
/// `min <= max` is not checked here.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct PtzSpace {
    pub pan_min: f32,
    pub pan_max: f32,
    pub tilt_min: f32,
    pub tilt_max: f32,
    pub speed_min: f32,
    pub speed_max: f32,
}

impl PtzSpace {
    pub fn clamp_pan(&self, pan: f32) -> f32 {
        pan.max(self.pan_min).min(self.pan_max)
    }

    pub fn clamp_tilt(&self, tilt: f32) -> f32 {
        tilt.max(self.tilt_min).min(self.tilt_max)
    }

    pub fn clamp_speed(&self, speed: f32) -> f32 {
        speed.max(self.speed_min).min(self.speed_max)
    }

    /// The camera pans against the sensor's yaw, hence the negation.
    pub fn pan_from_deg(&self, yaw_deg: f32) -> f32 {
        rotation_value(-yaw_deg, PAN_RANGE_DEG, self.pan_min, self.pan_max)
    }

    pub fn tilt_from_deg(&self, roll_deg: f32) -> f32 {
        rotation_value(roll_deg, TILT_RANGE_DEG, self.tilt_min, self.tilt_max)
    }
}

pub fn extract_absolute_ptz_space(body: &str) -> Result<PtzSpace, ExtractError> {
    let doc = onvif_xml::parse(body)?;
    let spaces = Located::walk(
        &doc,
        &[
            ENVELOPE,
            BODY,
            "tptz:GetConfigurationOptionsResponse",
            "tptz:PTZConfigurationOptions",
            "tt:Spaces",
        ],
    )?;
    let position = spaces.child("tt:AbsolutePanTiltPositionSpace")?;
    let speed = spaces.child("tt:PanTiltSpeedSpace")?;

    Ok(PtzSpace {
        pan_min: range_bound(&position, "tt:XRange", "tt:Min")?,
        pan_max: range_bound(&position, "tt:XRange", "tt:Max")?,
        tilt_min: range_bound(&position, "tt:YRange", "tt:Min")?,
        tilt_max: range_bound(&position, "tt:YRange", "tt:Max")?,
        speed_min: range_bound(&speed, "tt:XRange", "tt:Min")?,
        speed_max: range_bound(&speed, "tt:XRange", "tt:Max")?,
    })
}

fn range_bound(space: &Located, axis: &str, bound: &str) -> Result<f32, ExtractError> {
    space.clone().descend(&[axis, bound])?.f32_text()
}
