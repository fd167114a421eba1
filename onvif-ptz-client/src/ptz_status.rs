use crate::error::ExtractError;
use crate::onvif_xml::{self, Located, BODY, ENVELOPE};
use serde::Serialize;

/// Current position in the device's generic position space (not degrees).
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct PtzPosition {
    pub pan: f32,
    pub tilt: f32,
}

pub fn extract_absolute_position(body: &str) -> Result<PtzPosition, ExtractError> {
    let doc = onvif_xml::parse(body)?;
    let pan_tilt = Located::walk(
        &doc,
        &[
            ENVELOPE,
            BODY,
            "tptz:GetStatusResponse",
            "tptz:PTZStatus",
            "tt:Position",
            "tt:PanTilt",
        ],
    )?;
    Ok(PtzPosition {
        pan: pan_tilt.f32_attribute("x")?,
        tilt: pan_tilt.f32_attribute("y")?,
    })
}
