use crate::xml_text::{format_float, xml_escape};
use strum::Display;

pub const DEVICE_ACTION_NS: &str = "http://www.onvif.org/ver10/device/wsdl";
pub const MEDIA_ACTION_NS: &str = "http://www.onvif.org/ver10/media/wsdl";
pub const PTZ_ACTION_NS: &str = "http://www.onvif.org/ver20/ptz/wsdl";
pub const TT_NS: &str = "http://www.onvif.org/ver10/schema";

pub const PAN_TILT_POSITION_SPACE: &str =
    "http://www.onvif.org/ver10/tptz/PanTiltSpaces/PositionGenericSpace";
pub const PAN_TILT_SPEED_SPACE: &str =
    "http://www.onvif.org/ver10/tptz/PanTiltSpaces/GenericSpeedSpace";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Display)]
pub enum Operation {
    GetCapabilities,
    GetProfiles,
    GetConfigurationOptions,
    GetStatus,
    AbsoluteMove,
}

impl Operation {
    pub fn namespace(self) -> &'static str {
        match self {
            Operation::GetCapabilities => DEVICE_ACTION_NS,
            Operation::GetProfiles => MEDIA_ACTION_NS,
            Operation::GetConfigurationOptions | Operation::GetStatus | Operation::AbsoluteMove => {
                PTZ_ACTION_NS
            }
        }
    }
}

pub fn pack_capabilities() -> String {
    let op = Operation::GetCapabilities;
    format!(
        r#"<{op} xmlns="{ns}"><Category>All</Category></{op}>"#,
        ns = op.namespace()
    )
}

pub fn pack_profiles() -> String {
    let op = Operation::GetProfiles;
    format!(r#"<ns0:{op} xmlns:ns0="{ns}"/>"#, ns = op.namespace())
}

pub fn pack_configuration_options(ptz_token: &str) -> String {
    let op = Operation::GetConfigurationOptions;
    format!(
        r#"<ns0:{op} xmlns:ns0="{ns}"><ns0:ConfigurationToken>{token}</ns0:ConfigurationToken></ns0:{op}>"#,
        ns = op.namespace(),
        token = xml_escape(ptz_token)
    )
}

pub fn pack_status(profile_token: &str) -> String {
    let op = Operation::GetStatus;
    format!(
        r#"<ns0:{op} xmlns:ns0="{ns}"><ns0:ProfileToken>{token}</ns0:ProfileToken></ns0:{op}>"#,
        ns = op.namespace(),
        token = xml_escape(profile_token)
    )
}

/// Values are written as given; clamping to the device space is up to the caller.
pub fn pack_absolute_move(
    profile_token: &str,
    pan: f32,
    tilt: f32,
    speed_x: f32,
    speed_y: f32,
) -> String {
    let op = Operation::AbsoluteMove;
    format!(
        r#"<{op} xmlns="{ns}"><ProfileToken>{profile}</ProfileToken><Position>{position}</Position><Speed>{speed}</Speed></{op}>"#,
        ns = op.namespace(),
        profile = xml_escape(profile_token),
        position = pan_tilt_element(pan, tilt, PAN_TILT_POSITION_SPACE),
        speed = pan_tilt_element(speed_x, speed_y, PAN_TILT_SPEED_SPACE),
    )
}

fn pan_tilt_element(x: f32, y: f32, space: &str) -> String {
    format!(
        r#"<PanTilt xmlns="{tt}" space="{space}" x="{x}" y="{y}"/>"#,
        tt = TT_NS,
        space = space,
        x = format_float(x),
        y = format_float(y)
    )
}
