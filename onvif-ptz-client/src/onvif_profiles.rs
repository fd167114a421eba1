use crate::error::ExtractError;
use crate::onvif_xml::{self, Located, BODY, ENVELOPE};
use serde::Serialize;

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Profile {
    pub profile_token: String,
    pub ptz_configuration_token: String,
}

/// The first media profile. A profile without a PTZ configuration is an error.
pub fn extract_first_profile(body: &str) -> Result<Profile, ExtractError> {
    let doc = onvif_xml::parse(body)?;
    let profile = Located::walk(
        &doc,
        &[ENVELOPE, BODY, "trt:GetProfilesResponse", "trt:Profiles"],
    )?;
    let profile_token = profile.attribute("token")?.to_string();
    let ptz_configuration_token = profile
        .child("tt:PTZConfiguration")?
        .attribute("token")?
        .to_string();
    Ok(Profile {
        profile_token,
        ptz_configuration_token,
    })
}
