use crate::error::ExtractError;
use crate::onvif_xml::{self, Located, BODY, ENVELOPE};
use serde::Serialize;

/// Host-relative service paths. A field is empty when the device did not report the
/// service or its address was not of the form `http://host/path`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ServiceEndpoints {
    pub media: String,
    pub events: String,
    pub ptz: String,
}

pub fn extract_service_endpoints(body: &str) -> Result<ServiceEndpoints, ExtractError> {
    let doc = onvif_xml::parse(body)?;
    let capabilities = Located::walk(
        &doc,
        &[
            ENVELOPE,
            BODY,
            "tds:GetCapabilitiesResponse",
            "tds:Capabilities",
        ],
    )?;
    let service_path = |name: &str| {
        capabilities
            .find_child(name)
            .and_then(|service| service.find_child("tt:XAddr"))
            .and_then(|xaddr| xaddr.text())
            .and_then(host_relative_path)
            .unwrap_or_default()
    };
    Ok(ServiceEndpoints {
        media: service_path("tt:Media"),
        events: service_path("tt:Events"),
        ptz: service_path("tt:PTZ"),
    })
}

/// `http://host/path` -> `path`. Anything else, including `https://`, does not match.
pub fn host_relative_path(xaddr: &str) -> Option<String> {
    let rest = xaddr.strip_prefix("http://")?;
    let (_host, path) = rest.split_once('/')?;
    if path.contains('\n') {
        return None;
    }
    Some(path.to_string())
}
