pub mod angle;
pub mod cli;
pub mod config;
pub mod error;
pub mod onvif_profiles;
pub mod onvif_requests;
pub mod onvif_services;
pub mod onvif_xml;
pub mod ptz_client;
pub mod ptz_config;
pub mod ptz_status;
pub mod session;
pub mod soap;
pub mod transport;
pub mod wsse;
pub mod xml_text;
