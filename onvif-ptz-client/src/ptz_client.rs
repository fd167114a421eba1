use crate::error::ClientError;
use crate::onvif_requests::{self, Operation};
use crate::soap;
use crate::transport::Transport;

pub const DEFAULT_SPEED: f32 = 1.0;

/// Request façade for the five PTZ operations.
///
/// Every call builds a new UsernameToken, posts the envelope to `uri` (host-relative)
/// and returns the response body untouched. Anything but HTTP 200 is a failure; the
/// body of a failed call is never handed to an extractor.
pub struct PtzClient<T> {
    transport: T,
    username: String,
    password: String,
}

impl<T: Transport> PtzClient<T> {
    pub fn new(transport: T, username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            transport,
            username: username.into(),
            password: password.into(),
        }
    }

    pub async fn get_capabilities(&self, uri: &str) -> Result<String, ClientError> {
        self.request(Operation::GetCapabilities, uri, onvif_requests::pack_capabilities())
            .await
    }

    pub async fn get_profiles(&self, media_uri: &str) -> Result<String, ClientError> {
        self.request(Operation::GetProfiles, media_uri, onvif_requests::pack_profiles())
            .await
    }

    pub async fn get_configuration_options(
        &self,
        ptz_uri: &str,
        ptz_token: &str,
    ) -> Result<String, ClientError> {
        self.request(
            Operation::GetConfigurationOptions,
            ptz_uri,
            onvif_requests::pack_configuration_options(ptz_token),
        )
        .await
    }

    pub async fn get_status(&self, ptz_uri: &str, profile_token: &str) -> Result<String, ClientError> {
        self.request(
            Operation::GetStatus,
            ptz_uri,
            onvif_requests::pack_status(profile_token),
        )
        .await
    }

    pub async fn absolute_move(
        &self,
        ptz_uri: &str,
        profile_token: &str,
        pan: f32,
        tilt: f32,
        speed_x: f32,
        speed_y: f32,
    ) -> Result<String, ClientError> {
        self.request(
            Operation::AbsoluteMove,
            ptz_uri,
            onvif_requests::pack_absolute_move(profile_token, pan, tilt, speed_x, speed_y),
        )
        .await
    }

    pub async fn absolute_move_default_speed(
        &self,
        ptz_uri: &str,
        profile_token: &str,
        pan: f32,
        tilt: f32,
    ) -> Result<String, ClientError> {
        self.absolute_move(ptz_uri, profile_token, pan, tilt, DEFAULT_SPEED, DEFAULT_SPEED)
            .await
    }

    async fn request(
        &self,
        operation: Operation,
        uri: &str,
        body: String,
    ) -> Result<String, ClientError> {
        let payload = soap::build_payload(&self.username, &self.password, &body);
        let response = self
            .transport
            .post(uri, payload)
            .await
            .map_err(|source| ClientError::Transport { operation, source })?;
        if response.status != 200 {
            return Err(ClientError::HttpStatus {
                operation,
                status: response.status,
            });
        }
        Ok(response.body)
    }
}
