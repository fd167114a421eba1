use crate::{
    angle::Posture,
    onvif_profiles::{self, Profile},
    onvif_services::{self, ServiceEndpoints},
    ptz_client::{PtzClient, DEFAULT_SPEED},
    ptz_config::{self, PtzSpace},
    ptz_status::{self, PtzPosition},
    transport::Transport,
};
use anyhow::{bail, Context, Result};
use serde::Serialize;

/// Everything the camera reports during start-up, in discovery order.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PtzSession {
    pub endpoints: ServiceEndpoints,
    pub profile: Profile,
    pub space: PtzSpace,
    pub position: PtzPosition,
}

impl PtzSession {
    /// Capabilities, profiles, configuration options and status, in that order.
    /// The first failing step aborts the sequence.
    pub async fn initialize<T: Transport>(client: &PtzClient<T>, device_path: &str) -> Result<Self> {
        log::info!("[GetCapabilities] {device_path}");
        let capabilities = client
            .get_capabilities(device_path)
            .await
            .context("get capabilities failed")?;
        let endpoints = onvif_services::extract_service_endpoints(&capabilities)
            .context("capabilities response")?;
        log::info!("  media={} events={} ptz={}", endpoints.media, endpoints.events, endpoints.ptz);
        if endpoints.media.is_empty() {
            bail!("media service address not reported");
        }
        if endpoints.ptz.is_empty() {
            bail!("PTZ service address not reported");
        }

        log::info!("[GetProfiles] {}", endpoints.media);
        let profiles = client
            .get_profiles(&endpoints.media)
            .await
            .context("get profiles failed")?;
        let profile = onvif_profiles::extract_first_profile(&profiles).context("profiles response")?;
        log::info!(
            "  profile_token={} ptz_token={}",
            profile.profile_token,
            profile.ptz_configuration_token
        );

        log::info!("[GetConfigurationOptions] {}", endpoints.ptz);
        let options = client
            .get_configuration_options(&endpoints.ptz, &profile.ptz_configuration_token)
            .await
            .context("get configuration options failed")?;
        let space = ptz_config::extract_absolute_ptz_space(&options)
            .context("configuration options response")?;
        log::info!(
            "  pan=[{:.2}..{:.2}] tilt=[{:.2}..{:.2}] speed=[{:.2}..{:.2}]",
            space.pan_min,
            space.pan_max,
            space.tilt_min,
            space.tilt_max,
            space.speed_min,
            space.speed_max
        );

        let position = fetch_position(client, &endpoints.ptz, &profile.profile_token).await?;

        Ok(Self {
            endpoints,
            profile,
            space,
            position,
        })
    }

    pub async fn refresh_position<T: Transport>(&mut self, client: &PtzClient<T>) -> Result<PtzPosition> {
        self.position = fetch_position(client, &self.endpoints.ptz, &self.profile.profile_token).await?;
        Ok(self.position)
    }

    /// Clamps position and speed to the discovered space before sending.
    pub async fn move_to<T: Transport>(
        &self,
        client: &PtzClient<T>,
        pan: f32,
        tilt: f32,
        speed_x: f32,
        speed_y: f32,
    ) -> Result<PtzPosition> {
        self.send_move(
            client,
            pan,
            tilt,
            self.space.clamp_speed(speed_x),
            self.space.clamp_speed(speed_y),
        )
        .await
    }

    /// Yaw drives pan and roll drives tilt, measured from a zero reference.
    pub async fn move_to_deg<T: Transport>(
        &self,
        client: &PtzClient<T>,
        yaw_deg: f32,
        roll_deg: f32,
    ) -> Result<PtzPosition> {
        self.move_to_posture(
            client,
            Posture::new(roll_deg, 0.0, yaw_deg),
            Posture::default(),
        )
        .await
    }

    /// Moves by the offset of `current` from `reference`, both folded into `[-180, 180)`.
    /// Speed is always 1.0.
    pub async fn move_to_posture<T: Transport>(
        &self,
        client: &PtzClient<T>,
        current: Posture,
        reference: Posture,
    ) -> Result<PtzPosition> {
        let offset = current - reference;
        let pan = self.space.pan_from_deg(offset.yaw_deg);
        let tilt = self.space.tilt_from_deg(offset.roll_deg);
        self.send_move(client, pan, tilt, DEFAULT_SPEED, DEFAULT_SPEED)
            .await
    }

    async fn send_move<T: Transport>(
        &self,
        client: &PtzClient<T>,
        pan: f32,
        tilt: f32,
        speed_x: f32,
        speed_y: f32,
    ) -> Result<PtzPosition> {
        let target = PtzPosition {
            pan: self.space.clamp_pan(pan),
            tilt: self.space.clamp_tilt(tilt),
        };
        log::info!("[AbsoluteMove] pan={:.3} tilt={:.3}", target.pan, target.tilt);
        client
            .absolute_move(
                &self.endpoints.ptz,
                &self.profile.profile_token,
                target.pan,
                target.tilt,
                speed_x,
                speed_y,
            )
            .await
            .context("absolute move failed")?;
        Ok(target)
    }
}

async fn fetch_position<T: Transport>(
    client: &PtzClient<T>,
    ptz_path: &str,
    profile_token: &str,
) -> Result<PtzPosition> {
    log::info!("[GetStatus] {ptz_path}");
    let status = client
        .get_status(ptz_path, profile_token)
        .await
        .context("get status failed")?;
    let position = ptz_status::extract_absolute_position(&status).context("status response")?;
    log::info!("  pan={:.3} tilt={:.3}", position.pan, position.tilt);
    Ok(position)
}
