use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(author, version, about = "Drive a TP-Link TC70 camera through ONVIF PTZ absolute moves")]
pub struct Args {
    /// IP address or hostname of the camera
    #[arg(long)]
    pub ip: String,

    /// Username for WS-Security authentication
    #[arg(long)]
    pub username: String,

    /// Password for WS-Security authentication
    #[arg(long)]
    pub password: String,

    /// ONVIF port
    #[arg(long, default_value_t = 2020)]
    pub port: u16,

    /// ONVIF device service path
    #[arg(long, default_value = "onvif/device_service")]
    pub device_path: String,

    /// Timeout in milliseconds
    #[arg(long, default_value_t = 3000)]
    pub timeout_ms: u64,

    /// Print results as JSON
    #[arg(long)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Discover endpoints, profile, PTZ space and current position
    Info,
    /// Print the current pan/tilt position
    Status,
    /// Absolute move in the device's generic space
    Move {
        #[arg(long, allow_hyphen_values = true)]
        pan: f32,
        #[arg(long, allow_hyphen_values = true)]
        tilt: f32,
        #[arg(long, default_value_t = 1.0)]
        speed_x: f32,
        #[arg(long, default_value_t = 1.0)]
        speed_y: f32,
    },
    /// Absolute move from yaw/roll angles in degrees, relative to a reference heading
    Point {
        #[arg(long, allow_hyphen_values = true)]
        yaw_deg: f32,
        #[arg(long, allow_hyphen_values = true)]
        roll_deg: f32,
        #[arg(long, allow_hyphen_values = true, default_value_t = 0.0)]
        ref_yaw_deg: f32,
        #[arg(long, allow_hyphen_values = true, default_value_t = 0.0)]
        ref_roll_deg: f32,
    },
}
