use anyhow::{Context, Result};
use clap::Parser;
use onvif_ptz_client::{
    angle::Posture,
    cli::{Args, Command},
    config::Target,
    ptz_client::PtzClient,
    ptz_status::PtzPosition,
    session::PtzSession,
    transport::HttpTransport,
    wsse,
};
use serde::Serialize;
use std::io::Write;

fn main() -> Result<()> {
    init_logger();
    let args = Args::parse();
    // Must run while the process is still single-threaded.
    wsse::local_offset();
    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("tokio runtime build failed")?
        .block_on(run(args))
}

async fn run(args: Args) -> Result<()> {
    let target = Target::from_args(&args)?;
    let (username, password) = target.credentials();
    let client = PtzClient::new(
        HttpTransport::new(target.clone()).context("ptz client build failed")?,
        username,
        password,
    );

    let session = PtzSession::initialize(&client, target.device_path())
        .await
        .context("camera initialization failed")?;

    match args.command {
        Command::Info => print_session(&session, args.json),
        Command::Status => print_position(&session.position, args.json),
        Command::Move {
            pan,
            tilt,
            speed_x,
            speed_y,
        } => {
            let sent = session
                .move_to(&client, pan, tilt, speed_x, speed_y)
                .await?;
            print_position(&sent, args.json)
        }
        Command::Point {
            yaw_deg,
            roll_deg,
            ref_yaw_deg,
            ref_roll_deg,
        } => {
            let sent = session
                .move_to_posture(
                    &client,
                    Posture::new(roll_deg, 0.0, yaw_deg),
                    Posture::new(ref_roll_deg, 0.0, ref_yaw_deg),
                )
                .await?;
            print_position(&sent, args.json)
        }
    }
}

fn print_session(session: &PtzSession, json: bool) -> Result<()> {
    if json {
        return print_json(session);
    }
    println!("Media URI:     {}", session.endpoints.media);
    println!("Events URI:    {}", session.endpoints.events);
    println!("PTZ URI:       {}", session.endpoints.ptz);
    println!("Profile Token: {}", session.profile.profile_token);
    println!("PTZ Token:     {}", session.profile.ptz_configuration_token);
    println!(
        "Pan Space:     {:.2} to {:.2}",
        session.space.pan_min, session.space.pan_max
    );
    println!(
        "Tilt Space:    {:.2} to {:.2}",
        session.space.tilt_min, session.space.tilt_max
    );
    println!(
        "Speed Limit:   {:.2} to {:.2}",
        session.space.speed_min, session.space.speed_max
    );
    print_position(&session.position, false)
}

fn print_position(position: &PtzPosition, json: bool) -> Result<()> {
    if json {
        return print_json(position);
    }
    println!(
        "Position:      (pan, tilt) = ({:.3}, {:.3})",
        position.pan, position.tilt
    );
    Ok(())
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let text = serde_json::to_string_pretty(value).context("json encode failed")?;
    println!("{text}");
    Ok(())
}

fn init_logger() {
    let env = env_logger::Env::default().filter_or("RUST_LOG", "info");
    env_logger::Builder::from_env(env)
        .format(|buf, record| {
            writeln!(
                buf,
                "{} {:<5} {}",
                buf.timestamp_millis(),
                record.level(),
                record.args()
            )
        })
        .init();
}
