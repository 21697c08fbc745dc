//! Connect to a Surveillance Station and print an overview of its cameras
//!
//! Usage:
//!   cargo run --example basic_usage -- <url> <username> <password> [--insecure]
//!
//! `--insecure` accepts self-signed certificates, which most stations use.

use std::env;
use std::process;

use surveillance_api::logging::{init_logging, LoggingMode};
use surveillance_api::{ClientConfig, Params, SurveillanceClient};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = env::args().skip(1).collect();
    if args.len() < 3 {
        eprintln!("Usage: basic_usage <url> <username> <password> [--insecure]");
        process::exit(2);
    }

    init_logging(LoggingMode::Development)?;

    let config = ClientConfig::builder()
        .url(&args[0])
        .username(&args[1])
        .password(&args[2])
        .verify_tls(!args.iter().any(|arg| arg == "--insecure"))
        .build()?;

    let mut client = SurveillanceClient::connect(config)?;
    println!("Connected, session {}", client.session_id());

    let home_mode = client.home_mode_status(Params::new())?;
    println!("Home mode: {}", if home_mode { "on" } else { "off" });

    for camera in client.camera_list(Params::new())? {
        let motion = client.camera_event_motion_enum(camera.id(), Params::new())?;

        println!(
            "#{:<3} {:<24} enabled={:<5} recording={:<5} motion={:?}",
            camera.id(),
            camera.name(),
            camera.is_enabled(),
            camera.is_recording(),
            motion.source()
        );
        println!("     {}", camera.video_stream_url());
    }

    Ok(())
}
