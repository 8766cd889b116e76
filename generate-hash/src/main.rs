use anyhow::Context;
use std::io;
use tracing::info;
use tracing_subscriber::EnvFilter;

use otp_hash_shared::{generate_hash, parse_args, SEND_OTP_URL, USAGE};

fn main() -> anyhow::Result<()> {
    // Initialize tracing on stderr so stdout carries only the report
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .with_target(false)
        .without_time()
        .init();

    // parse_args only fails on a missing identifier
    let Ok(invocation) = parse_args(std::env::args().skip(1)) else {
        println!("{}", USAGE);
        std::process::exit(1);
    };

    info!("Generating hash key for OTP send endpoint: {}", SEND_OTP_URL);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    generate_hash(&invocation.identifier, invocation.timestamp.as_deref(), &mut out)
        .context("Failed to generate hash key")?;

    Ok(())
}
