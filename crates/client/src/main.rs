//! Lorma Saga headless client binary.
//!
//! Plays one scripted game and prints the final snapshot as JSON on stdout.
//! Logs go to stderr (filter with `RUST_LOG`) and optionally to a file.
//!
//! # Examples
//!
//! ```bash
//! LORMA_SEED=7 RUST_LOG=lorma_runtime=debug cargo run -p lorma-client
//! ```

use anyhow::Result;
use lorma_client::{Autoplay, ClientConfig, build_session, logging};

fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    dotenvy::dotenv().ok();

    let config = ClientConfig::from_env();
    let _guard = logging::setup_logging(config.log_file.as_deref())?;

    tracing::info!("Starting Lorma Saga autoplay");
    let mut session = build_session(&config)?;
    let report = Autoplay::new(config.max_ticks).run(&mut session)?;

    tracing::info!(
        ticks = report.ticks,
        battles_started = report.battles_started,
        battles_won = report.battles_won,
        conversations = report.conversations,
        rolls = session.rolls(),
        "Run complete"
    );

    println!("{}", serde_json::to_string_pretty(&session.snapshot())?);
    Ok(())
}
