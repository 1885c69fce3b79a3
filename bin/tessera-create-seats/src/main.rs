//! Tessera Create Seats
//!
//! Writes the hand-coded auditorium seat layout to `seats.json` in the
//! working directory. Pure in-memory generation, no database access.

use anyhow::Result;
use tracing::info;
use tracing_subscriber::EnvFilter;

use tessera_venue::create_seats;

const OUTPUT_PATH: &str = "seats.json";

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let seats = create_seats();
    let json = serde_json::to_string_pretty(&seats)?;
    std::fs::write(OUTPUT_PATH, json)?;

    info!(count = seats.len(), path = OUTPUT_PATH, "seat layout written");
    Ok(())
}
