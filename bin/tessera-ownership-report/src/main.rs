//! Tessera Ownership Report
//!
//! Streams reservation ownership records for one project into a CSV file,
//! one line per record as the store cursor yields them. A mid-stream error
//! is fatal but already-written lines are flushed to the file first.
//!
//! ## Environment Variables
//!
//! | Variable | Description |
//! |----------|-------------|
//! | `MONGODB_URI` | Database connection string (required) |
//! | `RUST_LOG` | Log level |

use anyhow::Result;
use futures::StreamExt;
use tokio::io::{AsyncWriteExt, BufWriter};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use tessera_report::{ownership_report, ReportFormat};
use tessera_store::repository::OwnershipInfoRepository;
use tessera_store::{connect, Filter, GoodType};

const DB_NAME: &str = "tessera";
const PROJECT_ID: &str = "tessera";
const OUTPUT_PATH: &str = "ownership-report.csv";
const FORMAT: ReportFormat = ReportFormat::Csv;

fn env_required(key: &str) -> Result<String> {
    std::env::var(key).map_err(|_| anyhow::anyhow!("{} environment variable is required", key))
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let uri = env_required("MONGODB_URI")?;
    let client = connect(&uri).await?;
    let db = client.database(DB_NAME);

    let repository = OwnershipInfoRepository::new(&db);

    let conditions = Filter::and([
        Filter::equals("project.id", PROJECT_ID),
        Filter::equals("typeOfGood.typeOf", GoodType::Reservation.as_str()),
    ]);

    let stream = ownership_report(&repository, &conditions, FORMAT).await?;
    tokio::pin!(stream);

    let file = tokio::fs::File::create(OUTPUT_PATH).await?;
    let mut writer = BufWriter::new(file);
    let mut lines = 0u64;

    while let Some(item) = stream.next().await {
        match item {
            Ok(line) => {
                writer.write_all(line.as_bytes()).await?;
                writer.write_all(b"\n").await?;
                lines += 1;
            }
            Err(e) => {
                // keep what was already produced before surfacing the error
                writer.flush().await?;
                error!(lines, path = OUTPUT_PATH, "report aborted mid-stream");
                return Err(e.into());
            }
        }
    }

    writer.flush().await?;
    info!(lines, path = OUTPUT_PATH, format = FORMAT.media_type(), "report complete");

    Ok(())
}
