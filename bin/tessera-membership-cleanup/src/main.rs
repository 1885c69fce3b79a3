//! Tessera Membership Cleanup
//!
//! Bulk-deletes program-membership ownership records whose ownership window
//! has fully elapsed, scoped to one project. Counts first, then deletes with
//! the identical condition set. Single-shot: any failure aborts the job with
//! a non-zero exit code, nothing is retried.
//!
//! ## Environment Variables
//!
//! | Variable | Description |
//! |----------|-------------|
//! | `MONGODB_URI` | Database connection string (required) |
//! | `RUST_LOG` | Log level |

use anyhow::Result;
use tracing::info;
use tracing_subscriber::EnvFilter;

use tessera_store::repository::OwnershipInfoRepository;
use tessera_store::{connect, Filter, GoodType};

const DB_NAME: &str = "tessera";
const PROJECT_ID: &str = "tessera";

fn env_required(key: &str) -> Result<String> {
    std::env::var(key).map_err(|_| anyhow::anyhow!("{} environment variable is required", key))
}

/// Records whose window has elapsed as of `now`.
///
/// TODO: confirm `ownedFrom < now` is intended here; a window *start* would
/// normally bound the other way. Kept as-is pending product-owner review.
fn elapsed_membership_conditions(now: bson::DateTime) -> Filter {
    Filter::and([
        Filter::equals("project.id", PROJECT_ID),
        Filter::equals("typeOfGood.typeOf", GoodType::ProgramMembership.as_str()),
        Filter::less_than("ownedFrom", now),
        Filter::less_than("ownedThrough", now),
    ])
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

    // captured once, both the count and the delete see the same cutoff
    let now = bson::DateTime::now();
    let conditions = elapsed_membership_conditions(now);

    let matched = repository.count(&conditions).await?;
    info!(matched, project = PROJECT_ID, "memberships past their ownership window");

    let deleted = repository.delete_many(&conditions).await?;
    info!(deleted, project = PROJECT_ID, "memberships deleted");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use bson::doc;

    #[test]
    fn test_condition_document() {
        let now = bson::DateTime::from_millis(1_700_000_000_000);
        let compiled = elapsed_membership_conditions(now).compile();
        assert_eq!(
            compiled,
            doc! { "$and": [
                { "project.id": PROJECT_ID },
                { "typeOfGood.typeOf": "ProgramMembership" },
                { "ownedFrom": { "$lt": now } },
                { "ownedThrough": { "$lt": now } },
            ] }
        );
    }
}
