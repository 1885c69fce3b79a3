//! Database connection bootstrap.
//!
//! Every repository takes an explicit `&Database` handle; nothing here is a
//! process-wide singleton. Collections are opened primary-preferred with a
//! majority write concern so reads stay available during a primary failover
//! and writes are only acknowledged once durably replicated.

use std::time::Duration;

use mongodb::options::{
    Acknowledgment, ClientOptions, CollectionOptions, ReadPreference, SelectionCriteria,
    WriteConcern,
};
use mongodb::Client;

use crate::error::Result;

/// Majority acknowledgment deadline. A write erroring on this timeout has an
/// unknown outcome, see [`crate::StoreError::is_ambiguous_write`].
const WRITE_CONCERN_TIMEOUT: Duration = Duration::from_secs(10);

/// Connect to the document store. Unreachable hosts surface as an error from
/// the first operation; jobs treat that as fatal.
pub async fn connect(uri: &str) -> Result<Client> {
    let mut options = ClientOptions::parse(uri).await?;
    options.app_name = Some("tessera".to_string());
    Ok(Client::with_options(options)?)
}

/// Collection-level access policy shared by all repositories.
pub(crate) fn collection_options() -> CollectionOptions {
    CollectionOptions::builder()
        .selection_criteria(SelectionCriteria::ReadPreference(
            ReadPreference::PrimaryPreferred {
                options: Default::default(),
            },
        ))
        .write_concern(
            WriteConcern::builder()
                .w(Acknowledgment::Majority)
                .w_timeout(WRITE_CONCERN_TIMEOUT)
                .build(),
        )
        .build()
}
