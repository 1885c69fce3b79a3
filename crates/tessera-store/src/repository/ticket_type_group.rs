//! Ticket Type Group Repository

use bson::doc;
use futures::TryStreamExt;
use mongodb::options::ReplaceOptions;
use mongodb::{Collection, Database};

use crate::connection::collection_options;
use crate::domain::TicketTypeGroup;
use crate::error::Result;

pub struct TicketTypeGroupRepository {
    collection: Collection<TicketTypeGroup>,
}

impl TicketTypeGroupRepository {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection_with_options("ticket_type_groups", collection_options()),
        }
    }

    /// Master data keyed by `_id` only; no secondary indexes.
    pub async fn ensure_indexes(&self) {
        super::ensure_indexes(&self.collection, vec![]).await;
    }

    /// Upsert by group identifier; master data loads are re-runnable.
    pub async fn save(&self, group: &TicketTypeGroup) -> Result<()> {
        let mut replacement = group.clone();
        replacement.updated_at = chrono::Utc::now();
        self.collection
            .replace_one(doc! { "_id": &group.id }, &replacement)
            .with_options(ReplaceOptions::builder().upsert(true).build())
            .await?;
        Ok(())
    }

    pub async fn find_by_id(&self, id: &str) -> Result<Option<TicketTypeGroup>> {
        Ok(self.collection.find_one(doc! { "_id": id }).await?)
    }

    pub async fn find_all(&self) -> Result<Vec<TicketTypeGroup>> {
        let cursor = self.collection.find(doc! {}).sort(doc! { "_id": 1 }).await?;
        Ok(cursor.try_collect().await?)
    }
}
