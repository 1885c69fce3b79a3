//! Ownership Info Repository

use bson::doc;
use futures::TryStreamExt;
use mongodb::{Collection, Cursor, Database, IndexModel};

use crate::connection::collection_options;
use crate::domain::OwnershipInfo;
use crate::error::Result;
use crate::query::Filter;

pub struct OwnershipInfoRepository {
    collection: Collection<OwnershipInfo>,
}

impl OwnershipInfoRepository {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection_with_options("ownershipInfos", collection_options()),
        }
    }

    pub async fn ensure_indexes(&self) {
        super::ensure_indexes(
            &self.collection,
            vec![
                IndexModel::builder().keys(doc! { "identifier": 1 }).build(),
                IndexModel::builder()
                    .keys(doc! {
                        "project.id": 1,
                        "typeOfGood.typeOf": 1,
                        "ownedThrough": 1,
                    })
                    .build(),
            ],
        )
        .await;
    }

    pub async fn insert(&self, info: &OwnershipInfo) -> Result<()> {
        self.collection.insert_one(info).await?;
        Ok(())
    }

    pub async fn find(&self, filter: &Filter) -> Result<Vec<OwnershipInfo>> {
        let cursor = self.collection.find(filter.compile()).await?;
        Ok(cursor.try_collect().await?)
    }

    /// Lazy cursor over matching records, oldest ownership window first.
    /// Report streaming pulls from this instead of buffering the result set.
    pub async fn find_cursor(&self, filter: &Filter) -> Result<Cursor<OwnershipInfo>> {
        Ok(self
            .collection
            .find(filter.compile())
            .sort(doc! { "ownedFrom": 1 })
            .await?)
    }

    pub async fn count(&self, filter: &Filter) -> Result<u64> {
        Ok(self.collection.count_documents(filter.compile()).await?)
    }

    pub async fn delete_many(&self, filter: &Filter) -> Result<u64> {
        let result = self.collection.delete_many(filter.compile()).await?;
        Ok(result.deleted_count)
    }
}
