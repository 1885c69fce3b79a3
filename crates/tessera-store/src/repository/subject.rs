//! Accounting Subject Repository
//!
//! Deprecated collection, still read by historical sales reports.

use bson::doc;
use futures::TryStreamExt;
use mongodb::options::IndexOptions;
use mongodb::{Collection, Database, IndexModel};

use crate::connection::collection_options;
use crate::domain::AccountingSubject;
use crate::error::Result;
use crate::query::Filter;

pub struct SubjectRepository {
    collection: Collection<AccountingSubject>,
}

impl SubjectRepository {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection_with_options("subjects", collection_options()),
        }
    }

    pub async fn ensure_indexes(&self) {
        super::ensure_indexes(
            &self.collection,
            vec![
                IndexModel::builder()
                    .keys(doc! { "detailCd": 1 })
                    .options(IndexOptions::builder().unique(true).build())
                    .build(),
                IndexModel::builder()
                    .keys(doc! { "createdAt": 1, "updatedAt": 1 })
                    .build(),
                // Partial: most historical rows have no project reference,
                // indexing them would only bloat the index.
                IndexModel::builder()
                    .keys(doc! { "project.id": 1 })
                    .options(
                        IndexOptions::builder()
                            .partial_filter_expression(
                                doc! { "project.id": { "$exists": true } },
                            )
                            .build(),
                    )
                    .build(),
            ],
        )
        .await;
    }

    pub async fn insert(&self, subject: &AccountingSubject) -> Result<()> {
        self.collection.insert_one(subject).await?;
        Ok(())
    }

    pub async fn find(&self, filter: &Filter) -> Result<Vec<AccountingSubject>> {
        let cursor = self
            .collection
            .find(filter.compile())
            .sort(doc! { "detailCd": 1 })
            .await?;
        Ok(cursor.try_collect().await?)
    }

    pub async fn count(&self, filter: &Filter) -> Result<u64> {
        Ok(self.collection.count_documents(filter.compile()).await?)
    }

    pub async fn delete_many(&self, filter: &Filter) -> Result<u64> {
        let result = self.collection.delete_many(filter.compile()).await?;
        Ok(result.deleted_count)
    }
}
