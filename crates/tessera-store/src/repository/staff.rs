//! Internal Staff Repository

use bson::doc;
use futures::TryStreamExt;
use mongodb::options::IndexOptions;
use mongodb::{Collection, Database, IndexModel};

use crate::connection::collection_options;
use crate::domain::StaffAccount;
use crate::error::Result;

pub struct StaffRepository {
    collection: Collection<StaffAccount>,
}

impl StaffRepository {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection_with_options("staffs", collection_options()),
        }
    }

    pub async fn ensure_indexes(&self) {
        super::ensure_indexes(
            &self.collection,
            vec![IndexModel::builder()
                .keys(doc! { "userId": 1 })
                .options(IndexOptions::builder().unique(true).build())
                .build()],
        )
        .await;
    }

    /// Duplicate `userId` is rejected by the unique index and surfaces as a
    /// write error to the caller.
    pub async fn insert(&self, staff: &StaffAccount) -> Result<()> {
        self.collection.insert_one(staff).await?;
        Ok(())
    }

    pub async fn find_by_user_id(&self, user_id: &str) -> Result<Option<StaffAccount>> {
        Ok(self.collection.find_one(doc! { "userId": user_id }).await?)
    }

    pub async fn find_all(&self) -> Result<Vec<StaffAccount>> {
        let cursor = self.collection.find(doc! {}).sort(doc! { "userId": 1 }).await?;
        Ok(cursor.try_collect().await?)
    }

    pub async fn update(&self, staff: &StaffAccount) -> Result<()> {
        let mut replacement = staff.clone();
        replacement.updated_at = chrono::Utc::now();
        self.collection
            .replace_one(doc! { "userId": &staff.user_id }, &replacement)
            .await?;
        Ok(())
    }

    pub async fn delete(&self, user_id: &str) -> Result<bool> {
        let result = self.collection.delete_one(doc! { "userId": user_id }).await?;
        Ok(result.deleted_count > 0)
    }
}
