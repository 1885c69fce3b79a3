//! Phone Support Staff Repository

use bson::doc;
use futures::TryStreamExt;
use mongodb::options::IndexOptions;
use mongodb::{Collection, Database, IndexModel};

use crate::connection::collection_options;
use crate::domain::PhoneSupportStaff;
use crate::error::Result;

pub struct TelStaffRepository {
    collection: Collection<PhoneSupportStaff>,
}

impl TelStaffRepository {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection_with_options("tel_staffs", collection_options()),
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

    pub async fn insert(&self, staff: &PhoneSupportStaff) -> Result<()> {
        self.collection.insert_one(staff).await?;
        Ok(())
    }

    pub async fn find_by_user_id(&self, user_id: &str) -> Result<Option<PhoneSupportStaff>> {
        Ok(self.collection.find_one(doc! { "userId": user_id }).await?)
    }

    pub async fn find_all(&self) -> Result<Vec<PhoneSupportStaff>> {
        let cursor = self.collection.find(doc! {}).sort(doc! { "userId": 1 }).await?;
        Ok(cursor.try_collect().await?)
    }
}
