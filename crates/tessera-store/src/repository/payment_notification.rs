//! Payment Notification Repository

use bson::{doc, to_bson};
use futures::TryStreamExt;
use mongodb::{Collection, Database, IndexModel};

use crate::connection::collection_options;
use crate::domain::{PaymentNotification, ProcessStatus};
use crate::error::Result;
use crate::query::Filter;

pub struct PaymentNotificationRepository {
    collection: Collection<PaymentNotification>,
}

impl PaymentNotificationRepository {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection_with_options("gmo_notifications", collection_options()),
        }
    }

    /// Status index backs the worker polling loop; the order-id index backs
    /// notification lookup per order.
    pub async fn ensure_indexes(&self) {
        super::ensure_indexes(
            &self.collection,
            vec![
                IndexModel::builder()
                    .keys(doc! { "processStatus": 1, "createdAt": 1 })
                    .build(),
                IndexModel::builder().keys(doc! { "orderId": 1 }).build(),
            ],
        )
        .await;
    }

    pub async fn insert(&self, notification: &PaymentNotification) -> Result<()> {
        self.collection.insert_one(notification).await?;
        Ok(())
    }

    pub async fn find_by_order_id(&self, order_id: &str) -> Result<Vec<PaymentNotification>> {
        let cursor = self.collection.find(doc! { "orderId": order_id }).await?;
        Ok(cursor.try_collect().await?)
    }

    /// Oldest-first batch of notifications nobody has picked up yet.
    pub async fn find_unprocessed(&self, limit: i64) -> Result<Vec<PaymentNotification>> {
        let cursor = self
            .collection
            .find(doc! { "processStatus": to_bson(&ProcessStatus::Unprocessed)? })
            .sort(doc! { "createdAt": 1 })
            .limit(limit)
            .await?;
        Ok(cursor.try_collect().await?)
    }

    pub async fn update_process_status(
        &self,
        id: &bson::oid::ObjectId,
        status: ProcessStatus,
    ) -> Result<bool> {
        let result = self
            .collection
            .update_one(
                doc! { "_id": id },
                doc! { "$set": {
                    "processStatus": to_bson(&status)?,
                    "updatedAt": bson::DateTime::now(),
                } },
            )
            .await?;
        Ok(result.modified_count > 0)
    }

    pub async fn count(&self, filter: &Filter) -> Result<u64> {
        Ok(self.collection.count_documents(filter.compile()).await?)
    }
}
