//! Login Authentication Token Repository

use bson::doc;
use mongodb::{Collection, Database, IndexModel};

use crate::connection::collection_options;
use crate::domain::LoginAuthenticationToken;
use crate::error::Result;

pub struct AuthenticationRepository {
    collection: Collection<LoginAuthenticationToken>,
}

impl AuthenticationRepository {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection_with_options("authentications", collection_options()),
        }
    }

    /// Token lookup index only. Deliberately not unique: re-login appends.
    pub async fn ensure_indexes(&self) {
        super::ensure_indexes(
            &self.collection,
            vec![IndexModel::builder().keys(doc! { "token": 1 }).build()],
        )
        .await;
    }

    pub async fn insert(&self, token: &LoginAuthenticationToken) -> Result<()> {
        self.collection.insert_one(token).await?;
        Ok(())
    }

    pub async fn find_by_token(
        &self,
        token: &str,
    ) -> Result<Option<LoginAuthenticationToken>> {
        Ok(self.collection.find_one(doc! { "token": token }).await?)
    }

    pub async fn delete_by_owner(&self, owner: &str) -> Result<u64> {
        let result = self.collection.delete_many(doc! { "owner": owner }).await?;
        Ok(result.deleted_count)
    }
}
