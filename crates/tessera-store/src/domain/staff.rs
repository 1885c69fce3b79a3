//! Internal Staff Entity

use bson::oid::ObjectId;
use bson::serde_helpers::chrono_datetime_as_bson_datetime;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Back-office staff account. `user_id` is unique at the store level.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StaffAccount {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,

    pub user_id: String,

    pub password_salt: String,

    pub password_hash: String,

    pub name: String,

    pub email: String,

    pub is_admin: bool,

    #[serde(with = "chrono_datetime_as_bson_datetime")]
    pub created_at: DateTime<Utc>,

    #[serde(with = "chrono_datetime_as_bson_datetime")]
    pub updated_at: DateTime<Utc>,
}

impl StaffAccount {
    pub fn new(
        user_id: impl Into<String>,
        password_salt: impl Into<String>,
        password_hash: impl Into<String>,
        name: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: None,
            user_id: user_id.into(),
            password_salt: password_salt.into(),
            password_hash: password_hash.into(),
            name: name.into(),
            email: email.into(),
            is_admin: false,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn admin(mut self) -> Self {
        self.is_admin = true;
        self
    }
}
