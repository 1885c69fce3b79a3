//! Phone Support Staff Entity

use bson::oid::ObjectId;
use bson::serde_helpers::chrono_datetime_as_bson_datetime;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Call-center operator account. `user_id` is unique at the store level.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhoneSupportStaff {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,

    pub user_id: String,

    pub password_salt: String,

    pub password_hash: String,

    pub name: String,

    #[serde(with = "chrono_datetime_as_bson_datetime")]
    pub created_at: DateTime<Utc>,

    #[serde(with = "chrono_datetime_as_bson_datetime")]
    pub updated_at: DateTime<Utc>,
}

impl PhoneSupportStaff {
    pub fn new(
        user_id: impl Into<String>,
        password_salt: impl Into<String>,
        password_hash: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: None,
            user_id: user_id.into(),
            password_salt: password_salt.into(),
            password_hash: password_hash.into(),
            name: name.into(),
            created_at: now,
            updated_at: now,
        }
    }
}
