//! Accounting Subject Entity
//!
//! Chart-of-accounts rows used by sales reporting. Deprecated: kept only for
//! historical reports, no new writers should be added.

use bson::oid::ObjectId;
use bson::serde_helpers::chrono_datetime_as_bson_datetime;
use bson::Bson;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountingSubject {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,

    /// Owning project, deliberately untyped: historical rows carry anything
    /// from a bare id string to an embedded document, and some carry nothing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project: Option<Bson>,

    pub classification_cd: String,

    pub classification_name: String,

    pub subject_cd: String,

    pub subject_name: String,

    /// Unique at the store level
    pub detail_cd: String,

    pub detail_name: String,

    #[serde(with = "chrono_datetime_as_bson_datetime")]
    pub created_at: DateTime<Utc>,

    #[serde(with = "chrono_datetime_as_bson_datetime")]
    pub updated_at: DateTime<Utc>,
}

impl AccountingSubject {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        classification_cd: impl Into<String>,
        classification_name: impl Into<String>,
        subject_cd: impl Into<String>,
        subject_name: impl Into<String>,
        detail_cd: impl Into<String>,
        detail_name: impl Into<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: None,
            project: None,
            classification_cd: classification_cd.into(),
            classification_name: classification_name.into(),
            subject_cd: subject_cd.into(),
            subject_name: subject_name.into(),
            detail_cd: detail_cd.into(),
            detail_name: detail_name.into(),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn with_project(mut self, project: Bson) -> Self {
        self.project = Some(project);
        self
    }
}
