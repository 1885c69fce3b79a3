//! Ownership Info Entity
//!
//! Records who owns which good over which time window. Memberships and
//! reservations both land here; the good type tag tells them apart.

use bson::oid::ObjectId;
use bson::serde_helpers::chrono_datetime_as_bson_datetime;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Kinds of goods an ownership record can govern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GoodType {
    ProgramMembership,
    Reservation,
    Seat,
    Screen,
}

impl GoodType {
    pub fn as_str(&self) -> &'static str {
        match self {
            GoodType::ProgramMembership => "ProgramMembership",
            GoodType::Reservation => "Reservation",
            GoodType::Seat => "Seat",
            GoodType::Screen => "Screen",
        }
    }
}

/// The owning party.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Owner {
    pub id: String,
    pub name: String,
}

/// The governed good.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeOfGood {
    pub type_of: GoodType,
    pub identifier: String,
}

/// Scoping project reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectRef {
    pub id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OwnershipInfo {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,

    /// Business identifier of the ownership itself
    pub identifier: String,

    pub project: ProjectRef,

    pub owned_by: Owner,

    pub type_of_good: TypeOfGood,

    /// Start of the ownership window
    #[serde(with = "chrono_datetime_as_bson_datetime")]
    pub owned_from: DateTime<Utc>,

    /// End of the ownership window
    #[serde(with = "chrono_datetime_as_bson_datetime")]
    pub owned_through: DateTime<Utc>,

    #[serde(with = "chrono_datetime_as_bson_datetime")]
    pub created_at: DateTime<Utc>,

    #[serde(with = "chrono_datetime_as_bson_datetime")]
    pub updated_at: DateTime<Utc>,
}

impl OwnershipInfo {
    pub fn new(
        identifier: impl Into<String>,
        project_id: impl Into<String>,
        owned_by: Owner,
        type_of_good: TypeOfGood,
        owned_from: DateTime<Utc>,
        owned_through: DateTime<Utc>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: None,
            identifier: identifier.into(),
            project: ProjectRef { id: project_id.into() },
            owned_by,
            type_of_good,
            owned_from,
            owned_through,
            created_at: now,
            updated_at: now,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_good_type_wire_format() {
        let json = serde_json::to_string(&GoodType::ProgramMembership).unwrap();
        assert_eq!(json, "\"ProgramMembership\"");
        assert_eq!(GoodType::Screen.as_str(), "Screen");
    }

    #[test]
    fn test_nested_field_paths() {
        let record = OwnershipInfo::new(
            "own-1",
            "main",
            Owner { id: "u1".to_string(), name: "Owner One".to_string() },
            TypeOfGood {
                type_of: GoodType::ProgramMembership,
                identifier: "mem-1".to_string(),
            },
            Utc::now(),
            Utc::now(),
        );
        let doc = bson::to_document(&record).unwrap();
        let good = doc.get_document("typeOfGood").unwrap();
        assert_eq!(good.get_str("typeOf").unwrap(), "ProgramMembership");
        let project = doc.get_document("project").unwrap();
        assert_eq!(project.get_str("id").unwrap(), "main");
    }
}
