//! Ticket Type Group Entity
//!
//! Master data grouping sellable ticket types. The group identifier is used
//! directly as the document `_id`.

use bson::serde_helpers::chrono_datetime_as_bson_datetime;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::MultilingualString;

/// One sellable ticket type inside a group. Carries no identity of its own;
/// it only exists as part of its group's ordered list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketType {
    pub code: String,

    pub name: MultilingualString,

    /// Charge in the smallest currency unit
    pub charge: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketTypeGroup {
    /// Group identifier, primary key
    #[serde(rename = "_id")]
    pub id: String,

    pub name: MultilingualString,

    /// Ordered, order is presentation order
    pub ticket_types: Vec<TicketType>,

    #[serde(with = "chrono_datetime_as_bson_datetime")]
    pub created_at: DateTime<Utc>,

    #[serde(with = "chrono_datetime_as_bson_datetime")]
    pub updated_at: DateTime<Utc>,
}

impl TicketTypeGroup {
    pub fn new(
        id: impl Into<String>,
        name: MultilingualString,
        ticket_types: Vec<TicketType>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: id.into(),
            name,
            ticket_types,
            created_at: now,
            updated_at: now,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_identifier_maps_to_document_id() {
        let group = TicketTypeGroup::new(
            "001",
            MultilingualString::new("一般", "General"),
            vec![TicketType {
                code: "01".to_string(),
                name: MultilingualString::new("大人", "Adult"),
                charge: 1800,
            }],
        );
        let doc = bson::to_document(&group).unwrap();
        assert_eq!(doc.get_str("_id").unwrap(), "001");
        let types = doc.get_array("ticketTypes").unwrap();
        assert_eq!(types.len(), 1);
        // nested ticket types carry no _id of their own
        let first = types[0].as_document().unwrap();
        assert!(!first.contains_key("_id"));
        assert_eq!(first.get_i64("charge").unwrap(), 1800);
    }
}
