//! Record serialization.

use serde::Serialize;
use tessera_store::OwnershipInfo;

use crate::Result;

/// Output framing for a report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    /// One CSV line per record, preceded by a header row.
    Csv,
    /// One JSON document per line, no header.
    JsonLines,
}

impl ReportFormat {
    pub fn media_type(&self) -> &'static str {
        match self {
            ReportFormat::Csv => "text/csv",
            ReportFormat::JsonLines => "application/json",
        }
    }
}

/// Flattened projection of one ownership record, identical field order for
/// both output formats. Timestamps are RFC 3339.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportRecord {
    pub identifier: String,
    pub owned_by_id: String,
    pub owned_by_name: String,
    pub good_type: String,
    pub good_identifier: String,
    pub owned_from: String,
    pub owned_through: String,
}

impl From<&OwnershipInfo> for ReportRecord {
    fn from(info: &OwnershipInfo) -> Self {
        Self {
            identifier: info.identifier.clone(),
            owned_by_id: info.owned_by.id.clone(),
            owned_by_name: info.owned_by.name.clone(),
            good_type: info.type_of_good.type_of.as_str().to_string(),
            good_identifier: info.type_of_good.identifier.clone(),
            owned_from: info.owned_from.to_rfc3339(),
            owned_through: info.owned_through.to_rfc3339(),
        }
    }
}

impl ReportRecord {
    pub fn serialize_line(&self, format: ReportFormat) -> Result<String> {
        match format {
            ReportFormat::Csv => Ok(csv_line(&[
                &self.identifier,
                &self.owned_by_id,
                &self.owned_by_name,
                &self.good_type,
                &self.good_identifier,
                &self.owned_from,
                &self.owned_through,
            ])),
            ReportFormat::JsonLines => Ok(serde_json::to_string(self)?),
        }
    }
}

pub(crate) fn csv_header() -> String {
    csv_line(&[
        "identifier",
        "ownedById",
        "ownedByName",
        "goodType",
        "goodIdentifier",
        "ownedFrom",
        "ownedThrough",
    ])
}

fn csv_line(fields: &[&str]) -> String {
    fields
        .iter()
        .map(|f| csv_field(f))
        .collect::<Vec<_>>()
        .join(",")
}

/// Quote a field when it contains the separator, a quote, or a line break.
fn csv_field(value: &str) -> String {
    if value.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use tessera_store::{GoodType, Owner, OwnershipInfo, TypeOfGood};

    fn sample() -> OwnershipInfo {
        OwnershipInfo::new(
            "own-1",
            "main",
            Owner { id: "u1".to_string(), name: "Yamada, Taro".to_string() },
            TypeOfGood {
                type_of: GoodType::Reservation,
                identifier: "res-1".to_string(),
            },
            Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap(),
            Utc.with_ymd_and_hms(2026, 1, 2, 0, 0, 0).unwrap(),
        )
    }

    #[test]
    fn test_media_types() {
        assert_eq!(ReportFormat::Csv.media_type(), "text/csv");
        assert_eq!(ReportFormat::JsonLines.media_type(), "application/json");
    }

    #[test]
    fn test_csv_line_quotes_separator() {
        let line = ReportRecord::from(&sample())
            .serialize_line(ReportFormat::Csv)
            .unwrap();
        assert_eq!(
            line,
            "own-1,u1,\"Yamada, Taro\",Reservation,res-1,\
             2026-01-01T00:00:00+00:00,2026-01-02T00:00:00+00:00"
        );
    }

    #[test]
    fn test_csv_field_escapes_embedded_quotes() {
        assert_eq!(csv_field("say \"hi\""), "\"say \"\"hi\"\"\"");
        assert_eq!(csv_field("plain"), "plain");
    }

    #[test]
    fn test_json_line_shape() {
        let line = ReportRecord::from(&sample())
            .serialize_line(ReportFormat::JsonLines)
            .unwrap();
        let value: serde_json::Value = serde_json::from_str(&line).unwrap();
        assert_eq!(value["identifier"], "own-1");
        assert_eq!(value["goodType"], "Reservation");
        assert_eq!(value["ownedFrom"], "2026-01-01T00:00:00+00:00");
    }

    #[test]
    fn test_header_matches_record_field_order() {
        assert_eq!(
            csv_header(),
            "identifier,ownedById,ownedByName,goodType,goodIdentifier,ownedFrom,ownedThrough"
        );
    }
}
