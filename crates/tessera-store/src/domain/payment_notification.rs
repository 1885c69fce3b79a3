//! Payment Notification Entity
//!
//! Asynchronous result notifications posted by the payment gateway. Rows are
//! consumed by an out-of-band worker polling on `processStatus`.

use bson::oid::ObjectId;
use bson::serde_helpers::chrono_datetime_as_bson_datetime;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Out-of-band consumption state of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProcessStatus {
    /// Received, nobody has picked it up yet
    Unprocessed,
    /// A worker has claimed it
    Processing,
    /// Fully handled
    Processed,
}

/// One gateway notification, stored verbatim plus the processing state.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentNotification {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,

    /// Gateway shop identifier
    pub shop_id: String,

    /// Order the payment belongs to
    pub order_id: String,

    /// Result status reported by the gateway
    pub status: String,

    /// Gateway job code (capture, auth, cancel, ...)
    pub job_cd: String,

    pub amount: i64,

    pub tax: i64,

    /// Payment method family (card, convenience store, ...)
    pub pay_type: String,

    /// Gateway transaction access identifier
    pub access_id: String,

    /// Acquirer forward code
    #[serde(skip_serializing_if = "Option::is_none")]
    pub forward: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub method: Option<String>,

    /// Issuer approval code
    #[serde(skip_serializing_if = "Option::is_none")]
    pub approve: Option<String>,

    pub tran_id: String,

    pub tran_date: String,

    /// Convenience-store chain code
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cvs_code: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub cvs_conf_no: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub cvs_receipt_no: Option<String>,

    /// Payment deadline for deferred methods
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_term: Option<String>,

    pub process_status: ProcessStatus,

    #[serde(with = "chrono_datetime_as_bson_datetime")]
    pub created_at: DateTime<Utc>,

    #[serde(with = "chrono_datetime_as_bson_datetime")]
    pub updated_at: DateTime<Utc>,
}

impl PaymentNotification {
    /// New notification as received from the gateway, not yet processed.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        shop_id: impl Into<String>,
        order_id: impl Into<String>,
        status: impl Into<String>,
        job_cd: impl Into<String>,
        amount: i64,
        tax: i64,
        pay_type: impl Into<String>,
        access_id: impl Into<String>,
        tran_id: impl Into<String>,
        tran_date: impl Into<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: None,
            shop_id: shop_id.into(),
            order_id: order_id.into(),
            status: status.into(),
            job_cd: job_cd.into(),
            amount,
            tax,
            pay_type: pay_type.into(),
            access_id: access_id.into(),
            forward: None,
            method: None,
            approve: None,
            tran_id: tran_id.into(),
            tran_date: tran_date.into(),
            cvs_code: None,
            cvs_conf_no: None,
            cvs_receipt_no: None,
            payment_term: None,
            process_status: ProcessStatus::Unprocessed,
            created_at: now,
            updated_at: now,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_process_status_wire_format() {
        let json = serde_json::to_string(&ProcessStatus::Unprocessed).unwrap();
        assert_eq!(json, "\"UNPROCESSED\"");
        let status: ProcessStatus = serde_json::from_str("\"PROCESSED\"").unwrap();
        assert_eq!(status, ProcessStatus::Processed);
    }

    #[test]
    fn test_field_names_are_camel_case() {
        let notification = PaymentNotification::new(
            "shop001", "order001", "0", "CAPTURE", 1800, 163, "0", "access001",
            "tran001", "20260829120000",
        );
        let doc = bson::to_document(&notification).unwrap();
        assert_eq!(doc.get_str("orderId").unwrap(), "order001");
        assert_eq!(doc.get_str("jobCd").unwrap(), "CAPTURE");
        assert_eq!(doc.get_str("processStatus").unwrap(), "UNPROCESSED");
        // unset optionals stay off the document entirely
        assert!(!doc.contains_key("cvsCode"));
        assert!(!doc.contains_key("_id"));
    }
}
