//! Extracted details record
//!
//! JSON field names (`transactionId`, `extracted_text`, ...) are part of the
//! trace format consumed by hosts and must not change.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Field still needed from the customer before the request can proceed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MissingField {
    #[serde(rename = "transaction amount")]
    TransactionAmount,
    #[serde(rename = "transaction date")]
    TransactionDate,
    #[serde(rename = "card type or last 4 digits")]
    CardOrLast4,
    #[serde(rename = "username/email and error message")]
    LoginDetails,
    #[serde(rename = "identity documents and contact details")]
    IdentityDocuments,
}

impl MissingField {
    pub fn as_str(&self) -> &'static str {
        match self {
            MissingField::TransactionAmount => "transaction amount",
            MissingField::TransactionDate => "transaction date",
            MissingField::CardOrLast4 => "card type or last 4 digits",
            MissingField::LoginDetails => "username/email and error message",
            MissingField::IdentityDocuments => "identity documents and contact details",
        }
    }
}

impl fmt::Display for MissingField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Structured fields pulled out of a free-text query
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Details {
    /// Dollar amount literal, `$` included (e.g. "$45.00")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<String>,
    /// Numeric ("3/14/2024") or day + month name ("3 March") date
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    /// Card vocabulary token as written, or "unspecified"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub card: Option<String>,
    /// Token following a `txid` marker
    #[serde(
        rename = "transactionId",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub transaction_id: Option<String>,
    /// First standalone 4-digit run
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last4: Option<String>,
    /// The raw query, verbatim
    pub extracted_text: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub missing: Vec<MissingField>,
}

impl Details {
    /// Record carrying only the raw text
    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            extracted_text: text.into(),
            ..Self::default()
        }
    }

    /// True when no pattern-based field was extracted
    pub fn is_empty(&self) -> bool {
        self.amount.is_none()
            && self.date.is_none()
            && self.card.is_none()
            && self.transaction_id.is_none()
            && self.last4.is_none()
    }

    /// Missing fields as display strings
    pub fn missing_labels(&self) -> Vec<&'static str> {
        self.missing.iter().map(MissingField::as_str).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_fields_are_omitted() {
        let details = Details::from_text("hello");
        let json = serde_json::to_value(&details).unwrap();
        assert_eq!(json, serde_json::json!({ "extracted_text": "hello" }));
        assert!(details.is_empty());
    }

    #[test]
    fn test_wire_field_names() {
        let details = Details {
            amount: Some("$10".to_string()),
            transaction_id: Some("AB12-34".to_string()),
            last4: Some("1234".to_string()),
            extracted_text: "txid AB12-34 $10 1234".to_string(),
            missing: vec![MissingField::TransactionDate, MissingField::CardOrLast4],
            ..Details::default()
        };
        let json = serde_json::to_value(&details).unwrap();
        assert_eq!(json["transactionId"], "AB12-34");
        assert_eq!(json["last4"], "1234");
        assert_eq!(
            json["missing"],
            serde_json::json!(["transaction date", "card type or last 4 digits"])
        );
        assert!(json.get("date").is_none());
    }

    #[test]
    fn test_missing_labels() {
        let details = Details {
            missing: vec![MissingField::LoginDetails],
            ..Details::from_text("forgot password")
        };
        assert_eq!(
            details.missing_labels(),
            vec!["username/email and error message"]
        );
    }
}
