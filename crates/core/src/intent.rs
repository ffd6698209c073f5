//! Intent labels
//!
//! Labels are diagnostic and non-exclusive: a query may carry several.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Returned instead of labels when the query is empty or whitespace
pub const NO_QUERY_MESSAGE: &str = "No query provided.";

/// Separator used when joining several labels
const LABEL_SEPARATOR: &str = "; ";

/// Descriptive tag for what the customer seems to want
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IntentLabel {
    #[serde(rename = "Open account")]
    OpenAccount,
    #[serde(rename = "Billing / charge concern")]
    BillingConcern,
    #[serde(rename = "Account access")]
    AccountAccess,
    #[serde(rename = "Investigate transaction")]
    InvestigateTransaction,
    #[serde(rename = "Card service request")]
    CardServiceRequest,
    #[serde(rename = "Account statement")]
    AccountStatement,
    #[serde(rename = "Loan inquiry")]
    LoanInquiry,
    #[serde(rename = "General information / other")]
    GeneralInformation,
}

impl IntentLabel {
    /// Order in which keyword checks run. The fallback is not part of it.
    pub const DETECTION_ORDER: [IntentLabel; 7] = [
        IntentLabel::OpenAccount,
        IntentLabel::BillingConcern,
        IntentLabel::AccountAccess,
        IntentLabel::InvestigateTransaction,
        IntentLabel::CardServiceRequest,
        IntentLabel::AccountStatement,
        IntentLabel::LoanInquiry,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            IntentLabel::OpenAccount => "Open account",
            IntentLabel::BillingConcern => "Billing / charge concern",
            IntentLabel::AccountAccess => "Account access",
            IntentLabel::InvestigateTransaction => "Investigate transaction",
            IntentLabel::CardServiceRequest => "Card service request",
            IntentLabel::AccountStatement => "Account statement",
            IntentLabel::LoanInquiry => "Loan inquiry",
            IntentLabel::GeneralInformation => "General information / other",
        }
    }
}

impl fmt::Display for IntentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of intent interpretation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IntentReport {
    /// Query was empty or whitespace only
    NoQuery,
    /// Matched labels in detection order; never empty
    Labels(Vec<IntentLabel>),
}

impl IntentReport {
    /// Labels carried by the report (empty for `NoQuery`)
    pub fn labels(&self) -> &[IntentLabel] {
        match self {
            IntentReport::NoQuery => &[],
            IntentReport::Labels(labels) => labels,
        }
    }

    pub fn is_no_query(&self) -> bool {
        matches!(self, IntentReport::NoQuery)
    }
}

impl fmt::Display for IntentReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IntentReport::NoQuery => f.write_str(NO_QUERY_MESSAGE),
            IntentReport::Labels(labels) => {
                for (i, label) in labels.iter().enumerate() {
                    if i > 0 {
                        f.write_str(LABEL_SEPARATOR)?;
                    }
                    f.write_str(label.as_str())?;
                }
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_joins_labels() {
        let report = IntentReport::Labels(vec![
            IntentLabel::BillingConcern,
            IntentLabel::CardServiceRequest,
        ]);
        assert_eq!(
            report.to_string(),
            "Billing / charge concern; Card service request"
        );
    }

    #[test]
    fn test_no_query_message() {
        assert_eq!(IntentReport::NoQuery.to_string(), "No query provided.");
        assert!(IntentReport::NoQuery.labels().is_empty());
    }

    #[test]
    fn test_detection_order_excludes_fallback() {
        assert!(!IntentLabel::DETECTION_ORDER.contains(&IntentLabel::GeneralInformation));
    }
}
