//! Service categories
//!
//! Exactly one category is routed per query. Serialized by display name
//! ("Account Opening", "Billing Issue", ...).

use serde::{Deserialize, Serialize};
use std::fmt;

/// Service routing category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "Account Opening")]
    AccountOpening,
    #[serde(rename = "Billing Issue")]
    BillingIssue,
    #[serde(rename = "Account Access")]
    AccountAccess,
    #[serde(rename = "Transaction Inquiry")]
    TransactionInquiry,
    #[serde(rename = "Card Services")]
    CardServices,
    #[serde(rename = "Account Statement")]
    AccountStatement,
    #[serde(rename = "Loan Inquiry")]
    LoanInquiry,
    #[serde(rename = "General Information")]
    GeneralInformation,
}

impl Category {
    /// All categories, in declaration order
    pub const ALL: [Category; 8] = [
        Category::AccountOpening,
        Category::BillingIssue,
        Category::AccountAccess,
        Category::TransactionInquiry,
        Category::CardServices,
        Category::AccountStatement,
        Category::LoanInquiry,
        Category::GeneralInformation,
    ];

    /// Human-readable name
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::AccountOpening => "Account Opening",
            Category::BillingIssue => "Billing Issue",
            Category::AccountAccess => "Account Access",
            Category::TransactionInquiry => "Transaction Inquiry",
            Category::CardServices => "Card Services",
            Category::AccountStatement => "Account Statement",
            Category::LoanInquiry => "Loan Inquiry",
            Category::GeneralInformation => "General Information",
        }
    }

    /// Categories whose replies need a concrete transaction to act on
    pub fn is_transactional(&self) -> bool {
        matches!(
            self,
            Category::TransactionInquiry | Category::CardServices | Category::BillingIssue
        )
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_names_match_serde() {
        for category in Category::ALL {
            let json = serde_json::to_value(category).unwrap();
            assert_eq!(json, category.as_str());
            assert_eq!(category.to_string(), category.as_str());
        }
    }

    #[test]
    fn test_serializes_by_display_name() {
        let json = serde_json::to_string(&Category::CardServices).unwrap();
        assert_eq!(json, "\"Card Services\"");

        let parsed: Category = serde_json::from_str("\"Loan Inquiry\"").unwrap();
        assert_eq!(parsed, Category::LoanInquiry);
    }

    #[test]
    fn test_transactional_categories() {
        let transactional: Vec<_> = Category::ALL
            .into_iter()
            .filter(Category::is_transactional)
            .collect();
        assert_eq!(
            transactional,
            vec![
                Category::BillingIssue,
                Category::TransactionInquiry,
                Category::CardServices
            ]
        );
    }
}
