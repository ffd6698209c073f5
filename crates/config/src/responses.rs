//! Response templates configuration
//!
//! One reply template per category. Templates may reference extracted
//! details through `{amount}`, `{date}`, `{card}`, `{last4}` and
//! `{transaction_id}`; missing details fall back to neutral wording.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};
use std::path::Path;
use support_triage_core::{Category, Details};

use crate::constants::placeholder_defaults;
use crate::error::ConfigError;

static PLACEHOLDER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{([A-Za-z0-9_]+)\}").expect("placeholder pattern is valid"));

/// Placeholder names a template may use
pub const KNOWN_PLACEHOLDERS: [&str; 5] = ["amount", "date", "card", "last4", "transaction_id"];

/// Reply templates keyed by category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResponseTemplates {
    pub transaction_inquiry: String,
    pub card_services: String,
    pub account_access: String,
    pub account_opening: String,
    pub billing_issue: String,
    pub account_statement: String,
    pub loan_inquiry: String,
    /// Used for General Information and anything without its own reply
    pub general_information: String,
}

impl Default for ResponseTemplates {
    fn default() -> Self {
        Self {
            transaction_inquiry: "Sorry you're experiencing this. I can see a debit of {amount} on {date}. Please confirm the last 4 digits of the card so I can investigate and file a dispute.".to_string(),
            card_services: "I can assist with your card. Please confirm the card (e.g., Visa, Mastercard) and last 4 digits, and whether the card is lost or you need a replacement.".to_string(),
            account_access: "Sorry you're having trouble signing in. Please provide your username/email and any error message you see. For security, do not share your full password.".to_string(),
            account_opening: "Great — we can open a new account. I'll need your full name, date of birth, and a form of ID. Would you like to proceed?".to_string(),
            billing_issue: "Thank you. I can help with billing queries. Please share the billed amount, date, and any transaction reference.".to_string(),
            account_statement: "I can provide your account statement. For which period would you like it (e.g., last month, a date range)?".to_string(),
            loan_inquiry: "I can help with loan information. What type of loan are you interested in and do you want rates or to apply?".to_string(),
            general_information: "Thanks for reaching out. Could you provide a bit more detail so I can assist?".to_string(),
        }
    }
}

impl ResponseTemplates {
    /// Load templates from a YAML file. Omitted keys keep their defaults.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileNotFound {
            path: path.display().to_string(),
            source: e,
        })?;

        let templates: Self =
            serde_yaml::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))?;
        templates.validate()?;
        Ok(templates)
    }

    /// Template for a category
    pub fn template(&self, category: Category) -> &str {
        match category {
            Category::TransactionInquiry => self.transaction_inquiry.as_str(),
            Category::CardServices => self.card_services.as_str(),
            Category::AccountAccess => self.account_access.as_str(),
            Category::AccountOpening => self.account_opening.as_str(),
            Category::BillingIssue => self.billing_issue.as_str(),
            Category::AccountStatement => self.account_statement.as_str(),
            Category::LoanInquiry => self.loan_inquiry.as_str(),
            Category::GeneralInformation => self.general_information.as_str(),
        }
    }

    /// Reject empty templates and unknown placeholders
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, template) in self.named() {
            if template.trim().is_empty() {
                return Err(ConfigError::InvalidTemplate {
                    name: name.to_string(),
                    reason: "template is empty".to_string(),
                });
            }
            for caps in PLACEHOLDER.captures_iter(template) {
                let placeholder = &caps[1];
                if !KNOWN_PLACEHOLDERS.iter().any(|known| *known == placeholder) {
                    return Err(ConfigError::InvalidTemplate {
                        name: name.to_string(),
                        reason: format!("unknown placeholder {{{}}}", placeholder),
                    });
                }
            }
        }
        Ok(())
    }

    /// Fill a template's placeholders from extracted details
    pub fn fill(template: &str, details: &Details) -> String {
        PLACEHOLDER
            .replace_all(template, |caps: &Captures| {
                let value = match &caps[1] {
                    "amount" => details
                        .amount
                        .as_deref()
                        .unwrap_or(placeholder_defaults::AMOUNT),
                    "date" => details.date.as_deref().unwrap_or(placeholder_defaults::DATE),
                    "card" => details.card.as_deref().unwrap_or(placeholder_defaults::CARD),
                    "last4" => details
                        .last4
                        .as_deref()
                        .unwrap_or(placeholder_defaults::LAST4),
                    "transaction_id" => details
                        .transaction_id
                        .as_deref()
                        .unwrap_or(placeholder_defaults::TRANSACTION_ID),
                    _ => return caps[0].to_string(),
                };
                value.to_string()
            })
            .into_owned()
    }

    fn named(&self) -> [(&'static str, &str); 8] {
        [
            ("transaction_inquiry", self.transaction_inquiry.as_str()),
            ("card_services", self.card_services.as_str()),
            ("account_access", self.account_access.as_str()),
            ("account_opening", self.account_opening.as_str()),
            ("billing_issue", self.billing_issue.as_str()),
            ("account_statement", self.account_statement.as_str()),
            ("loan_inquiry", self.loan_inquiry.as_str()),
            ("general_information", self.general_information.as_str()),
        ]
    }
}
