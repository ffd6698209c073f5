//! Intent Interpretation
//!
//! Keyword checks over the lowercased query. Labels are diagnostic only and
//! never feed category routing.

use support_triage_core::{IntentLabel, IntentReport};

const OPEN_ACCOUNT_OBJECTS: &[&str] = &["account", "new account", "create"];
const BILLING_KEYWORDS: &[&str] = &["bill", "charge", "payment", "overcharged", "billing"];
const ACCESS_KEYWORDS: &[&str] = &["login", "sign in", "can't access", "forgot", "password"];
const CARD_KEYWORDS: &[&str] = &["card", "credit card", "debit"];
const STATEMENT_KEYWORDS: &[&str] = &["statement", "transactions list", "download statement"];
const LOAN_KEYWORDS: &[&str] = &["loan", "mortgage", "borrow"];

fn contains_any(text: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|kw| text.contains(kw))
}

/// Whether `label`'s keyword check passes for an already lowercased query
fn label_matches(label: IntentLabel, q: &str) -> bool {
    match label {
        IntentLabel::OpenAccount => q.contains("open") && contains_any(q, OPEN_ACCOUNT_OBJECTS),
        IntentLabel::BillingConcern => contains_any(q, BILLING_KEYWORDS),
        IntentLabel::AccountAccess => contains_any(q, ACCESS_KEYWORDS),
        IntentLabel::InvestigateTransaction => {
            q.contains("dispute")
                || (q.contains('$') && q.contains("charge"))
                || q.contains("unauthor")
        }
        IntentLabel::CardServiceRequest => contains_any(q, CARD_KEYWORDS),
        IntentLabel::AccountStatement => contains_any(q, STATEMENT_KEYWORDS),
        IntentLabel::LoanInquiry => contains_any(q, LOAN_KEYWORDS),
        // Fallback only, never detected directly
        IntentLabel::GeneralInformation => false,
    }
}

/// Interpret the intents of a raw query
pub fn interpret_intent(query: &str) -> IntentReport {
    if query.trim().is_empty() {
        return IntentReport::NoQuery;
    }

    let q = query.to_lowercase();
    let mut labels: Vec<IntentLabel> = IntentLabel::DETECTION_ORDER
        .into_iter()
        .filter(|label| label_matches(*label, &q))
        .collect();

    if labels.is_empty() {
        labels.push(IntentLabel::GeneralInformation);
    }

    tracing::trace!(count = labels.len(), "Interpreted intents");
    IntentReport::Labels(labels)
}
