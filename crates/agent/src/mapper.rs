//! Category Mapping
//!
//! Regex checks over the lowercased query, one per category. Checks overlap
//! on purpose ("charge" maps to both billing and transaction inquiry).
//! IMPORTANT: Order matters, candidates keep first-match order.

use once_cell::sync::Lazy;
use regex::Regex;
use support_triage_core::Category;

static CATEGORY_PATTERNS: Lazy<Vec<(Regex, Category)>> = Lazy::new(build_category_patterns);

fn build_category_patterns() -> Vec<(Regex, Category)> {
    [
        (r"open|create|new account", Category::AccountOpening),
        (r"bill|charge|payment|overcharg", Category::BillingIssue),
        (
            r"login|sign in|forgot|password|can't access|cannot access",
            Category::AccountAccess,
        ),
        (r"dispute|unauthor|charge|\$|transaction", Category::TransactionInquiry),
        (r"card|credit card|debit card", Category::CardServices),
        (
            r"statement|download statement|transactions list|monthly statement",
            Category::AccountStatement,
        ),
        (r"loan|mortgage|interest rate|apply for loan", Category::LoanInquiry),
    ]
    .into_iter()
    .map(|(pattern, category)| {
        (
            Regex::new(pattern).expect("category pattern is valid"),
            category,
        )
    })
    .collect()
}

/// Candidate categories for a raw query; never empty
pub fn map_to_categories(query: &str) -> Vec<Category> {
    let q = query.to_lowercase();
    let mut candidates: Vec<Category> = Vec::new();

    for (pattern, category) in CATEGORY_PATTERNS.iter() {
        if pattern.is_match(&q) && !candidates.contains(category) {
            candidates.push(*category);
        }
    }

    if candidates.is_empty() {
        candidates.push(Category::GeneralInformation);
    }

    tracing::trace!(?candidates, "Mapped categories");
    candidates
}
