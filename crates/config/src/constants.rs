//! Centralized constants for the prompt chain
//!
//! Single source of truth for routing tables and fallback wording. Keep
//! tables here rather than deriving them from detection order.

/// Category routing
pub mod routing {
    use support_triage_core::Category;

    /// Tie-break table for the category selector.
    ///
    /// Deliberately differs from detection order: onboarding, security and
    /// disputes win over generic billing, statement and loan routing.
    pub const CATEGORY_PRIORITY: [Category; 8] = [
        Category::AccountOpening,
        Category::AccountAccess,
        Category::TransactionInquiry,
        Category::CardServices,
        Category::BillingIssue,
        Category::AccountStatement,
        Category::LoanInquiry,
        Category::GeneralInformation,
    ];

    /// Chosen when nothing in the priority table matches
    pub const FALLBACK_CATEGORY: Category = Category::GeneralInformation;
}

/// Values substituted for template placeholders with no extracted detail
pub mod placeholder_defaults {
    pub const AMOUNT: &str = "an amount";
    pub const DATE: &str = "this date";
    pub const CARD: &str = "your card";
    pub const LAST4: &str = "the last 4 digits";
    pub const TRANSACTION_ID: &str = "the transaction reference";
}

/// Card details
pub mod card {
    /// Stored when the card check passes but no token is captured
    pub const UNSPECIFIED: &str = "unspecified";
}

/// Configuration sources
pub mod sources {
    /// Base name of the optional config file in the working directory
    pub const DEFAULT_FILE_STEM: &str = "support-triage";

    /// Environment variable prefix (`SUPPORT_TRIAGE__LOGGING__LEVEL=debug`)
    pub const ENV_PREFIX: &str = "SUPPORT_TRIAGE";

    pub const ENV_SEPARATOR: &str = "__";

    /// Log filter used when neither RUST_LOG nor config set one
    pub const DEFAULT_LOG_LEVEL: &str = "warn";
}
