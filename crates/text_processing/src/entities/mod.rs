//! Support Query Entity Extraction
//!
//! Extracts transaction-related entities from raw (not lowercased) text:
//! - Dollar amounts (`$45`, `$ 45.00`)
//! - Dates (`3/14/2024`, `3-14-24`, `3 March`)
//! - Card types (Visa, Mastercard, Amex, credit/debit card)
//! - Transaction ids (`txid:AB12-34`, `TXID# 9f-77`)
//! - Account last 4 digits (first standalone 4-digit run)
//!
//! Every extraction is independent and keeps only the first match.
//!
//! # Example
//!
//! ```ignore
//! use support_triage_text_processing::DetailExtractor;
//!
//! let details = DetailExtractor::new().extract("Refund $20 on 4/2/24", Category::BillingIssue);
//! assert_eq!(details.amount.as_deref(), Some("$20"));
//! assert_eq!(details.date.as_deref(), Some("4/2/24"));
//! ```

use once_cell::sync::Lazy;
use regex::Regex;
use support_triage_config::constants::card;
use support_triage_core::{Category, Details, MissingField};

// Compiled regex patterns
static AMOUNT_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\$\s?([0-9]+(?:\.[0-9]{1,2})?)").expect("amount pattern"));

// Word boundaries and case folding are ASCII-only (`(?-u:...)`), so an
// accented letter next to a digit still counts as a boundary and `ſ`/`K`
// never fold into `s`/`k`.
static NUMERIC_DATE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    // Month first, `/` or `-` separators, 2 or 4 digit year
    Regex::new(
        r"(?-u:\b)(0?[1-9]|1[0-2])[/-](0?[1-9]|[12][0-9]|3[01])[/-](?:[0-9]{2}|[0-9]{4})(?-u:\b)",
    )
    .expect("numeric date pattern")
});

static MONTH_NAME_DATE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?-u:\b)(0?[1-9]|1[0-2])\s+(?i-u:jan|feb|mar|apr|may|jun|jul|aug|sep|oct|nov|dec)(?-u:[a-zA-Z])*(?-u:\b)",
    )
    .expect("month name date pattern")
});

static CARD_MENTION_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i-u)credit card|visa|mastercard|amex|american express|debit card")
        .expect("card mention pattern")
});

static CARD_TOKEN_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i-u)(visa|mastercard|amex|american express|credit card|debit card)")
        .expect("card token pattern")
});

static TRANSACTION_ID_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i-u:txid)[:#]?\s*((?-u:[A-Za-z0-9-])+)").expect("transaction id pattern")
});

// Years ("2024") match too; callers cannot tell them apart from card digits.
static LAST4_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?-u:\b)[0-9]{4}(?-u:\b)").expect("last4 pattern"));

/// Detail extractor for support queries
#[derive(Debug, Clone, Copy, Default)]
pub struct DetailExtractor;

impl DetailExtractor {
    pub fn new() -> Self {
        Self
    }

    /// Extract all details and the fields still needed for `category`
    pub fn extract(&self, text: &str, category: Category) -> Details {
        let mut details = Details {
            amount: self.extract_amount(text),
            date: self.extract_date(text),
            card: self.extract_card(text),
            transaction_id: self.extract_transaction_id(text),
            last4: self.extract_last4(text),
            extracted_text: text.to_string(),
            missing: Vec::new(),
        };
        details.missing = missing_fields(category, &details);

        tracing::debug!(
            %category,
            amount = details.amount.is_some(),
            date = details.date.is_some(),
            card = details.card.is_some(),
            transaction_id = details.transaction_id.is_some(),
            last4 = details.last4.is_some(),
            missing = details.missing.len(),
            "Extracted details"
        );

        details
    }

    /// Full amount literal including the `$`
    pub fn extract_amount(&self, text: &str) -> Option<String> {
        AMOUNT_PATTERN.find(text).map(|m| m.as_str().to_string())
    }

    /// Numeric date first, day + month name as fallback
    pub fn extract_date(&self, text: &str) -> Option<String> {
        NUMERIC_DATE_PATTERN
            .find(text)
            .or_else(|| MONTH_NAME_DATE_PATTERN.find(text))
            .map(|m| m.as_str().to_string())
    }

    /// Card token as written, or "unspecified" when only the mention check passes
    pub fn extract_card(&self, text: &str) -> Option<String> {
        if !CARD_MENTION_PATTERN.is_match(text) {
            return None;
        }

        let token = CARD_TOKEN_PATTERN
            .find(text)
            .map(|m| m.as_str().to_string())
            .unwrap_or_else(|| card::UNSPECIFIED.to_string());
        tracing::trace!(card = %token, "Card mention found");
        Some(token)
    }

    /// Token after a `txid` marker, without the marker
    pub fn extract_transaction_id(&self, text: &str) -> Option<String> {
        TRANSACTION_ID_PATTERN
            .captures(text)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().to_string())
    }

    pub fn extract_last4(&self, text: &str) -> Option<String> {
        LAST4_PATTERN.find(text).map(|m| m.as_str().to_string())
    }
}

/// Fields to ask for next, in fixed order.
///
/// Only `card` suppresses the card prompt; a `last4` value does not.
pub fn missing_fields(category: Category, details: &Details) -> Vec<MissingField> {
    let mut needed = Vec::new();

    if category.is_transactional() {
        if details.amount.is_none() {
            needed.push(MissingField::TransactionAmount);
        }
        if details.date.is_none() {
            needed.push(MissingField::TransactionDate);
        }
        if details.card.is_none() {
            needed.push(MissingField::CardOrLast4);
        }
    }

    match category {
        Category::AccountAccess => needed.push(MissingField::LoginDetails),
        Category::AccountOpening => needed.push(MissingField::IdentityDocuments),
        _ => {}
    }

    needed
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extractor() -> DetailExtractor {
        DetailExtractor::new()
    }

    #[test]
    fn test_amount_extraction() {
        let e = extractor();
        assert_eq!(e.extract_amount("charged $45.00 twice"), Some("$45.00".to_string()));
        assert_eq!(e.extract_amount("about $ 12 ago"), Some("$ 12".to_string()));
        assert_eq!(e.extract_amount("fee of $7.5"), Some("$7.5".to_string()));
        // Only two decimals are kept
        assert_eq!(e.extract_amount("$3.999"), Some("$3.99".to_string()));
        assert_eq!(e.extract_amount("first $5 then $10"), Some("$5".to_string()));
        assert_eq!(e.extract_amount("45 dollars"), None);
    }

    #[test]
    fn test_numeric_date_extraction() {
        let e = extractor();
        assert_eq!(e.extract_date("on 3/14/2024 at noon"), Some("3/14/2024".to_string()));
        assert_eq!(e.extract_date("on 03-05-24"), Some("03-05-24".to_string()));
        assert_eq!(e.extract_date("on 12/31/99."), Some("12/31/99".to_string()));
        // Month out of range
        assert_eq!(e.extract_date("on 13/01/2024"), None);
    }

    #[test]
    fn test_month_name_date_fallback() {
        let e = extractor();
        assert_eq!(e.extract_date("back on 3 March"), Some("3 March".to_string()));
        assert_eq!(e.extract_date("since 12 DEC"), Some("12 DEC".to_string()));
        assert_eq!(e.extract_date("1 jan and 2 feb"), Some("1 jan".to_string()));
        // Numeric form wins even when it appears later
        assert_eq!(
            e.extract_date("on 2 feb, posted 2/3/2024"),
            Some("2/3/2024".to_string())
        );
    }

    #[test]
    fn test_card_extraction() {
        let e = extractor();
        assert_eq!(e.extract_card("my visa card"), Some("visa".to_string()));
        assert_eq!(e.extract_card("My Mastercard"), Some("Mastercard".to_string()));
        assert_eq!(
            e.extract_card("an American Express charge"),
            Some("American Express".to_string())
        );
        assert_eq!(e.extract_card("new debit card"), Some("debit card".to_string()));
        // Plain "card" is not in the vocabulary
        assert_eq!(e.extract_card("lost my card"), None);
    }

    #[test]
    fn test_transaction_id_extraction() {
        let e = extractor();
        assert_eq!(
            e.extract_transaction_id("see txid:AB12-34 please"),
            Some("AB12-34".to_string())
        );
        assert_eq!(
            e.extract_transaction_id("TXID# 9f-77"),
            Some("9f-77".to_string())
        );
        assert_eq!(e.extract_transaction_id("txid 555"), Some("555".to_string()));
        assert_eq!(e.extract_transaction_id("transaction 555"), None);
        // Whitespace is only allowed after the marker
        assert_eq!(e.extract_transaction_id("txid # 555"), None);
    }

    #[test]
    fn test_last4_takes_first_standalone_run() {
        let e = extractor();
        assert_eq!(e.extract_last4("card ending 4321"), Some("4321".to_string()));
        assert_eq!(e.extract_last4("account 123456"), None);
        // Years are not distinguished from card digits
        assert_eq!(e.extract_last4("on 3/14/2024, card 9876"), Some("2024".to_string()));
    }

    #[test]
    fn test_boundaries_ignore_non_ascii_neighbours() {
        let e = extractor();
        assert_eq!(e.extract_last4("ref é1234"), Some("1234".to_string()));
        assert_eq!(e.extract_last4("card 4321ü"), Some("4321".to_string()));
        assert_eq!(e.extract_date("paid 5 marché"), Some("5 march".to_string()));
        assert_eq!(e.extract_date("débit 3/14/2024é"), Some("3/14/2024".to_string()));
    }

    #[test]
    fn test_case_folding_is_ascii_only() {
        let e = extractor();
        // U+017F LATIN SMALL LETTER LONG S
        assert_eq!(e.extract_date("on 5 mar\u{17F}"), Some("5 mar".to_string()));
        assert_eq!(e.extract_card("my vi\u{17F}a"), None);
        // U+212A KELVIN SIGN
        assert_eq!(
            e.extract_transaction_id("txid:AB\u{212A}9"),
            Some("AB".to_string())
        );
        assert_eq!(e.extract_card("My VISA"), Some("VISA".to_string()));
    }

    #[test]
    fn test_extracted_text_is_verbatim() {
        let text = "  Weird   SPACING $1 ";
        let details = extractor().extract(text, Category::GeneralInformation);
        assert_eq!(details.extracted_text, text);
    }

    #[test]
    fn test_missing_for_transactional_categories() {
        let e = extractor();
        for category in [
            Category::TransactionInquiry,
            Category::CardServices,
            Category::BillingIssue,
        ] {
            let details = e.extract("something is wrong", category);
            assert_eq!(
                details.missing,
                vec![
                    MissingField::TransactionAmount,
                    MissingField::TransactionDate,
                    MissingField::CardOrLast4,
                ]
            );
        }
    }

    #[test]
    fn test_last4_does_not_suppress_card_prompt() {
        let details = extractor().extract(
            "charge of $20 on 1/2/2024 on card ending 4321",
            Category::TransactionInquiry,
        );
        assert!(details.last4.is_some());
        assert_eq!(details.missing, vec![MissingField::CardOrLast4]);
    }

    #[test]
    fn test_missing_for_access_and_opening() {
        let e = extractor();
        assert_eq!(
            e.extract("forgot password $5", Category::AccountAccess).missing,
            vec![MissingField::LoginDetails]
        );
        assert_eq!(
            e.extract("open account", Category::AccountOpening).missing,
            vec![MissingField::IdentityDocuments]
        );
    }

    #[test]
    fn test_no_missing_for_other_categories() {
        let e = extractor();
        for category in [
            Category::AccountStatement,
            Category::LoanInquiry,
            Category::GeneralInformation,
        ] {
            let details = e.extract("anything", category);
            assert!(details.missing.is_empty());
            let json = serde_json::to_value(&details).unwrap();
            assert!(json.get("missing").is_none());
        }
    }

    #[test]
    fn test_complete_transaction_has_no_missing() {
        let details = extractor().extract(
            "I was overcharged $45.00 on 3/14/2024 on my visa card",
            Category::CardServices,
        );
        assert_eq!(details.amount.as_deref(), Some("$45.00"));
        assert_eq!(details.date.as_deref(), Some("3/14/2024"));
        assert_eq!(details.card.as_deref(), Some("visa"));
        assert_eq!(details.last4.as_deref(), Some("2024"));
        assert!(details.missing.is_empty());
    }
}
