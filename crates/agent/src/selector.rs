//! Category Selection

use support_triage_config::constants::routing::{CATEGORY_PRIORITY, FALLBACK_CATEGORY};
use support_triage_core::Category;

/// Pick the highest-priority category among the candidates
pub fn choose_category(candidates: &[Category]) -> Category {
    CATEGORY_PRIORITY
        .into_iter()
        .find(|category| candidates.contains(category))
        .unwrap_or(FALLBACK_CATEGORY)
}
