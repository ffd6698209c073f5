//! Response Generation
//!
//! Pure template lookup: one reply per category, placeholders filled from
//! the extracted details.

use support_triage_config::ResponseTemplates;
use support_triage_core::{Category, Details};

/// Generates short replies from configured templates
#[derive(Debug, Clone, Default)]
pub struct ResponseGenerator {
    templates: ResponseTemplates,
}

impl ResponseGenerator {
    pub fn new(templates: ResponseTemplates) -> Self {
        Self { templates }
    }

    /// Reply for the chosen category
    pub fn generate(&self, category: Category, details: &Details) -> String {
        ResponseTemplates::fill(self.templates.template(category), details)
    }
}

/// Reply using the default templates
pub fn generate_short_response(category: Category, details: &Details) -> String {
    ResponseGenerator::default().generate(category, details)
}
