//! Prompt chain
//!
//! Runs the five stages in order over one query:
//! interpret intent → map categories → choose category → extract details →
//! generate response. Stages after the first still run for empty queries,
//! producing the General Information fallbacks.

use support_triage_config::{ResponseTemplates, Settings};
use support_triage_core::PipelineTrace;
use support_triage_text_processing::DetailExtractor;

use crate::interpreter::interpret_intent;
use crate::mapper::map_to_categories;
use crate::response::ResponseGenerator;
use crate::selector::choose_category;

/// Stateless support triage pipeline
#[derive(Debug, Clone, Default)]
pub struct TriagePipeline {
    extractor: DetailExtractor,
    responder: ResponseGenerator,
}

impl TriagePipeline {
    /// Pipeline with the built-in reply templates
    pub fn new() -> Self {
        Self::default()
    }

    /// Pipeline with custom reply templates
    pub fn with_templates(templates: ResponseTemplates) -> Self {
        Self {
            extractor: DetailExtractor::new(),
            responder: ResponseGenerator::new(templates),
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::with_templates(settings.responses.clone())
    }

    /// Run all five stages
    pub fn run(&self, query: &str) -> PipelineTrace {
        let span = tracing::debug_span!("prompt_chain", query_len = query.len());
        let _guard = span.enter();

        let intent = interpret_intent(query);
        if intent.is_no_query() {
            tracing::debug!("Empty query, remaining stages use fallbacks");
        }
        let candidates = map_to_categories(query);
        let category = choose_category(&candidates);
        let details = self.extractor.extract(query, category);
        let response = self.responder.generate(category, &details);

        tracing::debug!(
            intent = %intent,
            ?candidates,
            %category,
            missing = details.missing.len(),
            "Prompt chain completed"
        );

        PipelineTrace {
            intent,
            candidates,
            category,
            details,
            response,
        }
    }
}

/// Run the chain with default templates
pub fn run_prompt_chain(query: &str) -> PipelineTrace {
    TriagePipeline::new().run(query)
}
