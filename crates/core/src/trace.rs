//! Pipeline trace
//!
//! The trace is the only artifact of a run: five `{ step, output }` records
//! in fixed order. Step names are exact literals relied on by hosts.

use serde::ser::{Serialize, SerializeStruct, Serializer};
use std::borrow::Cow;
use std::fmt;

use crate::{Category, Details, IntentReport};

/// Pipeline stage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    InterpretIntent,
    MapCategories,
    ChooseCategory,
    ExtractDetails,
    GenerateResponse,
}

impl Stage {
    /// Stages in execution order
    pub const ALL: [Stage; 5] = [
        Stage::InterpretIntent,
        Stage::MapCategories,
        Stage::ChooseCategory,
        Stage::ExtractDetails,
        Stage::GenerateResponse,
    ];

    /// Step name as it appears in the trace
    pub fn name(&self) -> &'static str {
        match self {
            Stage::InterpretIntent => "Interpret intent",
            Stage::MapCategories => "Map to possible categories",
            Stage::ChooseCategory => "Choose the most appropriate category",
            Stage::ExtractDetails => "Extract additional details",
            Stage::GenerateResponse => "Generate a short response",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Serialize for Stage {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

/// Stage-specific output value
#[derive(Debug, Clone, PartialEq)]
pub enum StageOutput<'a> {
    Text(Cow<'a, str>),
    Categories(&'a [Category]),
    Category(Category),
    Details(&'a Details),
}

impl Serialize for StageOutput<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            StageOutput::Text(text) => serializer.serialize_str(text),
            StageOutput::Categories(categories) => categories.serialize(serializer),
            StageOutput::Category(category) => category.serialize(serializer),
            StageOutput::Details(details) => details.serialize(serializer),
        }
    }
}

/// One `{ step, output }` entry of the trace
#[derive(Debug, Clone, PartialEq)]
pub struct StageRecord<'a> {
    pub step: Stage,
    pub output: StageOutput<'a>,
}

impl Serialize for StageRecord<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut record = serializer.serialize_struct("StageRecord", 2)?;
        record.serialize_field("step", &self.step)?;
        record.serialize_field("output", &self.output)?;
        record.end()
    }
}

/// Outputs of all five stages for one query
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineTrace {
    pub intent: IntentReport,
    /// Candidate categories, unique, in first-match order
    pub candidates: Vec<Category>,
    pub category: Category,
    pub details: Details,
    pub response: String,
}

impl PipelineTrace {
    /// The trace as ordered stage records
    pub fn records(&self) -> Vec<StageRecord<'_>> {
        Stage::ALL
            .into_iter()
            .map(|step| StageRecord {
                step,
                output: self.output(step),
            })
            .collect()
    }

    /// Output of a single stage
    pub fn output(&self, stage: Stage) -> StageOutput<'_> {
        match stage {
            Stage::InterpretIntent => StageOutput::Text(Cow::Owned(self.intent.to_string())),
            Stage::MapCategories => StageOutput::Categories(&self.candidates),
            Stage::ChooseCategory => StageOutput::Category(self.category),
            Stage::ExtractDetails => StageOutput::Details(&self.details),
            Stage::GenerateResponse => StageOutput::Text(Cow::Borrowed(&self.response)),
        }
    }

    /// Intent stage output as it appears in the trace
    pub fn intent_text(&self) -> String {
        self.intent.to_string()
    }
}

impl Serialize for PipelineTrace {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.records())
    }
}
