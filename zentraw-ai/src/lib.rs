// This defines the JSON contract for styling suggestions coming back from
// the LLM. Parse and validate everything here, before it can touch a
// document. The model only ever proposes bounded style deltas; it has no
// way to add, remove, or reorder layers.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;
use zentraw_document::{DocumentError, DocumentV1, TextStyleDelta};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SuggestionV1 {
    /// The layer the suggestion applies to.
    pub target_layer: Uuid,
    pub adjustments: TextStyleDelta,
    pub confidence: Option<f32>,
    pub notes: Option<String>,
}

impl SuggestionV1 {
    /// Apply the suggested adjustments to a document. Clamping and the
    /// locked/non-text checks happen in the document model.
    pub fn apply_to(&self, document: &mut DocumentV1) -> Result<(), DocumentError> {
        document.apply_text_delta(self.target_layer, &self.adjustments)
    }
}

#[derive(Debug, Error)]
pub enum SuggestionError {
    #[error("malformed suggestion json: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("confidence out of range [0.0, 1.0]: {0}")]
    ConfidenceOutOfRange(f32),
}

/// Parse and validate one suggestion from raw model output.
pub fn parse_suggestion(json: &str) -> Result<SuggestionV1, SuggestionError> {
    let suggestion: SuggestionV1 = serde_json::from_str(json)?;

    if let Some(confidence) = suggestion.confidence {
        if !(0.0..=1.0).contains(&confidence) {
            return Err(SuggestionError::ConfidenceOutOfRange(confidence));
        }
    }

    Ok(suggestion)
}
