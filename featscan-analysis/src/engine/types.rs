//! Occurrence records, the per-call result map, and the success/error envelope.

use std::collections::BTreeMap;

use featscan_core::errors::ParseError;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::parsers::types::Span;

/// One recorded match of a feature.
///
/// Serializes as `{ "type": <feature id>, "loc": {..}, "range": [s, e], ..details }`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Occurrence {
    /// Id of the detector that produced this record.
    #[serde(rename = "type")]
    pub feature: String,
    #[serde(flatten)]
    pub span: Span,
    /// Detector-specific fields.
    #[serde(flatten)]
    pub details: Map<String, Value>,
}

impl Occurrence {
    pub fn start_offset(&self) -> usize {
        self.span.start_offset()
    }

    pub fn detail(&self, key: &str) -> Option<&Value> {
        self.details.get(key)
    }
}

/// Occurrences found in one source, keyed by feature id.
///
/// Each list is in document order. Features with no occurrences are absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct DetectionResult {
    features: BTreeMap<String, Vec<Occurrence>>,
}

impl DetectionResult {
    pub(crate) fn from_map(features: BTreeMap<String, Vec<Occurrence>>) -> Self {
        Self { features }
    }

    /// Occurrences of `id`, empty when the feature was not found.
    pub fn get(&self, id: &str) -> &[Occurrence] {
        self.features.get(id).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn count(&self, id: &str) -> usize {
        self.get(id).len()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.features.contains_key(id)
    }

    /// Number of distinct features found.
    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    pub fn total_occurrences(&self) -> usize {
        self.features.values().map(Vec::len).sum()
    }

    pub fn feature_ids(&self) -> impl Iterator<Item = &str> {
        self.features.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Occurrence])> {
        self.features.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    pub fn into_map(self) -> BTreeMap<String, Vec<Occurrence>> {
        self.features
    }
}

/// Result envelope of one detection call.
///
/// Serializes as `{ "type": "success", "features": {..} }` or
/// `{ "type": "error", "errorMsg": {..} }`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Outcome {
    Success {
        features: DetectionResult,
    },
    Error {
        #[serde(rename = "errorMsg")]
        error_msg: ParseError,
    },
}

impl Outcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error { .. })
    }

    pub fn features(&self) -> Option<&DetectionResult> {
        match self {
            Self::Success { features } => Some(features),
            Self::Error { .. } => None,
        }
    }

    pub fn error(&self) -> Option<&ParseError> {
        match self {
            Self::Success { .. } => None,
            Self::Error { error_msg } => Some(error_msg),
        }
    }

    pub fn into_result(self) -> Result<DetectionResult, ParseError> {
        match self {
            Self::Success { features } => Ok(features),
            Self::Error { error_msg } => Err(error_msg),
        }
    }
}

impl From<Result<DetectionResult, ParseError>> for Outcome {
    fn from(result: Result<DetectionResult, ParseError>) -> Self {
        match result {
            Ok(features) => Self::Success { features },
            Err(error_msg) => Self::Error { error_msg },
        }
    }
}
