use serde::{Serialize, Serializer};
use std::fmt;

/// Why a prompt was rejected. Serializes as its short tag, e.g. `"too long"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    Empty,
    TooShort { min: usize },
    TooLong { max: usize },
    Inappropriate,
}

impl RejectReason {
    /// Short machine-friendly tag.
    pub fn as_str(&self) -> &'static str {
        match self {
            RejectReason::Empty => "empty",
            RejectReason::TooShort { .. } => "too short",
            RejectReason::TooLong { .. } => "too long",
            RejectReason::Inappropriate => "inappropriate content",
        }
    }

    /// Message suitable for showing to the user.
    pub fn describe(&self) -> String {
        match self {
            RejectReason::Empty => "Prompt cannot be empty".to_string(),
            RejectReason::TooShort { min } => format!(
                "Prompt is too short (min {} characters). Please provide a more detailed description.",
                min
            ),
            RejectReason::TooLong { max } => {
                format!("Prompt is too long (max {} characters)", max)
            }
            RejectReason::Inappropriate => {
                "Prompt contains inappropriate content. Please provide a family-friendly description."
                    .to_string()
            }
        }
    }
}

impl fmt::Display for RejectReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for RejectReason {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationOutcome {
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<RejectReason>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub suggestions: Vec<String>,
}

impl ValidationOutcome {
    pub fn accepted(suggestions: Vec<String>) -> Self {
        Self {
            valid: true,
            reason: None,
            suggestions,
        }
    }

    pub fn rejected(reason: RejectReason) -> Self {
        Self {
            valid: false,
            reason: Some(reason),
            suggestions: Vec::new(),
        }
    }
}
