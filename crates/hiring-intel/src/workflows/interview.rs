//! Interview decision support.
//!
//! Feedback is screened for positive signal words; any hit recommends a hire.
//! This is a keyword rule, not a language model.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::validation::{require_text, ValidationError};

/// Signal words checked in order; the first hit is reported.
const HIRE_SIGNALS: [&str; 2] = ["good", "strong"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InterviewDecision {
    Hire,
    Reject,
}

impl InterviewDecision {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Hire => "HIRE",
            Self::Reject => "REJECT",
        }
    }

    pub fn summary(self) -> String {
        format!("Recommended Decision: {}", self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterviewOutcome {
    pub decision: InterviewDecision,
    pub matched_signal: Option<String>,
}

/// Recommend a decision for free-text interview feedback.
pub fn evaluate_feedback(feedback: &str) -> Result<InterviewOutcome, ValidationError> {
    let feedback = require_text("feedback", feedback)?.to_lowercase();

    let matched_signal = HIRE_SIGNALS
        .iter()
        .find(|signal| feedback.contains(*signal))
        .map(|signal| signal.to_string());

    let decision = if matched_signal.is_some() {
        InterviewDecision::Hire
    } else {
        InterviewDecision::Reject
    };

    debug!(
        decision = decision.label(),
        signal = matched_signal.as_deref().unwrap_or("none"),
        "evaluated interview feedback"
    );

    Ok(InterviewOutcome {
        decision,
        matched_signal,
    })
}
