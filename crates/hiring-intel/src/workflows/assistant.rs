//! Keyword-routed hiring assistant.
//!
//! Questions are matched against a fixed route table (first hit wins) and
//! answered with a canned response.

use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssistantIntent {
    TopCandidates,
    DropOff,
    Status,
    Unrecognized,
}

const ROUTES: [(&str, AssistantIntent); 3] = [
    ("top", AssistantIntent::TopCandidates),
    ("drop", AssistantIntent::DropOff),
    ("status", AssistantIntent::Status),
];

impl AssistantIntent {
    pub fn classify(query: &str) -> Self {
        let query = query.to_lowercase();
        ROUTES
            .iter()
            .find(|(keyword, _)| query.contains(keyword))
            .map(|(_, intent)| *intent)
            .unwrap_or(Self::Unrecognized)
    }

    pub const fn answer(self) -> &'static str {
        match self {
            Self::TopCandidates => "Top candidates are ranked based on AI skill-match scores.",
            Self::DropOff => "Candidate shows a high probability of drop-off.",
            Self::Status => "Candidate is currently in interview evaluation stage.",
            Self::Unrecognized => "Please ask a hiring-related question.",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssistantReply {
    pub query: String,
    pub intent: AssistantIntent,
    pub answer: String,
}

/// Answer a recruiter question. Blank questions get no reply.
pub fn reply(query: &str) -> Option<AssistantReply> {
    let query = query.trim();
    if query.is_empty() {
        return None;
    }

    let intent = AssistantIntent::classify(query);
    debug!(?intent, "routed assistant question");

    Some(AssistantReply {
        query: query.to_string(),
        intent,
        answer: intent.answer().to_string(),
    })
}
