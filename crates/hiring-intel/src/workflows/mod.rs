pub mod assistant;
pub mod dashboard;
pub mod engagement;
pub mod interview;
pub mod talent;
mod validation;
pub mod views;

pub use assistant::{reply, AssistantIntent, AssistantReply};
pub use dashboard::{ExecutiveSnapshot, HeadlineMetric};
pub use engagement::{assess_engagement, interactions_from, DropOffRisk, EngagementOutcome};
pub use interview::{evaluate_feedback, InterviewDecision, InterviewOutcome};
pub use talent::{FitTier, MatchBreakdown, SimilarityResult, SimilarityScorer};
pub use validation::{require_text, ValidationError};
pub use views::Treatment;
