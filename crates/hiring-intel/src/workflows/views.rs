//! Serializable views handed to presentation layers (HTTP, CLI).
//!
//! Domain results stay unstyled; each view pairs a result with the
//! [`Treatment`] a client should render it with.

use serde::Serialize;

use super::assistant::{AssistantIntent, AssistantReply};
use super::engagement::{DropOffRisk, EngagementOutcome};
use super::interview::{InterviewDecision, InterviewOutcome};
use super::talent::{FitTier, MatchBreakdown, SimilarityResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Treatment {
    Positive,
    Warning,
    Negative,
    Info,
    Neutral,
}

impl Treatment {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Positive => "success",
            Self::Warning => "warning",
            Self::Negative => "error",
            Self::Info => "info",
            Self::Neutral => "plain",
        }
    }
}

impl From<FitTier> for Treatment {
    fn from(tier: FitTier) -> Self {
        match tier {
            FitTier::HighFit => Self::Positive,
            FitTier::ModerateFit => Self::Warning,
            FitTier::LowFit => Self::Negative,
        }
    }
}

impl From<InterviewDecision> for Treatment {
    fn from(decision: InterviewDecision) -> Self {
        match decision {
            InterviewDecision::Hire => Self::Positive,
            InterviewDecision::Reject => Self::Negative,
        }
    }
}

impl From<DropOffRisk> for Treatment {
    fn from(risk: DropOffRisk) -> Self {
        match risk {
            DropOffRisk::High => Self::Negative,
            DropOffRisk::Healthy => Self::Positive,
        }
    }
}

impl From<AssistantIntent> for Treatment {
    fn from(intent: AssistantIntent) -> Self {
        match intent {
            AssistantIntent::TopCandidates => Self::Info,
            AssistantIntent::DropOff => Self::Warning,
            AssistantIntent::Status => Self::Positive,
            AssistantIntent::Unrecognized => Self::Neutral,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct MatchView {
    pub score: f64,
    pub score_label: String,
    pub tier: FitTier,
    pub tier_label: &'static str,
    pub treatment: Treatment,
    pub shared_terms: Vec<String>,
    pub missing_terms: Vec<String>,
}

impl MatchView {
    pub fn new(result: SimilarityResult, breakdown: MatchBreakdown) -> Self {
        Self {
            score: result.score,
            score_label: format!("{:.2}%", result.score),
            tier: result.tier,
            tier_label: result.tier.label(),
            treatment: result.tier.into(),
            shared_terms: breakdown.shared_terms,
            missing_terms: breakdown.missing_terms,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct InterviewDecisionView {
    pub decision: InterviewDecision,
    pub decision_label: String,
    pub matched_signal: Option<String>,
    pub treatment: Treatment,
}

impl From<InterviewOutcome> for InterviewDecisionView {
    fn from(outcome: InterviewOutcome) -> Self {
        Self {
            decision: outcome.decision,
            decision_label: outcome.decision.summary(),
            matched_signal: outcome.matched_signal,
            treatment: outcome.decision.into(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct EngagementView {
    pub interactions: u8,
    pub risk: DropOffRisk,
    pub risk_label: &'static str,
    pub recommended_action: Option<&'static str>,
    pub treatment: Treatment,
}

impl From<EngagementOutcome> for EngagementView {
    fn from(outcome: EngagementOutcome) -> Self {
        Self {
            interactions: outcome.interactions,
            risk: outcome.risk,
            risk_label: outcome.risk.label(),
            recommended_action: outcome.risk.recommended_action(),
            treatment: outcome.risk.into(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct AssistantReplyView {
    pub query: String,
    pub intent: AssistantIntent,
    pub answer: String,
    pub treatment: Treatment,
}

impl From<AssistantReply> for AssistantReplyView {
    fn from(reply: AssistantReply) -> Self {
        Self {
            treatment: reply.intent.into(),
            query: reply.query,
            intent: reply.intent,
            answer: reply.answer,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workflows::talent::SimilarityScorer;

    #[test]
    fn tiers_map_to_three_visual_treatments() {
        assert_eq!(Treatment::from(FitTier::HighFit), Treatment::Positive);
        assert_eq!(Treatment::from(FitTier::ModerateFit), Treatment::Warning);
        assert_eq!(Treatment::from(FitTier::LowFit), Treatment::Negative);
    }

    #[test]
    fn match_view_formats_score_as_percentage() {
        let scorer = SimilarityScorer::new();
        let jd = "Rust engineer";
        let view = MatchView::new(scorer.score(jd, jd), scorer.explain(jd, jd));

        assert_eq!(view.score_label, "100.00%");
        assert_eq!(view.tier_label, "High Fit Candidate");
        assert_eq!(view.treatment, Treatment::Positive);
        assert!(view.missing_terms.is_empty());
    }

    #[test]
    fn engagement_view_serializes_snake_case() {
        let view = EngagementView::from(EngagementOutcome {
            interactions: 0,
            risk: DropOffRisk::High,
        });
        let json = serde_json::to_value(&view).expect("serializes");
        assert_eq!(json["risk"], "high");
        assert_eq!(json["treatment"], "negative");
        assert_eq!(json["recommended_action"], "Immediate recruiter follow-up");
    }
}
