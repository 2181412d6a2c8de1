//! Scenarios for the interview, engagement, assistant and dashboard workflows
//! as a presentation layer consumes them.

use hiring_intel::workflows::views::{AssistantReplyView, EngagementView, InterviewDecisionView};
use hiring_intel::workflows::{
    assess_engagement, evaluate_feedback, reply, AssistantIntent, DropOffRisk, ExecutiveSnapshot,
    InterviewDecision, Treatment, ValidationError,
};

#[test]
fn interview_feedback_drives_hire_and_reject_views() {
    let hire = InterviewDecisionView::from(
        evaluate_feedback("Good problem decomposition and testing habits").expect("valid"),
    );
    assert_eq!(hire.decision, InterviewDecision::Hire);
    assert_eq!(hire.decision_label, "Recommended Decision: HIRE");
    assert_eq!(hire.treatment, Treatment::Positive);

    let reject =
        InterviewDecisionView::from(evaluate_feedback("Could not explain trade-offs").expect("valid"));
    assert_eq!(reject.decision, InterviewDecision::Reject);
    assert_eq!(reject.treatment, Treatment::Negative);
}

#[test]
fn interview_requires_feedback_text() {
    assert_eq!(
        evaluate_feedback(""),
        Err(ValidationError::EmptyField { field: "feedback" })
    );
}

#[test]
fn engagement_slider_range_is_enforced() {
    let quiet = EngagementView::from(assess_engagement(1).expect("in range"));
    assert_eq!(quiet.risk, DropOffRisk::High);
    assert_eq!(quiet.risk_label, "High Drop-Off Risk Detected");
    assert_eq!(quiet.recommended_action, Some("Immediate recruiter follow-up"));

    let engaged = EngagementView::from(assess_engagement(2).expect("in range"));
    assert_eq!(engaged.risk, DropOffRisk::Healthy);
    assert_eq!(engaged.treatment, Treatment::Positive);

    assert!(assess_engagement(u8::MAX).is_err());
}

#[test]
fn assistant_answers_each_route() {
    let cases = [
        ("show me the top profiles", AssistantIntent::TopCandidates, Treatment::Info),
        ("drop-off alerts", AssistantIntent::DropOff, Treatment::Warning),
        ("Status of candidate 42", AssistantIntent::Status, Treatment::Positive),
        ("hello", AssistantIntent::Unrecognized, Treatment::Neutral),
    ];

    for (query, intent, treatment) in cases {
        let view = AssistantReplyView::from(reply(query).expect("non-blank query"));
        assert_eq!(view.intent, intent, "{query}");
        assert_eq!(view.treatment, treatment, "{query}");
        assert_eq!(view.answer, intent.answer());
    }
}

#[test]
fn dashboard_snapshot_serializes_for_clients() {
    let snapshot = ExecutiveSnapshot::standard();
    let json = serde_json::to_value(&snapshot).expect("serializes");

    assert_eq!(json["metrics"][0]["label"], "Open Positions");
    assert_eq!(json["metrics"][2]["value"], "82%");
    assert_eq!(
        json["lifecycle_coverage"][3],
        "Conversational Hiring Assistant"
    );
}
