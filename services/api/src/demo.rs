use crate::infra::read_text_arg;
use clap::Args;
use hiring_intel::error::AppError;
use hiring_intel::workflows::engagement::MAX_INTERACTIONS;
use hiring_intel::workflows::views::{
    AssistantReplyView, EngagementView, InterviewDecisionView, MatchView,
};
use hiring_intel::workflows::{
    assess_engagement, evaluate_feedback, reply, require_text, ExecutiveSnapshot,
    SimilarityScorer,
};

#[derive(Args, Debug)]
pub(crate) struct MatchArgs {
    /// Job description text, or @path to read it from a file
    #[arg(long)]
    pub(crate) job_description: String,
    /// Candidate resume text, or @path to read it from a file
    #[arg(long)]
    pub(crate) resume: String,
    /// Print the result as JSON instead of a report
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug)]
pub(crate) struct InterviewArgs {
    /// Free-text interview feedback, or @path to read it from a file
    #[arg(long)]
    pub(crate) feedback: String,
}

#[derive(Args, Debug)]
pub(crate) struct EngagementArgs {
    /// Candidate interaction count (emails / calls / replies)
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u8).range(0..=MAX_INTERACTIONS as i64))]
    pub(crate) interactions: u8,
}

#[derive(Args, Debug)]
pub(crate) struct AskArgs {
    /// Hiring question for the assistant
    #[arg(long)]
    pub(crate) query: String,
}

pub(crate) fn run_match(args: MatchArgs) -> Result<(), AppError> {
    let job_description = read_text_arg(&args.job_description)?;
    let resume = read_text_arg(&args.resume)?;
    let view = evaluate_match(&job_description, &resume)?;

    if args.json {
        println!("{}", match_json(&view)?);
    } else {
        render_match(&view);
    }
    Ok(())
}

fn match_json(view: &MatchView) -> Result<String, AppError> {
    Ok(serde_json::to_string_pretty(view)?)
}

/// Both documents must be present before scoring, mirroring the screening form.
pub(crate) fn evaluate_match(job_description: &str, resume: &str) -> Result<MatchView, AppError> {
    require_text("job_description", job_description)?;
    require_text("resume", resume)?;

    let scorer = SimilarityScorer::new();
    Ok(MatchView::new(
        scorer.score(job_description, resume),
        scorer.explain(job_description, resume),
    ))
}

pub(crate) fn run_interview(args: InterviewArgs) -> Result<(), AppError> {
    let feedback = read_text_arg(&args.feedback)?;
    let view = InterviewDecisionView::from(evaluate_feedback(&feedback)?);
    render_interview(&view);
    Ok(())
}

pub(crate) fn run_engagement(args: EngagementArgs) -> Result<(), AppError> {
    let view = EngagementView::from(assess_engagement(args.interactions)?);
    render_engagement(&view);
    Ok(())
}

pub(crate) fn run_ask(args: AskArgs) -> Result<(), AppError> {
    match reply(&args.query) {
        Some(answer) => render_reply(&AssistantReplyView::from(answer)),
        None => println!("Ask a hiring question to get an answer."),
    }
    Ok(())
}

pub(crate) fn run_dashboard() {
    let snapshot = ExecutiveSnapshot::standard();

    println!("Executive Hiring Dashboard");
    for metric in &snapshot.metrics {
        println!("- {}: {}", metric.label, metric.value);
    }

    println!("\nHiring lifecycle coverage");
    for stage in &snapshot.lifecycle_coverage {
        println!("- {stage}");
    }
    println!("\n{}", snapshot.headline);
}

pub(crate) fn run_demo() -> Result<(), AppError> {
    println!("Hiring intelligence demo");
    println!();
    run_dashboard();

    println!("\nTalent discovery");
    let job_description = "Python developer with cloud experience";
    let resume = "Experienced Python developer skilled in cloud infrastructure";
    println!("  Job description: {job_description}");
    println!("  Resume: {resume}");
    render_match(&evaluate_match(job_description, resume)?);

    println!("\nInterview evaluation");
    for feedback in [
        "Strong ownership and good debugging instincts",
        "Needed heavy hints on the coding exercise",
    ] {
        println!("  Feedback: {feedback}");
        render_interview(&InterviewDecisionView::from(evaluate_feedback(feedback)?));
    }

    println!("\nEngagement & risk");
    for interactions in [1, 4] {
        render_engagement(&EngagementView::from(assess_engagement(interactions)?));
    }

    println!("\nHiring assistant");
    for question in [
        "Who are the top candidates?",
        "Is anyone likely to drop?",
        "What's the status of the backend hire?",
        "Where is the office?",
    ] {
        println!("  Q: {question}");
        if let Some(answer) = reply(question) {
            render_reply(&AssistantReplyView::from(answer));
        }
    }

    Ok(())
}

fn render_match(view: &MatchView) {
    println!("  Skill Match Score: {}", view.score_label);
    println!("  [{}] {}", view.treatment.label(), view.tier_label);
    if !view.shared_terms.is_empty() {
        println!("  Shared terms: {}", view.shared_terms.join(", "));
    }
    if !view.missing_terms.is_empty() {
        println!("  Missing from resume: {}", view.missing_terms.join(", "));
    }
}

fn render_interview(view: &InterviewDecisionView) {
    match &view.matched_signal {
        Some(signal) => println!(
            "  [{}] {} (signal: {signal})",
            view.treatment.label(),
            view.decision_label
        ),
        None => println!("  [{}] {}", view.treatment.label(), view.decision_label),
    }
}

fn render_engagement(view: &EngagementView) {
    println!(
        "  {} interaction(s): [{}] {}",
        view.interactions,
        view.treatment.label(),
        view.risk_label
    );
    if let Some(action) = view.recommended_action {
        println!("  Recommended Action: {action}");
    }
}

fn render_reply(view: &AssistantReplyView) {
    println!("  [{}] {}", view.treatment.label(), view.answer);
}

#[cfg(test)]
mod tests {
    use super::*;
    use hiring_intel::workflows::FitTier;

    #[test]
    fn evaluate_match_requires_both_documents() {
        let err = evaluate_match("Rust engineer", "  ").expect_err("blank resume");
        assert!(matches!(err, AppError::Validation(_)));
        assert_eq!(err.to_string(), "invalid input: resume must not be empty");
    }

    #[test]
    fn evaluate_match_returns_tiered_view() {
        let view = evaluate_match("Rust engineer", "rust ENGINEER").expect("valid");
        assert_eq!(view.score, 100.0);
        assert_eq!(view.tier, FitTier::HighFit);
    }

    #[test]
    fn match_json_carries_score_and_tier() {
        let view = evaluate_match("Rust engineer", "rust ENGINEER").expect("valid");
        let json = match_json(&view).expect("serializable");
        let value: serde_json::Value = serde_json::from_str(&json).expect("round trip");
        assert_eq!(value["score"], 100.0);
        assert_eq!(value["tier"], "high_fit");
    }

    #[test]
    fn demo_runs_every_panel() {
        run_demo().expect("demo completes");
    }
}
