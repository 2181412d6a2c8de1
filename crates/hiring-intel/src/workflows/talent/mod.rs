//! Talent discovery: lexical matching between a job description and a résumé.
//!
//! Both documents are embedded as TF-IDF vectors over the two-document corpus
//! and compared with cosine similarity. The result is reported as a percentage
//! rounded to two decimals and bucketed into a [`FitTier`].

mod tier;
pub mod tokenizer;
pub mod vectorizer;

pub use tier::FitTier;
pub use vectorizer::TfIdfMatrix;

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use tracing::debug;

use vectorizer::term_counts;

/// Score and tier for one job description / résumé pair. Recomputed per request.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimilarityResult {
    pub score: f64,
    pub tier: FitTier,
}

impl SimilarityResult {
    pub fn from_score(score: f64) -> Self {
        Self {
            score,
            tier: FitTier::from_score(score),
        }
    }
}

/// Terms explaining a match: what both documents share and what the résumé lacks.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchBreakdown {
    pub shared_terms: Vec<String>,
    pub missing_terms: Vec<String>,
}

/// Stateless TF-IDF/cosine scorer.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimilarityScorer;

impl SimilarityScorer {
    pub fn new() -> Self {
        Self
    }

    /// Score `resume` against `job_description`.
    ///
    /// Never fails: an empty document or an empty vocabulary scores `0.0`.
    pub fn score(&self, job_description: &str, resume: &str) -> SimilarityResult {
        let matrix = TfIdfMatrix::fit_transform(&[job_description, resume]);
        let cosine = matrix.cosine(0, 1);
        let score = to_percentage(cosine);
        let result = SimilarityResult::from_score(score);

        debug!(
            vocabulary = matrix.vocabulary().len(),
            score = result.score,
            tier = result.tier.label(),
            "scored resume against job description"
        );

        result
    }

    /// Shared and missing terms, both sorted alphabetically.
    pub fn explain(&self, job_description: &str, resume: &str) -> MatchBreakdown {
        let required: BTreeSet<String> = term_counts(job_description).into_keys().collect();
        let offered: BTreeSet<String> = term_counts(resume).into_keys().collect();

        MatchBreakdown {
            shared_terms: required.intersection(&offered).cloned().collect(),
            missing_terms: required.difference(&offered).cloned().collect(),
        }
    }
}

/// Convenience wrapper around [`SimilarityScorer::score`].
pub fn score(job_description: &str, resume: &str) -> SimilarityResult {
    SimilarityScorer.score(job_description, resume)
}

fn to_percentage(cosine: f64) -> f64 {
    let percent = (cosine * 100.0 * 100.0).round() / 100.0;
    percent.clamp(0.0, 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_documents_score_one_hundred() {
        let result = score("Senior Rust engineer", "Senior Rust engineer");
        assert_eq!(result.score, 100.0);
        assert_eq!(result.tier, FitTier::HighFit);
    }

    #[test]
    fn empty_inputs_score_zero() {
        assert_eq!(score("", "").score, 0.0);
        assert_eq!(score("", "anything").score, 0.0);
        assert_eq!(score("anything", "").tier, FitTier::LowFit);
    }

    #[test]
    fn percentage_rounds_to_two_decimals() {
        assert_eq!(to_percentage(0.123456), 12.35);
        assert_eq!(to_percentage(0.5), 50.0);
        assert_eq!(to_percentage(1.0000000001), 100.0);
    }

    #[test]
    fn explain_reports_shared_and_missing_terms() {
        let breakdown = SimilarityScorer::new().explain(
            "Rust developer with Kafka",
            "Experienced Rust developer",
        );
        assert_eq!(breakdown.shared_terms, vec!["developer", "rust"]);
        assert_eq!(breakdown.missing_terms, vec!["kafka", "with"]);
    }

    #[test]
    fn explain_of_empty_job_description_is_empty() {
        let breakdown = SimilarityScorer::new().explain("", "Rust developer");
        assert_eq!(breakdown, MatchBreakdown::default());
    }
}
