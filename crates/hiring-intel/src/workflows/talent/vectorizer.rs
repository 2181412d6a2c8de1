use std::collections::{BTreeMap, BTreeSet};

use super::tokenizer::tokenize;

/// Dense TF-IDF matrix over a small corpus.
///
/// The vocabulary is kept sorted so every row shares the same column order,
/// which makes dot products independent of the order documents were supplied in.
#[derive(Debug, Clone, PartialEq)]
pub struct TfIdfMatrix {
    vocabulary: Vec<String>,
    idf: Vec<f64>,
    rows: Vec<Vec<f64>>,
}

impl TfIdfMatrix {
    /// Fit the vocabulary and smoothed IDF weights on `documents` and return
    /// their L2-normalized TF-IDF rows.
    ///
    /// `idf(t) = ln((1 + n) / (1 + df(t))) + 1` where `n` is the corpus size.
    pub fn fit_transform(documents: &[&str]) -> Self {
        let counts: Vec<BTreeMap<String, u32>> =
            documents.iter().map(|doc| term_counts(doc)).collect();

        let vocabulary: Vec<String> = counts
            .iter()
            .flat_map(|doc| doc.keys().cloned())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();

        let corpus_size = documents.len() as f64;
        let idf: Vec<f64> = vocabulary
            .iter()
            .map(|term| {
                let df = counts.iter().filter(|doc| doc.contains_key(term)).count() as f64;
                ((1.0 + corpus_size) / (1.0 + df)).ln() + 1.0
            })
            .collect();

        let rows = counts
            .iter()
            .map(|doc| {
                let mut row: Vec<f64> = vocabulary
                    .iter()
                    .zip(&idf)
                    .map(|(term, weight)| {
                        f64::from(doc.get(term).copied().unwrap_or(0)) * weight
                    })
                    .collect();
                l2_normalize(&mut row);
                row
            })
            .collect();

        Self {
            vocabulary,
            idf,
            rows,
        }
    }

    pub fn vocabulary(&self) -> &[String] {
        &self.vocabulary
    }

    pub fn idf(&self, term: &str) -> Option<f64> {
        self.vocabulary
            .binary_search_by(|candidate| candidate.as_str().cmp(term))
            .ok()
            .map(|index| self.idf[index])
    }

    pub fn row(&self, index: usize) -> Option<&[f64]> {
        self.rows.get(index).map(Vec::as_slice)
    }

    /// Cosine similarity between two rows; `0.0` when either row is missing or all-zero.
    pub fn cosine(&self, left: usize, right: usize) -> f64 {
        match (self.row(left), self.row(right)) {
            (Some(a), Some(b)) => cosine_normalized(a, b),
            _ => 0.0,
        }
    }
}

/// Raw term counts for one document.
pub fn term_counts(text: &str) -> BTreeMap<String, u32> {
    let mut counts = BTreeMap::new();
    for token in tokenize(text) {
        *counts.entry(token).or_insert(0) += 1;
    }
    counts
}

fn l2_normalize(row: &mut [f64]) {
    let norm = row.iter().map(|value| value * value).sum::<f64>().sqrt();
    if norm > 0.0 && norm.is_finite() {
        for value in row.iter_mut() {
            *value /= norm;
        }
    }
}

/// Dot product of two unit-length (or all-zero) vectors, clamped to `[0, 1]`.
///
/// An all-zero vector has no direction, so the similarity is defined as `0.0`
/// instead of dividing by a zero norm.
fn cosine_normalized(a: &[f64], b: &[f64]) -> f64 {
    let dot: f64 = a.iter().zip(b).map(|(x, y)| x * y).sum();
    if dot.is_finite() {
        dot.clamp(0.0, 1.0)
    } else {
        0.0
    }
}
