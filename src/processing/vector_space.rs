//! TF-IDF vector space built over one resume and its job description corpus
//!
//! Weights follow the smoothed scheme:
//! - `tf(t, d)` = raw count of `t` in `d`
//! - `idf(t)` = `ln((1 + n) / (1 + df(t))) + 1`, with `n` counting the resume too
//! - every document vector is L2-normalized
//!
//! The index is built per run and never reused, so statistics from one
//! resume cannot leak into the scores of another.

use crate::error::{JobFitError, Result};
use crate::processing::document::NormalizedText;
use std::collections::HashMap;

/// Sparse vector as `(term index, weight)` pairs sorted by term index.
pub type SparseVector = Vec<(usize, f64)>;

#[derive(Debug, Clone)]
pub struct CorpusIndex {
    vocabulary: HashMap<String, usize>,
    idf: Vec<f64>,
    query: SparseVector,
    candidates: Vec<(String, SparseVector)>,
}

impl CorpusIndex {
    /// Build the vector space over `query` plus every candidate.
    ///
    /// Terms shorter than `min_term_length` characters get no dimension.
    pub fn build(
        query: &NormalizedText,
        candidates: &[(String, NormalizedText)],
        min_term_length: usize,
    ) -> Result<Self> {
        if candidates.is_empty() {
            return Err(JobFitError::EmptyCorpus);
        }

        let mut vocabulary: HashMap<String, usize> = HashMap::new();
        let mut doc_frequency: Vec<usize> = Vec::new();

        let mut count_terms = |doc: &NormalizedText| -> HashMap<usize, usize> {
            let mut counts = HashMap::new();
            for token in doc.tokens() {
                if token.chars().count() < min_term_length {
                    continue;
                }
                let next_id = vocabulary.len();
                let term_id = *vocabulary.entry(token.clone()).or_insert(next_id);
                if term_id == doc_frequency.len() {
                    doc_frequency.push(0);
                }
                *counts.entry(term_id).or_insert(0) += 1;
            }
            for term_id in counts.keys() {
                doc_frequency[*term_id] += 1;
            }
            counts
        };

        let query_counts = count_terms(query);
        let candidate_counts: Vec<(String, HashMap<usize, usize>)> = candidates
            .iter()
            .map(|(id, doc)| (id.clone(), count_terms(doc)))
            .collect();

        let num_docs = (candidates.len() + 1) as f64;
        let idf: Vec<f64> = doc_frequency
            .iter()
            .map(|&df| ((1.0 + num_docs) / (1.0 + df as f64)).ln() + 1.0)
            .collect();

        let query = weigh(&query_counts, &idf);
        let candidates = candidate_counts
            .into_iter()
            .map(|(id, counts)| {
                let vector = weigh(&counts, &idf);
                (id, vector)
            })
            .collect();

        Ok(Self {
            vocabulary,
            idf,
            query,
            candidates,
        })
    }

    /// Cosine similarity of the query against each candidate, in corpus order
    pub fn similarities(&self) -> impl Iterator<Item = (&str, f64)> + '_ {
        self.candidates
            .iter()
            .map(|(id, vector)| (id.as_str(), cosine_similarity(&self.query, vector)))
    }

    pub fn vocabulary_size(&self) -> usize {
        self.vocabulary.len()
    }

    /// Number of documents in the space, the query included
    pub fn document_count(&self) -> usize {
        self.candidates.len() + 1
    }

    pub fn idf(&self, term: &str) -> Option<f64> {
        self.vocabulary.get(term).map(|&id| self.idf[id])
    }

    pub fn query_vector(&self) -> &SparseVector {
        &self.query
    }
}

fn weigh(counts: &HashMap<usize, usize>, idf: &[f64]) -> SparseVector {
    let mut vector: SparseVector = counts
        .iter()
        .map(|(&term_id, &count)| (term_id, count as f64 * idf[term_id]))
        .collect();
    vector.sort_unstable_by_key(|(term_id, _)| *term_id);

    let norm = vector.iter().map(|(_, w)| w * w).sum::<f64>().sqrt();
    if norm > 0.0 {
        for (_, weight) in vector.iter_mut() {
            *weight /= norm;
        }
    }
    vector
}

/// Cosine similarity of two sparse vectors, clamped to `[0, 1]`.
///
/// Returns 0.0 when either vector has no weight or they share no terms.
pub fn cosine_similarity(a: &SparseVector, b: &SparseVector) -> f64 {
    let norm_a = a.iter().map(|(_, w)| w * w).sum::<f64>().sqrt();
    let norm_b = b.iter().map(|(_, w)| w * w).sum::<f64>().sqrt();
    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }

    // merge walk over the two sorted index lists
    let (mut i, mut j) = (0, 0);
    let mut dot_product = 0.0;
    while i < a.len() && j < b.len() {
        match a[i].0.cmp(&b[j].0) {
            std::cmp::Ordering::Less => i += 1,
            std::cmp::Ordering::Greater => j += 1,
            std::cmp::Ordering::Equal => {
                dot_product += a[i].1 * b[j].1;
                i += 1;
                j += 1;
            }
        }
    }

    (dot_product / (norm_a * norm_b)).clamp(0.0, 1.0)
}
