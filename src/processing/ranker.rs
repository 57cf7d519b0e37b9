//! Ranking of job descriptions by cosine similarity to a resume

use crate::config::TieBreak;
use crate::error::Result;
use crate::processing::document::NormalizedText;
use crate::processing::vector_space::CorpusIndex;
use log::debug;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedResult {
    pub id: String,
    /// Cosine similarity in `[0, 1]`
    pub score: f64,
}

#[derive(Debug, Clone)]
pub struct Ranker {
    tie_break: TieBreak,
    min_term_length: usize,
}

impl Default for Ranker {
    fn default() -> Self {
        Self::new(TieBreak::Identifier, 2)
    }
}

impl Ranker {
    pub fn new(tie_break: TieBreak, min_term_length: usize) -> Self {
        Self {
            tie_break,
            min_term_length,
        }
    }

    /// Score every candidate against the resume and order them best first.
    ///
    /// Equal scores are ordered by identifier, or kept in the order given by
    /// `corpus` when [`TieBreak::CorpusOrder`] is configured.
    pub fn rank(
        &self,
        resume: &NormalizedText,
        corpus: &[(String, NormalizedText)],
    ) -> Result<Vec<RankedResult>> {
        let index = CorpusIndex::build(resume, corpus, self.min_term_length)?;
        debug!(
            "Built vector space: {} documents, {} terms",
            index.document_count(),
            index.vocabulary_size()
        );

        let mut results: Vec<RankedResult> = index
            .similarities()
            .map(|(id, score)| RankedResult {
                id: id.to_string(),
                score,
            })
            .collect();

        // sort_by is stable, which CorpusOrder relies on
        results.sort_by(|a, b| {
            b.score.total_cmp(&a.score).then_with(|| match self.tie_break {
                TieBreak::Identifier => a.id.cmp(&b.id),
                TieBreak::CorpusOrder => Ordering::Equal,
            })
        });

        Ok(results)
    }
}
