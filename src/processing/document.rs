//! Document, corpus and normalized token structures

use crate::error::{JobFitError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A single text document with an opaque, corpus-unique identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub id: String,
    pub text: String,
}

impl Document {
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
        }
    }
}

/// Ordered collection of job descriptions scored against a resume.
///
/// Iteration order is the order documents were added. It only matters for
/// ranking when the corpus-order tie break is configured.
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    documents: Vec<Document>,
    ids: HashSet<String>,
}

impl Corpus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a corpus from `(id, text)` pairs, rejecting empty or repeated ids
    pub fn from_pairs<I, K, V>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut corpus = Self::new();
        for (id, text) in pairs {
            corpus.push(Document::new(id, text))?;
        }
        Ok(corpus)
    }

    pub fn push(&mut self, document: Document) -> Result<()> {
        if document.id.trim().is_empty() {
            return Err(JobFitError::InvalidInput(
                "Job description identifier must not be empty".to_string(),
            ));
        }
        if !self.ids.insert(document.id.clone()) {
            return Err(JobFitError::InvalidInput(format!(
                "Duplicate job description identifier: {}",
                document.id
            )));
        }
        self.documents.push(document);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Document> {
        self.documents.iter()
    }

    pub fn get(&self, id: &str) -> Option<&Document> {
        self.documents.iter().find(|d| d.id == id)
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.documents.iter().map(|d| d.id.as_str())
    }
}

impl<'a> IntoIterator for &'a Corpus {
    type Item = &'a Document;
    type IntoIter = std::slice::Iter<'a, Document>;

    fn into_iter(self) -> Self::IntoIter {
        self.documents.iter()
    }
}

/// Lowercase alphabetic tokens left after normalization, in input order.
///
/// Only [`TextNormalizer`](crate::processing::text_processor::TextNormalizer)
/// produces values of this type, so every token is guaranteed to be
/// non-empty, `a-z` only, and not a stopword.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct NormalizedText(Vec<String>);

impl NormalizedText {
    pub(crate) fn from_tokens(tokens: Vec<String>) -> Self {
        Self(tokens)
    }

    pub fn tokens(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Space-joined form, suitable for feeding back into the normalizer
    pub fn joined(&self) -> String {
        self.0.join(" ")
    }

    pub fn distinct_tokens(&self) -> HashSet<&str> {
        self.0.iter().map(|t| t.as_str()).collect()
    }
}
