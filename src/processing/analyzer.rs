//! Match engine: ranks a job description corpus against a resume and
//! reports the skill gap for the best match

use crate::config::Config;
use crate::error::{JobFitError, Result};
use crate::processing::document::{Corpus, NormalizedText};
use crate::processing::fit::{FitClassifier, FitLabel};
use crate::processing::ranker::{RankedResult, Ranker};
use crate::processing::skills::{SkillExtractor, SkillGap};
use crate::processing::text_processor::TextNormalizer;
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::time::Instant;

/// Immutable once built; one engine can serve any number of runs.
#[derive(Debug, Clone)]
pub struct MatchEngine {
    normalizer: TextNormalizer,
    skill_extractor: SkillExtractor,
    ranker: Ranker,
    classifier: FitClassifier,
    require_alternative: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchReport {
    /// Every job description, best first
    pub rankings: Vec<RankedResult>,
    pub best: RankedResult,
    /// Runner-up; absent only when the corpus has a single document and
    /// alternatives are not required
    pub alternative: Option<RankedResult>,
    pub fit: FitLabel,
    pub matched_skills: BTreeSet<String>,
    pub missing_skills: BTreeSet<String>,
    /// Number of vocabulary skills found in the best job description
    pub job_skill_count: usize,
    pub recommendation: String,
    pub processing_time_ms: u64,
}

impl Default for MatchEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl MatchEngine {
    pub fn new() -> Self {
        Self {
            normalizer: TextNormalizer::new(),
            skill_extractor: SkillExtractor::new(),
            ranker: Ranker::default(),
            classifier: FitClassifier::default(),
            require_alternative: true,
        }
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        config.validate()?;

        let matching = &config.matching;
        let vocabulary = &config.vocabulary;

        let engine = Self {
            normalizer: TextNormalizer::with_extra_stop_words(&vocabulary.extra_stopwords),
            skill_extractor: SkillExtractor::with_vocabulary(&vocabulary.skills),
            ranker: Ranker::new(matching.tie_break, matching.min_term_length),
            classifier: FitClassifier::new(matching.strong_threshold, matching.medium_threshold),
            require_alternative: matching.require_alternative,
        };

        debug!(
            "Match engine ready: {} stopwords, {} skills, tie break {:?}",
            engine.normalizer.stop_word_count(),
            engine.skill_extractor.skill_count(),
            matching.tie_break
        );
        Ok(engine)
    }

    pub fn with_require_alternative(mut self, require: bool) -> Self {
        self.require_alternative = require;
        self
    }

    pub fn normalizer(&self) -> &TextNormalizer {
        &self.normalizer
    }

    pub fn skill_extractor(&self) -> &SkillExtractor {
        &self.skill_extractor
    }

    pub fn classifier(&self) -> &FitClassifier {
        &self.classifier
    }

    /// Score `resume_text` against every document in `corpus`.
    ///
    /// Fails with `EmptyCorpus` for an empty corpus, and with
    /// `InsufficientCorpus` when an alternative is required but the corpus
    /// holds a single document.
    pub fn analyze(&self, resume_text: &str, corpus: &Corpus) -> Result<MatchReport> {
        let start_time = Instant::now();

        if corpus.is_empty() {
            return Err(JobFitError::EmptyCorpus);
        }
        if self.require_alternative && corpus.len() < 2 {
            return Err(JobFitError::InsufficientCorpus { found: corpus.len() });
        }

        let resume = self.normalizer.normalize(resume_text);
        let normalized_corpus: Vec<(String, NormalizedText)> = corpus
            .iter()
            .map(|doc| (doc.id.clone(), self.normalizer.normalize(&doc.text)))
            .collect();
        debug!(
            "Normalized resume to {} tokens, {} job descriptions",
            resume.len(),
            normalized_corpus.len()
        );

        let rankings = self.ranker.rank(&resume, &normalized_corpus)?;

        let best = rankings.first().cloned().ok_or(JobFitError::EmptyCorpus)?;
        let alternative = rankings.get(1).cloned();

        let best_text = normalized_corpus
            .iter()
            .find(|(id, _)| *id == best.id)
            .map(|(_, text)| text)
            .ok_or_else(|| {
                JobFitError::InvalidInput(format!("Ranked document '{}' is not in the corpus", best.id))
            })?;

        let resume_skills = self.skill_extractor.extract_skills(&resume);
        let job_skills = self.skill_extractor.extract_skills(best_text);
        let gap = SkillGap::between(&resume_skills, &job_skills);
        let job_skill_count = gap.job_skill_count();

        let fit = self.classifier.classify(best.score);

        info!(
            "Best match: {} ({:.2}%, {}), {} / {} skills matched ({:.0}% coverage)",
            best.id,
            best.score * 100.0,
            fit,
            gap.matched.len(),
            job_skill_count,
            gap.coverage() * 100.0
        );

        Ok(MatchReport {
            rankings,
            best,
            alternative,
            fit,
            matched_skills: gap.matched,
            missing_skills: gap.missing,
            job_skill_count,
            recommendation: fit.recommendation().to_string(),
            processing_time_ms: start_time.elapsed().as_millis() as u64,
        })
    }
}
