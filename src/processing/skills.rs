//! Controlled skill vocabulary and skill gap analysis

use crate::processing::document::NormalizedText;
use log::warn;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashSet};

/// Default skill vocabulary, grouped loosely by role family.
pub const DEFAULT_SKILLS: &[&str] = &[
    // data
    "python", "sql", "pandas", "numpy", "excel", "statistics",
    "machine", "learning", "deep", "deployment", "api",
    // engineering
    "java", "database", "backend",
    // sales
    "sales", "communication", "crm", "negotiation",
    // people
    "recruitment", "talent", "hr",
    // operations
    "coordination", "planning", "documentation",
];

/// Finds vocabulary skills in normalized text by exact token match.
#[derive(Debug, Clone)]
pub struct SkillExtractor {
    vocabulary: Vec<String>,
    lookup: HashSet<String>,
}

impl Default for SkillExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl SkillExtractor {
    pub fn new() -> Self {
        Self::with_vocabulary(DEFAULT_SKILLS.iter().copied())
    }

    /// Build from a custom vocabulary. Entries are lowercased and deduplicated
    /// keeping their first position.
    pub fn with_vocabulary<I, S>(skills: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut vocabulary = Vec::new();
        let mut lookup = HashSet::new();

        for skill in skills {
            let skill = skill.as_ref().trim().to_lowercase();
            if skill.is_empty() {
                continue;
            }
            if !skill.chars().all(|c| c.is_ascii_lowercase()) {
                // normalized tokens are a-z only, so this entry can never match
                warn!("Skill '{}' contains non-alphabetic characters and will never match", skill);
            }
            if lookup.insert(skill.clone()) {
                vocabulary.push(skill);
            }
        }

        Self { vocabulary, lookup }
    }

    pub fn extract_skills(&self, doc: &NormalizedText) -> BTreeSet<String> {
        doc.distinct_tokens()
            .into_iter()
            .filter(|token| self.lookup.contains(*token))
            .map(str::to_string)
            .collect()
    }

    pub fn vocabulary(&self) -> &[String] {
        &self.vocabulary
    }

    pub fn contains(&self, token: &str) -> bool {
        self.lookup.contains(token)
    }

    pub fn skill_count(&self) -> usize {
        self.vocabulary.len()
    }
}

/// Skills of the best matching job split by presence in the resume.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillGap {
    pub matched: BTreeSet<String>,
    pub missing: BTreeSet<String>,
}

impl SkillGap {
    pub fn between(resume_skills: &BTreeSet<String>, job_skills: &BTreeSet<String>) -> Self {
        let matched = job_skills.intersection(resume_skills).cloned().collect();
        let missing = job_skills.difference(resume_skills).cloned().collect();
        Self { matched, missing }
    }

    /// Number of skills the job asks for
    pub fn job_skill_count(&self) -> usize {
        self.matched.len() + self.missing.len()
    }

    /// Fraction of the job's skills present in the resume; 0.0 when the job lists none
    pub fn coverage(&self) -> f64 {
        let total = self.job_skill_count();
        if total == 0 {
            0.0
        } else {
            self.matched.len() as f64 / total as f64
        }
    }
}
