//! Presentation-ready report built around a [`MatchReport`]

use crate::processing::analyzer::MatchReport;
use serde::{Deserialize, Serialize};
use std::time::SystemTime;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FitReport {
    pub best_role: RoleSummary,
    pub alternative_role: Option<RoleSummary>,
    /// Every job description with its label, best first
    pub ranking: Vec<RoleSummary>,
    /// Raw engine output
    pub result: MatchReport,
    pub metadata: ReportMetadata,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoleSummary {
    pub id: String,
    /// Human readable role name derived from the identifier
    pub label: String,
    /// Score as a percentage rounded to 2 decimals
    pub score_percentage: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportMetadata {
    pub generated_at: SystemTime,
    pub analyzer_version: String,
    pub resume_file: String,
    pub jobs_dir: String,
    pub corpus_size: usize,
}

impl RoleSummary {
    pub fn new(id: &str, score: f64) -> Self {
        Self {
            id: id.to_string(),
            label: role_label(id),
            score_percentage: score_percentage(score),
        }
    }

    /// Percentage with two decimals and a `%` sign, e.g. `53.12%` or `0.00%`
    pub fn percent_display(&self) -> String {
        format!("{:.2}%", self.score_percentage)
    }
}

impl FitReport {
    pub fn new(result: MatchReport, resume_file: &str, jobs_dir: &str) -> Self {
        let best_role = RoleSummary::new(&result.best.id, result.best.score);
        let alternative_role = result
            .alternative
            .as_ref()
            .map(|alt| RoleSummary::new(&alt.id, alt.score));
        let ranking = result
            .rankings
            .iter()
            .map(|r| RoleSummary::new(&r.id, r.score))
            .collect();

        let metadata = ReportMetadata {
            generated_at: SystemTime::now(),
            analyzer_version: env!("CARGO_PKG_VERSION").to_string(),
            resume_file: resume_file.to_string(),
            jobs_dir: jobs_dir.to_string(),
            corpus_size: result.rankings.len(),
        };

        Self {
            best_role,
            alternative_role,
            ranking,
            result,
            metadata,
        }
    }

    /// "N / M skills matched" for the best role
    pub fn skill_coverage_line(&self) -> String {
        format!(
            "{} / {} skills matched",
            self.result.matched_skills.len(),
            self.result.job_skill_count
        )
    }
}

/// Derive a display name from a job description identifier.
///
/// `jd_data_analyst.txt` becomes `Data Analyst`: the `jd_` prefix and the
/// extension are dropped, underscores become spaces and every word is
/// capitalized.
pub fn role_label(id: &str) -> String {
    let stem = id.strip_prefix("jd_").unwrap_or(id);
    let stem = match stem.rfind('.') {
        Some(dot) if dot > 0 => &stem[..dot],
        _ => stem,
    };

    let mut label = String::with_capacity(stem.len());
    let mut at_word_start = true;
    for c in stem.chars() {
        let c = if c == '_' { ' ' } else { c };
        if c.is_alphabetic() {
            if at_word_start {
                label.extend(c.to_uppercase());
            } else {
                label.extend(c.to_lowercase());
            }
            at_word_start = false;
        } else {
            label.push(c);
            at_word_start = true;
        }
    }
    label
}

/// Similarity score as a percentage rounded to 2 decimals
pub fn score_percentage(score: f64) -> f64 {
    (score * 10_000.0).round() / 100.0
}
