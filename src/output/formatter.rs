//! Output formatters: console, JSON and Markdown

use crate::config::OutputFormat;
use crate::error::{JobFitError, Result};
use crate::output::report::FitReport;
use crate::processing::fit::FitLabel;
use colored::{Color, Colorize};
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

const WHY_THIS_ROLE: &str =
    "Your resume shows alignment with the core skills and responsibilities defined for this role.";
const DISCLAIMER: &str =
    "Note: This tool supports hiring decisions and should be used along with human judgment.";

/// Trait for formatting fit reports
pub trait OutputFormatter {
    fn format_report(&self, report: &FitReport) -> Result<String>;
    fn supports_format(&self) -> OutputFormat;
}

/// Console formatter with optional colors
pub struct ConsoleFormatter {
    use_colors: bool,
    detailed: bool,
}

/// JSON formatter for structured output
pub struct JsonFormatter {
    pretty: bool,
}

/// Markdown formatter for saved reports
pub struct MarkdownFormatter {
    include_metadata: bool,
}

/// Report generator that coordinates the formatters
pub struct ReportGenerator {
    console_formatter: ConsoleFormatter,
    json_formatter: JsonFormatter,
    markdown_formatter: MarkdownFormatter,
}

fn join_skills(skills: &BTreeSet<String>) -> String {
    if skills.is_empty() {
        "None".to_string()
    } else {
        skills.iter().map(String::as_str).collect::<Vec<_>>().join(", ")
    }
}

impl ConsoleFormatter {
    pub fn new(use_colors: bool, detailed: bool) -> Self {
        Self { use_colors, detailed }
    }

    fn colorize(&self, text: &str, color: Color) -> String {
        if self.use_colors {
            text.color(color).to_string()
        } else {
            text.to_string()
        }
    }

    fn format_header(&self, title: &str, level: u8) -> String {
        let prefix = match level {
            1 => "█",
            2 => "▓",
            _ => "▒",
        };

        let color = match level {
            1 => Color::Blue,
            2 => Color::Green,
            _ => Color::Yellow,
        };

        if self.use_colors {
            format!("\n{} {}\n", prefix.color(color).bold(), title.color(color).bold())
        } else {
            format!("\n{} {}\n", prefix, title)
        }
    }

    fn format_fit_badge(&self, fit: FitLabel) -> String {
        let color = match fit {
            FitLabel::Strong => Color::Green,
            FitLabel::Medium => Color::Yellow,
            FitLabel::Low => Color::Red,
        };

        if self.use_colors {
            format!("[{}]", fit.to_string().color(color).bold())
        } else {
            format!("[{}]", fit)
        }
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_report(&self, report: &FitReport) -> Result<String> {
        let mut output = String::new();
        let result = &report.result;

        output.push_str(&self.format_header("📄 RESUME – JOB FIT ANALYSIS", 1));

        output.push_str(&self.format_header(&format!("🏆 {}", report.best_role.label), 2));
        output.push_str(&format!(
            "Score: {} {}\n",
            self.colorize(&report.best_role.percent_display(), Color::Cyan),
            self.format_fit_badge(result.fit)
        ));

        output.push_str(&self.format_header("✅ Matched Skills", 3));
        output.push_str(&format!("{}\n", report.skill_coverage_line()));
        output.push_str(&format!(
            "{}\n",
            self.colorize(&join_skills(&result.matched_skills), Color::Green)
        ));

        output.push_str(&self.format_header("⚠️  Missing Skills", 3));
        output.push_str(&format!(
            "{}\n",
            self.colorize(&join_skills(&result.missing_skills), Color::Yellow)
        ));

        output.push_str(&self.format_header("💡 Why this role?", 3));
        output.push_str(&format!("{}\n", WHY_THIS_ROLE));

        output.push_str(&self.format_header("📌 Recommendation", 3));
        output.push_str(&format!("{}\n", result.recommendation));

        if let Some(alternative) = &report.alternative_role {
            output.push_str(&self.format_header("🔄 Alternative Suitable Role", 3));
            output.push_str(&format!("{} ({})\n", alternative.label, alternative.percent_display()));
        }

        if self.detailed {
            output.push_str(&self.format_header("📊 Full Ranking", 2));
            for (i, role) in report.ranking.iter().enumerate() {
                output.push_str(&format!(
                    "  {}. {} {}\n",
                    i + 1,
                    role.label,
                    self.colorize(&format!("({}, {})", role.percent_display(), role.id), Color::BrightBlack)
                ));
            }
            output.push_str(&format!(
                "\nProcessing time: {}ms | Job descriptions: {}\n",
                result.processing_time_ms, report.metadata.corpus_size
            ));
        }

        output.push_str(&format!("\n{}\n", self.colorize(DISCLAIMER, Color::BrightBlack)));

        Ok(output)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Console
    }
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_report(&self, report: &FitReport) -> Result<String> {
        if self.pretty {
            Ok(serde_json::to_string_pretty(report)?)
        } else {
            Ok(serde_json::to_string(report)?)
        }
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Json
    }
}

impl MarkdownFormatter {
    pub fn new(include_metadata: bool) -> Self {
        Self { include_metadata }
    }
}

impl OutputFormatter for MarkdownFormatter {
    fn format_report(&self, report: &FitReport) -> Result<String> {
        let mut output = String::new();
        let result = &report.result;

        output.push_str("# 📄 Resume – Job Fit Analysis\n\n");

        if self.include_metadata {
            let resume_name = Path::new(&report.metadata.resume_file)
                .file_name()
                .map(|n| n.to_string_lossy().to_string())
                .ok_or_else(|| {
                    JobFitError::OutputFormatting(format!(
                        "Resume path has no file name: {}",
                        report.metadata.resume_file
                    ))
                })?;
            output.push_str(&format!(
                "**Generated:** {} | **Resume:** `{}` | **Job descriptions:** {}\n\n",
                chrono::DateTime::<chrono::Utc>::from(report.metadata.generated_at)
                    .format("%Y-%m-%d %H:%M:%S UTC"),
                resume_name,
                report.metadata.corpus_size
            ));
        }

        output.push_str(&format!("## 🏆 {}\n\n", report.best_role.label));
        output.push_str(&format!(
            "**Score:** {} | **Fit Level:** {}\n\n",
            report.best_role.percent_display(), result.fit
        ));

        output.push_str("### ✅ Matched Skills\n\n");
        output.push_str(&format!("{}\n\n", report.skill_coverage_line()));
        output.push_str(&format!("{}\n\n", join_skills(&result.matched_skills)));

        output.push_str("### ⚠️ Missing Skills\n\n");
        output.push_str(&format!("{}\n\n", join_skills(&result.missing_skills)));

        output.push_str("### 💡 Why this role?\n\n");
        output.push_str(&format!("{}\n\n", WHY_THIS_ROLE));

        output.push_str("### 📌 Recommendation\n\n");
        output.push_str(&format!("{}\n\n", result.recommendation));

        if let Some(alternative) = &report.alternative_role {
            output.push_str("### 🔄 Alternative Suitable Role\n\n");
            output.push_str(&format!("{} ({})\n\n", alternative.label, alternative.percent_display()));
        }

        output.push_str("### 📊 Ranking\n\n");
        output.push_str("| Rank | Role | Score |\n");
        output.push_str("|------|------|-------|\n");
        for (i, role) in report.ranking.iter().enumerate() {
            output.push_str(&format!("| {} | {} | {} |\n", i + 1, role.label, role.percent_display()));
        }
        output.push('\n');

        output.push_str(&format!("_{}_\n", DISCLAIMER));

        Ok(output)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Markdown
    }
}

impl ReportGenerator {
    pub fn new() -> Self {
        Self {
            console_formatter: ConsoleFormatter::new(true, false),
            json_formatter: JsonFormatter::new(true),
            markdown_formatter: MarkdownFormatter::new(true),
        }
    }

    pub fn with_options(use_colors: bool, detailed: bool, pretty_json: bool, include_metadata: bool) -> Self {
        Self {
            console_formatter: ConsoleFormatter::new(use_colors, detailed),
            json_formatter: JsonFormatter::new(pretty_json),
            markdown_formatter: MarkdownFormatter::new(include_metadata),
        }
    }

    pub fn generate_report(&self, report: &FitReport, format: &OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Console => self.console_formatter.format_report(report),
            OutputFormat::Json => self.json_formatter.format_report(report),
            OutputFormat::Markdown => self.markdown_formatter.format_report(report),
        }
    }
}

impl Default for ReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}

pub fn save_report_to_file(content: &str, file_path: &Path) -> Result<()> {
    use std::fs;
    if let Some(parent) = file_path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(file_path, content)?;
    Ok(())
}

pub fn suggest_filename(format: &OutputFormat, resume_name: &str, timestamp: bool) -> String {
    let base_name = Path::new(resume_name)
        .file_stem()
        .unwrap_or_default()
        .to_string_lossy();

    let timestamp_suffix = if timestamp {
        format!("_{}", chrono::Utc::now().format("%Y%m%d_%H%M%S"))
    } else {
        String::new()
    };

    match format {
        OutputFormat::Console => format!("{}_fit{}.txt", base_name, timestamp_suffix),
        OutputFormat::Json => format!("{}_fit{}.json", base_name, timestamp_suffix),
        OutputFormat::Markdown => format!("{}_fit{}.md", base_name, timestamp_suffix),
    }
}

/// A directory target gets a generated, timestamped file name inside it
pub fn resolve_save_path(target: &Path, format: &OutputFormat, resume_name: &str) -> PathBuf {
    if target.is_dir() {
        target.join(suggest_filename(format, resume_name, true))
    } else {
        target.to_path_buf()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processing::analyzer::MatchEngine;
    use crate::processing::document::Corpus;
    use tempfile::TempDir;

    fn sample_report() -> FitReport {
        let corpus = Corpus::from_pairs([
            ("jd_data_analyst.txt", "python sql pandas excel statistics"),
            ("jd_sales_rep.txt", "sales negotiation crm communication"),
        ])
        .unwrap();
        let result = MatchEngine::new().analyze("Python SQL pandas experience", &corpus).unwrap();
        FitReport::new(result, "/tmp/jane_resume.pdf", "data/job_descriptions")
    }

    #[test]
    fn test_console_without_colors() {
        let report = sample_report();
        let text = ConsoleFormatter::new(false, true).format_report(&report).unwrap();

        assert!(text.contains("🏆 Data Analyst"));
        assert!(text.contains("3 / 5 skills matched"));
        assert!(text.contains("pandas, python, sql"));
        assert!(text.contains("excel, statistics"));
        assert!(text.contains("Sales Rep (0.00%)"));
        assert!(text.contains("Full Ranking"));
        assert!(!text.contains("\u{1b}["));
    }

    #[test]
    fn test_json_is_parseable() {
        let report = sample_report();
        let json = JsonFormatter::new(false).format_report(&report).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["best_role"]["label"], "Data Analyst");
        assert_eq!(value["result"]["best"]["id"], "jd_data_analyst.txt");
    }

    #[test]
    fn test_markdown_contains_ranking_table() {
        let report = sample_report();
        let md = MarkdownFormatter::new(true).format_report(&report).unwrap();

        assert!(md.contains("`jane_resume.pdf`"));
        assert!(md.contains("| 1 | Data Analyst |"));
        assert!(md.contains("| 2 | Sales Rep | 0.00% |"));
    }

    #[test]
    fn test_generator_dispatches_by_format() {
        let report = sample_report();
        let generator = ReportGenerator::with_options(false, false, true, false);

        let json = generator.generate_report(&report, &OutputFormat::Json).unwrap();
        assert!(json.trim_start().starts_with('{'));
        let md = generator.generate_report(&report, &OutputFormat::Markdown).unwrap();
        assert!(md.starts_with("# "));
        assert!(!md.contains("**Generated:**"));
    }

    #[test]
    fn test_save_and_suggest_filename() {
        let temp_dir = TempDir::new().unwrap();
        let name = suggest_filename(&OutputFormat::Markdown, "cv/jane_resume.pdf", false);
        assert_eq!(name, "jane_resume_fit.md");

        let path = temp_dir.path().join("reports").join(&name);
        save_report_to_file("# report", &path).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "# report");
    }

    #[test]
    fn test_resolve_save_path_for_directory_and_file() {
        let temp_dir = TempDir::new().unwrap();

        let in_dir = resolve_save_path(temp_dir.path(), &OutputFormat::Json, "cv/jane_resume.docx");
        assert_eq!(in_dir.parent().unwrap(), temp_dir.path());
        let name = in_dir.file_name().unwrap().to_string_lossy().to_string();
        assert!(name.starts_with("jane_resume_fit_"));
        assert!(name.ends_with(".json"));

        let explicit = temp_dir.path().join("report.md");
        assert_eq!(resolve_save_path(&explicit, &OutputFormat::Markdown, "cv.pdf"), explicit);
    }
}
