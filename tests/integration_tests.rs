//! Integration tests for the job fit analyzer

use job_fit_analyzer::config::{Config, TieBreak};
use job_fit_analyzer::input::corpus::load_corpus_dir;
use job_fit_analyzer::input::InputManager;
use job_fit_analyzer::output::{FitReport, ReportGenerator};
use job_fit_analyzer::processing::fit::FitLabel;
use job_fit_analyzer::{Corpus, JobFitError, MatchEngine};
use std::path::Path;
use tempfile::TempDir;

const JOBS_DIR: &str = "tests/fixtures/job_descriptions";

#[tokio::test]
async fn test_text_extraction_from_txt() {
    let mut manager = InputManager::new();
    let path = Path::new("tests/fixtures/sample_resume.txt");

    let text = manager.extract_text(path).await.unwrap();
    assert!(text.contains("Jane Roe"));
    assert!(text.contains("Data Analyst"));
    assert!(text.contains("pandas"));
}

#[tokio::test]
async fn test_text_extraction_from_markdown() {
    let mut manager = InputManager::new();
    let path = Path::new("tests/fixtures/sample_resume.md");

    let text = manager.extract_text(path).await.unwrap();
    assert!(text.contains("Jane Roe"));
    assert!(text.contains("Data Analyst"));
    assert!(text.contains("pandas"));
    // Should not contain markdown formatting
    assert!(!text.contains("**"));
    assert!(!text.contains("##"));
}

#[tokio::test]
async fn test_text_extraction_from_docx() {
    let mut manager = InputManager::new();
    let text = manager
        .extract_text(Path::new("tests/fixtures/sample_resume.docx"))
        .await
        .unwrap();

    assert!(text.contains("Jane Roe Data Analyst"));
    assert!(text.contains("pandas"));
    assert!(!text.contains('\n'));
}

#[tokio::test]
async fn test_docx_resume_matches_plain_text_resume() {
    let mut manager = InputManager::new();
    let docx = manager
        .extract_text(Path::new("tests/fixtures/sample_resume.docx"))
        .await
        .unwrap();
    let txt = manager
        .extract_text(Path::new("tests/fixtures/sample_resume.txt"))
        .await
        .unwrap();
    let corpus = load_corpus_dir(Path::new(JOBS_DIR), &mut manager).await.unwrap();

    let engine = MatchEngine::new();
    let from_docx = engine.analyze(&docx, &corpus).unwrap();
    let from_txt = engine.analyze(&txt, &corpus).unwrap();

    assert_eq!(from_docx.best.id, "jd_data_analyst.txt");
    assert_eq!(from_docx.matched_skills, from_txt.matched_skills);
    assert!((from_docx.best.score - from_txt.best.score).abs() < 1e-12);
}

#[tokio::test]
async fn test_caching_functionality() {
    let mut manager = InputManager::new();
    let path = Path::new("tests/fixtures/sample_resume.txt");

    let text1 = manager.extract_text(path).await.unwrap();
    assert_eq!(manager.cache_size(), 1);

    let text2 = manager.extract_text(path).await.unwrap();
    assert_eq!(text1, text2);
    assert_eq!(manager.cache_size(), 1);

    manager.clear_cache();
    assert_eq!(manager.cache_size(), 0);
}

#[tokio::test]
async fn test_unsupported_file_type() {
    let mut manager = InputManager::new();
    let result = manager.extract_text(Path::new("tests/fixtures/unsupported.xyz")).await;
    assert!(matches!(result, Err(JobFitError::UnsupportedFormat(_))));
}

#[tokio::test]
async fn test_nonexistent_file() {
    let mut manager = InputManager::new();
    let result = manager.extract_text(Path::new("tests/fixtures/nonexistent.txt")).await;
    assert!(matches!(result, Err(JobFitError::InvalidInput(_))));
}

#[tokio::test]
async fn test_resume_against_fixture_corpus() {
    let mut manager = InputManager::new();
    let resume = manager
        .extract_text(Path::new("tests/fixtures/sample_resume.txt"))
        .await
        .unwrap();
    let corpus = load_corpus_dir(Path::new(JOBS_DIR), &mut manager).await.unwrap();
    assert_eq!(corpus.len(), 4);

    let report = MatchEngine::new().analyze(&resume, &corpus).unwrap();

    assert_eq!(report.rankings.len(), 4);
    assert_eq!(report.best.id, "jd_data_analyst.txt");
    assert_eq!(report.alternative.as_ref().unwrap().id, "jd_sales_rep.txt");
    assert!(report.rankings.windows(2).all(|w| w[0].score >= w[1].score));
    assert_eq!(report.rankings.last().unwrap().id, "jd_hr_coordinator.txt");
    assert_eq!(report.rankings.last().unwrap().score, 0.0);

    let matched: Vec<&str> = report.matched_skills.iter().map(String::as_str).collect();
    let missing: Vec<&str> = report.missing_skills.iter().map(String::as_str).collect();
    assert_eq!(matched, vec!["excel", "numpy", "pandas", "python", "sql"]);
    assert_eq!(missing, vec!["documentation", "statistics"]);
    assert_eq!(report.fit, FitLabel::Medium);
}

#[test]
fn test_end_to_end_two_role_scenario() {
    let corpus = Corpus::from_pairs([
        ("jd_data_analyst", "python sql pandas excel statistics"),
        ("jd_sales_rep", "sales negotiation crm communication"),
    ])
    .unwrap();

    let report = MatchEngine::new()
        .analyze("Python SQL pandas experience", &corpus)
        .unwrap();

    let alternative = report.alternative.clone().unwrap();
    assert_eq!(report.best.id, "jd_data_analyst");
    assert_eq!(alternative.id, "jd_sales_rep");
    assert!(report.best.score > alternative.score);
    assert_eq!(alternative.score, 0.0);
    assert!(["python", "sql", "pandas"].iter().all(|s| report.matched_skills.contains(*s)));
    assert!(["excel", "statistics"].iter().all(|s| report.missing_skills.contains(*s)));
    // score is about 0.54 with smoothed idf
    assert_eq!(report.fit, FitLabel::Medium);
}

#[test]
fn test_self_similarity_reaches_ceiling() {
    let text = "Backend engineer: Java, SQL, database tuning, API design and deployment.";
    let corpus = Corpus::from_pairs([
        ("jd_copy.txt", text),
        ("jd_other.txt", "recruitment talent hr coordination"),
    ])
    .unwrap();

    let report = MatchEngine::new().analyze(text, &corpus).unwrap();
    assert_eq!(report.best.id, "jd_copy.txt");
    assert!((report.best.score - 1.0).abs() < 1e-9);
    assert_eq!(report.fit, FitLabel::Strong);
}

#[test]
fn test_empty_corpus_scenario() {
    let result = MatchEngine::new().analyze("Python SQL", &Corpus::new());
    assert!(matches!(result, Err(JobFitError::EmptyCorpus)));
}

#[tokio::test]
async fn test_config_driven_engine_with_corpus_order_ties() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("config.toml");

    let mut config = Config::default();
    config.matching.tie_break = TieBreak::CorpusOrder;
    config.matching.require_alternative = false;
    config.save_to(&config_path).unwrap();

    let config = Config::load_from(&config_path).unwrap();
    let engine = MatchEngine::from_config(&config).unwrap();

    // nothing in the resume overlaps any document, so every score ties at 0
    let corpus = Corpus::from_pairs([
        ("jd_zeta.txt", "sales crm"),
        ("jd_alpha.txt", "hr talent"),
    ])
    .unwrap();
    let report = engine.analyze("gardening", &corpus).unwrap();
    let ids: Vec<&str> = report.rankings.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, vec!["jd_zeta.txt", "jd_alpha.txt"]);

    let single = Corpus::from_pairs([("jd_only.txt", "python")]).unwrap();
    let report = engine.analyze("python", &single).unwrap();
    assert!(report.alternative.is_none());
}

#[tokio::test]
async fn test_rendered_report_from_fixtures() {
    let mut manager = InputManager::new();
    let resume = manager
        .extract_text(Path::new("tests/fixtures/sample_resume.md"))
        .await
        .unwrap();
    let corpus = load_corpus_dir(Path::new(JOBS_DIR), &mut manager).await.unwrap();
    let result = MatchEngine::new().analyze(&resume, &corpus).unwrap();

    let report = FitReport::new(result, "tests/fixtures/sample_resume.md", JOBS_DIR);
    let generator = ReportGenerator::with_options(false, true, true, true);

    let console = generator
        .generate_report(&report, &job_fit_analyzer::config::OutputFormat::Console)
        .unwrap();
    assert!(console.contains("Data Analyst"));
    assert!(console.contains("5 / 7 skills matched"));
    assert!(console.contains("Medium Fit"));
    assert!(console.contains("Alternative Suitable Role"));

    let json = generator
        .generate_report(&report, &job_fit_analyzer::config::OutputFormat::Json)
        .unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["result"]["fit"], "Medium");
    assert_eq!(value["ranking"].as_array().unwrap().len(), 4);
}
