//! job-fit: rank job descriptions against a resume and report skill gaps

use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use job_fit_analyzer::cli::{self, Cli, Commands, ConfigAction};
use job_fit_analyzer::input::{corpus::load_corpus_dir, InputManager};
use job_fit_analyzer::output::formatter::{resolve_save_path, save_report_to_file};
use job_fit_analyzer::output::{FitReport, ReportGenerator};
use job_fit_analyzer::{Config, JobFitError, MatchEngine, Result};
use log::{error, info};
use std::path::{Path, PathBuf};
use std::process;
use std::time::Duration;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let config = match load_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = run_command(cli.command, config, cli.config).await {
        error!("Command failed: {}", e);
        process::exit(1);
    }
}

fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
}

fn spinner(message: &str) -> ProgressBar {
    let bar = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::with_template("{spinner:.green} {msg}") {
        bar.set_style(style);
    }
    bar.set_message(message.to_string());
    bar.enable_steady_tick(Duration::from_millis(100));
    bar
}

async fn run_command(command: Commands, mut config: Config, config_path: Option<PathBuf>) -> Result<()> {
    match command {
        Commands::Analyze {
            resume,
            jobs,
            output,
            detailed,
            save,
            allow_single,
            no_color,
        } => {
            cli::validate_file_extension(&resume, cli::RESUME_EXTENSIONS)
                .map_err(|e| JobFitError::InvalidInput(format!("Resume file: {}", e)))?;

            let output_format = match output {
                Some(format) => cli::parse_output_format(&format).map_err(JobFitError::InvalidInput)?,
                None => config.output.format,
            };
            if allow_single {
                config.matching.require_alternative = false;
            }
            let jobs_dir = jobs.unwrap_or_else(|| config.jobs_dir().clone());

            let engine = MatchEngine::from_config(&config)?;
            let mut input_manager = InputManager::new();

            let progress = spinner("Analyzing resume...");
            let outcome = async {
                let resume_text = input_manager.extract_text(&resume).await?;
                let corpus = load_corpus_dir(&jobs_dir, &mut input_manager).await?;
                engine.analyze(&resume_text, &corpus)
            }
            .await;
            progress.finish_and_clear();
            let result = outcome?;

            let report = FitReport::new(
                result,
                &resume.to_string_lossy(),
                &jobs_dir.to_string_lossy(),
            );

            let use_colors = config.output.color_output && !no_color && save.is_none();
            let generator = ReportGenerator::with_options(
                use_colors,
                detailed || config.output.detailed,
                true,
                true,
            );
            let rendered = generator.generate_report(&report, &output_format)?;

            match save {
                Some(target) => {
                    let path = resolve_save_path(&target, &output_format, &resume.to_string_lossy());
                    save_report_to_file(&rendered, &path)?;
                    info!("Report saved to {}", path.display());
                    println!("✅ Report saved to {}", path.display());
                }
                None => println!("{}", rendered),
            }
        }

        Commands::Skills => {
            let engine = MatchEngine::from_config(&config)?;
            println!("🧰 Skill vocabulary ({} terms)\n", engine.skill_extractor().skill_count());
            for skill in engine.skill_extractor().vocabulary() {
                println!("  • {}", skill);
            }
        }

        Commands::Config { action } => {
            let path = config_path.unwrap_or_else(Config::config_path);
            match action {
                Some(ConfigAction::Show) | None => {
                    println!("⚙️  Current Configuration\n");
                    println!("Job Descriptions: {}", config.jobs_dir().display());
                    println!("\nMatching:");
                    println!("  Strong fit from: {:.1}%", config.matching.strong_threshold * 100.0);
                    println!("  Medium fit from: {:.1}%", config.matching.medium_threshold * 100.0);
                    println!("  Minimum term length: {}", config.matching.min_term_length);
                    println!("  Tie break: {:?}", config.matching.tie_break);
                    println!("  Require alternative: {}", config.matching.require_alternative);
                    println!("\nVocabulary:");
                    println!("  Skills: {}", config.vocabulary.skills.len());
                    println!("  Extra stopwords: {}", config.vocabulary.extra_stopwords.len());
                    println!("\nOutput Format: {:?}", config.output.format);
                }

                Some(ConfigAction::Path) => {
                    println!("{}", path.display());
                }

                Some(ConfigAction::Reset) => {
                    println!("🔄 Resetting configuration to defaults...");
                    Config::default().save_to(&path)?;
                    println!("✅ Configuration reset: {}", path.display());
                }
            }
        }
    }

    Ok(())
}
