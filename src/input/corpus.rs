//! Loading the job description corpus from a directory

use crate::error::{JobFitError, Result};
use crate::input::manager::InputManager;
use crate::processing::document::{Corpus, Document};
use log::{info, warn};
use std::path::{Path, PathBuf};
use tokio::fs;

/// Read every supported file in `dir` into a [`Corpus`].
///
/// The file name is the document identifier. Files are ordered by name so
/// the corpus order does not depend on how the platform enumerates the
/// directory. Unsupported files and subdirectories are skipped.
pub async fn load_corpus_dir(dir: &Path, input_manager: &mut InputManager) -> Result<Corpus> {
    if !dir.is_dir() {
        return Err(JobFitError::InvalidInput(format!(
            "Job description directory does not exist: {}",
            dir.display()
        )));
    }

    let mut entries = fs::read_dir(dir).await?;
    let mut paths: Vec<(String, PathBuf)> = Vec::new();

    while let Some(entry) = entries.next_entry().await? {
        let path = entry.path();
        if !entry.file_type().await?.is_file() {
            continue;
        }

        let supported = InputManager::detect_file_type(&path)
            .map(|file_type| file_type.is_supported())
            .unwrap_or(false);
        if !supported {
            warn!("Skipping unsupported job description file: {}", path.display());
            continue;
        }

        let file_name = entry.file_name().to_string_lossy().to_string();
        paths.push((file_name, path));
    }

    paths.sort_by(|a, b| a.0.cmp(&b.0));

    let mut corpus = Corpus::new();
    for (file_name, path) in paths {
        let text = input_manager.extract_text(&path).await?;
        corpus.push(Document::new(file_name, text))?;
    }

    info!("Loaded {} job descriptions from {}", corpus.len(), dir.display());
    Ok(corpus)
}
