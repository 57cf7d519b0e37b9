//! Text extraction from various file formats

use crate::error::{JobFitError, Result};
use docx_rs::{DocumentChild, ParagraphChild, RunChild};
use pulldown_cmark::{html, Parser};
use regex::Regex;
use std::path::Path;
use tokio::fs;

pub trait TextExtractor {
    fn extract(&self, path: &Path) -> impl std::future::Future<Output = Result<String>> + Send;
}

pub struct PdfExtractor;

impl TextExtractor for PdfExtractor {
    async fn extract(&self, path: &Path) -> Result<String> {
        let bytes = fs::read(path).await?;

        let text = pdf_extract::extract_text_from_mem(&bytes).map_err(|e| {
            JobFitError::PdfExtraction(format!("Failed to extract text from PDF '{}': {}", path.display(), e))
        })?;
        Ok(text)
    }
}

pub struct DocxExtractor;

impl TextExtractor for DocxExtractor {
    async fn extract(&self, path: &Path) -> Result<String> {
        let bytes = fs::read(path).await?;
        docx_to_text(&bytes).map_err(|e| match e {
            JobFitError::DocxExtraction(msg) => {
                JobFitError::DocxExtraction(format!("'{}': {}", path.display(), msg))
            }
            other => other,
        })
    }
}

/// Text of the top-level body paragraphs, joined with single spaces
pub fn docx_to_text(bytes: &[u8]) -> Result<String> {
    let docx = docx_rs::read_docx(bytes)
        .map_err(|e| JobFitError::DocxExtraction(format!("Failed to read document: {}", e)))?;

    let paragraphs: Vec<String> = docx
        .document
        .children
        .iter()
        .filter_map(|child| match child {
            DocumentChild::Paragraph(paragraph) => Some(paragraph),
            _ => None,
        })
        .map(|paragraph| {
            let mut text = String::new();
            for child in &paragraph.children {
                if let ParagraphChild::Run(run) = child {
                    for run_child in &run.children {
                        match run_child {
                            RunChild::Text(t) => text.push_str(&t.text),
                            RunChild::Tab(_) => text.push(' '),
                            _ => {}
                        }
                    }
                }
            }
            text
        })
        .collect();

    Ok(paragraphs.join(" "))
}

pub struct PlainTextExtractor;

impl TextExtractor for PlainTextExtractor {
    async fn extract(&self, path: &Path) -> Result<String> {
        let content = fs::read_to_string(path).await?;
        Ok(content)
    }
}

pub struct MarkdownExtractor;

impl TextExtractor for MarkdownExtractor {
    async fn extract(&self, path: &Path) -> Result<String> {
        let markdown_content = fs::read_to_string(path).await?;
        markdown_to_text(&markdown_content)
    }
}

/// Render markdown to HTML and strip the tags, one trimmed line per block
pub fn markdown_to_text(markdown: &str) -> Result<String> {
    let parser = Parser::new(markdown);
    let mut html_output = String::new();
    html::push_html(&mut html_output, parser);

    let text = html_output
        .replace("<br>", "\n")
        .replace("</p>", "\n\n")
        .replace("&nbsp;", " ")
        .replace("&amp;", "&")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'");

    let tag_regex = Regex::new(r"<[^>]*>")
        .map_err(|e| JobFitError::InvalidInput(format!("Invalid tag regex: {}", e)))?;
    let clean_text = tag_regex.replace_all(&text, "");

    let lines: Vec<&str> = clean_text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();

    Ok(lines.join("\n"))
}
