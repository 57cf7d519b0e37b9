//! Job fit analyzer library
//!
//! Ranks a corpus of job descriptions against a resume with TF-IDF cosine
//! similarity and reports the skill gap against the best match.

pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod output;
pub mod processing;

pub use config::Config;
pub use error::{JobFitError, Result};
pub use processing::analyzer::{MatchEngine, MatchReport};
pub use processing::document::{Corpus, Document};
