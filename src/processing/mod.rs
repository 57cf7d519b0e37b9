//! Matching core: normalization, vector space ranking, skills and fit bands

pub mod analyzer;
pub mod document;
pub mod fit;
pub mod ranker;
pub mod skills;
pub mod stopwords;
pub mod text_processor;
pub mod vector_space;
