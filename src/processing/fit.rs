//! Qualitative fit bands derived from a similarity score

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FitLabel {
    Strong,
    Medium,
    Low,
}

impl FitLabel {
    pub fn recommendation(&self) -> &'static str {
        match self {
            FitLabel::Strong => "Strong fit. You are well aligned with this role.",
            FitLabel::Medium | FitLabel::Low => {
                "Partial fit. Consider upskilling in the missing areas before applying."
            }
        }
    }
}

impl fmt::Display for FitLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            FitLabel::Strong => "Strong Fit",
            FitLabel::Medium => "Medium Fit",
            FitLabel::Low => "Low Fit",
        };
        write!(f, "{}", label)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct FitClassifier {
    strong_threshold: f64,
    medium_threshold: f64,
}

impl Default for FitClassifier {
    fn default() -> Self {
        Self::new(0.65, 0.40)
    }
}

impl FitClassifier {
    pub fn new(strong_threshold: f64, medium_threshold: f64) -> Self {
        Self {
            strong_threshold,
            medium_threshold,
        }
    }

    /// Total over all inputs; NaN falls through to `Low`
    pub fn classify(&self, score: f64) -> FitLabel {
        if score >= self.strong_threshold {
            FitLabel::Strong
        } else if score >= self.medium_threshold {
            FitLabel::Medium
        } else {
            FitLabel::Low
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_band_boundaries() {
        let classifier = FitClassifier::default();
        assert_eq!(classifier.classify(1.0), FitLabel::Strong);
        assert_eq!(classifier.classify(0.65), FitLabel::Strong);
        assert_eq!(classifier.classify(0.6499), FitLabel::Medium);
        assert_eq!(classifier.classify(0.40), FitLabel::Medium);
        assert_eq!(classifier.classify(0.3999), FitLabel::Low);
        assert_eq!(classifier.classify(0.0), FitLabel::Low);
    }

    #[test]
    fn test_nan_is_low() {
        assert_eq!(FitClassifier::default().classify(f64::NAN), FitLabel::Low);
    }

    #[test]
    fn test_custom_thresholds() {
        let classifier = FitClassifier::new(0.5, 0.2);
        assert_eq!(classifier.classify(0.55), FitLabel::Strong);
        assert_eq!(classifier.classify(0.25), FitLabel::Medium);
    }

    #[test]
    fn test_labels_and_recommendations() {
        assert_eq!(FitLabel::Strong.to_string(), "Strong Fit");
        assert_eq!(FitLabel::Low.to_string(), "Low Fit");
        assert!(FitLabel::Strong.recommendation().starts_with("Strong fit"));
        assert_eq!(FitLabel::Medium.recommendation(), FitLabel::Low.recommendation());
    }
}
