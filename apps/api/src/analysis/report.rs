//! Report building — ranks the job description's weighted terms and measures
//! how many of them the résumé covers.

use serde::{Deserialize, Serialize};

use crate::analysis::weighting::TermWeight;

/// A single job-description keyword with its importance and résumé coverage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeywordEntry {
    pub keyword: String,
    pub in_resume: bool,
    /// Job-description weight rounded to 4 decimals.
    pub importance: f64,
}

/// Full keyword-overlap report returned to callers.
///
/// `missing_keywords` is exactly the `in_resume == false` subset of
/// `suggestions`, in the same order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub match_percentage: f64, // 0 – 100
    pub total_keywords: usize,
    pub missing_keywords: Vec<String>,
    pub suggestions: Vec<KeywordEntry>, // importance descending
}

impl AnalysisReport {
    pub fn empty() -> Self {
        AnalysisReport {
            match_percentage: 0.0,
            total_keywords: 0,
            missing_keywords: vec![],
            suggestions: vec![],
        }
    }
}

/// Builds the report from per-term weights.
///
/// Terms the job description does not weigh are dropped. The sort is stable,
/// so equal importances keep the vocabulary order.
pub fn build_report(weights: &[TermWeight]) -> AnalysisReport {
    let mut suggestions: Vec<KeywordEntry> = weights
        .iter()
        .filter(|w| w.job_desc > 0.0)
        .map(|w| KeywordEntry {
            keyword: w.term.clone(),
            in_resume: w.resume > 0.0,
            importance: round_to(w.job_desc, 4),
        })
        .collect();

    if suggestions.is_empty() {
        return AnalysisReport::empty();
    }

    suggestions.sort_by(|a, b| b.importance.total_cmp(&a.importance));

    let missing_keywords: Vec<String> = suggestions
        .iter()
        .filter(|s| !s.in_resume)
        .map(|s| s.keyword.clone())
        .collect();

    let total_keywords = suggestions.len();
    let match_percentage = round_to(
        100.0 * (1.0 - missing_keywords.len() as f64 / total_keywords as f64),
        2,
    );

    AnalysisReport {
        match_percentage,
        total_keywords,
        missing_keywords,
        suggestions,
    }
}

/// Rounds `value` to `places` decimal places, halves away from zero.
pub fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10_f64.powi(places);
    (value * factor).round() / factor
}
