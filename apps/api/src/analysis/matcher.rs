//! Keyword matcher — the résumé vs job-description overlap analysis.
//!
//! Pure and deterministic: normalize both texts, weigh the shared vocabulary,
//! rank the job description's terms. Nothing is retained between calls.

use crate::analysis::normalize::normalize;
use crate::analysis::report::{build_report, AnalysisReport};
use crate::analysis::weighting::weigh;

/// Scores how well `resume` covers the keywords of `job_desc`.
pub fn analyze(resume: &str, job_desc: &str) -> AnalysisReport {
    let resume_normalized = normalize(resume);
    let job_normalized = normalize(job_desc);
    let weights = weigh(&resume_normalized, &job_normalized);
    build_report(&weights)
}
