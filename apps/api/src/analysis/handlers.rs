//! Axum route handlers for the Analysis API.

use axum::{
    body::Bytes,
    extract::{
        multipart::{MultipartError, MultipartRejection},
        rejection::BytesRejection,
        Multipart,
    },
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use tracing::{debug, info};

use crate::analysis::ats::{quick_score, AtsReport};
use crate::analysis::matcher::analyze;
use crate::analysis::report::AnalysisReport;
use crate::analysis::upload::resume_text_from_upload;
use crate::errors::AppError;

const NO_INPUT: &str = "No input data provided";
const EMPTY_TEXTS: &str = "Resume and job description cannot be empty";
const EMPTY_ROLE_TEXTS: &str = "Resume and job role cannot be empty";

// ────────────────────────────────────────────────────────────────────────────
// Request types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    #[serde(default)]
    pub resume: Option<String>,
    #[serde(default)]
    pub job_desc: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct AtsScoreRequest {
    #[serde(default)]
    pub resume: Option<String>,
    #[serde(default)]
    pub job_role: Option<String>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /analyze
///
/// Scores résumé keyword coverage against a job description.
/// The body is parsed by hand so a missing or malformed body maps to a 400
/// with an `error` field instead of the extractor's plain-text rejection.
pub async fn handle_analyze(
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<AnalysisReport>, AppError> {
    let request: AnalyzeRequest = parse_json_body(&body?)?;
    if request.resume.is_none() && request.job_desc.is_none() {
        return Err(AppError::Validation(NO_INPUT.to_string()));
    }

    let resume = require_text(request.resume.as_deref(), EMPTY_TEXTS)?;
    let job_desc = require_text(request.job_desc.as_deref(), EMPTY_TEXTS)?;

    Ok(Json(run_analysis(resume, job_desc)))
}

/// POST /analyze/upload
///
/// Multipart variant of `/analyze`: `resume` is a PDF or text file,
/// `job_desc` a text field. Unknown fields are ignored.
pub async fn handle_analyze_upload(
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<AnalysisReport>, AppError> {
    let mut multipart = multipart?;
    let mut resume_file: Option<Vec<u8>> = None;
    let mut job_desc: Option<String> = None;

    while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "resume" => {
                let file_name = field.file_name().map(str::to_string);
                let bytes = field.bytes().await.map_err(multipart_error)?;
                debug!(file_name = ?file_name, size = bytes.len(), "Received resume upload");
                resume_file = Some(bytes.to_vec());
            }
            "job_desc" => job_desc = Some(field.text().await.map_err(multipart_error)?),
            _ => {}
        }
    }

    if resume_file.is_none() && job_desc.is_none() {
        return Err(AppError::Validation(NO_INPUT.to_string()));
    }

    let job_desc = require_text(job_desc.as_deref(), EMPTY_TEXTS)?;
    let resume_bytes = resume_file
        .filter(|bytes| !bytes.is_empty())
        .ok_or_else(|| AppError::Validation(EMPTY_TEXTS.to_string()))?;

    let resume_text = resume_text_from_upload(resume_bytes).await?;
    let resume = require_text(Some(resume_text.as_str()), EMPTY_TEXTS)?;

    Ok(Json(run_analysis(resume, job_desc)))
}

/// POST /ats-score
///
/// Unweighted overlap between the résumé and a short job role, plus the
/// projects-section score for the detected role family.
pub async fn handle_ats_score(
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<AtsReport>, AppError> {
    let request: AtsScoreRequest = parse_json_body(&body?)?;
    if request.resume.is_none() && request.job_role.is_none() {
        return Err(AppError::Validation(NO_INPUT.to_string()));
    }

    let resume = require_text(request.resume.as_deref(), EMPTY_ROLE_TEXTS)?;
    let job_role = require_text(request.job_role.as_deref(), EMPTY_ROLE_TEXTS)?;

    let report = quick_score(resume, job_role);
    info!(
        score = report.score,
        project_score = report.project_score,
        role = ?report.role,
        "ATS quick score computed"
    );

    Ok(Json(report))
}

// ────────────────────────────────────────────────────────────────────────────
// Helpers
// ────────────────────────────────────────────────────────────────────────────

fn run_analysis(resume: &str, job_desc: &str) -> AnalysisReport {
    let report = analyze(resume, job_desc);
    info!(
        total_keywords = report.total_keywords,
        missing = report.missing_keywords.len(),
        match_percentage = report.match_percentage,
        "Keyword analysis complete"
    );
    report
}

/// Parses a JSON object body. Empty bodies and a literal `null` count as no input.
fn parse_json_body<T>(body: &[u8]) -> Result<T, AppError>
where
    T: serde::de::DeserializeOwned,
{
    if body.iter().all(u8::is_ascii_whitespace) {
        return Err(AppError::Validation(NO_INPUT.to_string()));
    }

    serde_json::from_slice::<Option<T>>(body)
        .map_err(|e| AppError::Validation(format!("Invalid JSON body: {e}")))?
        .ok_or_else(|| AppError::Validation(NO_INPUT.to_string()))
}

/// Returns the text if it has any non-whitespace content.
fn require_text<'a>(value: Option<&'a str>, message: &str) -> Result<&'a str, AppError> {
    value
        .filter(|text| !text.trim().is_empty())
        .ok_or_else(|| AppError::Validation(message.to_string()))
}

fn multipart_error(err: MultipartError) -> AppError {
    if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::PayloadTooLarge("Upload exceeds the configured size limit".to_string())
    } else {
        AppError::Validation(format!("Invalid multipart body: {}", err.body_text()))
    }
}
