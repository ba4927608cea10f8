//! Axum route handlers for the Screening API.

use axum::extract::{Multipart, State};
use axum::Json;
use serde::Serialize;
use tracing::{info, warn};

use crate::errors::AppError;
use crate::screening::rank::{screen_resumes, RankedResume, ResumeText};
use crate::screening::skills::SKILL_VOCABULARY;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Response types
// ────────────────────────────────────────────────────────────────────────────

/// One ranked row as rendered to clients: score rounded to two decimals,
/// skill sets comma-joined with a "None" sentinel when empty.
#[derive(Debug, Serialize)]
pub struct ScreeningRow {
    pub resume: String,
    pub score: f64,
    pub matched_skills: String,
    pub missing_skills: String,
}

/// A resume excluded from the run because extraction yielded no usable text.
#[derive(Debug, Serialize)]
pub struct SkippedResume {
    pub resume: String,
    pub reason: String,
}

#[derive(Debug, Serialize)]
pub struct ScreeningResponse {
    pub rankings: Vec<ScreeningRow>,
    pub skipped: Vec<SkippedResume>,
}

#[derive(Debug, Serialize)]
pub struct SkillListResponse {
    pub skills: Vec<&'static str>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/skills
/// The fixed skill vocabulary, for clients that render skill chips.
pub async fn handle_list_skills() -> Json<SkillListResponse> {
    Json(SkillListResponse {
        skills: SKILL_VOCABULARY.to_vec(),
    })
}

/// POST /api/v1/screenings
///
/// Multipart form: `job_description` (text, required), `include_skills`
/// (text "true"/"false", optional, default true), `resumes` (file,
/// repeatable). Files are extracted sequentially in upload order; a file
/// that yields no usable text is skipped and reported, never ranked.
pub async fn handle_screen_resumes(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<ScreeningResponse>, AppError> {
    let mut job_description: Option<String> = None;
    let mut include_skills = true;
    let mut resumes: Vec<ResumeText> = Vec::new();
    let mut skipped: Vec<SkippedResume> = Vec::new();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("malformed multipart request: {e}")))?
    {
        // Copy the field name out before consuming the field body.
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "job_description" => {
                job_description = Some(field.text().await.map_err(|e| {
                    AppError::Validation(format!("unreadable job_description field: {e}"))
                })?);
            }
            "include_skills" => {
                let raw = field.text().await.map_err(|e| {
                    AppError::Validation(format!("unreadable include_skills field: {e}"))
                })?;
                include_skills = raw.trim().parse::<bool>().map_err(|_| {
                    AppError::Validation(format!(
                        "include_skills must be \"true\" or \"false\", got \"{raw}\""
                    ))
                })?;
            }
            "resumes" => {
                let filename = field.file_name().unwrap_or("resume.pdf").to_string();
                let bytes = field.bytes().await.map_err(|e| {
                    AppError::Validation(format!("unreadable upload \"{filename}\": {e}"))
                })?;
                match state.extractor.extract(&filename, bytes).await {
                    Ok(text) if !text.trim().is_empty() => {
                        resumes.push(ResumeText { filename, text });
                    }
                    Ok(_) => {
                        warn!("No text extracted from {filename}, skipping");
                        skipped.push(SkippedResume {
                            resume: filename,
                            reason: "no extractable text".to_string(),
                        });
                    }
                    Err(e) => {
                        warn!("Extraction failed for {filename}: {e}");
                        skipped.push(SkippedResume {
                            resume: filename,
                            reason: e.to_string(),
                        });
                    }
                }
            }
            _ => {} // unknown fields are ignored
        }
    }

    // A missing field is a malformed request; a present-but-blank job
    // description is an empty corpus, classified by the pipeline itself.
    let job_description = job_description.ok_or_else(|| {
        AppError::Validation("job_description field is required".to_string())
    })?;
    if resumes.is_empty() && skipped.is_empty() {
        return Err(AppError::Validation(
            "at least one resume upload is required".to_string(),
        ));
    }
    if resumes.is_empty() {
        return Err(AppError::EmptyCorpus(format!(
            "no resume produced usable text ({} skipped)",
            skipped.len()
        )));
    }

    let rankings = screen_resumes(&job_description, &resumes, include_skills)?;
    info!(
        "Ranked {} resumes ({} skipped, skill matching {})",
        rankings.len(),
        skipped.len(),
        if include_skills { "on" } else { "off" }
    );

    Ok(Json(ScreeningResponse {
        rankings: rankings.into_iter().map(into_row).collect(),
        skipped,
    }))
}

fn into_row(ranked: RankedResume) -> ScreeningRow {
    ScreeningRow {
        resume: ranked.filename,
        score: round2(ranked.score),
        matched_skills: join_or_none(&ranked.matched_skills),
        missing_skills: join_or_none(&ranked.missing_skills),
    }
}

/// Display rounding only — the core keeps full precision and rows are
/// already sorted before rounding can introduce ties.
fn round2(score: f64) -> f64 {
    (score * 100.0).round() / 100.0
}

fn join_or_none(skills: &[&str]) -> String {
    if skills.is_empty() {
        "None".to_string()
    } else {
        skills.join(", ")
    }
}
