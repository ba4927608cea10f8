//! Screening pipeline — scores each resume against the job description and
//! assembles the ordered result rows.

use std::cmp::Ordering;

use serde::Serialize;

use crate::errors::AppError;
use crate::screening::scoring::cosine_similarity;
use crate::screening::skills::extract_skills;
use crate::screening::vectorize::build_term_space;

/// One resume that survived text extraction.
#[derive(Debug, Clone)]
pub struct ResumeText {
    pub filename: String,
    pub text: String,
}

/// A single ranked row: relevance score plus the skill-gap comparison
/// against the job description.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedResume {
    pub filename: String,
    pub score: f64,
    pub matched_skills: Vec<&'static str>,
    pub missing_skills: Vec<&'static str>,
}

/// Ranks `resumes` against `job_description` by TF-IDF cosine relevance.
///
/// Skill matching is a composable enrichment stage: with `include_skills`
/// unset the matched/missing columns stay empty and the scores are
/// byte-identical to an enriched run. Rows come back sorted by score
/// descending; ties keep upload order.
pub fn screen_resumes(
    job_description: &str,
    resumes: &[ResumeText],
    include_skills: bool,
) -> Result<Vec<RankedResume>, AppError> {
    if job_description.trim().is_empty() {
        return Err(AppError::EmptyCorpus("job description is empty".to_string()));
    }
    if resumes.is_empty() {
        return Err(AppError::EmptyCorpus(
            "no resume produced usable text".to_string(),
        ));
    }

    let texts: Vec<&str> = resumes.iter().map(|r| r.text.as_str()).collect();
    let space = build_term_space(job_description, &texts)?;

    let scores: Vec<f64> = space
        .document_vectors
        .iter()
        .map(|v| cosine_similarity(&space.query_vector, v).clamp(0.0, 1.0))
        .collect();

    // Skills required by the job description. A JD with no recognized
    // skills yields empty matched/missing sets everywhere — not an error.
    let required = if include_skills {
        extract_skills(job_description)
    } else {
        Vec::new()
    };

    let (matched, missing): (Vec<_>, Vec<_>) = resumes
        .iter()
        .map(|resume| {
            if required.is_empty() {
                return (Vec::new(), Vec::new());
            }
            let found = extract_skills(&resume.text);
            let matched: Vec<&'static str> = required
                .iter()
                .copied()
                .filter(|s| found.contains(s))
                .collect();
            let missing: Vec<&'static str> = required
                .iter()
                .copied()
                .filter(|s| !found.contains(s))
                .collect();
            (matched, missing)
        })
        .unzip();

    Ok(assemble(resumes, scores, matched, missing))
}

/// Zips the positionally-aligned per-resume sequences into rows and sorts by
/// score descending. `Vec::sort_by` is stable, so equal scores keep their
/// upload order.
fn assemble(
    resumes: &[ResumeText],
    scores: Vec<f64>,
    matched: Vec<Vec<&'static str>>,
    missing: Vec<Vec<&'static str>>,
) -> Vec<RankedResume> {
    let mut rows: Vec<RankedResume> = resumes
        .iter()
        .zip(scores)
        .zip(matched.into_iter().zip(missing))
        .map(|((resume, score), (matched_skills, missing_skills))| RankedResume {
            filename: resume.filename.clone(),
            score,
            matched_skills,
            missing_skills,
        })
        .collect();

    rows.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
    rows
}
