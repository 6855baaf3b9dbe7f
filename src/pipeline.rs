// src/pipeline.rs
//! Request-scoped generation pipeline: enhance the free-text fields one by
//! one, assemble the final record, render it, derive the download filename.

use anyhow::{Context, Result};
use tracing::info;

use crate::enhancer::{ContentType, Enhance, Enhancement};
use crate::renderer;
use crate::types::resume::ResumeRecord;
use crate::utils::download_filename;

/// Result of one successful generation request.
pub struct GeneratedResume {
    pub pdf: Vec<u8>,
    pub filename: String,
    pub resume: ResumeRecord,
}

/// Run the submitted record through the enhancer, field by field,
/// sequentially and in input order.
///
/// Summary and skills are replaced in place when enhancement succeeds.
/// Experience descriptions keep the raw text and store the rewrite in
/// `enhanced_description`, so the renderer can prefer it while the original
/// stays available. Failed enhancements leave every field untouched.
pub async fn build_resume(mut record: ResumeRecord, enhancer: &dyn Enhance) -> ResumeRecord {
    record.summary = enhancer
        .enhance(&record.summary, ContentType::ProfessionalSummary)
        .await
        .into_text();

    for experience in &mut record.experiences {
        if experience.description.trim().is_empty() {
            continue;
        }
        match enhancer
            .enhance(&experience.description, ContentType::JobDescription)
            .await
        {
            Enhancement::Enhanced(text) => experience.enhanced_description = Some(text),
            Enhancement::Original { .. } => experience.enhanced_description = None,
        }
    }

    record.skills = enhancer
        .enhance(&record.skills, ContentType::Skills)
        .await
        .into_text();

    record
}

/// Full pipeline for one submission. Enhancement failures are absorbed by
/// the enhancer itself; only rendering can fail, and that error aborts the
/// whole request without producing a partial document.
pub async fn generate(record: ResumeRecord, enhancer: &dyn Enhance) -> Result<GeneratedResume> {
    let resume = build_resume(record, enhancer).await;

    let pdf = renderer::render(&resume).context("Failed to render resume PDF")?;
    let filename = download_filename(&resume.personal_info.name);

    info!(
        "Generated resume PDF ({} bytes) as {}",
        pdf.len(),
        filename
    );

    Ok(GeneratedResume {
        pdf,
        filename,
        resume,
    })
}
