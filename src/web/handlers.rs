// src/web/handlers.rs
//! Resume generation and enhancement-preview handlers

use rocket::serde::json::Json;
use rocket::State;
use tracing::{error, info};

use crate::enhancer::ContentEnhancer;
use crate::pipeline;
use crate::types::resume::ResumeRecord;
use crate::web::types::{
    DataResponse, EnhancedContent, EnhancedExperience, PdfResponse, StandardErrorResponse,
    StandardRequest, TextResponse, WithConversationId,
};

pub async fn generate_resume_handler(
    request: Json<StandardRequest<ResumeRecord>>,
    enhancer: &State<ContentEnhancer>,
) -> Result<PdfResponse, Json<StandardErrorResponse>> {
    let conversation_id = request.conversation_id();
    let record = request.into_inner().data;

    validate_record(&record, conversation_id.clone())?;

    info!(
        "Generating resume for {} with {} experience entries",
        record.personal_info.name,
        record.experiences.len()
    );

    match pipeline::generate(record, enhancer.inner()).await {
        Ok(generated) => Ok(PdfResponse::with_filename(generated.pdf, generated.filename)),
        Err(e) => {
            error!("Resume generation failed: {:?}", e);
            Err(Json(StandardErrorResponse::new(
                "Resume generation failed".to_string(),
                "GENERATION_ERROR".to_string(),
                vec!["Retry the submission".to_string()],
                conversation_id,
            )))
        }
    }
}

/// Enhancement preview: runs the same field-by-field enhancement as the
/// generation pipeline but returns the rewritten text instead of a PDF.
pub async fn enhance_content_handler(
    request: Json<StandardRequest<ResumeRecord>>,
    enhancer: &State<ContentEnhancer>,
) -> Result<Json<DataResponse<EnhancedContent>>, Json<StandardErrorResponse>> {
    let conversation_id = request.conversation_id();
    let record = request.into_inner().data;

    validate_record(&record, conversation_id.clone())?;

    let enhanced = pipeline::build_resume(record, enhancer.inner()).await;
    let content = EnhancedContent {
        summary: enhanced.summary.clone(),
        experiences: enhanced
            .experiences
            .iter()
            .map(|exp| EnhancedExperience {
                title: exp.title.clone(),
                company: exp.company.clone(),
                description: exp.display_description().to_string(),
            })
            .collect(),
        skills: enhanced.skills.clone(),
    };

    Ok(Json(DataResponse::success(
        "Content enhancement completed".to_string(),
        content,
        conversation_id,
    )))
}

pub async fn health_handler() -> Json<TextResponse> {
    Json(TextResponse::success("OK".to_string(), None))
}

fn validate_record(
    record: &ResumeRecord,
    conversation_id: Option<String>,
) -> Result<(), Json<StandardErrorResponse>> {
    let missing = missing_required_fields(record);
    if missing.is_empty() {
        return Ok(());
    }

    Err(Json(StandardErrorResponse::new(
        "Please fill in all required fields".to_string(),
        "MISSING_REQUIRED_FIELDS".to_string(),
        missing
            .into_iter()
            .map(|field| format!("Provide a value for: {}", field))
            .collect(),
        conversation_id,
    )))
}

/// Required-field rules from the submission form: core personal fields,
/// summary, degree, university and skills, plus title, company and
/// description on the first experience entry.
fn missing_required_fields(record: &ResumeRecord) -> Vec<String> {
    let mut missing = Vec::new();

    require(&mut missing, &record.personal_info.name, "full name");
    require(&mut missing, &record.personal_info.email, "email");
    require(&mut missing, &record.personal_info.phone, "phone");
    require(&mut missing, &record.summary, "professional summary");
    require(&mut missing, &record.education.degree, "degree");
    require(
        &mut missing,
        record.education.university.as_deref().unwrap_or(""),
        "university",
    );
    require(&mut missing, &record.skills, "skills");

    match record.experiences.first() {
        Some(first) => {
            require(&mut missing, &first.title, "job title");
            require(&mut missing, &first.company, "company");
            require(&mut missing, &first.description, "job description");
        }
        None => missing.push("at least one work experience".to_string()),
    }

    missing
}

fn require(missing: &mut Vec<String>, value: &str, label: &str) {
    if value.trim().is_empty() {
        missing.push(label.to_string());
    }
}
