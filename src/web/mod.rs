// src/web/mod.rs

pub mod handlers;
pub mod types;

pub use types::*;

use anyhow::Result;
use rocket::fairing::{Fairing, Info, Kind};
use rocket::http::{Header, Status};
use rocket::serde::json::Json;
use rocket::{catchers, get, options, post, routes, Build, Request, Response, Rocket, State};
use tracing::info;

use crate::enhancer::{ContentEnhancer, EnhancerConfig};
use crate::types::resume::ResumeRecord;

// CORS Fairing
pub struct Cors;

#[rocket::async_trait]
impl Fairing for Cors {
    fn info(&self) -> Info {
        Info {
            name: "Add CORS headers to responses",
            kind: Kind::Response,
        }
    }

    async fn on_response<'r>(&self, _request: &'r Request<'_>, response: &mut Response<'r>) {
        response.set_header(Header::new("Access-Control-Allow-Origin", "*"));
        response.set_header(Header::new(
            "Access-Control-Allow-Methods",
            "POST, GET, OPTIONS",
        ));
        response.set_header(Header::new("Access-Control-Allow-Headers", "*"));
    }
}

#[post("/generate", data = "<request>")]
pub async fn generate_resume(
    request: Json<StandardRequest<ResumeRecord>>,
    enhancer: &State<ContentEnhancer>,
) -> Result<PdfResponse, Json<StandardErrorResponse>> {
    handlers::generate_resume_handler(request, enhancer).await
}

#[post("/enhance", data = "<request>")]
pub async fn enhance_content(
    request: Json<StandardRequest<ResumeRecord>>,
    enhancer: &State<ContentEnhancer>,
) -> Result<Json<DataResponse<EnhancedContent>>, Json<StandardErrorResponse>> {
    handlers::enhance_content_handler(request, enhancer).await
}

#[get("/health")]
pub async fn health() -> Json<TextResponse> {
    handlers::health_handler().await
}

#[options("/<_..>")]
pub async fn options() -> Status {
    Status::Ok
}

// Error catchers
#[rocket::catch(400)]
pub fn bad_request() -> Json<StandardErrorResponse> {
    Json(StandardErrorResponse::new(
        "Invalid request format".to_string(),
        "BAD_REQUEST".to_string(),
        vec![
            "Check your request JSON format".to_string(),
            "Verify all required fields are present".to_string(),
        ],
        None,
    ))
}

#[rocket::catch(500)]
pub fn internal_error() -> Json<StandardErrorResponse> {
    Json(StandardErrorResponse::new(
        "Internal server error".to_string(),
        "INTERNAL_ERROR".to_string(),
        vec![
            "Try again in a few moments".to_string(),
            "Contact support if the problem persists".to_string(),
        ],
        None,
    ))
}

/// Assemble the Rocket instance with the enhancer as managed state.
pub fn build_rocket(enhancer: ContentEnhancer) -> Rocket<Build> {
    rocket::build()
        .attach(Cors)
        .manage(enhancer)
        .register("/api", catchers![bad_request, internal_error])
        .mount(
            "/api",
            routes![generate_resume, enhance_content, health, options],
        )
}

/// Build the enhancer from the injected configuration and serve until
/// shutdown.
pub async fn start_web_server(config: EnhancerConfig) -> Result<()> {
    let enhancer = ContentEnhancer::new(config)?;

    info!("Starting AI resume builder API server");
    info!("All endpoints mounted under /api");

    let _rocket = build_rocket(enhancer).launch().await?;

    Ok(())
}
