//! AI resume builder backend: enhances submitted resume text through the
//! Gemini completion API (falling back to the original text on any failure)
//! and renders the assembled record into a downloadable PDF.

pub mod enhancer;
pub mod pipeline;
pub mod renderer;
pub mod types;
pub mod utils;
pub mod web;

pub use enhancer::{ContentEnhancer, Enhance, Enhancement, EnhancerConfig};
pub use pipeline::{build_resume, generate, GeneratedResume};
pub use renderer::render;
pub use types::resume::ResumeRecord;
pub use web::start_web_server;
