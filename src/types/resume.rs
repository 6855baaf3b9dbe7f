// src/types/resume.rs
//! Resume data structures shared by the enhancement pipeline and the renderer

use serde::{Deserialize, Serialize};

/// Complete resume record for one generation request.
///
/// Built once from the submitted form data, optionally enriched by the
/// content enhancer, then handed to the renderer. Never mutated afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResumeRecord {
    pub personal_info: PersonalInfo,
    pub summary: String,
    pub experiences: Vec<Experience>,
    pub education: Education,
    pub skills: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersonalInfo {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub linkedin: Option<String>,
    pub github: Option<String>,
    pub location: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Experience {
    pub title: String,
    pub company: String,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub description: String,
    pub enhanced_description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Education {
    pub degree: String,
    pub university: Option<String>,
    pub graduation_year: Option<String>,
    pub gpa: Option<String>,
}

impl Experience {
    /// Entries without a title or company are dropped at render time.
    pub fn is_renderable(&self) -> bool {
        !self.title.trim().is_empty() && !self.company.trim().is_empty()
    }

    /// Text the renderer should use: the AI-enhanced description when one
    /// exists, the raw one otherwise.
    pub fn display_description(&self) -> &str {
        self.enhanced_description
            .as_deref()
            .unwrap_or(&self.description)
    }
}

/// Treat both `None` and blank strings as absent.
pub fn nonempty(value: &Option<String>) -> Option<&str> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
}
