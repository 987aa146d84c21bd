//! Structured resume document assembly.
//!
//! `assemble_document` is a pure function of the form record: no field is
//! validated, missing text renders as an empty string, and entries are kept in
//! input order without filtering.

use serde::Serialize;

use crate::models::resume::ResumeData;
use crate::templates::{Column, Layout};

const NAME_FALLBACK: &str = "Your Name";
const SEPARATOR: &str = " • ";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Header {
    pub title: String,
    pub subtitle: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExperienceBlock {
    pub position: String,
    pub company: String,
    pub duration: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EducationBlock {
    pub degree: String,
    pub school: String,
    pub year: String,
}

/// A resume ready to be handed to the HTML renderer or returned as JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResumeDocument {
    pub layout: Layout,
    pub columns: &'static [Column],
    pub header: Header,
    pub summary: String,
    pub experience_heading: &'static str,
    pub experience: Vec<ExperienceBlock>,
    pub education: Vec<EducationBlock>,
    pub skills: Vec<String>,
}

/// Splits the raw skills text on commas and trims each piece.
///
/// Empty pieces are kept: `"A,,B"` yields three tags, the middle one blank.
pub fn split_skills(skills: &str) -> Vec<String> {
    skills.split(',').map(|s| s.trim().to_string()).collect()
}

pub fn assemble_document(data: &ResumeData) -> ResumeDocument {
    let layout = Layout::from_identifier(&data.selected_template);

    let title = if data.job_title.is_empty() {
        NAME_FALLBACK.to_string()
    } else {
        data.job_title.clone()
    };

    ResumeDocument {
        layout,
        columns: layout.columns(),
        header: Header {
            title,
            subtitle: format!(
                "{}{SEPARATOR}{}",
                data.industry,
                data.experience_level.as_str()
            ),
        },
        summary: format!(
            "Experienced {} with expertise in {}.",
            data.job_title, data.skills
        ),
        experience_heading: layout.experience_heading(),
        experience: data
            .work_history
            .iter()
            .map(|w| ExperienceBlock {
                position: w.position.clone(),
                company: w.company.clone(),
                duration: w.duration.clone(),
                description: w.description.clone(),
            })
            .collect(),
        education: data
            .education
            .iter()
            .map(|e| EducationBlock {
                degree: e.degree.clone(),
                school: e.school.clone(),
                year: e.year.clone(),
            })
            .collect(),
        skills: split_skills(&data.skills),
    }
}
