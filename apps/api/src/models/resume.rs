use serde::{Deserialize, Serialize};

/// Experience level picked from the resume form. `Unspecified` is the empty selection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExperienceLevel {
    #[default]
    #[serde(rename = "")]
    Unspecified,
    Entry,
    Mid,
    Senior,
    Executive,
}

impl ExperienceLevel {
    /// Raw identifier as it appears in the rendered header.
    pub fn as_str(&self) -> &'static str {
        match self {
            ExperienceLevel::Unspecified => "",
            ExperienceLevel::Entry => "entry",
            ExperienceLevel::Mid => "mid",
            ExperienceLevel::Senior => "senior",
            ExperienceLevel::Executive => "executive",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkEntry {
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub position: String,
    #[serde(default)]
    pub duration: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EducationEntry {
    #[serde(default)]
    pub school: String,
    #[serde(default)]
    pub degree: String,
    #[serde(default)]
    pub year: String,
}

/// The resume builder's form record.
///
/// `skills` is kept as the raw comma-separated text the user typed; it is only
/// split into tags at render time. `selected_template` is stored as the raw
/// identifier so an unknown value survives until the renderer falls back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResumeData {
    #[serde(default)]
    pub job_title: String,
    #[serde(default)]
    pub industry: String,
    #[serde(default)]
    pub experience_level: ExperienceLevel,
    #[serde(default)]
    pub skills: String,
    #[serde(default = "default_work_history")]
    pub work_history: Vec<WorkEntry>,
    #[serde(default = "default_education")]
    pub education: Vec<EducationEntry>,
    #[serde(default = "default_template")]
    pub selected_template: String,
}

fn default_template() -> String {
    "modern".to_string()
}

fn default_work_history() -> Vec<WorkEntry> {
    vec![WorkEntry::default()]
}

fn default_education() -> Vec<EducationEntry> {
    vec![EducationEntry::default()]
}

impl Default for ResumeData {
    /// A fresh form: one empty work entry, one empty education entry, modern template.
    fn default() -> Self {
        Self {
            job_title: String::new(),
            industry: String::new(),
            experience_level: ExperienceLevel::Unspecified,
            skills: String::new(),
            work_history: default_work_history(),
            education: default_education(),
            selected_template: default_template(),
        }
    }
}
