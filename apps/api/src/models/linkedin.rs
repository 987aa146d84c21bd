use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Impact {
    High,
    Medium,
    Low,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExperienceEntry {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub description: String,
}

/// Advice for one profile section. Only ever produced by the analysis step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    pub section: String,
    pub suggestions: Vec<String>,
    pub impact: Impact,
}

/// The LinkedIn optimizer's form record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkedInProfileData {
    #[serde(default)]
    pub headline: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub experience: Vec<ExperienceEntry>,
    #[serde(default)]
    pub recommendations: Vec<Recommendation>,
}

impl Default for LinkedInProfileData {
    fn default() -> Self {
        Self {
            headline: String::new(),
            summary: String::new(),
            skills: vec![String::new()],
            experience: vec![ExperienceEntry::default()],
            recommendations: Vec::new(),
        }
    }
}
