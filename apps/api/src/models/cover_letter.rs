use serde::{Deserialize, Serialize};

/// Tone chosen on the cover letter form. Captured but not used by the assembler.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tone {
    #[default]
    Professional,
    Friendly,
    Enthusiastic,
}

/// The cover letter generator's form record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoverLetterData {
    #[serde(default)]
    pub job_title: String,
    #[serde(default)]
    pub company: String,
    /// Optional; an empty value falls back to "Hiring Manager" in the salutation.
    #[serde(default)]
    pub hiring_manager: String,
    #[serde(default)]
    pub key_points: Vec<String>,
    #[serde(default)]
    pub tone: Tone,
    #[serde(default)]
    pub customization: String,
}

impl Default for CoverLetterData {
    fn default() -> Self {
        Self {
            job_title: String::new(),
            company: String::new(),
            hiring_manager: String::new(),
            key_points: vec![String::new()],
            tone: Tone::Professional,
            customization: String::new(),
        }
    }
}
