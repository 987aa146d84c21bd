use serde::Deserialize;

use crate::forms::{append, update_at};
use crate::models::linkedin::{ExperienceEntry, LinkedInProfileData};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExperienceField {
    Title,
    Company,
    Description,
}

/// Profile edits. Recommendations are written only by the analysis step.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum LinkedInEdit {
    SetHeadline { value: String },
    SetSummary { value: String },
    AddSkill,
    UpdateSkill { index: usize, value: String },
    AddExperience,
    UpdateExperience { index: usize, field: ExperienceField, value: String },
}

pub fn apply_linkedin_edit(data: &LinkedInProfileData, edit: LinkedInEdit) -> LinkedInProfileData {
    let mut next = data.clone();
    match edit {
        LinkedInEdit::SetHeadline { value } => next.headline = value,
        LinkedInEdit::SetSummary { value } => next.summary = value,
        LinkedInEdit::AddSkill => next.skills = append(&data.skills, String::new()),
        LinkedInEdit::UpdateSkill { index, value } => {
            next.skills = update_at(&data.skills, index, |skill| *skill = value);
        }
        LinkedInEdit::AddExperience => {
            next.experience = append(&data.experience, ExperienceEntry::default());
        }
        LinkedInEdit::UpdateExperience {
            index,
            field,
            value,
        } => {
            next.experience = update_at(&data.experience, index, |entry| match field {
                ExperienceField::Title => entry.title = value,
                ExperienceField::Company => entry.company = value,
                ExperienceField::Description => entry.description = value,
            });
        }
    }
    next
}
