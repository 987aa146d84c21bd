use serde::Deserialize;

use crate::forms::{append, update_at};
use crate::models::resume::{EducationEntry, ExperienceLevel, ResumeData, WorkEntry};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResumeField {
    JobTitle,
    Industry,
    Skills,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkField {
    Company,
    Position,
    Duration,
    Description,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EducationField {
    School,
    Degree,
    Year,
}

/// One change to the resume form. Work history and education can grow but not shrink.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum ResumeEdit {
    SetField { field: ResumeField, value: String },
    SetExperienceLevel { level: ExperienceLevel },
    SelectTemplate { template: String },
    AddWork,
    UpdateWork { index: usize, field: WorkField, value: String },
    AddEducation,
    UpdateEducation { index: usize, field: EducationField, value: String },
}

pub fn apply_resume_edit(data: &ResumeData, edit: ResumeEdit) -> ResumeData {
    let mut next = data.clone();
    match edit {
        ResumeEdit::SetField { field, value } => match field {
            ResumeField::JobTitle => next.job_title = value,
            ResumeField::Industry => next.industry = value,
            ResumeField::Skills => next.skills = value,
        },
        ResumeEdit::SetExperienceLevel { level } => next.experience_level = level,
        ResumeEdit::SelectTemplate { template } => next.selected_template = template,
        ResumeEdit::AddWork => {
            next.work_history = append(&data.work_history, WorkEntry::default());
        }
        ResumeEdit::UpdateWork {
            index,
            field,
            value,
        } => {
            next.work_history = update_at(&data.work_history, index, |entry| match field {
                WorkField::Company => entry.company = value,
                WorkField::Position => entry.position = value,
                WorkField::Duration => entry.duration = value,
                WorkField::Description => entry.description = value,
            });
        }
        ResumeEdit::AddEducation => {
            next.education = append(&data.education, EducationEntry::default());
        }
        ResumeEdit::UpdateEducation {
            index,
            field,
            value,
        } => {
            next.education = update_at(&data.education, index, |entry| match field {
                EducationField::School => entry.school = value,
                EducationField::Degree => entry.degree = value,
                EducationField::Year => entry.year = value,
            });
        }
    }
    next
}
