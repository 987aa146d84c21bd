use serde::Deserialize;

use crate::forms::{append, update_at};
use crate::models::cover_letter::{CoverLetterData, Tone};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CoverLetterField {
    JobTitle,
    Company,
    HiringManager,
    Customization,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum CoverLetterEdit {
    SetField { field: CoverLetterField, value: String },
    SetTone { tone: Tone },
    AddKeyPoint,
    UpdateKeyPoint { index: usize, value: String },
    RemoveKeyPoint { index: usize },
}

/// Removal is only offered while more than one key point exists.
pub fn can_remove_key_points(data: &CoverLetterData) -> bool {
    data.key_points.len() > 1
}

pub fn apply_cover_letter_edit(data: &CoverLetterData, edit: CoverLetterEdit) -> CoverLetterData {
    let mut next = data.clone();
    match edit {
        CoverLetterEdit::SetField { field, value } => match field {
            CoverLetterField::JobTitle => next.job_title = value,
            CoverLetterField::Company => next.company = value,
            CoverLetterField::HiringManager => next.hiring_manager = value,
            CoverLetterField::Customization => next.customization = value,
        },
        CoverLetterEdit::SetTone { tone } => next.tone = tone,
        CoverLetterEdit::AddKeyPoint => {
            next.key_points = append(&data.key_points, String::new());
        }
        CoverLetterEdit::UpdateKeyPoint { index, value } => {
            next.key_points = update_at(&data.key_points, index, |point| *point = value);
        }
        CoverLetterEdit::RemoveKeyPoint { index } => {
            if can_remove_key_points(data) {
                next.key_points = data
                    .key_points
                    .iter()
                    .enumerate()
                    .filter(|(i, _)| *i != index)
                    .map(|(_, point)| point.clone())
                    .collect();
            }
        }
    }
    next
}
