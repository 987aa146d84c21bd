use axum::Json;
use serde::Serialize;

use crate::letter::{assemble_cover_letter, letter_paragraphs};
use crate::models::cover_letter::CoverLetterData;

#[derive(Debug, Serialize)]
pub struct AssembledLetter {
    pub letter: String,
    pub paragraphs: Vec<String>,
}

/// POST /api/v1/cover-letters/assemble
///
/// Stateless assembly: no delay, no session.
pub async fn handle_assemble_cover_letter(Json(data): Json<CoverLetterData>) -> Json<AssembledLetter> {
    let letter = assemble_cover_letter(&data);
    let paragraphs = letter_paragraphs(&letter);
    Json(AssembledLetter { letter, paragraphs })
}
