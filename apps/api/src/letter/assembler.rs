//! Cover letter assembly.
//!
//! The letter is a fixed form: salutation, opening, one bullet per key point,
//! the customization block verbatim, closing and signature placeholder.
//! `tone` is not consulted.

use crate::models::cover_letter::CoverLetterData;

const SALUTATION_FALLBACK: &str = "Hiring Manager";
const BULLET: &str = "• ";

pub fn assemble_cover_letter(data: &CoverLetterData) -> String {
    let recipient = if data.hiring_manager.is_empty() {
        SALUTATION_FALLBACK
    } else {
        data.hiring_manager.as_str()
    };

    let key_points: String = data
        .key_points
        .iter()
        .map(|point| format!("\n{BULLET}{point}"))
        .collect();

    format!(
        "Dear {recipient},\n\
         \n\
         I am writing to express my strong interest in the {job_title} position at {company}. \
         With my background and expertise, I am confident in my ability to contribute significantly to your team.\n\
         \n\
         {key_points}\n\
         \n\
         {customization}\n\
         \n\
         I am excited about the opportunity to join {company} and would welcome the chance to discuss how I can contribute to your team's success.\n\
         \n\
         Best regards,\n\
         [Your Name]",
        job_title = data.job_title,
        company = data.company,
        customization = data.customization,
    )
}

/// Splits a letter into preview paragraphs, one per line. Blank lines are kept.
pub fn letter_paragraphs(letter: &str) -> Vec<String> {
    letter.split('\n').map(str::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::cover_letter::Tone;

    fn letter_data() -> CoverLetterData {
        CoverLetterData {
            job_title: "Data Engineer".to_string(),
            company: "Globex".to_string(),
            hiring_manager: String::new(),
            key_points: vec!["Led team of 5".to_string(), "Shipped X".to_string()],
            tone: Tone::Professional,
            customization: "I admire Globex's open data work.".to_string(),
        }
    }

    #[test]
    fn test_salutation_falls_back_to_hiring_manager() {
        let letter = assemble_cover_letter(&letter_data());
        assert!(letter.starts_with("Dear Hiring Manager,\n"));
    }

    #[test]
    fn test_salutation_uses_named_manager() {
        let mut data = letter_data();
        data.hiring_manager = "Jane Doe".to_string();
        assert!(assemble_cover_letter(&data).starts_with("Dear Jane Doe,\n"));
    }

    #[test]
    fn test_key_points_render_in_order_as_bullets() {
        let letter = assemble_cover_letter(&letter_data());
        let bullets: Vec<&str> = letter.lines().filter(|l| l.starts_with(BULLET)).collect();
        assert_eq!(bullets, vec!["• Led team of 5", "• Shipped X"]);
    }

    #[test]
    fn test_empty_key_point_renders_empty_bullet() {
        let mut data = letter_data();
        data.key_points = vec![String::new(), "Shipped X".to_string()];
        let letter = assemble_cover_letter(&data);
        let bullets: Vec<&str> = letter.lines().filter(|l| l.starts_with(BULLET)).collect();
        assert_eq!(bullets, vec!["• ", "• Shipped X"]);
    }

    #[test]
    fn test_full_letter_text() {
        let expected = "Dear Hiring Manager,\n\
\n\
I am writing to express my strong interest in the Data Engineer position at Globex. With my background and expertise, I am confident in my ability to contribute significantly to your team.\n\
\n\
\n\
• Led team of 5\n\
• Shipped X\n\
\n\
I admire Globex's open data work.\n\
\n\
I am excited about the opportunity to join Globex and would welcome the chance to discuss how I can contribute to your team's success.\n\
\n\
Best regards,\n\
[Your Name]";
        assert_eq!(assemble_cover_letter(&letter_data()), expected);
    }

    #[test]
    fn test_tone_does_not_change_text() {
        let professional = assemble_cover_letter(&letter_data());
        let mut data = letter_data();
        data.tone = Tone::Enthusiastic;
        assert_eq!(assemble_cover_letter(&data), professional);
    }

    #[test]
    fn test_customization_inserted_verbatim() {
        let mut data = letter_data();
        data.customization = "Line one\n  indented <b>line</b>".to_string();
        assert!(assemble_cover_letter(&data).contains("\n\nLine one\n  indented <b>line</b>\n\n"));
    }

    #[test]
    fn test_paragraphs_keep_blank_lines() {
        assert_eq!(letter_paragraphs("a\n\nb"), vec!["a", "", "b"]);
        let letter = assemble_cover_letter(&letter_data());
        assert_eq!(letter_paragraphs(&letter).len(), letter.split('\n').count());
    }
}
