pub mod cover_letter;
pub mod linkedin;
pub mod resume;
