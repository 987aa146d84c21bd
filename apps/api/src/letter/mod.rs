pub mod assembler;
pub mod handlers;

pub use assembler::{assemble_cover_letter, letter_paragraphs};
