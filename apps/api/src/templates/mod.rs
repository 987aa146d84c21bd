//! Resume templates — the static catalog shown by the template picker, layout
//! selection, structured document assembly, and HTML rendering.
//!
//! The three layouts select exactly the same data from a `ResumeData`; they only
//! differ in how sections are grouped into columns and styled.

pub mod document;
pub mod handlers;
pub mod html;

use serde::{Deserialize, Serialize};

// ────────────────────────────────────────────────────────────────────────────
// Catalog
// ────────────────────────────────────────────────────────────────────────────

/// One entry in the template picker.
#[derive(Debug, Clone, Serialize)]
pub struct TemplateDescriptor {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub preview: &'static str,
}

pub const TEMPLATE_CATALOG: &[TemplateDescriptor] = &[
    TemplateDescriptor {
        id: "modern",
        name: "Modern",
        description: "Clean and professional design with a modern touch",
        preview: "https://images.unsplash.com/photo-1586281380349-632531db7ed4?auto=format&fit=crop&q=80&w=200&h=280",
    },
    TemplateDescriptor {
        id: "classic",
        name: "Classic",
        description: "Traditional resume format, perfect for formal applications",
        preview: "https://images.unsplash.com/photo-1586281380117-5a60ae2050cc?auto=format&fit=crop&q=80&w=200&h=280",
    },
    TemplateDescriptor {
        id: "creative",
        name: "Creative",
        description: "Stand out with a unique and creative layout",
        preview: "https://images.unsplash.com/photo-1586281380349-632531db7ed4?auto=format&fit=crop&q=80&w=200&h=280",
    },
];

// ────────────────────────────────────────────────────────────────────────────
// Layouts
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Layout {
    /// Single column.
    Modern,
    /// Two columns, skills and education on the left, serif headings.
    Classic,
    /// Three columns (left, divider, right) with accent colouring.
    Creative,
}

/// A block of the rendered resume that can be placed in a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionKind {
    Summary,
    Experience,
    Education,
    Skills,
}

/// How a layout groups sections. A `Divider` sits between two columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "sections", rename_all = "snake_case")]
pub enum Column {
    Sections(&'static [SectionKind]),
    Divider,
}

impl Layout {
    /// Maps a template identifier to its layout. Anything unrecognised renders as modern.
    pub fn from_identifier(id: &str) -> Self {
        match id {
            "classic" => Layout::Classic,
            "creative" => Layout::Creative,
            _ => Layout::Modern,
        }
    }

    pub fn id(&self) -> &'static str {
        match self {
            Layout::Modern => "modern",
            Layout::Classic => "classic",
            Layout::Creative => "creative",
        }
    }

    /// Name of the Handlebars template registered for this layout.
    pub(crate) fn template_name(&self) -> &'static str {
        self.id()
    }

    pub fn columns(&self) -> &'static [Column] {
        use SectionKind::*;
        match self {
            Layout::Modern => &[Column::Sections(&[Summary, Experience, Education, Skills])],
            Layout::Classic => &[
                Column::Sections(&[Skills, Education]),
                Column::Sections(&[Summary, Experience]),
            ],
            Layout::Creative => &[
                Column::Sections(&[Skills, Education]),
                Column::Divider,
                Column::Sections(&[Summary, Experience]),
            ],
        }
    }

    /// Heading used above the work history.
    pub fn experience_heading(&self) -> &'static str {
        match self {
            Layout::Classic => "Professional Experience",
            Layout::Modern | Layout::Creative => "Work Experience",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_identifiers_select_their_layout() {
        assert_eq!(Layout::from_identifier("modern"), Layout::Modern);
        assert_eq!(Layout::from_identifier("classic"), Layout::Classic);
        assert_eq!(Layout::from_identifier("creative"), Layout::Creative);
    }

    #[test]
    fn test_unknown_identifier_falls_back_to_modern() {
        assert_eq!(Layout::from_identifier(""), Layout::Modern);
        assert_eq!(Layout::from_identifier("minimal"), Layout::Modern);
        assert_eq!(Layout::from_identifier("Classic"), Layout::Modern);
    }

    #[test]
    fn test_catalog_ids_round_trip_to_layouts() {
        assert_eq!(TEMPLATE_CATALOG.len(), 3);
        for descriptor in TEMPLATE_CATALOG {
            assert_eq!(Layout::from_identifier(descriptor.id).id(), descriptor.id);
        }
    }

    #[test]
    fn test_every_layout_places_every_section_once() {
        for layout in [Layout::Modern, Layout::Classic, Layout::Creative] {
            let placed: Vec<SectionKind> = layout
                .columns()
                .iter()
                .filter_map(|c| match c {
                    Column::Sections(s) => Some(*s),
                    Column::Divider => None,
                })
                .flatten()
                .copied()
                .collect();
            assert_eq!(placed.len(), 4, "{layout:?}");
            for kind in [
                SectionKind::Summary,
                SectionKind::Experience,
                SectionKind::Education,
                SectionKind::Skills,
            ] {
                assert!(placed.contains(&kind), "{layout:?} is missing {kind:?}");
            }
        }
    }

    #[test]
    fn test_only_creative_has_a_divider() {
        assert!(Layout::Creative.columns().contains(&Column::Divider));
        assert!(!Layout::Classic.columns().contains(&Column::Divider));
        assert_eq!(Layout::Modern.columns().len(), 1);
    }
}
