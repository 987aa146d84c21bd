//! HTML rendering of assembled resume documents via Handlebars.
//!
//! Templates are compiled once when the renderer is built; rendering escapes
//! every interpolated field, so user text never becomes markup.

use handlebars::Handlebars;
use serde::Serialize;
use tracing::debug;

use crate::errors::AppError;
use crate::models::resume::ResumeData;
use crate::templates::document::{assemble_document, ResumeDocument};
use crate::templates::Layout;

const PARTIALS: &[(&str, &str)] = &[
    ("summary", include_str!("partials/summary.hbs")),
    ("skill_tags", include_str!("partials/skill_tags.hbs")),
];

const LAYOUTS: &[(Layout, &str)] = &[
    (Layout::Modern, include_str!("layouts/modern.hbs")),
    (Layout::Classic, include_str!("layouts/classic.hbs")),
    (Layout::Creative, include_str!("layouts/creative.hbs")),
];

/// The structured document together with its HTML rendering.
#[derive(Debug, Clone, Serialize)]
pub struct RenderedResume {
    pub document: ResumeDocument,
    pub html: String,
}

pub struct ResumeRenderer {
    handlebars: Handlebars<'static>,
}

impl ResumeRenderer {
    pub fn new() -> Result<Self, handlebars::TemplateError> {
        let mut handlebars = Handlebars::new();

        for (name, source) in PARTIALS {
            handlebars.register_partial(name, *source)?;
        }
        for (layout, source) in LAYOUTS {
            handlebars.register_template_string(layout.template_name(), *source)?;
        }

        Ok(Self { handlebars })
    }

    /// Renders the document with the template of its own layout.
    pub fn render(&self, document: &ResumeDocument) -> Result<String, AppError> {
        debug!("Rendering resume with {:?} layout", document.layout);
        self.handlebars
            .render(document.layout.template_name(), document)
            .map_err(|e| AppError::Render(e.to_string()))
    }

    /// Assembles and renders a form record in one go.
    pub fn render_record(&self, data: &ResumeData) -> Result<RenderedResume, AppError> {
        let document = assemble_document(data);
        let html = self.render(&document)?;
        Ok(RenderedResume { document, html })
    }
}
