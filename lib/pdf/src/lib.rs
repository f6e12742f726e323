//! Document rendering — structured text to a binary PDF document.
//!
//! The renderer is a pure function of its inputs: the same document always
//! yields byte-identical output. Nothing ambient (clock, locale, randomness)
//! leaks into the bytes, which is what makes report re-downloads idempotent.

pub mod error;
pub mod writer;

pub use error::PdfError;

/// A document to render: a title line, labeled metadata fields, and a body.
#[derive(Debug, Clone)]
pub struct Document {
    pub title: String,
    pub fields: Vec<(String, String)>,
    pub body: String,
}

/// An external document-rendering collaborator.
pub trait DocumentRenderer: Send + Sync {
    /// Serialize a document to its binary form.
    fn render(&self, doc: &Document) -> Result<Vec<u8>, PdfError>;
}

/// DocumentRenderer producing a minimal paginated PDF (Helvetica, Latin-1).
pub struct PdfRenderer;

impl DocumentRenderer for PdfRenderer {
    fn render(&self, doc: &Document) -> Result<Vec<u8>, PdfError> {
        writer::render_pdf(doc)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Document {
        Document {
            title: "Business Analysis Report".to_string(),
            fields: vec![
                ("Restaurant ID".to_string(), "7".to_string()),
                ("Generated at".to_string(), "2024-05-01T12:00:00+00:00".to_string()),
            ],
            body: "Overall sentiment is positive.\n\nService (atendimento) praised.".to_string(),
        }
    }

    #[test]
    fn output_is_a_pdf() {
        let bytes = PdfRenderer.render(&sample()).unwrap();
        assert!(bytes.starts_with(b"%PDF-1.4"));
        assert!(bytes.windows(5).any(|w| w == b"%%EOF"));
    }

    #[test]
    fn render_is_deterministic() {
        let a = PdfRenderer.render(&sample()).unwrap();
        let b = PdfRenderer.render(&sample()).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn different_fields_change_the_bytes() {
        let mut other = sample();
        other.fields[1].1 = "2024-06-01T12:00:00+00:00".to_string();
        let a = PdfRenderer.render(&sample()).unwrap();
        let b = PdfRenderer.render(&other).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn long_body_paginates() {
        let mut doc = sample();
        doc.body = (0..300)
            .map(|i| format!("paragraph {} with enough words to fill a line", i))
            .collect::<Vec<_>>()
            .join("\n");
        let bytes = PdfRenderer.render(&doc).unwrap();
        // More than one /Type /Page object (the Pages node also matches).
        let pages = bytes.windows(6).filter(|w| w == b"/Page\n").count();
        assert!(pages >= 2, "expected multiple pages, found {}", pages);
    }
}
