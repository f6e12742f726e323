//! Minimal PDF 1.4 emitter.
//!
//! One Type1 Helvetica font, WinAnsi encoding, Letter pages. No /Info
//! dictionary and no creation date, so output depends only on the input
//! document.

use crate::{Document, PdfError};

const PAGE_WIDTH: i32 = 612;
const PAGE_HEIGHT: i32 = 792;
const MARGIN: i32 = 50;

const TITLE_SIZE: i32 = 16;
const FIELD_SIZE: i32 = 12;
const BODY_SIZE: i32 = 11;
const BODY_LEADING: i32 = 14;
const WRAP_COLUMNS: usize = 92;

/// Render a document to PDF bytes.
pub fn render_pdf(doc: &Document) -> Result<Vec<u8>, PdfError> {
    let pages = layout(doc);
    if pages.is_empty() {
        return Err(PdfError::Render("document produced no pages".into()));
    }
    Ok(emit(&pages))
}

/// One positioned text run.
struct Run {
    size: i32,
    x: i32,
    y: i32,
    text: String,
}

struct PageText {
    runs: Vec<Run>,
}

struct Cursor {
    pages: Vec<PageText>,
    y: i32,
}

impl Cursor {
    fn new() -> Self {
        Self {
            pages: vec![PageText { runs: Vec::new() }],
            y: PAGE_HEIGHT - MARGIN,
        }
    }

    fn line(&mut self, size: i32, leading: i32, text: &str) {
        if self.y - leading < MARGIN {
            self.pages.push(PageText { runs: Vec::new() });
            self.y = PAGE_HEIGHT - MARGIN;
        }
        self.y -= leading;
        if !text.is_empty() {
            let run = Run {
                size,
                x: MARGIN,
                y: self.y,
                text: escape_text(text),
            };
            self.pages.last_mut().unwrap().runs.push(run);
        }
    }

    fn gap(&mut self, leading: i32) {
        self.y -= leading;
    }
}

fn layout(doc: &Document) -> Vec<PageText> {
    let mut cur = Cursor::new();

    cur.line(TITLE_SIZE, TITLE_SIZE + 4, &doc.title);
    cur.gap(10);

    for (label, value) in &doc.fields {
        cur.line(FIELD_SIZE, FIELD_SIZE + 4, &format!("{}: {}", label, value));
    }
    cur.gap(10);

    for paragraph in doc.body.split('\n') {
        if paragraph.trim().is_empty() {
            cur.line(BODY_SIZE, BODY_LEADING, "");
            continue;
        }
        for line in wrap(paragraph, WRAP_COLUMNS) {
            cur.line(BODY_SIZE, BODY_LEADING, &line);
        }
    }

    cur.pages
}

/// Greedy word wrap. Words longer than the column limit go out unbroken.
fn wrap(text: &str, columns: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        if current.is_empty() {
            current = word.to_string();
        } else if current.chars().count() + 1 + word.chars().count() <= columns {
            current.push(' ');
            current.push_str(word);
        } else {
            lines.push(std::mem::take(&mut current));
            current = word.to_string();
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

/// Escape text for a PDF literal string. Characters above U+00FF become '?';
/// the 128–255 range is emitted as octal escapes under WinAnsi encoding.
fn escape_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '(' => out.push_str("\\("),
            ')' => out.push_str("\\)"),
            ' '..='~' => out.push(c),
            c if (c as u32) >= 0x80 && (c as u32) <= 0xFF => {
                out.push_str(&format!("\\{:03o}", c as u32));
            }
            _ => out.push('?'),
        }
    }
    out
}

fn content_stream(page: &PageText) -> String {
    let mut s = String::new();
    for run in &page.runs {
        s.push_str(&format!(
            "BT /F1 {} Tf {} {} Td ({}) Tj ET\n",
            run.size, run.x, run.y, run.text,
        ));
    }
    s
}

fn emit(pages: &[PageText]) -> Vec<u8> {
    let mut buf: Vec<u8> = Vec::new();
    let mut offsets: Vec<usize> = Vec::new();

    buf.extend_from_slice(b"%PDF-1.4\n");

    let page_count = pages.len();
    let first_page_obj = 4;

    let mut push_obj = |buf: &mut Vec<u8>, offsets: &mut Vec<usize>, body: String| {
        offsets.push(buf.len());
        let num = offsets.len();
        buf.extend_from_slice(format!("{} 0 obj\n{}endobj\n", num, body).as_bytes());
    };

    // 1: catalog
    push_obj(&mut buf, &mut offsets, "<< /Type /Catalog /Pages 2 0 R >>\n".to_string());

    // 2: pages node
    let kids: Vec<String> = (0..page_count)
        .map(|i| format!("{} 0 R", first_page_obj + 2 * i))
        .collect();
    push_obj(
        &mut buf,
        &mut offsets,
        format!(
            "<< /Type /Pages /Kids [{}] /Count {} >>\n",
            kids.join(" "),
            page_count,
        ),
    );

    // 3: font
    push_obj(
        &mut buf,
        &mut offsets,
        "<< /Type /Font /Subtype /Type1 /BaseFont /Helvetica /Encoding /WinAnsiEncoding >>\n"
            .to_string(),
    );

    // 4..: page + content pairs
    for (i, page) in pages.iter().enumerate() {
        let content_obj = first_page_obj + 2 * i + 1;
        push_obj(
            &mut buf,
            &mut offsets,
            format!(
                "<< /Type /Page\n/Parent 2 0 R /MediaBox [0 0 {} {}] \
                 /Resources << /Font << /F1 3 0 R >> >> /Contents {} 0 R >>\n",
                PAGE_WIDTH, PAGE_HEIGHT, content_obj,
            ),
        );

        let stream = content_stream(page);
        push_obj(
            &mut buf,
            &mut offsets,
            format!(
                "<< /Length {} >>\nstream\n{}endstream\n",
                stream.len(),
                stream,
            ),
        );
    }

    // xref
    let xref_offset = buf.len();
    buf.extend_from_slice(format!("xref\n0 {}\n", offsets.len() + 1).as_bytes());
    buf.extend_from_slice(b"0000000000 65535 f \n");
    for off in &offsets {
        buf.extend_from_slice(format!("{:010} 00000 n \n", off).as_bytes());
    }
    buf.extend_from_slice(
        format!(
            "trailer\n<< /Size {} /Root 1 0 R >>\nstartxref\n{}\n%%EOF\n",
            offsets.len() + 1,
            xref_offset,
        )
        .as_bytes(),
    );

    buf
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrap_respects_columns() {
        let lines = wrap("one two three four five six seven", 12);
        for line in &lines {
            assert!(line.chars().count() <= 12, "line too long: {:?}", line);
        }
        assert_eq!(lines.join(" "), "one two three four five six seven");
    }

    #[test]
    fn escape_handles_specials() {
        assert_eq!(escape_text("a(b)c\\d"), "a\\(b\\)c\\\\d");
        assert_eq!(escape_text("café"), "caf\\351");
        assert_eq!(escape_text("寿司"), "??");
    }
}
