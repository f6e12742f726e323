use thiserror::Error;

#[derive(Error, Debug)]
pub enum PdfError {
    #[error("document render error: {0}")]
    Render(String),
}
