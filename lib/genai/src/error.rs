use thiserror::Error;

#[derive(Error, Debug)]
pub enum GenAiError {
    /// No API credential configured. Generation cannot proceed.
    #[error("generation API credential is not configured")]
    MissingCredential,

    /// The upstream API rejected or failed the request.
    #[error("generation upstream error: {0}")]
    Upstream(String),

    /// The upstream response could not be interpreted.
    #[error("generation response parse error: {0}")]
    Parse(String),
}
