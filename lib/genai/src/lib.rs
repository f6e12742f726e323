pub mod error;
pub mod gemini;
pub mod traits;

pub use error::GenAiError;
pub use gemini::GeminiClient;
pub use traits::{FailingGenerator, FixedResponder, TextGenerator};
