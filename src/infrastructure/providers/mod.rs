pub mod gemini;
pub mod openai;

pub use gemini::GeminiSuggestionProvider;
pub use openai::OpenAiEmailDraftProvider;
