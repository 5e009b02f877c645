mod file_loader;
mod language_model;
mod text_normalizer;

pub use file_loader::{FileLoader, FileLoaderError};
pub use language_model::{LanguageModel, ModelInvocationError};
pub use text_normalizer::TextNormalizer;
