mod composite_file_loader;
mod pdf_adapter;
mod plain_text_adapter;
mod text_normalizer;
mod text_sanitizer;

pub use composite_file_loader::CompositeFileLoader;
pub use pdf_adapter::PdfAdapter;
pub use plain_text_adapter::PlainTextAdapter;
pub use text_normalizer::PortugueseNormalizer;
pub use text_sanitizer::sanitize_extracted_text;
