use std::sync::Arc;

use mailtriage::application::ports::{FileLoader, FileLoaderError};
use mailtriage::domain::{ContentType, Document};
use mailtriage::infrastructure::text_processing::{CompositeFileLoader, PlainTextAdapter};

#[tokio::test]
async fn given_text_document_when_loading_then_delegates_to_text_adapter() {
    let loader = CompositeFileLoader::with_default_adapters();
    let data = b"Preciso de suporte";
    let document = Document::new("email.txt".to_string(), ContentType::Text, data.len() as u64);

    let result = loader.extract_text(data, &document).await;

    assert_eq!(result.unwrap(), "Preciso de suporte");
}

#[tokio::test]
async fn given_pdf_document_when_loading_then_delegates_to_pdf_adapter() {
    let loader = CompositeFileLoader::with_default_adapters();
    let data = b"definitely not a pdf";
    let document = Document::new("email.pdf".to_string(), ContentType::Pdf, data.len() as u64);

    let result = loader.extract_text(data, &document).await;

    assert!(matches!(result, Err(FileLoaderError::ExtractionFailed(_))));
}

#[tokio::test]
async fn given_unregistered_content_type_when_loading_then_returns_unsupported() {
    let text_adapter: Arc<dyn FileLoader> = Arc::new(PlainTextAdapter);
    let loader = CompositeFileLoader::new(vec![(ContentType::Text, text_adapter)]);
    let data = b"%PDF-1.7";
    let document = Document::new("email.pdf".to_string(), ContentType::Pdf, data.len() as u64);

    let result = loader.extract_text(data, &document).await;

    assert!(matches!(
        result,
        Err(FileLoaderError::UnsupportedContentType(mime)) if mime == "application/pdf"
    ));
}
