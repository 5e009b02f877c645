use mailtriage::application::ports::{FileLoader, FileLoaderError};
use mailtriage::domain::{ContentType, Document};
use mailtriage::infrastructure::text_processing::PdfAdapter;

#[tokio::test]
async fn given_corrupt_bytes_when_extracting_pdf_then_returns_extraction_failed() {
    let adapter = PdfAdapter::new();
    let garbage = b"not a pdf at all";
    let document = Document::new(
        "corrupt.pdf".to_string(),
        ContentType::Pdf,
        garbage.len() as u64,
    );

    let result = adapter.extract_text(garbage, &document).await;

    assert!(matches!(result, Err(FileLoaderError::ExtractionFailed(_))));
}

#[tokio::test]
async fn given_text_document_when_extracting_with_pdf_adapter_then_returns_unsupported() {
    let adapter = PdfAdapter::new();
    let data = b"plain";
    let document = Document::new("email.txt".to_string(), ContentType::Text, data.len() as u64);

    let result = adapter.extract_text(data, &document).await;

    assert!(matches!(
        result,
        Err(FileLoaderError::UnsupportedContentType(_))
    ));
}
