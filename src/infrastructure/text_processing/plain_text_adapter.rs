use async_trait::async_trait;

use crate::application::ports::{FileLoader, FileLoaderError};
use crate::domain::{ContentType, Document};

const UTF8_BOM: &str = "\u{feff}";

/// Reads `.txt` uploads, which must be valid UTF-8.
#[derive(Debug, Default, Clone, Copy)]
pub struct PlainTextAdapter;

#[async_trait]
impl FileLoader for PlainTextAdapter {
    async fn extract_text(
        &self,
        data: &[u8],
        document: &Document,
    ) -> Result<String, FileLoaderError> {
        if document.content_type != ContentType::Text {
            return Err(FileLoaderError::UnsupportedContentType(
                document.content_type.as_mime().to_string(),
            ));
        }

        let text = String::from_utf8(data.to_vec()).map_err(|e| {
            FileLoaderError::ExtractionFailed(format!("{} is not valid UTF-8: {e}", document.filename))
        })?;

        Ok(text.strip_prefix(UTF8_BOM).map(str::to_string).unwrap_or(text))
    }
}
