use std::fmt;

const PREVIEW_CHARS: usize = 200;
const TRUNCATION_MARKER: &str = "...";

/// Normalized email text handed to the classifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailContent(String);

impl EmailContent {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }

    /// Length in characters, not bytes.
    pub fn char_len(&self) -> usize {
        self.0.chars().count()
    }

    pub fn preview(&self) -> String {
        match self.0.char_indices().nth(PREVIEW_CHARS) {
            Some((cut, _)) => format!("{}{}", &self.0[..cut], TRUNCATION_MARKER),
            None => self.0.clone(),
        }
    }
}

impl fmt::Display for EmailContent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
