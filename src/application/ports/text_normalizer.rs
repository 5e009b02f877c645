/// Turns raw extracted text into the token stream the classifier consumes.
pub trait TextNormalizer: Send + Sync {
    fn normalize(&self, raw: &str) -> String;
}
