mod environment;
mod settings;

pub use environment::Environment;
pub use settings::{GeminiSettings, LoggingSettings, ServerSettings, Settings, UploadSettings};
