mod classify;
mod health;

pub use classify::{ClassificationBody, ClassifyResponse, classify_handler};
pub use health::{HealthResponse, health_handler};
