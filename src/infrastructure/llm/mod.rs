mod gemini_client;
mod language_model_factory;
mod model_selection;
mod offline_model;
mod scripted_language_model;

pub use gemini_client::{GatewayInitError, GeminiClient};
pub use language_model_factory::LanguageModelFactory;
pub use model_selection::{CatalogModel, is_valid_model_id, normalize_model_id, select_model};
pub use offline_model::{OFFLINE_MODEL_ID, OfflineModel};
pub use scripted_language_model::ScriptedLanguageModel;
