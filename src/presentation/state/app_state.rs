use std::sync::Arc;

use crate::application::ports::{FileLoader, LanguageModel};
use crate::application::services::TriageService;
use crate::presentation::config::Settings;

pub struct AppState<M, F>
where
    M: LanguageModel + ?Sized,
    F: FileLoader + ?Sized,
{
    pub triage_service: Arc<TriageService<M, F>>,
    pub model: Arc<M>,
    pub settings: Settings,
}

impl<M, F> Clone for AppState<M, F>
where
    M: LanguageModel + ?Sized,
    F: FileLoader + ?Sized,
{
    fn clone(&self) -> Self {
        Self {
            triage_service: Arc::clone(&self.triage_service),
            model: Arc::clone(&self.model),
            settings: self.settings.clone(),
        }
    }
}
