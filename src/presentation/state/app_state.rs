use std::sync::Arc;

use crate::application::ports::{AnswerBackend, TableLoader};
use crate::application::services::{AnalysisService, QaService};
use crate::presentation::config::Settings;

pub struct AppState<P, B>
where
    P: TableLoader + ?Sized,
    B: AnswerBackend + ?Sized,
{
    pub analysis_service: Arc<AnalysisService<P>>,
    pub qa_service: Arc<QaService<B>>,
    pub settings: Settings,
}

impl<P, B> Clone for AppState<P, B>
where
    P: TableLoader + ?Sized,
    B: AnswerBackend + ?Sized,
{
    fn clone(&self) -> Self {
        Self {
            analysis_service: Arc::clone(&self.analysis_service),
            qa_service: Arc::clone(&self.qa_service),
            settings: self.settings.clone(),
        }
    }
}
