mod analysis_service;
mod context_builder;
mod intake;
mod qa_service;
mod summarizer;

pub use analysis_service::{AnalysisError, AnalysisService, DatasetAnalysis};
pub use context_builder::ContextBuilder;
pub use intake::{Intake, IntakeError};
pub use qa_service::{QaError, QaService};
pub use summarizer::{summarize_categorical, summarize_numeric};
