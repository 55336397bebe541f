mod answer_backend;
mod table_loader;

pub use answer_backend::{AnswerBackend, AnswerBackendError};
pub use table_loader::{TableLoader, TableLoaderError};
