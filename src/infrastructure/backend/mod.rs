mod backend_factory;
mod extractive_backend;
mod hosted_chat_backend;
mod mock_backend;

pub use backend_factory::{AnswerBackendFactory, AnswerBackendFactoryError};
pub use extractive_backend::ExtractiveBackend;
pub use hosted_chat_backend::HostedChatBackend;
pub use mock_backend::MockAnswerBackend;
