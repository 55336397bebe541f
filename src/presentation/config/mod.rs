mod environment;
mod settings;

pub use environment::Environment;
pub use settings::{
    BackendProvider, BackendSettings, ContextSettings, ExtractiveBackendSettings,
    HostedBackendSettings, IntakeSettings, LoggingSettings, ServerSettings, Settings,
};
