use std::env;
use std::sync::Arc;

use tokio::net::TcpListener;

use tawau::application::ports::AnswerBackend;
use tawau::application::services::{AnalysisService, ContextBuilder, Intake, QaService};
use tawau::infrastructure::backend::AnswerBackendFactory;
use tawau::infrastructure::observability::{init_tracing, TracingConfig};
use tawau::infrastructure::table::CsvTableLoader;
use tawau::presentation::config::{Environment, Settings};
use tawau::presentation::{create_router, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let environment: Environment = env::var("APP_ENVIRONMENT")
        .unwrap_or_else(|_| "local".into())
        .parse()
        .map_err(|e: String| anyhow::anyhow!(e))?;

    let settings = Settings::load(&environment)?;

    init_tracing(
        TracingConfig {
            environment: environment.to_string(),
            level: settings.logging.level.clone(),
            json_format: settings.logging.enable_json,
        },
        settings.server.port,
    );

    let backend: Arc<dyn AnswerBackend> = AnswerBackendFactory::create(&settings.backend)?;

    let analysis_service = Arc::new(AnalysisService::new(
        Intake::new(settings.intake.max_upload_bytes),
        Arc::new(CsvTableLoader),
    ));
    let qa_service = Arc::new(QaService::new(
        backend,
        ContextBuilder::new(settings.context.preview_rows, settings.context.max_chars),
    ));

    let addr = format!("{}:{}", settings.server.host, settings.server.port);
    let state = AppState {
        analysis_service,
        qa_service,
        settings,
    };

    let app = create_router(state);

    let listener = TcpListener::bind(&addr).await?;
    tracing::info!(addr = %addr, "Dashboard listening");
    axum::serve(listener, app).await?;

    Ok(())
}
