use std::sync::Arc;

use cvbuilder_core::config_file;
use cvbuilder_ingest::BackendKind;
use cvbuilder_parsing::{ParsingConfig, ResumeExtractor};
use cvbuilder_web::{AppState, ServerSettings};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("cvbuilder=info")))
        .with(tracing_subscriber::fmt::layer().compact())
        .init();

    let file_config = config_file::load_config();
    let settings = ServerSettings::resolve(&file_config, |k| std::env::var(k).ok())?;

    let parsing = match &file_config.parsing {
        Some(section) => ParsingConfig::from_section(section)?,
        None => ParsingConfig::default(),
    };
    let backend = BackendKind::default();

    let state = Arc::new(AppState::new(
        Arc::from(backend.build()?),
        ResumeExtractor::with_config(parsing),
        settings.max_upload_bytes,
    ));

    let app = cvbuilder_web::router(state);

    let listener = tokio::net::TcpListener::bind(settings.addr).await?;
    tracing::info!(
        addr = %settings.addr,
        %backend,
        max_upload_mb = settings.max_upload_bytes / (1024 * 1024),
        "listening"
    );
    axum::serve(listener, app).await?;

    Ok(())
}
