use std::net::SocketAddr;
use std::sync::Arc;

use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{EnvFilter, fmt};

use rsvp::modules::rsvp::use_cases::submit_rsvp::handler::SubmitRsvpHandler;
use rsvp::shared::infrastructure::notifier::log::LogNotifier;
use rsvp::shared::infrastructure::notifier::webhook::WebhookNotifier;
use rsvp::shared::infrastructure::notifier::Notifier;
use rsvp::shared::infrastructure::record_store::csv_file::CsvFileStore;
use rsvp::shared::infrastructure::record_store::in_memory::InMemoryRecordStore;
use rsvp::shared::infrastructure::record_store::RecordStore;
use rsvp::shell;
use rsvp::shell::config::{Config, StoreBackend};
use rsvp::shell::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let config = Config::load()?;

    let store: Arc<dyn RecordStore> = match config.store {
        StoreBackend::File => Arc::new(CsvFileStore::open(&config.data_dir).await?),
        StoreBackend::Memory => Arc::new(InMemoryRecordStore::new()),
    };

    let notifier: Arc<dyn Notifier> = match &config.notify_webhook_url {
        Some(url) => Arc::new(WebhookNotifier::new(url, &config.operator_email)),
        None => {
            tracing::info!("NOTIFY_WEBHOOK_URL not set, notifications go to the log");
            Arc::new(LogNotifier::new(&config.operator_email))
        }
    };

    if config.notify_verify {
        match notifier.verify().await {
            Ok(()) => tracing::info!("notifier connectivity verified"),
            Err(err) => tracing::warn!(error = %err, "notifier connectivity check failed"),
        }
    }

    let submit_handler = Arc::new(SubmitRsvpHandler::new(store.clone(), notifier));
    let state = AppState {
        store,
        submit_handler,
    };

    let app = shell::http::router(state)
        .fallback_service(ServeDir::new(&config.public_dir))
        .layer(TraceLayer::new_for_http());

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Listening on http://{addr}");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
