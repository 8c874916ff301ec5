use std::sync::Arc;

use titlesort::api::{AppState, create_router};
use titlesort::catalog::TitleStore;
use titlesort::config::AppConfig;
use titlesort::server::Server;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let config = AppConfig::from_env()?;

    let store = Arc::new(TitleStore::default());
    if config.titles_file.is_some() {
        store.replace(config.load_catalog()?);
    }
    tracing::info!(titles = store.snapshot().len(), "Title catalog ready");

    let router = create_router(AppState::from_shared(store));

    Server::new(config.server).run(router).await
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("titlesort=debug,tower_http=debug,info"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_target(true))
        .init();
}
