use std::sync::Arc;

use clap::Parser;
use shortlink_cache::{LruUrlCache, NoopUrlCache};
use shortlink_core::UrlStore;
use shortlink_gateway::cli::{StorageBackendArg, CLI};
use shortlink_gateway::{telemetry, App, AppState};
use shortlink_redirector::{Redirector, Resolver};
use shortlink_shortener::ShortenerService;
use shortlink_storage::{InMemoryUrlStore, MySqlUrlStore};
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CLI::try_parse()?;
    telemetry::init(config.log_format)?;

    info!(
        listen_addr = %config.listen_addr,
        storage_backend = %config.storage,
        cache_capacity = config.cache_capacity,
        "starting shortlink gateway"
    );

    let state = match config.storage {
        StorageBackendArg::InMemory => build_state(InMemoryUrlStore::new(), &config)?,
        StorageBackendArg::Mysql => {
            let mysql_dsn = config
                .mysql_dsn
                .as_deref()
                .ok_or_else(|| anyhow::anyhow!("mysql dsn is required when storage backend is mysql"))?;
            build_state(MySqlUrlStore::connect(mysql_dsn).await?, &config)?
        }
    };

    let listener = tokio::net::TcpListener::bind(config.listen_addr).await?;
    info!(listen_addr = %listener.local_addr()?, "listening");

    axum::serve(listener, App::router(state)).await?;
    Ok(())
}

fn build_state<S: UrlStore + Clone>(store: S, config: &CLI) -> anyhow::Result<AppState> {
    let redirector: Arc<dyn Redirector> = if config.cache_capacity == 0 {
        Arc::new(Resolver::new(store.clone(), NoopUrlCache))
    } else {
        let cache = LruUrlCache::with_capacity(config.cache_capacity)?;
        Arc::new(Resolver::new(store.clone(), cache))
    };
    let shortener = Arc::new(ShortenerService::new(store));

    Ok(AppState::new(redirector, shortener, &config.public_base))
}
