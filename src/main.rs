use std::sync::Arc;

use floormatch::{
    app_with_config, config::Config, logging::init_tracing,
    services::store::PgProviderStore, utils::constant::DB_PROBE_INTERVAL,
};
use sqlx::postgres::PgPoolOptions;
use tokio::net::TcpListener;
use tracing::info;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    let config = Config::from_env().expect("Failed to load configuration");
    init_tracing(&config.log).expect("Failed to install tracing subscriber");

    let db_pool = PgPoolOptions::new()
        .max_connections(config.database.max_connections)
        .connect_lazy(&config.database.url)
        .expect("Invalid database connection string");

    let store = PgProviderStore::new(db_pool);
    store.wait_until_available(DB_PROBE_INTERVAL).await;

    sqlx::migrate!("./migrations")
        .run(store.pool())
        .await
        .expect("Failed to run migrations");

    let app = app_with_config(Arc::new(store), &config.server);

    let listener = TcpListener::bind(&config.server.listen_address)
        .await
        .expect("Failed to bind listen address");
    info!(address = %config.server.listen_address, "Server starting");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .unwrap();

    info!("Server stopped");
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    info!("Shutdown signal received");
}
