// Linkshelf API - Local Server

use std::net::SocketAddr;
use std::sync::Arc;

use tokio::signal;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use linkshelf_auth::AuthConfig;
use linkshelf_bookmarks::PgBookmarkRepository;
use linkshelf_common::config::{Config, LogFormat};
use linkshelf_common::db;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env()?;

    let filter = EnvFilter::new(&config.rust_log);
    match config.log_format {
        LogFormat::Json => tracing_subscriber::fmt().with_env_filter(filter).json().init(),
        LogFormat::Pretty => tracing_subscriber::fmt().with_env_filter(filter).pretty().init(),
    }

    info!(?config, "Starting Linkshelf API server");

    let pool = db::connect(&config).await.map_err(|e| {
        error!("Failed to connect to database: {}", e);
        anyhow::anyhow!("Database connection failed: {}", e)
    })?;

    info!("Database connection established");

    if config.run_migrations {
        db::migrate(&pool).await.map_err(|e| {
            error!("Failed to apply migrations: {}", e);
            anyhow::anyhow!("Migration failed: {}", e)
        })?;
        info!("Database migrations applied");
    }

    let store = Arc::new(PgBookmarkRepository::new(pool));
    let app = linkshelf_app::create_app(
        store,
        AuthConfig {
            api_token: config.api_token.clone(),
        },
    );

    let app = app.layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(linkshelf_app::build_cors_layer(
                config.cors_allowed_origins.as_deref(),
            ))
            .into_inner(),
    );

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));

    let listener = tokio::net::TcpListener::bind(addr).await?;

    info!("Server listening on http://{}", addr);
    info!("Health check available at http://{}/health", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C signal, starting graceful shutdown");
        },
        _ = terminate => {
            info!("Received terminate signal, starting graceful shutdown");
        },
    }
}
