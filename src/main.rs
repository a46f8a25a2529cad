use dotenvy::dotenv;

use activities::config::ServerConfig;
use activities::database::ActivityStore;
use activities::web;

#[tokio::main]
async fn main() {
    // .env is optional
    dotenv().ok();

    // 1. Logging (RUST_LOG, default info)
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = ServerConfig::from_env();

    // 2. In-memory catalog
    let store = ActivityStore::seeded();
    tracing::info!(
        activities = store.snapshot().await.len(),
        "activity catalog seeded"
    );

    // 3. Routes, static files, layers
    let app = web::router(store, &config.static_dir);

    // 4. Bind, with one fallback port
    let addr = match config.addr() {
        Ok(addr) => addr,
        Err(e) => {
            tracing::error!(error = %e, "cannot parse HOST/PORT");
            std::process::exit(1);
        }
    };
    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(l) => l,
        Err(e) => {
            let fallback = match config.fallback_addr() {
                Ok(fallback) => fallback,
                Err(fallback_err) => {
                    tracing::error!(%addr, error = %e, reason = %fallback_err, "bind failed");
                    std::process::exit(1);
                }
            };
            tracing::warn!(%addr, %fallback, error = %e, "bind failed, trying fallback port");
            tokio::net::TcpListener::bind(fallback)
                .await
                .expect("cannot bind fallback port")
        }
    };

    let bound_addr = listener
        .local_addr()
        .expect("listener has no local address");
    tracing::info!(
        addr = %bound_addr,
        static_dir = %config.static_dir.display(),
        "server listening"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("server error");

    tracing::info!("server stopped");
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => tracing::info!("received Ctrl+C, shutting down"),
        () = terminate => tracing::info!("received SIGTERM, shutting down"),
    }
}
