use std::error::Error;

use tracing::info;
use tracing_subscriber::EnvFilter;

use trail_server::auth::TokenIssuer;
use trail_server::settings::Settings;
use trail_server::store::TrailStore;
use trail_server::web::{AppState, create_router};

/// Log filter used when `RUST_LOG` is not set.
const DEFAULT_LOG_FILTER: &str = "trail_server=info,tower_http=info";

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .init();

    let settings = Settings::load()?;
    if settings.auth.secret == Settings::default().auth.secret {
        tracing::warn!("using the default token secret; set TRAIL__AUTH__SECRET");
    }

    let tokens = TokenIssuer::new(&settings.auth);
    let state = AppState::new(TrailStore::new(), tokens);
    let app = create_router(state);

    let addr = settings.bind_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, "trail data service listening");
    info!("  GET    /health        - Health check");
    info!("  POST   /login         - Obtain a bearer token");
    info!("  POST   /trails        - Create a trail");
    info!("  GET    /trails        - List trails (name, lat, lon, radius-km, difficulty, length-km)");
    info!("  GET    /trails/nearby - List trails within a radius");
    info!("  GET    /trails/:id    - Fetch a trail");
    info!("  PUT    /trails/:id    - Replace a trail");
    info!("  DELETE /trails/:id    - Delete a trail");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("server stopped");
    Ok(())
}

/// Resolve on SIGINT or (on unix) SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("failed to listen for ctrl-c: {e}");
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
                tracing::error!("failed to listen for SIGTERM: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    info!("received shutdown signal, draining connections");
}
