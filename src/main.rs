mod config;
mod pages;
mod router;
mod routes;
mod server;
mod state;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let config = match config::ServerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "invalid configuration");
            std::process::exit(1);
        }
    };

    if let Some(entry) = &config.spa_entry {
        tracing::warn!(entry = %entry.display(), "serving in SPA mode");
    }

    let state = state::AppState::new(router::RouteTable::standard(), &config);
    let app = routes::app(state);
    let listener = match server::bind(&config.addr()).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!(error = %e, "startup failed");
            std::process::exit(1);
        }
    };

    tracing::info!(port = %config.port, "sthpages listening");
    if let Err(e) = server::serve(listener, app).await {
        tracing::error!(error = %e, "server stopped");
        std::process::exit(1);
    }
}
