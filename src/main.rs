mod config;
mod routes;

use leptos::prelude::get_configuration;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let config = match config::HostConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "invalid host configuration");
            std::process::exit(1);
        }
    };

    let leptos_options = match get_configuration(None) {
        Ok(conf) => conf.leptos_options,
        Err(e) => {
            tracing::error!(error = %e, "leptos configuration missing or malformed");
            std::process::exit(1);
        }
    };

    let app = routes::app(leptos_options);
    let listener = match tokio::net::TcpListener::bind(config.addr).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!(error = %e, addr = %config.addr, "failed to bind");
            std::process::exit(1);
        }
    };

    tracing::info!(addr = %config.addr, "recipe organizer listening");
    if let Err(e) = axum::serve(listener, app).await {
        tracing::error!(error = %e, "server failed");
        std::process::exit(1);
    }
}
