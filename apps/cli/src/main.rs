mod args;
mod config;

use std::io;
use std::sync::Arc;

use app_api::AppContext;
use hours_app::{AppConfig, AppState};
use hours_notion::NotionClient;
use http_api::HttpState;
use tokio::net::TcpListener;
use tokio::signal::ctrl_c;
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, fmt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt().with_env_filter(filter).init();

    let args = args::parse_args().map_err(|err| {
        eprintln!("{err}");
        args::print_help();
        io::Error::new(io::ErrorKind::InvalidInput, "invalid arguments")
    })?;

    let loaded = config::load_or_create(&args.config).map_err(io::Error::other)?;
    if loaded.created {
        info!(
            "Created config at {} (default port {}).",
            loaded.file.display(),
            loaded.config.port
        );
    }
    let config = loaded.config;

    let app_config = AppConfig::from_settings(&config.hours)
        .map_err(|err| io::Error::new(io::ErrorKind::InvalidInput, err.to_string()))?;
    let secrets = config::NotionSecrets::from_env().map_err(io::Error::other)?;
    let notion_config = config.notion.to_client_config(secrets);
    let client = tokio::task::spawn_blocking(move || NotionClient::new(notion_config))
        .await?
        .map_err(|err| io::Error::other(format!("failed to build notion client: {}", err)))?;

    let app_state = AppState::new(app_config, Arc::new(client));
    let context = AppContext { app_state };

    if args.sum_recorded {
        let report_context = context.clone();
        let recorded = tokio::task::spawn_blocking(move || app_api::recorded_hours(&report_context))
            .await?
            .map_err(|err| io::Error::other(err.to_string()))?;
        println!("{}", recorded.total_str);
        return Ok(());
    }

    let router = http_api::router(HttpState::new(context));

    let port = args.port.unwrap_or(config.port);
    let address = format!("{}:{}", config.host, port);
    let listener = TcpListener::bind(&address).await.map_err(|err| {
        error!("failed to bind {address}: {err}");
        err
    })?;
    info!("Worked Hours is running at http://{}", listener.local_addr()?);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shut down");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = ctrl_c().await {
            error!("failed to listen for Ctrl+C: {err}");
            std::future::pending::<()>().await;
        }
        info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{SignalKind, signal};
        match signal(SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                info!("Received terminate signal, shutting down");
            }
            Err(err) => {
                error!("failed to install terminate handler: {err}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
