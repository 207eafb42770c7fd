use api::{middleware::log_request, routes::app};
use axum::middleware::from_fn;
use std::net::SocketAddr;
use tokio::signal;
use tracing::{info, warn};
use tracing_appender::rolling;
use util::{config::AppConfig, state::AppState};

#[tokio::main]
async fn main() {
    let config = AppConfig::from_env();
    let _log_guard = init_logging(&config);

    if let Err(err) = config.sheet_target() {
        warn!(error = %err, "Sheets credentials incomplete; data endpoints will fail until configured");
    }

    let addr: SocketAddr = format!("{}:{}", config.host, config.port)
        .parse()
        .expect("Invalid address");

    info!(
        env = config.env.as_str(),
        attendance_range = config.attendance_range.as_str(),
        students_range = config.students_range.as_str(),
        header_policy = %config.attendance_header_policy,
        "Configuration loaded"
    );

    println!(
        "Starting {} on http://{}:{}",
        config.project_name, config.host, config.port
    );

    let app = app(AppState::from_config(config)).layer(from_fn(log_request));

    axum::serve(
        tokio::net::TcpListener::bind(&addr)
            .await
            .expect("Failed to bind"),
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await
    .expect("Server crashed");

    info!("Server stopped");
}

fn init_logging(config: &AppConfig) -> tracing_appender::non_blocking::WorkerGuard {
    use std::fs;
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    fs::create_dir_all("logs").ok();

    let file_appender = rolling::daily("logs", &config.log_file);
    let (file_writer, guard) = tracing_appender::non_blocking(file_appender);

    let file_layer = fmt::layer()
        .with_writer(file_writer)
        .with_ansi(false)
        .with_target(true);

    let stdout_layer = fmt::layer()
        .with_writer(std::io::stdout)
        .with_ansi(true)
        .with_target(true);

    let env_filter = EnvFilter::try_new(&config.log_level)
        .unwrap_or_else(|_| EnvFilter::new("api=info"));

    let registry = tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer);

    if config.log_to_stdout {
        registry.with(stdout_layer).init();
    } else {
        registry.init();
    }

    guard
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
        _ = ctrl_c => info!("Received Ctrl+C, shutting down"),
        _ = terminate => info!("Received SIGTERM, shutting down"),
    }
}
