use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use glimit_api::config::ServerConfig;
use glimit_api::router::build_app_router;
use glimit_api::state::AppState;
use glimit_api::upstream::UpstreamClient;
use glimit_mailer::{BookingNotifier, MailIdentity, SmtpConfig, SmtpMailer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // --- Tracing ---
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "glimit_api=debug,glimit_mailer=debug,tower_http=debug".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // --- Configuration ---
    let config = ServerConfig::from_env();
    tracing::info!(
        host = %config.host,
        port = %config.port,
        api_url = %config.api_url,
        "Loaded server configuration",
    );

    // --- Content backend ---
    let upstream = UpstreamClient::new(
        config.api_url.clone(),
        Duration::from_secs(config.upstream_timeout_secs),
    )
    .expect("Failed to build backend HTTP client");

    // --- Email ---
    let notifier = build_notifier();

    // --- App state ---
    let state = AppState {
        config: Arc::new(config.clone()),
        upstream,
        notifier,
    };

    let app = build_app_router(state, &config);

    // --- Start server ---
    let addr = SocketAddr::new(
        config.host.parse().expect("Invalid HOST address"),
        config.port,
    );
    tracing::info!(%addr, "Starting server");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");

    tracing::info!("Graceful shutdown complete");
}

/// SMTP-backed notifier, or `None` when SMTP is not configured or the
/// transport cannot be built. Booking emails then fail per request.
fn build_notifier() -> Option<BookingNotifier> {
    let Some(smtp) = SmtpConfig::from_env() else {
        tracing::warn!("SMTP_HOST not set, booking emails are disabled");
        return None;
    };

    match SmtpMailer::new(&smtp) {
        Ok(mailer) => {
            tracing::info!(host = %smtp.host, port = smtp.port, "SMTP transport configured");
            Some(BookingNotifier::new(
                Arc::new(mailer),
                MailIdentity::from(&smtp),
            ))
        }
        Err(e) => {
            tracing::error!(
                error = %e,
                "Failed to build SMTP transport, booking emails are disabled",
            );
            None
        }
    }
}

/// Wait for SIGINT or SIGTERM to start graceful shutdown.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl-C handler");
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
        () = ctrl_c => {
            tracing::info!("Received SIGINT (Ctrl-C), starting graceful shutdown");
        }
        () = terminate => {
            tracing::info!("Received SIGTERM, starting graceful shutdown");
        }
    }
}
