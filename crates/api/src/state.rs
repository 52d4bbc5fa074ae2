use std::sync::Arc;

use glimit_mailer::BookingNotifier;

use crate::config::ServerConfig;
use crate::upstream::UpstreamClient;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable: the config is behind `Arc` and the HTTP client and
/// notifier are handles to pooled resources.
#[derive(Clone)]
pub struct AppState {
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Content backend client.
    pub upstream: UpstreamClient,
    /// Booking email sender. `None` when SMTP is not configured.
    pub notifier: Option<BookingNotifier>,
}
