use std::path::PathBuf;

/// Server configuration loaded from environment variables.
///
/// All fields have defaults suitable for local development. In production,
/// override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS`.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Timeout of each call to the content backend (default: `20`).
    pub upstream_timeout_secs: u64,
    /// Largest accepted request body, uploads included (default: 50 MiB).
    pub max_upload_bytes: usize,
    /// Content backend base URL, e.g. `http://localhost:8000/api`.
    pub api_url: String,
    /// Base URL relative image paths resolve against.
    pub asset_base_url: String,
    /// Static site root. Admin pages live under `{public_dir}/admin`.
    pub public_dir: PathBuf,
    /// `APP_ENV=production`: session cookies are marked `Secure`.
    pub production: bool,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                                  | Default                      |
    /// |------------------------------------------|------------------------------|
    /// | `HOST`                                   | `0.0.0.0`                    |
    /// | `PORT`                                   | `3000`                       |
    /// | `CORS_ORIGINS`                           | site URL                     |
    /// | `REQUEST_TIMEOUT_SECS`                   | `30`                         |
    /// | `UPSTREAM_TIMEOUT_SECS`                  | `20`                         |
    /// | `MAX_UPLOAD_BYTES`                       | `52428800`                   |
    /// | `API_URL` / `NEXT_PUBLIC_API_URL`        | `http://localhost:8000/api`  |
    /// | `API_IMG` / `NEXT_PUBLIC_API_IMG`        | `http://localhost:8000`      |
    /// | `NEXT_PUBLIC_SITE_URL` (CORS default)    | `http://localhost:3000`      |
    /// | `PUBLIC_DIR`                             | `public`                     |
    /// | `APP_ENV`                                | `development`                |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let site_url = std::env::var("NEXT_PUBLIC_SITE_URL")
            .unwrap_or_else(|_| "http://localhost:3000".into());

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or(site_url)
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let upstream_timeout_secs: u64 = std::env::var("UPSTREAM_TIMEOUT_SECS")
            .unwrap_or_else(|_| "20".into())
            .parse()
            .expect("UPSTREAM_TIMEOUT_SECS must be a valid u64");

        let max_upload_bytes: usize = std::env::var("MAX_UPLOAD_BYTES")
            .unwrap_or_else(|_| "52428800".into())
            .parse()
            .expect("MAX_UPLOAD_BYTES must be a valid usize");

        let api_url = first_env(&["API_URL", "NEXT_PUBLIC_API_URL"])
            .unwrap_or_else(|| "http://localhost:8000/api".into());

        let asset_base_url = first_env(&["API_IMG", "NEXT_PUBLIC_API_IMG"])
            .unwrap_or_else(|| "http://localhost:8000".into());

        let public_dir = std::env::var("PUBLIC_DIR")
            .unwrap_or_else(|_| "public".into())
            .into();

        let production = std::env::var("APP_ENV").is_ok_and(|v| v == "production");

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            upstream_timeout_secs,
            max_upload_bytes,
            api_url: api_url.trim_end_matches('/').to_string(),
            asset_base_url,
            public_dir,
            production,
        }
    }
}

/// The first of `names` that is set to a non-empty value.
fn first_env(names: &[&str]) -> Option<String> {
    names
        .iter()
        .filter_map(|name| std::env::var(name).ok())
        .find(|v| !v.trim().is_empty())
}
