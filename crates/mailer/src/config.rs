/// Default SMTP port (STARTTLS).
const DEFAULT_SMTP_PORT: u16 = 587;

/// Default admin mailbox when `ADMIN_EMAIL` is not set.
pub const DEFAULT_ADMIN_EMAIL: &str = "admin@glimit.local";

/// SMTP relay settings.
#[derive(Debug, Clone)]
pub struct SmtpConfig {
    /// SMTP server hostname.
    pub host: String,
    /// SMTP server port (defaults to 587).
    pub port: u16,
    /// `true` for implicit TLS (usually port 465), `false` for STARTTLS.
    pub secure: bool,
    /// Optional SMTP username.
    pub user: Option<String>,
    /// Optional SMTP password.
    pub password: Option<String>,
    /// Studio admin mailbox: sender of admin-triggered mail and recipient of
    /// new-booking alerts.
    pub admin_email: String,
}

impl SmtpConfig {
    /// Load configuration from environment variables.
    ///
    /// Returns `None` if `SMTP_HOST` is not set, signalling that email
    /// delivery is not configured.
    ///
    /// | Variable      | Required | Default              |
    /// |---------------|----------|----------------------|
    /// | `SMTP_HOST`   | yes      | --                   |
    /// | `SMTP_PORT`   | no       | `587`                |
    /// | `SMTP_SECURE` | no       | `false`              |
    /// | `SMTP_USER`   | no       | --                   |
    /// | `SMTP_PASS`   | no       | --                   |
    /// | `ADMIN_EMAIL` | no       | `admin@glimit.local` |
    pub fn from_env() -> Option<Self> {
        let host = std::env::var("SMTP_HOST").ok().filter(|h| !h.is_empty())?;
        Some(Self {
            host,
            port: std::env::var("SMTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(DEFAULT_SMTP_PORT),
            secure: std::env::var("SMTP_SECURE").is_ok_and(|v| v == "true"),
            user: std::env::var("SMTP_USER").ok(),
            password: std::env::var("SMTP_PASS").ok(),
            admin_email: admin_email_from_env(),
        })
    }

    /// Mailbox the studio's own client-facing mail is sent from: the SMTP
    /// login when there is one, else the admin mailbox.
    pub fn studio_email(&self) -> &str {
        self.user.as_deref().unwrap_or(&self.admin_email)
    }
}

/// `ADMIN_EMAIL`, falling back to [`DEFAULT_ADMIN_EMAIL`].
pub fn admin_email_from_env() -> String {
    std::env::var("ADMIN_EMAIL").unwrap_or_else(|_| DEFAULT_ADMIN_EMAIL.to_string())
}
