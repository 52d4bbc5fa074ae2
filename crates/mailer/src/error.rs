/// Error type for booking email rendering and delivery.
#[derive(Debug, thiserror::Error)]
pub enum MailError {
    /// SMTP transport-level failure (authentication, connection, etc.).
    #[error("SMTP transport error: {0}")]
    Transport(#[from] lettre::transport::smtp::Error),

    /// The recipient or sender address could not be parsed.
    #[error("Email address parse error: {0}")]
    Address(#[from] lettre::address::AddressError),

    /// The MIME message could not be assembled.
    #[error("Email build error: {0}")]
    Build(String),

    /// A template failed to render.
    #[error("Email template error: {0}")]
    Render(#[from] askama::Error),

    /// `SMTP_HOST` is not set.
    #[error("Email delivery is not configured")]
    NotConfigured,
}
