//! Booking notification emails.
//!
//! - [`SmtpConfig`] -- SMTP settings from the environment.
//! - [`MailTransport`] -- the send seam; [`SmtpMailer`] is the `lettre`
//!   implementation.
//! - [`templates`] -- HTML bodies rendered with `askama`.
//! - [`BookingNotifier`] -- picks the template, the sender and the recipient.

pub mod config;
pub mod error;
pub mod notifier;
pub mod templates;
pub mod transport;

pub use config::SmtpConfig;
pub use error::MailError;
pub use notifier::{BookingNotifier, MailIdentity};
pub use templates::{EmailKind, RenderedEmail};
pub use transport::{MailTransport, OutgoingEmail, SmtpMailer};
