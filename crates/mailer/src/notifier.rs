//! Chooses the template, sender and recipient for each booking email.

use std::sync::Arc;

use glimit_core::models::Booking;

use crate::config::SmtpConfig;
use crate::error::MailError;
use crate::templates::{self, EmailKind, RenderedEmail};
use crate::transport::{MailTransport, OutgoingEmail};

/// Sender display name of admin-triggered booking messages.
const BOOKING_SYSTEM_NAME: &str = "Booking System";

/// Sender display name of the studio's lifecycle emails.
const STUDIO_SENDER_NAME: &str = "G-Limit Photography";

/// Mailboxes booking emails are sent from and to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MailIdentity {
    /// Sender of admin-triggered messages and recipient of new-booking alerts.
    pub admin_email: String,
    /// Sender of client-facing lifecycle emails.
    pub studio_email: String,
}

impl From<&SmtpConfig> for MailIdentity {
    fn from(config: &SmtpConfig) -> Self {
        Self {
            admin_email: config.admin_email.clone(),
            studio_email: config.studio_email().to_string(),
        }
    }
}

/// Renders booking emails and hands them to a [`MailTransport`].
///
/// Every method sends exactly once and returns the `Message-ID`.
#[derive(Clone)]
pub struct BookingNotifier {
    transport: Arc<dyn MailTransport>,
    identity: MailIdentity,
}

impl BookingNotifier {
    pub fn new(transport: Arc<dyn MailTransport>, identity: MailIdentity) -> Self {
        Self { transport, identity }
    }

    pub fn identity(&self) -> &MailIdentity {
        &self.identity
    }

    /// The message an admin writes from the bookings page, sent to the client.
    pub async fn send_booking_message(
        &self,
        booking: &Booking,
        custom_message: &str,
        kind: EmailKind,
    ) -> Result<String, MailError> {
        let rendered = templates::render_booking_message(booking, custom_message, kind)?;
        self.deliver(
            BOOKING_SYSTEM_NAME,
            &self.identity.admin_email,
            &booking.email,
            rendered,
        )
        .await
    }

    /// Acknowledge a new booking request to the client.
    pub async fn send_booking_received(&self, booking: &Booking) -> Result<String, MailError> {
        let rendered = templates::render_booking_received(booking)?;
        self.deliver(
            STUDIO_SENDER_NAME,
            &self.identity.studio_email,
            &booking.email,
            rendered,
        )
        .await
    }

    /// Alert the studio admin about a new booking request.
    pub async fn send_admin_alert(&self, booking: &Booking) -> Result<String, MailError> {
        let rendered = templates::render_admin_booking_alert(booking)?;
        self.deliver(
            STUDIO_SENDER_NAME,
            &self.identity.studio_email,
            &self.identity.admin_email,
            rendered,
        )
        .await
    }

    pub async fn send_booking_approved(&self, booking: &Booking) -> Result<String, MailError> {
        let rendered = templates::render_booking_approved(booking)?;
        self.deliver(
            STUDIO_SENDER_NAME,
            &self.identity.studio_email,
            &booking.email,
            rendered,
        )
        .await
    }

    /// Tell the client their booking moved from `old_status` to its current
    /// status.
    pub async fn send_status_update(
        &self,
        booking: &Booking,
        old_status: &str,
    ) -> Result<String, MailError> {
        let rendered = templates::render_booking_status(booking, old_status)?;
        self.deliver(
            STUDIO_SENDER_NAME,
            &self.identity.studio_email,
            &booking.email,
            rendered,
        )
        .await
    }

    async fn deliver(
        &self,
        from_name: &str,
        from_address: &str,
        to: &str,
        rendered: RenderedEmail,
    ) -> Result<String, MailError> {
        let email = OutgoingEmail {
            from_name: from_name.to_string(),
            from_address: from_address.to_string(),
            to: to.to_string(),
            subject: rendered.subject,
            html: rendered.html,
        };
        let result = self.transport.send(&email).await;
        if let Err(e) = &result {
            tracing::error!(error = %e, to = %email.to, subject = %email.subject, "Failed to send booking email");
        }
        result
    }
}
