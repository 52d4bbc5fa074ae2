//! HTML booking email bodies.
//!
//! Every template is an `askama` `.html` template, so interpolated booking
//! fields are HTML-escaped.

use askama::Template;
use chrono::NaiveDate;
use glimit_core::models::{Booking, BookingStatus};
use serde::{Deserialize, Serialize};

use crate::error::MailError;

/// Studio signature used in admin-triggered booking messages.
const STUDIO_NAME: &str = "G-Limit Studio";

/// Message type picked in the admin booking email dialog.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmailKind {
    Confirmation,
    Update,
    Cancellation,
    #[default]
    Custom,
}

/// Subject and HTML body of a rendered email.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedEmail {
    pub subject: String,
    pub html: String,
}

/// Background and text colour of a status pill.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Badge {
    pub background: &'static str,
    pub color: &'static str,
}

/// Pill colours of the admin booking message.
fn message_badge(status: BookingStatus) -> Badge {
    match status {
        BookingStatus::Confirmed => Badge { background: "#d4edda", color: "#155724" },
        BookingStatus::Pending => Badge { background: "#fff3cd", color: "#856404" },
        BookingStatus::Cancelled => Badge { background: "#f8d7da", color: "#721c24" },
        BookingStatus::Completed | BookingStatus::Other => {
            Badge { background: "#d1ecf1", color: "#0c5460" }
        }
    }
}

/// Header gradient plus pill colours of the status change email.
/// Unknown statuses use the pending palette.
fn status_palette(status: BookingStatus) -> (&'static str, Badge) {
    match status {
        BookingStatus::Confirmed => (
            "linear-gradient(135deg, #10b981 0%, #059669 100%)",
            Badge { background: "#d1fae5", color: "#065f46" },
        ),
        BookingStatus::Completed => (
            "linear-gradient(135deg, #3b82f6 0%, #2563eb 100%)",
            Badge { background: "#dbeafe", color: "#1e40af" },
        ),
        BookingStatus::Cancelled => (
            "linear-gradient(135deg, #ef4444 0%, #dc2626 100%)",
            Badge { background: "#fee2e2", color: "#991b1b" },
        ),
        BookingStatus::Pending | BookingStatus::Other => (
            "linear-gradient(135deg, #f59e0b 0%, #d97706 100%)",
            Badge { background: "#fef3c7", color: "#92400e" },
        ),
    }
}

/// `2026-11-02` becomes `Monday, November 2, 2026`. Anything that is not an
/// ISO day is shown as stored.
pub fn format_long_date(date: &str) -> String {
    match NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d") {
        Ok(day) => day.format("%A, %B %-d, %Y").to_string(),
        Err(_) => date.to_string(),
    }
}

/// `confirmed` becomes `Confirmed`.
fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

// ---------------------------------------------------------------------------
// Admin booking message
// ---------------------------------------------------------------------------

#[derive(Template)]
#[template(path = "booking_message.html")]
struct BookingMessageTemplate<'a> {
    subject: &'a str,
    heading: &'a str,
    body_text: &'a str,
    custom_message: &'a str,
    booking: &'a Booking,
    badge: Badge,
    studio_name: &'a str,
}

/// Render the message an admin sends from the bookings page.
///
/// The custom message block is only present when the message is non-blank.
pub fn render_booking_message(
    booking: &Booking,
    custom_message: &str,
    kind: EmailKind,
) -> Result<RenderedEmail, MailError> {
    let service = &booking.service_type;
    let (subject, heading, body_text) = match kind {
        EmailKind::Confirmation => (
            format!("Booking Confirmation - {service}"),
            "Booking Confirmed! 🎉",
            format!(
                "Thank you for booking with us! We're excited to confirm your {service} appointment."
            ),
        ),
        EmailKind::Update => (
            format!("Booking Update - {service}"),
            "Your Booking Has Been Updated",
            "We wanted to let you know that your booking has been updated.".to_string(),
        ),
        EmailKind::Cancellation => (
            format!("Booking Cancellation - {service}"),
            "Booking Cancellation Notice",
            "We regret to inform you that your booking has been cancelled.".to_string(),
        ),
        EmailKind::Custom => (
            format!("Message Regarding Your Booking - {service}"),
            "Update on Your Booking",
            String::new(),
        ),
    };

    let html = BookingMessageTemplate {
        subject: &subject,
        heading,
        body_text: &body_text,
        custom_message: custom_message.trim(),
        booking,
        badge: message_badge(booking.status_kind()),
        studio_name: STUDIO_NAME,
    }
    .render()?;

    Ok(RenderedEmail { subject, html })
}

// ---------------------------------------------------------------------------
// Booking lifecycle emails
// ---------------------------------------------------------------------------

#[derive(Template)]
#[template(path = "booking_received.html")]
struct BookingReceivedTemplate<'a> {
    booking: &'a Booking,
    date: String,
    message: &'a str,
}

/// Sent to the client right after a booking request is stored.
pub fn render_booking_received(booking: &Booking) -> Result<RenderedEmail, MailError> {
    let html = BookingReceivedTemplate {
        booking,
        date: format_long_date(&booking.date),
        message: booking.message.as_deref().unwrap_or("").trim(),
    }
    .render()?;
    Ok(RenderedEmail {
        subject: "Booking Confirmation - G-Limit Photography".to_string(),
        html,
    })
}

#[derive(Template)]
#[template(path = "admin_booking_alert.html")]
struct AdminBookingAlertTemplate<'a> {
    booking: &'a Booking,
    date: String,
    message: &'a str,
}

/// Sent to the studio admin for every new booking request.
pub fn render_admin_booking_alert(booking: &Booking) -> Result<RenderedEmail, MailError> {
    let html = AdminBookingAlertTemplate {
        booking,
        date: format_long_date(&booking.date),
        message: booking.message.as_deref().unwrap_or("").trim(),
    }
    .render()?;
    Ok(RenderedEmail {
        subject: format!("New Booking Request - {}", booking.full_name()),
        html,
    })
}

#[derive(Template)]
#[template(path = "booking_approved.html")]
struct BookingApprovedTemplate<'a> {
    booking: &'a Booking,
    date: String,
}

/// Sent to the client when the studio approves a booking.
pub fn render_booking_approved(booking: &Booking) -> Result<RenderedEmail, MailError> {
    let html = BookingApprovedTemplate {
        booking,
        date: format_long_date(&booking.date),
    }
    .render()?;
    Ok(RenderedEmail {
        subject: "Booking Approved - G-Limit Photography".to_string(),
        html,
    })
}

#[derive(Template)]
#[template(path = "booking_status.html")]
struct BookingStatusTemplate<'a> {
    booking: &'a Booking,
    date: String,
    old_status: &'a str,
    status_label: String,
    gradient: &'static str,
    badge: Badge,
    cancelled: bool,
    completed: bool,
}

/// Sent to the client when a booking moves from `old_status` to its
/// current status.
pub fn render_booking_status(
    booking: &Booking,
    old_status: &str,
) -> Result<RenderedEmail, MailError> {
    let kind = booking.status_kind();
    let (gradient, badge) = status_palette(kind);
    let status_label = capitalize(&booking.status);
    let html = BookingStatusTemplate {
        booking,
        date: format_long_date(&booking.date),
        old_status,
        status_label: status_label.clone(),
        gradient,
        badge,
        cancelled: kind == BookingStatus::Cancelled,
        completed: kind == BookingStatus::Completed,
    }
    .render()?;
    Ok(RenderedEmail {
        subject: format!("Booking Status Update - {status_label}"),
        html,
    })
}
