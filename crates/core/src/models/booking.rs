use serde::{Deserialize, Deserializer, Serialize};

use crate::types::DbId;

/// A studio booking as stored by the backend booking API.
///
/// Only read here, to fill in notification emails.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    #[serde(default)]
    pub id: Option<DbId>,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(default)]
    pub phone: String,
    pub service_type: String,
    /// Session date, normally `YYYY-MM-DD`.
    pub date: String,
    pub time: String,
    #[serde(default, deserialize_with = "string_or_number")]
    pub guests: String,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default = "default_status")]
    pub status: String,
}

impl Booking {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    pub fn status_kind(&self) -> BookingStatus {
        BookingStatus::parse(&self.status)
    }
}

/// Known booking lifecycle states. Anything else is `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookingStatus {
    Pending,
    Confirmed,
    Completed,
    Cancelled,
    Other,
}

impl BookingStatus {
    pub fn parse(s: &str) -> Self {
        match s.trim().to_ascii_lowercase().as_str() {
            "pending" => BookingStatus::Pending,
            "confirmed" => BookingStatus::Confirmed,
            "completed" => BookingStatus::Completed,
            "cancelled" | "canceled" => BookingStatus::Cancelled,
            _ => BookingStatus::Other,
        }
    }
}

fn default_status() -> String {
    "pending".to_string()
}

/// Accept `"3"`, `3` or `null` for a field rendered as text.
fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::String(s) => s,
        serde_json::Value::Number(n) => n.to_string(),
        serde_json::Value::Null => String::new(),
        other => other.to_string(),
    })
}
