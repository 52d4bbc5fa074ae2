//! Domain building blocks for the G-Limit Studio back office.
//!
//! - [`models`] -- records mirrored from the content backend.
//! - [`pagination`] -- the `{ data, last_page }` list envelope.
//! - [`assets`] -- image path to URL resolution.
//! - [`forms`] -- admin create/update drafts and their validation.
//! - [`chatbot`] -- the keyword-matched studio assistant.

pub mod assets;
pub mod chatbot;
pub mod error;
pub mod forms;
pub mod models;
pub mod pagination;
pub mod types;
