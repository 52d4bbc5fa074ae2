//! HTTP handlers.
//!
//! The five content modules are thin wrappers binding a
//! [`ProxiedResource`](crate::proxy::ProxiedResource) to the shared proxy
//! operations in [`crate::proxy`].

pub mod auth;
pub mod bookings;
pub mod categories;
pub mod chat;
pub mod film_strip;
pub mod health;
pub mod hero_sections;
pub mod news;
pub mod portfolio;
