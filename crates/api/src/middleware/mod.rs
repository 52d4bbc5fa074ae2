//! Admin session middleware and extractors.
//!
//! - [`admin_token::AdminToken`] -- the `admin_token` cookie, if any.
//! - [`admin_token::RequireAdminToken`] -- rejects requests without it.
//! - [`admin_guard::admin_guard`] -- redirects for the `/admin` pages.

pub mod admin_guard;
pub mod admin_token;
