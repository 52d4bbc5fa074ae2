//! Admin console logic for the G-Limit Studio back office.
//!
//! - [`client`] -- the [`ResourceApi`] seam and [`ProxyClient`], which talks
//!   to the `/api/*` proxy routes.
//! - [`resource`] -- binds each content entity to its proxy path and draft.
//! - [`page`] -- [`ResourcePage`], the generic list/create/delete page.
//! - [`upload`] -- upload selections and preview URL lifetimes.
//! - [`hero`] -- the hero section edit dialog.

pub mod client;
pub mod error;
pub mod hero;
pub mod page;
pub mod resource;
pub mod upload;

pub use client::{ListQuery, ProxyClient, ResourceApi, SortOrder};
pub use error::ConsoleError;
pub use hero::HeroImageEditor;
pub use page::{LoadState, Modal, ResourcePage, Toast, ToastKind};
pub use resource::Resource;
pub use upload::{BlobUrlRegistry, ObjectUrls, PreviewUrl, UploadSelection};
