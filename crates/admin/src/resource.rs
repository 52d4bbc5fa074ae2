//! Binds each content entity to its proxy path and create dialog.

use glimit_core::forms::{
    CategoryDraft, Draft, FilmStripDraft, HeroSectionDraft, NewsDraft, PortfolioDraft,
};
use glimit_core::models::{Category, FilmStripImage, HeroSection, NewsItem, PortfolioItem, Record};
use serde::de::DeserializeOwned;

/// A content entity managed by a [`ResourcePage`](crate::ResourcePage).
pub trait Resource: Record + DeserializeOwned + Clone + Send + Sync + 'static {
    /// Proxy path below `/api`, e.g. `categories`.
    const PATH: &'static str;

    /// The create dialog's fields.
    type Draft: Draft + Send;

    /// Toast shown after a successful delete.
    fn deleted_message() -> String {
        format!("{} deleted successfully", Self::ENTITY)
    }
}

impl Resource for Category {
    const PATH: &'static str = "categories";
    type Draft = CategoryDraft;
}

impl Resource for FilmStripImage {
    const PATH: &'static str = "film-strip";
    type Draft = FilmStripDraft;

    fn deleted_message() -> String {
        "Image deleted successfully".to_string()
    }
}

impl Resource for HeroSection {
    const PATH: &'static str = "hero-sections";
    type Draft = HeroSectionDraft;
}

impl Resource for NewsItem {
    const PATH: &'static str = "news";
    type Draft = NewsDraft;
}

impl Resource for PortfolioItem {
    const PATH: &'static str = "portfolio";
    type Draft = PortfolioDraft;
}
