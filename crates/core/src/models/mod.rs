//! Records mirrored from the content backend.
//!
//! The backend is the only store. These types carry what the back office
//! renders and nothing is enforced locally beyond a unique id.

pub mod booking;
pub mod category;
pub mod film_strip;
pub mod hero_section;
pub mod news;
pub mod portfolio;

pub use booking::{Booking, BookingStatus};
pub use category::{Category, CategoryImage};
pub use film_strip::FilmStripImage;
pub use hero_section::{HeroSection, HeroStatus, ImagePath};
pub use news::{NewsImage, NewsItem};
pub use portfolio::PortfolioItem;

use serde::{Deserialize, Deserializer};

use crate::types::DbId;

/// A backend record with a stable identifier.
pub trait Record {
    /// Human-readable entity name used in messages ("Category", "News item").
    const ENTITY: &'static str;

    fn id(&self) -> DbId;
}

/// `null` reads as the field's default, like a missing field.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
