use serde::{Deserialize, Serialize};

use super::{null_as_default, Record};
use crate::types::DbId;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioItem {
    pub id: DbId,
    pub title: String,
    /// Free text, not an enum. The public page groups by exact value.
    pub category: String,
    #[serde(default)]
    pub camera: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub alt: String,
    pub image_path: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub order: i32,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

impl Record for PortfolioItem {
    const ENTITY: &'static str = "Portfolio item";

    fn id(&self) -> DbId {
        self.id
    }
}
