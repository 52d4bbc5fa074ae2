use serde::{Deserialize, Serialize};

use super::Record;
use crate::types::DbId;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryImage {
    pub id: DbId,
    pub category_id: DbId,
    pub image_path: String,
    #[serde(default)]
    pub alt_text: Option<String>,
    /// Display order. Advisory only; the backend does not enforce it.
    #[serde(default)]
    pub sort_order: i32,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: DbId,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub images: Vec<CategoryImage>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

impl Record for Category {
    const ENTITY: &'static str = "Category";

    fn id(&self) -> DbId {
        self.id
    }
}
