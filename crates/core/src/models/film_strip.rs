use serde::{Deserialize, Serialize};

use super::Record;
use crate::types::DbId;

/// One frame of the home page film strip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilmStripImage {
    pub id: DbId,
    pub image_path: String,
    #[serde(default)]
    pub alt_text: Option<String>,
    #[serde(default)]
    pub sort_order: i32,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

impl Record for FilmStripImage {
    const ENTITY: &'static str = "Film strip image";

    fn id(&self) -> DbId {
        self.id
    }
}
