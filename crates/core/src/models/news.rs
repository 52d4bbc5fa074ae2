use serde::{Deserialize, Serialize};

use super::Record;
use crate::types::DbId;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewsImage {
    pub id: DbId,
    pub image_path: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewsItem {
    pub id: DbId,
    pub title: String,
    pub description: String,
    /// Publication date as sent by the backend (`YYYY-MM-DD`).
    pub date: String,
    #[serde(default)]
    pub images: Vec<NewsImage>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

impl Record for NewsItem {
    const ENTITY: &'static str = "News item";

    fn id(&self) -> DbId {
        self.id
    }
}
