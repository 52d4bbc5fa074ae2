use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::{null_as_default, Record};
use crate::error::CoreError;
use crate::types::DbId;

/// Visibility of a hero section on the home page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HeroStatus {
    #[default]
    Active,
    Inactive,
}

impl HeroStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            HeroStatus::Active => "active",
            HeroStatus::Inactive => "inactive",
        }
    }
}

impl fmt::Display for HeroStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HeroStatus {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "active" => Ok(HeroStatus::Active),
            "inactive" => Ok(HeroStatus::Inactive),
            other => Err(CoreError::Validation(format!(
                "Unknown hero status '{other}', expected 'active' or 'inactive'"
            ))),
        }
    }
}

/// The backend stores either one path or a list of paths per hero section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ImagePath {
    Single(String),
    Multiple(Vec<String>),
}

impl ImagePath {
    /// All paths, in stored order. An empty single path yields nothing.
    pub fn paths(&self) -> Vec<&str> {
        match self {
            ImagePath::Single(p) if p.is_empty() => Vec::new(),
            ImagePath::Single(p) => vec![p.as_str()],
            ImagePath::Multiple(ps) => ps.iter().map(String::as_str).collect(),
        }
    }
}

impl Default for ImagePath {
    fn default() -> Self {
        ImagePath::Multiple(Vec::new())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeroSection {
    pub id: DbId,
    #[serde(default, deserialize_with = "null_as_default")]
    pub image_path: ImagePath,
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: HeroStatus,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

impl Record for HeroSection {
    const ENTITY: &'static str = "Hero section";

    fn id(&self) -> DbId {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_path_variant() {
        let hero: HeroSection = serde_json::from_value(serde_json::json!({
            "id": 1,
            "image_path": "hero/one.jpg",
            "status": "inactive"
        }))
        .unwrap();
        assert_eq!(hero.image_path.paths(), vec!["hero/one.jpg"]);
        assert_eq!(hero.status, HeroStatus::Inactive);
    }

    #[test]
    fn multi_path_variant() {
        let hero: HeroSection = serde_json::from_value(serde_json::json!({
            "id": 2,
            "image_path": ["a.jpg", "b.jpg"],
            "status": "active"
        }))
        .unwrap();
        assert_eq!(hero.image_path.paths(), vec!["a.jpg", "b.jpg"]);
    }

    #[test]
    fn null_path_is_an_empty_list() {
        let hero: HeroSection = serde_json::from_value(serde_json::json!({
            "id": 3,
            "image_path": null,
            "status": null
        }))
        .unwrap();
        assert_eq!(hero.image_path, ImagePath::Multiple(Vec::new()));
        assert!(hero.image_path.paths().is_empty());
        assert_eq!(hero.status, HeroStatus::Active);
    }

    #[test]
    fn empty_single_path_has_no_images() {
        assert!(ImagePath::Single(String::new()).paths().is_empty());
    }

    #[test]
    fn status_parses_both_values() {
        assert_eq!("active".parse::<HeroStatus>().unwrap(), HeroStatus::Active);
        assert_eq!("inactive".parse::<HeroStatus>().unwrap(), HeroStatus::Inactive);
        assert!("archived".parse::<HeroStatus>().is_err());
    }
}
