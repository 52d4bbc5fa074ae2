//! The hero section edit dialog.
//!
//! Stored images are shown read-only next to the files added in this
//! dialog. Saving sends the status and the new files; stored images are
//! never re-uploaded.

use glimit_core::assets::resolve_image_url;
use glimit_core::forms::HeroSectionUpdate;
use glimit_core::models::{HeroSection, HeroStatus};

use crate::upload::UploadSelection;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeroImageEditor {
    existing: Vec<String>,
    status: HeroStatus,
}

impl HeroImageEditor {
    /// Open the editor for `hero`, resolving its stored paths against
    /// `asset_base`.
    pub fn new(hero: &HeroSection, asset_base: &str) -> Self {
        Self {
            existing: hero
                .image_path
                .paths()
                .into_iter()
                .map(|p| resolve_image_url(asset_base, p))
                .collect(),
            status: hero.status,
        }
    }

    /// URLs of the images already stored for this hero section.
    pub fn existing_images(&self) -> &[String] {
        &self.existing
    }

    pub fn status(&self) -> HeroStatus {
        self.status
    }

    pub fn set_status(&mut self, status: HeroStatus) {
        self.status = status;
    }

    /// Stored images followed by previews of the files added in this dialog.
    pub fn gallery<'a>(&'a self, uploads: &'a UploadSelection) -> Vec<&'a str> {
        self.existing
            .iter()
            .map(String::as_str)
            .chain(uploads.previews())
            .collect()
    }

    /// The payload to submit with the dialog's upload selection.
    pub fn into_update(self) -> HeroSectionUpdate {
        HeroSectionUpdate {
            status: self.status,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use glimit_core::forms::UploadFile;

    use super::*;
    use crate::upload::BlobUrlRegistry;

    fn hero(image_path: serde_json::Value) -> HeroSection {
        serde_json::from_value(serde_json::json!({
            "id": 3,
            "image_path": image_path,
            "status": "inactive"
        }))
        .unwrap()
    }

    #[test]
    fn existing_paths_are_resolved() {
        let editor = HeroImageEditor::new(
            &hero(serde_json::json!(["/heroes/a.jpg", "https://cdn.test/b.jpg"])),
            "http://localhost:8000/",
        );
        assert_eq!(
            editor.existing_images(),
            &[
                "http://localhost:8000/heroes/a.jpg".to_string(),
                "https://cdn.test/b.jpg".to_string()
            ]
        );
        assert_eq!(editor.status(), HeroStatus::Inactive);
    }

    #[test]
    fn single_path_hero() {
        let editor =
            HeroImageEditor::new(&hero(serde_json::json!("heroes/one.jpg")), "http://img.test");
        assert_eq!(editor.existing_images(), &["http://img.test/heroes/one.jpg".to_string()]);
    }

    #[test]
    fn gallery_lists_stored_then_new() {
        let editor = HeroImageEditor::new(&hero(serde_json::json!(["a.jpg"])), "http://img.test");
        let urls = Arc::new(BlobUrlRegistry::new("http://localhost:3000"));
        let mut uploads = UploadSelection::new(urls);
        uploads.add(vec![UploadFile::new("new.jpg", Some("image/jpeg"), vec![1])]);

        let gallery = editor.gallery(&uploads);
        assert_eq!(gallery.len(), 2);
        assert_eq!(gallery[0], "http://img.test/a.jpg");
        assert!(gallery[1].starts_with("blob:"));
    }

    #[test]
    fn update_carries_changed_status() {
        let mut editor = HeroImageEditor::new(&hero(serde_json::json!([])), "http://img.test");
        editor.set_status(HeroStatus::Active);
        assert_eq!(editor.into_update().status, HeroStatus::Active);
    }
}
