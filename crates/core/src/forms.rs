//! Admin form drafts and their multipart encoding.
//!
//! A draft holds the text fields of a create/update dialog. Files come from
//! the dialog's upload selection and are passed in separately, so a draft can
//! be validated before anything is uploaded. Validation is presentational:
//! the backend stays the only authority on what it accepts.

use chrono::Utc;

use crate::error::CoreError;
use crate::models::HeroStatus;

/// Multipart field name for multi-image uploads.
pub const IMAGES_FIELD: &str = "images[]";

/// Multipart field name for single-image uploads (portfolio).
pub const IMAGE_FIELD: &str = "image";

/// A file picked in an upload dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadFile {
    pub file_name: String,
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

impl UploadFile {
    pub fn new(file_name: impl Into<String>, content_type: Option<&str>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            content_type: content_type.map(str::to_string),
            bytes,
        }
    }
}

/// One field of a multipart body, in the order it is sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormPart {
    Text { name: String, value: String },
    File { name: String, file: UploadFile },
}

impl FormPart {
    pub fn text(name: impl Into<String>, value: impl Into<String>) -> Self {
        FormPart::Text {
            name: name.into(),
            value: value.into(),
        }
    }

    pub fn file(name: impl Into<String>, file: UploadFile) -> Self {
        FormPart::File {
            name: name.into(),
            file,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            FormPart::Text { name, .. } | FormPart::File { name, .. } => name,
        }
    }
}

/// A dialog's text fields, validated and encoded together with its files.
pub trait Draft {
    /// Check required fields. The message is shown to the user as is.
    fn validate(&self, files: &[UploadFile]) -> Result<(), CoreError>;

    /// Encode the draft and its files as multipart parts.
    fn into_parts(self, files: Vec<UploadFile>) -> Vec<FormPart>;

    /// Confirmation shown after the backend accepted the draft.
    fn success_message(&self, file_count: usize) -> String;
}

fn require(value: &str, message: &str) -> Result<(), CoreError> {
    if value.trim().is_empty() {
        return Err(CoreError::Validation(message.to_string()));
    }
    Ok(())
}

fn require_files(files: &[UploadFile], message: &str) -> Result<(), CoreError> {
    if files.is_empty() {
        return Err(CoreError::Validation(message.to_string()));
    }
    Ok(())
}

fn image_parts(parts: &mut Vec<FormPart>, files: Vec<UploadFile>) {
    parts.extend(files.into_iter().map(|f| FormPart::file(IMAGES_FIELD, f)));
}

// ---------------------------------------------------------------------------
// Category
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default)]
pub struct CategoryDraft {
    pub name: String,
    pub description: String,
}

impl Draft for CategoryDraft {
    fn validate(&self, files: &[UploadFile]) -> Result<(), CoreError> {
        require(&self.name, "Please enter a category name")?;
        require_files(files, "Please select at least one image")
    }

    fn into_parts(self, files: Vec<UploadFile>) -> Vec<FormPart> {
        let mut parts = vec![FormPart::text("name", self.name)];
        if !self.description.trim().is_empty() {
            parts.push(FormPart::text("description", self.description));
        }
        image_parts(&mut parts, files);
        parts
    }

    fn success_message(&self, file_count: usize) -> String {
        format!(
            "Category \"{}\" created with {file_count} image(s)",
            self.name
        )
    }
}

// ---------------------------------------------------------------------------
// Film strip
// ---------------------------------------------------------------------------

/// The film strip dialog has no text fields, only images.
#[derive(Debug, Clone, Default)]
pub struct FilmStripDraft;

impl Draft for FilmStripDraft {
    fn validate(&self, files: &[UploadFile]) -> Result<(), CoreError> {
        require_files(files, "Please select at least one image")
    }

    fn into_parts(self, files: Vec<UploadFile>) -> Vec<FormPart> {
        let mut parts = Vec::with_capacity(files.len());
        image_parts(&mut parts, files);
        parts
    }

    fn success_message(&self, file_count: usize) -> String {
        format!("{file_count} image(s) uploaded successfully")
    }
}

// ---------------------------------------------------------------------------
// Hero sections
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default)]
pub struct HeroSectionDraft {
    pub status: HeroStatus,
}

impl Draft for HeroSectionDraft {
    fn validate(&self, files: &[UploadFile]) -> Result<(), CoreError> {
        require_files(files, "Please select at least one image")
    }

    fn into_parts(self, files: Vec<UploadFile>) -> Vec<FormPart> {
        let mut parts = vec![FormPart::text("status", self.status.as_str())];
        image_parts(&mut parts, files);
        parts
    }

    fn success_message(&self, file_count: usize) -> String {
        format!("{file_count} hero image(s) added successfully.")
    }
}

/// Edit dialog payload. Only newly added files are uploaded, and a status
/// change alone is a valid edit.
#[derive(Debug, Clone, Default)]
pub struct HeroSectionUpdate {
    pub status: HeroStatus,
}

impl Draft for HeroSectionUpdate {
    fn validate(&self, _files: &[UploadFile]) -> Result<(), CoreError> {
        Ok(())
    }

    fn into_parts(self, files: Vec<UploadFile>) -> Vec<FormPart> {
        HeroSectionDraft {
            status: self.status,
        }
        .into_parts(files)
    }

    fn success_message(&self, _file_count: usize) -> String {
        "Hero section updated successfully".to_string()
    }
}

// ---------------------------------------------------------------------------
// News
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct NewsDraft {
    pub title: String,
    pub description: String,
    /// `YYYY-MM-DD`; defaults to today (UTC).
    pub date: String,
}

impl Default for NewsDraft {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            date: Utc::now().format("%Y-%m-%d").to_string(),
        }
    }
}

impl Draft for NewsDraft {
    fn validate(&self, files: &[UploadFile]) -> Result<(), CoreError> {
        let message = "Please fill in all fields and upload at least one image";
        require(&self.title, message)?;
        require(&self.description, message)?;
        require_files(files, message)
    }

    fn into_parts(self, files: Vec<UploadFile>) -> Vec<FormPart> {
        let mut parts = vec![
            FormPart::text("title", self.title),
            FormPart::text("description", self.description),
            FormPart::text("date", self.date),
        ];
        image_parts(&mut parts, files);
        parts
    }

    fn success_message(&self, _file_count: usize) -> String {
        "News item created successfully".to_string()
    }
}

// ---------------------------------------------------------------------------
// Portfolio
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default)]
pub struct PortfolioDraft {
    pub title: String,
    pub category: String,
    pub camera: String,
    pub alt: String,
}

impl Draft for PortfolioDraft {
    fn validate(&self, files: &[UploadFile]) -> Result<(), CoreError> {
        require(&self.title, "Please enter a title")?;
        require(&self.category, "Please enter a category")?;
        require(&self.alt, "Please enter alt text")?;
        require_files(files, "Please select an image")
    }

    /// Portfolio items carry exactly one image; extra files are ignored.
    fn into_parts(self, files: Vec<UploadFile>) -> Vec<FormPart> {
        let mut parts = vec![
            FormPart::text("title", self.title),
            FormPart::text("category", self.category),
            FormPart::text("camera", self.camera),
            FormPart::text("alt", self.alt),
        ];
        if let Some(file) = files.into_iter().next() {
            parts.push(FormPart::file(IMAGE_FIELD, file));
        }
        parts
    }

    fn success_message(&self, _file_count: usize) -> String {
        "Portfolio item created successfully".to_string()
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    fn jpg(name: &str) -> UploadFile {
        UploadFile::new(name, Some("image/jpeg"), vec![0xFF, 0xD8])
    }

    fn validation_message(err: CoreError) -> String {
        match err {
            CoreError::Validation(msg) => msg,
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn category_requires_name_before_files() {
        let draft = CategoryDraft {
            name: "   ".into(),
            description: String::new(),
        };
        let msg = validation_message(draft.validate(&[]).unwrap_err());
        assert_eq!(msg, "Please enter a category name");
    }

    #[test]
    fn category_requires_an_image() {
        let draft = CategoryDraft {
            name: "Weddings".into(),
            description: String::new(),
        };
        let msg = validation_message(draft.validate(&[]).unwrap_err());
        assert_eq!(msg, "Please select at least one image");
    }

    #[test]
    fn category_parts_skip_blank_description() {
        let draft = CategoryDraft {
            name: "Weddings".into(),
            description: " ".into(),
        };
        let parts = draft.into_parts(vec![jpg("a.jpg"), jpg("b.jpg")]);
        let names: Vec<&str> = parts.iter().map(FormPart::name).collect();
        assert_eq!(names, vec!["name", "images[]", "images[]"]);
    }

    #[test]
    fn news_needs_every_field() {
        let draft = NewsDraft {
            title: "Open day".into(),
            description: String::new(),
            date: "2026-10-01".into(),
        };
        assert_matches!(draft.validate(&[jpg("a.jpg")]), Err(CoreError::Validation(_)));
    }

    #[test]
    fn news_date_defaults_to_iso_day() {
        let draft = NewsDraft::default();
        assert_eq!(draft.date.len(), 10);
        assert_eq!(&draft.date[4..5], "-");
    }

    #[test]
    fn portfolio_checks_fields_in_order() {
        let mut draft = PortfolioDraft {
            title: "Dunes".into(),
            category: String::new(),
            camera: String::new(),
            alt: String::new(),
        };
        assert_eq!(
            validation_message(draft.validate(&[]).unwrap_err()),
            "Please enter a category"
        );
        draft.category = "Landscape".into();
        assert_eq!(
            validation_message(draft.validate(&[]).unwrap_err()),
            "Please enter alt text"
        );
        draft.alt = "Sand dunes at dusk".into();
        assert_eq!(
            validation_message(draft.validate(&[]).unwrap_err()),
            "Please select an image"
        );
        assert!(draft.validate(&[jpg("d.jpg")]).is_ok());
    }

    #[test]
    fn portfolio_sends_single_image_field() {
        let draft = PortfolioDraft {
            title: "Dunes".into(),
            category: "Landscape".into(),
            camera: "X100V".into(),
            alt: "Dunes".into(),
        };
        let parts = draft.into_parts(vec![jpg("a.jpg"), jpg("b.jpg")]);
        let files: Vec<_> = parts
            .iter()
            .filter(|p| matches!(p, FormPart::File { .. }))
            .collect();
        assert_eq!(files.len(), 1);
        assert_eq!(files[0].name(), IMAGE_FIELD);
    }

    #[test]
    fn hero_update_allows_status_only() {
        let update = HeroSectionUpdate {
            status: HeroStatus::Inactive,
        };
        assert!(update.validate(&[]).is_ok());
        let parts = update.into_parts(Vec::new());
        assert_eq!(parts, vec![FormPart::text("status", "inactive")]);
    }

    #[test]
    fn hero_create_requires_an_image() {
        assert_matches!(
            HeroSectionDraft::default().validate(&[]),
            Err(CoreError::Validation(_))
        );
    }
}
