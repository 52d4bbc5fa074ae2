//! The generic admin list page.
//!
//! One [`ResourcePage`] drives the list, create dialog, view dialog, delete
//! confirmation and (for hero sections) edit dialog of any [`Resource`].
//! Load state and modal state are independent: a refetch never closes a
//! dialog and a dialog never blocks a refetch.

use std::sync::Arc;

use glimit_core::forms::Draft;
use glimit_core::models::Record;
use glimit_core::pagination::{Paginated, DEFAULT_PAGE_SIZE};

use crate::client::{ListQuery, ResourceApi, SortOrder};
use crate::error::ConsoleError;
use crate::resource::Resource;
use crate::upload::{ObjectUrls, UploadSelection};

/// Progress of the current list fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState {
    Idle,
    Loading,
    Loaded,
    Error(String),
}

/// The dialog currently open over the list.
#[derive(Debug, Clone, PartialEq)]
pub enum Modal<R> {
    Closed,
    Add,
    View(R),
    Delete(R),
    Edit(R),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub kind: ToastKind,
    pub title: String,
    pub description: String,
}

impl Toast {
    pub fn success(description: impl Into<String>) -> Self {
        Self {
            kind: ToastKind::Success,
            title: "Success".to_string(),
            description: description.into(),
        }
    }

    pub fn error(description: impl Into<String>) -> Self {
        Self {
            kind: ToastKind::Error,
            title: "Error".to_string(),
            description: description.into(),
        }
    }
}

/// List, create, view, delete and edit for one resource.
pub struct ResourcePage<R: Resource, A: ResourceApi> {
    api: A,
    load: LoadState,
    modal: Modal<R>,
    items: Vec<R>,
    /// 0-based page index.
    page_index: u32,
    page_size: u32,
    total_pages: u32,
    search: Option<String>,
    sort: Option<(String, SortOrder)>,
    uploads: UploadSelection,
    toasts: Vec<Toast>,
}

impl<R: Resource, A: ResourceApi> ResourcePage<R, A> {
    pub fn new(api: A, urls: Arc<dyn ObjectUrls>) -> Self {
        Self {
            api,
            load: LoadState::Idle,
            modal: Modal::Closed,
            items: Vec::new(),
            page_index: 0,
            page_size: DEFAULT_PAGE_SIZE,
            total_pages: 1,
            search: None,
            sort: None,
            uploads: UploadSelection::new(urls),
            toasts: Vec::new(),
        }
    }

    // ---- accessors ----

    pub fn load_state(&self) -> &LoadState {
        &self.load
    }

    pub fn modal(&self) -> &Modal<R> {
        &self.modal
    }

    pub fn items(&self) -> &[R] {
        &self.items
    }

    pub fn page_index(&self) -> u32 {
        self.page_index
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    pub fn total_pages(&self) -> u32 {
        self.total_pages
    }

    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }

    /// Hand the pending toasts to the renderer.
    pub fn take_toasts(&mut self) -> Vec<Toast> {
        std::mem::take(&mut self.toasts)
    }

    pub fn uploads(&self) -> &UploadSelection {
        &self.uploads
    }

    pub fn uploads_mut(&mut self) -> &mut UploadSelection {
        &mut self.uploads
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    // ---- list ----

    fn query(&self) -> ListQuery {
        ListQuery {
            page: self.page_index + 1,
            per_page: self.page_size,
            search: self.search.clone(),
            sort: self.sort.clone(),
        }
    }

    /// Fetch the current page. On failure the stale items stay visible.
    pub async fn refresh(&mut self) {
        self.load = LoadState::Loading;
        let query = self.query();
        let result = self
            .api
            .list(R::PATH, &query)
            .await
            .and_then(|body| Paginated::<R>::from_value(body).map_err(ConsoleError::from));

        match result {
            Ok(page) => {
                tracing::debug!(
                    resource = R::PATH,
                    page = query.page,
                    count = page.data.len(),
                    "Loaded page"
                );
                self.items = page.data;
                self.total_pages = page.last_page.max(1);
                self.load = LoadState::Loaded;
            }
            Err(e) => {
                tracing::warn!(resource = R::PATH, error = %e, "Failed to load page");
                self.load = LoadState::Error(e.to_string());
                self.toasts.push(Toast::error(e.to_string()));
            }
        }
    }

    pub async fn set_page(&mut self, page_index: u32) {
        self.page_index = page_index;
        self.refresh().await;
    }

    /// Change the page size and go back to the first page.
    pub async fn set_page_size(&mut self, page_size: u32) {
        self.page_size = page_size.max(1);
        self.page_index = 0;
        self.refresh().await;
    }

    pub async fn set_search(&mut self, search: impl Into<String>) {
        let search = search.into();
        self.search = (!search.trim().is_empty()).then_some(search);
        self.page_index = 0;
        self.refresh().await;
    }

    pub async fn set_sort(&mut self, by: impl Into<String>, order: SortOrder) {
        self.sort = Some((by.into(), order));
        self.refresh().await;
    }

    // ---- dialogs ----

    pub fn open_add(&mut self) {
        self.uploads.clear();
        self.modal = Modal::Add;
    }

    pub fn open_view(&mut self, item: R) {
        self.modal = Modal::View(item);
    }

    pub fn open_edit(&mut self, item: R) {
        self.uploads.clear();
        self.modal = Modal::Edit(item);
    }

    /// Close whatever dialog is open and release its upload previews.
    pub fn close_modal(&mut self) {
        self.uploads.clear();
        self.modal = Modal::Closed;
    }

    // ---- create ----

    /// Validate and send the add dialog. Returns whether the backend
    /// accepted it.
    ///
    /// Nothing is sent when validation fails. On success the dialog closes,
    /// previews are released and the current page is refetched.
    pub async fn submit_create(&mut self, draft: R::Draft) -> bool {
        if let Err(e) = draft.validate(self.uploads.files()) {
            self.toasts.push(Toast::error(ConsoleError::from(e).to_string()));
            return false;
        }

        let message = draft.success_message(self.uploads.len());
        let parts = draft.into_parts(self.uploads.files().to_vec());

        match self.api.create(R::PATH, parts).await {
            Ok(_) => {
                let sent = self.uploads.take_files();
                tracing::info!(resource = R::PATH, file_count = sent.len(), "Created record");
                self.toasts.push(Toast::success(message));
                self.modal = Modal::Closed;
                self.refresh().await;
                true
            }
            Err(e) => {
                tracing::warn!(resource = R::PATH, error = %e, "Create failed");
                self.toasts.push(Toast::error(e.to_string()));
                false
            }
        }
    }

    // ---- edit ----

    /// Send the edit dialog for the record in [`Modal::Edit`]. Only the
    /// files added in this dialog are uploaded.
    pub async fn submit_update<D: Draft + Send>(&mut self, draft: D) -> bool {
        let id = match &self.modal {
            Modal::Edit(item) => item.id(),
            _ => return false,
        };
        if let Err(e) = draft.validate(self.uploads.files()) {
            self.toasts.push(Toast::error(ConsoleError::from(e).to_string()));
            return false;
        }

        let message = draft.success_message(self.uploads.len());
        let parts = draft.into_parts(self.uploads.files().to_vec());

        match self.api.update(R::PATH, id, parts).await {
            Ok(_) => {
                let sent = self.uploads.take_files();
                tracing::info!(resource = R::PATH, id, file_count = sent.len(), "Updated record");
                self.toasts.push(Toast::success(message));
                self.modal = Modal::Closed;
                self.refresh().await;
                true
            }
            Err(e) => {
                tracing::warn!(resource = R::PATH, id, error = %e, "Update failed");
                self.toasts.push(Toast::error(e.to_string()));
                false
            }
        }
    }

    // ---- delete ----

    /// Open the delete confirmation. Nothing is sent yet.
    pub fn request_delete(&mut self, item: R) {
        self.modal = Modal::Delete(item);
    }

    /// Delete the record awaiting confirmation. On success its row is
    /// removed locally; on failure the row stays.
    pub async fn confirm_delete(&mut self) -> bool {
        let id = match &self.modal {
            Modal::Delete(item) => item.id(),
            _ => return false,
        };

        match self.api.delete(R::PATH, id).await {
            Ok(()) => {
                tracing::info!(resource = R::PATH, id, "Deleted record");
                self.items.retain(|item| item.id() != id);
                self.toasts.push(Toast::success(R::deleted_message()));
                self.modal = Modal::Closed;
                true
            }
            Err(e) => {
                tracing::warn!(resource = R::PATH, id, error = %e, "Delete failed");
                self.toasts.push(Toast::error(e.to_string()));
                self.modal = Modal::Closed;
                false
            }
        }
    }
}
