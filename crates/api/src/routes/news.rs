use axum::routing::get;
use axum::Router;

use crate::handlers::news;
use crate::state::AppState;

/// News routes mounted at `/api/news`.
///
/// ```text
/// GET    /        -> list_news
/// POST   /        -> create_news
/// GET    /{id}    -> get_news_item
/// PUT    /{id}    -> update_news_item
/// DELETE /{id}    -> delete_news_item
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(news::list_news).post(news::create_news))
        .route(
            "/{id}",
            get(news::get_news_item)
                .put(news::update_news_item)
                .delete(news::delete_news_item),
        )
}
