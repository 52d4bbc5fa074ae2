use axum::routing::get;
use axum::Router;

use crate::handlers::portfolio;
use crate::state::AppState;

/// Portfolio routes mounted at `/api/portfolio`.
///
/// ```text
/// GET    /            -> list_portfolio
/// POST   /            -> create_portfolio_item
/// GET    /category    -> list_portfolio_categories
/// GET    /{id}        -> get_portfolio_item
/// PUT    /{id}        -> update_portfolio_item
/// DELETE /{id}        -> delete_portfolio_item
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(portfolio::list_portfolio).post(portfolio::create_portfolio_item),
        )
        .route("/category", get(portfolio::list_portfolio_categories))
        .route(
            "/{id}",
            get(portfolio::get_portfolio_item)
                .put(portfolio::update_portfolio_item)
                .delete(portfolio::delete_portfolio_item),
        )
}
