use axum::{Router, routing::get};

use crate::state::AppState;

use super::controller::{create_school, delete_school, get_school, query_schools, update_school};

/// Read routes are public; the mutating handlers take an `AuthUser`.
pub fn init_schools_router() -> Router<AppState> {
    Router::new()
        .route("/school", get(query_schools).post(create_school))
        .route(
            "/school/{id}",
            get(get_school).put(update_school).delete(delete_school),
        )
}
