mod error;
mod state;

pub mod routes;

pub use error::{ApiError, ErrorResponse};
pub use state::AppState;

use axum::{
    routing::{delete, get, post, put},
    Router,
};
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(routes::health::health_check))
        // Student routes
        .route("/students", post(routes::students::create_student))
        .route("/students/", post(routes::students::create_student))
        .route("/students", get(routes::students::list_students))
        .route("/students/", get(routes::students::list_students))
        .route("/students/:student_id", get(routes::students::get_student))
        .route(
            "/students/:student_id",
            put(routes::students::update_student),
        )
        .route(
            "/students/:student_id",
            delete(routes::students::delete_student),
        )
        // Supervisor routes
        .route(
            "/supervisors",
            post(routes::supervisors::create_supervisor),
        )
        .route(
            "/supervisors/",
            post(routes::supervisors::create_supervisor),
        )
        .route("/supervisors", get(routes::supervisors::list_supervisors))
        .route("/supervisors/", get(routes::supervisors::list_supervisors))
        .route(
            "/supervisors/:supervisor_id",
            get(routes::supervisors::get_supervisor),
        )
        .route(
            "/supervisors/:supervisor_id",
            put(routes::supervisors::update_supervisor),
        )
        .route(
            "/supervisors/:supervisor_id",
            delete(routes::supervisors::delete_supervisor),
        )
        .with_state(state)
        .layer(cors_layer())
}

// Any origin, method, and header, with credentials. A literal wildcard
// cannot be combined with credentials, so the allowances mirror the
// request instead.
fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::mirror_request())
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
}
