use crate::handlers;
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, patch, post},
};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route(
            "/api/applications",
            get(handlers::list_applications).post(handlers::create_application),
        )
        .route("/api/applications/bulk/status", post(handlers::bulk_status))
        .route("/api/applications/bulk/delete", post(handlers::bulk_delete))
        .route(
            "/api/applications/:id",
            get(handlers::get_application)
                .put(handlers::update_application)
                .delete(handlers::delete_application),
        )
        .route("/api/applications/:id/status", patch(handlers::update_status))
        .route("/api/applications/:id/platform", patch(handlers::update_platform))
        .route("/api/applications/:id/description", get(handlers::job_description))
        .route("/api/stats", get(handlers::get_stats))
        .route("/api/export/json", get(handlers::export_json))
        .route("/api/export/csv", get(handlers::export_csv))
        .route("/api/import", post(handlers::import_json))
        .with_state(state)
}
