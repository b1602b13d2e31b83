pub mod api;
pub mod config;
pub mod handlers;
pub mod infrastructure;
pub mod models;
pub mod services;
pub mod utils;

use crate::config::AppConfig;
use crate::services::registry::FileRecordStore;
use crate::services::storage::DiskStorage;
use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::files::upload_files,
        handlers::files::get_progress,
        handlers::files::get_result,
    ),
    components(
        schemas(
            models::FileRecord,
            models::UploadedFile,
            models::ProgressResponse,
            models::ResultResponse,
        )
    ),
    tags(
        (name = "files", description = "File upload and processing endpoints")
    )
)]
pub struct ApiDoc;

#[derive(Clone)]
pub struct AppState {
    pub records: Arc<dyn FileRecordStore>,
    pub storage: Arc<DiskStorage>,
    pub config: AppConfig,
}

pub fn create_app(state: AppState) -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .route("/upload", post(handlers::files::upload_files))
        .route("/progress/:file_id", get(handlers::files::get_progress))
        .route("/result/:file_id", get(handlers::files::get_result))
        .with_state(state)
}
