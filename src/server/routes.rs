use std::sync::Arc;
use axum::extract::{DefaultBodyLimit, Extension};
use axum::routing::{get, post};
use axum::Router;
use crate::core::config::Config;
use crate::search::executor::QueryExecutor;
use super::handlers::{
    handle_clear_docs, handle_index, handle_rank, handle_search, handle_stats,
    handle_update_terms, handle_upload_docs,
};

pub fn router(executor: Arc<QueryExecutor>, config: Arc<Config>) -> Router {
    Router::new()
        .route("/", get(handle_index))
        .route("/api/update-terms", post(handle_update_terms))
        .route("/api/upload-doc", post(handle_upload_docs))
        .route("/api/clear-docs", post(handle_clear_docs))
        .route("/api/search", post(handle_search))
        .route("/api/rank", post(handle_rank))
        .route("/api/stats", get(handle_stats))
        .layer(DefaultBodyLimit::max(config.max_upload_bytes))
        .layer(Extension(executor))
        .layer(Extension(config))
}
