use std::collections::BTreeSet;
use std::sync::Arc;
use axum::body::Bytes;
use axum::extract::{Extension, Multipart};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::Json;
use serde::de::DeserializeOwned;
use crate::core::config::Config;
use crate::core::error::{Error, ErrorKind, Result};
use crate::core::types::{Upload, UploadReport};
use crate::query::cache::SearchMode;
use crate::search::executor::QueryExecutor;
use crate::search::results::SearchResult;
use super::types::{RankRequest, SearchRequest, StatsResponse, UpdateTermsRequest};

const UPLOAD_FIELD: &str = "documents";

fn decode_json<T: DeserializeOwned>(body: &[u8]) -> Result<T> {
    serde_json::from_slice(body).map_err(|e| {
        tracing::debug!("Rejected request body: {}", e);
        Error::new(ErrorKind::Parse, "Invalid JSON")
    })
}

pub async fn handle_index(Extension(config): Extension<Arc<Config>>) -> Response {
    match tokio::fs::read_to_string(&config.index_page).await {
        Ok(html) => Html(html).into_response(),
        Err(e) => {
            tracing::warn!("Failed to read {}: {}", config.index_page.display(), e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Could not load index.html",
            )
                .into_response()
        }
    }
}

pub async fn handle_update_terms(
    Extension(executor): Extension<Arc<QueryExecutor>>,
    body: Bytes,
) -> Result<StatusCode> {
    let request: UpdateTermsRequest = decode_json(&body)?;
    let count = executor.store().update_terms(&request.raw_terms);
    tracing::info!("Terms updated. Count: {}", count);
    Ok(StatusCode::OK)
}

pub async fn handle_upload_docs(
    Extension(executor): Extension<Arc<QueryExecutor>>,
    mut multipart: Multipart,
) -> Result<Json<UploadReport>> {
    let mut uploads = Vec::new();

    loop {
        let field = match multipart.next_field().await {
            Ok(Some(field)) => field,
            Ok(None) => break,
            Err(e) => {
                tracing::warn!("Malformed multipart body: {}", e);
                return Err(Error::new(
                    ErrorKind::InvalidInput,
                    format!("Invalid multipart body: {}", e),
                ));
            }
        };

        if field.name() != Some(UPLOAD_FIELD) {
            continue;
        }

        let name = field.file_name().unwrap_or_default().to_string();
        match field.bytes().await {
            Ok(bytes) => uploads.push(Upload::new(name, bytes.to_vec())),
            Err(e) => {
                tracing::error!("Failed to read upload {}: {}", name, e);
                uploads.push(Upload::unreadable(name));
            }
        }
    }

    Ok(Json(executor.store().add_documents(uploads)))
}

pub async fn handle_clear_docs(Extension(executor): Extension<Arc<QueryExecutor>>) -> StatusCode {
    executor.clear();
    StatusCode::OK
}

pub async fn handle_search(
    Extension(executor): Extension<Arc<QueryExecutor>>,
    body: Bytes,
) -> Result<Json<BTreeSet<String>>> {
    executor.ensure_ready(SearchMode::Boolean)?;
    let request: SearchRequest = decode_json(&body)?;
    let names = executor.evaluate_boolean(&request.query)?;
    Ok(Json(names))
}

pub async fn handle_rank(
    Extension(executor): Extension<Arc<QueryExecutor>>,
    body: Bytes,
) -> Result<Json<Vec<SearchResult>>> {
    executor.ensure_ready(SearchMode::Vector)?;
    let request: RankRequest = decode_json(&body)?;
    let results = executor.rank(&request.query, request.limit)?;
    Ok(Json(results.hits))
}

pub async fn handle_stats(Extension(executor): Extension<Arc<QueryExecutor>>) -> Json<StatsResponse> {
    let cache = executor.cache_stats();
    Json(StatsResponse {
        corpus: executor.store().stats(),
        cache_enabled: executor.cache_enabled(),
        cache_hit_rate: cache.hit_rate(),
        cache,
    })
}
