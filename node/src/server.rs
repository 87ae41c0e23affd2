// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
use axum::{
    extract::{rejection::QueryRejection, ConnectInfo, Query, Request, State},
    http::header::CONTENT_TYPE,
    middleware::{from_fn_with_state, Next},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use rolodex_core::paginate::Page;
use rolodex_core::search::{duplicate_emails, search_by_field};
use rolodex_core::{LoadOutcome, Record, RecordStore, StoreHandle};

use crate::api::*;
use crate::config::NodeConfig;
use crate::errors::ApiError;
use crate::throttle::Throttle;

pub type SharedStore = Arc<StoreHandle>;

const OPENAPI_DOC: &str = include_str!("../assets/openapi.json");

#[derive(Clone)]
pub struct AppState {
    pub store: SharedStore,
    pub config: Arc<NodeConfig>,
    pub throttle: Arc<Throttle>,
}

impl AppState {
    pub fn new(store: SharedStore, config: NodeConfig) -> Self {
        let throttle = Throttle::new(
            config.request_limit,
            Duration::from_secs(config.throttle_window_secs),
        );
        Self {
            store,
            config: Arc::new(config),
            throttle: Arc::new(throttle),
        }
    }
}

async fn throttle_guard(
    State(state): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let client = req
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| addr.ip());

    if !state.throttle.check(client) {
        tracing::debug!("Throttled request from {:?} to {}", client, req.uri().path());
        metrics::increment_counter!("rolodex_throttled_total");
        return Err(ApiError::TooManyRequests);
    }
    Ok(next.run(req).await)
}

pub fn build_router(state: AppState) -> Router {
    // Throttled: the query API and the OpenAPI document.
    let limited = Router::new()
        .route("/api/keys", get(keys).fallback(method_not_allowed))
        .route("/api/list", get(list_clients).fallback(method_not_allowed))
        .route("/api/duplicates", get(duplicates).fallback(method_not_allowed))
        .route("/api/search", get(search).fallback(method_not_allowed))
        .route("/api/refresh", post(refresh).fallback(method_not_allowed))
        .route("/swagger.json", get(openapi_doc).fallback(method_not_allowed))
        .route_layer(from_fn_with_state(state.clone(), throttle_guard));

    let mut app = Router::new()
        .merge(limited)
        .route("/metrics", get(metrics_handler).fallback(method_not_allowed))
        .fallback(not_found)
        .layer(TraceLayer::new_for_http());

    if state.config.cors {
        app = app.layer(CorsLayer::permissive());
    } else {
        tracing::info!("CORS disabled");
    }

    app.with_state(state)
}

fn page_meta<T>(paging: &Pagination, page: &Page<'_, T>) -> PageMeta {
    PageMeta {
        page: paging.page,
        per_page: paging.per_page,
        total: page.total_items,
        total_pages: page.total_pages,
    }
}

async fn keys(State(state): State<AppState>) -> Json<Vec<String>> {
    metrics::increment_counter!("rolodex_requests_total", "endpoint" => "keys");
    let store = state.store.snapshot();
    Json(store.field_names().to_vec())
}

async fn list_clients(
    State(state): State<AppState>,
    query: Result<Query<PageParams>, QueryRejection>,
) -> Result<Response, ApiError> {
    let Query(params) = query?;
    let paging = Pagination::resolve(&params, &state.config)?;
    metrics::increment_counter!("rolodex_requests_total", "endpoint" => "list");

    let store = state.store.snapshot();
    let all: Vec<&Record> = store.records().iter().collect();
    let page = Page::new(&all, paging.index(), paging.per_page);

    Ok(Json(ListResponse {
        meta: page_meta(&paging, &page),
        clients: page.items,
    })
    .into_response())
}

async fn duplicates(
    State(state): State<AppState>,
    query: Result<Query<PageParams>, QueryRejection>,
) -> Result<Response, ApiError> {
    let Query(params) = query?;
    let paging = Pagination::resolve(&params, &state.config)?;
    metrics::increment_counter!("rolodex_requests_total", "endpoint" => "duplicates");

    let store = state.store.snapshot();
    let dups = duplicate_emails(&store);
    let page = Page::new(&dups, paging.index(), paging.per_page);

    Ok(Json(DuplicatesResponse {
        meta: page_meta(&paging, &page),
        duplicates: page.items,
    })
    .into_response())
}

async fn search(
    State(state): State<AppState>,
    query: Result<Query<SearchParams>, QueryRejection>,
) -> Result<Response, ApiError> {
    let Query(params) = query?;
    let (Some(field), Some(query)) = (params.field.as_deref(), params.query.as_deref()) else {
        return Err(ApiError::MissingQueryParameter);
    };
    let paging = Pagination::resolve(&params.paging(), &state.config)?;
    metrics::increment_counter!("rolodex_requests_total", "endpoint" => "search");

    let store = state.store.snapshot();
    let hits = search_by_field(&store, field, query);
    let page = Page::new(&hits, paging.index(), paging.per_page);

    Ok(Json(SearchResponse {
        meta: page_meta(&paging, &page),
        results: page.items,
    })
    .into_response())
}

async fn refresh(State(state): State<AppState>) -> Result<Json<RefreshResponse>, ApiError> {
    // File I/O and decoding happen off the async workers. The handle runs
    // one refresh at a time, so `changed` compares against the store this
    // refresh actually replaced.
    let handle = Arc::clone(&state.store);
    let refresh = tokio::task::spawn_blocking(move || handle.refresh())
        .await
        .map_err(|e| {
            tracing::error!("Refresh task failed: {}", e);
            ApiError::Internal
        })?;

    let store = &refresh.current;
    let outcome = &refresh.outcome;
    record_load(store, outcome);
    tracing::info!(
        "Store refreshed from {:?}: {} ({} records)",
        state.store.source(),
        outcome.label(),
        store.len()
    );

    Ok(Json(RefreshResponse {
        outcome: outcome.label().to_string(),
        detail: outcome.detail().map(str::to_string),
        records: store.len(),
        fields: store.field_names().len(),
        fingerprint: store.fingerprint_hex(),
        changed: refresh.changed(),
    }))
}

/// Publishes load metrics for a freshly built store.
pub fn record_load(store: &RecordStore, outcome: &LoadOutcome) {
    metrics::gauge!("rolodex_records_loaded", store.len() as f64);
    metrics::increment_counter!("rolodex_store_refresh_total", "outcome" => outcome.label());
}

async fn openapi_doc() -> impl IntoResponse {
    ([(CONTENT_TYPE, "application/json")], OPENAPI_DOC)
}

async fn metrics_handler() -> String {
    crate::telemetry::get_metrics()
}

async fn not_found() -> ApiError {
    ApiError::NotFound
}

async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}
