//! HTTP request handlers for the log API.

use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::response::{IntoResponse, Response};
use chrono::NaiveDateTime;
use loglens_core::{FilterCriteria, LogRecord, LogStats, TIMESTAMP_FORMAT, query};
use serde::{Deserialize, Serialize};

use crate::error::{ApiError, ApiResult};
use crate::state::ApiState;

/// Query parameters for `GET /logs`.
///
/// Filters are all optional and compose conjunctively. Pagination comes in
/// two flavors: `skip`/`limit` offsets (bare array response) or
/// `page`/`size` (envelope response); a request may use one flavor, not
/// both.
#[derive(Debug, Default, Deserialize)]
pub struct LogsQuery {
    /// Exact, case-sensitive level match.
    pub level: Option<String>,
    /// Exact component match.
    pub component: Option<String>,
    /// Inclusive lower timestamp bound.
    pub start_time: Option<String>,
    /// Inclusive upper timestamp bound.
    pub end_time: Option<String>,
    /// Offset pagination: records to skip.
    pub skip: Option<i64>,
    /// Offset pagination: maximum records to return.
    pub limit: Option<i64>,
    /// Page pagination: 1-based page number.
    pub page: Option<i64>,
    /// Page pagination: records per page.
    pub size: Option<i64>,
}

/// Pagination envelope returned for `page`/`size` requests.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LogPage {
    /// Records on this page, in set order.
    pub items: Vec<LogRecord>,
    /// 1-based page number.
    pub page: i64,
    /// Requested page size.
    pub size: i64,
    /// Total matching records across all pages.
    pub total: usize,
    /// Number of pages covering `total`.
    pub total_pages: usize,
}

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Status message.
    pub status: String,
    /// Server uptime in seconds.
    pub uptime_secs: u64,
}

/// Confirmation returned by the cache-invalidation endpoint.
#[derive(Debug, Serialize)]
pub struct InvalidateResponse {
    /// Confirmation message.
    pub message: String,
}

impl LogsQuery {
    /// Builds filter criteria from the query's filter parameters.
    fn criteria(&self) -> ApiResult<FilterCriteria> {
        let mut criteria = FilterCriteria::new();
        if let Some(ref level) = self.level {
            criteria = criteria.with_level(level.clone());
        }
        if let Some(ref component) = self.component {
            criteria = criteria.with_component(component.clone());
        }
        if let Some(ref start) = self.start_time {
            criteria = criteria.with_start(parse_timestamp_param(start)?);
        }
        if let Some(ref end) = self.end_time {
            criteria = criteria.with_end(parse_timestamp_param(end)?);
        }
        Ok(criteria)
    }

    const fn wants_pages(&self) -> bool {
        self.page.is_some() || self.size.is_some()
    }

    const fn wants_offsets(&self) -> bool {
        self.skip.is_some() || self.limit.is_some()
    }
}

/// Parses a timestamp query parameter.
///
/// Accepts the on-disk `YYYY-MM-DD HH:MM:SS` form and the ISO-8601 `T`
/// separator variant.
fn parse_timestamp_param(value: &str) -> ApiResult<NaiveDateTime> {
    NaiveDateTime::parse_from_str(value, TIMESTAMP_FORMAT)
        .or_else(|_| NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S"))
        .map_err(|_| {
            ApiError::InvalidRequest(format!(
                "invalid timestamp '{value}': expected YYYY-MM-DD HH:MM:SS"
            ))
        })
}

/// Handle `GET /health` - liveness check.
pub async fn health_check(State(state): State<Arc<ApiState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        uptime_secs: state.uptime_secs(),
    })
}

/// Handle `GET /logs` - list logs with optional filters and pagination.
pub async fn list_logs(
    State(state): State<Arc<ApiState>>,
    Query(params): Query<LogsQuery>,
) -> ApiResult<Response> {
    if params.wants_pages() && params.wants_offsets() {
        return Err(ApiError::InvalidRequest(
            "use either skip/limit or page/size, not both".to_string(),
        ));
    }

    let criteria = params.criteria()?;
    let records = state.snapshot().await?;
    let filtered = query::filter(&records, &criteria);

    if params.wants_pages() {
        let page = params.page.unwrap_or(1);
        let size = params.size.unwrap_or(state.config().default_limit);
        if page < 1 {
            return Err(ApiError::InvalidRequest(format!(
                "page must be at least 1, got {page}"
            )));
        }
        if size < 1 {
            return Err(ApiError::InvalidRequest(format!(
                "size must be at least 1, got {size}"
            )));
        }
        let skip = (page - 1).checked_mul(size).ok_or_else(|| {
            ApiError::InvalidRequest("page window out of range".to_string())
        })?;

        let items = query::paginate(&filtered, skip, size)?;
        let total = filtered.len();
        // size >= 1 was checked above.
        #[allow(clippy::cast_sign_loss)]
        let total_pages = total.div_ceil(size as usize);

        return Ok(Json(LogPage {
            items,
            page,
            size,
            total,
            total_pages,
        })
        .into_response());
    }

    if params.wants_offsets() {
        let skip = params.skip.unwrap_or(0);
        let limit = params.limit.unwrap_or(state.config().default_limit);
        let window = query::paginate(&filtered, skip, limit)?;
        return Ok(Json(window).into_response());
    }

    Ok(Json(filtered).into_response())
}

/// Handle `GET /logs/stats` - aggregate counts over the full set.
pub async fn get_stats(State(state): State<Arc<ApiState>>) -> ApiResult<Json<LogStats>> {
    let records = state.snapshot().await?;
    Ok(Json(query::aggregate(&records)))
}

/// Handle `GET /logs/{id}` - fetch one record by content-addressed id.
pub async fn get_log(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<String>,
) -> ApiResult<Json<LogRecord>> {
    let records = state.snapshot().await?;
    let record = query::find_by_id(&records, &id)?;
    Ok(Json(record.clone()))
}

/// Handle `POST /logs/cache/invalidate` - drop the cache.
pub async fn invalidate_cache(
    State(state): State<Arc<ApiState>>,
) -> ApiResult<Json<InvalidateResponse>> {
    state.invalidate().await?;
    Ok(Json(InvalidateResponse {
        message: "log cache invalidated".to_string(),
    }))
}
