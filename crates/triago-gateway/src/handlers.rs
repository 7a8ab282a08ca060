// SPDX-FileCopyrightText: 2026 Triago Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP request handlers for the complaint REST API.
//!
//! Handles GET /health, POST /complaints, GET /complaints, and
//! PUT /complaints/{id}.

use axum::{
    extract::{FromRequestParts, Path, Query, State},
    http::{request::Parts, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use triago_core::{Complaint, ComplaintFilter, ComplaintReceipt, TriagoError};

use crate::server::GatewayState;

/// Request body for POST /complaints.
#[derive(Debug, Deserialize)]
pub struct CreateComplaintRequest {
    /// Free-text complaint content.
    pub text: String,
}

/// Query parameters for GET /complaints.
#[derive(Debug, Deserialize)]
pub struct ListParams {
    /// Exact status filter.
    #[serde(default)]
    pub status: Option<String>,
    /// Only return complaints created within the last N hours.
    #[serde(default)]
    pub hours_ago: Option<u32>,
}

/// Request body for PUT /complaints/{id}.
///
/// At least one field must be present; both may be.
#[derive(Debug, Deserialize)]
pub struct UpdateComplaintRequest {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
}

/// Response body for PUT /complaints/{id}.
#[derive(Debug, Serialize)]
pub struct UpdateResponse {
    pub message: String,
}

/// Response body for GET /health.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error description.
    pub error: String,
}

/// Wrapper mapping [`TriagoError`] onto HTTP status codes.
pub struct ApiError(TriagoError);

impl From<TriagoError> for ApiError {
    fn from(e: TriagoError) -> Self {
        Self(e)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            TriagoError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            TriagoError::NotFound { .. } => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!(error = %self.0, "request failed");
        }
        (
            status,
            Json(ErrorResponse {
                error: self.0.to_string(),
            }),
        )
            .into_response()
    }
}

/// Query extractor whose rejection carries the JSON error body.
///
/// axum's own `Query` rejection renders plain text; every error leaving
/// this API is `{"error": ...}`, so unparsable filter values go through
/// [`ApiError`] like any other invalid request.
pub struct ApiQuery<T>(pub T);

impl<S, T> FromRequestParts<S> for ApiQuery<T>
where
    T: serde::de::DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match Query::<T>::from_request_parts(parts, state).await {
            Ok(Query(params)) => Ok(Self(params)),
            Err(rejection) => Err(TriagoError::InvalidRequest(rejection.body_text()).into()),
        }
    }
}

/// GET /health
pub async fn get_health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// POST /complaints
///
/// Ingests a complaint and returns its receipt with 201 Created.
pub async fn post_complaint(
    State(state): State<GatewayState>,
    Json(body): Json<CreateComplaintRequest>,
) -> Result<(StatusCode, Json<ComplaintReceipt>), ApiError> {
    let receipt = state.pipeline.create_complaint(&body.text).await?;
    Ok((StatusCode::CREATED, Json(receipt)))
}

/// GET /complaints
///
/// Lists complaints, optionally filtered by exact status and by a
/// recency window. `hours_ago=N` keeps only complaints strictly newer
/// than N hours before now; zero is rejected.
pub async fn list_complaints(
    State(state): State<GatewayState>,
    ApiQuery(params): ApiQuery<ListParams>,
) -> Result<Json<Vec<Complaint>>, ApiError> {
    let since = match params.hours_ago {
        Some(0) => {
            return Err(TriagoError::InvalidRequest(
                "hours_ago must be greater than zero".to_string(),
            )
            .into());
        }
        Some(hours) => {
            // Checked: a huge hours_ago would push the cutoff outside
            // chrono's representable range.
            let cutoff = chrono::Utc::now()
                .checked_sub_signed(chrono::Duration::hours(i64::from(hours)))
                .ok_or_else(|| {
                    TriagoError::InvalidRequest("hours_ago is out of range".to_string())
                })?;
            Some(cutoff.format("%Y-%m-%dT%H:%M:%S%.3fZ").to_string())
        }
        None => None,
    };

    let filter = ComplaintFilter {
        status: params.status,
        since,
    };
    let complaints = state.store.list(&filter).await?;
    Ok(Json(complaints))
}

/// PUT /complaints/{id}
///
/// Updates status and/or category. The two updates are independent:
/// when both fields are present each is applied in turn.
pub async fn update_complaint(
    State(state): State<GatewayState>,
    Path(id): Path<i64>,
    Json(body): Json<UpdateComplaintRequest>,
) -> Result<Json<UpdateResponse>, ApiError> {
    if body.status.is_none() && body.category.is_none() {
        return Err(TriagoError::InvalidRequest(
            "provide status and/or category".to_string(),
        )
        .into());
    }

    if let Some(status) = &body.status {
        state.pipeline.set_status(id, status).await?;
    }
    if let Some(category) = &body.category {
        state.pipeline.set_category(id, category).await?;
    }

    Ok(Json(UpdateResponse {
        message: "Complaint updated".to_string(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_request_deserializes() {
        let body: CreateComplaintRequest =
            serde_json::from_str(r#"{"text": "no SMS code arrives"}"#).unwrap();
        assert_eq!(body.text, "no SMS code arrives");
    }

    #[test]
    fn create_request_rejects_missing_text() {
        let result = serde_json::from_str::<CreateComplaintRequest>("{}");
        assert!(result.is_err());
    }

    #[test]
    fn list_params_default_to_unfiltered() {
        let params: ListParams = serde_json::from_str("{}").unwrap();
        assert!(params.status.is_none());
        assert!(params.hours_ago.is_none());
    }

    #[test]
    fn update_request_accepts_partial_bodies() {
        let body: UpdateComplaintRequest =
            serde_json::from_str(r#"{"status": "closed"}"#).unwrap();
        assert_eq!(body.status.as_deref(), Some("closed"));
        assert!(body.category.is_none());

        let body: UpdateComplaintRequest = serde_json::from_str("{}").unwrap();
        assert!(body.status.is_none());
        assert!(body.category.is_none());
    }

    #[test]
    fn error_response_shape() {
        let json = serde_json::to_value(ErrorResponse {
            error: "complaint 9 not found".to_string(),
        })
        .unwrap();
        assert_eq!(json["error"], "complaint 9 not found");
    }
}
