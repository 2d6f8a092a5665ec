//! HTTP request handlers for the Roster Ranking Engine API.
//!
//! This module contains the handler functions for all API endpoints.

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::post,
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{compute_average, rank_records};
use crate::models::StudentScore;

use super::request::RankRequest;
use super::response::{ApiError, ApiErrorResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/rank", post(rank_handler))
        .route("/average", post(average_handler))
        .with_state(state)
}

/// Handler for POST /rank endpoint.
///
/// Aggregates and ranks a roster. Students with invalid, unreadable or
/// missing scores come back in `failures`; they never turn the whole request
/// into an error.
async fn rank_handler(
    State(state): State<AppState>,
    payload: Result<Json<RankRequest>, JsonRejection>,
) -> Response {
    // Generate correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing ranking request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection).into_response(),
    };

    let result = rank_records(&request.students, state.policy());

    info!(
        correlation_id = %correlation_id,
        ranking_id = %result.ranking_id,
        roster_size = request.students.len(),
        ranked = result.entries.len(),
        dropped = result.failures.len(),
        duration_us = result.audit_trace.duration_us,
        "Ranking completed"
    );

    json_ok(result)
}

/// Handler for POST /average endpoint.
///
/// Computes one student's final average.
async fn average_handler(payload: Result<Json<StudentScore>, JsonRejection>) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing average request");

    let score = match payload {
        Ok(Json(score)) => score,
        Err(rejection) => return rejection_response(correlation_id, rejection).into_response(),
    };

    match compute_average(&score) {
        Ok(average) => {
            info!(
                correlation_id = %correlation_id,
                student_id = average.student_id,
                average = %average.average,
                "Average computed"
            );
            json_ok(average)
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                student_id = score.student_id,
                error = %err,
                "Average could not be computed"
            );
            ApiErrorResponse::from(err).into_response()
        }
    }
}

fn json_ok<T: serde::Serialize>(body: T) -> Response {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}

/// Maps a JSON extraction failure to a 400 error body.
fn rejection_response(correlation_id: Uuid, rejection: JsonRejection) -> ApiErrorResponse {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            // Get the body text which contains the detailed error from serde
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::validation_error(body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };

    ApiErrorResponse::bad_request(error)
}
