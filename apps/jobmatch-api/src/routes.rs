use axum::{
	Json, Router,
	extract::{
		Path, Query, State,
		rejection::{JsonRejection, QueryRejection},
	},
	http::StatusCode,
	response::{IntoResponse, Response},
	routing::{get, post},
};
use serde::{Deserialize, Serialize};

use crate::state::AppState;
use jobmatch_domain::MatchResult;
use jobmatch_service::{
	CandidateCreated, CreateCandidateRequest, CreateJobRequest, Error, ExplainResponse,
	JobCreated, MatchRequest,
};

#[derive(Debug, Default, Deserialize)]
pub struct MatchQuery {
	pub min_experience: Option<u32>,
	pub country: Option<String>,
	pub top_k: Option<u32>,
}

#[derive(Debug, Serialize)]
struct ErrorBody {
	error_code: String,
	message: String,
	fields: Option<Vec<String>>,
}

#[derive(Debug)]
pub struct ApiError {
	status: StatusCode,
	error_code: String,
	message: String,
	fields: Option<Vec<String>>,
}
impl ApiError {
	fn new(
		status: StatusCode,
		error_code: impl Into<String>,
		message: impl Into<String>,
		fields: Option<Vec<String>>,
	) -> Self {
		Self { status, error_code: error_code.into(), message: message.into(), fields }
	}
}
impl From<Error> for ApiError {
	fn from(err: Error) -> Self {
		let message = err.to_string();

		match err {
			Error::InvalidRequest { fields, .. } => Self::new(
				StatusCode::UNPROCESSABLE_ENTITY,
				"INVALID_REQUEST",
				message,
				(!fields.is_empty()).then_some(fields),
			),
			Error::NotFound { .. } => Self::new(StatusCode::NOT_FOUND, "NOT_FOUND", message, None),
			Error::DimensionMismatch(_) => Self::new(
				StatusCode::INTERNAL_SERVER_ERROR,
				"DIMENSION_MISMATCH",
				message,
				None,
			),
			Error::GenerationFailed { .. } => Self::new(
				StatusCode::INTERNAL_SERVER_ERROR,
				"GENERATION_FAILED",
				message,
				None,
			),
			Error::Provider { .. } =>
				Self::new(StatusCode::BAD_GATEWAY, "PROVIDER_ERROR", message, None),
			Error::Storage { .. } =>
				Self::new(StatusCode::INTERNAL_SERVER_ERROR, "STORAGE_ERROR", message, None),
		}
	}
}
impl From<JsonRejection> for ApiError {
	fn from(rejection: JsonRejection) -> Self {
		Self::new(StatusCode::UNPROCESSABLE_ENTITY, "INVALID_REQUEST", rejection.body_text(), None)
	}
}
impl From<QueryRejection> for ApiError {
	fn from(rejection: QueryRejection) -> Self {
		Self::new(StatusCode::UNPROCESSABLE_ENTITY, "INVALID_REQUEST", rejection.body_text(), None)
	}
}
impl IntoResponse for ApiError {
	fn into_response(self) -> Response {
		let body =
			ErrorBody { error_code: self.error_code, message: self.message, fields: self.fields };

		(self.status, Json(body)).into_response()
	}
}

pub fn router(state: AppState) -> Router {
	Router::new()
		.route("/health", get(health))
		.route("/candidates", post(create_candidate))
		.route("/jobs", post(create_job))
		.route("/jobs/{job_id}/match", get(match_job))
		.route("/jobs/{job_id}/explain/{candidate_id}", get(explain_match))
		.with_state(state)
}

async fn health() -> StatusCode {
	StatusCode::OK
}

async fn create_candidate(
	State(state): State<AppState>,
	payload: Result<Json<CreateCandidateRequest>, JsonRejection>,
) -> Result<Json<CandidateCreated>, ApiError> {
	let Json(payload) = payload?;
	let response = state.service.create_candidate(payload).await?;

	Ok(Json(response))
}

async fn create_job(
	State(state): State<AppState>,
	payload: Result<Json<CreateJobRequest>, JsonRejection>,
) -> Result<Json<JobCreated>, ApiError> {
	let Json(payload) = payload?;
	let response = state.service.create_job(payload).await?;

	Ok(Json(response))
}

async fn match_job(
	State(state): State<AppState>,
	Path(job_id): Path<String>,
	query: Result<Query<MatchQuery>, QueryRejection>,
) -> Result<Json<Vec<MatchResult>>, ApiError> {
	let Query(query) = query?;
	let response = state
		.service
		.match_job(MatchRequest {
			job_id,
			min_experience: query.min_experience,
			country: query.country,
			top_k: query.top_k,
		})
		.await?;

	Ok(Json(response))
}

async fn explain_match(
	State(state): State<AppState>,
	Path((job_id, candidate_id)): Path<(String, String)>,
) -> Result<Json<ExplainResponse>, ApiError> {
	let response = state.service.explain_match(&job_id, &candidate_id).await?;

	Ok(Json(response))
}
