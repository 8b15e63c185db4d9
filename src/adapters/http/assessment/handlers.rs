//! HTTP handlers for assessment endpoints.

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::handle_domain_error;
use crate::adapters::http::middleware::RequireSession;
use crate::application::{SubmitAssessmentCommand, SubmitAssessmentHandler};
use crate::domain::assessment::Questionnaire;

use super::dto::{AssessmentResponse, SubmitAssessmentRequest};

#[derive(Clone)]
pub struct AssessmentHandlers {
    submit_handler: Arc<SubmitAssessmentHandler>,
}

impl AssessmentHandlers {
    pub fn new(submit_handler: Arc<SubmitAssessmentHandler>) -> Self {
        Self { submit_handler }
    }
}

/// GET /api/assessment/questions - The questionnaire
pub async fn get_questions() -> Response {
    (StatusCode::OK, Json(Questionnaire::standard())).into_response()
}

/// POST /api/assessment - Score answers and record the profile
pub async fn submit_assessment(
    State(handlers): State<AssessmentHandlers>,
    RequireSession(session): RequireSession,
    Json(req): Json<SubmitAssessmentRequest>,
) -> Response {
    let cmd = SubmitAssessmentCommand {
        session_id: session.id(),
        answers: req.answers,
    };

    match handlers.submit_handler.handle(cmd).await {
        Ok(result) => (StatusCode::OK, Json(AssessmentResponse::from(result))).into_response(),
        Err(e) => handle_domain_error(e),
    }
}
