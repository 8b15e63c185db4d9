//! HTTP routes for assessment endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{get_questions, submit_assessment, AssessmentHandlers};

pub fn assessment_routes(handlers: AssessmentHandlers) -> Router {
    Router::new()
        .route("/api/assessment", post(submit_assessment))
        .route("/api/assessment/questions", get(get_questions))
        .with_state(handlers)
}
