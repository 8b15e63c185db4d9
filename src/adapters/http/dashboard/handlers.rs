//! HTTP handlers for dashboard endpoints.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::{handle_domain_error, ErrorResponse};
use crate::adapters::http::middleware::RequireSession;
use crate::application::{GetDashboardHandler, GetDashboardQuery};
use crate::domain::assessment::RiskProfile;
use crate::domain::portfolio::Dashboard;

#[derive(Clone)]
pub struct DashboardHandlers {
    get_handler: Arc<GetDashboardHandler>,
}

impl DashboardHandlers {
    pub fn new(get_handler: Arc<GetDashboardHandler>) -> Self {
        Self { get_handler }
    }
}

/// GET /api/dashboard - Dashboard for the signed-in user's profile
pub async fn get_my_dashboard(
    State(handlers): State<DashboardHandlers>,
    RequireSession(session): RequireSession,
) -> Response {
    let query = GetDashboardQuery {
        session_id: session.id(),
    };

    match handlers.get_handler.handle(query).await {
        Ok(dashboard) => (StatusCode::OK, Json(dashboard)).into_response(),
        Err(e) => handle_domain_error(e),
    }
}

/// GET /api/dashboard/:profile - Dashboard for any profile
pub async fn get_profile_dashboard(Path(profile): Path<String>) -> Response {
    match profile.parse::<RiskProfile>() {
        Ok(profile) => (StatusCode::OK, Json(Dashboard::for_profile(profile))).into_response(),
        Err(_) => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse::not_found("Risk profile", &profile)),
        )
            .into_response(),
    }
}
