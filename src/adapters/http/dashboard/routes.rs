//! HTTP routes for dashboard endpoints.

use axum::{routing::get, Router};

use super::handlers::{get_my_dashboard, get_profile_dashboard, DashboardHandlers};

pub fn dashboard_routes(handlers: DashboardHandlers) -> Router {
    Router::new()
        .route("/api/dashboard", get(get_my_dashboard))
        .route("/api/dashboard/:profile", get(get_profile_dashboard))
        .with_state(handlers)
}
