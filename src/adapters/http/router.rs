//! Router assembly.
//!
//! `ApiServices` wires application handlers over injected ports;
//! `api_router` mounts every endpoint behind the session middleware.

use std::sync::Arc;

use axum::{http::HeaderValue, middleware, routing::get, Router};
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::application::{
    GetDashboardHandler, IssueOtpHandler, SendChatMessageHandler, SessionService,
    SubmitAssessmentHandler, VerifyOtpHandler,
};
use crate::config::{AppConfig, CorsPolicy, ServerConfig};
use crate::ports::{ChatResponder, KeyValueStore, OtpRepository};

use super::assessment::{assessment_routes, AssessmentHandlers};
use super::chat::{chat_routes, ChatHandlers};
use super::dashboard::{dashboard_routes, DashboardHandlers};
use super::middleware::session_middleware;
use super::otp::{otp_routes, OtpHandlers};
use super::session::{session_routes, SessionHandlers};

/// Application handlers shared by the HTTP layer.
#[derive(Clone)]
pub struct ApiServices {
    pub sessions: Arc<SessionService>,
    pub submit_assessment: Arc<SubmitAssessmentHandler>,
    pub get_dashboard: Arc<GetDashboardHandler>,
    pub send_chat: Arc<SendChatMessageHandler>,
    pub issue_otp: Arc<IssueOtpHandler>,
    pub verify_otp: Arc<VerifyOtpHandler>,
    pub expose_otp_code: bool,
}

impl ApiServices {
    pub fn new(
        config: &AppConfig,
        store: Arc<dyn KeyValueStore>,
        otp_repository: Arc<dyn OtpRepository>,
        responder: Arc<dyn ChatResponder>,
    ) -> Self {
        let sessions = Arc::new(SessionService::new(store));
        Self {
            submit_assessment: Arc::new(SubmitAssessmentHandler::new(
                sessions.clone(),
                config.assessment.strict_answers,
            )),
            get_dashboard: Arc::new(GetDashboardHandler::new(sessions.clone())),
            send_chat: Arc::new(
                SendChatMessageHandler::new(responder, config.assistant.max_history)
                    .with_max_conversations(config.assistant.max_conversations),
            ),
            issue_otp: Arc::new(IssueOtpHandler::new(
                otp_repository.clone(),
                config.otp.ttl_secs,
            )),
            verify_otp: Arc::new(VerifyOtpHandler::new(otp_repository)),
            expose_otp_code: config.otp.expose_code,
            sessions,
        }
    }
}

/// Every API route, with session resolution and request tracing.
pub fn api_router(services: ApiServices) -> Router {
    Router::new()
        .route("/health", get(health))
        .merge(session_routes(SessionHandlers::new(
            services.sessions.clone(),
            services.send_chat.clone(),
        )))
        .merge(assessment_routes(AssessmentHandlers::new(
            services.submit_assessment,
        )))
        .merge(dashboard_routes(DashboardHandlers::new(services.get_dashboard)))
        .merge(chat_routes(ChatHandlers::new(services.send_chat)))
        .merge(otp_routes(OtpHandlers::new(
            services.issue_otp,
            services.verify_otp,
            services.expose_otp_code,
        )))
        .layer(middleware::from_fn_with_state(
            services.sessions,
            session_middleware,
        ))
        .layer(TraceLayer::new_for_http())
}

/// Adds CORS and the request timeout from server configuration.
pub fn with_server_layers(router: Router, server: &ServerConfig) -> Router {
    router
        .layer(cors_layer(&server.cors_policy()))
        .layer(TimeoutLayer::new(server.request_timeout()))
}

fn cors_layer(policy: &CorsPolicy) -> CorsLayer {
    let layer = CorsLayer::new().allow_methods(Any).allow_headers(Any);
    let CorsPolicy::Origins(origins) = policy else {
        return layer.allow_origin(Any);
    };

    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("ignoring invalid CORS origin: {}", origin);
                None
            }
        })
        .collect();
    layer.allow_origin(AllowOrigin::list(origins))
}

async fn health() -> &'static str {
    "ok"
}
