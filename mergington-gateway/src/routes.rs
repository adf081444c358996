//! Axum route handlers for the activity sign-up API.

use std::sync::Arc;

use axum::{
    extract::{
        rejection::{PathRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use mergington_core::{ActivityRegistry, RegistryError, Roster};
use serde::Serialize;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};

use crate::error::GatewayError;

// ── Shared state ─────────────────────────────────────────────────────────────

type Registry = Arc<ActivityRegistry>;

// ── Request / response types ──────────────────────────────────────────────────

/// Raw query pairs in arrival order; repeated keys are kept.
type QueryPairs = Vec<(String, String)>;

/// Query string accepted by both signup endpoints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignupQuery {
    pub email: String,
}

impl SignupQuery {
    /// Pick the `email` value from decoded query pairs. A repeated key yields its last value.
    ///
    /// # Errors
    /// Returns [`GatewayError::InvalidRequest`] if no `email` key is present.
    pub fn from_pairs(pairs: QueryPairs) -> Result<Self, GatewayError> {
        pairs
            .into_iter()
            .rev()
            .find(|(key, _)| key == "email")
            .map(|(_, email)| Self { email })
            .ok_or_else(|| GatewayError::InvalidRequest("missing field `email`".to_owned()))
    }
}

/// Confirmation body returned by a successful signup or withdrawal.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

// ── Router ────────────────────────────────────────────────────────────────────

/// Build the application router over the given registry.
pub fn create_router(registry: Registry) -> Router {
    Router::new()
        .route("/activities", get(list_activities))
        .route(
            "/activities/{activity_name}/signup",
            post(signup).delete(unregister),
        )
        .route("/health", get(health))
        .with_state(registry)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

// ── Handlers ──────────────────────────────────────────────────────────────────

/// `GET /health`: liveness probe.
pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, Json(serde_json::json!({"status": "ok"})))
}

/// `GET /activities`: every activity with its current participants.
pub async fn list_activities(State(registry): State<Registry>) -> Json<Roster> {
    Json(registry.list())
}

/// `POST /activities/{activity_name}/signup?email=...`: enroll a student.
///
/// # Errors
/// Returns [`GatewayError::Registry`] if the activity is unknown or its name
/// does not decode (404), or the student is already enrolled (400), and
/// [`GatewayError::InvalidRequest`] if the `email` query parameter is missing.
pub async fn signup(
    State(registry): State<Registry>,
    path: Result<Path<String>, PathRejection>,
    query: Result<Query<QueryPairs>, QueryRejection>,
) -> Result<Json<MessageResponse>, GatewayError> {
    let Path(activity_name) = path.map_err(reject_path)?;
    let Query(pairs) = query.map_err(reject_query)?;
    let SignupQuery { email } = SignupQuery::from_pairs(pairs)?;
    let message = registry.enroll(&activity_name, &email).inspect_err(|e| {
        warn!(activity = %activity_name, email = %email, error = %e, "signup rejected");
    })?;
    info!(activity = %activity_name, email = %email, "student signed up");
    Ok(Json(MessageResponse { message }))
}

/// `DELETE /activities/{activity_name}/signup?email=...`: withdraw a student.
///
/// # Errors
/// Returns [`GatewayError::Registry`] if the activity is unknown, its name does
/// not decode, or the student is not enrolled (all 404), and
/// [`GatewayError::InvalidRequest`] if the `email` query parameter is missing.
pub async fn unregister(
    State(registry): State<Registry>,
    path: Result<Path<String>, PathRejection>,
    query: Result<Query<QueryPairs>, QueryRejection>,
) -> Result<Json<MessageResponse>, GatewayError> {
    let Path(activity_name) = path.map_err(reject_path)?;
    let Query(pairs) = query.map_err(reject_query)?;
    let SignupQuery { email } = SignupQuery::from_pairs(pairs)?;
    let message = registry.withdraw(&activity_name, &email).inspect_err(|e| {
        warn!(activity = %activity_name, email = %email, error = %e, "unregister rejected");
    })?;
    info!(activity = %activity_name, email = %email, "student unregistered");
    Ok(Json(MessageResponse { message }))
}

// A name that fails to decode cannot match any seeded activity.
#[allow(clippy::needless_pass_by_value)]
fn reject_path(rejection: PathRejection) -> GatewayError {
    warn!(error = %rejection, "undecodable activity name");
    GatewayError::Registry(RegistryError::ActivityNotFound)
}

#[allow(clippy::needless_pass_by_value)]
fn reject_query(rejection: QueryRejection) -> GatewayError {
    warn!(error = %rejection, "malformed signup query");
    GatewayError::InvalidRequest(rejection.body_text())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{Method, Request},
    };
    use tower::ServiceExt;

    fn test_registry() -> Registry {
        Arc::new(ActivityRegistry::seeded())
    }

    async fn send(app: Router, method: Method, uri: &str) -> (StatusCode, serde_json::Value) {
        let req = match Request::builder().method(method).uri(uri).body(Body::empty()) {
            Ok(r) => r,
            Err(e) => panic!("failed to build request: {e}"),
        };
        let resp = match app.oneshot(req).await {
            Ok(r) => r,
            Err(e) => panic!("handler error: {e}"),
        };
        let status = resp.status();
        let bytes = match axum::body::to_bytes(resp.into_body(), 64 * 1024).await {
            Ok(b) => b,
            Err(e) => panic!("failed to read body: {e}"),
        };
        let body = match serde_json::from_slice(&bytes) {
            Ok(v) => v,
            Err(e) => panic!("invalid JSON: {e}"),
        };
        (status, body)
    }

    #[tokio::test]
    async fn health_response_format_returns_ok_with_status_field() {
        let (status, body) = send(create_router(test_registry()), Method::GET, "/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn list_activities_returns_full_records() {
        let (status, body) =
            send(create_router(test_registry()), Method::GET, "/activities").await;
        assert_eq!(status, StatusCode::OK);
        let chess = &body["Chess Club"];
        assert_eq!(chess["max_participants"], 12);
        assert!(chess["description"].is_string(), "description must be a string");
        assert!(chess["schedule"].is_string(), "schedule must be a string");
        assert!(chess["participants"].is_array(), "participants must be a list");
    }

    #[tokio::test]
    async fn signup_decodes_percent_encoded_activity_name() {
        let registry = test_registry();
        let (status, body) = send(
            create_router(Arc::clone(&registry)),
            Method::POST,
            "/activities/Math%20Olympiad/signup?email=pat%40mergington.edu",
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "Signed up pat@mergington.edu for Math Olympiad");
        assert!(registry.list()["Math Olympiad"].is_enrolled("pat@mergington.edu"));
    }

    #[tokio::test]
    async fn signup_without_email_is_unprocessable() {
        let (status, body) = send(
            create_router(test_registry()),
            Method::POST,
            "/activities/Chess%20Club/signup",
        )
        .await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert!(body["detail"].is_string(), "rejection must carry a detail string");
    }

    #[tokio::test]
    async fn unregister_without_email_is_unprocessable() {
        let (status, _) = send(
            create_router(test_registry()),
            Method::DELETE,
            "/activities/Chess%20Club/signup",
        )
        .await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn message_response_serializes_message_field() {
        let resp = MessageResponse { message: "hi".to_owned() };
        let json = match serde_json::to_string(&resp) {
            Ok(s) => s,
            Err(e) => panic!("serialization failed: {e}"),
        };
        assert_eq!(json, r#"{"message":"hi"}"#);
    }

    #[test]
    fn signup_query_takes_last_repeated_email() {
        let pairs = vec![
            ("email".to_owned(), "first@m.edu".to_owned()),
            ("other".to_owned(), "x".to_owned()),
            ("email".to_owned(), "last@m.edu".to_owned()),
        ];
        match SignupQuery::from_pairs(pairs) {
            Ok(q) => assert_eq!(q.email, "last@m.edu"),
            Err(e) => panic!("email must be found: {e}"),
        }
    }

    #[test]
    fn signup_query_without_email_is_invalid() {
        let pairs = vec![("mail".to_owned(), "a@m.edu".to_owned())];
        match SignupQuery::from_pairs(pairs) {
            Ok(q) => panic!("missing email must fail, got {q:?}"),
            Err(e) => assert_eq!(e.status(), StatusCode::UNPROCESSABLE_ENTITY),
        }
    }
}
