//! Auth routes and the bearer-token extractor.

use axum::extract::{FromRef, State};
use axum::http::{StatusCode, header};
use axum::response::Json;
use models::{LoginRequest, LoginResponse, RegisterAdminRequest};

use super::ApiResult;
use crate::state::{AppState, SessionInfo};

// =============================================================================
// AUTH EXTRACTOR
// =============================================================================

/// Authenticated session extracted from the `Authorization: Bearer` header.
/// Use as a handler parameter to require authentication.
pub struct AuthUser(pub SessionInfo);

impl<S> axum::extract::FromRequestParts<S> for AuthUser
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = StatusCode;

    async fn from_request_parts(parts: &mut axum::http::request::Parts, state: &S) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .unwrap_or_default();
        let token = header.strip_prefix("Bearer ").unwrap_or_default().trim();
        if token.is_empty() {
            return Err(StatusCode::UNAUTHORIZED);
        }

        let app_state = AppState::from_ref(state);
        let info = app_state.session(token).await.ok_or(StatusCode::UNAUTHORIZED)?;
        Ok(Self(info))
    }
}

// =============================================================================
// HANDLERS
// =============================================================================

/// `POST /api/auth/login` — verify credentials and mint a bearer token.
pub async fn login(State(state): State<AppState>, Json(request): Json<LoginRequest>) -> ApiResult<Json<LoginResponse>> {
    let response = state.login(request.role, &request.email, &request.password).await?;
    tracing::info!(role = request.role.as_str(), email = %request.email, "login");
    Ok(Json(response))
}

/// `POST /api/auth/register` — open admin signup.
pub async fn register(
    State(state): State<AppState>,
    Json(request): Json<RegisterAdminRequest>,
) -> ApiResult<&'static str> {
    state.register_admin(request).await?;
    Ok("Registered")
}
