//! Bearer token and administrator guards.
//!
//! The two checks are independent route layers so each route picks the
//! capabilities it needs:
//!
//! ```rust,ignore
//! let admin = Router::new()
//!     .route("/category", post(create_category_handler))
//!     .route_layer(middleware::from_fn_with_state(state.clone(), auth::require_admin))
//!     .route_layer(middleware::from_fn_with_state(state.clone(), auth::require_token));
//! ```
//!
//! The layer added last runs first, so `require_token` always precedes
//! `require_admin`.

use axum::{
    extract::{FromRequestParts, Request, State},
    middleware::Next,
    response::Response,
};
use axum_auth::AuthBearer;

use crate::application::services::AuthClaims;
use crate::{error::AppError, state::AppState};

/// Verifies the bearer token and attaches its [`AuthClaims`] to the request.
///
/// # Header Format
///
/// ```text
/// Authorization: Bearer <token>
/// ```
///
/// # Errors
///
/// Returns `401 Unauthorized` if:
/// - Authorization header is missing or not a Bearer credential
/// - Token signature is invalid
/// - Token has expired
pub async fn require_token(
    State(st): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let (mut parts, body) = req.into_parts();

    let AuthBearer(token) = AuthBearer::from_request_parts(&mut parts, &())
        .await
        .map_err(|_| {
            tracing::debug!("missing or malformed bearer token");
            AppError::unauthorized()
        })?;

    let claims = st.auth_service.verify(&token)?;
    parts.extensions.insert(claims);

    Ok(next.run(Request::from_parts(parts, body)).await)
}

/// Allows the request only if the verified claims name the administrator.
///
/// Must run after [`require_token`].
///
/// # Errors
///
/// Returns `401 Unauthorized` if no verified claims are attached.
/// Returns `403 Forbidden` if the `email` claim is not the admin email.
pub async fn require_admin(
    State(st): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let claims = req
        .extensions()
        .get::<AuthClaims>()
        .ok_or_else(AppError::unauthorized)?;

    st.auth_service.authorize_admin(claims)?;

    Ok(next.run(req).await)
}
