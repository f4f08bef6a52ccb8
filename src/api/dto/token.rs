//! DTOs for the token issuing endpoint.

use serde::Serialize;

/// Response body of `POST /api/jwt`.
#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub token: String,
}
