use auth::IssuedToken;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Form;
use axum_extra::extract::WithRejection;
use chrono::Utc;
use serde::Deserialize;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::access::models::LoginCredentials;
use crate::inbound::http::router::AppState;

/// Exchange email and password for a bearer token.
///
/// The form field is named `username` but carries the email address.
pub async fn login(
    State(state): State<AppState>,
    WithRejection(Form(form), _): WithRejection<Form<LoginForm>, ApiError>,
) -> Result<ApiSuccess<IssuedToken>, ApiError> {
    state
        .auth_service
        .login(form.into(), Utc::now())
        .await
        .map_err(ApiError::from)
        .map(|token| ApiSuccess::new(StatusCode::OK, token))
}

#[derive(Deserialize)]
pub struct LoginForm {
    username: String,
    password: String,
}

impl From<LoginForm> for LoginCredentials {
    fn from(form: LoginForm) -> Self {
        Self {
            email: form.username,
            password: form.password,
        }
    }
}
