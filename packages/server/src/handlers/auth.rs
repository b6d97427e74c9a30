use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use sea_orm::SqlErr;
use tracing::instrument;

use crate::error::{AppError, ErrorBody};
use crate::extractors::json::AppJson;
use crate::models::auth::{
    LoginRequest, LoginResponse, RegisterRequest, RegisterResponse, validate_login_request,
    validate_register_request,
};
use crate::services::account::AccountService;
use crate::state::AppState;
use crate::utils::{hash, jwt};

#[utoipa::path(
    post,
    path = "/register",
    tag = "Auth",
    operation_id = "register",
    summary = "Register a new user",
    description = "Creates a user account. The password is stored as an Argon2 hash.",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "User created", body = RegisterResponse),
        (status = 400, description = "Validation error (VALIDATION_ERROR)", body = ErrorBody),
        (status = 409, description = "Username or email taken (USERNAME_TAKEN, EMAIL_TAKEN)", body = ErrorBody),
    ),
)]
#[instrument(skip(state, payload), fields(user_name = %payload.user_name))]
pub async fn register(
    State(state): State<AppState>,
    AppJson(payload): AppJson<RegisterRequest>,
) -> Result<impl IntoResponse, AppError> {
    validate_register_request(&payload)?;

    let user_name = payload.user_name.trim().to_string();
    let email = payload.email.trim().to_string();
    let accounts = AccountService::new(&state.db);

    if accounts.find_by_user_name(&user_name).await?.is_some() {
        return Err(AppError::UsernameTaken);
    }
    if accounts.find_by_email(&email).await?.is_some() {
        return Err(AppError::EmailTaken);
    }

    let hash = hash::hash_password(&payload.password)
        .map_err(|e| AppError::Internal(e.to_string()))?;

    accounts
        .create(user_name.clone(), email, hash)
        .await
        .map_err(|e| match e.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(detail)) => {
                tracing::debug!("Registration race condition: unique constraint caught on insert");
                if detail.contains("email") {
                    AppError::EmailTaken
                } else {
                    AppError::UsernameTaken
                }
            }
            _ => AppError::from(e),
        })?;

    tracing::info!(user_name = %user_name, "User registered");

    Ok((
        StatusCode::CREATED,
        Json(RegisterResponse {
            message: "User has been successfully created".into(),
        }),
    ))
}

#[utoipa::path(
    post,
    path = "/login",
    tag = "Auth",
    operation_id = "login",
    summary = "Log in with email and password",
    description = "Verifies the credentials and returns a bearer access token.",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login succeeded", body = LoginResponse),
        (status = 400, description = "Validation error (VALIDATION_ERROR)", body = ErrorBody),
        (status = 401, description = "Bad email or password (INVALID_CREDENTIALS)", body = ErrorBody),
    ),
)]
#[instrument(skip(state, payload), fields(email = %payload.email))]
pub async fn login(
    State(state): State<AppState>,
    AppJson(payload): AppJson<LoginRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    validate_login_request(&payload)?;

    let Some(user) = AccountService::new(&state.db)
        .find_by_email(payload.email.trim())
        .await?
    else {
        // Same argon2 cost as a real check, so timing does not reveal unknown emails.
        hash::verify_against_dummy(&payload.password);
        return Err(AppError::InvalidCredentials);
    };

    let is_valid = hash::verify_password(&payload.password, &user.password)
        .map_err(|e| AppError::Internal(e.to_string()))?;

    if !is_valid {
        return Err(AppError::InvalidCredentials);
    }

    let auth = &state.config.auth;
    let access_token = jwt::sign(user.user_id, &user.email, &auth.jwt_secret, auth.token_ttl_hours)
        .map_err(|e| AppError::Internal(format!("JWT sign error: {}", e)))?;

    Ok(Json(LoginResponse {
        message: "Login succeeded!".into(),
        access_token,
    }))
}
