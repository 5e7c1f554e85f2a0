/**
 * Signup Handler
 *
 * This module implements the public signup intake for POST /api/signup.
 *
 * # Intake Process
 *
 * 1. Parse the multipart form (firstName, lastName, email, address,
 *    university, major, optional message, optional cv file)
 * 2. Validate that every required field is present and non-empty
 * 3. Insert the row; a duplicate email surfaces as 409
 * 4. Send the confirmation email to the student and the alert email to the
 *    configured admin address; failures are logged and swallowed
 *
 * The CV file itself is not persisted; a generated reference
 * (`cv_<millis>_<filename>`) is stored so the row records that a CV was
 * attached.
 */

use axum::{
    extract::{Multipart, State},
    Json,
};
use chrono::Utc;
use serde::Serialize;

use crate::email::templates::SignupNotification;
use crate::error::ApiError;
use crate::server::state::AppState;
use crate::signup::models::{insert_signup, NewSignup};

/// Response for a successful signup
#[derive(Debug, Serialize)]
pub struct SignupResponse {
    pub success: bool,
    pub message: String,
    pub id: i32,
}

/// Raw fields collected from the multipart form
#[derive(Debug, Default)]
struct SignupForm {
    first_name: Option<String>,
    last_name: Option<String>,
    email: Option<String>,
    address: Option<String>,
    university: Option<String>,
    major: Option<String>,
    message: Option<String>,
    cv_url: Option<String>,
}

/// Require a non-empty form field
fn required(value: Option<String>, name: &str) -> Result<String, ApiError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(ApiError::validation(format!(
            "Missing required field: {name}"
        ))),
    }
}

/// Signup handler
///
/// # Errors
///
/// * `400 Bad Request` - Malformed multipart body or missing required field
/// * `409 Conflict` - Email already registered
/// * `500 Internal Server Error` - Store failure
pub async fn submit_signup(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<SignupResponse>, ApiError> {
    let mut form = SignupForm::default();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::validation(format!("Invalid form data: {e}")))?
    {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "firstName" => form.first_name = Some(text(field).await?),
            "lastName" => form.last_name = Some(text(field).await?),
            "email" => form.email = Some(text(field).await?),
            "address" => form.address = Some(text(field).await?),
            "university" => form.university = Some(text(field).await?),
            "major" => form.major = Some(text(field).await?),
            "message" => form.message = Some(text(field).await?),
            "cv" => {
                let file_name = field.file_name().map(str::to_string);
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| ApiError::validation(format!("Invalid CV upload: {e}")))?;
                if let Some(file_name) = file_name {
                    if !bytes.is_empty() {
                        // Stored as a reference only; the upload itself is
                        // not kept
                        form.cv_url =
                            Some(format!("cv_{}_{}", Utc::now().timestamp_millis(), file_name));
                    }
                }
            }
            _ => {}
        }
    }

    let signup = NewSignup {
        first_name: required(form.first_name, "firstName")?,
        last_name: required(form.last_name, "lastName")?,
        email: required(form.email, "email")?,
        address: required(form.address, "address")?,
        university: required(form.university, "university")?,
        major: required(form.major, "major")?,
        cv_url: form.cv_url,
        message: form.message.filter(|m| !m.trim().is_empty()),
    };

    tracing::info!("Signup request for: {}", signup.email);
    let id = insert_signup(&state.pool, signup.clone()).await?;

    // Notifications are fire-and-forget: the signup is committed, so a
    // failed send must not fail the request.
    if let Some(mailer) = &state.mailer {
        let notification = SignupNotification {
            first_name: signup.first_name.clone(),
            last_name: signup.last_name.clone(),
            email: signup.email.clone(),
            university: signup.university.clone(),
            major: signup.major.clone(),
        };
        if let Err(e) = mailer.send_signup_confirmation(&notification).await {
            tracing::warn!("Failed to send confirmation email: {e}");
        }
        if let Err(e) = mailer.send_signup_alert(&notification).await {
            tracing::warn!("Failed to send alert email: {e}");
        }
    }

    Ok(Json(SignupResponse {
        success: true,
        message: "Signup successful! Check your email for confirmation.".to_string(),
        id,
    }))
}

/// Read a text field, mapping decode failures to a validation error
async fn text(field: axum::extract::multipart::Field<'_>) -> Result<String, ApiError> {
    field
        .text()
        .await
        .map_err(|e| ApiError::validation(format!("Invalid form data: {e}")))
}
