/**
 * Contact Form Handler
 *
 * This module implements the public contact form for POST /api/contact.
 * Contact messages are not persisted; the form is email-only. A
 * confirmation goes to the sender and an alert to the configured admin
 * address, and failures of either send are logged and swallowed.
 */

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::email::templates::ContactMessage;
use crate::error::ApiError;
use crate::server::state::AppState;

/// Contact form submission
#[derive(Debug, Deserialize)]
pub struct ContactRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub subject: Option<String>,
    pub message: Option<String>,
}

/// Response for a successful submission
#[derive(Debug, Serialize)]
pub struct ContactResponse {
    pub success: bool,
    pub message: String,
}

/// Contact form handler
///
/// # Errors
///
/// * `400 Bad Request` - Any of name, email, subject, message missing or
///   empty
pub async fn submit_contact(
    State(state): State<AppState>,
    Json(request): Json<ContactRequest>,
) -> Result<Json<ContactResponse>, ApiError> {
    let (Some(name), Some(email), Some(subject), Some(message)) = (
        non_empty(request.name),
        non_empty(request.email),
        non_empty(request.subject),
        non_empty(request.message),
    ) else {
        return Err(ApiError::validation("Missing required fields"));
    };

    tracing::info!("Contact form submission from: {}", email);

    let contact = ContactMessage {
        name,
        email,
        subject,
        message,
    };

    if let Some(mailer) = &state.mailer {
        if let Err(e) = mailer.send_contact_confirmation(&contact).await {
            tracing::warn!("Failed to send contact confirmation email: {e}");
        }
        if let Err(e) = mailer.send_contact_alert(&contact).await {
            tracing::warn!("Failed to send contact alert email: {e}");
        }
    }

    Ok(Json(ContactResponse {
        success: true,
        message: "Your message has been sent successfully. We'll get back to you soon!"
            .to_string(),
    }))
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
