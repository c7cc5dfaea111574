use crate::{domain::LeadEmail, email_client::EmailClient, startup::NotifyEmail};

use {
    actix_web::{http::StatusCode, web, HttpResponse, ResponseError},
    anyhow::Context,
};

#[derive(thiserror::Error, Debug)]
pub enum LeadCaptureError {
    #[error("Invalid email")]
    InvalidEmail,
    #[error(transparent)]
    NotificationFailed(#[from] anyhow::Error),
}

impl ResponseError for LeadCaptureError {
    fn error_response(&self) -> HttpResponse {
        match self {
            LeadCaptureError::InvalidEmail => HttpResponse::build(StatusCode::BAD_REQUEST)
                .json(serde_json::json!({ "error": "Invalid email" })),
            LeadCaptureError::NotificationFailed(error) => {
                HttpResponse::build(StatusCode::INTERNAL_SERVER_ERROR)
                    .json(serde_json::json!({ "error": format!("{error:#}") }))
            }
        }
    }
}

#[tracing::instrument(name = "Capturing a new lead", skip(body, email_client, notify_email))]
pub async fn capture_lead(
    body: web::Json<serde_json::Value>,
    email_client: web::Data<EmailClient>,
    notify_email: web::Data<NotifyEmail>,
) -> Result<HttpResponse, LeadCaptureError> {
    // `email` must be present and a string; anything else never reaches the
    // email client.
    let email = body
        .get("email")
        .and_then(serde_json::Value::as_str)
        .ok_or(LeadCaptureError::InvalidEmail)?;
    let lead =
        LeadEmail::parse(email.to_string()).ok_or(LeadCaptureError::InvalidEmail)?;

    tracing::info!("Captured new lead {}", lead.as_ref());

    // The welcome email is attempted regardless of the alert's outcome; only
    // the alert decides the response.
    let alert_outcome = send_lead_alert(&lead, &email_client, &notify_email.0).await;
    send_welcome_email(&lead, &email_client).await;
    alert_outcome.context("Failed to deliver the lead alert")?;

    Ok(HttpResponse::Ok().json(serde_json::json!({ "success": true })))
}

#[tracing::instrument(name = "Sending the lead alert", skip(email_client, notify_email))]
async fn send_lead_alert(
    lead: &LeadEmail,
    email_client: &EmailClient,
    notify_email: &LeadEmail,
) -> Result<(), reqwest::Error> {
    // The shape check does not exclude markup characters, so escape before
    // interpolating into HTML.
    let html_body = format!(
        "<p>New potential client: {}</p>",
        htmlescape::encode_minimal(lead.as_ref())
    );

    email_client
        .send_email(notify_email, "New Lead", &html_body)
        .await
}

/// Best-effort delivery: the outcome is logged but never surfaced to the
/// caller. A lead whose welcome email bounced is still a captured lead.
#[tracing::instrument(name = "Sending the welcome email", skip(email_client))]
async fn send_welcome_email(lead: &LeadEmail, email_client: &EmailClient) {
    let html_body = "<h2>Thanks for connecting with Warpline!</h2>\
        <p>We'll be in touch soon to help you put your busywork on autopilot.</p>";

    if let Err(error) = email_client
        .send_email(lead, "Welcome to Warpline 👋", html_body)
        .await
    {
        tracing::warn!(
            error.cause_chain = ?error,
            "Failed to send the welcome email"
        );
    }
}
