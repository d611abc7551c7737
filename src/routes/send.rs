use crate::domain::BillingNotice;
use crate::email_client::EmailClient;
use crate::template;
use actix_web::http::StatusCode;
use actix_web::{web, HttpResponse, ResponseError};
use anyhow::Context;

#[derive(thiserror::Error)]
pub enum SendNoticeError {
    #[error("{0}")]
    ValidationError(String),
    #[error(transparent)]
    UnexpectedError(#[from] anyhow::Error),
}

impl std::fmt::Debug for SendNoticeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

impl ResponseError for SendNoticeError {
    fn status_code(&self) -> StatusCode {
        match self {
            SendNoticeError::ValidationError(_) => StatusCode::BAD_REQUEST,
            SendNoticeError::UnexpectedError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        // Fixed bodies: detail is logged, never returned to the caller.
        let message = match self {
            SendNoticeError::ValidationError(_) => "Missing required fields",
            SendNoticeError::UnexpectedError(_) => "Failed to send email",
        };
        HttpResponse::build(self.status_code()).json(serde_json::json!({ "error": message }))
    }
}

pub fn error_chain_fmt(
    e: &impl std::error::Error,
    f: &mut std::fmt::Formatter<'_>,
) -> std::fmt::Result {
    writeln!(f, "{}\n", e)?;
    let mut current = e.source();
    while let Some(cause) = current {
        writeln!(f, "Caused by: \n\t{}", cause)?;
        current = cause.source();
    }
    Ok(())
}

/// `POST /send`: deliver a payment-failure notice.
///
/// The body is read raw rather than through `web::Json`: a malformed body
/// must land in the generic failure path (500), not the extractor's 400.
#[tracing::instrument(
    name = "Sending a billing failure notice",
    skip(body, email_client),
    fields(invoice_id = tracing::field::Empty, recipient = tracing::field::Empty)
)]
pub async fn send_notice(
    body: web::Bytes,
    email_client: web::Data<EmailClient>,
) -> Result<HttpResponse, SendNoticeError> {
    let payload: serde_json::Value =
        serde_json::from_slice(&body).context("Failed to parse the request body as JSON")?;
    let fields = payload
        .as_object()
        .context("The request body is not a JSON object")?;

    let notice = BillingNotice::parse(fields).map_err(SendNoticeError::ValidationError)?;
    tracing::Span::current().record("invoice_id", &tracing::field::display(&notice.invoice_id));
    tracing::Span::current().record("recipient", &tracing::field::display(&notice.to_email));

    let document = template::billing_failure(&notice);
    let delivery = email_client
        .send_email(&notice.to_email, &notice.subject(), &document)
        .await
        .context("Failed to submit the notice to the email provider")?;

    Ok(HttpResponse::Ok().json(delivery))
}
