use crate::domain::SenderEmail;
use crate::template::Document;
use reqwest::Client;
use secrecy::{ExposeSecret, Secret};

/// Client for the transactional-email provider's send API.
pub struct EmailClient {
    http_client: Client,
    base_url: String,
    sender_name: String,
    sender: SenderEmail,
    authorization_token: Secret<String>,
}

impl EmailClient {
    pub fn new(
        base_url: String,
        sender_name: String,
        sender: SenderEmail,
        authorization_token: Secret<String>,
        timeout: std::time::Duration,
    ) -> Self {
        let http_client = Client::builder()
            .timeout(timeout)
            .build()
            .expect("Failed to build the HTTP client");
        Self {
            http_client,
            base_url,
            sender_name,
            sender,
            authorization_token,
        }
    }

    /// Submit one email to the provider. Returns the provider's raw JSON
    /// payload so callers can pass it through unchanged.
    pub async fn send_email(
        &self,
        recipient: &str,
        subject: &str,
        body: &Document,
    ) -> Result<serde_json::Value, reqwest::Error> {
        let url = format!("{}/emails", self.base_url);
        let request_body = SendEmailRequest {
            from: format!("{} <{}>", self.sender_name, self.sender.as_ref()),
            to: vec![recipient],
            subject,
            html: body.to_html(),
        };
        let response = self
            .http_client
            .post(&url)
            .header(
                "Authorization",
                format!("Bearer {}", self.authorization_token.expose_secret()),
            )
            .json(&request_body)
            .send()
            .await?
            .error_for_status()?;
        response.json().await
    }
}

#[derive(serde::Serialize)]
struct SendEmailRequest<'a> {
    from: String,
    to: Vec<&'a str>,
    subject: &'a str,
    html: String,
}
