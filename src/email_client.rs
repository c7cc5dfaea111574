use crate::domain::LeadEmail;

use std::time::Duration;

use {
    reqwest::{Client, Url},
    secrecy::{ExposeSecret, Secret},
    serde::Serialize,
};

pub struct EmailClient {
    sender: LeadEmail,
    http_client: Client,
    base_url: Url,
    authorization_token: Secret<String>,
}

impl EmailClient {
    pub fn new(
        base_url: String,
        sender: LeadEmail,
        authorization_token: Secret<String>,
        timeout: Duration,
    ) -> Result<Self, String> {
        let http_client = Client::builder().timeout(timeout).build().unwrap();
        Ok(Self {
            http_client,
            base_url: Url::parse(&base_url).map_err(|_| "Invalid base url")?,
            sender,
            authorization_token,
        })
    }

    pub async fn send_email(
        &self,
        recipient: &LeadEmail,
        subject: &str,
        html_content: &str,
    ) -> Result<(), reqwest::Error> {
        let url = self
            .base_url
            .join("emails")
            .expect("Failed to join base URL with `/emails` endpoint");

        let request_body = SendEmailRequest {
            from: self.sender.as_ref(),
            to: recipient.as_ref(),
            subject,
            html: html_content,
        };

        self.http_client
            .post(url)
            .bearer_auth(self.authorization_token.expose_secret())
            .json(&request_body)
            .send()
            .await?
            .error_for_status()?;

        Ok(())
    }
}

#[derive(Debug, Serialize)]
struct SendEmailRequest<'a> {
    from: &'a str,
    to: &'a str,
    subject: &'a str,
    html: &'a str,
}
