use lectern_core::{Email, EmailClient};
use reqwest::{Client, Url};
use secrecy::{ExposeSecret, Secret};
use serde::Serialize;

const POSTMARK_AUTH_HEADER: &str = "X-Postmark-Server-Token";

/// Outbound mail transport backed by the Postmark HTTP API.
///
/// Reset mail is plain text, so only `TextBody` is sent. The message stream
/// comes from configuration; Postmark routes transactional mail by it.
pub struct PostmarkEmailClient {
    http_client: Client,
    base_url: String,
    sender: Email,
    message_stream: String,
    authorization_token: Secret<String>,
}

impl PostmarkEmailClient {
    pub fn new(
        base_url: String,
        sender: Email,
        message_stream: String,
        authorization_token: Secret<String>,
        http_client: Client,
    ) -> Self {
        Self {
            http_client,
            base_url,
            sender,
            message_stream,
            authorization_token,
        }
    }

    fn send_url(&self) -> Result<Url, String> {
        Url::parse(&self.base_url)
            .and_then(|base| base.join("/email"))
            .map_err(|e| e.to_string())
    }
}

#[async_trait::async_trait]
impl EmailClient for PostmarkEmailClient {
    #[tracing::instrument(name = "Sending email", skip_all)]
    async fn send_email(
        &self,
        recipient: &Email,
        subject: &str,
        content: &str,
    ) -> Result<(), String> {
        let message = OutboundMessage {
            from: self.sender.as_ref().expose_secret(),
            to: recipient.as_ref().expose_secret(),
            subject,
            text_body: content,
            message_stream: &self.message_stream,
        };

        let response = self
            .http_client
            .post(self.send_url()?)
            .header(
                POSTMARK_AUTH_HEADER,
                self.authorization_token.expose_secret(),
            )
            .json(&message)
            .send()
            .await
            .map_err(|e| e.to_string())?;

        response
            .error_for_status()
            .map(|_| ())
            .map_err(|e| e.to_string())
    }
}

#[derive(Serialize, Debug)]
#[serde(rename_all = "PascalCase")]
struct OutboundMessage<'a> {
    from: &'a str,
    to: &'a str,
    subject: &'a str,
    text_body: &'a str,
    message_stream: &'a str,
}
