//! Fluent convenience facade over [`SendsmsClient::send`].

use crate::client::{SendsmsClient, SendsmsError};
use crate::domain::{GatewayResponse, ValidationError};

#[derive(Debug, Clone, Default)]
/// Chainable message builder.
///
/// A thin facade: it collects `to`, `message`, and `from`, checks the
/// required pair on [`MessageBuilder::send`], and delegates to the client.
///
/// ```rust,no_run
/// use sendsms::{Credentials, MessageBuilder, SendsmsClient};
///
/// # async fn run() -> Result<(), sendsms::SendsmsError> {
/// let client = SendsmsClient::new(Credentials::new("user", "secret")?);
/// let reply = MessageBuilder::new()
///     .to("+40751234567")
///     .message("Your order has shipped.")
///     .from("SHOP")
///     .send(&client)
///     .await?;
/// # let _ = reply;
/// # Ok(())
/// # }
/// ```
pub struct MessageBuilder {
    to: Option<String>,
    message: Option<String>,
    from: Option<String>,
}

impl MessageBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the destination phone number.
    pub fn to(mut self, to: impl Into<String>) -> Self {
        self.to = Some(to.into());
        self
    }

    /// Set the message body.
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Alias for [`MessageBuilder::message`].
    pub fn text(self, text: impl Into<String>) -> Self {
        self.message(text)
    }

    /// Set the sender label or number.
    pub fn from(mut self, from: impl Into<String>) -> Self {
        self.from = Some(from.into());
        self
    }

    /// Validate the required pair and send through the client.
    ///
    /// Fails with [`ValidationError::MissingRequiredParameters`], carrying
    /// both collected values, when the destination or the message is
    /// missing or empty.
    pub async fn send(self, client: &SendsmsClient) -> Result<GatewayResponse, SendsmsError> {
        let to = self.to.unwrap_or_default();
        let message = self.message.unwrap_or_default();
        if to.trim().is_empty() || message.trim().is_empty() {
            return Err(ValidationError::MissingRequiredParameters { to, message }.into());
        }

        client.send(to, message, self.from.as_deref()).await
    }
}

#[cfg(test)]
mod tests {
    use crate::client::Credentials;
    use crate::domain::ValidationError;

    use super::*;

    fn offline_client() -> SendsmsClient {
        // The builder validates before the client is reached; an
        // unresolvable endpoint keeps these tests off the network.
        SendsmsClient::builder(Credentials::new("user", "secret").unwrap())
            .endpoint("https://example.invalid/json")
            .build()
            .unwrap()
    }

    #[test]
    fn setters_chain_and_text_aliases_message() {
        let builder = MessageBuilder::new()
            .to("+40751234567")
            .text("hello")
            .from("SHOP");
        assert_eq!(builder.to.as_deref(), Some("+40751234567"));
        assert_eq!(builder.message.as_deref(), Some("hello"));
        assert_eq!(builder.from.as_deref(), Some("SHOP"));
    }

    #[tokio::test]
    async fn send_requires_destination_and_message() {
        let client = offline_client();

        let err = MessageBuilder::new()
            .message("hello")
            .send(&client)
            .await
            .unwrap_err();
        match err {
            SendsmsError::Validation(ValidationError::MissingRequiredParameters {
                to,
                message,
            }) => {
                assert_eq!(to, "");
                assert_eq!(message, "hello");
            }
            other => panic!("unexpected error: {other:?}"),
        }

        let err = MessageBuilder::new()
            .to("+40751234567")
            .message("   ")
            .send(&client)
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            SendsmsError::Validation(ValidationError::MissingRequiredParameters { .. })
        ));
    }
}
