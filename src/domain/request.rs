use crate::domain::validation::ValidationError;
use crate::domain::value::{
    CallbackUrl, Charset, DataCoding, MessageClass, MessageText, RawPhoneNumber, ReportMask,
    SenderId, ShortUrl,
};

#[derive(Debug, Clone, PartialEq)]
/// A single dispatch argument value.
///
/// Booleans serialize as the literal strings `true`/`false` on the wire,
/// never as `1`/`0`.
pub enum ArgValue {
    Text(String),
    Int(i64),
    Bool(bool),
}

impl From<&str> for ArgValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for ArgValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<i64> for ArgValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<u16> for ArgValue {
    fn from(value: u16) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<u8> for ArgValue {
    fn from(value: u8) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<bool> for ArgValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<&ShortUrl> for ArgValue {
    fn from(value: &ShortUrl) -> Self {
        match value {
            ShortUrl::Toggle(enabled) => Self::Bool(*enabled),
            ShortUrl::Custom(domain) => Self::Text(domain.clone()),
        }
    }
}

/// Ordered dispatch arguments as accepted by
/// [`SendsmsClient::dispatch`](crate::client::SendsmsClient::dispatch).
///
/// Entries with a `None` value are dropped before the query string is built.
pub type DispatchArgs = Vec<(String, Option<ArgValue>)>;

#[derive(Debug, Clone, Default, PartialEq)]
/// Optional per-message settings attached to a send.
///
/// `report_mask` is always sent; every other field is omitted from the wire
/// when unset. A client carries one of these as its configured defaults.
pub struct MessageOptions {
    pub from: Option<SenderId>,
    pub report_mask: ReportMask,
    pub callback_url: Option<CallbackUrl>,
    pub charset: Option<Charset>,
    pub coding: Option<DataCoding>,
    pub class: Option<MessageClass>,
    pub auto_detect_encoding: Option<bool>,
    pub short_url: Option<ShortUrl>,
}

impl MessageOptions {
    /// Query parameter name used by SendSMS (`auto_detect_encoding`).
    pub const AUTO_DETECT_ENCODING_FIELD: &'static str = "auto_detect_encoding";
}

#[derive(Debug, Clone, PartialEq)]
/// A validated message-send request.
///
/// Constructed per send and discarded after dispatch.
pub struct MessageRequest {
    to: RawPhoneNumber,
    text: MessageText,
    options: MessageOptions,
}

impl MessageRequest {
    /// Create a request from already-validated parts.
    pub fn new(to: RawPhoneNumber, text: MessageText, options: MessageOptions) -> Self {
        Self { to, text, options }
    }

    /// Validate raw destination and body and create a request.
    ///
    /// Fails with [`ValidationError::InvalidPhoneNumber`] (carrying the
    /// offending value) or [`ValidationError::EmptyMessage`].
    pub fn parse(
        to: impl Into<String>,
        text: impl Into<String>,
        options: MessageOptions,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            to: RawPhoneNumber::new(to)?,
            text: MessageText::new(text)?,
            options,
        })
    }

    /// Destination phone number.
    pub fn to(&self) -> &RawPhoneNumber {
        &self.to
    }

    /// Message body.
    pub fn text(&self) -> &MessageText {
        &self.text
    }

    /// Per-message settings.
    pub fn options(&self) -> &MessageOptions {
        &self.options
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_validates_destination_and_body() {
        let request = MessageRequest::parse("+40751234567", "hi", MessageOptions::default());
        assert!(request.is_ok());

        assert!(matches!(
            MessageRequest::parse("", "hi", MessageOptions::default()),
            Err(ValidationError::InvalidPhoneNumber { .. })
        ));
        assert!(matches!(
            MessageRequest::parse("+40751234567", "  ", MessageOptions::default()),
            Err(ValidationError::EmptyMessage)
        ));
    }

    #[test]
    fn arg_value_conversions() {
        assert_eq!(ArgValue::from("x"), ArgValue::Text("x".to_owned()));
        assert_eq!(ArgValue::from(19u16), ArgValue::Int(19));
        assert_eq!(ArgValue::from(true), ArgValue::Bool(true));
        assert_eq!(
            ArgValue::from(&ShortUrl::Toggle(false)),
            ArgValue::Bool(false)
        );
        assert_eq!(
            ArgValue::from(&ShortUrl::Custom("sho.rt".to_owned())),
            ArgValue::Text("sho.rt".to_owned())
        );
    }

    #[test]
    fn default_options_only_carry_the_report_mask() {
        let options = MessageOptions::default();
        assert_eq!(options.report_mask.value(), 19);
        assert!(options.from.is_none());
        assert!(options.callback_url.is_none());
        assert!(options.charset.is_none());
        assert!(options.coding.is_none());
        assert!(options.class.is_none());
        assert!(options.auto_detect_encoding.is_none());
        assert!(options.short_url.is_none());
    }
}
