use crate::domain::Payload;

use super::query::decode_query;

/// Remote action whose response is enriched with echoed request fields.
/// The gateway's own JSON reply to a send does not repeat the recipient,
/// sender, or body, so they are re-derived from the request URL.
pub const MESSAGE_SEND_ACTION: &str = "message_send";

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("invalid JSON response: {0}")]
    Json(#[from] serde_json::Error),

    #[error("expected a JSON object response, got {found}")]
    NotAnObject { found: &'static str },
}

/// Decode a 2xx response body into the payload object.
pub fn decode_payload(body: &str) -> Result<Payload, TransportError> {
    let value: serde_json::Value = serde_json::from_str(body)?;
    match value {
        serde_json::Value::Object(map) => Ok(map),
        other => Err(TransportError::NotAnObject {
            found: json_type_name(&other),
        }),
    }
}

fn json_type_name(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// Request fields echoed back into a send payload.
pub struct SendEcho {
    pub to: Option<String>,
    pub from: Option<String>,
    pub message: Option<String>,
}

/// Re-parse the constructed request URL and, when the dispatched action is
/// the message-send action, extract `to`, `from`, and `text` (returned as
/// `message`). Every other action yields `None`.
pub fn extract_send_echo(url: &str) -> Option<SendEcho> {
    let query = url.split_once('?').map(|(_, query)| query)?;
    let pairs = decode_query(query);

    let action = pairs
        .iter()
        .find(|(key, _)| key == "action")
        .map(|(_, value)| value.as_str())?;
    if action != MESSAGE_SEND_ACTION {
        return None;
    }

    let mut echo = SendEcho::default();
    for (key, value) in pairs {
        match key.as_str() {
            "to" => echo.to = Some(value),
            "from" => echo.from = Some(value),
            "text" => echo.message = Some(value),
            _ => {}
        }
    }
    Some(echo)
}

impl SendEcho {
    /// Merge the echoed fields into a payload, overwriting on collision.
    pub fn merge_into(self, payload: &mut Payload) {
        if let Some(to) = self.to {
            payload.insert("to".to_owned(), serde_json::Value::String(to));
        }
        if let Some(from) = self.from {
            payload.insert("from".to_owned(), serde_json::Value::String(from));
        }
        if let Some(message) = self.message {
            payload.insert("message".to_owned(), serde_json::Value::String(message));
        }
    }
}
