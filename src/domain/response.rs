/// Normalized gateway payload: the response JSON object, enriched for sends
/// with the echoed `to`, `from`, and `message` request fields.
pub type Payload = serde_json::Map<String, serde_json::Value>;

#[derive(Debug, Clone, PartialEq)]
/// Outcome of a dispatched gateway call.
///
/// Transport and HTTP-status failures are values of this type rather than
/// errors: callers get a uniform non-throwing path for the network leg,
/// while validation and protocol faults still raise.
pub enum GatewayResponse {
    /// 2xx response with a JSON object body.
    Success { payload: Payload },
    /// Transport failure or non-2xx HTTP status.
    Failed { error_message: String },
}

impl GatewayResponse {
    /// Whether the gateway answered with a 2xx JSON payload.
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    /// The payload, if the call succeeded.
    pub fn payload(&self) -> Option<&Payload> {
        match self {
            Self::Success { payload } => Some(payload),
            Self::Failed { .. } => None,
        }
    }

    /// The failure message, if the network leg failed.
    pub fn error_message(&self) -> Option<&str> {
        match self {
            Self::Success { .. } => None,
            Self::Failed { error_message } => Some(error_message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accessors_match_variants() {
        let mut payload = Payload::new();
        payload.insert("status".to_owned(), serde_json::json!("success"));
        let ok = GatewayResponse::Success { payload };
        assert!(ok.is_success());
        assert!(ok.payload().is_some());
        assert!(ok.error_message().is_none());

        let failed = GatewayResponse::Failed {
            error_message: "unexpected HTTP status 500".to_owned(),
        };
        assert!(!failed.is_success());
        assert!(failed.payload().is_none());
        assert_eq!(
            failed.error_message(),
            Some("unexpected HTTP status 500")
        );
    }
}
