//! Domain layer: strong types with validation and invariants (no I/O).

mod registry;
mod request;
mod response;
mod validation;
mod value;

pub use registry::{
    OperationDescriptor, OperationRegistry, SEND_ARG_ORDER, STANDARD_OPERATIONS,
};
pub use request::{ArgValue, DispatchArgs, MessageOptions, MessageRequest};
pub use response::{GatewayResponse, Payload};
pub use validation::ValidationError;
pub use value::{
    CallbackUrl, Charset, DataCoding, MessageClass, MessageText, Password, PhoneNumber,
    RawPhoneNumber, ReportMask, SenderId, ShortUrl, Username,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn username_rejects_empty() {
        assert!(matches!(
            Username::new("   "),
            Err(ValidationError::Empty {
                field: Username::FIELD
            })
        ));
    }

    #[test]
    fn password_rejects_empty() {
        assert!(matches!(
            Password::new(""),
            Err(ValidationError::Empty {
                field: Password::FIELD
            })
        ));
    }

    #[test]
    fn phone_number_parses_with_region_and_trims() {
        let pn = PhoneNumber::parse(Some(phonenumber::country::Id::RO), " 0751234567 ").unwrap();
        assert_eq!(pn.raw(), "0751234567");
        assert_eq!(pn.e164(), "+40751234567");
    }

    #[test]
    fn raw_phone_number_from_phone_number_uses_e164() {
        let pn = PhoneNumber::parse(Some(phonenumber::country::Id::RO), "0751234567").unwrap();
        let raw: RawPhoneNumber = pn.into();
        assert_eq!(raw.raw(), "+40751234567");
    }

    #[test]
    fn standard_registry_and_send_order_agree() {
        let registry = OperationRegistry::standard();
        let send = registry.get("send").unwrap();
        assert_eq!(send.arg_order(), SEND_ARG_ORDER);
        assert_eq!(send.remote_action(), "message_send");
    }

    #[test]
    fn message_request_round_trips_its_parts() {
        let options = MessageOptions {
            from: Some(SenderId::new("SHOP").unwrap()),
            ..Default::default()
        };
        let request = MessageRequest::parse("+40751234567", "hello", options).unwrap();
        assert_eq!(request.to().raw(), "+40751234567");
        assert_eq!(request.text().as_str(), "hello");
        assert_eq!(
            request.options().from.as_ref().map(SenderId::as_str),
            Some("SHOP")
        );
    }
}
