use std::collections::BTreeMap;

use crate::domain::request::MessageOptions;
use crate::domain::value::{
    CallbackUrl, Charset, DataCoding, MessageClass, MessageText, RawPhoneNumber, ReportMask,
    SenderId, ShortUrl,
};

/// Built-in logical operation → remote action mapping.
///
/// This mirrors the gateway's published action names and is used both as the
/// registry default and as the default `operations` section of
/// [`GatewayConfig`](crate::config::GatewayConfig).
pub const STANDARD_OPERATIONS: &[(&str, &str)] = &[
    ("balance", "user_get_balance"),
    ("ping", "ping"),
    ("price", "route_check_price"),
    ("info", "user_get_info"),
    ("number", "user_get_phone_number"),
    ("send", "message_send"),
];

/// Wire-argument order for the `send` operation.
///
/// The convenience wrappers emit arguments in exactly this order.
pub const SEND_ARG_ORDER: &[&str] = &[
    RawPhoneNumber::FIELD,
    MessageText::FIELD,
    SenderId::FIELD,
    ReportMask::FIELD,
    CallbackUrl::FIELD,
    Charset::FIELD,
    DataCoding::FIELD,
    MessageClass::FIELD,
    MessageOptions::AUTO_DETECT_ENCODING_FIELD,
    ShortUrl::FIELD,
];

const SEND_REQUIRED_ARGS: &[&str] = &[RawPhoneNumber::FIELD, MessageText::FIELD];
const PRICE_REQUIRED_ARGS: &[&str] = &[RawPhoneNumber::FIELD];
const PRICE_ARG_ORDER: &[&str] = &[RawPhoneNumber::FIELD];

#[derive(Debug, Clone, PartialEq, Eq)]
/// Contract of a single logical operation: its remote action name plus the
/// argument schema the convenience wrappers follow.
///
/// Descriptors are fixed at registry construction and read-only afterward.
pub struct OperationDescriptor {
    logical_name: String,
    remote_action: String,
    required_args: &'static [&'static str],
    arg_order: &'static [&'static str],
}

impl OperationDescriptor {
    fn new(logical_name: impl Into<String>, remote_action: impl Into<String>) -> Self {
        let logical_name = logical_name.into();
        let (required_args, arg_order) = contract_for(&logical_name);
        Self {
            logical_name,
            remote_action: remote_action.into(),
            required_args,
            arg_order,
        }
    }

    /// Logical name the client dispatches by.
    pub fn logical_name(&self) -> &str {
        &self.logical_name
    }

    /// Remote `action` value sent on the wire.
    pub fn remote_action(&self) -> &str {
        &self.remote_action
    }

    /// Argument keys the operation requires.
    pub fn required_args(&self) -> &'static [&'static str] {
        self.required_args
    }

    /// Fixed wire order of the operation's known arguments.
    pub fn arg_order(&self) -> &'static [&'static str] {
        self.arg_order
    }

    /// Whether `key` is a required argument of this operation.
    pub fn is_required(&self, key: &str) -> bool {
        self.required_args.contains(&key)
    }
}

/// Argument contracts are keyed by logical name; operations the crate does
/// not know get an open contract (no required args, no fixed order).
fn contract_for(logical_name: &str) -> (&'static [&'static str], &'static [&'static str]) {
    match logical_name {
        "send" => (SEND_REQUIRED_ARGS, SEND_ARG_ORDER),
        "price" => (PRICE_REQUIRED_ARGS, PRICE_ARG_ORDER),
        _ => (&[], &[]),
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Immutable mapping from logical operation names to [`OperationDescriptor`]s.
///
/// Built once (from the standard table or a configured mapping) and never
/// mutated afterward; lookups are the only operation it performs.
pub struct OperationRegistry {
    operations: BTreeMap<String, OperationDescriptor>,
}

impl OperationRegistry {
    /// Registry with the gateway's standard operations.
    pub fn standard() -> Self {
        Self::from_operations(
            STANDARD_OPERATIONS
                .iter()
                .map(|(logical, action)| ((*logical).to_owned(), (*action).to_owned())),
        )
    }

    /// Build a registry from a logical name → remote action mapping.
    ///
    /// Logical names the crate knows (`send`, `price`) keep their argument
    /// contracts; anything else is registered with an open contract so the
    /// gateway's future operations stay reachable through `dispatch`.
    pub fn from_operations(operations: impl IntoIterator<Item = (String, String)>) -> Self {
        let operations = operations
            .into_iter()
            .map(|(logical, action)| {
                let descriptor = OperationDescriptor::new(logical.clone(), action);
                (logical, descriptor)
            })
            .collect();
        Self { operations }
    }

    /// Look up a logical operation.
    pub fn get(&self, logical_name: &str) -> Option<&OperationDescriptor> {
        self.operations.get(logical_name)
    }

    /// Whether a logical operation is registered.
    pub fn contains(&self, logical_name: &str) -> bool {
        self.operations.contains_key(logical_name)
    }

    /// Iterate over the registered descriptors.
    pub fn iter(&self) -> impl Iterator<Item = &OperationDescriptor> {
        self.operations.values()
    }
}

impl Default for OperationRegistry {
    fn default() -> Self {
        Self::standard()
    }
}
