//! Typed Rust client for the SendSMS JSON HTTP API.
//!
//! The gateway exposes a single endpoint driven by an `action` query
//! parameter. This crate maps logical operation names (`send`, `balance`,
//! `price`, `ping`, `info`, `number`) onto those actions, builds the
//! percent-encoded request URL, performs one HTTP call per operation, and
//! normalizes the JSON reply — for sends, enriched with the echoed
//! recipient, sender, and body. The design splits into a domain layer of
//! strong types, a transport layer for wire-format quirks, and a small
//! client layer orchestrating requests.
//!
//! ```rust,no_run
//! use sendsms::{Credentials, SendsmsClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), sendsms::SendsmsError> {
//!     let client = SendsmsClient::new(Credentials::new("user", "secret")?);
//!     let reply = client.send("+40751234567", "hello", None).await?;
//!     if let Some(message) = reply.error_message() {
//!         eprintln!("gateway unreachable: {message}");
//!     }
//!     Ok(())
//! }
//! ```
#![forbid(unsafe_code)]

pub mod builder;
pub mod client;
pub mod config;
pub mod domain;
mod transport;

pub use builder::MessageBuilder;
pub use client::{Credentials, SendsmsClient, SendsmsClientBuilder, SendsmsError};
pub use config::{ConfigError, GatewayConfig, MessageDefaults};
pub use domain::{
    ArgValue, CallbackUrl, Charset, DataCoding, DispatchArgs, GatewayResponse, MessageClass,
    MessageOptions, MessageRequest, MessageText, OperationDescriptor, OperationRegistry, Password,
    Payload, PhoneNumber, RawPhoneNumber, ReportMask, SenderId, ShortUrl, Username,
    ValidationError,
};
