//! Transport layer: HTTP and wire-format details (serialization/deserialization).

mod query;
mod response;

pub use query::{build_url, encode_message_args, filter_args, render_value};
pub use response::{decode_payload, extract_send_echo};
