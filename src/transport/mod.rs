//! Transport layer: HTTP wire-format details (serialization/deserialization).

mod balance;
mod credits;
mod quick_send;

pub use balance::decode_balance_json_response;
pub use quick_send::{decode_quick_send_json_response, encode_quick_send_json};
