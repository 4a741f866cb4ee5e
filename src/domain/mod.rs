//! Domain layer: strong types with validation and invariants (no I/O).
//!
//! The segmentation engine lives here too: it is pure derived data over
//! message text, with no wire or HTTP concerns.

mod request;
mod response;
pub mod segment;
mod validation;
mod value;

pub use request::{QUICK_SEND_MAX_RECIPIENTS, QuickSend, QuickSendOptions};
pub use response::{BalanceResponse, QuickSendResponse, Status};
pub use segment::{CostEstimate, Segmentation, SmsEncoding, segment};
pub use validation::ValidationError;
pub use value::{
    ApiToken, KnownStatusCode, MessageText, PhoneNumber, RawPhoneNumber, Reference, SenderId,
    StatusCode, UnixTimestamp,
};
