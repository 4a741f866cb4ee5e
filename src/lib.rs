//! Typed Rust client for the SewMR SMS HTTP API.
//!
//! The design has three layers: a domain layer of strong types (including the
//! GSM-7/UCS-2 segmentation engine), a transport layer for wire-format
//! quirks, and a small client layer orchestrating requests. Segmentation is a
//! pure function, so the cost shown to a user before sending can be computed
//! on every keystroke without touching the network.
//!
//! ```rust,no_run
//! use sewmrsms::{Auth, MessageText, QuickSend, QuickSendOptions, RawPhoneNumber, SenderId,
//!     SewmrSmsClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), sewmrsms::SewmrSmsError> {
//!     let client = SewmrSmsClient::new(Auth::api_token("...")?);
//!     let request = QuickSend::new(
//!         SenderId::new("SEWMR")?,
//!         vec![RawPhoneNumber::new("+255754123456")?],
//!         MessageText::new("Karibu!")?,
//!         QuickSendOptions::default(),
//!     )?;
//!
//!     let estimate = client.estimate(&request);
//!     println!("will cost about {} credits", estimate.credits);
//!
//!     let _resp = client.quick_send(request).await?;
//!     Ok(())
//! }
//! ```
#![forbid(unsafe_code)]

pub mod client;
pub mod domain;
mod transport;

pub use client::{Auth, SewmrSmsClient, SewmrSmsClientBuilder, SewmrSmsError};
pub use domain::{
    ApiToken, BalanceResponse, CostEstimate, KnownStatusCode, MessageText, PhoneNumber,
    QUICK_SEND_MAX_RECIPIENTS, QuickSend, QuickSendOptions, QuickSendResponse, RawPhoneNumber,
    Reference, Segmentation, SenderId, SmsEncoding, Status, StatusCode, UnixTimestamp,
    ValidationError, segment,
};
