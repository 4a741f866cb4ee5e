use crate::domain::segment::{Segmentation, segment};
use crate::domain::validation::ValidationError;

use phonenumber::country;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// SewMR SMS API token, sent as an `Authorization: Bearer` header.
///
/// Invariant: non-empty after trimming.
pub struct ApiToken(String);

impl ApiToken {
    /// Name used in validation errors (the token never appears in a body).
    pub const FIELD: &'static str = "api_token";

    /// Create a validated [`ApiToken`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated token.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Registered sender ID (`sender_id`), the originator shown on handsets.
///
/// Invariant: non-empty after trimming and at most 11 characters, the GSM
/// alphanumeric-originator limit. The value must be approved for your SewMR
/// account before the API will accept it.
pub struct SenderId(String);

impl SenderId {
    /// JSON body field name used by SewMR (`sender_id`).
    pub const FIELD: &'static str = "sender_id";

    /// Maximum originator length accepted by the network.
    pub const MAX_CHARS: usize = 11;

    /// Create a validated [`SenderId`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        let chars = trimmed.chars().count();
        if chars > Self::MAX_CHARS {
            return Err(ValidationError::SenderTooLong {
                max: Self::MAX_CHARS,
                actual: chars,
            });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated sender id.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// SMS message text (`message`).
///
/// Invariant: non-empty after trimming. The original value (including
/// whitespace) is preserved; the gateway bills whitespace like any other
/// character.
pub struct MessageText(String);

impl MessageText {
    /// JSON body field name used by SewMR (`message`).
    pub const FIELD: &'static str = "message";

    /// Create validated message text.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(value))
    }

    /// Borrow the message text as provided.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Segment this text the way the gateway will bill it.
    pub fn segmentation(&self) -> Segmentation {
        segment(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Unvalidated phone number as sent to SewMR in `recipients`.
///
/// Invariant: non-empty after trimming. This type does not normalize; if you
/// want E.164 normalization, parse into [`PhoneNumber`] and convert it into
/// [`RawPhoneNumber`].
pub struct RawPhoneNumber(String);

impl RawPhoneNumber {
    /// JSON body field name used by SewMR (`recipients`).
    pub const FIELD: &'static str = "recipients";

    /// Create a validated (non-empty) raw phone number.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Raw (trimmed) value as sent to SewMR.
    pub fn raw(&self) -> &str {
        &self.0
    }
}

impl From<PhoneNumber> for RawPhoneNumber {
    /// Convert an already-parsed phone number to a normalized raw value (E.164).
    fn from(value: PhoneNumber) -> Self {
        Self(value.e164)
    }
}

#[derive(Debug, Clone)]
/// Parsed phone number with an E.164 representation.
///
/// Equality, ordering, and hashing are based on the E.164 form.
pub struct PhoneNumber {
    raw: String,
    e164: String,
    parsed: phonenumber::PhoneNumber,
}

impl PhoneNumber {
    /// JSON body field name used by SewMR (`recipients`).
    pub const FIELD: &'static str = "recipients";

    /// Parse and normalize a phone number into E.164.
    ///
    /// `default_region` is used when the input does not contain an explicit
    /// country prefix; SewMR consoles typically pass
    /// `phonenumber::country::Id::TZ`.
    pub fn parse(
        default_region: Option<country::Id>,
        input: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let input = input.into();
        let raw = input.trim().to_owned();
        if raw.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }

        let parsed = phonenumber::parse(default_region, &raw)
            .map_err(|_| ValidationError::InvalidPhoneNumber { input: raw.clone() })?;

        let e164 = phonenumber::format(&parsed)
            .mode(phonenumber::Mode::E164)
            .to_string();

        Ok(Self { raw, e164, parsed })
    }

    /// Raw input after trimming.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Normalized E.164 representation.
    pub fn e164(&self) -> &str {
        &self.e164
    }

    /// The parsed phone number from the `phonenumber` crate.
    pub fn parsed(&self) -> &phonenumber::PhoneNumber {
        &self.parsed
    }
}

impl PartialEq for PhoneNumber {
    fn eq(&self, other: &Self) -> bool {
        self.e164 == other.e164
    }
}

impl Eq for PhoneNumber {}

impl std::hash::Hash for PhoneNumber {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.e164.hash(state);
    }
}

impl std::cmp::PartialOrd for PhoneNumber {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl std::cmp::Ord for PhoneNumber {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.e164.cmp(&other.e164)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Batch reference (`reference`) returned by `sms/quick-send`.
///
/// Invariant: non-empty after trimming.
pub struct Reference(String);

impl Reference {
    /// JSON response field name used by SewMR (`reference`).
    pub const FIELD: &'static str = "reference";

    /// Create a validated [`Reference`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated reference.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Unix timestamp in seconds (`schedule`).
///
/// This is used by SewMR for deferred sends.
pub struct UnixTimestamp(u64);

impl UnixTimestamp {
    /// JSON body field name used by SewMR (`schedule`).
    pub const FIELD: &'static str = "schedule";

    /// Create a timestamp value (no range validation is performed).
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    /// Get the underlying timestamp in seconds.
    pub fn value(self) -> u64 {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// SewMR API status code.
///
/// This value is preserved as-is even when the code is unknown to this crate.
pub struct StatusCode(i32);

impl StatusCode {
    /// Construct a status code from its integer representation.
    pub fn new(code: i32) -> Self {
        Self(code)
    }

    /// Get the integer code as provided by SewMR.
    pub fn as_i32(self) -> i32 {
        self.0
    }

    /// Map this code to a known status code variant, if one exists.
    pub fn known_kind(self) -> Option<KnownStatusCode> {
        KnownStatusCode::from_code(self.0)
    }

    /// Returns `true` if this status code is considered retryable by the crate.
    pub fn is_retryable(self) -> bool {
        matches!(
            self.known_kind(),
            Some(kind) if kind.is_retryable()
        )
    }

    /// Returns `true` if this status code represents an authentication error.
    pub fn is_auth_error(self) -> bool {
        matches!(
            self.known_kind(),
            Some(kind) if kind.is_auth_error()
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
/// Known SewMR status codes supported by this crate.
///
/// Unknown codes are preserved as [`StatusCode`] and return `None` from
/// [`KnownStatusCode::from_code`].
pub enum KnownStatusCode {
    Ok,
    Queued,
    BadRequest,
    InvalidToken,
    InsufficientCredit,
    SenderNotApproved,
    NotFound,
    InvalidRecipients,
    TooManyRequests,
    ServerError,
    ServiceUnavailable,
}

impl KnownStatusCode {
    /// Convert a raw SewMR integer code into a known variant.
    pub fn from_code(code: i32) -> Option<Self> {
        Some(match code {
            200 => Self::Ok,
            201 => Self::Queued,
            400 => Self::BadRequest,
            401 => Self::InvalidToken,
            402 => Self::InsufficientCredit,
            403 => Self::SenderNotApproved,
            404 => Self::NotFound,
            422 => Self::InvalidRecipients,
            429 => Self::TooManyRequests,
            500 => Self::ServerError,
            503 => Self::ServiceUnavailable,
            _ => return None,
        })
    }

    /// Whether this status is likely transient and can be retried.
    pub fn is_retryable(self) -> bool {
        matches!(
            self,
            Self::TooManyRequests | Self::ServerError | Self::ServiceUnavailable
        )
    }

    /// Whether this status indicates invalid/expired credentials.
    pub fn is_auth_error(self) -> bool {
        matches!(self, Self::InvalidToken)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::segment::SmsEncoding;

    #[test]
    fn string_newtypes_trim_or_validate() {
        let token = ApiToken::new("  key ").unwrap();
        assert_eq!(token.as_str(), "key");
        assert!(ApiToken::new("  ").is_err());

        let sender = SenderId::new(" SEWMR ").unwrap();
        assert_eq!(sender.as_str(), "SEWMR");
        assert!(SenderId::new("").is_err());

        let msg = MessageText::new(" hi ").unwrap();
        assert_eq!(msg.as_str(), " hi ");
        assert!(MessageText::new("  ").is_err());

        let reference = Reference::new(" b2f1-0042 ").unwrap();
        assert_eq!(reference.as_str(), "b2f1-0042");
        assert!(Reference::new("  ").is_err());
    }

    #[test]
    fn sender_id_enforces_originator_length() {
        assert!(SenderId::new("ELEVENCHARS").is_ok());
        let err = SenderId::new("TWELVECHARSX").unwrap_err();
        assert!(matches!(
            err,
            ValidationError::SenderTooLong { max: 11, actual: 12 }
        ));
    }

    #[test]
    fn message_text_reports_its_segmentation() {
        let msg = MessageText::new("habari €").unwrap();
        let seg = msg.segmentation();
        assert_eq!(seg.encoding, SmsEncoding::Gsm7);
        assert_eq!(seg.units, 9);
        assert_eq!(seg.parts, 1);
    }

    #[test]
    fn raw_phone_number_trims_and_exposes_raw() {
        let raw = RawPhoneNumber::new(" +255754123456 ").unwrap();
        assert_eq!(raw.raw(), "+255754123456");
        assert!(RawPhoneNumber::new("").is_err());
    }

    #[test]
    fn phone_number_parsing_and_equality_use_e164() {
        let p1 = PhoneNumber::parse(None, "+255754123456").unwrap();
        let p2 = PhoneNumber::parse(None, "+255 754 123-456").unwrap();
        assert_eq!(p1, p2);
        assert_eq!(p1.e164(), "+255754123456");
        assert_eq!(p1.raw(), "+255754123456");

        let raw: RawPhoneNumber = p1.clone().into();
        assert_eq!(raw.raw(), "+255754123456");
        assert!(PhoneNumber::parse(None, "not-a-number").is_err());
    }

    #[test]
    fn phone_number_uses_default_region_for_local_input() {
        let pn = PhoneNumber::parse(Some(country::Id::TZ), "0754 123 456").unwrap();
        assert_eq!(pn.e164(), "+255754123456");
    }

    #[test]
    fn status_code_knows_retryable_and_auth_errors() {
        let retryable = StatusCode::new(503);
        assert!(retryable.is_retryable());
        assert!(!retryable.is_auth_error());

        let auth = StatusCode::new(401);
        assert!(auth.is_auth_error());
        assert!(!auth.is_retryable());

        let unknown = StatusCode::new(9999);
        assert!(unknown.known_kind().is_none());
        assert!(!unknown.is_retryable());
        assert!(!unknown.is_auth_error());
    }

    #[test]
    fn status_code_known_mapping() {
        assert_eq!(StatusCode::new(200).known_kind(), Some(KnownStatusCode::Ok));
        assert_eq!(
            StatusCode::new(402).known_kind(),
            Some(KnownStatusCode::InsufficientCredit)
        );
        assert_eq!(
            StatusCode::new(403).known_kind(),
            Some(KnownStatusCode::SenderNotApproved)
        );
        assert_eq!(StatusCode::new(999_999).known_kind(), None);
    }
}
