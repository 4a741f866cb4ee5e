use crate::domain::segment::CostEstimate;
use crate::domain::validation::ValidationError;
use crate::domain::value::{MessageText, RawPhoneNumber, SenderId, UnixTimestamp};

pub const QUICK_SEND_MAX_RECIPIENTS: usize = 500;

#[derive(Debug, Clone, Copy, Default)]
pub struct QuickSendOptions {
    /// Deliver at this time instead of immediately.
    pub schedule: Option<UnixTimestamp>,
}

#[derive(Debug, Clone)]
/// One message broadcast to a list of recipients via `sms/quick-send`.
pub struct QuickSend {
    sender: SenderId,
    recipients: Vec<RawPhoneNumber>,
    message: MessageText,
    options: QuickSendOptions,
}

impl QuickSend {
    /// Build a validated quick-send request.
    ///
    /// Errors when `recipients` is empty or exceeds
    /// [`QUICK_SEND_MAX_RECIPIENTS`].
    pub fn new(
        sender: SenderId,
        recipients: Vec<RawPhoneNumber>,
        message: MessageText,
        options: QuickSendOptions,
    ) -> Result<Self, ValidationError> {
        if recipients.is_empty() {
            return Err(ValidationError::Empty {
                field: RawPhoneNumber::FIELD,
            });
        }
        if recipients.len() > QUICK_SEND_MAX_RECIPIENTS {
            return Err(ValidationError::TooManyRecipients {
                max: QUICK_SEND_MAX_RECIPIENTS,
                actual: recipients.len(),
            });
        }
        Ok(Self {
            sender,
            recipients,
            message,
            options,
        })
    }

    pub fn sender(&self) -> &SenderId {
        &self.sender
    }

    pub fn recipients(&self) -> &[RawPhoneNumber] {
        &self.recipients
    }

    pub fn message(&self) -> &MessageText {
        &self.message
    }

    pub fn options(&self) -> &QuickSendOptions {
        &self.options
    }

    /// Credit estimate for this request: parts × recipients.
    ///
    /// The API response carries the authoritative figure; this one is for
    /// display before sending.
    pub fn estimate(&self) -> CostEstimate {
        CostEstimate::new(self.message.segmentation(), self.recipients.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sender() -> SenderId {
        SenderId::new("SEWMR").unwrap()
    }

    fn phone(value: &str) -> RawPhoneNumber {
        RawPhoneNumber::new(value).unwrap()
    }

    #[test]
    fn quick_send_requires_recipients() {
        let err = QuickSend::new(
            sender(),
            Vec::new(),
            MessageText::new("hi").unwrap(),
            QuickSendOptions::default(),
        )
        .unwrap_err();
        assert!(matches!(
            err,
            ValidationError::Empty {
                field: RawPhoneNumber::FIELD
            }
        ));
    }

    #[test]
    fn quick_send_recipient_limit_is_enforced() {
        let recipients = vec![phone("+255754123456"); QUICK_SEND_MAX_RECIPIENTS + 1];
        let err = QuickSend::new(
            sender(),
            recipients,
            MessageText::new("hi").unwrap(),
            QuickSendOptions::default(),
        )
        .unwrap_err();
        assert!(matches!(err, ValidationError::TooManyRecipients { .. }));
    }

    #[test]
    fn quick_send_estimate_scales_with_recipients() {
        let recipients = vec![phone("+255754123456"), phone("+255754123457")];
        let request = QuickSend::new(
            sender(),
            recipients,
            MessageText::new("a".repeat(161)).unwrap(),
            QuickSendOptions::default(),
        )
        .unwrap();

        let estimate = request.estimate();
        assert_eq!(estimate.segmentation.parts, 2);
        assert_eq!(estimate.recipients, 2);
        assert_eq!(estimate.credits, 4);
    }
}
