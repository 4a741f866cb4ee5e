use serde::Deserialize;

use super::credits::TransportCredits;
use crate::domain::{
    MessageText, QuickSend, QuickSendResponse, RawPhoneNumber, Reference, SenderId, Status,
    StatusCode, UnixTimestamp, ValidationError,
};

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("invalid JSON response: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid response field: {0}")]
    Field(#[from] ValidationError),
}

#[derive(Debug, Clone, Deserialize)]
struct QuickSendJsonResponse {
    success: bool,
    status: i32,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    data: Option<QuickSendJsonData>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct QuickSendJsonData {
    #[serde(default)]
    reference: Option<String>,
    #[serde(default)]
    recipients: Option<u32>,
    #[serde(default)]
    parts_per_message: Option<u32>,
    #[serde(default)]
    credits_spent: Option<u32>,
    #[serde(default)]
    credit_balance: Option<TransportCredits>,
}

/// Build the JSON body for `POST v1/sms/quick-send`.
pub fn encode_quick_send_json(request: &QuickSend) -> serde_json::Value {
    let mut body = serde_json::Map::new();
    body.insert(
        SenderId::FIELD.to_owned(),
        request.sender().as_str().into(),
    );
    body.insert(
        MessageText::FIELD.to_owned(),
        request.message().as_str().into(),
    );
    body.insert(
        RawPhoneNumber::FIELD.to_owned(),
        request
            .recipients()
            .iter()
            .map(|phone| serde_json::Value::from(phone.raw()))
            .collect::<Vec<_>>()
            .into(),
    );
    if let Some(schedule) = request.options().schedule {
        body.insert(UnixTimestamp::FIELD.to_owned(), schedule.value().into());
    }
    serde_json::Value::Object(body)
}

pub fn decode_quick_send_json_response(json: &str) -> Result<QuickSendResponse, TransportError> {
    let parsed: QuickSendJsonResponse = serde_json::from_str(json)?;
    let data = parsed.data.unwrap_or_default();

    Ok(QuickSendResponse {
        status: if parsed.success {
            Status::Ok
        } else {
            Status::Error
        },
        status_code: StatusCode::new(parsed.status),
        status_text: parsed.message,
        reference: data.reference.map(Reference::new).transpose()?,
        recipients: data.recipients,
        parts_per_message: data.parts_per_message,
        credits_spent: data.credits_spent,
        credit_balance: data.credit_balance.map(TransportCredits::into_string),
    })
}
