use serde::Deserialize;

use super::credits::TransportCredits;
use crate::domain::{BalanceResponse, Status, StatusCode};

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("invalid JSON response: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Deserialize)]
struct BalanceJsonResponse {
    success: bool,
    status: i32,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    data: Option<BalanceJsonData>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct BalanceJsonData {
    #[serde(default)]
    credit_balance: Option<TransportCredits>,
}

pub fn decode_balance_json_response(json: &str) -> Result<BalanceResponse, TransportError> {
    let parsed: BalanceJsonResponse = serde_json::from_str(json)?;
    let data = parsed.data.unwrap_or_default();

    Ok(BalanceResponse {
        status: if parsed.success {
            Status::Ok
        } else {
            Status::Error
        },
        status_code: StatusCode::new(parsed.status),
        status_text: parsed.message,
        credit_balance: data.credit_balance.map(TransportCredits::into_string),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_success_envelope() {
        let json = r#"
        {
          "success": true,
          "status": 200,
          "data": { "credit_balance": "1200" }
        }
        "#;

        let response = decode_balance_json_response(json).unwrap();
        assert_eq!(response.status, Status::Ok);
        assert_eq!(response.status_code, StatusCode::new(200));
        assert_eq!(response.credit_balance.as_deref(), Some("1200"));
    }

    #[test]
    fn decode_preserves_numeric_balance_token() {
        let json = r#"
        {
          "success": true,
          "status": 200,
          "data": { "credit_balance": 1200.00 }
        }
        "#;

        let response = decode_balance_json_response(json).unwrap();
        assert_eq!(response.credit_balance.as_deref(), Some("1200.00"));
    }

    #[test]
    fn decode_error_envelope_without_data() {
        let json = r#"
        {
          "success": false,
          "status": 401,
          "message": "Invalid API token"
        }
        "#;

        let response = decode_balance_json_response(json).unwrap();
        assert_eq!(response.status, Status::Error);
        assert_eq!(response.status_code, StatusCode::new(401));
        assert_eq!(response.status_text.as_deref(), Some("Invalid API token"));
        assert_eq!(response.credit_balance, None);
    }
}
