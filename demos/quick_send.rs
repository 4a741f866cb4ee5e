use std::io;

use sewmrsms::{
    Auth, MessageText, QuickSend, QuickSendOptions, RawPhoneNumber, SenderId, SewmrSmsClient,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let api_token = std::env::var("SEWMRSMS_API_TOKEN").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "SEWMRSMS_API_TOKEN environment variable is required",
        )
    })?;
    let sender = std::env::var("SEWMRSMS_SENDER_ID").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "SEWMRSMS_SENDER_ID environment variable is required",
        )
    })?;
    let phone_raw = std::env::var("SEWMRSMS_PHONE").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "SEWMRSMS_PHONE environment variable is required",
        )
    })?;
    let message = std::env::var("SEWMRSMS_MESSAGE")
        .unwrap_or_else(|_| "Hello from the sewmrsms quick_send demo.".to_owned());

    let client = SewmrSmsClient::new(Auth::api_token(api_token)?);
    let request = QuickSend::new(
        SenderId::new(sender)?,
        vec![RawPhoneNumber::new(phone_raw)?],
        MessageText::new(message)?,
        QuickSendOptions::default(),
    )?;

    let estimate = client.estimate(&request);
    println!(
        "estimate: {:?} encoding, {} part(s), {} credit(s)",
        estimate.segmentation.encoding, estimate.segmentation.parts, estimate.credits
    );

    let response = client.quick_send(request).await?;
    println!(
        "status: {:?}, status_code: {:?}, reference: {:?}, credits_spent: {:?}, credit_balance: {:?}",
        response.status,
        response.status_code,
        response.reference,
        response.credits_spent,
        response.credit_balance
    );

    Ok(())
}
