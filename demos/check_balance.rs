use std::io;

use sewmrsms::{Auth, SewmrSmsClient};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let api_token = std::env::var("SEWMRSMS_API_TOKEN").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "SEWMRSMS_API_TOKEN environment variable is required",
        )
    })?;

    let client = SewmrSmsClient::new(Auth::api_token(api_token)?);
    let response = client.check_balance().await?;
    println!(
        "status: {:?}, status_code: {:?}, credit_balance: {:?}",
        response.status, response.status_code, response.credit_balance
    );

    Ok(())
}
