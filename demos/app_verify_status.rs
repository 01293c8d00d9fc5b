use std::io;

use telesign::{AppVerifyClient, Credentials, ExternalId};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let customer_id = std::env::var("TELESIGN_CUSTOMER_ID").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "TELESIGN_CUSTOMER_ID environment variable is required",
        )
    })?;
    let api_key = std::env::var("TELESIGN_API_KEY").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "TELESIGN_API_KEY environment variable is required",
        )
    })?;
    let external_id = std::env::var("TELESIGN_EXTERNAL_ID").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "TELESIGN_EXTERNAL_ID environment variable is required",
        )
    })?;

    let client = AppVerifyClient::new(Credentials::new(customer_id, api_key)?);
    let response = client.status(&ExternalId::new(external_id)?).await?;

    println!(
        "status: {}, success: {}, json: {:?}",
        response.status_code,
        response.is_success(),
        response.json
    );

    Ok(())
}
