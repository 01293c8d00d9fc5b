use std::io;

use telesign::{Credentials, PhoneIdClient, PhoneIdOptions, PhoneNumber};

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
    let phone_number = std::env::var("TELESIGN_PHONE_NUMBER").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "TELESIGN_PHONE_NUMBER environment variable is required",
        )
    })?;
    let phone = PhoneNumber::new(phone_number)?;

    let client = PhoneIdClient::new(Credentials::new(customer_id, api_key)?);
    let response = client.phone_id(&phone, &PhoneIdOptions::default()).await?;

    println!("status: {}, body: {}", response.status_code, response.body);

    Ok(())
}
