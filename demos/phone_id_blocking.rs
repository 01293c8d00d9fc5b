use std::io;

use telesign::{Credentials, PhoneIdOptions, PhoneNumber, blocking};

fn main() -> Result<(), Box<dyn std::error::Error>> {
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
    let phone = std::env::args().nth(1).unwrap_or_else(|| "15555555555".to_owned());

    let client = blocking::PhoneIdClient::new(Credentials::new(customer_id, api_key)?)?;
    let response = client.phone_id(&PhoneNumber::new(phone)?, &PhoneIdOptions::default())?;

    println!("status: {}, body: {}", response.status_code, response.body);

    Ok(())
}
