use std::io;

use sendsms::{Credentials, SendsmsClient};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let username = std::env::var("SENDSMS_USERNAME").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "SENDSMS_USERNAME environment variable is required",
        )
    })?;
    let password = std::env::var("SENDSMS_PASSWORD").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "SENDSMS_PASSWORD environment variable is required",
        )
    })?;
    let phone = std::env::var("SENDSMS_PHONE").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "SENDSMS_PHONE environment variable is required",
        )
    })?;
    let message = std::env::var("SENDSMS_MESSAGE")
        .unwrap_or_else(|_| "Hello from the sendsms demo.".to_owned());

    let client = SendsmsClient::new(Credentials::new(username, password)?);
    let response = client.send(phone, message, None).await?;

    match response.payload() {
        Some(payload) => println!("sent: {payload:?}"),
        None => println!("gateway unreachable: {:?}", response.error_message()),
    }

    Ok(())
}
