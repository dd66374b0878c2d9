//! Quote the price of a 100 kB inscription at 15 sat/vB.
//!
//! Run:
//! `ORDINALSBOT_API_KEY=<key> cargo run --example get_price`
//!
//! Optional env vars:
//! - `ORDINALSBOT_ENV` (`live` or `dev`, defaults to `dev`)

use ordinalsbot_client::types::InscriptionPriceRequest;
use ordinalsbot_client::{InscriptionClient, InscriptionEnv};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let api_key = std::env::var("ORDINALSBOT_API_KEY").unwrap_or_default();
    let env: InscriptionEnv = std::env::var("ORDINALSBOT_ENV")
        .unwrap_or_else(|_| "dev".to_owned())
        .parse()?;

    let client = InscriptionClient::new(&api_key, env)?;
    let price = client
        .get_price(&InscriptionPriceRequest {
            size: 100_000,
            fee: 15,
            ..Default::default()
        })
        .await?;

    println!("{}", serde_json::to_string_pretty(&price)?);
    Ok(())
}
