//! Fetch the active marketplace listings.
//!
//! Run:
//! `ORDINALSBOT_API_KEY=<key> cargo run --example marketplace_get_listing`

use ordinalsbot_client::MarketplaceClient;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let api_key = std::env::var("ORDINALSBOT_API_KEY").unwrap_or_default();

    let client = MarketplaceClient::new(&api_key)?;
    let listing = client.get_listing().await?;

    println!("{}", serde_json::to_string_pretty(&listing)?);
    Ok(())
}
