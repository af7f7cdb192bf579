/*
[INPUT]:  API key pair from FF_API_KEY / FF_API_SECRET
[OUTPUT]: Currency list and a price quote printed to stdout
[POS]:    Examples - read-only exchange queries
[UPDATE]: When adding new exchange endpoints
*/

use fixedfloat_adapter::*;
use rust_decimal::Decimal;
use tracing_subscriber::EnvFilter;

/// Example: list currencies and quote ETH -> BTC
///
/// Run with `RUST_LOG=fixedfloat_adapter=debug` to see request logs.
#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== FixedFloat Exchange Example ===\n");

    let api_key = std::env::var("FF_API_KEY").unwrap_or_default();
    let api_secret = std::env::var("FF_API_SECRET").unwrap_or_default();

    let client = match FixedFloatClient::new(api_key, api_secret) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to create client: {}", e);
            eprintln!("Set FF_API_KEY and FF_API_SECRET to run this example.");
            return;
        }
    };
    println!("✓ HTTP client created for {}\n", client.base_url());

    println!("Querying supported currencies...");
    match client.get_currencies().await {
        Ok(currencies) => {
            let count = currencies.as_array().map_or(0, Vec::len);
            println!("✓ {} currencies", count);
        }
        Err(e) => println!("✗ Error: {}", e),
    }

    let amount = Decimal::new(5, 1);
    println!("\nQuoting {} ETH -> BTC (float rate)...", amount);
    match client.get_price_for("ETH", "BTC", amount).await {
        Ok(price) => println!("✓ Price: {}", price),
        Err(e) => println!("✗ Error: {}", e),
    }

    let fixed = PriceRequest::new("ETH", "BTC", amount)
        .direction(Direction::From)
        .rate_type(RateType::Fixed);
    println!("\nQuoting {} ETH -> BTC (fixed rate)...", amount);
    match client.get_price(&fixed).await {
        Ok(price) => println!("✓ Price: {}", price),
        Err(e) => match e.api_code() {
            Some(code) => println!("✗ Rejected with code {}: {}", code, e),
            None => println!("✗ Error: {}", e),
        },
    }

    println!("\n✓ Exchange example complete");
}
