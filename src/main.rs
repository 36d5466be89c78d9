use anyhow::Result;
use binance_api_client::{BinanceApiRestClient, KlineInterval};
use tracing::info;

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    // Public endpoints only; no credentials needed
    let client = BinanceApiRestClient::read_only()?;

    client.ping()?;
    info!("Connectivity OK");

    let server_time = client.get_server_time()?;
    println!("Server time: {}", server_time);

    let price = client.get_price("BTCUSDT")?;
    println!("{} last price: {}", price.symbol, price.price);

    let book = client.get_order_book("BTCUSDT", Some(5))?;
    if let (Some(bid), Some(ask)) = (book.best_bid(), book.best_ask()) {
        println!("Best bid {} @ {}, best ask {} @ {}", bid.qty, bid.price, ask.qty, ask.price);
    }

    let bars = client.get_candlestick_bars("BTCUSDT", KlineInterval::Hours1, Some(3), None, None)?;
    for bar in &bars {
        println!(
            "{} open {} high {} low {} close {}",
            bar.open_time, bar.open, bar.high, bar.low, bar.close
        );
    }

    let info = client.get_exchange_info()?;
    println!("{} symbols listed", info.symbols.len());

    Ok(())
}
