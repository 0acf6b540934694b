use anyhow::Result;
use candid::Principal;
use nft_ops::canister::{ledger_proxy_id, TokenClient};

#[tokio::main]
pub async fn main() -> Result<()> {
    env_logger::init();
    dotenv::dotenv().ok();

    let creator = Principal::from_text(dotenv::var("CREATOR")?)?;
    let creator_fee = dotenv::var("CREATOR_FEE")?.parse::<u128>()?;

    println!("Creator: {}", creator);
    println!("Fee: {}", creator_fee);

    let client = TokenClient::from_env().await?;

    let ledger = ledger_proxy_id()?;
    println!(
        "set_ledger_canister: {}",
        client.set_ledger_canister(ledger).await?
    );
    println!(
        "set_creators_address: {}",
        client.set_creators_address(creator).await?
    );
    println!(
        "set_creators_fee: {}",
        client.set_creators_fee(creator_fee).await?
    );
    println!("set_tx_enabled: {}", client.set_tx_enabled(true).await?);
    println!("set_paused: {}", client.set_paused(false).await?);

    println!("  Trading enabled: {}", client.tx_enabled().await?);
    println!("  Paused: {}", client.is_paused().await?);

    Ok(())
}
