use anyhow::Result;
use nft_ops::canister::{ledger_proxy_id, TokenClient};

#[tokio::main]
pub async fn main() -> Result<()> {
    env_logger::init();

    let ledger = ledger_proxy_id()?;

    let client = TokenClient::from_env().await?;
    let result = client.set_ledger_canister(ledger).await?;

    println!("set_ledger_canister: {}", result);

    Ok(())
}
