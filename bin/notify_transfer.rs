use anyhow::Result;
use nft_ops::canister::LedgerProxyClient;

static BLOCK_HEIGHT: u64 = 3162641;

#[tokio::main]
pub async fn main() -> Result<()> {
    env_logger::init();

    let client = LedgerProxyClient::from_env().await?;
    client.notify(BLOCK_HEIGHT).await?;

    println!("Notified ledger proxy of block {}", BLOCK_HEIGHT);

    Ok(())
}
