use anyhow::Result;
use candid::Principal;
use nft_ops::canister::TokenClient;

static TOKEN_ID: u128 = 3;
static RECIPIENT: &str = "dwymk-kn72k-3b7pm-jkqo6-w2b6o-mb4wc-amwya-k2m4s-7vh54-qq5p3-kqe";

#[tokio::main]
pub async fn main() -> Result<()> {
    env_logger::init();

    let recipient = Principal::from_text(RECIPIENT)?;

    let client = TokenClient::from_env().await?;
    let minted = client.mint_for(TOKEN_ID, recipient).await?;

    println!("Minted token {} to {}", minted, recipient);

    Ok(())
}
