use anyhow::Result;
use candid::Principal;
use nft_ops::canister::TokenClient;

#[tokio::main]
pub async fn main() -> Result<()> {
    env_logger::init();
    dotenv::dotenv().ok();

    let creator = Principal::from_text(dotenv::var("CREATOR")?)?;
    let creator_fee = dotenv::var("CREATOR_FEE")?.parse::<u128>()?;

    let client = TokenClient::from_env().await?;

    println!(
        "set_creators_address: {}",
        client.set_creators_address(creator).await?
    );
    println!(
        "set_creators_fee: {}",
        client.set_creators_fee(creator_fee).await?
    );

    Ok(())
}
