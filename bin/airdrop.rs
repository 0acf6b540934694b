use anyhow::Result;
use futures::future::join_all;
use nft_ops::canister::TokenClient;
use nft_ops::storage::preprocess::expand_airdrop;
use nft_ops::storage::read::read_airdrop_list;

static AIRDROP_PATH: &str = "data/airdrop.json";
static BATCH_SIZE: usize = 50;

#[tokio::main]
pub async fn main() -> Result<()> {
    env_logger::init();

    let entries = read_airdrop_list(AIRDROP_PATH)?;
    let targets = expand_airdrop(&entries)?;

    println!(
        "Airdropping {} tokens to {} holders...",
        targets.len(),
        entries.len()
    );

    let client = TokenClient::from_env().await?;

    for chunk in targets.chunks(BATCH_SIZE) {
        let results = join_all(chunk.iter().map(|t| {
            println!("Minting token: {} to: {}", t.token_id, t.owner);
            client.mint_for(t.token_id, t.owner)
        }))
        .await;

        for result in results {
            if let Err(e) = result {
                println!("Error: {:?}", e);
            }
        }
    }

    Ok(())
}
