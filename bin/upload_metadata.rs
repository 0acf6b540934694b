use anyhow::Result;
use nft_ops::canister::TokenClient;
use nft_ops::storage::preprocess::DropConverter;
use nft_ops::storage::read::read_drop_records;

static METADATA_PATH: &str = "data/drop-metadata.json";

#[tokio::main]
pub async fn main() -> Result<()> {
    env_logger::init();

    let records = read_drop_records(METADATA_PATH)?;
    let converter = DropConverter::default();

    let tokens = records
        .iter()
        .map(|r| converter.convert(r))
        .collect::<Result<Vec<_>>>()?;

    println!("Uploading metadata for {} tokens...", tokens.len());

    let client = TokenClient::from_env().await?;
    client.upload_tokens_metadata(&tokens).await?;

    let stored = client.metadata().await?;
    println!("  Canister now holds {} token records", stored.len());

    Ok(())
}
