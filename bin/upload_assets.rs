use anyhow::Result;
use futures::future::join_all;
use nft_ops::canister::types::Asset;
use nft_ops::canister::TokenClient;
use nft_ops::storage::read::{read_drop_records, read_token_image};
use nft_ops::token_url;

static METADATA_PATH: &str = "data/drop-metadata.json";
static IMAGES_DIR: &str = "data/images";
static BATCH_SIZE: usize = 20;

#[tokio::main]
pub async fn main() -> Result<()> {
    env_logger::init();

    let records = read_drop_records(METADATA_PATH)?;
    let ids: Vec<u64> = records.iter().map(|r| r.token_id).collect();

    let client = TokenClient::from_env().await?;

    println!("Uploading {} assets...", ids.len());

    for chunk in ids.chunks(BATCH_SIZE) {
        let mut batch = vec![];

        for id in chunk {
            match read_token_image(IMAGES_DIR, *id) {
                Ok((data, content_type)) => batch.push(Asset {
                    name: token_url(*id),
                    content_type,
                    data,
                    properties: vec![],
                }),
                Err(e) => println!("Error: {:?}", e),
            }
        }

        let results = join_all(batch.iter().map(|asset| client.upload_asset(asset))).await;

        for result in results {
            if let Err(e) = result {
                println!("Error: {:?}", e);
            }
        }
    }

    println!("  Done");

    Ok(())
}
