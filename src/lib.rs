extern crate dotenv;

pub mod analyzers;
pub mod canister;
pub mod storage;

pub fn token_url(token_id: u64) -> String {
    format!("/Token/{}", token_id)
}
