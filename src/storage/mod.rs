pub mod preprocess;
pub mod read;
pub mod write;

use crate::canister::types::Property;
use candid::Principal;

/// One token record as consumed by the rarity ranking engine: a stable id
/// plus the token's trait assignments.
#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq)]
pub struct TokenMeta {
    pub id: u64,
    pub properties: Vec<Property>,
}

/// One row of the airdrop sheet, as exported by the collection team.
#[derive(serde::Serialize, serde::Deserialize, Debug, Clone)]
pub struct AirdropEntry {
    #[serde(rename = "Principal ID")]
    pub principal: String,
    #[serde(rename = "Number to Send")]
    pub count: u32,
}

/// A single mint to perform: token number and the principal receiving it.
#[derive(Debug, Clone)]
pub struct AirdropTarget {
    pub token_id: u128,
    pub owner: Principal,
}
