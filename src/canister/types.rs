use candid::{CandidType, Principal};
use serde::{Deserialize, Serialize};

/// Mint and notification calls answer with `variant { Ok : nat64; Err : text }`.
pub type MintResult = Result<u64, String>;
/// Upload calls answer with `variant { Ok; Err : text }`.
pub type UploadResult = Result<(), String>;

#[derive(Debug, Clone, CandidType, Serialize, Deserialize, PartialEq, Eq)]
pub struct Property {
    pub name: String,
    pub value: String,
}

#[derive(Debug, Clone, CandidType, Serialize, Deserialize)]
pub struct Token {
    pub id: u128,
    pub url: String,
    pub name: String,
    pub desc: String,
    pub properties: Vec<Property>,
}

#[derive(Clone, CandidType, Serialize, Deserialize)]
pub struct Asset {
    pub name: String,
    #[serde(rename = "contentType")]
    pub content_type: String,
    pub data: Vec<u8>,
    pub properties: Vec<Property>,
}

#[derive(Debug, Clone, Copy, CandidType, Serialize, Deserialize)]
pub struct ICPTs {
    pub e8s: u64,
}

#[derive(Debug, Clone, CandidType, Serialize, Deserialize)]
pub struct TransactionNotification {
    pub from: Principal,
    pub from_subaccount: Option<u8>,
    pub to: Principal,
    pub to_subaccount: Option<u8>,
    pub amount: ICPTs,
    pub memo: u64,
    pub block_height: u64,
}
