use super::{AirdropEntry, TokenMeta};
use crate::storage::preprocess::DropRecord;

use anyhow::{anyhow, Context, Result};
use candid::Principal;
use std::collections::HashMap;
use std::fs::File;
use std::path::{Path, PathBuf};

// ============ TOKEN METADATA ============
pub fn read_tokens_metadata(path: &str) -> Result<Vec<TokenMeta>> {
    let file = File::open(path).with_context(|| format!("cannot open {}", path))?;
    serde_json::from_reader(file).with_context(|| format!("malformed token record in {}", path))
}

pub fn read_drop_records(path: &str) -> Result<Vec<DropRecord>> {
    let file = File::open(path).with_context(|| format!("cannot open {}", path))?;
    serde_json::from_reader(file).with_context(|| format!("malformed drop record in {}", path))
}

// ============ AIRDROP ============
pub fn read_airdrop_list(path: &str) -> Result<Vec<AirdropEntry>> {
    let file = File::open(path).with_context(|| format!("cannot open {}", path))?;
    serde_json::from_reader(file).with_context(|| format!("malformed airdrop entry in {}", path))
}

// ============ CANISTER IDS ============
/// Resolves a canister id from the `canister_ids.json` registry, keyed by
/// canister name and then network (`ic` or `local`).
pub fn read_canister_id(path: &str, canister: &str, network: &str) -> Result<Principal> {
    let file = File::open(path).with_context(|| format!("cannot open {}", path))?;
    let ids: HashMap<String, HashMap<String, String>> = serde_json::from_reader(file)?;

    let text = ids
        .get(canister)
        .and_then(|networks| networks.get(network))
        .ok_or_else(|| anyhow!("no {} canister id for network {} in {}", canister, network, path))?;

    Principal::from_text(text).map_err(|e| e.into())
}

// ============ IMAGES ============
/// Finds the image for a token under `dir`, trying `.jpg` then `.png`.
pub fn read_token_image(dir: &str, token_id: u64) -> Result<(Vec<u8>, String)> {
    let base = Path::new(dir).join(token_id.to_string());

    let (path, content_type) = image_candidates(&base)
        .into_iter()
        .find(|(p, _)| p.exists())
        .ok_or_else(|| anyhow!("no image for token {} under {}", token_id, dir))?;

    let data = std::fs::read(&path).with_context(|| format!("cannot read {}", path.display()))?;
    Ok((data, content_type))
}

fn image_candidates(base: &Path) -> Vec<(PathBuf, String)> {
    vec![
        (base.with_extension("jpg"), "image/jpg".to_string()),
        (base.with_extension("png"), "image/png".to_string()),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_canister_id() {
        let id = read_canister_id("canister_ids.example.json", "token", "ic").unwrap();
        assert_eq!(id.to_text(), "nvtz2-maaaa-aaaah-qcohq-cai");

        let id = read_canister_id("canister_ids.example.json", "ledger_proxy", "ic").unwrap();
        assert_eq!(id.to_text(), "i3oug-lyaaa-aaaah-qco3a-cai");
    }

    #[test]
    fn test_read_canister_id_unknown_network() {
        let res = read_canister_id("canister_ids.example.json", "token", "testnet");
        assert!(res.is_err());
    }

    #[test]
    fn test_malformed_token_record() {
        // a record without an id must be rejected, not coerced
        let res: Result<Vec<TokenMeta>, _> =
            serde_json::from_str(r#"[{"properties": [{"name": "Color", "value": "Red"}]}]"#);
        assert!(res.unwrap_err().to_string().contains("id"));
    }
}
