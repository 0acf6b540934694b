use super::{AirdropEntry, AirdropTarget};
use crate::canister::types::{Property, Token};
use crate::token_url;

use anyhow::{anyhow, Context, Result};
use candid::Principal;
use std::collections::HashMap;

/// Trait columns of the drop metadata sheet, in canonical order.
pub static DROP_TRAITS: &[&str] = &["Background", "Head", "Expression", "Mouth", "Top", "Face"];

pub static DROP_NAME_PREFIX: &str = "Wojak";

/// One raw record of the drop metadata file: the token id plus one column
/// per trait name.
#[derive(serde::Serialize, serde::Deserialize, Debug, Clone)]
pub struct DropRecord {
    #[serde(rename = "tokenId")]
    pub token_id: u64,
    #[serde(flatten)]
    pub traits: HashMap<String, String>,
}

/// Converts raw drop records into the token records the canister stores.
pub struct DropConverter {
    name_prefix: String,
    trait_names: Vec<String>,
}

impl Default for DropConverter {
    fn default() -> Self {
        Self::new(
            DROP_NAME_PREFIX,
            &DROP_TRAITS.iter().map(|t| t.to_string()).collect::<Vec<_>>(),
        )
    }
}

impl DropConverter {
    pub fn new(name_prefix: &str, trait_names: &[String]) -> Self {
        Self {
            name_prefix: name_prefix.to_string(),
            trait_names: trait_names.to_vec(),
        }
    }

    pub fn convert(&self, record: &DropRecord) -> Result<Token> {
        let mut properties = Vec::with_capacity(self.trait_names.len());

        for name in &self.trait_names {
            let value = record
                .traits
                .get(name)
                .ok_or_else(|| anyhow!("token {} is missing trait {}", record.token_id, name))?;

            properties.push(Property {
                name: name.clone(),
                value: value.clone(),
            });
        }

        Ok(Token {
            id: record.token_id as u128,
            url: token_url(record.token_id),
            name: format!("{} #{}", self.name_prefix, record.token_id),
            desc: String::new(),
            properties,
        })
    }
}

/// Expands the airdrop sheet into one mint per unit, numbering tokens
/// sequentially from 1. Principals are validated up front so a bad row
/// aborts the run before any mint is issued.
pub fn expand_airdrop(entries: &[AirdropEntry]) -> Result<Vec<AirdropTarget>> {
    let mut targets = vec![];
    let mut token_id = 1u128;

    for entry in entries {
        let owner = Principal::from_text(&entry.principal)
            .with_context(|| format!("invalid principal {}", entry.principal))?;

        for _ in 0..entry.count {
            targets.push(AirdropTarget { token_id, owner });
            token_id += 1;
        }
    }

    Ok(targets)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn get_record() -> DropRecord {
        serde_json::from_value(serde_json::json!({
            "tokenId": 7,
            "Background": "Blue",
            "Head": "Bald",
            "Expression": "Smug",
            "Mouth": "Cigar",
            "Top": "Hoodie",
            "Face": "Clean",
        }))
        .unwrap()
    }

    #[test]
    fn test_convert_record() {
        let token = DropConverter::default().convert(&get_record()).unwrap();

        assert_eq!(token.id, 7);
        assert_eq!(token.url, "/Token/7");
        assert_eq!(token.name, "Wojak #7");
        assert_eq!(token.desc, "");
        assert_eq!(token.properties.len(), DROP_TRAITS.len());
        assert_eq!(
            token.properties[0],
            Property {
                name: "Background".to_string(),
                value: "Blue".to_string(),
            }
        );
    }

    #[test]
    fn test_convert_missing_trait() {
        let mut record = get_record();
        record.traits.remove("Mouth");

        let err = DropConverter::default().convert(&record).unwrap_err();
        assert!(err.to_string().contains("Mouth"));
    }

    #[test]
    fn test_expand_airdrop() {
        let entries = vec![
            AirdropEntry {
                principal: "aaaaa-aa".to_string(),
                count: 2,
            },
            AirdropEntry {
                principal: "2vxsx-fae".to_string(),
                count: 1,
            },
        ];

        let targets = expand_airdrop(&entries).unwrap();

        assert_eq!(targets.len(), 3);
        assert_eq!(
            targets.iter().map(|t| t.token_id).collect::<Vec<_>>(),
            vec![1, 2, 3]
        );
        assert_eq!(targets[0].owner, targets[1].owner);
        assert_eq!(targets[2].owner, Principal::anonymous());
    }

    #[test]
    fn test_expand_airdrop_bad_principal() {
        let entries = vec![AirdropEntry {
            principal: "not-a-principal".to_string(),
            count: 1,
        }];

        assert!(expand_airdrop(&entries).is_err());
    }
}
