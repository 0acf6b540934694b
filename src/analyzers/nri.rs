use super::RankedToken;
use crate::storage::TokenMeta;

use bigdecimal::{BigDecimal, One, RoundingMode, ToPrimitive};
use std::collections::HashMap;
use thiserror::Error;

/// Per trait name, the empirical probability of each observed value
/// (occurrence count divided by the total number of tokens).
pub type TraitFrequencies = HashMap<String, HashMap<String, BigDecimal>>;

#[derive(Error, Debug)]
pub enum RarityError {
    #[error("no tokens to rank")]
    EmptyInput,

    #[error("no frequency entry for trait {name}={value} on token {token_id}")]
    MissingFrequencyEntry {
        token_id: u64,
        name: String,
        value: String,
    },
}

pub fn trait_frequencies(tokens: &[TokenMeta]) -> TraitFrequencies {
    let mut counts: HashMap<String, HashMap<String, u64>> = HashMap::new();

    for token in tokens {
        for prop in &token.properties {
            *counts
                .entry(prop.name.clone())
                .or_default()
                .entry(prop.value.clone())
                .or_insert(0) += 1;
        }
    }

    let total = BigDecimal::from(tokens.len() as u64);

    counts
        .into_iter()
        .map(|(name, values)| {
            let probabilities = values
                .into_iter()
                .map(|(value, count)| (value, BigDecimal::from(count) / &total))
                .collect();
            (name, probabilities)
        })
        .collect()
}

/// Product of the per-trait probabilities of a token's properties. A token
/// without properties has the empty product, 1. A lookup miss means the
/// table was not built from the collection being scored.
pub fn joint_probability(
    frequencies: &TraitFrequencies,
    token: &TokenMeta,
) -> Result<BigDecimal, RarityError> {
    let mut probability = BigDecimal::one();

    for prop in &token.properties {
        let p = frequencies
            .get(&prop.name)
            .and_then(|values| values.get(&prop.value))
            .ok_or_else(|| RarityError::MissingFrequencyEntry {
                token_id: token.id,
                name: prop.name.clone(),
                value: prop.value.clone(),
            })?;

        probability = probability * p;
    }

    Ok(probability)
}

/// Normalized rarity index for a rank in a collection of `total` tokens:
/// `1 - (rank - 1) / total`, rounded half-up to 4 decimal places.
pub fn nri(rank: usize, total: usize) -> f64 {
    let step = BigDecimal::from((rank - 1) as u64) / BigDecimal::from(total as u64);
    let exact = BigDecimal::one() - step;

    exact
        .with_scale_round(4, RoundingMode::HalfUp)
        .to_f64()
        .unwrap_or_default()
}

/// Ranks a collection by joint trait probability, rarest first, and derives
/// each token's rarity index. The result is in input order.
pub fn rank_tokens(tokens: &[TokenMeta]) -> Result<Vec<RankedToken>, RarityError> {
    if tokens.is_empty() {
        return Err(RarityError::EmptyInput);
    }

    let frequencies = trait_frequencies(tokens);

    let mut scored = Vec::with_capacity(tokens.len());
    for (position, token) in tokens.iter().enumerate() {
        scored.push((position, token.id, joint_probability(&frequencies, token)?));
    }

    scored.sort_by(|a, b| a.2.cmp(&b.2));

    let total = tokens.len();
    let mut ranked = Vec::with_capacity(total);
    let mut rank = 1;

    for (i, (position, id, probability)) in scored.iter().enumerate() {
        // exact ties share the lower rank, the next distinct probability
        // skips ahead by the size of the tie group
        if i > 0 && scored[i - 1].2 != *probability {
            rank = i + 1;
        }

        ranked.push((
            *position,
            RankedToken {
                id: *id,
                probability: probability.clone(),
                rank,
                nri: nri(rank, total),
            },
        ));
    }

    ranked.sort_by_key(|(position, _)| *position);

    Ok(ranked.into_iter().map(|(_, token)| token).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canister::types::Property;

    fn token(id: u64, traits: &[(&str, &str)]) -> TokenMeta {
        TokenMeta {
            id,
            properties: traits
                .iter()
                .map(|(name, value)| Property {
                    name: name.to_string(),
                    value: value.to_string(),
                })
                .collect(),
        }
    }

    fn color_tokens() -> Vec<TokenMeta> {
        vec![
            token(0, &[("Color", "Red")]),
            token(1, &[("Color", "Red")]),
            token(2, &[("Color", "Blue")]),
            token(3, &[("Color", "Green")]),
        ]
    }

    #[test]
    fn test_trait_frequencies() {
        let frequencies = trait_frequencies(&color_tokens());
        let color = &frequencies["Color"];

        assert_eq!(color["Red"], BigDecimal::from(1u32) / BigDecimal::from(2u32));
        assert_eq!(color["Blue"], BigDecimal::from(1u32) / BigDecimal::from(4u32));
        assert_eq!(color["Green"], BigDecimal::from(1u32) / BigDecimal::from(4u32));
    }

    #[test]
    fn test_color_scenario() {
        let ranked = rank_tokens(&color_tokens()).unwrap();

        assert_eq!(
            ranked.iter().map(|t| t.rank).collect::<Vec<_>>(),
            vec![3, 3, 1, 1]
        );
        assert_eq!(
            ranked.iter().map(|t| t.nri).collect::<Vec<_>>(),
            vec![0.5, 0.5, 1.0, 1.0]
        );
    }

    #[test]
    fn test_empty_input() {
        assert!(matches!(rank_tokens(&[]), Err(RarityError::EmptyInput)));
    }

    #[test]
    fn test_empty_properties_ranks_last() {
        let tokens = vec![
            token(10, &[("Color", "Red")]),
            token(11, &[("Color", "Red")]),
            token(12, &[]),
        ];

        let ranked = rank_tokens(&tokens).unwrap();

        assert_eq!(ranked[2].probability, BigDecimal::one());
        assert_eq!(ranked[2].rank, 3);
        assert_eq!(ranked[2].nri, 0.3333);
        assert_eq!(ranked[0].rank, 1);
        assert_eq!(ranked[0].nri, 1.0);
    }

    #[test]
    fn test_input_order_preserved() {
        let tokens = vec![
            token(42, &[("Color", "Red")]),
            token(7, &[("Color", "Blue")]),
            token(99, &[("Color", "Red")]),
        ];

        let ranked = rank_tokens(&tokens).unwrap();

        assert_eq!(
            ranked.iter().map(|t| t.id).collect::<Vec<_>>(),
            vec![42, 7, 99]
        );
        assert_eq!(ranked[1].rank, 1);
        assert_eq!(ranked[1].nri, 1.0);
    }

    #[test]
    fn test_determinism() {
        let tokens = color_tokens();
        assert_eq!(rank_tokens(&tokens).unwrap(), rank_tokens(&tokens).unwrap());
    }

    #[test]
    fn test_bounds_and_monotonicity() {
        let mut tokens = vec![];
        for i in 0..12 {
            let color = match i % 4 {
                0 => "Red",
                1 => "Blue",
                2 => "Green",
                _ => "Red",
            };
            let size = if i % 2 == 0 { "Big" } else { "Small" };
            tokens.push(token(i, &[("Color", color), ("Size", size)]));
        }

        let ranked = rank_tokens(&tokens).unwrap();

        for t in &ranked {
            assert!(t.nri > 0.0 && t.nri <= 1.0);
        }

        for a in &ranked {
            for b in &ranked {
                if a.probability < b.probability {
                    assert!(a.rank <= b.rank);
                    assert!(a.nri >= b.nri);
                }
                if a.probability == b.probability {
                    assert_eq!(a.rank, b.rank);
                    assert_eq!(a.nri, b.nri);
                }
            }
        }
    }

    #[test]
    fn test_missing_frequency_entry() {
        let frequencies = trait_frequencies(&color_tokens());
        let foreign = token(5, &[("Color", "Purple")]);

        let err = joint_probability(&frequencies, &foreign).unwrap_err();
        assert!(matches!(err, RarityError::MissingFrequencyEntry { .. }));
    }

    #[test]
    fn test_nri_rounding_half_up() {
        // 1 - 3/20000 = 0.99985; half-up gives 0.9999, half-even would give 0.9998
        assert_eq!(nri(4, 20000), 0.9999);
        assert_eq!(nri(1, 4), 1.0);
        assert_eq!(nri(3, 4), 0.5);
        assert_eq!(nri(4, 4), 0.25);
    }
}
