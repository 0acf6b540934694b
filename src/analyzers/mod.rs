pub mod nri;

use bigdecimal::BigDecimal;

#[derive(Debug, Clone, PartialEq)]
pub struct RankedToken {
    pub id: u64,
    pub probability: BigDecimal,
    pub rank: usize,
    pub nri: f64,
}
