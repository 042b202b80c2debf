use soroban_sdk::{contracttype, Address, Vec};

use crate::Fee;

/// Result bundle of a multi-hop quote. Diagnostics are indexed in encoded
/// hop order whatever the traversal direction.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RouteQuote {
    /// Output for exact input, required input for exact output
    pub amount: i128,
    /// Sqrt price after each hop (0 for constant-product hops)
    pub sqrt_price_x96_after_list: Vec<u128>,
    /// Initialized ticks crossed by each hop (0 for constant-product hops)
    pub initialized_ticks_crossed_list: Vec<u32>,
    pub gas_estimate: u64,
}

/// Result of a single-hop quote
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SingleQuote {
    /// Input consumed (less than requested on a price-limited partial fill)
    pub amount_in: i128,
    pub amount_out: i128,
    /// 0 for constant-product hops
    pub sqrt_price_x96_after: u128,
    pub initialized_ticks_crossed: u32,
    pub gas_estimate: u64,
}

/// Single concentrated-liquidity hop query
#[contracttype]
#[derive(Clone, Debug)]
pub struct QuoteExactSingleV3Params {
    pub token_in: Address,
    pub token_out: Address,
    pub fee: Fee,
    /// Input for exact-input queries, desired output for exact-output ones
    pub amount: i128,
    /// 0 means no limit
    pub sqrt_price_limit_x96: u128,
}

/// Single constant-product hop query
#[contracttype]
#[derive(Clone, Debug)]
pub struct QuoteExactSingleV2Params {
    pub token_in: Address,
    pub token_out: Address,
    pub amount: i128,
}
