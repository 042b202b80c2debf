// ============================================================================
// ROUTE DECODING RULES
// ============================================================================
//
// KEY INVARIANTS:
// 1. Any fee field with bit 23 set decodes as constant-product
// 2. Every real fee tier (<= 999999) decodes as concentrated-liquidity
//    and keeps its value
//
// ============================================================================

#[cfg(feature = "certora")]
use cvlr_soroban_derive::rule;

#[cfg(feature = "certora")]
use cvlr::asserts::{cvlr_assert, cvlr_assume, cvlr_satisfy};

/// RULE: the sentinel bit wins regardless of the lower bits
#[cfg(feature = "certora")]
#[rule]
pub fn sentinel_bit_is_constant_product(_env: soroban_sdk::Env, fee: u32) {
    use dex_types::{PoolKind, V2_FEE_SENTINEL};

    cvlr_assume!(fee & V2_FEE_SENTINEL != 0);
    cvlr_assert!(dex_route::pool_kind_for_fee(fee) == PoolKind::ConstantProduct);
}

/// RULE: fee tiers never collide with the sentinel
#[cfg(feature = "certora")]
#[rule]
pub fn fee_tier_is_concentrated(_env: soroban_sdk::Env, fee: u32) {
    use dex_types::{PoolKind, V3_MAX_FEE};

    cvlr_assume!(fee <= V3_MAX_FEE);
    cvlr_assert!(dex_route::pool_kind_for_fee(fee) == PoolKind::ConcentratedLiquidity(fee));
}

/// RULE: Sanity - a constant-product hop is reachable
#[cfg(feature = "certora")]
#[rule]
pub fn sanity_constant_product_reachable(_env: soroban_sdk::Env, fee: u32) {
    use dex_types::PoolKind;

    let kind = dex_route::pool_kind_for_fee(fee);
    cvlr_satisfy!(kind == PoolKind::ConstantProduct);
}
