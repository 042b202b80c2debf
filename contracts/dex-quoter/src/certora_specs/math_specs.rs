// ============================================================================
// HOP MATH RULES
// ============================================================================
//
// Quotes must never promise more than settlement delivers:
// 1. Constant-product exact-output input always buys at least the output
// 2. Constant-product output stays strictly below the output reserve
// 3. mul_div rounding up exceeds rounding down by at most one
// 4. A swap step never moves the price against its direction
//
// ============================================================================

#[cfg(feature = "certora")]
use cvlr_soroban_derive::rule;

#[cfg(feature = "certora")]
use cvlr::asserts::{cvlr_assert, cvlr_assume, cvlr_satisfy};

/// RULE: the biased exact-output input is sufficient
#[cfg(feature = "certora")]
#[rule]
pub fn v2_exact_output_input_sufficient(
    _env: soroban_sdk::Env,
    amount_out: u128,
    reserve_in: u128,
    reserve_out: u128,
) {
    cvlr_assume!(reserve_in > 0 && reserve_in < (1u128 << 112));
    cvlr_assume!(reserve_out > 0 && reserve_out < (1u128 << 112));
    cvlr_assume!(amount_out > 0 && amount_out < reserve_out);

    if let Ok(amount_in) = dex_math::get_amount_in(amount_out, reserve_in, reserve_out) {
        if let Ok(produced) = dex_math::get_amount_out(amount_in, reserve_in, reserve_out) {
            cvlr_assert!(produced >= amount_out);
        }
    }
}

/// RULE: output never drains the reserve
#[cfg(feature = "certora")]
#[rule]
pub fn v2_output_below_reserve(
    _env: soroban_sdk::Env,
    amount_in: u128,
    reserve_in: u128,
    reserve_out: u128,
) {
    cvlr_assume!(amount_in > 0);
    cvlr_assume!(reserve_in > 0 && reserve_out > 0);

    if let Ok(amount_out) = dex_math::get_amount_out(amount_in, reserve_in, reserve_out) {
        cvlr_assert!(amount_out < reserve_out);
    }
}

/// RULE: rounding up and down differ by at most one
#[cfg(feature = "certora")]
#[rule]
pub fn mul_div_rounding_gap(_env: soroban_sdk::Env, a: u128, b: u128, denominator: u128) {
    use dex_math::{mul_div, mul_div_rounding_up, U256};

    cvlr_assume!(denominator > 0);
    let down = mul_div(U256::from(a), U256::from(b), U256::from(denominator));
    let up = mul_div_rounding_up(U256::from(a), U256::from(b), U256::from(denominator));
    if let (Ok(down), Ok(up)) = (down, up) {
        cvlr_assert!(up >= down);
        cvlr_assert!(up - down <= U256::one());
    }
}

/// RULE: compute_swap_step enforces direction on price movement
#[cfg(feature = "certora")]
#[rule]
pub fn swap_step_price_direction(
    _env: soroban_sdk::Env,
    sqrt_price_current: u128,
    sqrt_price_target: u128,
    liquidity: u128,
    amount_remaining: i128,
    fee_pips: u32,
) {
    use dex_types::{MAX_SQRT_RATIO, MIN_SQRT_RATIO};

    cvlr_assume!(liquidity > 0);
    cvlr_assume!(fee_pips < 1_000_000);
    cvlr_assume!(sqrt_price_current > MIN_SQRT_RATIO && sqrt_price_current < MAX_SQRT_RATIO);
    cvlr_assume!(sqrt_price_target > MIN_SQRT_RATIO && sqrt_price_target < MAX_SQRT_RATIO);

    let result = dex_math::compute_swap_step(
        sqrt_price_current,
        sqrt_price_target,
        liquidity,
        amount_remaining,
        fee_pips,
    );

    if let Ok(step) = result {
        if sqrt_price_current >= sqrt_price_target {
            cvlr_assert!(step.sqrt_price_next_x96 <= sqrt_price_current);
            cvlr_assert!(step.sqrt_price_next_x96 >= sqrt_price_target);
        } else {
            cvlr_assert!(step.sqrt_price_next_x96 >= sqrt_price_current);
            cvlr_assert!(step.sqrt_price_next_x96 <= sqrt_price_target);
        }
    }
}

/// RULE: Sanity - a swap step that moves the price is reachable
#[cfg(feature = "certora")]
#[rule]
pub fn sanity_swap_step_moves(_env: soroban_sdk::Env, amount_remaining: i128) {
    use dex_types::Q96;

    cvlr_assume!(amount_remaining > 0);
    if let Ok(step) = dex_math::compute_swap_step(Q96, Q96 / 2, 1_000_000, amount_remaining, 3000) {
        cvlr_satisfy!(step.sqrt_price_next_x96 < Q96);
    }
}

// ============================================================================
// TESTS (run with cargo test)
// ============================================================================
