//! Constant-product (`x * y = k`) pair math with the fixed 0.3% fee.

use crate::full_math::{mul_div, mul_div_rounding_up, to_u128};
use dex_types::{DexError, EXACT_OUTPUT_INPUT_BIAS, V2_FEE_DENOMINATOR, V2_FEE_NUMERATOR};
use primitive_types::U256;

/// Output for an exact input
/// amount_out = floor(in * 997 * r_out / (r_in * 1000 + in * 997))
pub fn get_amount_out(
    amount_in: u128,
    reserve_in: u128,
    reserve_out: u128,
) -> Result<u128, DexError> {
    if amount_in == 0 {
        return Err(DexError::InvalidAmount);
    }
    if reserve_in == 0 || reserve_out == 0 {
        return Err(DexError::InsufficientLiquidity);
    }

    let amount_in_with_fee = U256::from(amount_in) * U256::from(V2_FEE_NUMERATOR);
    let denominator =
        U256::from(reserve_in) * U256::from(V2_FEE_DENOMINATOR) + amount_in_with_fee;

    to_u128(mul_div(amount_in_with_fee, U256::from(reserve_out), denominator)?)
}

/// Input required for an exact output, biased up by `EXACT_OUTPUT_INPUT_BIAS`
/// amount_in = ceil(r_in * out * 1000 / ((r_out - out) * 997)) + 1
pub fn get_amount_in(
    amount_out: u128,
    reserve_in: u128,
    reserve_out: u128,
) -> Result<u128, DexError> {
    if amount_out == 0 {
        return Err(DexError::InvalidAmount);
    }
    if reserve_in == 0 || reserve_out == 0 || amount_out >= reserve_out {
        return Err(DexError::InsufficientLiquidity);
    }

    let numerator = U256::from(reserve_in) * U256::from(amount_out);
    let denominator = U256::from(reserve_out - amount_out) * U256::from(V2_FEE_NUMERATOR);
    let amount_in = mul_div_rounding_up(numerator, U256::from(V2_FEE_DENOMINATOR), denominator)?;

    to_u128(amount_in)?
        .checked_add(EXACT_OUTPUT_INPUT_BIAS)
        .ok_or(DexError::ArithmeticOverflow)
}

/// Equivalent amount of the other asset at the current reserve ratio
pub fn quote(amount_a: u128, reserve_a: u128, reserve_b: u128) -> Result<u128, DexError> {
    if amount_a == 0 {
        return Err(DexError::InvalidAmount);
    }
    if reserve_a == 0 || reserve_b == 0 {
        return Err(DexError::InsufficientLiquidity);
    }
    to_u128(mul_div(U256::from(amount_a), U256::from(reserve_b), U256::from(reserve_a))?)
}

#[cfg(test)]
mod tests {
    use super::*;

    const E24: u128 = 1_000_000_000_000_000_000_000_000;

    // === get_amount_out ===

    #[test]
    fn test_get_amount_out_deep_pool() {
        assert_eq!(get_amount_out(10_000, E24, E24), Ok(9969));
        assert_eq!(get_amount_out(9969, E24, E24), Ok(9939));
    }

    #[test]
    fn test_get_amount_out_shallow_pool() {
        assert_eq!(get_amount_out(10_000, 1_000_000, 1_000_000), Ok(9871));
    }

    #[test]
    fn test_get_amount_out_errors() {
        assert_eq!(get_amount_out(0, E24, E24), Err(DexError::InvalidAmount));
        assert_eq!(
            get_amount_out(1, 0, E24),
            Err(DexError::InsufficientLiquidity)
        );
    }

    #[test]
    fn test_get_amount_out_large_reserves() {
        // in * 997 * r_out exceeds 256 bits
        let result = get_amount_out(u128::MAX / 2, u128::MAX / 2, u128::MAX).unwrap();
        assert!(result < u128::MAX / 2);
    }

    // === get_amount_in ===

    #[test]
    fn test_get_amount_in_ceiling_plus_bias() {
        assert_eq!(get_amount_in(9969, E24, E24), Ok(10_000));
        assert_eq!(get_amount_in(9871, 1_000_000, 1_000_000), Ok(10_001));
        // non-integral quotient: ceiling then bias
        assert_eq!(get_amount_in(9969, 1_000_000, 1_000_000), Ok(10_101));
    }

    #[test]
    fn test_get_amount_in_covers_output() {
        for amount_out in [1u128, 17, 9_871, 250_000, 999_000] {
            let amount_in = get_amount_in(amount_out, 1_000_000, 1_000_000).unwrap();
            let produced = get_amount_out(amount_in, 1_000_000, 1_000_000).unwrap();
            assert!(produced >= amount_out, "input {} short for {}", amount_in, amount_out);
        }
    }

    #[test]
    fn test_get_amount_in_output_at_reserve() {
        assert_eq!(
            get_amount_in(1_000_000, 1_000_000, 1_000_000),
            Err(DexError::InsufficientLiquidity)
        );
        assert_eq!(
            get_amount_in(1_000_001, 1_000_000, 1_000_000),
            Err(DexError::InsufficientLiquidity)
        );
        assert_eq!(get_amount_in(0, 1, 1), Err(DexError::InvalidAmount));
    }

    // === quote ===

    #[test]
    fn test_quote() {
        assert_eq!(quote(1, 100, 200), Ok(2));
        assert_eq!(quote(2, 200, 100), Ok(1));
        assert_eq!(quote(1, 0, 100), Err(DexError::InsufficientLiquidity));
        assert_eq!(quote(0, 100, 100), Err(DexError::InvalidAmount));
    }
}
