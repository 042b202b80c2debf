use crate::full_math::{div_rounding_up, mul_div, mul_div_rounding_up, to_u128};
use dex_types::{DexError, Q96};
use primitive_types::U256;

fn sorted(sqrt_ratio_a_x96: u128, sqrt_ratio_b_x96: u128) -> (u128, u128) {
    if sqrt_ratio_a_x96 > sqrt_ratio_b_x96 {
        (sqrt_ratio_b_x96, sqrt_ratio_a_x96)
    } else {
        (sqrt_ratio_a_x96, sqrt_ratio_b_x96)
    }
}

/// Calculate amount0 delta for a price move from sqrt_ratio_a to sqrt_ratio_b
/// delta_x = L * (sqrt_pb - sqrt_pa) / (sqrt_pa * sqrt_pb)
///
/// `L << 96` needs up to 224 bits, so the result is kept as U256.
pub fn get_amount0_delta(
    sqrt_ratio_a_x96: u128,
    sqrt_ratio_b_x96: u128,
    liquidity: u128,
    round_up: bool,
) -> Result<U256, DexError> {
    let (sqrt_ratio_lower, sqrt_ratio_upper) = sorted(sqrt_ratio_a_x96, sqrt_ratio_b_x96);

    if sqrt_ratio_lower == 0 {
        return Err(DexError::DivisionByZero);
    }

    let numerator1 = U256::from(liquidity) << 96;
    let numerator2 = U256::from(sqrt_ratio_upper - sqrt_ratio_lower);
    let upper = U256::from(sqrt_ratio_upper);
    let lower = U256::from(sqrt_ratio_lower);

    if round_up {
        div_rounding_up(mul_div_rounding_up(numerator1, numerator2, upper)?, lower)
    } else {
        Ok(mul_div(numerator1, numerator2, upper)? / lower)
    }
}

/// Calculate amount1 delta for a price move from sqrt_ratio_a to sqrt_ratio_b
/// delta_y = L * (sqrt_pb - sqrt_pa)
pub fn get_amount1_delta(
    sqrt_ratio_a_x96: u128,
    sqrt_ratio_b_x96: u128,
    liquidity: u128,
    round_up: bool,
) -> Result<U256, DexError> {
    let (sqrt_ratio_lower, sqrt_ratio_upper) = sorted(sqrt_ratio_a_x96, sqrt_ratio_b_x96);
    let liquidity = U256::from(liquidity);
    let range = U256::from(sqrt_ratio_upper - sqrt_ratio_lower);

    if round_up {
        mul_div_rounding_up(liquidity, range, U256::from(Q96))
    } else {
        mul_div(liquidity, range, U256::from(Q96))
    }
}

/// Get next sqrt price from an input amount of token0 or token1
pub fn get_next_sqrt_price_from_input(
    sqrt_price_x96: u128,
    liquidity: u128,
    amount_in: u128,
    zero_for_one: bool,
) -> Result<u128, DexError> {
    if sqrt_price_x96 == 0 || liquidity == 0 {
        return Err(DexError::InsufficientLiquidity);
    }

    // Round to make sure we don't pass the target price
    if zero_for_one {
        get_next_sqrt_price_from_amount0_rounding_up(sqrt_price_x96, liquidity, amount_in, true)
    } else {
        get_next_sqrt_price_from_amount1_rounding_down(sqrt_price_x96, liquidity, amount_in, true)
    }
}

/// Get next sqrt price from an output amount
pub fn get_next_sqrt_price_from_output(
    sqrt_price_x96: u128,
    liquidity: u128,
    amount_out: u128,
    zero_for_one: bool,
) -> Result<u128, DexError> {
    if sqrt_price_x96 == 0 || liquidity == 0 {
        return Err(DexError::InsufficientLiquidity);
    }

    if zero_for_one {
        get_next_sqrt_price_from_amount1_rounding_down(sqrt_price_x96, liquidity, amount_out, false)
    } else {
        get_next_sqrt_price_from_amount0_rounding_up(sqrt_price_x96, liquidity, amount_out, false)
    }
}

/// Calculate next sqrt price given a token0 amount
/// sqrt_price_next = sqrt_price * L / (L + amount * sqrt_price)  [if add]
/// sqrt_price_next = sqrt_price * L / (L - amount * sqrt_price)  [if remove]
fn get_next_sqrt_price_from_amount0_rounding_up(
    sqrt_price_x96: u128,
    liquidity: u128,
    amount: u128,
    add: bool,
) -> Result<u128, DexError> {
    if amount == 0 {
        return Ok(sqrt_price_x96);
    }

    let numerator1 = U256::from(liquidity) << 96;
    let sqrt_price = U256::from(sqrt_price_x96);
    let amount = U256::from(amount);

    if add {
        if let Some(product) = amount.checked_mul(sqrt_price) {
            if let Some(denominator) = numerator1.checked_add(product) {
                return to_u128(mul_div_rounding_up(numerator1, sqrt_price, denominator)?);
            }
        }
        // L / (L / sqrt_price + amount), less precise but cannot overflow
        let denominator = (numerator1 / sqrt_price)
            .checked_add(amount)
            .ok_or(DexError::ArithmeticOverflow)?;
        to_u128(div_rounding_up(numerator1, denominator)?)
    } else {
        let product = amount
            .checked_mul(sqrt_price)
            .ok_or(DexError::ArithmeticOverflow)?;
        if numerator1 <= product {
            return Err(DexError::InsufficientLiquidity);
        }
        to_u128(mul_div_rounding_up(numerator1, sqrt_price, numerator1 - product)?)
    }
}

/// Calculate next sqrt price given a token1 amount
/// sqrt_price_next = sqrt_price + amount / L  [if add]
/// sqrt_price_next = sqrt_price - amount / L  [if remove]
fn get_next_sqrt_price_from_amount1_rounding_down(
    sqrt_price_x96: u128,
    liquidity: u128,
    amount: u128,
    add: bool,
) -> Result<u128, DexError> {
    let amount = U256::from(amount);
    let liquidity = U256::from(liquidity);
    let sqrt_price = U256::from(sqrt_price_x96);

    if add {
        let quotient = mul_div(amount, U256::from(Q96), liquidity)?;
        let next = sqrt_price
            .checked_add(quotient)
            .ok_or(DexError::ArithmeticOverflow)?;
        to_u128(next)
    } else {
        let quotient = mul_div_rounding_up(amount, U256::from(Q96), liquidity)?;
        if sqrt_price <= quotient {
            return Err(DexError::InsufficientLiquidity);
        }
        to_u128(sqrt_price - quotient)
    }
}
