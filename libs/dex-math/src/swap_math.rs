use crate::full_math::{mul_div, mul_div_rounding_up, to_u128};
use crate::sqrt_price_math::{
    get_amount0_delta, get_amount1_delta, get_next_sqrt_price_from_input,
    get_next_sqrt_price_from_output,
};
use dex_types::{DexError, SwapStepResult, FEE_PIPS_DENOMINATOR};
use primitive_types::U256;

/// Compute the result of swapping within a single tick range
///
/// # Arguments
/// * `sqrt_ratio_current_x96` - Current sqrt price
/// * `sqrt_ratio_target_x96` - Target sqrt price (next tick boundary or price limit)
/// * `liquidity` - Available liquidity in this range
/// * `amount_remaining` - Remaining amount to swap (positive = exact input, negative = exact output)
/// * `fee_pips` - Fee in hundredths of a bip (e.g., 3000 = 0.3%)
pub fn compute_swap_step(
    sqrt_ratio_current_x96: u128,
    sqrt_ratio_target_x96: u128,
    liquidity: u128,
    amount_remaining: i128,
    fee_pips: u32,
) -> Result<SwapStepResult, DexError> {
    if fee_pips >= FEE_PIPS_DENOMINATOR {
        return Err(DexError::ArithmeticOverflow);
    }

    let zero_for_one = sqrt_ratio_current_x96 >= sqrt_ratio_target_x96;
    let exact_in = amount_remaining >= 0;
    let remaining_abs = U256::from(amount_remaining.unsigned_abs());
    let fee = U256::from(fee_pips);
    let denominator = U256::from(FEE_PIPS_DENOMINATOR);

    let sqrt_ratio_next_x96: u128;
    let mut amount_in = U256::zero();
    let mut amount_out = U256::zero();

    if exact_in {
        let amount_remaining_less_fee = mul_div(remaining_abs, denominator - fee, denominator)?;

        // Max input that reaches the target
        amount_in = if zero_for_one {
            get_amount0_delta(sqrt_ratio_target_x96, sqrt_ratio_current_x96, liquidity, true)?
        } else {
            get_amount1_delta(sqrt_ratio_current_x96, sqrt_ratio_target_x96, liquidity, true)?
        };

        sqrt_ratio_next_x96 = if amount_remaining_less_fee >= amount_in {
            sqrt_ratio_target_x96
        } else {
            get_next_sqrt_price_from_input(
                sqrt_ratio_current_x96,
                liquidity,
                to_u128(amount_remaining_less_fee)?,
                zero_for_one,
            )?
        };
    } else {
        amount_out = if zero_for_one {
            get_amount1_delta(sqrt_ratio_target_x96, sqrt_ratio_current_x96, liquidity, false)?
        } else {
            get_amount0_delta(sqrt_ratio_current_x96, sqrt_ratio_target_x96, liquidity, false)?
        };

        sqrt_ratio_next_x96 = if remaining_abs >= amount_out {
            sqrt_ratio_target_x96
        } else {
            get_next_sqrt_price_from_output(
                sqrt_ratio_current_x96,
                liquidity,
                amount_remaining.unsigned_abs(),
                zero_for_one,
            )?
        };
    }

    let max = sqrt_ratio_target_x96 == sqrt_ratio_next_x96;

    // Recompute the amounts actually moved when the step stopped short
    if zero_for_one {
        if !max || !exact_in {
            amount_in =
                get_amount0_delta(sqrt_ratio_next_x96, sqrt_ratio_current_x96, liquidity, true)?;
        }
        if !max || exact_in {
            amount_out =
                get_amount1_delta(sqrt_ratio_next_x96, sqrt_ratio_current_x96, liquidity, false)?;
        }
    } else {
        if !max || !exact_in {
            amount_in =
                get_amount1_delta(sqrt_ratio_current_x96, sqrt_ratio_next_x96, liquidity, true)?;
        }
        if !max || exact_in {
            amount_out =
                get_amount0_delta(sqrt_ratio_current_x96, sqrt_ratio_next_x96, liquidity, false)?;
        }
    }

    // Cap output at remaining for exact output swaps
    if !exact_in && amount_out > remaining_abs {
        amount_out = remaining_abs;
    }

    let fee_amount = if exact_in && sqrt_ratio_next_x96 != sqrt_ratio_target_x96 {
        // Didn't reach target - the remainder is the fee
        remaining_abs
            .checked_sub(amount_in)
            .ok_or(DexError::ArithmeticOverflow)?
    } else {
        mul_div_rounding_up(amount_in, fee, denominator - fee)?
    };

    Ok(SwapStepResult {
        sqrt_price_next_x96: sqrt_ratio_next_x96,
        amount_in: to_u128(amount_in)?,
        amount_out: to_u128(amount_out)?,
        fee_amount: to_u128(fee_amount)?,
    })
}
