//! Concentrated-liquidity hop simulator.
//!
//! Walks the pool's liquidity distribution one initialized tick (or bitmap
//! word edge) at a time without writing anything back to the pool.

use dex_math::{
    add_delta, compute_swap_step, get_sqrt_ratio_at_tick, get_tick_at_sqrt_ratio,
    next_initialized_tick_within_one_word,
};
use dex_types::{
    max_swap_steps, DexError, QuoterConfig, SwapParams, SwapSimulation, SwapState,
    MAX_SQRT_RATIO, MAX_TICK, MIN_SQRT_RATIO, MIN_TICK,
};
use soroban_sdk::{Address, Env};

use crate::pools::{concentrated_pool, ConcentratedPoolReader, PoolView};

/// Price limit that lets the swap run to the edge of the curve
pub fn default_price_limit(zero_for_one: bool) -> u128 {
    if zero_for_one {
        MIN_SQRT_RATIO + 1
    } else {
        MAX_SQRT_RATIO - 1
    }
}

/// Simulate a swap against `pool`.
///
/// Ticks crossed counts initialized boundaries the price moved strictly
/// past. A boundary at the starting price is never counted, and a boundary
/// the price finishes exactly on is withdrawn from the count.
pub fn simulate_swap<R: ConcentratedPoolReader>(
    pool: &mut R,
    params: &SwapParams,
) -> Result<SwapSimulation, DexError> {
    if params.amount_specified == 0 {
        return Err(DexError::InvalidAmount);
    }

    let slot = pool.slot();
    let fee = pool.fee();
    let tick_spacing = pool.tick_spacing();
    if tick_spacing <= 0 {
        return Err(DexError::TickOutOfBounds);
    }

    let zero_for_one = params.zero_for_one;
    let limit = params.sqrt_price_limit_x96;
    if limit <= MIN_SQRT_RATIO || limit >= MAX_SQRT_RATIO {
        return Err(DexError::InvalidPriceLimit);
    }
    let limit_already_reached = if zero_for_one {
        limit >= slot.sqrt_price_x96
    } else {
        limit <= slot.sqrt_price_x96
    };
    if limit_already_reached {
        return Err(DexError::PriceLimitReached);
    }

    let exact_input = params.amount_specified > 0;
    let mut state = SwapState {
        amount_remaining: params.amount_specified,
        amount_calculated: 0,
        sqrt_price_x96: slot.sqrt_price_x96,
        tick: slot.tick,
        liquidity: slot.liquidity,
    };

    let max_steps = max_swap_steps(tick_spacing);
    let mut steps: u32 = 0;
    let mut tick_loads: u32 = 0;
    let mut ticks_crossed: u32 = 0;
    let mut last_crossed_price: Option<u128> = None;

    while state.amount_remaining != 0 && state.sqrt_price_x96 != limit {
        if steps == max_steps {
            return Err(DexError::StepLimitExceeded);
        }
        steps += 1;

        let sqrt_price_start_x96 = state.sqrt_price_x96;

        let (tick_next, initialized) = next_initialized_tick_within_one_word(
            |word_pos| pool.bitmap_word(word_pos),
            state.tick,
            tick_spacing,
            zero_for_one,
        );
        let tick_next = tick_next.clamp(MIN_TICK, MAX_TICK);
        let sqrt_price_next_x96 = get_sqrt_ratio_at_tick(tick_next)?;

        let sqrt_price_target_x96 = if zero_for_one {
            sqrt_price_next_x96.max(limit)
        } else {
            sqrt_price_next_x96.min(limit)
        };

        let step = compute_swap_step(
            state.sqrt_price_x96,
            sqrt_price_target_x96,
            state.liquidity,
            state.amount_remaining,
            fee,
        )?;

        let consumed = to_i128(
            step.amount_in
                .checked_add(step.fee_amount)
                .ok_or(DexError::ArithmeticOverflow)?,
        )?;
        let produced = to_i128(step.amount_out)?;
        if exact_input {
            state.amount_remaining = checked_sub(state.amount_remaining, consumed)?;
            state.amount_calculated = checked_sub(state.amount_calculated, produced)?;
        } else {
            state.amount_remaining = checked_add(state.amount_remaining, produced)?;
            state.amount_calculated = checked_add(state.amount_calculated, consumed)?;
        }

        state.sqrt_price_x96 = step.sqrt_price_next_x96;

        if state.sqrt_price_x96 == sqrt_price_next_x96 {
            // Reached the boundary
            if initialized {
                let info = pool.tick(tick_next);
                tick_loads += 1;
                let liquidity_net = if zero_for_one {
                    info.liquidity_net
                        .checked_neg()
                        .ok_or(DexError::ArithmeticOverflow)?
                } else {
                    info.liquidity_net
                };
                state.liquidity = add_delta(state.liquidity, liquidity_net)?;

                if sqrt_price_next_x96 != slot.sqrt_price_x96 {
                    ticks_crossed += 1;
                    last_crossed_price = Some(sqrt_price_next_x96);
                }
            }
            state.tick = if zero_for_one { tick_next - 1 } else { tick_next };
        } else if state.sqrt_price_x96 != sqrt_price_start_x96 {
            state.tick = get_tick_at_sqrt_ratio(state.sqrt_price_x96)?;
        }
    }

    // Landed on the last boundary without moving past it
    if last_crossed_price == Some(state.sqrt_price_x96) {
        ticks_crossed -= 1;
    }

    let (amount_in, amount_out) = if exact_input {
        (
            checked_sub(params.amount_specified, state.amount_remaining)?,
            state.amount_calculated.checked_neg().ok_or(DexError::ArithmeticOverflow)?,
        )
    } else {
        (
            state.amount_calculated,
            checked_sub(state.amount_remaining, params.amount_specified)?,
        )
    };

    Ok(SwapSimulation {
        amount_in: amount_in as u128,
        amount_out: amount_out as u128,
        partial: state.amount_remaining != 0,
        sqrt_price_x96: state.sqrt_price_x96,
        tick: state.tick,
        initialized_ticks_crossed: ticks_crossed,
        steps,
        tick_loads,
    })
}

fn to_i128(value: u128) -> Result<i128, DexError> {
    i128::try_from(value).map_err(|_| DexError::ArithmeticOverflow)
}

fn checked_add(a: i128, b: i128) -> Result<i128, DexError> {
    a.checked_add(b).ok_or(DexError::ArithmeticOverflow)
}

fn checked_sub(a: i128, b: i128) -> Result<i128, DexError> {
    a.checked_sub(b).ok_or(DexError::ArithmeticOverflow)
}

fn swap_params(
    token_in: &Address,
    token_out: &Address,
    amount_specified: i128,
    sqrt_price_limit_x96: Option<u128>,
) -> SwapParams {
    let zero_for_one = token_in < token_out;
    SwapParams {
        zero_for_one,
        amount_specified,
        sqrt_price_limit_x96: sqrt_price_limit_x96
            .unwrap_or_else(|| default_price_limit(zero_for_one)),
    }
}

/// Output for `amount_in` through the pool at `fee`. A price limit may leave
/// the input partially filled; the result reports what was consumed.
pub fn quote_exact_input(
    env: &Env,
    config: &QuoterConfig,
    token_in: &Address,
    token_out: &Address,
    fee: u32,
    amount_in: u128,
    sqrt_price_limit_x96: Option<u128>,
) -> Result<SwapSimulation, DexError> {
    let pool = concentrated_pool(env, config, token_in, token_out, fee)?;
    let params = swap_params(token_in, token_out, to_i128(amount_in)?, sqrt_price_limit_x96);
    simulate_swap(&mut PoolView::new(env, &pool), &params)
}

/// Input required for `amount_out`. Unlike exact input, an unfilled amount is an error.
pub fn quote_exact_output(
    env: &Env,
    config: &QuoterConfig,
    token_in: &Address,
    token_out: &Address,
    fee: u32,
    amount_out: u128,
    sqrt_price_limit_x96: Option<u128>,
) -> Result<SwapSimulation, DexError> {
    let pool = concentrated_pool(env, config, token_in, token_out, fee)?;
    let amount_specified = to_i128(amount_out)?
        .checked_neg()
        .ok_or(DexError::ArithmeticOverflow)?;
    let params = swap_params(token_in, token_out, amount_specified, sqrt_price_limit_x96);
    let simulation = simulate_swap(&mut PoolView::new(env, &pool), &params)?;

    if simulation.partial {
        return Err(match sqrt_price_limit_x96 {
            Some(_) => DexError::PriceLimitReached,
            None => DexError::InsufficientLiquidity,
        });
    }
    Ok(simulation)
}
