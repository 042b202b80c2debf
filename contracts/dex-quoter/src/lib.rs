#![no_std]

//! Read-only quoting over mixed constant-product / concentrated-liquidity routes.

mod concentrated;
mod constant_product;
mod gas;
mod orchestrator;
mod pools;
mod storage;

#[cfg(any(test, feature = "certora"))]
pub mod certora_specs;

#[cfg(test)]
mod testutils;

use dex_route::ProtocolSelector;
use dex_types::{
    DexError, QuoteExactSingleV2Params, QuoteExactSingleV3Params, QuoterConfig, RouteQuote,
    SingleQuote,
};
use soroban_sdk::{contract, contractimpl, log, Address, Bytes, Env, Symbol};

use crate::gas::{concentrated_hop_gas, CONSTANT_PRODUCT_HOP_GAS};
use crate::orchestrator::{quote_route, Direction};

#[contract]
pub struct DexQuoter;

#[contractimpl]
impl DexQuoter {
    /// Initialize quoter with the two factories it resolves pools through
    pub fn initialize(env: Env, v3_factory: Address, v2_factory: Address) -> Result<(), DexError> {
        if storage::has_config(&env) {
            return Err(DexError::AlreadyInitialized);
        }

        let config = QuoterConfig {
            v3_factory: v3_factory.clone(),
            v2_factory: v2_factory.clone(),
        };
        storage::set_config(&env, &config);

        env.events()
            .publish((Symbol::new(&env, "initialized"),), (v3_factory, v2_factory));
        Ok(())
    }

    pub fn get_config(env: Env) -> Result<QuoterConfig, DexError> {
        storage::get_config(&env)
    }

    // ========================================================================
    // MULTI-HOP QUOTES
    // ========================================================================

    /// Output for `amount_in` along `route`. Hops whose fee field carries the
    /// constant-product sentinel go through pairs, the rest through pools.
    pub fn quote_exact_input(env: Env, route: Bytes, amount_in: i128) -> Result<RouteQuote, DexError> {
        let config = storage::get_config(&env)?;
        quote_route(
            &env,
            &config,
            &route,
            &ProtocolSelector::EmbeddedSentinel,
            Direction::ExactInput,
            amount_in,
        )
    }

    /// `quote_exact_input` with one protocol flag byte per hop
    pub fn quote_exact_input_flagged(
        env: Env,
        route: Bytes,
        flags: Bytes,
        amount_in: i128,
    ) -> Result<RouteQuote, DexError> {
        let config = storage::get_config(&env)?;
        quote_route(
            &env,
            &config,
            &route,
            &ProtocolSelector::ExplicitFlags(flags),
            Direction::ExactInput,
            amount_in,
        )
    }

    /// Input required for `amount_out` at the end of `route`
    pub fn quote_exact_output(env: Env, route: Bytes, amount_out: i128) -> Result<RouteQuote, DexError> {
        let config = storage::get_config(&env)?;
        quote_route(
            &env,
            &config,
            &route,
            &ProtocolSelector::EmbeddedSentinel,
            Direction::ExactOutput,
            amount_out,
        )
    }

    pub fn quote_exact_output_flagged(
        env: Env,
        route: Bytes,
        flags: Bytes,
        amount_out: i128,
    ) -> Result<RouteQuote, DexError> {
        let config = storage::get_config(&env)?;
        quote_route(
            &env,
            &config,
            &route,
            &ProtocolSelector::ExplicitFlags(flags),
            Direction::ExactOutput,
            amount_out,
        )
    }

    // ========================================================================
    // SINGLE-HOP QUOTES
    // ========================================================================

    /// Quote exact input single swap against a concentrated-liquidity pool.
    /// With a price limit the input may be only partially consumed.
    pub fn quote_exact_input_single_v3(
        env: Env,
        params: QuoteExactSingleV3Params,
    ) -> Result<SingleQuote, DexError> {
        let config = storage::get_config(&env)?;
        let simulation = concentrated::quote_exact_input(
            &env,
            &config,
            &params.token_in,
            &params.token_out,
            params.fee,
            positive(params.amount)?,
            price_limit(params.sqrt_price_limit_x96),
        )?;
        log!(&env, "v3 exact input", simulation.amount_in, simulation.amount_out);

        Ok(SingleQuote {
            amount_in: to_i128(simulation.amount_in)?,
            amount_out: to_i128(simulation.amount_out)?,
            sqrt_price_x96_after: simulation.sqrt_price_x96,
            initialized_ticks_crossed: simulation.initialized_ticks_crossed,
            gas_estimate: concentrated_hop_gas(&simulation),
        })
    }

    /// Quote exact output single swap against a concentrated-liquidity pool
    pub fn quote_exact_output_single_v3(
        env: Env,
        params: QuoteExactSingleV3Params,
    ) -> Result<SingleQuote, DexError> {
        let config = storage::get_config(&env)?;
        let simulation = concentrated::quote_exact_output(
            &env,
            &config,
            &params.token_in,
            &params.token_out,
            params.fee,
            positive(params.amount)?,
            price_limit(params.sqrt_price_limit_x96),
        )?;
        log!(&env, "v3 exact output", simulation.amount_in, simulation.amount_out);

        Ok(SingleQuote {
            amount_in: to_i128(simulation.amount_in)?,
            amount_out: to_i128(simulation.amount_out)?,
            sqrt_price_x96_after: simulation.sqrt_price_x96,
            initialized_ticks_crossed: simulation.initialized_ticks_crossed,
            gas_estimate: concentrated_hop_gas(&simulation),
        })
    }

    pub fn quote_exact_input_single_v2(
        env: Env,
        params: QuoteExactSingleV2Params,
    ) -> Result<SingleQuote, DexError> {
        let config = storage::get_config(&env)?;
        let amount_out = constant_product::quote_exact_input(
            &env,
            &config,
            &params.token_in,
            &params.token_out,
            positive(params.amount)?,
        )?;

        Ok(SingleQuote {
            amount_in: params.amount,
            amount_out: to_i128(amount_out)?,
            sqrt_price_x96_after: 0,
            initialized_ticks_crossed: 0,
            gas_estimate: CONSTANT_PRODUCT_HOP_GAS,
        })
    }

    pub fn quote_exact_output_single_v2(
        env: Env,
        params: QuoteExactSingleV2Params,
    ) -> Result<SingleQuote, DexError> {
        let config = storage::get_config(&env)?;
        let amount_in = constant_product::quote_exact_output(
            &env,
            &config,
            &params.token_in,
            &params.token_out,
            positive(params.amount)?,
        )?;

        Ok(SingleQuote {
            amount_in: to_i128(amount_in)?,
            amount_out: params.amount,
            sqrt_price_x96_after: 0,
            initialized_ticks_crossed: 0,
            gas_estimate: CONSTANT_PRODUCT_HOP_GAS,
        })
    }
}

fn positive(amount: i128) -> Result<u128, DexError> {
    if amount <= 0 {
        return Err(DexError::InvalidAmount);
    }
    Ok(amount as u128)
}

fn to_i128(amount: u128) -> Result<i128, DexError> {
    i128::try_from(amount).map_err(|_| DexError::ArithmeticOverflow)
}

/// 0 means no limit
fn price_limit(sqrt_price_limit_x96: u128) -> Option<u128> {
    if sqrt_price_limit_x96 == 0 {
        None
    } else {
        Some(sqrt_price_limit_x96)
    }
}
