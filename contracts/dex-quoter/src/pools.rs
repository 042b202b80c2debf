//! Read-only views of the pools a route passes through.

use dex_types::{DexError, PoolState, QuoterConfig, TickInfo};
use soroban_sdk::{contractclient, Address, Env};

/// Concentrated-liquidity factory
#[contractclient(name = "ConcentratedFactoryClient")]
pub trait ConcentratedFactoryInterface {
    /// Pool for an unordered token pair at a fee tier
    fn get_pool(env: Env, token_a: Address, token_b: Address, fee: u32) -> Option<Address>;
}

/// Constant-product factory
#[contractclient(name = "ConstantProductFactoryClient")]
pub trait ConstantProductFactoryInterface {
    /// Pair for an unordered token pair
    fn get_pair(env: Env, token_a: Address, token_b: Address) -> Option<Address>;
}

/// Constant-product pair
#[contractclient(name = "ConstantProductPairClient")]
pub trait ConstantProductPairInterface {
    /// Reserves ordered as (token0, token1), token0 < token1
    fn get_reserves(env: Env) -> (i128, i128);
}

/// Concentrated-liquidity pool
#[contractclient(name = "ConcentratedPoolClient")]
pub trait ConcentratedPoolInterface {
    fn get_state(env: Env) -> PoolState;
    fn fee(env: Env) -> u32;
    fn tick_spacing(env: Env) -> i32;
    /// Packed bitmap word: bit i set when compressed tick `word_pos * 128 + i` is initialized
    fn tick_bitmap(env: Env, word_pos: i32) -> u128;
    fn get_tick(env: Env, tick: i32) -> TickInfo;
}

/// Order two distinct tokens
pub fn sort_tokens(token_a: &Address, token_b: &Address) -> Result<(Address, Address), DexError> {
    if token_a == token_b {
        return Err(DexError::MalformedRoute);
    }
    if token_a < token_b {
        Ok((token_a.clone(), token_b.clone()))
    } else {
        Ok((token_b.clone(), token_a.clone()))
    }
}

pub fn concentrated_pool(
    env: &Env,
    config: &QuoterConfig,
    token_in: &Address,
    token_out: &Address,
    fee: u32,
) -> Result<Address, DexError> {
    let (token0, token1) = sort_tokens(token_in, token_out)?;
    ConcentratedFactoryClient::new(env, &config.v3_factory)
        .get_pool(&token0, &token1, &fee)
        .ok_or(DexError::PoolNotFound)
}

pub fn constant_product_pair(
    env: &Env,
    config: &QuoterConfig,
    token_in: &Address,
    token_out: &Address,
) -> Result<Address, DexError> {
    let (token0, token1) = sort_tokens(token_in, token_out)?;
    ConstantProductFactoryClient::new(env, &config.v2_factory)
        .get_pair(&token0, &token1)
        .ok_or(DexError::PoolNotFound)
}

/// Reserves of a pair oriented as (reserve_in, reserve_out)
pub fn oriented_reserves(
    env: &Env,
    pair: &Address,
    token_in: &Address,
    token_out: &Address,
) -> Result<(u128, u128), DexError> {
    let (reserve0, reserve1) = ConstantProductPairClient::new(env, pair).get_reserves();
    let reserve0 = u128::try_from(reserve0).map_err(|_| DexError::ArithmeticOverflow)?;
    let reserve1 = u128::try_from(reserve1).map_err(|_| DexError::ArithmeticOverflow)?;
    if token_in < token_out {
        Ok((reserve0, reserve1))
    } else {
        Ok((reserve1, reserve0))
    }
}

/// What the swap loop needs from a concentrated-liquidity pool
pub trait ConcentratedPoolReader {
    fn slot(&mut self) -> PoolState;
    fn fee(&mut self) -> u32;
    fn tick_spacing(&mut self) -> i32;
    fn bitmap_word(&mut self, word_pos: i32) -> u128;
    fn tick(&mut self, tick: i32) -> TickInfo;
}

/// Pool reader backed by cross-contract calls. Keeps the last bitmap word,
/// since consecutive steps usually stay inside one word.
pub struct PoolView<'a> {
    client: ConcentratedPoolClient<'a>,
    cached_word: Option<(i32, u128)>,
}

impl<'a> PoolView<'a> {
    pub fn new(env: &'a Env, pool: &'a Address) -> Self {
        Self {
            client: ConcentratedPoolClient::new(env, pool),
            cached_word: None,
        }
    }
}

impl ConcentratedPoolReader for PoolView<'_> {
    fn slot(&mut self) -> PoolState {
        self.client.get_state()
    }

    fn fee(&mut self) -> u32 {
        self.client.fee()
    }

    fn tick_spacing(&mut self) -> i32 {
        self.client.tick_spacing()
    }

    fn bitmap_word(&mut self, word_pos: i32) -> u128 {
        match self.cached_word {
            Some((pos, word)) if pos == word_pos => word,
            _ => {
                let word = self.client.tick_bitmap(&word_pos);
                self.cached_word = Some((word_pos, word));
                word
            }
        }
    }

    fn tick(&mut self, tick: i32) -> TickInfo {
        self.client.get_tick(&tick)
    }
}
