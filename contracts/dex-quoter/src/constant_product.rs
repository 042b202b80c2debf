//! Constant-product hop simulator: one reserve read, then the pair formula.

use dex_math::{get_amount_in, get_amount_out};
use dex_types::{DexError, QuoterConfig};
use soroban_sdk::{Address, Env};

use crate::pools::{constant_product_pair, oriented_reserves};

/// Output for `amount_in` through the pair
pub fn quote_exact_input(
    env: &Env,
    config: &QuoterConfig,
    token_in: &Address,
    token_out: &Address,
    amount_in: u128,
) -> Result<u128, DexError> {
    let pair = constant_product_pair(env, config, token_in, token_out)?;
    let (reserve_in, reserve_out) = oriented_reserves(env, &pair, token_in, token_out)?;
    get_amount_out(amount_in, reserve_in, reserve_out)
}

/// Input required for `amount_out` from the pair
pub fn quote_exact_output(
    env: &Env,
    config: &QuoterConfig,
    token_in: &Address,
    token_out: &Address,
    amount_out: u128,
) -> Result<u128, DexError> {
    let pair = constant_product_pair(env, config, token_in, token_out)?;
    let (reserve_in, reserve_out) = oriented_reserves(env, &pair, token_in, token_out)?;
    get_amount_in(amount_out, reserve_in, reserve_out)
}
