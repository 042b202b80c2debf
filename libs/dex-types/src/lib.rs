#![no_std]

mod error;
mod pool;
mod quote;
mod route;
mod tick;

pub use error::*;
pub use pool::*;
pub use quote::*;
pub use route::*;
pub use tick::*;

/// Q96 constant (2^96) for fixed-point math
pub const Q96: u128 = 1 << 96;

/// Minimum tick index
/// Limited by u128 representation (originally -887272 for uint160)
pub const MIN_TICK: i32 = -443636;

/// Maximum tick index
/// Limited by u128 representation (originally 887272 for uint160)
pub const MAX_TICK: i32 = 443636;

/// Minimum sqrt price, equal to `get_sqrt_ratio_at_tick(MIN_TICK)`
pub const MIN_SQRT_RATIO: u128 = 18447090764788882728;

/// Maximum sqrt price, equal to `get_sqrt_ratio_at_tick(MAX_TICK)`
pub const MAX_SQRT_RATIO: u128 = 340275971719517849884101479065584693834;

/// Fee amount in hundredths of a basis point (1e-6)
/// 500 = 0.05%, 3000 = 0.3%, 10000 = 1%
pub type Fee = u32;

/// Denominator of concentrated-liquidity fee tiers.
pub const FEE_PIPS_DENOMINATOR: u32 = 1_000_000;

/// Largest fee tier a concentrated-liquidity pool can carry.
pub const V3_MAX_FEE: Fee = 999_999;

/// Fee-field value marking a constant-product hop inside a route (bit 23).
pub const V2_FEE_SENTINEL: Fee = 1 << 23;

/// Constant-product fee: input is scaled by 997/1000.
pub const V2_FEE_NUMERATOR: u128 = 997;
pub const V2_FEE_DENOMINATOR: u128 = 1000;

/// Extra input unit added to constant-product exact-output quotes so the
/// quoted input always clears the pair's invariant check.
pub const EXACT_OUTPUT_INPUT_BIAS: u128 = 1;

/// Upper bound on swap-loop iterations for one hop against a pool with the
/// given tick spacing: one step per usable tick plus the two range edges.
pub fn max_swap_steps(tick_spacing: i32) -> u32 {
    let min_tick = MIN_TICK / tick_spacing;
    let max_tick = MAX_TICK / tick_spacing;
    (max_tick - min_tick) as u32 + 2
}
