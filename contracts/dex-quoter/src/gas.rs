//! Off-chain cost signal attached to quotes. Not used for correctness.

use dex_types::SwapSimulation;

/// Reserve read plus the constant-product formula
pub const CONSTANT_PRODUCT_HOP_GAS: u64 = 60_000;
/// Pool lookup and slot read for a concentrated-liquidity hop
pub const CONCENTRATED_HOP_BASE_GAS: u64 = 80_000;
/// One swap-loop iteration (bitmap word read plus swap step)
pub const SWAP_STEP_GAS: u64 = 12_000;
/// Loading an initialized tick's liquidity delta
pub const TICK_CROSS_GAS: u64 = 30_000;

pub fn concentrated_hop_gas(simulation: &SwapSimulation) -> u64 {
    CONCENTRATED_HOP_BASE_GAS
        + simulation.steps as u64 * SWAP_STEP_GAS
        + simulation.tick_loads as u64 * TICK_CROSS_GAS
}
