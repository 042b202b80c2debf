use soroban_sdk::{contracttype, Address};

/// Snapshot of a concentrated-liquidity pool's price slot
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PoolState {
    /// Current sqrt(price) as Q64.96
    pub sqrt_price_x96: u128,
    /// Current tick index
    pub tick: i32,
    /// Total liquidity currently in range
    pub liquidity: u128,
}

impl PoolState {
    pub fn new(sqrt_price_x96: u128, tick: i32, liquidity: u128) -> Self {
        Self {
            sqrt_price_x96,
            tick,
            liquidity,
        }
    }
}

/// Quoter configuration - immutable after initialization
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct QuoterConfig {
    /// Concentrated-liquidity factory (`get_pool(a, b, fee)`)
    pub v3_factory: Address,
    /// Constant-product factory (`get_pair(a, b)`)
    pub v2_factory: Address,
}

// ============================================================================
// SWAP SIMULATION TYPES
// Transient, local to one hop's simulation loop
// ============================================================================

/// Parameters for one simulated concentrated-liquidity swap
#[derive(Clone, Debug)]
pub struct SwapParams {
    /// True if swapping token0 for token1
    pub zero_for_one: bool,
    /// Positive for exact input, negative for exact output
    pub amount_specified: i128,
    /// Price limit for the swap
    pub sqrt_price_limit_x96: u128,
}

/// Accumulators mutated by the swap loop
#[derive(Clone, Debug)]
pub struct SwapState {
    /// Amount remaining to be swapped (negative while exact output is owed)
    pub amount_remaining: i128,
    /// Cumulative amount of the other token
    pub amount_calculated: i128,
    /// Current sqrt price
    pub sqrt_price_x96: u128,
    /// Current tick
    pub tick: i32,
    /// Current liquidity
    pub liquidity: u128,
}

/// Result of a single swap step
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SwapStepResult {
    /// New sqrt price after this step
    pub sqrt_price_next_x96: u128,
    /// Amount of input token consumed
    pub amount_in: u128,
    /// Amount of output token produced
    pub amount_out: u128,
    /// Fee amount taken
    pub fee_amount: u128,
}

/// Outcome of simulating one concentrated-liquidity hop
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SwapSimulation {
    /// Input actually consumed, fee included
    pub amount_in: u128,
    /// Output actually produced
    pub amount_out: u128,
    /// True when the specified amount was not fully filled
    pub partial: bool,
    /// Final sqrt price after swap
    pub sqrt_price_x96: u128,
    /// Final tick after swap
    pub tick: i32,
    /// Initialized ticks strictly crossed
    pub initialized_ticks_crossed: u32,
    /// Loop iterations performed
    pub steps: u32,
    /// Initialized tick records loaded while crossing
    pub tick_loads: u32,
}
