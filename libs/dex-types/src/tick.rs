use soroban_sdk::contracttype;

/// Tick data as exposed by a concentrated-liquidity pool's tick reader
#[contracttype]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct TickInfo {
    /// Total liquidity referencing this tick
    pub liquidity_gross: u128,
    /// Net liquidity change when tick is crossed (+ when moving right)
    pub liquidity_net: i128,
    /// True if tick has been initialized
    pub initialized: bool,
}

impl TickInfo {
    pub fn new() -> Self {
        Self::default()
    }
}
