use soroban_sdk::contracterror;

/// Failure reasons surfaced by every quoting entry point.
///
/// Codes are stable: off-chain routers match on them to tell "no liquidity"
/// apart from "bad input" and "hit a price bound".
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum DexError {
    /// Route byte length is not `token + k * (fee + token)` with k >= 1,
    /// or a token field is not a valid address.
    MalformedRoute = 1,
    /// Explicit protocol flag count differs from the route's hop count
    SelectorCountMismatch = 2,
    /// No pool or pair is registered for the hop's key
    PoolNotFound = 3,
    /// Reserves or in-range liquidity cannot satisfy the request
    InsufficientLiquidity = 4,
    /// A price bound stopped the simulation before the amount was filled
    PriceLimitReached = 5,
    /// Amount or price exceeds the representable range
    ArithmeticOverflow = 6,
    /// Amount is zero or negative
    InvalidAmount = 7,
    /// Price limit lies outside the valid sqrt-price range
    InvalidPriceLimit = 8,
    /// Explicit protocol flag is neither 0x00 nor 0x01
    InvalidProtocolFlag = 9,
    /// Tick index outside [MIN_TICK, MAX_TICK] or non-positive spacing
    TickOutOfBounds = 10,
    /// Sqrt price outside [MIN_SQRT_RATIO, MAX_SQRT_RATIO)
    SqrtPriceOutOfBounds = 11,
    DivisionByZero = 12,
    /// Swap loop exceeded the tick-spacing bound
    StepLimitExceeded = 13,
    AlreadyInitialized = 14,
    NotInitialized = 15,
}
