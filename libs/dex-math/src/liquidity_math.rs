use dex_types::DexError;

/// Apply a signed liquidity delta, as when the price crosses an initialized tick
pub fn add_delta(liquidity: u128, delta: i128) -> Result<u128, DexError> {
    if delta < 0 {
        liquidity
            .checked_sub(delta.unsigned_abs())
            .ok_or(DexError::InsufficientLiquidity)
    } else {
        liquidity
            .checked_add(delta as u128)
            .ok_or(DexError::ArithmeticOverflow)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_delta() {
        assert_eq!(add_delta(1, 0), Ok(1));
        assert_eq!(add_delta(1, -1), Ok(0));
        assert_eq!(add_delta(1, 1), Ok(2));
        assert_eq!(add_delta(1_050_102, -33_385), Ok(1_016_717));
    }

    #[test]
    fn test_add_delta_underflow() {
        assert_eq!(add_delta(0, -1), Err(DexError::InsufficientLiquidity));
        assert_eq!(add_delta(3, -4), Err(DexError::InsufficientLiquidity));
    }

    #[test]
    fn test_add_delta_overflow() {
        assert_eq!(add_delta(u128::MAX, 1), Err(DexError::ArithmeticOverflow));
        assert_eq!(add_delta(0, i128::MIN), Err(DexError::InsufficientLiquidity));
    }
}
