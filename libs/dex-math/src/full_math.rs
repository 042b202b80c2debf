use dex_types::DexError;
use primitive_types::{U256, U512};

/// Multiply and divide with 512-bit intermediate precision (rounds down)
/// Returns floor(a * b / denominator)
pub fn mul_div(a: U256, b: U256, denominator: U256) -> Result<U256, DexError> {
    if denominator.is_zero() {
        return Err(DexError::DivisionByZero);
    }

    let product = U512::from(a) * U512::from(b);
    let quotient = product / U512::from(denominator);

    U256::try_from(quotient).map_err(|_| DexError::ArithmeticOverflow)
}

/// Multiply and divide with 512-bit intermediate precision (rounds up)
/// Returns ceil(a * b / denominator)
pub fn mul_div_rounding_up(a: U256, b: U256, denominator: U256) -> Result<U256, DexError> {
    if denominator.is_zero() {
        return Err(DexError::DivisionByZero);
    }

    let product = U512::from(a) * U512::from(b);
    let denominator = U512::from(denominator);
    let mut quotient = product / denominator;
    if !(product % denominator).is_zero() {
        quotient = quotient + U512::one();
    }

    U256::try_from(quotient).map_err(|_| DexError::ArithmeticOverflow)
}

/// Unsigned division with rounding up
pub fn div_rounding_up(a: U256, b: U256) -> Result<U256, DexError> {
    if b.is_zero() {
        return Err(DexError::DivisionByZero);
    }
    let quotient = a / b;
    if (a % b).is_zero() {
        Ok(quotient)
    } else {
        Ok(quotient + U256::one())
    }
}

/// Narrow a 256-bit intermediate to u128
pub fn to_u128(value: U256) -> Result<u128, DexError> {
    u128::try_from(value).map_err(|_| DexError::ArithmeticOverflow)
}
