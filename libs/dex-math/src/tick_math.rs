use dex_types::{DexError, MAX_SQRT_RATIO, MAX_TICK, MIN_SQRT_RATIO, MIN_TICK};
use primitive_types::U256;

/// sqrt(1.0001^-(2^i)) in Q128, for i = 1..=19. Bit 0 seeds the ratio.
const SQRT_RATIO_FACTORS: [u128; 19] = [
    0xfff97272373d413259a46990580e213a,
    0xfff2e50f5f656932ef12357cf3c7fdcc,
    0xffe5caca7e10e4e61c3624eaa0941cd0,
    0xffcb9843d60f6159c9db58835c926644,
    0xff973b41fa98c081472e6896dfb254c0,
    0xff2ea16466c96a3843ec78b326b52861,
    0xfe5dee046a99a2a811c461f1969c3053,
    0xfcbe86c7900a88aedcffc83b479aa3a4,
    0xf987a7253ac413176f2b074cf7815e54,
    0xf3392b0822b70005940c7a398e4b70f3,
    0xe7159475a2c29b7443b29c7fa6e889d9,
    0xd097f3bdfd2022b8845ad8f792aa5825,
    0xa9f746462d870fdf8a65dc1f90e061e5,
    0x70d869a156d2a1b890bb3df62baf32f7,
    0x31be135f97d08fd981231505542fcfa6,
    0x9aa508b5b7a84e1c677de54f3e99bc9,
    0x5d6af8dedb81196699c329225ee604,
    0x2216e584f5fa1ea926041bedfe98,
    0x48a170391f7dc42444e8fa2,
];

const SQRT_1_0001_INV: u128 = 0xfffcb933bd6fad37aa2d162d1a594001;

/// Calculate sqrt(1.0001^tick) * 2^96, rounded up
pub fn get_sqrt_ratio_at_tick(tick: i32) -> Result<u128, DexError> {
    if !(MIN_TICK..=MAX_TICK).contains(&tick) {
        return Err(DexError::TickOutOfBounds);
    }

    let abs_tick = tick.unsigned_abs();

    // Q128 ratio for the negative tick, built from the binary digits of |tick|
    let mut ratio = if abs_tick & 0x1 != 0 {
        U256::from(SQRT_1_0001_INV)
    } else {
        U256::one() << 128
    };
    for (i, factor) in SQRT_RATIO_FACTORS.iter().enumerate() {
        if abs_tick & (1 << (i + 1)) != 0 {
            ratio = (ratio * U256::from(*factor)) >> 128;
        }
    }

    if tick > 0 {
        ratio = U256::MAX / ratio;
    }

    // Q128 -> Q96, rounding up so the result never understates the price
    let remainder = ratio.low_u32();
    let mut sqrt_price = ratio >> 32;
    if remainder != 0 {
        sqrt_price = sqrt_price + U256::one();
    }

    u128::try_from(sqrt_price).map_err(|_| DexError::ArithmeticOverflow)
}

/// Greatest tick whose sqrt ratio is less than or equal to `sqrt_price_x96`
pub fn get_tick_at_sqrt_ratio(sqrt_price_x96: u128) -> Result<i32, DexError> {
    if !(MIN_SQRT_RATIO..MAX_SQRT_RATIO).contains(&sqrt_price_x96) {
        return Err(DexError::SqrtPriceOutOfBounds);
    }

    let mut low = MIN_TICK;
    let mut high = MAX_TICK;

    while low < high {
        let mid = (low + high + 1).div_euclid(2);
        if get_sqrt_ratio_at_tick(mid)? <= sqrt_price_x96 {
            low = mid;
        } else {
            high = mid - 1;
        }
    }

    Ok(low)
}
