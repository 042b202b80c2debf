//! Search over a pool's packed tick bitmap.
//!
//! Each word holds 128 compressed ticks; compressed tick = floor(tick / spacing).
//! The words themselves live in the pool, so the search takes a reader.

use dex_types::DexError;

/// Compress a tick to its bitmap index, rounding toward negative infinity
pub fn compress(tick: i32, tick_spacing: i32) -> i32 {
    tick.div_euclid(tick_spacing)
}

/// (word position, bit position) of a compressed tick
pub fn position(compressed: i32) -> (i32, u8) {
    (compressed >> 7, compressed.rem_euclid(128) as u8)
}

/// Word position and bit mask of an initialized tick, for pools that keep the bitmap
pub fn flip_mask(tick: i32, tick_spacing: i32) -> Result<(i32, u128), DexError> {
    if tick_spacing <= 0 || tick % tick_spacing != 0 {
        return Err(DexError::TickOutOfBounds);
    }
    let (word_pos, bit_pos) = position(compress(tick, tick_spacing));
    Ok((word_pos, 1u128 << bit_pos))
}

/// Find the next initialized tick within one word
/// Returns (tick, initialized). The tick may lie beyond the valid range when
/// the word has nothing set; callers clamp it.
pub fn next_initialized_tick_within_one_word<F>(
    mut read_word: F,
    tick: i32,
    tick_spacing: i32,
    lte: bool, // less than or equal (searching left)
) -> (i32, bool)
where
    F: FnMut(i32) -> u128,
{
    let compressed = compress(tick, tick_spacing);

    if lte {
        let (word_pos, bit_pos) = position(compressed);

        // Bits at or below current position
        let mask = (1u128 << bit_pos) - 1 + (1u128 << bit_pos);
        let masked = read_word(word_pos) & mask;

        let initialized = masked != 0;
        let next = if initialized {
            let msb = 127 - masked.leading_zeros() as i32;
            ((word_pos * 128) + msb) * tick_spacing
        } else {
            (word_pos * 128) * tick_spacing
        };

        (next, initialized)
    } else {
        // Start from the next tick; the current one is already active
        let (word_pos, bit_pos) = position(compressed + 1);

        // Bits at or above current position
        let mask = !((1u128 << bit_pos) - 1);
        let masked = read_word(word_pos) & mask;

        let initialized = masked != 0;
        let next = if initialized {
            let lsb = masked.trailing_zeros() as i32;
            ((word_pos * 128) + lsb) * tick_spacing
        } else {
            ((word_pos * 128) + 127) * tick_spacing
        };

        (next, initialized)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SPACING: i32 = 60;

    /// Tiny in-memory bitmap keyed by word position
    struct Bitmap {
        words: [(i32, u128); 4],
    }

    impl Bitmap {
        fn with_ticks(ticks: &[i32]) -> Self {
            let mut bitmap = Bitmap {
                words: [(-1, 0), (0, 0), (1, 0), (-58, 0)],
            };
            for tick in ticks {
                let (word_pos, mask) = flip_mask(*tick, SPACING).unwrap();
                let slot = bitmap
                    .words
                    .iter_mut()
                    .find(|(pos, _)| *pos == word_pos)
                    .unwrap();
                slot.1 ^= mask;
            }
            bitmap
        }

        fn word(&self, word_pos: i32) -> u128 {
            self.words
                .iter()
                .find(|(pos, _)| *pos == word_pos)
                .map(|(_, word)| *word)
                .unwrap_or(0)
        }
    }

    #[test]
    fn test_compress_floors_negative_ticks() {
        assert_eq!(compress(-1, SPACING), -1);
        assert_eq!(compress(-60, SPACING), -1);
        assert_eq!(compress(-61, SPACING), -2);
        assert_eq!(compress(59, SPACING), 0);
    }

    #[test]
    fn test_position() {
        assert_eq!(position(0), (0, 0));
        assert_eq!(position(127), (0, 127));
        assert_eq!(position(128), (1, 0));
        assert_eq!(position(-1), (-1, 127));
        assert_eq!(position(-128), (-1, 0));
        assert_eq!(position(-129), (-2, 127));
    }

    #[test]
    fn test_flip_mask_rejects_off_spacing() {
        assert_eq!(flip_mask(61, SPACING), Err(DexError::TickOutOfBounds));
        assert_eq!(flip_mask(60, 0), Err(DexError::TickOutOfBounds));
        assert_eq!(flip_mask(-60, SPACING), Ok((-1, 1u128 << 127)));
    }

    #[test]
    fn test_search_left_finds_current_tick() {
        let bitmap = Bitmap::with_ticks(&[-120, -60, 60]);
        let read = |pos| bitmap.word(pos);
        assert_eq!(next_initialized_tick_within_one_word(read, 0, SPACING, true), (0, false));
        assert_eq!(next_initialized_tick_within_one_word(read, -1, SPACING, true), (-60, true));
        assert_eq!(next_initialized_tick_within_one_word(read, -60, SPACING, true), (-60, true));
        assert_eq!(next_initialized_tick_within_one_word(read, -61, SPACING, true), (-120, true));
    }

    #[test]
    fn test_search_left_uninitialized_word_returns_word_start() {
        let bitmap = Bitmap::with_ticks(&[]);
        let read = |pos| bitmap.word(pos);
        assert_eq!(
            next_initialized_tick_within_one_word(read, -121, SPACING, true),
            (-128 * SPACING, false)
        );
    }

    #[test]
    fn test_search_right_skips_current_tick() {
        let bitmap = Bitmap::with_ticks(&[0, 60, 120]);
        let read = |pos| bitmap.word(pos);
        assert_eq!(next_initialized_tick_within_one_word(read, 0, SPACING, false), (60, true));
        assert_eq!(next_initialized_tick_within_one_word(read, 59, SPACING, false), (60, true));
        assert_eq!(next_initialized_tick_within_one_word(read, 60, SPACING, false), (120, true));
        assert_eq!(next_initialized_tick_within_one_word(read, -1, SPACING, false), (0, true));
    }

    #[test]
    fn test_search_right_uninitialized_word_returns_word_end() {
        let bitmap = Bitmap::with_ticks(&[]);
        let read = |pos| bitmap.word(pos);
        assert_eq!(
            next_initialized_tick_within_one_word(read, 0, SPACING, false),
            (127 * SPACING, false)
        );
    }

    #[test]
    fn test_full_range_ticks_land_in_edge_words() {
        // +-443580 at spacing 60 compress to +-7393
        assert_eq!(flip_mask(443580, SPACING), Ok((57, 1u128 << 97)));
        assert_eq!(flip_mask(-443580, SPACING), Ok((-58, 1u128 << 31)));
        let bitmap = Bitmap::with_ticks(&[-443580]);
        let read = |pos| bitmap.word(pos);
        assert_eq!(
            next_initialized_tick_within_one_word(read, -443000, SPACING, true),
            (-443580, true)
        );
    }
}
