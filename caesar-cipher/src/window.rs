//! Wraparound arithmetic over a half-open code point window.

/// Lowest printable ASCII code point (space), inclusive.
pub const WINDOW_MIN: i32 = 32;

/// One past the highest printable ASCII code point (`~` is 126), exclusive.
pub const WINDOW_MAX: i32 = 127;

/// Number of symbols in the printable window.
pub const WINDOW_SIZE: i32 = WINDOW_MAX - WINDOW_MIN;

/// Mathematically correct modulus with a non-negative result.
///
/// Rust's `%` keeps the sign of the dividend, so `-3 % 95 == -3`. This
/// instead adds the modulus until the value is non-negative, giving a
/// result in `[0, modulus)` for any input.
///
/// # Arguments
///
/// * `value` - Integer to reduce, any sign.
/// * `modulus` - Modulus, must be positive.
pub fn wrap_mod(value: i32, modulus: i32) -> i32 {
    if value < 0 {
        wrap_mod(value + modulus, modulus)
    } else {
        value % modulus
    }
}

/// Maps an arbitrary integer into the half-open range `[min, max)`.
///
/// The value is first reduced modulo the range width with [`wrap_mod`],
/// then re-biased into the range: below `min` the width is added, at or
/// above `max` it is subtracted. The mapping preserves the congruence
/// class of `value` modulo the width, so for any fixed additive offset
/// it is a bijection on the range.
pub fn clamp_to_window(min: i32, max: i32, value: i32) -> i32 {
    let mut reduced = wrap_mod(value, max - min);

    if reduced < min {
        reduced += max - min;
    } else if reduced >= max {
        reduced -= max - min;
    }

    reduced
}

/// Returns true if `code` is a printable ASCII code point.
pub fn in_window(code: i32) -> bool {
    (WINDOW_MIN..WINDOW_MAX).contains(&code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_mod_positive() {
        assert_eq!(wrap_mod(0, 95), 0);
        assert_eq!(wrap_mod(94, 95), 94);
        assert_eq!(wrap_mod(95, 95), 0);
        assert_eq!(wrap_mod(190, 95), 0);
    }

    #[test]
    fn test_wrap_mod_negative() {
        assert_eq!(wrap_mod(-1, 95), 94);
        assert_eq!(wrap_mod(-95, 95), 0);
        assert_eq!(wrap_mod(-96, 95), 94);
        assert_eq!(wrap_mod(-1000, 95), (-1000i32).rem_euclid(95));
    }

    #[test]
    fn test_clamp_window_boundaries() {
        assert_eq!(clamp_to_window(32, 127, 31), 126);
        assert_eq!(clamp_to_window(32, 127, 127), 32);
        assert_eq!(clamp_to_window(0, 10, -1), 9);
        assert_eq!(clamp_to_window(0, 10, 10), 0);
    }

    #[test]
    fn test_clamp_identity_inside_window() {
        for code in WINDOW_MIN..WINDOW_MAX {
            assert_eq!(clamp_to_window(WINDOW_MIN, WINDOW_MAX, code), code);
        }
    }

    #[test]
    fn test_clamp_total_over_large_offsets() {
        for value in [-100_000, -12_345, -128, 0, 500, 100_000] {
            let clamped = clamp_to_window(WINDOW_MIN, WINDOW_MAX, value);
            assert!(in_window(clamped), "{} escaped the window as {}", value, clamped);
        }
    }

    #[test]
    fn test_clamp_preserves_congruence() {
        for value in -300..300 {
            let clamped = clamp_to_window(WINDOW_MIN, WINDOW_MAX, value);
            assert_eq!(
                wrap_mod(clamped - WINDOW_MIN, WINDOW_SIZE),
                wrap_mod(value - WINDOW_MIN, WINDOW_SIZE)
            );
        }
    }
}
