//! Shift recovery by exhaustive search over frequency mismatch.

use crate::frequency::FreqProfile;
use crate::window::{clamp_to_window, WINDOW_MAX, WINDOW_MIN};

/// Number of candidate shifts the search covers.
///
/// Wider than the 95-symbol alphabet on purpose: the bound is kept from the
/// original cracker, where offsets 95..126 duplicate smaller ones. They can
/// never score strictly better than their congruent counterpart found
/// earlier, so the recovered shift is still canonical in practice.
pub const SHIFT_SEARCH_SPACE: u8 = 126;

/// Accumulated mismatch between a message profile shifted back by `offset`
/// and a stored reference profile.
///
/// Each sampled code point is mapped to its back-shifted pre-image; only
/// values below the window are remapped, matching the original scorer.
/// Code points missing from the reference contribute nothing.
pub fn score(sampled: &FreqProfile, stored: &FreqProfile, offset: u8) -> f64 {
    let mut error = 0.0;

    for (&key, &observed) in sampled {
        let mut preimage = key as i32 - offset as i32;
        if preimage < WINDOW_MIN {
            preimage = clamp_to_window(WINDOW_MIN, WINDOW_MAX, preimage);
        }

        let Ok(preimage) = u8::try_from(preimage) else {
            continue;
        };
        if let Some(&expected) = stored.get(&preimage) {
            error += (observed - expected).abs();
        }
    }

    error
}

/// Picks the shift whose back-mapping best matches the reference profile.
///
/// All candidates in `[0, SHIFT_SEARCH_SPACE)` are scored in ascending
/// order; the strictly smallest score wins, so ties fall to the lowest
/// offset.
pub fn best_shift(sampled: &FreqProfile, stored: &FreqProfile) -> u8 {
    let mut best_offset = 0;
    let mut best_error = f64::INFINITY;

    for offset in 0..SHIFT_SEARCH_SPACE {
        let error = score(sampled, stored, offset);
        if error < best_error {
            best_offset = offset;
            best_error = error;
        }
    }

    best_offset
}
