//! Character frequency profiles over the printable ASCII window.
//!
//! Two kinds of profile share one representation: a *reference* profile
//! describes how often each code point is expected in natural text, an
//! *observed* profile is measured from one concrete message. Keys are code
//! points, values are percentages rounded to two decimals.

use std::collections::BTreeMap;

use rand::Rng;

use crate::window::{WINDOW_MAX, WINDOW_MIN};

/// Sparse mapping from code point to relative frequency in percent.
///
/// `BTreeMap` keeps iteration and debug output in code point order.
pub type FreqProfile = BTreeMap<u8, f64>;

/// Round to the two-decimal precision the profiles carry.
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Expected character frequencies for a language, injected as configuration.
///
/// The table may be partially populated; [`ReferenceTable::baseline_with`]
/// fills the gaps with synthetic values so the cracker always scores
/// against a full-window profile. A fully populated table (such as
/// [`ReferenceTable::english`]) never triggers the synthetic path and keeps
/// cracking deterministic.
#[derive(Debug, Clone, Default)]
pub struct ReferenceTable {
    entries: FreqProfile,
}

/// Relative frequencies of `a`..`z` in English text, in percent of letters.
const ENGLISH_LETTER_PERCENTS: [f64; 26] = [
    8.17, 1.49, 2.78, 4.25, 12.70, 2.23, 2.02, 6.09, 6.97, 0.15, 0.77, 4.03,
    2.41, 6.75, 7.51, 1.93, 0.10, 5.99, 6.33, 9.06, 2.76, 0.98, 2.36, 0.15,
    1.97, 0.07,
];

impl ReferenceTable {
    /// Creates an empty table. Every window entry will be synthesized.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a table from explicit `(code point, percent)` pairs.
    ///
    /// Pairs outside the printable window are ignored.
    pub fn from_entries(pairs: impl IntoIterator<Item = (u8, f64)>) -> Self {
        let entries = pairs
            .into_iter()
            .filter(|&(code, _)| crate::window::in_window(code as i32))
            .collect();
        Self { entries }
    }

    /// Builtin English profile covering all 95 printable code points.
    ///
    /// Space dominates (word separator), lowercase letters carry the usual
    /// English distribution, uppercase letters a scaled-down copy of it,
    /// digits and punctuation small flat weights. The absolute scale does
    /// not matter for cracking, only the relative shape does.
    pub fn english() -> Self {
        let mut entries = FreqProfile::new();

        for code in WINDOW_MIN..WINDOW_MAX {
            let percent = match code as u8 {
                b' ' => 18.0,
                c @ b'a'..=b'z' => round2(ENGLISH_LETTER_PERCENTS[(c - b'a') as usize] * 0.65),
                c @ b'A'..=b'Z' => round2(ENGLISH_LETTER_PERCENTS[(c - b'A') as usize] * 0.04),
                b'0'..=b'9' => 0.12,
                b'.' | b',' => 0.55,
                b'\'' | b'-' | b'?' | b'!' | b'"' | b';' | b':' => 0.15,
                _ => 0.03,
            };
            entries.insert(code as u8, percent);
        }

        Self { entries }
    }

    /// Expected percentage for a code point, if the table has one.
    pub fn get(&self, code: u8) -> Option<f64> {
        self.entries.get(&code).copied()
    }

    /// Number of populated entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no entries are populated.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Reference-shaped profile covering the whole printable window.
    ///
    /// Populated entries are copied as-is; missing ones are synthesized as a
    /// uniform random float in `[0, 1]` rounded to two decimals, so a partial
    /// table still yields a usable baseline. With such a table the result
    /// (and therefore cracking) varies per call.
    pub fn baseline_with<R: Rng>(&self, rng: &mut R) -> FreqProfile {
        let mut profile = FreqProfile::new();

        for code in WINDOW_MIN..WINDOW_MAX {
            let code = code as u8;
            let percent = match self.get(code) {
                Some(stored) => stored,
                None => round2(rng.gen_range(0.0..1.0)),
            };
            profile.insert(code, percent);
        }

        profile
    }

    /// [`Self::baseline_with`] over the thread-local RNG.
    pub fn baseline(&self) -> FreqProfile {
        self.baseline_with(&mut rand::thread_rng())
    }
}

/// Measures the frequency profile of a concrete message.
///
/// Only code points that actually occur get a key; each value is the
/// occurrence count as a percentage of message length, rounded to two
/// decimals. The empty message produces an empty profile.
pub fn profile_message(message: &str) -> FreqProfile {
    let mut counts: BTreeMap<u8, u32> = BTreeMap::new();

    for byte in message.bytes() {
        *counts.entry(byte).or_insert(0) += 1;
    }

    let total = message.len() as f64;
    counts
        .into_iter()
        .map(|(code, count)| (code, round2(count as f64 * 100.0 / total)))
        .collect()
}
