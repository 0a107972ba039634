//! The shift transform and the top-level cracking routine.

use crate::cracker::best_shift;
use crate::error::{CipherError, Result};
use crate::frequency::{profile_message, ReferenceTable};
use crate::window::{clamp_to_window, in_window, wrap_mod, WINDOW_MAX, WINDOW_MIN, WINDOW_SIZE};

/// Outcome of cracking a ciphertext: the recovered key and the plaintext
/// the key decrypts to.
#[derive(Debug, Clone, PartialEq)]
pub struct CrackResult {
    /// Recovered shift, in `[0, 126)`.
    pub shift: u8,
    /// Ciphertext decrypted with the recovered shift.
    pub plaintext: String,
}

/// Shifts every code point of `message` by `shift`, wrapping inside the
/// printable window.
///
/// The shift may be any `i32`; congruent shifts produce identical output.
/// Characters outside printable ASCII are rejected.
pub fn encrypt(message: &str, shift: i32) -> Result<String> {
    transform(message, shift as i64)
}

/// Inverse of [`encrypt`]: shifts every code point back by `shift`.
///
/// `decrypt(encrypt(m, s), s)` returns `m` for every printable message
/// and every `i32` shift.
pub fn decrypt(message: &str, shift: i32) -> Result<String> {
    transform(message, -(shift as i64))
}

fn transform(message: &str, shift: i64) -> Result<String> {
    // Reduce once to the canonical shift so the per-character addition
    // cannot overflow for extreme inputs.
    let shift = wrap_mod((shift % WINDOW_SIZE as i64) as i32, WINDOW_SIZE);

    message
        .chars()
        .enumerate()
        .map(|(index, ch)| {
            let code = ch as i32;
            if !in_window(code) {
                return Err(CipherError::OutOfWindowChar { ch, index });
            }
            let shifted = clamp_to_window(WINDOW_MIN, WINDOW_MAX, code + shift);
            // Window codes are valid ASCII, the cast cannot produce a
            // surrogate or out-of-range scalar.
            Ok(shifted as u8 as char)
        })
        .collect()
}

/// Recovers the shift of `ciphertext` by frequency analysis and decrypts it.
///
/// The baseline is built from the injected `reference` table; with a fully
/// populated table such as [`ReferenceTable::english`] the whole routine is
/// deterministic. The recovered key is returned in the result rather than
/// logged.
pub fn crack(ciphertext: &str, reference: &ReferenceTable) -> Result<CrackResult> {
    let stored = reference.baseline();
    let sampled = profile_message(ciphertext);

    let shift = best_shift(&sampled, &stored);
    let plaintext = decrypt(ciphertext, shift as i32)?;

    Ok(CrackResult { shift, plaintext })
}
