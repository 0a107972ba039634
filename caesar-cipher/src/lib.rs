//! # Caesar Cipher Library
//!
//! Shift ("Caesar") cipher over the full printable ASCII window `[32, 127)`
//! and a ciphertext-only attack that recovers the key by frequency analysis.
//!
//! ## Usage
//!
//! ```rust
//! use caesar_cipher::{crack, decrypt, encrypt, ReferenceTable};
//!
//! let ciphertext = encrypt("attack at dawn", 5)?;
//! assert_eq!(decrypt(&ciphertext, 5)?, "attack at dawn");
//!
//! // No key needed: recover it from letter statistics alone.
//! let recovered = crack(&ciphertext, &ReferenceTable::english())?;
//! assert_eq!(recovered.shift, 5);
//! assert_eq!(recovered.plaintext, "attack at dawn");
//! # Ok::<(), caesar_cipher::CipherError>(())
//! ```
//!
//! ## Design
//!
//! - The cipher is a congruence-preserving bijection on the window, so any
//!   integer shift round-trips.
//! - The reference frequency table is passed in as configuration; with the
//!   builtin [`ReferenceTable::english`] table cracking is deterministic.
//! - This is a classical cipher with a 95-element key space. It offers no
//!   security and is **not** meant for protecting data.

// Public modules
pub mod cipher;
pub mod cracker;
pub mod error;
pub mod frequency;
pub mod window;

// Re-exports for easy access
pub use cipher::{crack, decrypt, encrypt, CrackResult};
pub use cracker::{best_shift, score, SHIFT_SEARCH_SPACE};
pub use error::{CipherError, Result};
pub use frequency::{profile_message, FreqProfile, ReferenceTable};
pub use window::{clamp_to_window, wrap_mod, WINDOW_MAX, WINDOW_MIN, WINDOW_SIZE};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_pipeline_across_keys() {
        let plaintext = "meet me at the usual place at nine, bring the papers";

        for shift in [1, 13, 40, 94] {
            let ciphertext = encrypt(plaintext, shift).unwrap();
            assert_ne!(ciphertext, plaintext);

            let result = crack(&ciphertext, &ReferenceTable::english()).unwrap();
            assert_eq!(result.shift as i32, shift, "failed to recover shift {}", shift);
            assert_eq!(result.plaintext, plaintext);
        }
    }

    #[test]
    fn test_negative_key_round_trips_through_crack() {
        let plaintext = "the quick brown fox jumps over the lazy dog and keeps running";
        let ciphertext = encrypt(plaintext, -13).unwrap();

        let result = crack(&ciphertext, &ReferenceTable::english()).unwrap();
        // -13 is congruent to 82 mod 95.
        assert_eq!(result.shift, 82);
        assert_eq!(result.plaintext, plaintext);
    }

    #[test]
    fn test_version_metadata() {
        assert!(!VERSION.is_empty());
    }
}
