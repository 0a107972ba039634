//! Error types for cipher operations

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CipherError {
    #[error("character {ch:?} at position {index} is outside printable ASCII (32..127)")]
    OutOfWindowChar { ch: char, index: usize },
}

pub type Result<T> = std::result::Result<T, CipherError>;
