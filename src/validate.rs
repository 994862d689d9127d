//  ____                  _____
// |  _ \ __ _ ___ ___   |  ___|__  _ __ __ _  ___
// | |_) / _` / __/ __|  | |_ / _ \| '__/ _` |/ _ \
// |  __/ (_| \__ \__ \  |  _| (_) | | | (_| |  __/
// |_|   \__,_|___/___/  |_|  \___/|_|   \__, |\___|
//                                       |___/
//
// Author : Sidney Zhang <zly@lyzhang.me>
// Date : 2025-08-18
// Version : 0.1.0
// License : Mulan PSL v2
//
// Password length validation

use thiserror::Error;

/// Shortest accepted password length.
pub const MIN_LENGTH: usize = 4;

/// Longest accepted password length.
pub const MAX_LENGTH: usize = 16;

/// Why a raw length value was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LengthError {
    #[error("a password length is required")]
    Required,
    #[error("password length must be at least 4")]
    BelowMinimum,
    #[error("password length must be at most 16")]
    AboveMaximum,
}

/// Validate raw text as a password length in `[MIN_LENGTH, MAX_LENGTH]`.
///
/// Empty or non-numeric text reports [`LengthError::Required`], the same as
/// a field that has not been filled in yet. Pure function: callers decide
/// when to run it (every keystroke, on submit, once per CLI invocation).
pub fn validate_length(raw: &str) -> Result<usize, LengthError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(LengthError::Required);
    }
    let value: i64 = raw.parse().map_err(|_| LengthError::Required)?;
    if value < MIN_LENGTH as i64 {
        return Err(LengthError::BelowMinimum);
    }
    if value > MAX_LENGTH as i64 {
        return Err(LengthError::AboveMaximum);
    }
    Ok(value as usize)
}
