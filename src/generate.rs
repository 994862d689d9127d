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
// Password generator

use log::trace;
use rand::Rng;
use rand::rngs::OsRng;
use rand::seq::SliceRandom;
use thiserror::Error;

use crate::charset::CharacterClasses;

/// Why generation could not produce a password.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GenerateError {
    #[error("at least one character class must be selected")]
    EmptyAlphabet,
}

/// Generate a password of `length` characters drawn from the alphabet of
/// the enabled classes, using the operating system random source.
pub fn generate(length: usize, classes: &CharacterClasses) -> Result<String, GenerateError> {
    let mut rng = OsRng::default();
    generate_with(&mut rng, length, classes)
}

/// Same as [`generate`], with a caller-supplied random source.
///
/// Each position is an independent uniform draw, with replacement, from the
/// combined pool. Selecting no class at all is rejected rather than indexed.
pub fn generate_with<R: Rng>(
    rng: &mut R,
    length: usize,
    classes: &CharacterClasses,
) -> Result<String, GenerateError> {
    let alphabet: Vec<char> = classes.alphabet().chars().collect();
    if alphabet.is_empty() {
        return Err(GenerateError::EmptyAlphabet);
    }
    trace!("generating {} characters from a pool of {}", length, alphabet.len());

    let mut password = String::with_capacity(length);
    for _ in 0..length {
        // alphabet is non-empty, so choose cannot fail
        password.push(*alphabet.choose(rng).unwrap());
    }
    Ok(password)
}
