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
// Random password generation from user-selected character classes.

pub mod charset;
pub mod form;
pub mod generate;
pub mod validate;

pub use charset::CharacterClasses;
pub use form::{Action, CharacterClass, FormState};
pub use generate::{GenerateError, generate, generate_with};
pub use validate::{LengthError, MAX_LENGTH, MIN_LENGTH, validate_length};
