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
// Password form state machine

use log::debug;

use crate::charset::CharacterClasses;
use crate::generate::{GenerateError, generate};
use crate::validate::{LengthError, validate_length};

/// One of the four toggleable character classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharacterClass {
    Uppercase,
    Lowercase,
    Digits,
    Symbols,
}

/// A single user action on the password form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// The length field changed; the new raw text is re-validated.
    EditLength(String),
    /// Flip one character class on or off.
    Toggle(CharacterClass),
    /// Validate the length and generate a password.
    Submit,
    /// Return to the pristine form.
    Reset,
}

/// Snapshot of the password form between two user actions. Each action
/// produces a new snapshot; nothing is mutated in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormState {
    pub length_input: String,
    pub classes: CharacterClasses,
    pub password: Option<String>,
    pub length_error: Option<LengthError>,
    pub generate_error: Option<GenerateError>,
}

impl Default for FormState {
    fn default() -> Self {
        // An empty length field is already invalid, which keeps the
        // generate action gated until the user types something acceptable.
        Self {
            length_input: String::new(),
            classes: CharacterClasses::default(),
            password: None,
            length_error: Some(LengthError::Required),
            generate_error: None,
        }
    }
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    /// The generate action is available once the length field validates.
    pub fn can_submit(&self) -> bool {
        self.length_error.is_none()
    }

    /// Whether a generated password is currently displayed.
    pub fn generated(&self) -> bool {
        self.password.is_some()
    }

    /// Apply one user action and return the next form snapshot.
    pub fn apply(self, action: Action) -> Self {
        debug!("form action: {:?}", action);
        match action {
            Action::EditLength(text) => {
                let length_error = validate_length(&text).err();
                Self {
                    length_input: text,
                    length_error,
                    ..self
                }
            }
            Action::Toggle(class) => {
                let mut classes = self.classes;
                match class {
                    CharacterClass::Uppercase => classes.uppercase = !classes.uppercase,
                    CharacterClass::Lowercase => classes.lowercase = !classes.lowercase,
                    CharacterClass::Digits => classes.digits = !classes.digits,
                    CharacterClass::Symbols => classes.symbols = !classes.symbols,
                }
                Self { classes, ..self }
            }
            Action::Submit => match validate_length(&self.length_input) {
                Ok(length) => match generate(length, &self.classes) {
                    Ok(password) => Self {
                        password: Some(password),
                        length_error: None,
                        generate_error: None,
                        ..self
                    },
                    Err(e) => Self {
                        password: None,
                        generate_error: Some(e),
                        ..self
                    },
                },
                Err(e) => Self {
                    password: None,
                    length_error: Some(e),
                    ..self
                },
            },
            Action::Reset => Self::default(),
        }
    }
}
