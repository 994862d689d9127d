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
// Character classes and alphabet construction

/// The 26 uppercase Latin letters.
pub const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// The 26 lowercase Latin letters.
pub const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";

/// The 10 decimal digits.
pub const DIGITS: &str = "0123456789";

/// The fixed 12-character symbol set offered by the generator.
pub const SYMBOLS: &str = "!@#$%^&*?/><";

/// Which character classes take part in generation. All classes start
/// disabled; the user opts in to each one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CharacterClasses {
    pub uppercase: bool,
    pub lowercase: bool,
    pub digits: bool,
    pub symbols: bool,
}

impl CharacterClasses {
    /// Every class enabled.
    pub fn all() -> Self {
        Self {
            uppercase: true,
            lowercase: true,
            digits: true,
            symbols: true,
        }
    }

    pub fn none_selected(&self) -> bool {
        !(self.uppercase || self.lowercase || self.digits || self.symbols)
    }

    /// Build the combined character pool by concatenating the enabled
    /// classes in fixed order: uppercase, lowercase, digits, symbols.
    /// Empty exactly when no class is selected.
    pub fn alphabet(&self) -> String {
        let mut pool = String::new();
        if self.uppercase {
            pool.push_str(UPPERCASE);
        }
        if self.lowercase {
            pool.push_str(LOWERCASE);
        }
        if self.digits {
            pool.push_str(DIGITS);
        }
        if self.symbols {
            pool.push_str(SYMBOLS);
        }
        pool
    }
}
