//! Character categories and pool building.

use super::GenerateError;

pub const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
pub const NUMBERS: &str = "0123456789";

/// Default symbol alphabet. Angle brackets, quotes, backslash, backtick,
/// tilde, and slash are excluded to keep generated passwords safe to paste
/// into markup and shells; those live in [`AMBIGUOUS`] instead.
pub const SYMBOLS: &str = "!@#$%^&*()_+-=[]{}|;:,.?";

/// Characters reserved out of generation entirely.
pub const AMBIGUOUS: &str = "{}[]()/\\'\"`~,;:.<>";

/// Which character categories participate in generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryFlags {
    pub uppercase: bool,
    pub lowercase: bool,
    pub numbers: bool,
    pub symbols: bool,
}

impl CategoryFlags {
    pub const ALL: Self = Self {
        uppercase: true,
        lowercase: true,
        numbers: true,
        symbols: true,
    };

    pub fn any(self) -> bool {
        self.uppercase || self.lowercase || self.numbers || self.symbols
    }

    /// Alphabets of the enabled categories, in fixed pool order.
    pub fn enabled_alphabets(self) -> Vec<&'static str> {
        let mut sets = Vec::with_capacity(4);
        if self.uppercase {
            sets.push(UPPERCASE);
        }
        if self.lowercase {
            sets.push(LOWERCASE);
        }
        if self.numbers {
            sets.push(NUMBERS);
        }
        if self.symbols {
            sets.push(SYMBOLS);
        }
        sets
    }
}

/// Concatenate the enabled alphabets into the generation pool.
///
/// Rejects the all-disabled state rather than substituting a default
/// alphabet; callers are expected to have guarded against it.
pub fn pool(flags: CategoryFlags) -> Result<String, GenerateError> {
    if !flags.any() {
        return Err(GenerateError::EmptyPool);
    }
    Ok(flags.enabled_alphabets().concat())
}
