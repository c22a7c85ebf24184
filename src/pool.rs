use std::fmt;

pub const UPPERCASE_CHARS: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const LOWERCASE_CHARS: &str = "abcdefghijklmnopqrstuvwxyz";
pub const DIGIT_CHARS: &str = "0123456789";
pub const SYMBOL_CHARS: &str = "!@#$%^&*()_+";

/// One of the four groups of characters a password can be drawn from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CharacterClass {
    Uppercase,
    Lowercase,
    Digits,
    Symbols,
}

impl CharacterClass {
    /// All classes, in the order they are concatenated into a pool.
    pub const ALL: [CharacterClass; 4] = [
        CharacterClass::Uppercase,
        CharacterClass::Lowercase,
        CharacterClass::Digits,
        CharacterClass::Symbols,
    ];

    pub fn characters(self) -> &'static str {
        match self {
            Self::Uppercase => UPPERCASE_CHARS,
            Self::Lowercase => LOWERCASE_CHARS,
            Self::Digits => DIGIT_CHARS,
            Self::Symbols => SYMBOL_CHARS,
        }
    }

    /// The text shown next to the toggle for this class.
    pub fn label(self) -> &'static str {
        match self {
            Self::Uppercase => "Include Uppercase",
            Self::Lowercase => "Include Lowercase",
            Self::Digits => "Include Numbers",
            Self::Symbols => "Include Symbols",
        }
    }
}

/// The characters a password is sampled from.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CharacterPool {
    chars: Vec<char>,
}

impl CharacterPool {
    /// Builds a pool from the enabled classes. The order of `enabled` doesn't matter, the
    /// classes always end up in the order of `CharacterClass::ALL`.
    pub fn from_classes(enabled: &[CharacterClass]) -> Self {
        let chars = CharacterClass::ALL
            .iter()
            .filter(|class| enabled.contains(*class))
            .flat_map(|class| class.characters().chars())
            .collect();

        Self { chars }
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Returns the character at `index`, or None when the index is past the end.
    pub fn get(&self, index: usize) -> Option<char> {
        self.chars.get(index).copied()
    }

    pub fn contains(&self, c: char) -> bool {
        self.chars.contains(&c)
    }
}

impl fmt::Display for CharacterPool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in &self.chars {
            write!(f, "{c}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "tests/pool.rs"]
mod test;
