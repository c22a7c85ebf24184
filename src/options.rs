use crate::pool::{CharacterClass, CharacterPool};

/// The state of the class toggles and the requested length.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GenerationOptions {
    pub include_lower: bool,
    pub include_upper: bool,
    pub include_digits: bool,
    pub include_symbols: bool,
    /// Set once the length field has passed validation.
    pub length: Option<usize>,
}

impl Default for GenerationOptions {
    fn default() -> Self {
        Self {
            include_lower: true,
            include_upper: false,
            include_digits: false,
            include_symbols: false,
            length: None,
        }
    }
}

impl GenerationOptions {
    fn flag_mut(&mut self, class: CharacterClass) -> &mut bool {
        match class {
            CharacterClass::Uppercase => &mut self.include_upper,
            CharacterClass::Lowercase => &mut self.include_lower,
            CharacterClass::Digits => &mut self.include_digits,
            CharacterClass::Symbols => &mut self.include_symbols,
        }
    }

    pub fn is_enabled(&self, class: CharacterClass) -> bool {
        match class {
            CharacterClass::Uppercase => self.include_upper,
            CharacterClass::Lowercase => self.include_lower,
            CharacterClass::Digits => self.include_digits,
            CharacterClass::Symbols => self.include_symbols,
        }
    }

    /// Flips the flag for `class` and leaves the other three alone.
    pub fn toggle(&mut self, class: CharacterClass) {
        let flag = self.flag_mut(class);
        *flag = !*flag;
    }

    pub fn toggle_lower(&mut self) {
        self.toggle(CharacterClass::Lowercase);
    }

    pub fn toggle_upper(&mut self) {
        self.toggle(CharacterClass::Uppercase);
    }

    pub fn toggle_digits(&mut self) {
        self.toggle(CharacterClass::Digits);
    }

    pub fn toggle_symbols(&mut self) {
        self.toggle(CharacterClass::Symbols);
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn any_enabled(&self) -> bool {
        CharacterClass::ALL.iter().any(|c| self.is_enabled(*c))
    }

    pub fn enabled_classes(&self) -> Vec<CharacterClass> {
        CharacterClass::ALL
            .into_iter()
            .filter(|c| self.is_enabled(*c))
            .collect()
    }

    pub fn pool(&self) -> CharacterPool {
        CharacterPool::from_classes(&self.enabled_classes())
    }
}

#[cfg(test)]
#[path = "tests/options.rs"]
mod test;
