use std::fmt;

use crate::options::GenerationOptions;

pub const MIN_LENGTH: usize = 4;
pub const MAX_LENGTH: usize = 16;

/// The reasons the form can refuse a submission. These are shown next to the field, they are
/// never returned as an `Error`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ValidationError {
    Required,
    NotANumber,
    TooShort,
    TooLong,
    NoCharacterClass,
}

impl ValidationError {
    pub fn message(self) -> &'static str {
        match self {
            Self::Required => "Length is required",
            Self::NotANumber => "Length must be a number",
            Self::TooShort => "Should be min of 4 characters",
            Self::TooLong => "Should be maximum of 16 characters",
            Self::NoCharacterClass => "Select at least one character type",
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message())
    }
}

/// Validates the raw text of the length field and returns the number of positions to draw.
///
/// Any finite number is accepted, the bounds are checked on the value itself and a fractional
/// length rounds up, so `"7.5"` draws 8 positions.
pub fn validate_length(input: &str) -> std::result::Result<usize, ValidationError> {
    let input = input.trim();
    if input.is_empty() {
        return Err(ValidationError::Required);
    }

    let n = match input.parse::<f64>() {
        Ok(n) if !n.is_nan() => n,
        _ => return Err(ValidationError::NotANumber),
    };

    if n < MIN_LENGTH as f64 {
        Err(ValidationError::TooShort)
    } else if n > MAX_LENGTH as f64 {
        Err(ValidationError::TooLong)
    } else {
        Ok(n.ceil() as usize)
    }
}

/// Refuses options where every character class is switched off.
pub fn validate_classes(options: &GenerationOptions) -> std::result::Result<(), ValidationError> {
    if options.any_enabled() {
        Ok(())
    } else {
        Err(ValidationError::NoCharacterClass)
    }
}

#[cfg(test)]
#[path = "tests/validation.rs"]
mod test;
