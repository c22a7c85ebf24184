use rand::Rng;
use zeroize::Zeroizing;

use crate::{
    options::GenerationOptions,
    password_generator::{password_generator, RngSource, Sampling},
    pool::CharacterClass,
    settings::Settings,
    validation::{validate_classes, validate_length, ValidationError},
};

/// Whether a generated password is currently on display.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ScreenState {
    #[default]
    Idle,
    ResultShown(Zeroizing<String>),
}

/// Everything the password generator screen keeps between input events.
///
/// All mutations go through the methods below, a frontend only reads the state back to redraw.
#[derive(Clone, Debug, Default)]
pub struct Screen {
    options: GenerationOptions,
    length_input: String,
    touched: bool,
    state: ScreenState,
    sampling: Sampling,
    rng: RngSource,
    require_class: bool,
}

impl Screen {
    pub fn new(settings: &Settings) -> Self {
        Self {
            sampling: settings.sampling,
            rng: settings.rng,
            require_class: settings.require_class,
            ..Self::default()
        }
    }

    pub fn options(&self) -> &GenerationOptions {
        &self.options
    }

    pub fn length_input(&self) -> &str {
        &self.length_input
    }

    pub fn is_touched(&self) -> bool {
        self.touched
    }

    pub fn state(&self) -> &ScreenState {
        &self.state
    }

    pub fn is_result_shown(&self) -> bool {
        matches!(self.state, ScreenState::ResultShown(_))
    }

    pub fn password(&self) -> Option<&str> {
        match &self.state {
            ScreenState::Idle => None,
            ScreenState::ResultShown(password) => Some(password.as_str()),
        }
    }

    pub fn edit_length(&mut self, text: &str) {
        self.length_input = text.to_owned();
        self.touched = true;
    }

    pub fn toggle(&mut self, class: CharacterClass) {
        self.options.toggle(class);
    }

    /// Validates the form as it stands, returning the requested length.
    pub fn validation(&self) -> std::result::Result<usize, ValidationError> {
        let length = validate_length(&self.length_input)?;
        if self.require_class {
            validate_classes(&self.options)?;
        }
        Ok(length)
    }

    pub fn can_submit(&self) -> bool {
        self.validation().is_ok()
    }

    /// The error to show under the length field. Nothing is shown before the field is touched.
    pub fn visible_error(&self) -> Option<ValidationError> {
        if !self.touched {
            return None;
        }
        self.validation().err()
    }

    /// Validates the form and, if it passes, replaces the shown password with a new one.
    pub fn submit<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
    ) -> std::result::Result<&str, ValidationError> {
        let length = match self.validation() {
            Ok(length) => length,
            Err(err) => {
                self.touched = true;
                return Err(err);
            }
        };

        self.options.length = Some(length);
        let pool = self.options.pool();
        let password = Zeroizing::new(password_generator(&pool, length, self.sampling, rng));
        log::debug!(
            "generated a password of {} characters from a pool of {}",
            password.len(),
            pool.len()
        );

        self.state = ScreenState::ResultShown(password);
        Ok(self.password().unwrap_or_default())
    }

    /// Submits using the random source from the settings.
    pub fn generate(&mut self) -> std::result::Result<&str, ValidationError> {
        match self.rng {
            RngSource::Thread => self.submit(&mut rand::thread_rng()),
            RngSource::Os => self.submit(&mut rand::rngs::OsRng),
        }
    }

    pub fn reset(&mut self) {
        self.options.reset();
        self.length_input.clear();
        self.touched = false;
        self.state = ScreenState::Idle;
    }
}

#[cfg(test)]
#[path = "tests/screen.rs"]
mod test;
