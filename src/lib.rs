/// The four toggles and the requested length.
pub mod options;
/// Character classes and the pool built from them.
pub mod pool;
/// The random sampling that turns a pool into a password. Not a cryptographic generator unless
/// the operating system source is selected.
pub mod password_generator;
/// Length field and character class validation with the messages shown under the field.
pub mod validation;
/// The state of the generator screen, independent of any UI toolkit.
pub mod screen;
/// Settings file handling, `$XDG_CONFIG_HOME/passgen/settings.toml`.
pub mod settings;
/// A clipboard owned for the whole session, with a timed clear.
pub mod clipboard;

pub(crate) mod error;

pub use error::{Error, Result};
