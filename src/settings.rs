use std::path::{Path, PathBuf};

use crate::{
    error::{Error, Result},
    password_generator::{RngSource, Sampling},
};

pub const DEFAULT_CLIPBOARD_TIMEOUT: u64 = 40;

/// User configurable behaviour, read from `settings.toml`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Settings {
    pub sampling: Sampling,
    pub rng: RngSource,
    /// Refuse to generate when every character class is switched off.
    pub require_class: bool,
    /// Seconds before a copied password is cleared from the clipboard, 0 keeps it.
    pub clipboard_timeout: u64,
    pub style_path: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            sampling: Sampling::default(),
            rng: RngSource::default(),
            require_class: false,
            clipboard_timeout: DEFAULT_CLIPBOARD_TIMEOUT,
            style_path: None,
        }
    }
}

impl Settings {
    fn from_config(config: &config::Config) -> Result<Self> {
        let clipboard_timeout = u64::try_from(config.get_int("clipboard_timeout")?)
            .map_err(|_| Error::Generic("clipboard_timeout can't be negative"))?;

        Ok(Self {
            sampling: config.get_str("sampling")?.parse()?,
            rng: config.get_str("rng")?.parse()?,
            require_class: config.get_bool("require_class")?,
            clipboard_timeout,
            style_path: config.get_str("style_path").ok().map(PathBuf::from),
        })
    }
}

/// Where the settings file lives, `$XDG_CONFIG_HOME/passgen/settings.toml` if that is set,
/// otherwise under `$HOME/.config`.
pub fn xdg_config_file_location(
    home: &Option<PathBuf>,
    xdg_config_home: &Option<PathBuf>,
) -> Result<PathBuf> {
    let config_dir = match xdg_config_home {
        Some(dir) => dir.clone(),
        None => match home {
            Some(home) => home.join(".config"),
            None => return Err(Error::Generic("no home directory set")),
        },
    };

    Ok(config_dir.join("passgen").join("settings.toml"))
}

fn file_settings(config_file: &Path) -> config::File<config::FileSourceFile> {
    config::File::from(config_file.to_path_buf()).required(false)
}

/// Reads the settings, layering the settings file and `PASSGEN_*` environment variables on top
/// of the defaults. Also returns the location of the settings file.
pub fn read_config(
    home: &Option<PathBuf>,
    xdg_config_home: &Option<PathBuf>,
) -> Result<(Settings, PathBuf)> {
    let defaults = Settings::default();
    let mut config = config::Config::default();
    config.set_default("sampling", defaults.sampling.to_string())?;
    config.set_default("rng", defaults.rng.to_string())?;
    config.set_default("require_class", defaults.require_class)?;
    config.set_default("clipboard_timeout", defaults.clipboard_timeout as i64)?;

    let config_file_location = xdg_config_file_location(home, xdg_config_home)?;
    config.merge(file_settings(&config_file_location))?;
    config.merge(config::Environment::with_prefix("PASSGEN"))?;

    let settings = Settings::from_config(&config)?;
    log::debug!(
        "loaded settings from {}: {:?}",
        config_file_location.display(),
        settings
    );

    Ok((settings, config_file_location))
}

/// Writes the settings to `config_file`, creating the parent directory if needed.
pub fn save_config(settings: &Settings, config_file: &Path) -> Result<()> {
    let mut table = toml::Table::new();
    table.insert(
        "sampling".to_owned(),
        toml::Value::String(settings.sampling.to_string()),
    );
    table.insert(
        "rng".to_owned(),
        toml::Value::String(settings.rng.to_string()),
    );
    table.insert(
        "require_class".to_owned(),
        toml::Value::Boolean(settings.require_class),
    );
    let clipboard_timeout = i64::try_from(settings.clipboard_timeout)
        .map_err(|_| Error::Generic("clipboard_timeout is too large"))?;
    table.insert(
        "clipboard_timeout".to_owned(),
        toml::Value::Integer(clipboard_timeout),
    );
    if let Some(style_path) = &settings.style_path {
        table.insert(
            "style_path".to_owned(),
            toml::Value::String(style_path.to_string_lossy().into_owned()),
        );
    }

    if let Some(parent) = config_file.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(config_file, toml::to_string_pretty(&table)?)?;

    Ok(())
}

#[cfg(test)]
#[path = "tests/settings.rs"]
mod test;
