use std::{fmt, str::FromStr};

use rand::Rng;

use crate::{
    error::{Error, Result},
    pool::CharacterPool,
};

/// How an index into the pool is drawn for each position of the password.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Sampling {
    /// Draws from `0..=pool.len()`. A draw of `pool.len()` adds no character, so the password
    /// can come out shorter than requested.
    #[default]
    Inclusive,
    /// Draws from `0..pool.len()`, every position gets a character.
    Exclusive,
}

impl FromStr for Sampling {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "inclusive" => Ok(Self::Inclusive),
            "exclusive" => Ok(Self::Exclusive),
            _ => Err(Error::GenericDyn(format!("unknown sampling mode: {s}"))),
        }
    }
}

impl fmt::Display for Sampling {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Inclusive => write!(f, "inclusive"),
            Self::Exclusive => write!(f, "exclusive"),
        }
    }
}

/// Where the random draws come from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RngSource {
    /// The thread local pseudo random generator.
    #[default]
    Thread,
    /// The operating system's random source.
    Os,
}

impl FromStr for RngSource {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "thread" => Ok(Self::Thread),
            "os" => Ok(Self::Os),
            _ => Err(Error::GenericDyn(format!("unknown random source: {s}"))),
        }
    }
}

impl fmt::Display for RngSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Thread => write!(f, "thread"),
            Self::Os => write!(f, "os"),
        }
    }
}

/// Builds a password by drawing `length` characters independently from `pool`.
///
/// An empty pool always gives an empty password.
pub fn password_generator<R: Rng + ?Sized>(
    pool: &CharacterPool,
    length: usize,
    sampling: Sampling,
    rng: &mut R,
) -> String {
    if pool.is_empty() {
        return String::new();
    }

    (0..length)
        .filter_map(|_| {
            let index = match sampling {
                Sampling::Inclusive => rng.gen_range(0..=pool.len()),
                Sampling::Exclusive => rng.gen_range(0..pool.len()),
            };
            pool.get(index)
        })
        .collect()
}

/// Same as `password_generator`, with the random generator picked by `source`.
pub fn generate_with(
    pool: &CharacterPool,
    length: usize,
    sampling: Sampling,
    source: RngSource,
) -> String {
    match source {
        RngSource::Thread => password_generator(pool, length, sampling, &mut rand::thread_rng()),
        RngSource::Os => password_generator(pool, length, sampling, &mut rand::rngs::OsRng),
    }
}

pub fn generate(pool: &CharacterPool, length: usize) -> String {
    generate_with(pool, length, Sampling::default(), RngSource::default())
}

#[cfg(test)]
#[path = "tests/password_generator.rs"]
mod password_generator;
