use std::{fmt, str::FromStr};

use derive_more::{Display, Error};
use rand_pcg::Pcg64Mcg;
use sha2::{Digest as _, Sha256};

/// Error returned when parsing a [`Seed`] from its hexadecimal form fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("seed is not a hexadecimal number of at most 32 digits")]
pub struct ParseSeedError;

/// A generation seed.
///
/// A seed fully determines the output of
/// [`PuzzleGenerator::generate_with_seed`], so printing a puzzle's seed is
/// enough to reproduce it later.
///
/// [`PuzzleGenerator::generate_with_seed`]: crate::PuzzleGenerator::generate_with_seed
///
/// # Examples
///
/// ```
/// use nonagrid_generator::Seed;
///
/// let seed = Seed::from_phrase("lazy sunday");
/// let round_tripped: Seed = seed.to_string().parse().unwrap();
/// assert_eq!(seed, round_tripped);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Seed(u128);

impl Seed {
    /// Creates a seed from operating-system entropy.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self(rand::random())
    }

    /// Creates a seed from a raw value.
    #[must_use]
    pub const fn from_value(value: u128) -> Self {
        Self(value)
    }

    /// Derives a seed from an arbitrary phrase by hashing it.
    #[must_use]
    pub fn from_phrase(phrase: &str) -> Self {
        let digest = Sha256::digest(phrase.as_bytes());
        let mut bytes = [0_u8; 16];
        bytes.copy_from_slice(&digest[..16]);
        Self(u128::from_le_bytes(bytes))
    }

    /// Returns the raw seed value.
    #[must_use]
    pub const fn value(self) -> u128 {
        self.0
    }

    /// Builds the RNG used throughout a generation run.
    #[must_use]
    pub fn rng(self) -> Pcg64Mcg {
        Pcg64Mcg::new(self.0)
    }
}

impl fmt::Display for Seed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:032x}", self.0)
    }
}

impl FromStr for Seed {
    type Err = ParseSeedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        u128::from_str_radix(s, 16)
            .map(Self)
            .map_err(|_| ParseSeedError)
    }
}
