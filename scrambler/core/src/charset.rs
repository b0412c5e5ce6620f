//! Character Universes for Random Sampling
//!
//! A [`CharacterSet`] names the fixed pool of characters a scramble frame
//! may draw from. The tables are ASCII and defined at compile time, so
//! lookup is pure, infallible, and free of allocation.

use serde::{Deserialize, Serialize};

const MIXED_ALPHANUMERIC: &str =
    "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz1234567890";
const UPPER_ALPHANUMERIC: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ1234567890";
const MIXED_ALPHABETIC: &str =
    "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";
const UPPER_ALPHABETIC: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// The characters eligible for random sampling under each policy.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CharacterSet {
    /// `A-Z`, `a-z`, `0-9`
    #[default]
    MixedAlphanumeric,
    /// `A-Z`, `0-9`
    UpperAlphanumeric,
    /// `A-Z`, `a-z`
    MixedAlphabetic,
    /// `A-Z`
    UpperAlphabetic,
}

impl CharacterSet {
    /// Every variant, in presentation order (for selector UIs).
    pub const ALL: [CharacterSet; 4] = [
        CharacterSet::MixedAlphanumeric,
        CharacterSet::UpperAlphanumeric,
        CharacterSet::MixedAlphabetic,
        CharacterSet::UpperAlphabetic,
    ];

    /// The candidate character table for this variant.
    ///
    /// Always non-empty and pure ASCII, so byte indexing is char indexing.
    #[must_use]
    pub const fn alphabet(self) -> &'static str {
        match self {
            Self::MixedAlphanumeric => MIXED_ALPHANUMERIC,
            Self::UpperAlphanumeric => UPPER_ALPHANUMERIC,
            Self::MixedAlphabetic => MIXED_ALPHABETIC,
            Self::UpperAlphabetic => UPPER_ALPHABETIC,
        }
    }

    /// Human-readable name for status lines and selectors.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::MixedAlphanumeric => "A-Z a-z 0-9",
            Self::UpperAlphanumeric => "A-Z 0-9",
            Self::MixedAlphabetic => "A-Z a-z",
            Self::UpperAlphabetic => "A-Z",
        }
    }
}
