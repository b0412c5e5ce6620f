//! Random String Generation
//!
//! Uniform sampling with replacement from a [`CharacterSet`], plus the
//! word-preserving variant used by both animation modes: the template is
//! split on single spaces, each word is replaced by a random string of the
//! same character count, and the words are rejoined with single spaces.
//! The output therefore always has the template's exact length and space
//! positions (runs of spaces split into empty words, which round-trip
//! through the join).
//!
//! Randomness only needs to look unpredictable on screen; the thread RNG
//! is more than enough.

use rand::Rng;

use crate::charset::CharacterSet;

/// Generate `len` independently, uniformly sampled characters from the
/// given universe (sampling with replacement).
pub fn random_string(rng: &mut impl Rng, charset: CharacterSet, len: usize) -> String {
    let alphabet = charset.alphabet().as_bytes();
    (0..len)
        .map(|_| alphabet[rng.gen_range(0..alphabet.len())] as char)
        .collect()
}

/// Generate a random string with the same word/space structure as
/// `template`: one random string per word, same character count per word,
/// joined by single spaces.
pub fn random_text_like(rng: &mut impl Rng, charset: CharacterSet, template: &str) -> String {
    template
        .split(' ')
        .map(|word| random_string(rng, charset, word.chars().count()))
        .collect::<Vec<_>>()
        .join(" ")
}
