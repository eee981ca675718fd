//! Compact set of lowercase ASCII letters
//!
//! Stored as a 26-bit mask, so membership, union and difference are single
//! bitwise operations.

use std::fmt;

/// A set of letters `a`-`z`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct LetterSet(u32);

impl LetterSet {
    /// The empty set
    pub const EMPTY: Self = Self(0);

    #[inline]
    const fn bit(letter: u8) -> u32 {
        debug_assert!(letter.is_ascii_lowercase(), "letter must be a-z");
        1 << (letter - b'a')
    }

    /// Add a letter, returning `true` if it was not already present
    #[inline]
    pub fn insert(&mut self, letter: u8) -> bool {
        let bit = Self::bit(letter);
        let added = self.0 & bit == 0;
        self.0 |= bit;
        added
    }

    #[inline]
    #[must_use]
    pub const fn contains(self, letter: u8) -> bool {
        self.0 & Self::bit(letter) != 0
    }

    #[inline]
    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    /// Letters in `self` that are not in `other`
    #[inline]
    #[must_use]
    pub const fn difference(self, other: Self) -> Self {
        Self(self.0 & !other.0)
    }

    #[inline]
    #[must_use]
    pub const fn intersection(self, other: Self) -> Self {
        Self(self.0 & other.0)
    }

    #[inline]
    #[must_use]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Iterate letters in alphabetical order
    pub fn iter(self) -> impl Iterator<Item = u8> {
        (b'a'..=b'z').filter(move |&letter| self.contains(letter))
    }
}

impl FromIterator<u8> for LetterSet {
    fn from_iter<I: IntoIterator<Item = u8>>(iter: I) -> Self {
        let mut set = Self::EMPTY;
        for letter in iter {
            set.insert(letter);
        }
        set
    }
}

impl Extend<u8> for LetterSet {
    fn extend<I: IntoIterator<Item = u8>>(&mut self, iter: I) {
        for letter in iter {
            self.insert(letter);
        }
    }
}

impl fmt::Display for LetterSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for letter in self.iter() {
            write!(f, "{}", letter as char)?;
        }
        Ok(())
    }
}
