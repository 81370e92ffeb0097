// Copyright 2025 eraflo
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Marsaglia's 32-bit xorshift generator ("Xorshift RNGs", 2003, p. 4).

use std::fmt;
use std::io::{self, Write};
use std::num::ParseIntError;
use std::str::FromStr;

use rand_core::{impls, RngCore, SeedableRng};
use thiserror::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::RandomEngine;
use crate::print::{PrintError, PrintKind, Printable, Renderable};

/// A 32-bit xorshift generator with shifts 13, 17 and 5.
///
/// The state must be non-zero: zero maps to itself, so a generator seeded
/// with 0 yields 0 forever. That fixed point is kept as is.
///
/// ```
/// use cutils::{RandomEngine, Xorshift32};
///
/// let mut rng = Xorshift32::default();
/// assert_eq!(rng.next(), 3_244_428);
///
/// let saved = rng.to_string();
/// let restored: Xorshift32 = saved.parse().unwrap();
/// assert_eq!(restored, rng);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Xorshift32 {
    state: u32,
}

impl Xorshift32 {
    /// The seed used by [`Default`] and [`RandomEngine::reseed`].
    pub const DEFAULT_SEED: u32 = 12;

    /// Creates a generator whose state is `seed`.
    #[inline]
    pub const fn new(seed: u32) -> Self {
        Self { state: seed }
    }

    /// The current state, which is also the last output.
    #[inline]
    pub const fn state(&self) -> u32 {
        self.state
    }

    #[inline]
    const fn step(mut x: u32) -> u32 {
        x ^= x << 13;
        x ^= x >> 17;
        x ^= x << 5;
        x
    }
}

impl Default for Xorshift32 {
    fn default() -> Self {
        Self::new(Self::DEFAULT_SEED)
    }
}

impl RandomEngine for Xorshift32 {
    type Output = u32;

    const MIN: u32 = u32::MIN;
    const MAX: u32 = u32::MAX;

    #[inline]
    fn next(&mut self) -> u32 {
        self.state = Self::step(self.state);
        self.state
    }

    fn reseed_with(&mut self, seed: u32) {
        if seed == 0 {
            log::debug!("[Xorshift32] reseeded with 0, every further output will be 0");
        }
        *self = Self::new(seed);
    }
}

impl RngCore for Xorshift32 {
    #[inline]
    fn next_u32(&mut self) -> u32 {
        RandomEngine::next(self)
    }

    #[inline]
    fn next_u64(&mut self) -> u64 {
        impls::next_u64_via_u32(self)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        impls::fill_bytes_via_next(self, dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand_core::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

/// Seeds are the little-endian bytes of the initial state.
impl SeedableRng for Xorshift32 {
    type Seed = [u8; 4];

    fn from_seed(seed: Self::Seed) -> Self {
        Self::new(u32::from_le_bytes(seed))
    }
}

/// The decimal state integer.
impl fmt::Display for Xorshift32 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.state)
    }
}

/// Text that is not a decimal `u32` state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid generator state {input:?}: {source}")]
pub struct ParseStateError {
    input: String,
    source: ParseIntError,
}

/// Parses a decimal state; surrounding whitespace is skipped.
impl FromStr for Xorshift32 {
    type Err = ParseStateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u32>()
            .map(Self::new)
            .map_err(|source| ParseStateError {
                input: s.to_owned(),
                source,
            })
    }
}

impl Renderable for Xorshift32 {
    fn render<W: Write + ?Sized>(&self, out: &mut W) -> io::Result<()> {
        write!(out, "{self}")
    }
}

impl Printable for Xorshift32 {
    const KIND: PrintKind = PrintKind::Direct;

    fn write_printable<W: Write + ?Sized>(&self, out: &mut W) -> Result<(), PrintError> {
        Ok(self.render(out)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn steps_follow_the_shift_triple() {
        let mut rng = Xorshift32::new(1);
        assert_eq!(rng.next(), 270_369);
        assert_eq!(rng.next(), 67_634_689);
        assert_eq!(rng.next(), 2_647_435_461);
    }

    #[test]
    fn next_updates_and_returns_the_state() {
        let mut rng = Xorshift32::default();
        let out = rng.next();
        assert_eq!(rng.state(), out);
    }

    #[test]
    fn reseed_restores_default_or_given_state() {
        let mut rng = Xorshift32::new(99);
        rng.discard(10);
        rng.reseed();
        assert_eq!(rng, Xorshift32::default());

        rng.reseed_with(7);
        assert_eq!(rng.state(), 7);
    }

    #[test]
    fn equality_is_state_equality() {
        assert_eq!(Xorshift32::new(5), Xorshift32::new(5));
        assert_ne!(Xorshift32::new(5), Xorshift32::new(6));

        let mut a = Xorshift32::new(5);
        let b = a;
        a.next();
        assert_ne!(a, b);
    }

    #[test]
    fn parse_skips_whitespace() {
        let rng: Xorshift32 = "  4115845933\n".parse().unwrap();
        assert_eq!(rng.state(), 4_115_845_933);
    }

    #[test]
    fn parse_rejects_non_decimal_text() {
        assert!("".parse::<Xorshift32>().is_err());
        assert!("-1".parse::<Xorshift32>().is_err());
        assert!("0x10".parse::<Xorshift32>().is_err());
        assert!("4294967296".parse::<Xorshift32>().is_err());

        let err = "abc".parse::<Xorshift32>().unwrap_err();
        assert!(err.to_string().starts_with("invalid generator state \"abc\""));
    }

    #[test]
    fn rng_core_matches_the_engine_stream() {
        let mut engine = Xorshift32::default();
        let mut core = Xorshift32::default();
        for _ in 0..16 {
            assert_eq!(core.next_u32(), engine.next());
        }
    }

    #[test]
    fn fill_bytes_consumes_whole_words() {
        let mut rng = Xorshift32::default();
        let mut bytes = [0u8; 8];
        rng.fill_bytes(&mut bytes);

        let mut reference = Xorshift32::default();
        let first = reference.next().to_le_bytes();
        let second = reference.next().to_le_bytes();
        assert_eq!(&bytes[..4], &first);
        assert_eq!(&bytes[4..], &second);
        assert_eq!(rng, reference);
    }

    #[test]
    fn seedable_rng_uses_little_endian_state() {
        let rng = Xorshift32::from_seed(12u32.to_le_bytes());
        assert_eq!(rng, Xorshift32::default());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_json_serialization_is_the_bare_state() {
        let mut rng = Xorshift32::default();
        rng.discard(3);
        let json = serde_json::to_string(&rng).unwrap();
        assert_eq!(json, "4115845933");
        let back: Xorshift32 = serde_json::from_str(&json).unwrap();
        assert_eq!(back, rng);
    }
}
