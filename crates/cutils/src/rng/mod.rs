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

//! Deterministic random engines.

use std::fmt::{Debug, Display};
use std::str::FromStr;

mod xorshift;

pub use xorshift::{ParseStateError, Xorshift32};

/// The contract a seedable, reproducible random engine fulfils.
///
/// Equality compares internal state, and the text form produced by
/// [`Display`] parses back through [`FromStr`] into an equal engine.
pub trait RandomEngine: Default + Clone + PartialEq + Display + FromStr {
    /// The unsigned integer type each step yields.
    type Output: Copy + Ord + Debug;

    /// Smallest value [`RandomEngine::next`] can return.
    const MIN: Self::Output;
    /// Largest value [`RandomEngine::next`] can return.
    const MAX: Self::Output;

    /// Advances the state one step and returns the new output.
    fn next(&mut self) -> Self::Output;

    /// Advances the state `n` steps, discarding the outputs.
    fn discard(&mut self, n: u64) {
        for _ in 0..n {
            self.next();
        }
    }

    /// Resets the state to the default seed.
    fn reseed(&mut self) {
        *self = Self::default();
    }

    /// Resets the state to `seed`.
    fn reseed_with(&mut self, seed: Self::Output);
}
