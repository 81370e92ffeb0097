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

use std::time::{Duration, Instant};

/// A monotonic start instant and the time elapsed since it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stopwatch {
    start_time: Instant,
}

impl Stopwatch {
    /// Creates a new Stopwatch started now.
    /// ## Returns
    /// A new instance of the Stopwatch struct.
    #[inline]
    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
        }
    }

    /// Moves the start instant to now.
    #[inline]
    pub fn restart(&mut self) {
        self.start_time = Instant::now();
    }

    /// Returns the instant the stopwatch was last (re)started.
    #[inline]
    pub fn started_at(&self) -> Instant {
        self.start_time
    }

    /// Returns the elapsed time since the stopwatch was started.
    /// ## Arguments
    /// * `&self` - A reference to the Stopwatch instance.
    /// ## Returns
    /// The elapsed time as a Duration.
    #[inline]
    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }

    /// Returns the elapsed time since the stopwatch was started in nanoseconds.
    /// ## Returns
    /// The elapsed nanoseconds, saturating at `u64::MAX`.
    #[inline]
    pub fn elapsed_ns(&self) -> u64 {
        u64::try_from(self.elapsed().as_nanos()).unwrap_or(u64::MAX)
    }
}

impl Default for Stopwatch {
    fn default() -> Self {
        Self::new()
    }
}
