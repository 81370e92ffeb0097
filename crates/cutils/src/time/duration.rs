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

//! Converts raw nanosecond counts into a coarse and a fine unit.

use std::fmt;
use std::io::{self, Write};
use std::time::Duration;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::print::{PrintError, PrintKind, Printable, Renderable};

/// A unit on the duration ladder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum TimeUnit {
    /// `ns`
    Nanoseconds,
    /// `µs`
    Microseconds,
    /// `ms`
    Milliseconds,
    /// `s`
    Seconds,
    /// `m`
    Minutes,
    /// `h`
    Hours,
}

impl TimeUnit {
    /// The short symbol printed after a value.
    pub const fn symbol(self) -> &'static str {
        match self {
            TimeUnit::Nanoseconds => "ns",
            TimeUnit::Microseconds => "µs",
            TimeUnit::Milliseconds => "ms",
            TimeUnit::Seconds => "s",
            TimeUnit::Minutes => "m",
            TimeUnit::Hours => "h",
        }
    }

    /// How many nanoseconds one of this unit holds.
    pub const fn nanos(self) -> u64 {
        match self {
            TimeUnit::Nanoseconds => 1,
            TimeUnit::Microseconds => 1_000,
            TimeUnit::Milliseconds => 1_000_000,
            TimeUnit::Seconds => 1_000_000_000,
            TimeUnit::Minutes => 60_000_000_000,
            TimeUnit::Hours => 3_600_000_000_000,
        }
    }
}

impl fmt::Display for TimeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// `(exclusive upper bound in ns, coarse unit, fine unit)`, checked top-down.
/// Anything past the last bound is reported in hours and minutes.
const LADDER: [(u64, TimeUnit, Option<TimeUnit>); 5] = [
    (1_000, TimeUnit::Nanoseconds, None),
    (1_000_000, TimeUnit::Microseconds, None),
    (1_000_000_000, TimeUnit::Milliseconds, Some(TimeUnit::Microseconds)),
    (60_000_000_000, TimeUnit::Seconds, Some(TimeUnit::Milliseconds)),
    (3_600_000_000_000, TimeUnit::Minutes, Some(TimeUnit::Seconds)),
];

/// An elapsed time expressed in a coarse unit plus, where one applies, a finer
/// one.
///
/// Both values are whole-unit truncations of the same raw count, so
/// 3.45 seconds reads as `3 s (3450 ms)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct HumanDuration {
    /// The primary unit.
    pub coarse_unit: TimeUnit,
    /// The secondary unit; `None` below one millisecond.
    pub fine_unit: Option<TimeUnit>,
    /// `raw_nanoseconds` in whole `coarse_unit`s.
    pub coarse_value: u64,
    /// `raw_nanoseconds` in whole `fine_unit`s, or 0 without a fine unit.
    pub fine_value: u64,
    /// The measured count this value was derived from.
    pub raw_nanoseconds: u64,
}

/// Picks the units for `raw_nanoseconds` and divides it down.
pub fn human_readable(raw_nanoseconds: u64) -> HumanDuration {
    let (coarse_unit, fine_unit) = LADDER
        .iter()
        .find(|(below, _, _)| raw_nanoseconds < *below)
        .map(|&(_, coarse, fine)| (coarse, fine))
        .unwrap_or((TimeUnit::Hours, Some(TimeUnit::Minutes)));

    HumanDuration {
        coarse_unit,
        fine_unit,
        coarse_value: raw_nanoseconds / coarse_unit.nanos(),
        fine_value: fine_unit.map_or(0, |unit| raw_nanoseconds / unit.nanos()),
        raw_nanoseconds,
    }
}

impl HumanDuration {
    /// Same as [`human_readable`].
    #[inline]
    pub fn from_nanos(raw_nanoseconds: u64) -> Self {
        human_readable(raw_nanoseconds)
    }

    /// The measured time as a [`Duration`].
    #[inline]
    pub fn as_duration(&self) -> Duration {
        Duration::from_nanos(self.raw_nanoseconds)
    }
}

/// Durations beyond `u64::MAX` nanoseconds (about 584 years) saturate.
impl From<Duration> for HumanDuration {
    fn from(duration: Duration) -> Self {
        human_readable(u64::try_from(duration.as_nanos()).unwrap_or(u64::MAX))
    }
}

impl fmt::Display for HumanDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.coarse_value, self.coarse_unit)?;
        if let Some(fine_unit) = self.fine_unit {
            write!(f, " ({} {})", self.fine_value, fine_unit)?;
        }
        Ok(())
    }
}

impl Renderable for HumanDuration {
    fn render<W: Write + ?Sized>(&self, out: &mut W) -> io::Result<()> {
        write!(out, "{self}")
    }
}

impl Printable for HumanDuration {
    const KIND: PrintKind = PrintKind::Direct;

    fn write_printable<W: Write + ?Sized>(&self, out: &mut W) -> Result<(), PrintError> {
        Ok(self.render(out)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boundaries_select_the_next_unit_exactly() {
        let cases = [
            (0, TimeUnit::Nanoseconds),
            (999, TimeUnit::Nanoseconds),
            (1_000, TimeUnit::Microseconds),
            (999_999, TimeUnit::Microseconds),
            (1_000_000, TimeUnit::Milliseconds),
            (999_999_999, TimeUnit::Milliseconds),
            (1_000_000_000, TimeUnit::Seconds),
            (59_999_999_999, TimeUnit::Seconds),
            (60_000_000_000, TimeUnit::Minutes),
            (3_599_999_999_999, TimeUnit::Minutes),
            (3_600_000_000_000, TimeUnit::Hours),
            (u64::MAX, TimeUnit::Hours),
        ];
        for (nanos, unit) in cases {
            assert_eq!(human_readable(nanos).coarse_unit, unit, "for {nanos} ns");
        }
    }

    #[test]
    fn coarse_units_never_go_down_as_time_grows() {
        let mut previous = TimeUnit::Nanoseconds;
        let mut nanos = 1u64;
        while let Some(next) = nanos.checked_mul(7) {
            let unit = human_readable(nanos).coarse_unit;
            assert!(unit >= previous, "{nanos} ns went from {previous} to {unit}");
            previous = unit;
            nanos = next;
        }
    }

    #[test]
    fn sub_millisecond_values_have_no_fine_unit() {
        let hrd = human_readable(500);
        assert_eq!(hrd.coarse_value, 500);
        assert_eq!(hrd.fine_unit, None);
        assert_eq!(hrd.fine_value, 0);

        let hrd = human_readable(12_345);
        assert_eq!((hrd.coarse_value, hrd.coarse_unit), (12, TimeUnit::Microseconds));
        assert_eq!(hrd.fine_unit, None);
    }

    #[test]
    fn fine_value_is_a_truncation_not_a_remainder() {
        let hrd = human_readable(3_450_000_000);
        assert_eq!(hrd.coarse_value, 3);
        assert_eq!(hrd.coarse_unit, TimeUnit::Seconds);
        assert_eq!(hrd.fine_value, 3_450);
        assert_eq!(hrd.fine_unit, Some(TimeUnit::Milliseconds));
        assert_eq!(hrd.raw_nanoseconds, 3_450_000_000);
    }

    #[test]
    fn hours_are_refined_in_minutes() {
        let hrd = human_readable(2 * 3_600_000_000_000 + 30 * 60_000_000_000);
        assert_eq!((hrd.coarse_value, hrd.coarse_unit), (2, TimeUnit::Hours));
        assert_eq!((hrd.fine_value, hrd.fine_unit), (150, Some(TimeUnit::Minutes)));
    }

    #[test]
    fn display_includes_the_fine_part_only_when_present() {
        assert_eq!(human_readable(3_450_000_000).to_string(), "3 s (3450 ms)");
        assert_eq!(human_readable(42_000_000).to_string(), "42 ms (42000 µs)");
        assert_eq!(human_readable(500).to_string(), "500 ns");
    }

    #[test]
    fn from_std_duration() {
        let hrd = HumanDuration::from(Duration::from_millis(1_500));
        assert_eq!(hrd, human_readable(1_500_000_000));
        assert_eq!(hrd.as_duration(), Duration::from_millis(1_500));

        let huge = HumanDuration::from(Duration::MAX);
        assert_eq!(huge.raw_nanoseconds, u64::MAX);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_json_serialization() {
        let hrd = human_readable(61_000_000_000);
        let json = serde_json::to_string(&hrd).unwrap();
        let back: HumanDuration = serde_json::from_str(&json).unwrap();
        assert_eq!(back, hrd);
    }
}
