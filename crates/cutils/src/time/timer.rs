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

//! Provides an RAII scope timer that reports its elapsed time when stopped or
//! dropped.

use std::fmt::Display;
use std::io::{self, Write};

use chrono::{DateTime, Local, TimeZone};

use super::duration::HumanDuration;
use super::stopwatch::Stopwatch;

/// `ctime`-style calendar time, e.g. `Tue Mar  5 14:07:09 2024`.
const CALENDAR_FORMAT: &str = "%a %b %e %H:%M:%S %Y";

/// Times a scope and writes a two-line report to its sink:
///
/// ```text
/// finished computation at Tue Mar  5 14:07:09 2024
/// elapsed time: 3 s (3450 ms)
/// ```
///
/// Below one millisecond there is no fine unit and the group reads `(0)`,
/// e.g. `elapsed time: 250 ns (0)`.
///
/// The report is written by [`ScopeTimer::stop`], or on drop if `stop` was
/// never called. Stopping is idempotent: later calls return the first
/// measurement and write nothing, and the drop becomes a no-op.
pub struct ScopeTimer<W: Write = io::Stdout> {
    stopwatch: Stopwatch,
    sink: W,
    measured: Option<HumanDuration>,
}

impl ScopeTimer {
    /// Starts a timer that reports to stdout.
    pub fn new() -> Self {
        Self::with_sink(io::stdout())
    }
}

impl Default for ScopeTimer {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write> ScopeTimer<W> {
    /// Starts a timer that reports to `sink`.
    pub fn with_sink(sink: W) -> Self {
        log::trace!("[ScopeTimer] started");
        Self {
            stopwatch: Stopwatch::new(),
            sink,
            measured: None,
        }
    }

    /// Resets the start instant. The running/stopped state is unchanged, so
    /// this has no visible effect once the timer is stopped.
    pub fn restart(&mut self) {
        if self.is_stopped() {
            log::debug!("[ScopeTimer] restart ignored on a stopped timer");
            return;
        }
        self.stopwatch.restart();
    }

    /// Returns `true` once [`ScopeTimer::stop`] has run.
    pub fn is_stopped(&self) -> bool {
        self.measured.is_some()
    }

    /// Returns the time elapsed so far without stopping, or the final
    /// measurement of a stopped timer.
    pub fn elapsed(&self) -> HumanDuration {
        self.measured
            .unwrap_or_else(|| HumanDuration::from_nanos(self.stopwatch.elapsed_ns()))
    }

    /// Returns the report sink.
    pub fn sink(&self) -> &W {
        &self.sink
    }

    /// Measures the elapsed time, writes the report and stops the timer.
    ///
    /// A failed report write is logged and otherwise ignored.
    pub fn stop(&mut self) -> HumanDuration {
        if let Some(measured) = self.measured {
            log::debug!("[ScopeTimer] already stopped, keeping the first measurement");
            return measured;
        }

        let measured = HumanDuration::from_nanos(self.stopwatch.elapsed_ns());
        if let Err(e) = write_report(&mut self.sink, &measured, &Local::now()) {
            log::warn!("[ScopeTimer] Failed to write timing report: {e}");
        }
        log::debug!("[ScopeTimer] stopped after {measured}");
        self.measured = Some(measured);
        measured
    }
}

/// Stops the timer if the owner never did.
impl<W: Write> Drop for ScopeTimer<W> {
    fn drop(&mut self) {
        if !self.is_stopped() {
            self.stop();
        }
    }
}

fn write_report<W, Tz>(
    out: &mut W,
    elapsed: &HumanDuration,
    finished_at: &DateTime<Tz>,
) -> io::Result<()>
where
    W: Write + ?Sized,
    Tz: TimeZone,
    Tz::Offset: Display,
{
    write!(
        out,
        "finished computation at {}\nelapsed time: {} {} ({}",
        finished_at.format(CALENDAR_FORMAT),
        elapsed.coarse_value,
        elapsed.coarse_unit,
        elapsed.fine_value,
    )?;
    // The parenthesised group is always present, `(0)` when there is no fine unit.
    if let Some(fine_unit) = elapsed.fine_unit {
        write!(out, " {fine_unit}")?;
    }
    out.write_all(b")\n")?;
    out.flush()
}
