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

//! # cutils
//!
//! Small generic utilities:
//!
//! - [`print`]: a Python-`print`-like renderer for scalars and flat containers,
//!   dispatched entirely at compile time through the [`Printable`] trait.
//! - [`time`]: a human-readable duration formatter and a scope timer that
//!   reports when it is stopped or dropped.
//! - [`rng`]: a deterministic 32-bit xorshift generator implementing the
//!   [`RandomEngine`] contract.

#![warn(missing_docs)]

pub mod print;
pub mod rng;
pub mod time;

pub use print::{
    print, render_to_string, write_args, Container, PrintConfig, PrintError, PrintKind, Printable,
    Renderable, Text,
};
pub use rng::{ParseStateError, RandomEngine, Xorshift32};
pub use time::{human_readable, HumanDuration, ScopeTimer, Stopwatch};

/// `true` when the crate was built with the `logging` feature.
pub const LOGGING_ENABLED: bool = cfg!(feature = "logging");

/// `true` when the crate was built with the `printing` feature.
pub const PRINTING_ENABLED: bool = cfg!(feature = "printing");
