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

//! Python-`print`-like rendering of scalars and flat containers.
//!
//! ```
//! use cutils::{print_args, render_to_string, PrintConfig};
//!
//! let line = render_to_string(PrintConfig::DEFAULT, print_args!("bla", 42, [1, 2, 3])).unwrap();
//! assert_eq!(line, "bla 42 {1, 2, 3}\n");
//! ```
//!
//! Containers of containers are not supported: a [`Container`] element must
//! be [`Renderable`], so nesting is a compile error. Printing an empty
//! container fails with [`PrintError::EmptyContainer`].

mod classify;
mod config;
mod engine;
mod error;
mod macros;

pub use classify::{kind_of, Container, PrintKind, Printable, Renderable, Text};
pub use config::PrintConfig;
pub use engine::{print, render_to_string, write_args, PrintArgs};
pub use error::PrintError;
