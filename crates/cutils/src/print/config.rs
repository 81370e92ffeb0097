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

//! Separator and terminator settings for a print call.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The two characters that frame an argument list.
///
/// `separator` goes between sibling arguments and `terminator` after the last
/// one. Container elements ignore both and always use `", "` inside braces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PrintConfig {
    /// Written between two consecutive arguments.
    pub separator: char,
    /// Written once after the last argument.
    pub terminator: char,
}

impl PrintConfig {
    /// Space-separated, newline-terminated, like Python's `print`.
    pub const DEFAULT: Self = Self::new(' ', '\n');

    /// Creates a configuration from an explicit separator and terminator.
    #[inline]
    pub const fn new(separator: char, terminator: char) -> Self {
        Self {
            separator,
            terminator,
        }
    }

    /// Returns a copy with a different separator.
    #[inline]
    pub const fn with_separator(self, separator: char) -> Self {
        Self { separator, ..self }
    }

    /// Returns a copy with a different terminator.
    #[inline]
    pub const fn with_terminator(self, terminator: char) -> Self {
        Self { terminator, ..self }
    }

    /// Loads a configuration from a JSON string. Missing fields keep their
    /// default value.
    #[cfg(feature = "serde")]
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

impl Default for PrintConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}
