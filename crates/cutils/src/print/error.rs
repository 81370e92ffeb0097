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

//! Error types for the print engine.

use std::io;
use thiserror::Error;

/// A failure while rendering an argument list.
#[derive(Debug, Error)]
pub enum PrintError {
    /// A container argument had no elements, so it has no last element to
    /// close the brace after.
    #[error("cannot print an empty container")]
    EmptyContainer,
    /// The output sink rejected a write.
    #[error("failed to write to the output sink: {0}")]
    Io(#[from] io::Error),
}
