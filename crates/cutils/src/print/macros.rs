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

//! Variadic entry points.
//!
//! `macro_rules!` stands in for variadic generics: each macro expands to a
//! statically typed argument list and one call into the engine.

/// Builds the argument list consumed by [`write_args`](crate::write_args),
/// [`render_to_string`](crate::render_to_string) and
/// [`print`](crate::print()).
///
/// The list borrows its arguments, so it must be consumed within the same
/// statement when any argument is a temporary.
#[macro_export]
macro_rules! print_args {
    () => {
        ()
    };
    ($head:expr $(, $rest:expr)* $(,)?) => {
        (&$head, $crate::print_args!($($rest),*))
    };
}

/// Prints its arguments to stdout, Python style.
///
/// ```
/// use cutils::pprint;
///
/// pprint!("bla");                          // bla
/// pprint!("bla", 42, vec![1, 2, 3]);       // bla 42 {1, 2, 3}
/// pprint!(sep = ',', end = ';'; 1, 2);     // 1,2;
/// pprint!(end = ' '; "no newline");        // no newline
/// pprint!();                               // just the newline
/// ```
///
/// # Panics
///
/// See [`print`](crate::print()).
#[macro_export]
macro_rules! pprint {
    (sep = $sep:expr, end = $end:expr; $($arg:expr),* $(,)?) => {
        $crate::print::print(
            $crate::PrintConfig::new($sep, $end),
            $crate::print_args!($($arg),*),
        )
    };
    (sep = $sep:expr; $($arg:expr),* $(,)?) => {
        $crate::print::print(
            $crate::PrintConfig::DEFAULT.with_separator($sep),
            $crate::print_args!($($arg),*),
        )
    };
    (end = $end:expr; $($arg:expr),* $(,)?) => {
        $crate::print::print(
            $crate::PrintConfig::DEFAULT.with_terminator($end),
            $crate::print_args!($($arg),*),
        )
    };
    ($($arg:expr),* $(,)?) => {
        $crate::print::print($crate::PrintConfig::DEFAULT, $crate::print_args!($($arg),*))
    };
}

/// Like [`pprint!`], but only prints when cutils is built with the `logging`
/// feature. Arguments are still type checked otherwise.
#[macro_export]
macro_rules! log_args {
    ($($tt:tt)*) => {
        if $crate::LOGGING_ENABLED {
            $crate::pprint!($($tt)*)
        }
    };
}

/// Prints `<expression>: <value>` under the `logging` feature.
///
/// ```
/// let retries = 3;
/// cutils::log_named!(retries); // "retries: 3" with `logging` enabled
/// ```
#[macro_export]
macro_rules! log_named {
    ($value:expr) => {
        if $crate::LOGGING_ENABLED {
            $crate::pprint!(concat!(stringify!($value), ":"), $value)
        }
    };
}

/// Like [`pprint!`], but only prints when cutils is built with the `printing`
/// feature.
#[macro_export]
macro_rules! print_if_enabled {
    ($($tt:tt)*) => {
        if $crate::PRINTING_ENABLED {
            $crate::pprint!($($tt)*)
        }
    };
}
