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

//! The recursive print engine.
//!
//! An argument list is a cons list `(&a, (&b, (&c, ())))` built by
//! [`print_args!`](crate::print_args). [`PrintArgs`] is implemented for the
//! empty list and for `(head, rest)`, so rendering walks head-then-rest with
//! every element statically typed and no dynamic dispatch.

use std::io::{self, Write};

use super::classify::{Container, Printable, Renderable};
use super::config::PrintConfig;
use super::error::PrintError;

/// A statically typed, possibly empty, argument list.
pub trait PrintArgs {
    /// `true` only for the empty list `()`.
    const IS_EMPTY: bool;

    /// Renders every argument, separators between them and the terminator
    /// after the last one.
    fn write_each<W: Write + ?Sized>(
        &self,
        out: &mut W,
        config: PrintConfig,
    ) -> Result<(), PrintError>;
}

impl PrintArgs for () {
    const IS_EMPTY: bool = true;

    #[inline]
    fn write_each<W: Write + ?Sized>(
        &self,
        out: &mut W,
        config: PrintConfig,
    ) -> Result<(), PrintError> {
        write_char(out, config.terminator)?;
        Ok(())
    }
}

impl<H: Printable + ?Sized, R: PrintArgs> PrintArgs for (&H, R) {
    const IS_EMPTY: bool = false;

    #[inline]
    fn write_each<W: Write + ?Sized>(
        &self,
        out: &mut W,
        config: PrintConfig,
    ) -> Result<(), PrintError> {
        let (head, rest) = self;
        head.write_printable(out)?;
        if !R::IS_EMPTY {
            write_char(out, config.separator)?;
        }
        rest.write_each(out, config)
    }
}

/// Renders `args` into `out`.
///
/// On [`PrintError::EmptyContainer`] the arguments before the empty container
/// have already been written; nothing after it is.
pub fn write_args<W, A>(out: &mut W, config: PrintConfig, args: A) -> Result<(), PrintError>
where
    W: Write + ?Sized,
    A: PrintArgs,
{
    args.write_each(out, config)
}

/// Renders `args` into a freshly allocated string.
///
/// Fails with an [`io::ErrorKind::InvalidData`] error if a [`Renderable`]
/// implementation wrote bytes that are not UTF-8.
pub fn render_to_string<A: PrintArgs>(config: PrintConfig, args: A) -> Result<String, PrintError> {
    let mut buffer = Vec::new();
    write_args(&mut buffer, config, args)?;
    String::from_utf8(buffer)
        .map_err(|e| PrintError::Io(io::Error::new(io::ErrorKind::InvalidData, e)))
}

/// Renders `args` to standard output and flushes it.
///
/// Prefer the [`pprint!`](crate::pprint) macro, which builds the argument
/// list for you.
///
/// # Panics
///
/// Panics if an argument is an empty container, or if writing to stdout
/// fails, the same way `println!` does. Use [`write_args`] to handle either
/// case as an error.
pub fn print<A: PrintArgs>(config: PrintConfig, args: A) {
    let stdout = io::stdout();
    let mut lock = stdout.lock();
    if let Err(e) = write_args(&mut lock, config, args).and_then(|()| Ok(lock.flush()?)) {
        panic!("failed printing to stdout: {e}");
    }
}

/// Writes `{e0, e1, ..., en}` for a non-empty container.
pub(crate) fn render_container<C, W>(container: &C, out: &mut W) -> Result<(), PrintError>
where
    C: Container + ?Sized,
    W: Write + ?Sized,
{
    let mut elements = container.elements().peekable();
    if elements.peek().is_none() {
        return Err(PrintError::EmptyContainer);
    }

    out.write_all(b"{")?;
    while let Some(element) = elements.next() {
        element.render(out)?;
        if elements.peek().is_some() {
            out.write_all(b", ")?;
        }
    }
    out.write_all(b"}")?;
    Ok(())
}

fn write_char<W: Write + ?Sized>(out: &mut W, c: char) -> io::Result<()> {
    let mut buf = [0u8; 4];
    out.write_all(c.encode_utf8(&mut buf).as_bytes())
}
