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

//! Compile-time capability classification for printable values.
//!
//! A type is printed either through its natural text form ([`Renderable`]) or
//! by walking its elements ([`Container`]). [`Printable`] ties both together
//! and is the only bound the engine places on its arguments, so every
//! dispatch decision is made by the type system and none at runtime.

use std::borrow::Cow;
use std::collections::{LinkedList, VecDeque};
use std::fmt::Display;
use std::io::{self, Write};
use std::num::{
    NonZeroI128, NonZeroI16, NonZeroI32, NonZeroI64, NonZeroI8, NonZeroIsize, NonZeroU128,
    NonZeroU16, NonZeroU32, NonZeroU64, NonZeroU8, NonZeroUsize,
};
use std::rc::Rc;
use std::sync::Arc;

use super::engine::render_container;
use super::error::PrintError;

/// How the engine renders a [`Printable`] type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrintKind {
    /// Written through its own text form.
    Direct,
    /// Written as `{e0, e1, ..., en}` from its elements.
    Container,
}

/// A value with a natural "write as text" operation.
pub trait Renderable {
    /// Writes the text form of `self` to `out`.
    fn render<W: Write + ?Sized>(&self, out: &mut W) -> io::Result<()>;
}

/// A non-associative sequence whose elements are [`Renderable`].
///
/// Elements must be directly renderable, which rules out containers of
/// containers at compile time:
///
/// ```compile_fail
/// cutils::pprint!(vec![vec![1, 2], vec![3]]);
/// ```
///
/// Associative containers (sets and maps) have no impl either:
///
/// ```compile_fail
/// use std::collections::BTreeSet;
/// cutils::pprint!(BTreeSet::from([1, 2]));
/// ```
pub trait Container {
    /// The element type yielded by [`Container::elements`].
    type Element: Renderable;

    /// Returns a fresh traversal over the elements, front to back.
    fn elements(&self) -> impl Iterator<Item = &Self::Element> + '_;
}

/// Anything the print engine accepts: `Renderable OR Container`.
///
/// Passing anything else is rejected by the compiler:
///
/// ```compile_fail
/// struct Opaque;
/// cutils::pprint!(Opaque);
/// ```
pub trait Printable {
    /// The classification of this type, fixed once per type.
    const KIND: PrintKind;

    /// Writes `self` to `out` according to [`Printable::KIND`].
    fn write_printable<W: Write + ?Sized>(&self, out: &mut W) -> Result<(), PrintError>;
}

/// Returns the compile-time classification of `T`.
pub const fn kind_of<T: Printable + ?Sized>() -> PrintKind {
    T::KIND
}

/// Wraps any [`Display`] type so it can be printed directly.
///
/// ```
/// use std::net::Ipv4Addr;
/// use cutils::{render_to_string, print_args, PrintConfig, Text};
///
/// let addr = Text(Ipv4Addr::LOCALHOST);
/// let line = render_to_string(PrintConfig::DEFAULT, print_args!("host", addr)).unwrap();
/// assert_eq!(line, "host 127.0.0.1\n");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Text<T>(pub T);

impl<T: Display> Renderable for Text<T> {
    #[inline]
    fn render<W: Write + ?Sized>(&self, out: &mut W) -> io::Result<()> {
        write!(out, "{}", self.0)
    }
}

impl<T: Display> Printable for Text<T> {
    const KIND: PrintKind = PrintKind::Direct;

    #[inline]
    fn write_printable<W: Write + ?Sized>(&self, out: &mut W) -> Result<(), PrintError> {
        Ok(self.render(out)?)
    }
}

macro_rules! impl_direct {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Renderable for $ty {
                #[inline]
                fn render<W: Write + ?Sized>(&self, out: &mut W) -> io::Result<()> {
                    write!(out, "{self}")
                }
            }

            impl Printable for $ty {
                const KIND: PrintKind = PrintKind::Direct;

                #[inline]
                fn write_printable<W: Write + ?Sized>(&self, out: &mut W) -> Result<(), PrintError> {
                    Ok(self.render(out)?)
                }
            }
        )*
    };
}

impl_direct!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, bool, char, str,
    String, NonZeroI8, NonZeroI16, NonZeroI32, NonZeroI64, NonZeroI128, NonZeroIsize, NonZeroU8,
    NonZeroU16, NonZeroU32, NonZeroU64, NonZeroU128, NonZeroUsize,
);

impl Renderable for Cow<'_, str> {
    #[inline]
    fn render<W: Write + ?Sized>(&self, out: &mut W) -> io::Result<()> {
        out.write_all(self.as_bytes())
    }
}

impl Printable for Cow<'_, str> {
    const KIND: PrintKind = PrintKind::Direct;

    #[inline]
    fn write_printable<W: Write + ?Sized>(&self, out: &mut W) -> Result<(), PrintError> {
        Ok(self.render(out)?)
    }
}

// Pointer-like wrappers forward to the pointee in both traits.
macro_rules! impl_forwarding {
    ($($ptr:ident),* $(,)?) => {
        $(
            impl<T: Renderable + ?Sized> Renderable for $ptr<T> {
                #[inline]
                fn render<W: Write + ?Sized>(&self, out: &mut W) -> io::Result<()> {
                    (**self).render(out)
                }
            }

            impl<T: Printable + ?Sized> Printable for $ptr<T> {
                const KIND: PrintKind = T::KIND;

                #[inline]
                fn write_printable<W: Write + ?Sized>(&self, out: &mut W) -> Result<(), PrintError> {
                    (**self).write_printable(out)
                }
            }
        )*
    };
}

impl_forwarding!(Box, Rc, Arc);

impl<T: Renderable + ?Sized> Renderable for &T {
    #[inline]
    fn render<W: Write + ?Sized>(&self, out: &mut W) -> io::Result<()> {
        (**self).render(out)
    }
}

impl<T: Printable + ?Sized> Printable for &T {
    const KIND: PrintKind = T::KIND;

    #[inline]
    fn write_printable<W: Write + ?Sized>(&self, out: &mut W) -> Result<(), PrintError> {
        (**self).write_printable(out)
    }
}

impl<T: Renderable + ?Sized> Renderable for &mut T {
    #[inline]
    fn render<W: Write + ?Sized>(&self, out: &mut W) -> io::Result<()> {
        (**self).render(out)
    }
}

impl<T: Printable + ?Sized> Printable for &mut T {
    const KIND: PrintKind = T::KIND;

    #[inline]
    fn write_printable<W: Write + ?Sized>(&self, out: &mut W) -> Result<(), PrintError> {
        (**self).write_printable(out)
    }
}

macro_rules! impl_container {
    ($(impl<$($gen:ident $(: $bound:path)?),*> for $ty:ty;)*) => {
        $(
            impl<T: Renderable, $($gen $(: $bound)?),*> Container for $ty {
                type Element = T;

                #[inline]
                fn elements(&self) -> impl Iterator<Item = &T> + '_ {
                    self.iter()
                }
            }

            impl<T: Renderable, $($gen $(: $bound)?),*> Printable for $ty {
                const KIND: PrintKind = PrintKind::Container;

                #[inline]
                fn write_printable<W: Write + ?Sized>(&self, out: &mut W) -> Result<(), PrintError> {
                    render_container(self, out)
                }
            }
        )*
    };
}

impl_container! {
    impl<> for Vec<T>;
    impl<> for VecDeque<T>;
    impl<> for LinkedList<T>;
}

impl<T: Renderable> Container for [T] {
    type Element = T;

    #[inline]
    fn elements(&self) -> impl Iterator<Item = &T> + '_ {
        self.iter()
    }
}

impl<T: Renderable> Printable for [T] {
    const KIND: PrintKind = PrintKind::Container;

    #[inline]
    fn write_printable<W: Write + ?Sized>(&self, out: &mut W) -> Result<(), PrintError> {
        render_container(self, out)
    }
}

impl<T: Renderable, const N: usize> Container for [T; N] {
    type Element = T;

    #[inline]
    fn elements(&self) -> impl Iterator<Item = &T> + '_ {
        self.iter()
    }
}

impl<T: Renderable, const N: usize> Printable for [T; N] {
    const KIND: PrintKind = PrintKind::Container;

    #[inline]
    fn write_printable<W: Write + ?Sized>(&self, out: &mut W) -> Result<(), PrintError> {
        render_container(self, out)
    }
}
