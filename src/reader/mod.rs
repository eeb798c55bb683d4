/*
 * This Source Code Form is subject to the terms of the
 * Mozilla Public License, v. 2.0. If a copy of the MPL
 * was not distributed with this file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

//! The module contains the adapters that feed raw input, one
//! line at a time, to a [`Parser`](crate::parser::Parser).
//!
//! This behavior is defined by the [`LineSource`] trait, which
//! is sealed, and cannot be implemented outside of this
//! library. There are two conversions that are supported,
//! each with a top level function that handles the conversion:
//!
//! - `&str` => [`from_str()`]
//! - `T: std::io::Read` => [`from_read()`]
//!
//! The core parser itself only depends on the [`LineSource`]
//! trait - these are merely the two concrete implementations
//! this crate ships, following the same pattern as the
//! `Read`/`from_utf8`/`from_read` split elsewhere in this
//! family of parsers.

pub mod borrow;
pub mod owned;

pub(crate) mod error;

use std::io;

pub use self::{borrow::StrLines, error::ReaderResult, owned::BufLines};

/// Instantiate a new [`LineSource`] over the given UTF8
/// string slice.
///
/// ## Examples
///
/// ```rust
/// use amw::reader::from_str;
///
/// let mut lines = from_str("greeting: hello\ncount: 3");
/// ```
pub fn from_str(data: &str) -> StrLines<'_>
{
    StrLines::new(data)
}

/// Instantiate a new [`LineSource`] over the given
/// [`std::io::Read`] source.
///
/// ## Examples
///
/// ```no_run
/// use std::fs::File;
///
/// use amw::reader::from_read;
///
/// let file = File::open("config.amw")?;
/// let mut lines = from_read(file);
/// # Ok::<(), std::io::Error>(())
/// ```
pub fn from_read<R>(src: R) -> BufLines<R>
where
    R: io::Read,
{
    BufLines::new(src)
}

/// Sealed interface over one-line-at-a-time input, with
/// one-line push-back.
///
/// Method names mirror the line-reader contract this crate
/// expects of a host-supplied adapter exactly, so that a host
/// implementing its own (rather than using
/// [`StrLines`]/[`BufLines`]) has a 1:1 mapping back to the
/// contract it is satisfying.
pub trait LineSource: private::Sealed
{
    /// Called once, before the first line is read. The default
    /// implementation does nothing; adapters that need to
    /// prime a buffer may override it.
    fn start_read_lines(&mut self) -> ReaderResult<()>
    {
        Ok(())
    }

    /// Read the next line into .buf, overwriting its previous
    /// contents, without the line terminator.
    ///
    /// Returns `Ok(true)` if a line was read, `Ok(false)` at
    /// EOF.
    fn read_line_inplace(&mut self, buf: &mut String) -> ReaderResult<bool>;

    /// Push the given line back, to be returned again by the
    /// next call to [`read_line_inplace`](Self::read_line_inplace).
    ///
    /// Implementors need only support one level of push-back;
    /// the core never calls this twice without an intervening
    /// read.
    fn unread_line(&mut self, line: String);

    /// The 1-based line number of the most recently read line.
    fn get_line_number(&self) -> usize;
}

mod private
{
    pub trait Sealed {}
}

#[cfg(test)]
pub(crate) mod test_util
{
    use super::*;

    /// Drains every line out of .src, asserting it matches
    /// .expected exactly, including order.
    pub(crate) fn drain_lines<T: LineSource>(src: &mut T, expected: &[&str])
    {
        let mut buf = String::new();

        for want in expected
        {
            let got = src.read_line_inplace(&mut buf).expect("no I/O error");

            assert!(got, "source exhausted before {:?}", want);
            assert_eq!(&buf, want);
        }

        assert!(
            !src.read_line_inplace(&mut buf).expect("no I/O error"),
            "source had more lines than expected"
        );
    }
}
