/*
 * This Source Code Form is subject to the terms of the
 * Mozilla Public License, v. 2.0. If a copy of the MPL
 * was not distributed with this file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

//! Contains an implementation of [`LineSource`](super::LineSource)
//! for borrowed UTF8 slices (`&str`s).

use super::{error::ReaderResult, private, LineSource};

/// A [`LineSource`] over an in-memory `&str`.
///
/// No internal copies are made of the remaining input; only
/// the (at most one) pushed-back line is owned.
#[derive(Debug, Clone)]
pub struct StrLines<'de>
{
    remaining:   &'de str,
    pending:     Option<String>,
    line_number: usize,
}

impl<'de> StrLines<'de>
{
    /// Instantiate a new [`StrLines`] over the given UTF8
    /// slice.
    pub fn new(data: &'de str) -> Self
    {
        Self {
            remaining: data,
            pending: None,
            line_number: 0,
        }
    }
}

impl LineSource for StrLines<'_>
{
    fn read_line_inplace(&mut self, buf: &mut String) -> ReaderResult<bool>
    {
        if let Some(pending) = self.pending.take()
        {
            buf.clear();
            buf.push_str(&pending);
            self.line_number += 1;

            return Ok(true);
        }

        if self.remaining.is_empty()
        {
            return Ok(false);
        }

        let (line, rest) = split_first_line(self.remaining);

        buf.clear();
        buf.push_str(line);
        self.remaining = rest;
        self.line_number += 1;

        Ok(true)
    }

    fn unread_line(&mut self, line: String)
    {
        debug_assert!(self.pending.is_none(), "at most one level of push-back");

        self.pending = Some(line);
        self.line_number -= 1;
    }

    fn get_line_number(&self) -> usize
    {
        self.line_number
    }
}

impl private::Sealed for StrLines<'_> {}

/// Splits .data at its first line break, tolerating both `\n`
/// and `\r\n`. If no line break is found, the whole of .data
/// is the line, and the remainder is empty.
fn split_first_line(data: &str) -> (&str, &str)
{
    match data.find('\n')
    {
        Some(idx) =>
        {
            let mut line = &data[..idx];
            let rest = &data[idx + 1..];

            if line.ends_with('\r')
            {
                line = &line[..line.len() - 1];
            }

            (line, rest)
        },
        None => (data, ""),
    }
}

#[cfg(test)]
mod tests
{
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::reader::test_util::drain_lines;

    #[test]
    fn splits_on_lf()
    {
        let mut src = StrLines::new("a\nb\nc");

        drain_lines(&mut src, &["a", "b", "c"]);
    }

    #[test]
    fn splits_on_crlf()
    {
        let mut src = StrLines::new("a\r\nb\r\n");

        drain_lines(&mut src, &["a", "b"]);
    }

    #[test]
    fn empty_input_is_immediate_eof()
    {
        let mut src = StrLines::new("");
        let mut buf = String::new();

        assert_eq!(src.read_line_inplace(&mut buf).unwrap(), false);
    }

    #[test]
    fn push_back_is_replayed()
    {
        let mut src = StrLines::new("a\nb\nc");
        let mut buf = String::new();

        src.read_line_inplace(&mut buf).unwrap();
        assert_eq!(buf, "a");
        assert_eq!(src.get_line_number(), 1);

        src.read_line_inplace(&mut buf).unwrap();
        assert_eq!(buf, "b");
        assert_eq!(src.get_line_number(), 2);

        src.unread_line("b".to_owned());
        assert_eq!(src.get_line_number(), 1);

        src.read_line_inplace(&mut buf).unwrap();
        assert_eq!(buf, "b");
        assert_eq!(src.get_line_number(), 2);

        src.read_line_inplace(&mut buf).unwrap();
        assert_eq!(buf, "c");
    }

    #[test]
    fn trailing_empty_line_is_preserved()
    {
        let mut src = StrLines::new("a\n\nb");

        drain_lines(&mut src, &["a", "", "b"]);
    }
}
