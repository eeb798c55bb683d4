/*
 * This Source Code Form is subject to the terms of the
 * Mozilla Public License, v. 2.0. If a copy of the MPL
 * was not distributed with this file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

//! Contains an implementation of [`LineSource`](super::LineSource)
//! over any [`std::io::Read`].

use std::io::{self, BufRead, BufReader};

use super::{error::ReaderResult, private, LineSource};

/// A [`LineSource`] over an owned [`std::io::Read`] source,
/// buffered internally via [`std::io::BufReader`].
pub struct BufLines<R>
{
    inner:       BufReader<R>,
    pending:     Option<String>,
    line_number: usize,
}

impl<R> BufLines<R>
where
    R: io::Read,
{
    /// Instantiate a new [`BufLines`] over the given source.
    pub fn new(src: R) -> Self
    {
        Self {
            inner: BufReader::new(src),
            pending: None,
            line_number: 0,
        }
    }
}

impl<R> LineSource for BufLines<R>
where
    R: io::Read,
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

        let mut raw = String::new();
        let read = self.inner.read_line(&mut raw)?;

        if read == 0
        {
            return Ok(false);
        }

        if raw.ends_with('\n')
        {
            raw.pop();

            if raw.ends_with('\r')
            {
                raw.pop();
            }
        }

        buf.clear();
        buf.push_str(&raw);
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

impl<R> private::Sealed for BufLines<R> where R: io::Read {}

#[cfg(test)]
mod tests
{
    use std::io::Cursor;

    use pretty_assertions::assert_eq;

    use super::*;
    use crate::reader::test_util::drain_lines;

    fn of(data: &str) -> BufLines<Cursor<Vec<u8>>>
    {
        BufLines::new(Cursor::new(data.as_bytes().to_vec()))
    }

    #[test]
    fn splits_on_lf()
    {
        let mut src = of("a\nb\nc");

        drain_lines(&mut src, &["a", "b", "c"]);
    }

    #[test]
    fn splits_on_crlf()
    {
        let mut src = of("a\r\nb\r\n");

        drain_lines(&mut src, &["a", "b"]);
    }

    #[test]
    fn push_back_is_replayed()
    {
        let mut src = of("a\nb\nc");
        let mut buf = String::new();

        src.read_line_inplace(&mut buf).unwrap();
        src.read_line_inplace(&mut buf).unwrap();
        assert_eq!(buf, "b");

        src.unread_line("b".to_owned());

        src.read_line_inplace(&mut buf).unwrap();
        assert_eq!(buf, "b");
    }
}
