/*
 * This Source Code Form is subject to the terms of the
 * Mozilla Public License, v. 2.0. If a copy of the MPL
 * was not distributed with this file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

//! Quoted strings (single- and multi-line) and escape decoding.
//!
//! Handles both single- and multi-line quoted strings, and the
//! backslash escape table used to decode their contents.

use super::literal;
use crate::{
    error::{internal::ErrorCode, Error, Result},
    lex,
    parser::{BlockLine, Parser},
    reader::LineSource,
};

/// The result of [`Parser::parse_quoted`]: the decoded text, the
/// column just past the closing quote (within `current_line` as
/// it stands on return), and whether the string spanned more
/// than one source line.
pub(super) struct QuotedResult
{
    pub text:      String,
    pub end_pos:   usize,
    pub multiline: bool,
}

impl<R> Parser<R>
where
    R: LineSource,
{
    /// Reads a quoted string opening with .quote at column
    /// .start.
    pub(super) fn parse_quoted(&mut self, start: usize, quote: u8) -> Result<QuotedResult>
    {
        if let Some(close) = find_unescaped_quote(&self.current_line, start + 1, quote)
        {
            let text = unescape_line(&self.current_line[start + 1..close], quote)
                .map_err(|(code, rel)| self.error_at(code, start + 1 + rel))?;

            return Ok(QuotedResult {
                text,
                end_pos: close + 1,
                multiline: false,
            });
        }

        self.parse_quoted_multiline(start, quote)
    }

    fn parse_quoted_multiline(&mut self, quote_col: usize, quote: u8) -> Result<QuotedResult>
    {
        let saved_indent = self.block_indent;
        self.block_indent = quote_col + 1;

        let mut pieces: Vec<(String, usize)> = vec![(
            self.current_line[quote_col + 1..].to_owned(),
            self.line_number,
        )];

        let mut closed = false;

        loop
        {
            match self.read_block_line()?
            {
                BlockLine::Ready =>
                {
                    let strip = self.block_indent.min(self.current_line.len());
                    let body = self.current_line[strip..].to_owned();
                    let line_number = self.line_number;

                    if let Some(close) = find_unescaped_quote(&body, 0, quote)
                    {
                        pieces.push((body[..close].to_owned(), line_number));
                        closed = true;
                        break;
                    }

                    pieces.push((body, line_number));
                },
                BlockLine::EndOfBlock | BlockLine::Eof => break,
            }
        }

        self.block_indent = saved_indent;

        let mut trailing_end_pos = None;

        if !closed
        {
            let mut candidate = String::new();

            if self.input.read_line_inplace(&mut candidate)?
            {
                lex::rtrim(&mut candidate);
                let indent = lex::indent_of(&candidate);

                if indent == quote_col && lex::byte_at(&candidate, quote_col) == Some(quote)
                {
                    closed = true;
                    self.current_line = candidate;
                    self.current_indent = indent;
                    self.line_number = self.input.get_line_number();
                    trailing_end_pos = Some(quote_col + 1);
                }
                else
                {
                    self.input.unread_line(candidate);
                    return Err(self.error_at(ErrorCode::NoClosingQuote, quote_col));
                }
            }
            else
            {
                return Err(self.error_at(ErrorCode::NoClosingQuote, quote_col));
            }
        }

        let mut text_parts = Vec::new();

        for (raw, line_number) in literal::dedent_numbered(pieces)
        {
            if raw.is_empty()
            {
                continue;
            }

            let decoded = unescape_line(&raw, quote)
                .map_err(|(code, rel_pos)| Error::at(code, line_number, rel_pos))?;

            text_parts.push(decoded);
        }

        let text = text_parts.join(" ");

        Ok(QuotedResult {
            text,
            end_pos: trailing_end_pos.unwrap_or(0),
            multiline: true,
        })
    }
}

/// Finds the first occurrence of .quote in .s at or after .from
/// that is not escaped by a preceding backslash.
fn find_unescaped_quote(s: &str, from: usize, quote: u8) -> Option<usize>
{
    let bytes = s.as_bytes();
    let mut i = from;
    let mut escaped = false;

    while i < bytes.len()
    {
        let b = bytes[i];

        if escaped
        {
            escaped = false;
        }
        else if b == b'\\'
        {
            escaped = true;
        }
        else if b == quote
        {
            return Some(i);
        }

        i += 1;
    }

    None
}

/// Decodes the `\` escapes in .text (already delimited between
/// quotes), per the backslash escape table below.
pub(super) fn unescape_line(text: &str, _quote: u8) -> std::result::Result<String, (ErrorCode, usize)>
{
    let bytes = text.as_bytes();
    let mut out = String::with_capacity(text.len());
    let mut i = 0;

    while i < bytes.len()
    {
        if bytes[i] != b'\\'
        {
            let len = utf8_char_len(bytes[i]);
            out.push_str(&text[i..(i + len).min(text.len())]);
            i += len;
            continue;
        }

        if i + 1 >= bytes.len()
        {
            out.push('\\');
            i += 1;
            continue;
        }

        let c = bytes[i + 1];

        match c
        {
            b'\'' | b'"' | b'?' | b'\\' =>
            {
                out.push(c as char);
                i += 2;
            },
            b'a' =>
            {
                out.push('\u{07}');
                i += 2;
            },
            b'b' =>
            {
                out.push('\u{08}');
                i += 2;
            },
            b'f' =>
            {
                out.push('\u{0C}');
                i += 2;
            },
            b'n' =>
            {
                out.push('\n');
                i += 2;
            },
            b'r' =>
            {
                out.push('\r');
                i += 2;
            },
            b't' =>
            {
                out.push('\t');
                i += 2;
            },
            b'v' =>
            {
                out.push('\u{0B}');
                i += 2;
            },
            b'o' =>
            {
                let (value, len) = read_octal(&text[i + 2..], 3).map_err(|e| (e, i))?;
                lex::push_code_point(&mut out, value);
                i += 2 + len;
            },
            b'x' =>
            {
                let (value, len) = read_hex_exact(&text[i + 2..], 2).map_err(|e| (e, i))?;
                lex::push_code_point(&mut out, value);
                i += 2 + len;
            },
            b'u' =>
            {
                let (value, len) = read_hex_exact(&text[i + 2..], 4).map_err(|e| (e, i))?;
                lex::push_code_point(&mut out, value);
                i += 2 + len;
            },
            b'U' =>
            {
                let (value, len) = read_hex_exact(&text[i + 2..], 8).map_err(|e| (e, i))?;
                lex::push_code_point(&mut out, value);
                i += 2 + len;
            },
            _ =>
            {
                out.push('\\');
                let len = utf8_char_len(c);
                out.push_str(&text[i + 1..(i + 1 + len).min(text.len())]);
                i += 1 + len;
            },
        }
    }

    Ok(out)
}

fn read_octal(s: &str, max: usize) -> std::result::Result<(u32, usize), ErrorCode>
{
    let bytes = s.as_bytes();
    let mut n = 0;
    let mut value = 0u32;

    while n < max
    {
        match bytes.get(n)
        {
            Some(&b) if (b'0'..=b'7').contains(&b) =>
            {
                value = value * 8 + (b - b'0') as u32;
                n += 1;
            },
            _ => break,
        }
    }

    if n == 0
    {
        match bytes.first()
        {
            None => Err(ErrorCode::IncompleteOctal),
            Some(_) => Err(ErrorCode::BadOctal),
        }
    }
    else
    {
        Ok((value, n))
    }
}

fn read_hex_exact(s: &str, count: usize) -> std::result::Result<(u32, usize), ErrorCode>
{
    let bytes = s.as_bytes();
    let mut value = 0u32;

    for i in 0..count
    {
        match bytes.get(i)
        {
            None => return Err(ErrorCode::IncompleteHex),
            Some(&b) if b.is_ascii_hexdigit() =>
            {
                value = value * 16 + lex::digit_value(b, 16).expect("checked is_ascii_hexdigit");
            },
            Some(_) => return Err(ErrorCode::BadHex),
        }
    }

    Ok((value, count))
}

fn utf8_char_len(b: u8) -> usize
{
    if b & 0x80 == 0
    {
        1
    }
    else if b & 0xE0 == 0xC0
    {
        2
    }
    else if b & 0xF0 == 0xE0
    {
        3
    }
    else if b & 0xF8 == 0xF0
    {
        4
    }
    else
    {
        1
    }
}

#[cfg(test)]
mod tests
{
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn simple_escapes_decode()
    {
        assert_eq!(unescape_line(r"a\nb\t", b'"').unwrap(), "a\nb\t");
    }

    #[test]
    fn hex_escape_decodes_byte()
    {
        assert_eq!(unescape_line(r"\x41", b'"').unwrap(), "A");
    }

    #[test]
    fn unicode_escape_decodes_code_point()
    {
        assert_eq!(unescape_line(r"A", b'"').unwrap(), "A");
        assert_eq!(unescape_line(r"\U00000041", b'"').unwrap(), "A");
    }

    #[test]
    fn octal_escape_accepts_one_to_three_digits()
    {
        assert_eq!(unescape_line(r"\o101", b'"').unwrap(), "A");
        assert_eq!(unescape_line(r"\o9", b'"').unwrap_err().0, ErrorCode::BadOctal);
    }

    #[test]
    fn unrecognized_escape_emits_verbatim()
    {
        assert_eq!(unescape_line(r"\q", b'"').unwrap(), r"\q");
    }

    #[test]
    fn trailing_backslash_emitted_literally()
    {
        assert_eq!(unescape_line(r"ab\", b'"').unwrap(), r"ab\");
    }

    #[test]
    fn find_unescaped_quote_skips_escaped()
    {
        assert_eq!(find_unescaped_quote(r#"a\"b"c"#, 0, b'"'), Some(4));
    }
}
