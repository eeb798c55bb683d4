/*
 * This Source Code Form is subject to the terms of the
 * Mozilla Public License, v. 2.0. If a copy of the MPL
 * was not distributed with this file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

//! The value dispatcher (`parse_value`) and its immediate
//! helpers: the dispatch table on the first character of a
//! value, the key-value-separator test, and
//! `parse_literal_string_or_map`.

use super::{registry::ConversionHandler, scalar, KeyContext, ParsedValue, Parser};
use crate::{
    error::{internal::ErrorCode, Result},
    lex,
    reader::LineSource,
    value::Value,
};

impl<R> Parser<R>
where
    R: LineSource,
{
    /// Classifies `current_line[start_pos]` and produces a
    /// value, per the dispatch table below.
    pub(super) fn parse_value(&mut self, ctx: KeyContext) -> Result<ParsedValue>
    {
        let start = self.start_position();

        match lex::byte_at(&self.current_line, start)
        {
            Some(b':') => self.dispatch_colon(start, ctx),
            Some(b'-') => self.dispatch_hyphen(start, ctx),
            Some(b'"') | Some(b'\'') => self.dispatch_quote(start, ctx),
            Some(b'+') if self.digit_follows(start + 1) =>
            {
                self.dispatch_number(start, start + 1, 1, ctx)
            },
            Some(b) if lex::is_ascii_digit(b) => self.dispatch_number(start, start, 1, ctx),
            _ if self.is_keyword_here(start, "null") =>
            {
                self.finish_scalar(Value::Null, start, start + 4, ctx, ErrorCode::BadCharacterEncountered)
            },
            _ if self.is_keyword_here(start, "true") =>
            {
                self.finish_scalar(Value::Bool(true), start, start + 4, ctx, ErrorCode::BadCharacterEncountered)
            },
            _ if self.is_keyword_here(start, "false") =>
            {
                self.finish_scalar(Value::Bool(false), start, start + 5, ctx, ErrorCode::BadCharacterEncountered)
            },
            _ => self.parse_literal_string_or_map(start, ctx),
        }
    }

    fn digit_follows(&self, pos: usize) -> bool
    {
        lex::byte_at(&self.current_line, pos).map_or(false, lex::is_ascii_digit)
    }

    /// Whether .kw appears at .start, bounded by end-of-value -
    /// so e.g. `nullable` is never mistaken for the `null`
    /// keyword.
    fn is_keyword_here(&self, start: usize, kw: &str) -> bool
    {
        let line = &self.current_line;

        line.len() >= start + kw.len()
            && &line[start..start + kw.len()] == kw
            && ends_value(line, start + kw.len())
    }

    fn dispatch_colon(&mut self, start: usize, ctx: KeyContext) -> Result<ParsedValue>
    {
        if ctx == KeyContext::Key
        {
            return Err(self.error_at(ErrorCode::BadCharacterEncountered, start));
        }

        let recognized = parse_specifier_token(&self.current_line, start)
            .filter(|(name, _)| self.registry.contains(name))
            .map(|(name, after)| (name.to_owned(), after));

        let value = match recognized
        {
            Some((name, after)) =>
            {
                if lex::rest_is_blank_or_comment(&self.current_line, after)
                {
                    self.parse_nested_block_from_next_line(move |p| p.run_specifier(&name))?
                }
                else
                {
                    let value_pos = lex::skip_spaces(&self.current_line, after);
                    self.parse_nested_block(value_pos, move |p| p.run_specifier(&name))?
                }
            },
            None => self.parse_literal()?,
        };

        Ok(ParsedValue::plain(value))
    }

    fn run_specifier(&mut self, name: &str) -> Result<Value>
    {
        match self.registry.get(name)
        {
            Some(ConversionHandler::Raw) => self.parse_raw(),
            Some(ConversionHandler::Literal) => self.parse_literal(),
            Some(ConversionHandler::Folded) => self.parse_folded(),
            Some(ConversionHandler::NotImplemented(name)) =>
            {
                Err(self.error_here(ErrorCode::NotImplemented(name)))
            },
            Some(ConversionHandler::Custom(f)) => f(self),
            None => unreachable!("run_specifier only called for a name already found in the registry"),
        }
    }

    fn dispatch_hyphen(&mut self, start: usize, ctx: KeyContext) -> Result<ParsedValue>
    {
        match lex::byte_at(&self.current_line, start + 1)
        {
            Some(b) if lex::is_ascii_digit(b) => self.dispatch_number(start, start + 1, -1, ctx),
            None => self.dispatch_list(start, ctx),
            Some(b) if lex::is_space_byte(b) => self.dispatch_list(start, ctx),
            _ => self.parse_literal_string_or_map(start, ctx),
        }
    }

    fn dispatch_list(&mut self, start: usize, ctx: KeyContext) -> Result<ParsedValue>
    {
        if ctx == KeyContext::Key
        {
            return Err(self.error_at(ErrorCode::BadCharacterEncountered, start));
        }

        self.parse_list(start).map(ParsedValue::plain)
    }

    fn dispatch_quote(&mut self, start: usize, ctx: KeyContext) -> Result<ParsedValue>
    {
        let quote = lex::byte_at(&self.current_line, start).expect("dispatched on a quote byte");

        let result = self.parse_quoted(start, quote)?;

        if result.multiline && ctx == KeyContext::Key
        {
            return Err(self.error_at(ErrorCode::BadCharacterEncountered, start));
        }

        self.finish_scalar(
            Value::String(result.text),
            start,
            result.end_pos,
            ctx,
            ErrorCode::BadCharacterAfterQuotedString,
        )
    }

    fn dispatch_number(
        &mut self,
        key_start: usize,
        digit_start: usize,
        sign: i32,
        ctx: KeyContext,
    ) -> Result<ParsedValue>
    {
        let (value, end_pos) = scalar::number::parse_number(&self.current_line, digit_start, sign)
            .map_err(|(code, pos)| self.error_at(code, pos))?;

        self.finish_scalar(value, key_start, end_pos, ctx, ErrorCode::BadCharacterEncountered)
    }

    /// Runs after every non-collection scalar: skips spaces from
    /// .end_pos, then decides whether the scalar just parsed is
    /// a standalone value, the first key of a map, or (when
    /// .ctx is `Key`) the key itself. .bad_trailing is the error
    /// code reported for junk after the scalar that isn't a
    /// separator, comment, or end of line - callers can report it
    /// more precisely than the generic "bad character" case.
    fn finish_scalar(
        &mut self,
        scalar: Value,
        key_start: usize,
        end_pos: usize,
        ctx: KeyContext,
        bad_trailing: ErrorCode,
    ) -> Result<ParsedValue>
    {
        let pos = lex::skip_spaces(&self.current_line, end_pos);

        match lex::byte_at(&self.current_line, pos)
        {
            Some(b':') if is_kv_separator(&self.current_line, pos) => match ctx
            {
                KeyContext::Key => Ok(ParsedValue::key(scalar, pos + 1)),
                KeyContext::Value => self.parse_map(scalar, key_start, pos + 1),
            },
            None | Some(b'#') if ctx == KeyContext::Value =>
            {
                self.read_block_line()?;
                Ok(ParsedValue::plain(scalar))
            },
            None | Some(b'#') => Err(self.error_at(ErrorCode::MapKeyExpected, pos)),
            _ => Err(self.error_at(bad_trailing, pos)),
        }
    }

    /// Looks for the first key-value-separator `:` at or after
    /// .start in the current line. If found, the prefix becomes
    /// the first key of a map; otherwise the whole block is a
    /// literal string.
    pub(super) fn parse_literal_string_or_map(
        &mut self,
        start: usize,
        ctx: KeyContext,
    ) -> Result<ParsedValue>
    {
        match find_separator_colon(&self.current_line, start)
        {
            Some(colon) =>
            {
                let key_text = self.current_line[start..colon].trim_end_matches(' ').to_owned();
                let key = Value::String(key_text);

                match ctx
                {
                    KeyContext::Key => Ok(ParsedValue::key(key, colon + 1)),
                    KeyContext::Value => self.parse_map(key, start, colon + 1),
                }
            },
            None =>
            {
                let value = self.parse_literal()?;
                Ok(ParsedValue::plain(value))
            },
        }
    }
}

/// Tries to parse a `:name:` specifier token starting at the
/// `:` at .at. Returns the name and the position just past the
/// closing colon.
pub(super) fn parse_specifier_token(line: &str, at: usize) -> Option<(&str, usize)>
{
    if lex::byte_at(line, at) != Some(b':')
    {
        return None;
    }

    let name_start = at + 1;
    let rest = line.get(name_start..)?;
    let close = rest.find(':')?;

    if close == 0
    {
        return None;
    }

    let name = &rest[..close];

    if name.contains(' ') || name.contains('\t')
    {
        return None;
    }

    Some((name, name_start + close + 1))
}

/// `:` at .p qualifies as a key-value
/// separator when followed by end-of-line, whitespace, or
/// another specifier token (`::name:`).
pub(super) fn is_kv_separator(line: &str, p: usize) -> bool
{
    match lex::byte_at(line, p + 1)
    {
        None => true,
        Some(b) if lex::is_space_byte(b) => true,
        Some(b':') => parse_specifier_token(line, p + 1).is_some(),
        _ => false,
    }
}

/// The general "end of value" test used for
/// keyword matching: end of line, whitespace, `#`, or a
/// qualifying `:`.
fn ends_value(line: &str, pos: usize) -> bool
{
    match lex::byte_at(line, pos)
    {
        None => true,
        Some(b) if lex::is_space_byte(b) => true,
        Some(b'#') => true,
        Some(b':') => is_kv_separator(line, pos),
        _ => false,
    }
}

/// Scans .line for the first `:` at or after .from that
/// qualifies as a key-value separator.
fn find_separator_colon(line: &str, from: usize) -> Option<usize>
{
    let bytes = line.as_bytes();
    let mut i = from;

    while i < bytes.len()
    {
        if bytes[i] == b':' && is_kv_separator(line, i)
        {
            return Some(i);
        }

        i += 1;
    }

    None
}
