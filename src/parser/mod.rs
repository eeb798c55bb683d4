/*
 * This Source Code Form is subject to the terms of the
 * Mozilla Public License, v. 2.0. If a copy of the MPL
 * was not distributed with this file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

//! The block parser: reads one line at a time from a
//! [`LineSource`], tracks indentation to delimit nested blocks,
//! and dispatches on the shape of each line to build a
//! [`Value`] tree.
//!
//! This is a recursive-descent parser, not a generator or
//! coroutine - nesting is plain call-stack recursion that saves
//! and restores `block_indent`/`block_level` around each
//! recursive call. A `Parser` is created, consumes its input
//! once, and is then dropped; it is not reentrant.

mod block;
mod dispatch;
mod list;
mod map;
mod registry;
mod scalar;

#[cfg(test)]
mod tests;

use std::rc::Rc;

use log::trace;

use crate::{
    error::{internal::ErrorCode, Error, Result},
    reader::LineSource,
    value::Value,
};

pub(crate) use self::registry::ConversionHandler;
use self::registry::ConversionRegistry;

/// Recursion cap on nested blocks.
pub const DEFAULT_MAX_BLOCK_LEVEL: usize = 100;

/// Outcome of [`Parser::read_block_line`]: either the next line
/// of the current block, or one of the two control sentinels.
///
/// Encoded as an ordinary enum rather
/// than as an exception the dispatcher would need to catch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum BlockLine
{
    Ready,
    EndOfBlock,
    Eof,
}

/// Whether a value being parsed is expected to end with a
/// key-value separator (it is a map key) or not (it is an
/// ordinary value).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum KeyContext
{
    Value,
    Key,
}

/// The result of [`Parser::parse_value`]: the value itself, plus
/// (only meaningful under [`KeyContext::Key`]) the column
/// immediately after the key-value separator that ended it.
pub(crate) struct ParsedValue
{
    pub value:     Value,
    pub value_pos: usize,
}

impl ParsedValue
{
    fn plain(value: Value) -> Self
    {
        Self { value, value_pos: 0 }
    }

    fn key(value: Value, value_pos: usize) -> Self
    {
        Self { value, value_pos }
    }
}

/// Parses one document out of a [`LineSource`].
///
/// Owns all state for a single parse: the current line, the
/// block-indent discipline, and the conversion-specifier
/// registry. See the crate root docs for the public entry
/// points built on top of this type.
pub struct Parser<R>
{
    input: R,

    current_line:   String,
    current_indent: usize,
    line_number:    usize,

    block_indent:     usize,
    block_level:      usize,
    max_block_level:  usize,
    skip_comments:    bool,
    eof:              bool,

    registry: ConversionRegistry<R>,
}

/// Parses a whole document out of .input.
///
/// Enforces that no non-comment data follows the top-level
/// value; empty input yields an `UnexpectedEof` error.
pub fn parse<R>(input: R) -> Result<Value>
where
    R: LineSource,
{
    create_parser(input).parse()
}

/// Creates a [`Parser`] without immediately running it, so a
/// caller can register custom specifiers first via
/// [`Parser::set_custom_parser`].
pub fn create_parser<R>(input: R) -> Parser<R>
where
    R: LineSource,
{
    Parser::new(input)
}

impl<R> Parser<R>
where
    R: LineSource,
{
    fn new(input: R) -> Self
    {
        Self {
            input,
            current_line: String::new(),
            current_indent: 0,
            line_number: 0,
            block_indent: 0,
            block_level: 1,
            max_block_level: DEFAULT_MAX_BLOCK_LEVEL,
            skip_comments: true,
            eof: false,
            registry: ConversionRegistry::with_builtins(),
        }
    }

    /// Overrides the recursion cap from its default of
    /// [`DEFAULT_MAX_BLOCK_LEVEL`].
    pub fn set_max_block_level(&mut self, max: usize)
    {
        self.max_block_level = max;
    }

    /// Registers (or overwrites) a conversion specifier handler.
    ///
    /// Built-in entries (`raw`, `literal`, `folded`, `isodate`,
    /// `timestamp`, `json`) may be overridden this way.
    pub fn set_custom_parser<F>(&mut self, specifier: &str, f: F)
    where
        F: Fn(&mut Parser<R>) -> Result<Value> + 'static,
    {
        self.registry.set(specifier, Rc::new(f));
    }

    /// Runs the parse to completion.
    pub fn parse(&mut self) -> Result<Value>
    {
        self.input.start_read_lines()?;

        match self.read_block_line()?
        {
            BlockLine::Ready => {},
            BlockLine::EndOfBlock | BlockLine::Eof =>
            {
                return Err(Error::bare(ErrorCode::UnexpectedEof))
            },
        }

        let root = self.parse_value(KeyContext::Value)?.value;

        match self.read_block_line()?
        {
            BlockLine::Ready => Err(self.error_here(ErrorCode::ExtraDataAfterParsedValue)),
            BlockLine::EndOfBlock | BlockLine::Eof => Ok(root),
        }
    }

    fn error_at(&self, code: ErrorCode, column: usize) -> Error
    {
        trace!("parse error {:?} at line {} column {}", code, self.line_number, column);

        Error::at(code, self.line_number, column)
    }

    /// Shorthand for an error at the current line's indent
    /// column - used when the offending position is "this
    /// line", not a specific character within it.
    fn error_here(&self, code: ErrorCode) -> Error
    {
        self.error_at(code, self.current_indent)
    }

    /// `current_indent` if
    /// it exceeds `block_indent` (a nested value sharing its
    /// parent's line), otherwise the first non-space at or after
    /// `block_indent`.
    fn start_position(&self) -> usize
    {
        if self.current_indent > self.block_indent
        {
            self.current_indent
        }
        else
        {
            crate::lex::skip_spaces(&self.current_line, self.block_indent)
        }
    }
}
