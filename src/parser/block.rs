/*
 * This Source Code Form is subject to the terms of the
 * Mozilla Public License, v. 2.0. If a copy of the MPL
 * was not distributed with this file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

//! The block-indent discipline: `read_block_line`,
//! `read_block`, and the two nested-block entry points.
//!
//! The comment/blank-line skipping and unindent-detection
//! rules these implement are the core's block-indent discipline.

use std::mem;

use log::trace;

use super::{BlockLine, Parser};
use crate::{
    error::{internal::ErrorCode, Result},
    lex,
    reader::LineSource,
};

impl<R> Parser<R>
where
    R: LineSource,
{
    /// Returns the next line belonging to the current block, or
    /// a control sentinel.
    ///
    /// A loop, not recursion over one line at a time - comment
    /// and blank runs of unbounded length would otherwise grow
    /// the call stack for no reason.
    pub(super) fn read_block_line(&mut self) -> Result<BlockLine>
    {
        loop
        {
            if self.eof
            {
                return Ok(if self.block_level > 0
                {
                    BlockLine::EndOfBlock
                }
                else
                {
                    BlockLine::Eof
                });
            }

            let mut raw = String::new();

            if !self.input.read_line_inplace(&mut raw)?
            {
                self.eof = true;
                continue;
            }

            lex::rtrim(&mut raw);
            let indent = lex::indent_of(&raw);
            let line_number = self.input.get_line_number();

            if self.skip_comments
            {
                if raw.is_empty() || lex::is_comment_line(&raw)
                {
                    continue;
                }

                self.skip_comments = false;
            }

            self.current_line = raw;
            self.current_indent = indent;
            self.line_number = line_number;

            if self.current_line.is_empty()
            {
                return Ok(BlockLine::Ready);
            }

            if self.current_indent >= self.block_indent
            {
                return Ok(BlockLine::Ready);
            }

            if lex::is_comment_line(&self.current_line)
            {
                continue;
            }

            trace!(
                "unindent at line {}: indent {} < block_indent {}",
                self.line_number, self.current_indent, self.block_indent
            );

            self.input.unread_line(mem::take(&mut self.current_line));
            self.current_line.clear();

            return Ok(BlockLine::EndOfBlock);
        }
    }

    /// Collects every line of the current block, each with its
    /// first `block_indent` characters removed. The line already
    /// positioned in `current_line` (by whichever caller set up
    /// this block) is the first line collected.
    pub(super) fn read_block(&mut self) -> Result<Vec<String>>
    {
        let mut lines = Vec::new();

        loop
        {
            let strip = self.block_indent.min(self.current_line.len());
            lines.push(self.current_line[strip..].to_owned());

            match self.read_block_line()?
            {
                BlockLine::Ready => continue,
                BlockLine::EndOfBlock | BlockLine::Eof => break,
            }
        }

        Ok(lines)
    }

    /// Sets `block_indent := block_pos`, increments
    /// `block_level`, runs .f, then restores both - regardless of
    /// whether .f succeeded.
    pub(super) fn parse_nested_block<T>(
        &mut self,
        block_pos: usize,
        f: impl FnOnce(&mut Self) -> Result<T>,
    ) -> Result<T>
    {
        if self.block_level >= self.max_block_level
        {
            return Err(self.error_here(ErrorCode::TooManyNestedBlocks));
        }

        let saved_indent = self.block_indent;
        let saved_level = self.block_level;

        self.block_indent = block_pos;
        self.block_level += 1;

        let result = f(self);

        self.block_indent = saved_indent;
        self.block_level = saved_level;

        result
    }

    /// Used when a structural token (list hyphen, map colon,
    /// conversion specifier) ends its line with nothing after
    /// it: the nested block begins on the next line, one column
    /// deeper than the parent.
    pub(super) fn parse_nested_block_from_next_line<T>(
        &mut self,
        f: impl FnOnce(&mut Self) -> Result<T>,
    ) -> Result<T>
    {
        let original = self.block_indent;
        let bumped = original + 1;

        self.block_indent = bumped;
        self.skip_comments = true;
        let outcome = self.read_block_line();
        self.block_indent = original;

        match outcome?
        {
            BlockLine::Ready => self.parse_nested_block(bumped, f),
            BlockLine::EndOfBlock | BlockLine::Eof => Err(self.error_here(ErrorCode::EmptyBlock)),
        }
    }
}
