/*
 * This Source Code Form is subject to the terms of the
 * Mozilla Public License, v. 2.0. If a copy of the MPL
 * was not distributed with this file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

//! The list collection parser.

use super::{BlockLine, KeyContext, Parser};
use crate::{error::{internal::ErrorCode, Result}, lex, reader::LineSource, value::Value};

impl<R> Parser<R>
where
    R: LineSource,
{
    /// Parses a list whose items all begin with `-` at .start.
    ///
    /// Preconditions: `current_line` is already positioned at
    /// the first item's line, with `-` at .start.
    pub(super) fn parse_list(&mut self, start: usize) -> Result<Value>
    {
        let mut items = Vec::new();

        loop
        {
            if lex::byte_at(&self.current_line, start) != Some(b'-')
            {
                return Err(self.error_at(ErrorCode::BadListItem, start));
            }

            match lex::byte_at(&self.current_line, start + 1)
            {
                None => {},
                Some(b) if lex::is_space_byte(b) => {},
                _ => return Err(self.error_at(ErrorCode::BadListItem, start + 1)),
            }

            let item = if lex::rest_is_blank_or_comment(&self.current_line, start + 1)
            {
                self.parse_nested_block_from_next_line(Self::parse_collection_item)?
            }
            else
            {
                self.parse_nested_block(start + 2, Self::parse_collection_item)?
            };

            items.push(item);

            match self.read_block_line()?
            {
                BlockLine::EndOfBlock | BlockLine::Eof => break,
                BlockLine::Ready => {},
            }

            if self.current_indent != start
            {
                return Err(self.error_at(ErrorCode::BadIndentationOfListItem, self.current_indent));
            }
        }

        Ok(Value::List(items))
    }

    pub(super) fn parse_collection_item(&mut self) -> Result<Value>
    {
        self.parse_value(KeyContext::Value).map(|pv| pv.value)
    }
}
