/*
 * This Source Code Form is subject to the terms of the
 * Mozilla Public License, v. 2.0. If a copy of the MPL
 * was not distributed with this file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

//! The map collection parser.

use super::{BlockLine, KeyContext, Parser};
use crate::{
    error::{internal::ErrorCode, Result},
    lex,
    reader::LineSource,
    value::{Map, Value},
};

impl<R> Parser<R>
where
    R: LineSource,
{
    /// Parses a map whose first key, .first_key, has already
    /// been parsed (its line started at .key_col), with
    /// .value_pos pointing just past its key-value separator.
    pub(super) fn parse_map(
        &mut self,
        first_key: Value,
        key_col: usize,
        value_pos: usize,
    ) -> Result<Value>
    {
        let mut map = Map::new();
        let mut key = first_key;
        let mut value_pos = value_pos;

        loop
        {
            let value = self.parse_collection_value(value_pos)?;

            map.insert(key, value);

            match self.read_block_line()?
            {
                BlockLine::EndOfBlock | BlockLine::Eof => break,
                BlockLine::Ready => {},
            }

            if self.current_indent != key_col
            {
                return Err(self.error_at(ErrorCode::BadIndentationOfMapKey, self.current_indent));
            }

            let parsed = self.parse_value(KeyContext::Key)?;

            key = parsed.value;
            value_pos = parsed.value_pos;
        }

        Ok(Value::Map(map))
    }

    fn parse_collection_value(&mut self, value_pos: usize) -> Result<Value>
    {
        if lex::rest_is_blank_or_comment(&self.current_line, value_pos)
        {
            self.parse_nested_block_from_next_line(Self::parse_collection_item)
        }
        else
        {
            self.parse_nested_block(value_pos, Self::parse_collection_item)
        }
    }
}
