/*
 * This Source Code Form is subject to the terms of the
 * Mozilla Public License, v. 2.0. If a copy of the MPL
 * was not distributed with this file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

//! Scalar sub-parsers: the three block-folding policies
//! (`raw`/`literal`/`folded`), quoted strings, and numbers.

pub(super) mod literal;
pub(super) mod number;
pub(super) mod quoted;

pub(super) use quoted::QuotedResult;

use super::Parser;
use crate::{error::Result, reader::LineSource, value::Value};

impl<R> Parser<R>
where
    R: LineSource,
{
    /// `raw`: collect the block verbatim, no dedent.
    pub(super) fn parse_raw(&mut self) -> Result<Value>
    {
        let lines = self.read_block()?;

        Ok(Value::String(literal::join_raw(lines)))
    }

    /// `literal`: collect the block, dedent, drop trailing empty
    /// lines, preserve line breaks.
    pub(super) fn parse_literal(&mut self) -> Result<Value>
    {
        let lines = literal::dedent(self.read_block()?);

        Ok(Value::String(literal::join_literal(lines)))
    }

    /// `folded`: collect the block, dedent, drop all empty
    /// lines, join with single spaces.
    pub(super) fn parse_folded(&mut self) -> Result<Value>
    {
        let lines = literal::dedent(self.read_block()?);

        Ok(Value::String(literal::join_folded(lines)))
    }
}
