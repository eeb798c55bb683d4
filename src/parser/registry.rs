/*
 * This Source Code Form is subject to the terms of the
 * Mozilla Public License, v. 2.0. If a copy of the MPL
 * was not distributed with this file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

//! The conversion-specifier registry: maps a specifier name to
//! the block-parser that handles it.

use std::{collections::HashMap, rc::Rc};

use crate::{error::Result, reader::LineSource, value::Value};

/// A single registry entry.
///
/// The three built-ins that have a real implementation dispatch
/// straight to their scalar sub-parser, with no indirection
/// through a boxed closure; the three optional stubs carry their
/// own name for the `NotImplemented` error; `Custom` is how a
/// host overrides or extends the registry.
pub(crate) enum ConversionHandler<R>
{
    Raw,
    Literal,
    Folded,
    NotImplemented(&'static str),
    Custom(Rc<dyn Fn(&mut super::Parser<R>) -> Result<Value>>),
}

impl<R> Clone for ConversionHandler<R>
{
    fn clone(&self) -> Self
    {
        match self
        {
            ConversionHandler::Raw => ConversionHandler::Raw,
            ConversionHandler::Literal => ConversionHandler::Literal,
            ConversionHandler::Folded => ConversionHandler::Folded,
            ConversionHandler::NotImplemented(name) => ConversionHandler::NotImplemented(name),
            ConversionHandler::Custom(f) => ConversionHandler::Custom(Rc::clone(f)),
        }
    }
}

pub(crate) struct ConversionRegistry<R>
{
    entries: HashMap<String, ConversionHandler<R>>,
}

impl<R> ConversionRegistry<R>
{
    pub(crate) fn with_builtins() -> Self
    {
        let mut entries = HashMap::new();

        entries.insert("raw".to_owned(), ConversionHandler::Raw);
        entries.insert("literal".to_owned(), ConversionHandler::Literal);
        entries.insert("folded".to_owned(), ConversionHandler::Folded);
        entries.insert("isodate".to_owned(), ConversionHandler::NotImplemented("isodate"));
        entries.insert("timestamp".to_owned(), ConversionHandler::NotImplemented("timestamp"));
        entries.insert("json".to_owned(), ConversionHandler::NotImplemented("json"));

        Self { entries }
    }

    pub(crate) fn set(&mut self, specifier: &str, f: Rc<dyn Fn(&mut super::Parser<R>) -> Result<Value>>)
    {
        self.entries.insert(specifier.to_owned(), ConversionHandler::Custom(f));
    }

    pub(crate) fn contains(&self, specifier: &str) -> bool
    {
        self.entries.contains_key(specifier)
    }

    pub(crate) fn get(&self, specifier: &str) -> Option<ConversionHandler<R>>
    {
        self.entries.get(specifier).cloned()
    }
}
