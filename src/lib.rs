/*
 * This Source Code Form is subject to the terms of the
 * Mozilla Public License, v. 2.0. If a copy of the MPL
 * was not distributed with this file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

//! A parser for an indentation-structured, human-authored
//! markup notation: scalars, lists, maps, multi-line strings
//! with three folding policies, quoted strings with escapes,
//! radix-prefixed numbers, and an extensible conversion-specifier
//! mechanism that routes blocks to named sub-parsers.
//!
//! Start with [`reader::from_str`] or [`reader::from_read`] to
//! build a line source, then [`parser::parse`] to get a
//! [`value::Value`] tree:
//!
//! ```rust
//! use amw::{parser, reader, value::Value};
//!
//! let value = parser::parse(reader::from_str("greeting: hello\ncount: 3")).unwrap();
//! let map = value.as_map().unwrap();
//!
//! assert_eq!(map.get(&Value::from("count")), Some(&Value::from(3i64)));
//! ```
//!
//! Callers that need to register a custom conversion specifier
//! before parsing should use [`parser::create_parser`] and
//! [`parser::Parser::set_custom_parser`] instead of
//! [`parser::parse`].

#![allow(dead_code)]
#![allow(clippy::suspicious_else_formatting)]

pub mod error;
pub mod parser;
pub mod reader;
pub mod value;

mod lex;

pub use error::{Error, Result};
pub use value::Value;
