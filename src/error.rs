/*
 * This Source Code Form is subject to the terms of the
 * Mozilla Public License, v. 2.0. If a copy of the MPL
 * was not distributed with this file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

//! Structured parse errors.
//!
//! Every fallible operation in this crate returns [`Error`],
//! which carries enough context (line, column, description)
//! to point a caller at the offending byte of input, and
//! nothing more. There is no recovery after the first error
//! - see the crate root docs.

use std::{error::Error as StdError, fmt, io};

/// Result typedef used throughout this crate's public API.
pub type Result<T> = std::result::Result<T, Error>;

/// A single structured parse error.
///
/// Mirrors the `ParseError { line_number, position,
/// description }` shape: [`line`](Error::line) and
/// [`position`](Error::position) are both `0` when the error
/// occurred before any line was read (e.g. empty input).
pub struct Error
{
    inner: Box<internal::Error>,
}

impl Error
{
    /// The 1-based line at which the error occurred, or `0`
    /// if the error has no line context.
    pub fn line(&self) -> usize
    {
        self.inner.line
    }

    /// The 0-based column into [`line`](Error::line) at which
    /// the error occurred.
    pub fn position(&self) -> usize
    {
        self.inner.column
    }

    /// The formatted description of the error, without line
    /// or column context.
    pub fn description(&self) -> String
    {
        self.inner.kind.to_string()
    }

    /// Categorize the error.
    pub fn classify(&self) -> Category
    {
        self.inner.classify()
    }

    pub(crate) fn new(err: internal::Error) -> Self
    {
        Self {
            inner: Box::new(err),
        }
    }

    pub(crate) fn at(kind: impl Into<internal::ErrorKind>, line: usize, column: usize) -> Self
    {
        Self::new(internal::Error::with_context(kind, line, column))
    }

    pub(crate) fn bare(kind: impl Into<internal::ErrorKind>) -> Self
    {
        Self::new(internal::Error::new(kind))
    }
}

/// Rough category of an [`Error`], useful for callers making
/// decisions without matching on the description string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category
{
    /// The input was not structured validly (bad indentation,
    /// unterminated quote, unrecognized character, ...).
    Structural,

    /// A scalar's textual form could not be converted to its
    /// typed value (number overflow, bad escape, ...).
    Scalar,

    /// The underlying line source returned an I/O error.
    Io,

    /// The input ended before a complete value could be
    /// produced.
    Eof,

    /// A registered conversion specifier has no implementation
    /// (the `isodate`/`timestamp`/`json` stubs).
    NotImplemented,
}

pub(crate) mod internal
{
    use std::{error::Error as StdError, fmt, io};

    use super::Category;

    pub(crate) struct Error
    {
        pub kind:   ErrorKind,
        pub line:   usize,
        pub column: usize,
    }

    impl Error
    {
        pub fn new<T>(err: T) -> Self
        where
            T: Into<ErrorKind>,
        {
            Self::with_context(err, 0, 0)
        }

        pub fn with_context<T>(err: T, line: usize, column: usize) -> Self
        where
            T: Into<ErrorKind>,
        {
            Self {
                kind: err.into(),
                line,
                column,
            }
        }

        pub fn has_context(&self) -> bool
        {
            self.line != 0
        }

        pub fn classify(&self) -> Category
        {
            Into::into(&self.kind)
        }
    }

    /// Unified wrapper around the actual error variants we can
    /// produce.
    #[derive(Debug)]
    pub(crate) enum ErrorKind
    {
        Code(ErrorCode),
        Io(io::Error),
    }

    /// Lightweight, library-specific error variants.
    ///
    /// Grouped loosely by error category;
    /// see the `Category` conversion below.
    #[derive(Debug, Clone, PartialEq)]
    pub(crate) enum ErrorCode
    {
        /*
         * ==== Structural ====
         */
        TooManyNestedBlocks,
        EmptyBlock,
        BadIndentationOfListItem,
        BadIndentationOfMapKey,
        ExtraDataAfterParsedValue,
        BadListItem,
        MapKeyExpected,

        /*
         * ==== Scalar ====
         */
        BadNumber,
        NumericOverflow,
        IntegerOverflow,
        FloatingPointOverflow,
        DecimalOnlyFloat,
        BadCharacterEncountered,

        /*
         * ==== String ====
         */
        NoClosingQuote,
        BadCharacterAfterQuotedString,
        IncompleteHex,
        BadHex,
        IncompleteOctal,
        BadOctal,

        /*
         * ==== Resource / EOF ====
         */
        UnexpectedEof,

        /*
         * ==== Not implemented ====
         */
        NotImplemented(&'static str),
    }

    impl fmt::Debug for Error
    {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
        {
            let mut this = f.debug_struct("Error");

            this.field("kind", &self.kind);

            if self.has_context()
            {
                this.field("line", &self.line).field("column", &self.column);
            }

            this.finish()
        }
    }

    impl fmt::Display for Error
    {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
        {
            if self.has_context()
            {
                write!(
                    f,
                    "{}, on line {}, column {}",
                    self.kind, self.line, self.column
                )
            }
            else
            {
                fmt::Display::fmt(&self.kind, f)
            }
        }
    }

    impl StdError for Error
    {
        fn source(&self) -> Option<&(dyn StdError + 'static)>
        {
            StdError::source(&self.kind)
        }
    }

    impl From<Error> for super::Error
    {
        fn from(err: Error) -> Self
        {
            Self::new(err)
        }
    }

    impl<T> From<T> for Error
    where
        T: Into<ErrorKind>,
    {
        fn from(t: T) -> Self
        {
            Error::new(t.into())
        }
    }

    impl From<&'_ ErrorKind> for Category
    {
        fn from(kind: &'_ ErrorKind) -> Self
        {
            match kind
            {
                ErrorKind::Code(e) => e.into(),
                ErrorKind::Io(_) => Category::Io,
            }
        }
    }

    impl fmt::Display for ErrorKind
    {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
        {
            match self
            {
                ErrorKind::Code(ref e) => fmt::Display::fmt(e, f),
                ErrorKind::Io(ref e) => fmt::Display::fmt(e, f),
            }
        }
    }

    impl StdError for ErrorKind
    {
        fn source(&self) -> Option<&(dyn StdError + 'static)>
        {
            match self
            {
                ErrorKind::Io(e) => Some(e),
                ErrorKind::Code(_) => None,
            }
        }
    }

    impl From<ErrorCode> for ErrorKind
    {
        fn from(e: ErrorCode) -> Self
        {
            ErrorKind::Code(e)
        }
    }

    impl From<io::Error> for ErrorKind
    {
        fn from(e: io::Error) -> Self
        {
            ErrorKind::Io(e)
        }
    }

    impl From<&'_ ErrorCode> for Category
    {
        fn from(code: &'_ ErrorCode) -> Self
        {
            use ErrorCode::*;

            match code
            {
                TooManyNestedBlocks
                | EmptyBlock
                | BadIndentationOfListItem
                | BadIndentationOfMapKey
                | ExtraDataAfterParsedValue
                | BadListItem
                | MapKeyExpected
                | NoClosingQuote
                | BadCharacterAfterQuotedString
                | BadCharacterEncountered => Category::Structural,

                BadNumber
                | NumericOverflow
                | IntegerOverflow
                | FloatingPointOverflow
                | DecimalOnlyFloat
                | IncompleteHex
                | BadHex
                | IncompleteOctal
                | BadOctal => Category::Scalar,

                UnexpectedEof => Category::Eof,

                NotImplemented(_) => Category::NotImplemented,
            }
        }
    }

    impl fmt::Display for ErrorCode
    {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
        {
            use ErrorCode::*;

            match self
            {
                TooManyNestedBlocks => f.write_str("Too many nested blocks"),
                EmptyBlock => f.write_str("Empty block"),
                BadIndentationOfListItem => f.write_str("Bad indentation of list item"),
                BadIndentationOfMapKey => f.write_str("Bad indentation of map key"),
                ExtraDataAfterParsedValue => f.write_str("Extra data after parsed value"),
                BadListItem => f.write_str("Bad list item"),
                MapKeyExpected => f.write_str("Map key expected"),
                BadNumber => f.write_str("Bad number"),
                NumericOverflow => f.write_str("Numeric overflow"),
                IntegerOverflow => f.write_str("Integer overflow"),
                FloatingPointOverflow => f.write_str("Floating point overflow"),
                DecimalOnlyFloat => f.write_str(
                    "Only decimal representation is supported for floating point numbers",
                ),
                BadCharacterEncountered => f.write_str("Bad character encountered"),
                NoClosingQuote => f.write_str("String contains no closing quote"),
                BadCharacterAfterQuotedString =>
                {
                    f.write_str("Bad character after quoted string")
                },
                IncompleteHex => f.write_str("Incomplete hexadecimal value"),
                BadHex => f.write_str("Bad hexadecimal value"),
                IncompleteOctal => f.write_str("Incomplete octal value"),
                BadOctal => f.write_str("Bad octal value"),
                UnexpectedEof => f.write_str("Unexpected end of input"),
                NotImplemented(specifier) =>
                {
                    write!(f, "Conversion specifier ':{}:' is not implemented", specifier)
                },
            }
        }
    }
}

impl fmt::Debug for Error
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        fmt::Debug::fmt(&self.inner, f)
    }
}

impl fmt::Display for Error
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        fmt::Display::fmt(&self.inner, f)
    }
}

impl StdError for Error
{
    fn source(&self) -> Option<&(dyn StdError + 'static)>
    {
        StdError::source(&self.inner)
    }
}

impl From<io::Error> for Error
{
    fn from(err: io::Error) -> Self
    {
        Self::bare(internal::ErrorKind::Io(err))
    }
}

#[cfg(test)]
mod tests
{
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn display_with_context()
    {
        let err = Error::at(internal::ErrorCode::BadNumber, 3, 7);

        assert_eq!(err.to_string(), "Bad number, on line 3, column 7");
        assert_eq!(err.line(), 3);
        assert_eq!(err.position(), 7);
    }

    #[test]
    fn display_without_context()
    {
        let err = Error::bare(internal::ErrorCode::UnexpectedEof);

        assert_eq!(err.to_string(), "Unexpected end of input");
        assert_eq!(err.line(), 0);
        assert_eq!(err.classify(), Category::Eof);
    }

    #[test]
    fn classify_groups()
    {
        assert_eq!(
            Error::bare(internal::ErrorCode::TooManyNestedBlocks).classify(),
            Category::Structural
        );
        assert_eq!(
            Error::bare(internal::ErrorCode::IntegerOverflow).classify(),
            Category::Scalar
        );
        assert_eq!(
            Error::bare(internal::ErrorCode::NotImplemented("json")).classify(),
            Category::NotImplemented
        );
    }
}
