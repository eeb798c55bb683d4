/*
 * This Source Code Form is subject to the terms of the
 * Mozilla Public License, v. 2.0. If a copy of the MPL
 * was not distributed with this file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

//! Error types returned from the [`reader`](super) module.
//!
//! A line source has exactly one way to fail: the underlying
//! [`std::io::Read`] errored (including non-UTF8 bytes, which
//! [`std::io::BufRead::read_line`] already reports as
//! [`io::ErrorKind::InvalidData`]). So this module is just a
//! type alias, kept as its own module to mirror the
//! reader/error split used elsewhere in this crate.

/// Type alias of the `Result`s returned from this module.
pub type ReaderResult<T> = std::io::Result<T>;
