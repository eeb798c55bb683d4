/*
 * This Source Code Form is subject to the terms of the
 * Mozilla Public License, v. 2.0. If a copy of the MPL
 * was not distributed with this file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

//! Dedent and fold helpers shared by `raw`, `literal` and
//! `folded`.

use crate::lex;

/// Strips the common leading-space prefix (measured across
/// non-empty lines only) from every line.
pub(super) fn dedent(lines: Vec<String>) -> Vec<String>
{
    let min_indent = lines.iter().filter(|l| !l.is_empty()).map(|l| lex::indent_of(l)).min();

    match min_indent
    {
        None | Some(0) => lines,
        Some(n) => lines
            .into_iter()
            .map(|l| {
                let strip = n.min(l.len());
                l[strip..].to_owned()
            })
            .collect(),
    }
}

/// Like [`dedent`], but over (line, original line number) pairs
/// - used by multi-line quoted strings, which need to keep each
/// line's real source line number for escape-decoding errors.
pub(super) fn dedent_numbered(pairs: Vec<(String, usize)>) -> Vec<(String, usize)>
{
    let min_indent = pairs.iter().filter(|(l, _)| !l.is_empty()).map(|(l, _)| lex::indent_of(l)).min();

    match min_indent
    {
        None | Some(0) => pairs,
        Some(n) => pairs
            .into_iter()
            .map(|(l, ln)| {
                let strip = n.min(l.len());
                (l[strip..].to_owned(), ln)
            })
            .collect(),
    }
}

/// `literal`: drop trailing empty lines; if at least two remain,
/// append one back to force a trailing newline on join. Preserve
/// this single-vs-multi-line asymmetry as specified.
pub(super) fn join_literal(mut lines: Vec<String>) -> String
{
    while matches!(lines.last(), Some(l) if l.is_empty())
    {
        lines.pop();
    }

    if lines.len() >= 2
    {
        lines.push(String::new());
    }

    lines.join("\n")
}

/// `folded`: drop every empty line, join the rest with single
/// spaces.
pub(super) fn join_folded(lines: Vec<String>) -> String
{
    lines.iter().filter(|l| !l.is_empty()).map(String::as_str).collect::<Vec<_>>().join(" ")
}

/// `raw`: no dedent, no dropping; if at least two lines, append
/// an empty one to force a trailing newline on join.
pub(super) fn join_raw(mut lines: Vec<String>) -> String
{
    if lines.len() >= 2
    {
        lines.push(String::new());
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests
{
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn dedent_strips_common_prefix()
    {
        let lines = vec!["  a".to_owned(), "  b".to_owned(), "".to_owned()];

        assert_eq!(dedent(lines), vec!["a".to_owned(), "b".to_owned(), "".to_owned()]);
    }

    #[test]
    fn join_literal_appends_trailing_newline_for_multiple_lines()
    {
        let lines = vec!["abc".to_owned(), "def".to_owned()];

        assert_eq!(join_literal(lines), "abc\ndef\n");
    }

    #[test]
    fn join_literal_single_line_has_no_trailing_newline()
    {
        let lines = vec!["abc".to_owned()];

        assert_eq!(join_literal(lines), "abc");
    }

    #[test]
    fn join_folded_drops_empty_lines_and_joins_with_spaces()
    {
        let lines = vec!["a".to_owned(), "".to_owned(), "b".to_owned(), "c".to_owned()];

        assert_eq!(join_folded(lines), "a b c");
    }
}
