//! Small, stateless lexical helpers shared by the block
//! reader, dispatcher and scalar sub-parsers.
//!
//! Everything here operates on byte offsets into a `&str`.
//! That's safe because every delimiter this crate cares about
//! (space, `#`, `:`, `-`, quotes, digits, the ASCII escape
//! letters) is a single ASCII byte, so byte offsets are always
//! on UTF8 character boundaries.

/// Count of leading ASCII space characters. A tab stops the
/// count rather than counting as indentation - this may produce
/// a "surprising" indent, which is accepted rather than
/// corrected.
pub(crate) fn indent_of(line: &str) -> usize
{
    line.as_bytes().iter().take_while(|&&b| b == b' ').count()
}

/// Right-trims trailing whitespace (spaces and tabs) from
/// .line, in place.
pub(crate) fn rtrim(line: &mut String)
{
    let trimmed = line.trim_end_matches([' ', '\t']).len();

    line.truncate(trimmed);
}

/// Whether .line, ignoring its leading indent, starts a
/// comment (first non-space character is `#`).
pub(crate) fn is_comment_line(line: &str) -> bool
{
    line.as_bytes()
        .iter()
        .find(|&&b| b != b' ')
        .map_or(false, |&b| b == b'#')
}

/// Byte index of the first character at or after .from that
/// is not an ASCII space, or `line.len()` if none exists.
pub(crate) fn skip_spaces(line: &str, from: usize) -> usize
{
    line.as_bytes()[from.min(line.len())..]
        .iter()
        .take_while(|&&b| b == b' ')
        .count()
        + from.min(line.len())
}

/// The byte at .pos, or `None` past the end of .line.
pub(crate) fn byte_at(line: &str, pos: usize) -> Option<u8>
{
    line.as_bytes().get(pos).copied()
}

/// Whether .b is a space or tab - "whitespace" for the purposes
/// of end-of-value detection.
pub(crate) fn is_space_byte(b: u8) -> bool
{
    b == b' ' || b == b'\t'
}

pub(crate) fn is_ascii_digit(b: u8) -> bool
{
    b.is_ascii_digit()
}

/// The value of .b as a digit in the given .radix (2, 8, 10 or
/// 16), or `None` if .b is not a valid digit in that radix.
pub(crate) fn digit_value(b: u8, radix: u32) -> Option<u32>
{
    let value = match b
    {
        b'0'..=b'9' => (b - b'0') as u32,
        b'a'..=b'z' => (b - b'a') as u32 + 10,
        b'A'..=b'Z' => (b - b'A') as u32 + 10,
        _ => return None,
    };

    if value < radix
    {
        Some(value)
    }
    else
    {
        None
    }
}

/// Whether .line, from byte offset .from onward, is empty or a
/// comment - used to tell "value is on the same line" apart
/// from "value starts on the next line" for structural tokens
/// (hyphen, colon, conversion specifier).
pub(crate) fn rest_is_blank_or_comment(line: &str, from: usize) -> bool
{
    let rest = &line[from.min(line.len())..];
    let trimmed = rest.trim_start_matches(' ');

    trimmed.is_empty() || trimmed.starts_with('#')
}

/// Appends the UTF8 encoding of the given Unicode scalar value
/// to .out, per the `\x`/`\u`/`\U` escapes.
///
/// Surrogate code points (not valid scalar values) are
/// replaced with U+FFFD, matching `char::from_u32`'s failure
/// mode rather than erroring - behavior here is otherwise
/// unconstrained, and replacement is the least surprising
/// choice for a code path inside an otherwise-successful
/// parse.
pub(crate) fn push_code_point(out: &mut String, value: u32)
{
    out.push(char::from_u32(value).unwrap_or('\u{FFFD}'));
}

#[cfg(test)]
mod tests
{
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn indent_counts_leading_spaces_only()
    {
        assert_eq!(indent_of("   abc"), 3);
        assert_eq!(indent_of("abc"), 0);
        assert_eq!(indent_of("\tabc"), 0);
        assert_eq!(indent_of("  \tabc"), 2);
    }

    #[test]
    fn rtrim_removes_trailing_spaces_and_tabs()
    {
        let mut s = "abc   \t ".to_owned();

        rtrim(&mut s);

        assert_eq!(s, "abc");
    }

    #[test]
    fn comment_detection_skips_indent()
    {
        assert!(is_comment_line("   # a comment"));
        assert!(!is_comment_line("   not a comment"));
        assert!(!is_comment_line(""));
    }

    #[test]
    fn digit_values_respect_radix()
    {
        assert_eq!(digit_value(b'7', 8), Some(7));
        assert_eq!(digit_value(b'8', 8), None);
        assert_eq!(digit_value(b'f', 16), Some(15));
        assert_eq!(digit_value(b'g', 16), None);
    }
}
