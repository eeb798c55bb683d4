/*
 * This Source Code Form is subject to the terms of the
 * Mozilla Public License, v. 2.0. If a copy of the MPL
 * was not distributed with this file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

//! End-to-end scenarios and properties the parser is expected
//! to satisfy.

use indoc::indoc;
use pretty_assertions::assert_eq;

use super::parse;
use crate::{error::Category, reader::from_str, value::Value};

fn ok(input: &str) -> Value
{
    parse(from_str(input)).unwrap_or_else(|e| panic!("unexpected parse error: {} (input: {:?})", e, input))
}

#[test]
fn scenario_scalar()
{
    assert_eq!(ok("42\n"), Value::Int(42));
}

#[test]
fn scenario_map_with_comment()
{
    let input = indoc! {"
        # greeting
        greeting: Hello
        count: 3
    "};

    let mut expected = crate::value::Map::new();
    expected.insert(Value::from("greeting"), Value::from("Hello"));
    expected.insert(Value::from("count"), Value::Int(3));

    assert_eq!(ok(input), Value::Map(expected));
}

#[test]
fn scenario_list_of_mixed_scalars()
{
    let input = indoc! {r#"
        - 1
        - true
        - "x"
    "#};

    assert_eq!(
        ok(input),
        Value::List(vec![Value::Int(1), Value::Bool(true), Value::from("x")])
    );
}

#[test]
fn scenario_literal_block_via_specifier()
{
    let input = ":literal:  abc\n           def\n";

    assert_eq!(ok(input), Value::from("abc\ndef\n"));
}

#[test]
fn scenario_folded_quoted_string()
{
    let input = "\"a\n b\n c\"\n";

    assert_eq!(ok(input), Value::from("a b c"));
}

#[test]
fn scenario_nested_map()
{
    let input = indoc! {"
        root:
            a: 1
            b:
                c: 2
    "};

    let mut inner = crate::value::Map::new();
    inner.insert(Value::from("c"), Value::Int(2));

    let mut middle = crate::value::Map::new();
    middle.insert(Value::from("a"), Value::Int(1));
    middle.insert(Value::from("b"), Value::Map(inner));

    let mut outer = crate::value::Map::new();
    outer.insert(Value::from("root"), Value::Map(middle));

    assert_eq!(ok(input), Value::Map(outer));
}

#[test]
fn comment_invariance()
{
    let without = "greeting: Hello\ncount: 3\n";
    let with_comments = "# leading\ngreeting: Hello\n# interstitial, but shallower than block\ncount: 3\n";

    assert_eq!(ok(without), ok(with_comments));
}

#[test]
fn comment_invariance_inside_nested_block()
{
    let without = "root:\n    a: 1\n";
    let with_comment = "root:\n    # c\n    a: 1\n";

    assert_eq!(ok(without), ok(with_comment));
}

#[test]
fn trailing_whitespace_invariance()
{
    let a = "greeting: Hello\ncount: 3\n";
    let b = "greeting: Hello   \ncount: 3   \n";

    assert_eq!(ok(a), ok(b));
}

#[test]
fn dedent_normalization()
{
    let narrow = ":literal:\n  a\n  b\n";
    let wide = ":literal:\n      a\n      b\n";

    assert_eq!(ok(narrow), ok(wide));
}

#[test]
fn quoted_round_trip()
{
    assert_eq!(ok("\"hello world\"\n"), Value::from("hello world"));
}

#[test]
fn escape_table()
{
    assert_eq!(ok(r#""\a\b\f\n\r\t\v""#), Value::from("\u{07}\u{08}\u{0C}\n\r\t\u{0B}"));
}

#[test]
fn number_radix_equivalence()
{
    assert_eq!(ok("10\n"), Value::Int(10));
    assert_eq!(ok("0b1010\n"), Value::Int(10));
    assert_eq!(ok("0o12\n"), Value::Int(10));
    assert_eq!(ok("0xa\n"), Value::Int(10));
}

#[test]
fn separator_equivalence()
{
    assert_eq!(ok("1_000_000\n"), Value::Int(1_000_000));
    assert_eq!(ok("1'000'000\n"), Value::Int(1_000_000));
}

#[test]
fn indentation_discipline_rejects_uneven_list()
{
    let input = "- 1\n  - 2\n";

    let err = parse(from_str(input)).unwrap_err();

    assert_eq!(err.classify(), Category::Structural);
}

#[test]
fn indentation_discipline_rejects_uneven_map()
{
    let input = "a: 1\n  b: 2\n";

    let err = parse(from_str(input)).unwrap_err();

    assert_eq!(err.classify(), Category::Structural);
}

#[test]
fn empty_input_is_eof_error()
{
    let err = parse(from_str("")).unwrap_err();

    assert_eq!(err.classify(), Category::Eof);
}

#[test]
fn trailing_data_after_top_level_value_is_rejected()
{
    let input = "42\nextra\n";

    let err = parse(from_str(input)).unwrap_err();

    assert_eq!(err.classify(), Category::Structural);
}

#[test]
fn bad_character_after_quoted_string_is_reported_precisely()
{
    let input = "\"hello\"junk\n";

    let err = parse(from_str(input)).unwrap_err();

    assert_eq!(err.classify(), Category::Structural);
    assert!(err.to_string().starts_with("Bad character after quoted string"));
}

#[test]
fn not_implemented_specifier_reports_its_name()
{
    let err = parse(from_str(":isodate: 2024-01-01\n")).unwrap_err();

    assert_eq!(err.classify(), Category::NotImplemented);
}

#[test]
fn custom_specifier_overrides_registry()
{
    let mut parser = super::create_parser(from_str(":shout: hi\n"));

    parser.set_custom_parser("shout", |p| {
        p.parse_raw().map(|v| match v
        {
            Value::String(s) => Value::from(s.to_uppercase()),
            other => other,
        })
    });

    assert_eq!(parser.parse().unwrap(), Value::from("HI"));
}

#[test]
fn negative_number_parses()
{
    assert_eq!(ok("-7\n"), Value::Int(-7));
}

#[test]
fn float_parses()
{
    assert_eq!(ok("3.5\n"), Value::Float(3.5));
}

#[test]
fn unsigned_overflow_of_signed_range_is_uint()
{
    assert_eq!(ok("18446744073709551615\n"), Value::UInt(u64::MAX));
}

#[test]
fn signed_minimum_parses_via_twos_complement_accommodation()
{
    assert_eq!(ok("-9223372036854775808\n"), Value::Int(i64::MIN));
}

#[test]
fn magnitude_past_signed_minimum_overflows()
{
    let err = parse(from_str("-9223372036854775809\n")).unwrap_err();

    assert_eq!(err.classify(), Category::Scalar);
}

#[test]
fn raw_block_preserves_indentation()
{
    let input = ":raw:\n    a\n      b\n";

    assert_eq!(ok(input), Value::from("a\n  b\n"));
}

#[test]
fn key_starting_with_number_is_supported()
{
    let input = "3: three\n";

    let mut expected = crate::value::Map::new();
    expected.insert(Value::Int(3), Value::from("three"));

    assert_eq!(ok(input), Value::Map(expected));
}
