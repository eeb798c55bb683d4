/*
 * This Source Code Form is subject to the terms of the
 * Mozilla Public License, v. 2.0. If a copy of the MPL
 * was not distributed with this file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

//! Number parsing: radix prefixes, digit separators, integer vs
//! float detection, overflow handling.
//!
//! Free functions, not `Parser` methods - no block-indent state
//! is involved, only the current line and a starting column.

use crate::{error::internal::ErrorCode, value::Value};

type NumError = (ErrorCode, usize);

/// Parses a number starting at .digit_start (the first digit,
/// after any sign already consumed by the caller) with the
/// given .sign. Returns the value and the column just past the
/// last character consumed.
pub(crate) fn parse_number(line: &str, digit_start: usize, sign: i32) -> Result<(Value, usize), NumError>
{
    let bytes = line.as_bytes();
    let mut pos = digit_start;
    let mut radix = 10u32;

    if bytes.get(pos) == Some(&b'0')
    {
        match bytes.get(pos + 1)
        {
            Some(b'b') | Some(b'B') =>
            {
                radix = 2;
                pos += 2;
            },
            Some(b'o') | Some(b'O') =>
            {
                radix = 8;
                pos += 2;
            },
            Some(b'x') | Some(b'X') =>
            {
                radix = 16;
                pos += 2;
            },
            _ => {},
        }
    }

    let (magnitude, pos_after_int) = scan_unsigned(line, pos, radix)?;
    pos = pos_after_int;

    let mag_start = digit_start;
    let mut is_float = false;

    if bytes.get(pos) == Some(&b'.')
    {
        if radix != 10
        {
            return Err((ErrorCode::DecimalOnlyFloat, pos));
        }

        is_float = true;
        pos += 1;
        let (_, p) = scan_unsigned(line, pos, 10)?;
        pos = p;
    }

    if matches!(bytes.get(pos), Some(b'e') | Some(b'E'))
    {
        if radix != 10
        {
            return Err((ErrorCode::DecimalOnlyFloat, pos));
        }

        is_float = true;
        pos += 1;

        if matches!(bytes.get(pos), Some(b'+') | Some(b'-'))
        {
            pos += 1;
        }

        let (_, p) = scan_unsigned(line, pos, 10)?;
        pos = p;
    }

    if !ends_number(line, pos)
    {
        return Err((ErrorCode::BadNumber, pos));
    }

    if is_float
    {
        let text = strip_separators(&line[mag_start..pos]);

        let mut value: f64 = text.parse().map_err(|_| (ErrorCode::BadNumber, mag_start))?;

        if value.is_infinite()
        {
            return Err((ErrorCode::FloatingPointOverflow, mag_start));
        }

        if sign < 0 && value != 0.0
        {
            value = -value;
        }

        Ok((Value::Float(value), pos))
    }
    else if sign > 0
    {
        if magnitude <= i64::MAX as u64
        {
            Ok((Value::Int(magnitude as i64), pos))
        }
        else
        {
            Ok((Value::UInt(magnitude), pos))
        }
    }
    else
    {
        // Two's-complement accommodation: i64::MIN's magnitude is
        // one past i64::MAX, so it needs its own branch rather
        // than falling into the sign > 0 arm above.
        const MIN_MAGNITUDE: u64 = i64::MAX as u64 + 1;

        if magnitude <= MIN_MAGNITUDE
        {
            let signed = if magnitude == MIN_MAGNITUDE
            {
                i64::MIN
            }
            else
            {
                -(magnitude as i64)
            };

            Ok((Value::Int(signed), pos))
        }
        else
        {
            Err((ErrorCode::IntegerOverflow, mag_start))
        }
    }
}

/// Scans an unsigned magnitude in the given radix, starting at
/// .start. Digit separators `'` and `_` are allowed between
/// digits: not at the start, not doubled, always followed by a
/// digit.
fn scan_unsigned(line: &str, start: usize, radix: u32) -> Result<(u64, usize), NumError>
{
    let bytes = line.as_bytes();
    let mut pos = start;
    let mut value = 0u64;
    let mut any_digit = false;
    let mut last_was_sep = false;

    loop
    {
        match bytes.get(pos).copied().and_then(|b| crate::lex::digit_value(b, radix).map(|d| (b, d)))
        {
            Some((_, d)) =>
            {
                value = value
                    .checked_mul(radix as u64)
                    .and_then(|v| v.checked_add(d as u64))
                    .ok_or((ErrorCode::NumericOverflow, pos))?;

                pos += 1;
                any_digit = true;
                last_was_sep = false;
            },
            None => match bytes.get(pos)
            {
                Some(b'\'') | Some(b'_') if any_digit && !last_was_sep =>
                {
                    last_was_sep = true;
                    pos += 1;
                },
                _ => break,
            },
        }
    }

    if last_was_sep
    {
        return Err((ErrorCode::BadNumber, pos - 1));
    }

    if !any_digit
    {
        return Err((ErrorCode::BadNumber, start));
    }

    Ok((value, pos))
}

/// A number must terminate at end-of-line, whitespace, `#`, or
/// `:`.
fn ends_number(line: &str, pos: usize) -> bool
{
    match crate::lex::byte_at(line, pos)
    {
        None => true,
        Some(b) if crate::lex::is_space_byte(b) => true,
        Some(b'#') | Some(b':') => true,
        _ => false,
    }
}

fn strip_separators(s: &str) -> String
{
    s.chars().filter(|&c| c != '\'' && c != '_').collect()
}
