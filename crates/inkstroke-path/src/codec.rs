//! Path string codec
//!
//! Converts between `M`/`L` polyline path strings and point sequences.
//!
//! Parsing never fails. Each command letter starts a new run; the run's
//! first two coordinate fields become one point, and any field without a
//! leading number decodes to NaN. The codec does not check that a path
//! begins with `M`: both command letters produce exactly one point.

use inkstroke_core::Point;

/// Command letters recognised as run delimiters.
fn is_command(c: char) -> bool {
    matches!(c, 'M' | 'm' | 'L' | 'l')
}

fn is_separator(c: char) -> bool {
    c == ',' || c.is_whitespace()
}

/// Parse a path string into its points, one per command.
///
/// Text before the first command letter is ignored and a string without
/// any command letter yields an empty vector.
pub fn parse(d: &str) -> Vec<Point> {
    command_runs(d).into_iter().map(decode_run).collect()
}

/// Split `d` into slices that each start at a command letter and extend
/// up to the next one.
fn command_runs(d: &str) -> Vec<&str> {
    let starts: Vec<usize> = d.match_indices(is_command).map(|(i, _)| i).collect();

    starts
        .iter()
        .enumerate()
        .map(|(n, &start)| {
            let end = starts.get(n + 1).copied().unwrap_or(d.len());
            &d[start..end]
        })
        .collect()
}

fn decode_run(run: &str) -> Point {
    // Command letters are ASCII, so the body starts at byte 1.
    let fields = split_fields(run[1..].trim());

    let x = fields.first().map_or(f64::NAN, |f| parse_coordinate(f));
    let y = fields.get(1).map_or(f64::NAN, |f| parse_coordinate(f));
    Point::new(x, y)
}

/// Split a command body into coordinate fields.
///
/// A separator is a run of whitespace and commas. Whitespace alone
/// separates two fields; every comma in a run separates one field, so
/// `"1,,2"` has an empty middle field. The body is expected to be trimmed.
fn split_fields(body: &str) -> Vec<&str> {
    let mut fields = Vec::new();
    let mut start = 0;
    let mut chars = body.char_indices().peekable();

    while let Some((i, c)) = chars.next() {
        if !is_separator(c) {
            continue;
        }

        fields.push(&body[start..i]);

        let mut commas = usize::from(c == ',');
        let mut end = i + c.len_utf8();
        while let Some(&(j, next)) = chars.peek() {
            if !is_separator(next) {
                break;
            }
            commas += usize::from(next == ',');
            end = j + next.len_utf8();
            chars.next();
        }

        for _ in 1..commas {
            fields.push("");
        }
        start = end;
    }

    fields.push(&body[start..]);
    fields
}

/// Parse one coordinate field.
///
/// Uses the longest leading decimal number (`[+-]digits[.digits][e[+-]digits]`
/// or `[+-]Infinity`) and ignores whatever follows it, so `"12px"` is 12.
/// Returns NaN when the field does not start with a number.
pub fn parse_coordinate(field: &str) -> f64 {
    numeric_prefix(field.trim_start())
        .and_then(|prefix| prefix.parse().ok())
        .unwrap_or(f64::NAN)
}

fn numeric_prefix(s: &str) -> Option<&str> {
    const INFINITY: &str = "Infinity";

    let bytes = s.as_bytes();
    let mut end = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));

    if s[end..].starts_with(INFINITY) {
        return Some(&s[..end + INFINITY.len()]);
    }

    let int_digits = count_digits(&bytes[end..]);
    end += int_digits;

    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = count_digits(&bytes[end + 1..]);
        if int_digits > 0 || frac_digits > 0 {
            end += 1 + frac_digits;
        }
    }

    if int_digits == 0 && frac_digits == 0 {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp = end + 1;
        if matches!(bytes.get(exp), Some(b'+' | b'-')) {
            exp += 1;
        }
        let exp_digits = count_digits(&bytes[exp..]);
        if exp_digits > 0 {
            end = exp + exp_digits;
        }
    }

    Some(&s[..end])
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

/// Render one coordinate for a path string.
///
/// Finite values use the shortest decimal that reads back to the same
/// `f64`; negative zero is written as `0`. NaN and the infinities use the
/// spellings [`parse_coordinate`] understands.
pub fn format_coordinate(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else if value == f64::INFINITY {
        "Infinity".to_string()
    } else if value == f64::NEG_INFINITY {
        "-Infinity".to_string()
    } else if value == 0.0 {
        "0".to_string()
    } else {
        value.to_string()
    }
}

/// Start a path string at `p`: `"M<x> <y>"`.
pub fn move_to(p: Point) -> String {
    format!("M{} {}", format_coordinate(p.x), format_coordinate(p.y))
}

/// Append a line command to `p`: `" L<x> <y>"`.
pub fn push_line_to(d: &mut String, p: Point) {
    d.push_str(&format!(
        " L{} {}",
        format_coordinate(p.x),
        format_coordinate(p.y)
    ));
}

/// Serialize points as a path string.
///
/// The first point becomes the `M` command and every later point an `L`
/// command. An empty slice yields `"M"`.
pub fn stringify(points: &[Point]) -> String {
    let mut iter = points.iter();
    let Some(first) = iter.next() else {
        return "M".to_string();
    };

    let mut d = move_to(*first);
    for p in iter {
        push_line_to(&mut d, *p);
    }
    d
}
