//! Field formatting — pure text transforms applied on input and at submit.

use chrono::{SecondsFormat, Utc};

/// Normalize a typed amount into its display form.
///
/// Keeps digits and the first decimal point, drops leading zeros from the
/// integer part (a lone `0` survives), truncates the fraction to two digits
/// and groups the integer part with `,`. A trailing point with no fraction
/// is kept (`"12."` stays `"12."`) so the user can carry on typing cents;
/// this deliberately differs from dropping the point, which would swallow
/// it on every keystroke.
///
/// Idempotent: formatting an already formatted value returns it unchanged.
pub fn format_currency(raw: &str) -> String {
    let mut integer = String::new();
    let mut fraction: Option<String> = None;

    for c in raw.chars() {
        match c {
            '0'..='9' => match fraction.as_mut() {
                Some(f) => f.push(c),
                None => integer.push(c),
            },
            '.' if fraction.is_none() => fraction = Some(String::new()),
            // A second point ends the fraction.
            '.' => break,
            _ => {}
        }
    }

    let trimmed = integer.trim_start_matches('0');
    let integer = if trimmed.is_empty() && !integer.is_empty() {
        "0"
    } else {
        trimmed
    };
    let grouped = group_thousands(integer);

    match fraction {
        Some(f) => {
            let cents: String = f.chars().take(2).collect();
            format!("{grouped}.{cents}")
        }
        None => grouped,
    }
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Remove thousands separators, yielding the numeric mirror of a display amount.
pub fn strip_separators(display: &str) -> String {
    display.replace(',', "")
}

/// Strip every character that is not an ASCII digit.
pub fn digits_only(raw: &str) -> String {
    raw.chars().filter(char::is_ascii_digit).collect()
}

/// Compose `(area) prefix-line` from the three phone segments.
///
/// Each segment is digit-stripped first. Returns an empty string unless all
/// three are non-empty. Segment lengths are not checked here.
pub fn compose_phone(area: &str, prefix: &str, line: &str) -> String {
    let (a, b, c) = (digits_only(area), digits_only(prefix), digits_only(line));
    if a.is_empty() || b.is_empty() || c.is_empty() {
        return String::new();
    }
    format!("({a}) {b}-{c}")
}

/// Current UTC time as ISO-8601 with millisecond precision, e.g.
/// `2026-10-16T09:30:00.123Z`.
pub fn stamp_timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}
