//! Duration wire format: `300ms`, `1.5h`, `2h45m`, `1ns`, `0`.
//!
//! A duration string is a sequence of decimal numbers, each with an optional
//! fraction and a mandatory unit suffix. Valid units are `ns`, `us` (or `µs`),
//! `ms`, `s`, `m` and `h`. A bare `0` is accepted without a unit. Negative
//! values are rejected because [`Duration`] is unsigned.

use std::fmt::Write;
use std::time::Duration;

const NANOS_PER_MICRO: u128 = 1_000;
const NANOS_PER_MILLI: u128 = 1_000_000;
const NANOS_PER_SEC: u128 = 1_000_000_000;

/// Fraction digits beyond this are ignored; they are below nanosecond
/// precision for every unit.
const MAX_FRACTION_DIGITS: usize = 18;

/// Parse a duration string. Returns `None` on any syntax error or overflow.
pub fn parse(s: &str) -> Option<Duration> {
    let mut rest = s.strip_prefix('+').unwrap_or(s);
    if rest == "0" {
        return Some(Duration::ZERO);
    }
    if rest.is_empty() {
        return None;
    }

    let mut total: u128 = 0;
    while !rest.is_empty() {
        let (whole, after) = split_digits(rest);
        let (fraction, after) = match after.strip_prefix('.') {
            Some(tail) => split_digits(tail),
            None => ("", after),
        };
        if whole.is_empty() && fraction.is_empty() {
            return None;
        }

        let unit_len = after
            .find(|c: char| c.is_ascii_digit() || c == '.')
            .unwrap_or(after.len());
        let (unit, next) = after.split_at(unit_len);
        let per_unit = unit_nanos(unit)?;

        if !whole.is_empty() {
            let value: u128 = whole.parse().ok()?;
            total = total.checked_add(value.checked_mul(per_unit)?)?;
        }
        if !fraction.is_empty() {
            let digits = &fraction[..fraction.len().min(MAX_FRACTION_DIGITS)];
            let value: u128 = digits.parse().ok()?;
            let scale = 10u128.pow(digits.len() as u32);
            total = total.checked_add(value * per_unit / scale)?;
        }
        rest = next;
    }

    u64::try_from(total).ok().map(Duration::from_nanos)
}

/// Render a duration in the canonical form accepted by [`parse`]:
/// `0s`, `750ns`, `1.5µs`, `20ms`, `1.5s`, `1m30s`, `3h0m0s`.
pub fn format(d: Duration) -> String {
    let nanos = d.as_nanos();
    if nanos == 0 {
        return "0s".to_string();
    }
    if nanos < NANOS_PER_MICRO {
        return format!("{nanos}ns");
    }
    if nanos < NANOS_PER_MILLI {
        return format!("{}µs", decimal(nanos, NANOS_PER_MICRO));
    }
    if nanos < NANOS_PER_SEC {
        return format!("{}ms", decimal(nanos, NANOS_PER_MILLI));
    }

    let secs_total = nanos / NANOS_PER_SEC;
    let hours = secs_total / 3600;
    let minutes = (secs_total % 3600) / 60;
    let secs = (secs_total % 60) * NANOS_PER_SEC + nanos % NANOS_PER_SEC;

    let mut out = String::new();
    if hours > 0 {
        let _ = write!(out, "{hours}h");
    }
    if hours > 0 || minutes > 0 {
        let _ = write!(out, "{minutes}m");
    }
    let _ = write!(out, "{}s", decimal(secs, NANOS_PER_SEC));
    out
}

fn split_digits(s: &str) -> (&str, &str) {
    let len = s.bytes().take_while(u8::is_ascii_digit).count();
    s.split_at(len)
}

fn unit_nanos(unit: &str) -> Option<u128> {
    match unit {
        "ns" => Some(1),
        "us" | "µs" | "μs" => Some(NANOS_PER_MICRO),
        "ms" => Some(NANOS_PER_MILLI),
        "s" => Some(NANOS_PER_SEC),
        "m" => Some(60 * NANOS_PER_SEC),
        "h" => Some(3600 * NANOS_PER_SEC),
        _ => None,
    }
}

/// `value / unit` as a decimal with trailing fraction zeros trimmed.
/// `unit` is a power of ten.
fn decimal(value: u128, unit: u128) -> String {
    let whole = value / unit;
    let fraction = value % unit;
    if fraction == 0 {
        return whole.to_string();
    }
    let width = unit.ilog10() as usize;
    let digits = format!("{fraction:0width$}");
    format!("{whole}.{}", digits.trim_end_matches('0'))
}
