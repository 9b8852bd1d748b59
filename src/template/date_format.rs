//! .NET-style custom date/time formatting
//!
//! `$LogDate(...)` modifiers are written with .NET custom format tokens
//! (`yyyy`, `MMM`, `dd`, `HH`, `fff`, ...). This module renders a UTC
//! timestamp against such a format.
//!
//! Supported tokens:
//!
//! | Token | Meaning |
//! |-------|---------|
//! | `d`, `dd` | day of month, unpadded / two digits |
//! | `ddd`, `dddd` | abbreviated / full weekday name |
//! | `f`..`fffffff` | fraction of a second, fixed digits |
//! | `F`..`FFFFFFF` | fraction of a second, trailing zeros dropped |
//! | `g`, `gg` | era (`A.D.`) |
//! | `h`, `hh` / `H`, `HH` | 12-hour / 24-hour clock |
//! | `K` | time zone designator (`Z`) |
//! | `m`, `mm` | minute |
//! | `M`, `MM`, `MMM`, `MMMM` | month number / abbreviated / full name |
//! | `s`, `ss` | second |
//! | `t`, `tt` | `A`/`P`, `AM`/`PM` |
//! | `y`..`yyyyy` | year |
//! | `z`, `zz`, `zzz` | UTC offset |
//!
//! Any other character is copied literally.
//!
//! Every format is read as a custom format, including a single character.
//! `$LogDate(d)` renders the day of the month and `$LogDate(M)` the month
//! number; the .NET standard formats (`d` short date, `M` month/day, `y`
//! year/month, ...) are not recognised.

use crate::core::{LoggerError, Result};
use chrono::{DateTime, Datelike, Timelike, Utc};
use std::fmt::Write;

/// Longest run of `f`/`F` accepted
const MAX_FRACTION_DIGITS: usize = 7;

/// Format `timestamp` using a .NET custom date/time format string
///
/// # Errors
///
/// Returns [`LoggerError::InvalidFormat`] when a fraction token asks for more
/// than seven digits.
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use log_template_core::template::format_timestamp;
///
/// let ts = Utc.with_ymd_and_hms(2019, 2, 13, 0, 0, 0).unwrap();
/// assert_eq!(format_timestamp(&ts, "MMM-dd-yyyy").unwrap(), "Feb-13-2019");
/// ```
pub fn format_timestamp(timestamp: &DateTime<Utc>, format: &str) -> Result<String> {
    let chars: Vec<char> = format.chars().collect();
    let mut output = String::with_capacity(format.len() + 16);
    let mut i = 0;

    while i < chars.len() {
        let token = chars[i];
        let run = chars[i..].iter().take_while(|&&c| c == token).count();
        write_token(&mut output, timestamp, token, run, format)?;
        i += run;
    }

    Ok(output)
}

fn write_token(
    out: &mut String,
    ts: &DateTime<Utc>,
    token: char,
    run: usize,
    format: &str,
) -> Result<()> {
    match (token, run) {
        ('d', 1) => write!(out, "{}", ts.day()),
        ('d', 2) => write!(out, "{:02}", ts.day()),
        ('d', 3) => write!(out, "{}", ts.format("%a")),
        ('d', _) => write!(out, "{}", ts.format("%A")),

        ('f' | 'F', n) if n > MAX_FRACTION_DIGITS => {
            return Err(LoggerError::format(
                format,
                format!("at most {} fraction digits are supported", MAX_FRACTION_DIGITS),
            ));
        }
        ('f', n) => write!(out, "{}", fraction_digits(ts, n)),
        ('F', n) => write!(out, "{}", fraction_digits(ts, n).trim_end_matches('0')),

        ('g', _) => write!(out, "A.D."),

        ('h', 1) => write!(out, "{}", ts.hour12().1),
        ('h', _) => write!(out, "{:02}", ts.hour12().1),
        ('H', 1) => write!(out, "{}", ts.hour()),
        ('H', _) => write!(out, "{:02}", ts.hour()),

        ('K', _) => write!(out, "Z"),

        ('m', 1) => write!(out, "{}", ts.minute()),
        ('m', _) => write!(out, "{:02}", ts.minute()),

        ('M', 1) => write!(out, "{}", ts.month()),
        ('M', 2) => write!(out, "{:02}", ts.month()),
        ('M', 3) => write!(out, "{}", ts.format("%b")),
        ('M', _) => write!(out, "{}", ts.format("%B")),

        ('s', 1) => write!(out, "{}", ts.second()),
        ('s', _) => write!(out, "{:02}", ts.second()),

        ('t', 1) => write!(out, "{}", if ts.hour12().0 { 'P' } else { 'A' }),
        ('t', _) => write!(out, "{}", if ts.hour12().0 { "PM" } else { "AM" }),

        ('y', 1) => write!(out, "{}", ts.year().rem_euclid(100)),
        ('y', 2) => write!(out, "{:02}", ts.year().rem_euclid(100)),
        ('y', n) => write!(out, "{:0width$}", ts.year(), width = n),

        ('z', 1) => write!(out, "+0"),
        ('z', 2) => write!(out, "+00"),
        ('z', _) => write!(out, "+00:00"),

        (literal, n) => {
            out.extend(std::iter::repeat(literal).take(n));
            Ok(())
        }
    }?;
    Ok(())
}

/// First `digits` digits of the sub-second part, zero padded
fn fraction_digits(ts: &DateTime<Utc>, digits: usize) -> String {
    // Leap seconds report nanoseconds >= 1e9
    let nanos = ts.nanosecond() % 1_000_000_000;
    let scaled = nanos / 10u32.pow(9 - digits as u32);
    format!("{:0width$}", scaled, width = digits)
}
