use std::time::Duration;

/// Width of the dashed separator printed between report sections.
pub const SEPARATOR_WIDTH: usize = 40;

/// Seconds in one day.
const SECONDS_PER_DAY: f64 = 86_400.0;

/// Seconds in one minute.
const SECONDS_PER_MINUTE: f64 = 60.0;

/// The dashed line printed after each report block.
pub fn separator() -> String {
    "-".repeat(SEPARATOR_WIDTH)
}

/// Fraction digits needed to print any finite `f64` exactly.
const EXACT_FRACTION_DIGITS: usize = 1_100;

/// Round `value` to `decimals` places.
///
/// Rounding works on the exact decimal expansion of the float, and a value
/// sitting exactly halfway goes to the even digit. `0.15` is stored as
/// `0.1499...` and so rounds down, while `1.25` is exact and rounds to `1.2`.
///
/// # Examples
///
/// ```
/// use bikeshare_core::formatting::round_to;
///
/// assert_eq!(round_to(1.26, 1), 1.3);
/// assert_eq!(round_to(1.25, 1), 1.2);
/// assert_eq!(round_to(2.0, 2), 2.0);
/// ```
pub fn round_to(value: f64, decimals: u32) -> f64 {
    if !value.is_finite() {
        return value;
    }
    let exact = format!("{:.*}", EXACT_FRACTION_DIGITS, value.abs());
    let rounded = round_decimal_half_even(&exact, decimals as usize);
    let magnitude: f64 = rounded.parse().unwrap_or(value.abs());
    magnitude.copysign(value)
}

/// Round a plain `digits.digits` string to `decimals` fraction digits.
fn round_decimal_half_even(exact: &str, decimals: usize) -> String {
    let (int_part, frac_part) = exact.split_once('.').unwrap_or((exact, ""));
    let split = decimals.min(frac_part.len());
    let (kept_frac, dropped) = frac_part.split_at(split);

    let mut digits: Vec<u8> = int_part.bytes().chain(kept_frac.bytes()).collect();
    let round_up = match dropped.as_bytes().first().copied() {
        Some(b'6'..=b'9') => true,
        Some(b'5') => {
            let beyond_half = dropped.bytes().skip(1).any(|d| d != b'0');
            let last_odd = digits.last().is_some_and(|d| (d - b'0') % 2 == 1);
            beyond_half || last_odd
        }
        _ => false,
    };

    if round_up {
        let mut carry = true;
        for d in digits.iter_mut().rev() {
            if *d == b'9' {
                *d = b'0';
            } else {
                *d += 1;
                carry = false;
                break;
            }
        }
        if carry {
            digits.insert(0, b'1');
        }
    }

    let int_len = digits.len() - split;
    let mut out = String::with_capacity(digits.len() + 1);
    out.extend(digits[..int_len].iter().map(|&d| d as char));
    if split > 0 {
        out.push('.');
        out.extend(digits[int_len..].iter().map(|&d| d as char));
    }
    out
}

/// Convert a duration in seconds to days, rounded to one decimal place.
pub fn seconds_to_days(seconds: f64) -> f64 {
    round_to(seconds / SECONDS_PER_DAY, 1)
}

/// Convert a duration in seconds to minutes, rounded to one decimal place.
pub fn seconds_to_minutes(seconds: f64) -> f64 {
    round_to(seconds / SECONDS_PER_MINUTE, 1)
}

/// Label an hour of day in the report's am/pm style.
///
/// Hours up to and including 12 are rendered as `"<h>am"`, later hours as
/// `"<h-12>pm"`. Midnight therefore prints as `"0am"` and noon as `"12am"`;
/// existing report consumers depend on these exact strings.
///
/// # Examples
///
/// ```
/// use bikeshare_core::formatting::hour_label;
///
/// assert_eq!(hour_label(8), "8am");
/// assert_eq!(hour_label(17), "5pm");
/// ```
pub fn hour_label(hour: u32) -> String {
    if hour <= 12 {
        format!("{}am", hour)
    } else {
        format!("{}pm", hour - 12)
    }
}

/// Upper-case the first character and lower-case the remainder.
///
/// `"Start Time"` becomes `"Start time"`, `"trip ID"` becomes `"Trip id"`.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// Render an elapsed compute time as seconds with two decimals.
pub fn format_elapsed(elapsed: Duration) -> String {
    format!("{:.2}", elapsed.as_secs_f64())
}

// ── Tests ──────────────────────────────────────────────────────────────────────
