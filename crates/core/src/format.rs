//! Text formatting shared by every style template.

use std::fmt::Write as _;

/// Formats a number the way style templates expect it: shortest round-trip
/// decimal, no trailing `.0` on integral values, and `0` for negative zero.
///
/// Magnitudes below `1e-6` or from `1e21` up switch to exponent form with a
/// signed exponent (`2.8e-14`, `1e+21`), as JavaScript number-to-string does.
/// Non-finite values print as `0`; templates have no spelling for them.
pub fn num(v: f64) -> String {
    if !v.is_finite() || v == 0.0 {
        return "0".to_owned();
    }
    let magnitude = v.abs();
    if magnitude < 1e-6 || magnitude >= 1e21 {
        let exp = format!("{v:e}");
        return match exp.split_once('e') {
            Some((mantissa, power)) if !power.starts_with('-') => format!("{mantissa}e+{power}"),
            _ => exp,
        };
    }
    format!("{v}")
}

/// Rounds half-way cases towards positive infinity.
///
/// Matches the rounding browsers apply to color channels, which differs from
/// [`f64::round`] for negative halves (`-2.5` rounds to `-2`).
pub fn round_half_up(v: f64) -> f64 {
    (v + 0.5).floor()
}

/// Percent-encodes `input` leaving `A-Z a-z 0-9 - _ . ! ~ * ' ( )` untouched.
///
/// The unreserved set is that of `encodeURIComponent`, so data URIs built here
/// paste into a stylesheet unchanged.
pub fn encode_uri_component(input: &str) -> String {
    let mut out = String::with_capacity(input.len() * 3);
    for byte in input.bytes() {
        match byte {
            b'A'..=b'Z'
            | b'a'..=b'z'
            | b'0'..=b'9'
            | b'-'
            | b'_'
            | b'.'
            | b'!'
            | b'~'
            | b'*'
            | b'\''
            | b'('
            | b')' => out.push(byte as char),
            _ => {
                let _ = write!(out, "%{byte:02X}");
            }
        }
    }
    out
}
