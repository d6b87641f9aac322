//! This module contains the arc-run kernel: it collapses every maximal run of
//! `1` digits in a ring's binary string into a single `(start, end)` angle pair.
//!
//! This is the ring equivalent of run-length encoding. Instead of one wedge per
//! digit, adjacent "on" digits become one wedge, which keeps the shape count
//! down and leaves no seams between neighbouring digits. The digit string is
//! treated as circular: the scan runs one step past the end so that a run
//! touching the last digit is closed at exactly `2π`.

use std::f64::consts::TAU;

use crate::error::RingcodeError;
use crate::types::ArcSpan;

//==================================================================================
// 1. Private Core Logic
//==================================================================================

fn parse_digits(bits: &str) -> Result<Vec<bool>, RingcodeError> {
    bits.chars()
        .enumerate()
        .map(|(position, c)| match c {
            '0' => Ok(false),
            '1' => Ok(true),
            found => Err(RingcodeError::InvalidBinaryDigit { position, found }),
        })
        .collect()
}

//==================================================================================
// 2. Public API
//==================================================================================

/// Angular size of one digit position in a ring of `num_digits` digits.
pub fn arc_size(num_digits: usize) -> Result<f64, RingcodeError> {
    if num_digits == 0 {
        return Err(RingcodeError::DegenerateRingError(
            "cannot divide a ring into zero digit positions".to_string(),
        ));
    }
    Ok(TAU / num_digits as f64)
}

/// Converts a circular binary digit string into the arcs covering its `1` runs.
///
/// - A string of all `1`s yields exactly one arc, `(0, 2π)`.
/// - A string with no `1`s yields no arcs.
/// - A run that reaches the last digit ends at `2π`; a run starting at digit 0
///   starts at `0`. The two meet at the same angle.
pub fn to_arcs(bits: &str) -> Result<Vec<ArcSpan>, RingcodeError> {
    let digits = parse_digits(bits)?;
    let num_digits = digits.len();
    let size = arc_size(num_digits)?;

    let mut arcs = Vec::new();
    let mut run_start: Option<f64> = None;

    // Look one position past the end so the final run is closed at 2π.
    for i in 0..=num_digits {
        let x = i % num_digits;
        let angle = size * i as f64;
        match run_start {
            None if digits[x] => run_start = Some(angle),
            Some(start) if !digits[x] || x == 0 => {
                arcs.push(ArcSpan::new(start, angle));
                run_start = None;
            }
            _ => {}
        }
    }

    Ok(arcs)
}

//==================================================================================
// 3. Unit Tests
//==================================================================================
