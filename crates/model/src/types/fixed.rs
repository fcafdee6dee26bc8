// -------------------------------------------------------------------------------------------------
//  Copyright (C) 2015-2026 Nautech Systems Pty Ltd. All rights reserved.
//  https://nautechsystems.io
//
//  Licensed under the GNU Lesser General Public License Version 3.0 (the "License");
//  You may not use this file except in compliance with the License.
//  You may obtain a copy of the License at https://www.gnu.org/licenses/lgpl-3.0.en.html
//
//  Unless required by applicable law or agreed to in writing, software
//  distributed under the License is distributed on an "AS IS" BASIS,
//  WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
//  See the License for the specific language governing permissions and
//  limitations under the License.
// -------------------------------------------------------------------------------------------------

//! Constants and functions enforcing the fixed-point precision strategy.
//!
//! The parser accepts at most [`MAX_DECIMAL_DIGITS`] significant digits, which
//! keeps every subunits value within `i64` range (`10^12 < 2^63`) even after
//! an amount is rescaled up to the largest currency precision
//! ([`MAX_CURRENCY_PRECISION`]).

use moneta_core::correctness::check_predicate_true;

/// The maximum number of significant digits the decimal parser accepts,
/// counted after trimming and excluding any sign.
pub const MAX_DECIMAL_DIGITS: usize = 12;

/// The largest minor-unit precision assigned to any currency.
pub const MAX_CURRENCY_PRECISION: u8 = 3;

// -----------------------------------------------------------------------------
// POWERS_OF_10 (lookup table for scaling)
// -----------------------------------------------------------------------------

/// Precomputed powers of 10 for fast scale lookup.
///
/// Index i contains 10^i. Table covers 10^0 through 10^12, sufficient for
/// every precision the parser can produce.
const POWERS_OF_10: [i64; 13] = [
    1,                 // 10^0
    10,                // 10^1
    100,               // 10^2
    1_000,             // 10^3
    10_000,            // 10^4
    100_000,           // 10^5
    1_000_000,         // 10^6
    10_000_000,        // 10^7
    100_000_000,       // 10^8
    1_000_000_000,     // 10^9
    10_000_000_000,    // 10^10
    100_000_000_000,   // 10^11
    1_000_000_000_000, // 10^12
];

// Compile-time verification that every precision the parser can produce
// (0 through MAX_DECIMAL_DIGITS) has a table entry.
const _: () = assert!(
    MAX_DECIMAL_DIGITS < POWERS_OF_10.len(),
    "MAX_DECIMAL_DIGITS exceeds POWERS_OF_10 table size"
);

/// Returns 10 raised to the given exponent.
///
/// # Panics
///
/// Panics if `exp` exceeds [`MAX_DECIMAL_DIGITS`].
#[inline(always)]
#[must_use]
pub fn pow10(exp: u8) -> i64 {
    POWERS_OF_10[usize::from(exp)]
}

/// Checks if a given `precision` value is within the range the parser can produce.
///
/// # Errors
///
/// Returns an error if `precision` exceeds [`MAX_DECIMAL_DIGITS`].
pub fn check_parse_precision(precision: u8) -> anyhow::Result<()> {
    if usize::from(precision) > MAX_DECIMAL_DIGITS {
        anyhow::bail!(
            "`precision` exceeded maximum `MAX_DECIMAL_DIGITS` ({MAX_DECIMAL_DIGITS}), was {precision}"
        )
    }
    Ok(())
}

/// Checks that `subunits` stays within the magnitude the digit budget allows
/// for the given `precision`: fewer than `MAX_DECIMAL_DIGITS` total digits,
/// of which `precision` are fractional.
///
/// # Errors
///
/// Returns an error if the magnitude of `subunits` needs more than
/// [`MAX_DECIMAL_DIGITS`] digits.
pub fn check_subunits_in_budget(subunits: i64, precision: u8) -> anyhow::Result<()> {
    check_parse_precision(precision)?;
    check_predicate_true(
        subunits.unsigned_abs() < pow10(MAX_DECIMAL_DIGITS as u8) as u64,
        &format!("`subunits` value {subunits} exceeded the {MAX_DECIMAL_DIGITS}-digit budget"),
    )
}

////////////////////////////////////////////////////////////////////////////////
// Tests
////////////////////////////////////////////////////////////////////////////////
#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(0, 1)]
    #[case(1, 10)]
    #[case(3, 1_000)]
    #[case(12, 1_000_000_000_000)]
    fn test_pow10(#[case] exp: u8, #[case] expected: i64) {
        assert_eq!(pow10(exp), expected);
    }

    #[rstest]
    fn test_parse_precision_boundaries() {
        assert!(check_parse_precision(0).is_ok());
        assert!(check_parse_precision(MAX_DECIMAL_DIGITS as u8).is_ok());
        assert!(check_parse_precision(MAX_DECIMAL_DIGITS as u8 + 1).is_err());
    }

    #[rstest]
    #[case(0, 0, true)]
    #[case(999_999_999_999, 2, true)] // 12 digits, largest in budget
    #[case(-999_999_999_999, 2, true)]
    #[case(1_000_000_000_000, 0, false)] // 13 digits
    #[case(-1_000_000_000_000, 0, false)]
    fn test_check_subunits_in_budget(
        #[case] subunits: i64,
        #[case] precision: u8,
        #[case] expected: bool,
    ) {
        assert_eq!(check_subunits_in_budget(subunits, precision).is_ok(), expected);
    }
}
