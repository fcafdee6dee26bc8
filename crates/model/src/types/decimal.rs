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

//! An exact scaled-integer decimal parsed from text.

use std::{
    fmt::{Debug, Display},
    str::FromStr,
};

use moneta_core::correctness::{FAILED, check_valid_string};
use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

use crate::types::fixed::{
    MAX_CURRENCY_PRECISION, MAX_DECIMAL_DIGITS, check_subunits_in_budget, pow10,
};

/// The error type returned when decimal text cannot be parsed.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ParseDecimalError {
    /// The text was not a well-formed decimal.
    #[error("invalid decimal `{0}`")]
    InvalidFormat(String),
    /// The trimmed digit count exceeded [`MAX_DECIMAL_DIGITS`].
    #[error("decimal over 12 digits is too large")]
    TooLarge,
}

/// Represents an exact decimal value as an integer count of subunits scaled
/// by a power of ten.
///
/// The value is `subunits * 10^-precision`. Parsing trims non-significant
/// zeros first, so `precision` is always the minimal number of fractional
/// digits that represents the input exactly, and the total digit count never
/// exceeds [`MAX_DECIMAL_DIGITS`] (which keeps `subunits` comfortably within
/// `i64` range).
#[repr(C)]
#[derive(Clone, Copy, Default, Hash, PartialEq, Eq)]
pub struct Decimal {
    subunits: i64,
    precision: u8,
}

impl Decimal {
    /// The canonical zero value, to which every textual spelling of zero collapses.
    pub const ZERO: Self = Self {
        subunits: 0,
        precision: 0,
    };

    /// Creates a new [`Decimal`] instance from raw parts with correctness checking.
    ///
    /// No trimming is applied; parsing text is the canonical entry point and
    /// the only one that guarantees minimal precision.
    ///
    /// # Errors
    ///
    /// Returns an error if `precision` or the magnitude of `subunits` exceeds
    /// the [`MAX_DECIMAL_DIGITS`] budget.
    pub fn new_checked(subunits: i64, precision: u8) -> anyhow::Result<Self> {
        check_subunits_in_budget(subunits, precision)?;
        Ok(Self {
            subunits,
            precision,
        })
    }

    /// Creates a new [`Decimal`] instance from raw parts.
    ///
    /// # Panics
    ///
    /// Panics if a correctness check fails. See [`Decimal::new_checked`] for more details.
    #[must_use]
    pub fn new(subunits: i64, precision: u8) -> Self {
        Self::new_checked(subunits, precision).expect(FAILED)
    }

    /// Returns the raw subunits count.
    #[inline]
    #[must_use]
    pub fn subunits(&self) -> i64 {
        self.subunits
    }

    /// Returns the number of implied fractional digits.
    #[inline]
    #[must_use]
    pub fn precision(&self) -> u8 {
        self.precision
    }

    /// Returns `true` if the value of this instance is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.subunits == 0
    }

    /// Returns the value of this instance as an `f64`.
    ///
    /// Lossy for values with many significant digits; the exact value is
    /// always `subunits() * 10^-precision()`.
    #[must_use]
    pub fn as_f64(&self) -> f64 {
        self.subunits as f64 / pow10(self.precision) as f64
    }

    /// Rescales this value up to `precision` fractional digits, preserving
    /// magnitude exactly.
    ///
    /// The product stays within `i64`: parsed subunits hold at most
    /// [`MAX_DECIMAL_DIGITS`] digits and the gap to a currency precision is
    /// at most three, so the result is below `10^15`.
    #[must_use]
    pub(crate) fn rescale_up(self, precision: u8) -> Self {
        debug_assert!(precision >= self.precision);
        debug_assert!(precision - self.precision <= MAX_CURRENCY_PRECISION);
        Self {
            subunits: self.subunits * pow10(precision - self.precision),
            precision,
        }
    }
}

impl FromStr for Decimal {
    type Err = ParseDecimalError;

    /// Parses decimal text into an exact [`Decimal`].
    ///
    /// Non-significant zeros are trimmed before the digit count is measured,
    /// so `007.50` and `7.5` parse identically. The digit budget is
    /// [`MAX_DECIMAL_DIGITS`] after trimming, sign excluded.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let invalid = || ParseDecimalError::InvalidFormat(value.to_string());

        check_valid_string(value, stringify!(value)).map_err(|_| invalid())?;
        if value == "." {
            return Err(invalid());
        }

        let (raw_int, raw_frac) = value.split_once('.').unwrap_or((value, ""));

        let (negative, raw_int) = match raw_int.as_bytes().first() {
            Some(b'-') => (true, &raw_int[1..]),
            Some(b'+') => (false, &raw_int[1..]),
            _ => (false, raw_int),
        };

        // A bare sign carries no digits.
        if raw_int.is_empty() && raw_frac.is_empty() {
            return Err(invalid());
        }

        let int_part = raw_int.trim_start_matches('0');
        let frac_part = raw_frac.trim_end_matches('0');

        // Every spelling of zero, however padded or signed, collapses to the
        // canonical zero.
        if int_part.is_empty() && frac_part.is_empty() {
            return Ok(Self::ZERO);
        }

        // Length is measured before digit validity, so oversized garbage
        // reports `TooLarge` rather than `InvalidFormat`.
        if int_part.len() + frac_part.len() > MAX_DECIMAL_DIGITS {
            return Err(ParseDecimalError::TooLarge);
        }

        let digits = format!("{int_part}{frac_part}");
        if !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }

        // Cannot overflow: at most 12 digits and 10^12 < i64::MAX.
        let magnitude: i64 = digits.parse().map_err(|_| invalid())?;

        Ok(Self {
            subunits: if negative { -magnitude } else { magnitude },
            precision: frac_part.len() as u8,
        })
    }
}

impl Debug for Decimal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}({})", stringify!(Decimal), self)
    }
}

impl Display for Decimal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.precision == 0 {
            return write!(f, "{}", self.subunits);
        }
        let scale = pow10(self.precision);
        let sign = if self.subunits < 0 { "-" } else { "" };
        let units = (self.subunits / scale).abs();
        let frac = (self.subunits % scale).abs();
        write!(
            f,
            "{sign}{units}.{frac:0width$}",
            width = usize::from(self.precision)
        )
    }
}

impl Serialize for Decimal {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Decimal {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value: String = Deserialize::deserialize(deserializer)?;
        value.parse().map_err(serde::de::Error::custom)
    }
}
