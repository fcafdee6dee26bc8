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

//! A currency code paired with its canonical minor-unit precision.

use std::{
    fmt::{Debug, Display},
    str::FromStr,
};

use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;
use ustr::Ustr;

/// The error type returned when a currency code cannot be parsed.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("invalid currency code `{0}`")]
pub struct ParseCurrencyError(pub String);

/// Represents the code and minor-unit precision of a currency.
///
/// The code is exactly three letters, kept in the case the caller supplied.
/// The precision is the currency's canonical minor-unit count, assigned from
/// a static classification table; there is no dynamic registration.
///
/// The empty sentinel (see [`Currency::empty`]) is the only representable
/// invalid value, guarding against unchecked default use.
#[repr(C)]
#[derive(Clone, Copy, Hash, PartialEq, Eq)]
pub struct Currency {
    code: Ustr,
    precision: u8,
}

impl Currency {
    /// Parses a three-letter currency code and assigns its minor-unit precision.
    ///
    /// The code is not case-normalized; callers supply canonical case. Codes
    /// not present in the classification table default to two minor units.
    ///
    /// # Errors
    ///
    /// Returns an error if `code` is not exactly three characters, or any
    /// character is not a Unicode letter.
    pub fn parse<T: AsRef<str>>(code: T) -> Result<Self, ParseCurrencyError> {
        let code = code.as_ref();

        if code.chars().count() != 3 || !code.chars().all(char::is_alphabetic) {
            return Err(ParseCurrencyError(code.to_string()));
        }

        let precision = match code {
            "IRR" => 0,
            "CNY" | "VND" => 1,
            "BHD" | "IQD" | "JOD" | "KWD" | "LYD" | "OMR" | "TND" => 3,
            _ => 2,
        };

        Ok(Self {
            code: Ustr::from(code),
            precision,
        })
    }

    /// Returns the invalid sentinel currency with an empty code.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            code: Ustr::from(""),
            precision: 0,
        }
    }

    /// Returns `true` if the currency is valid, i.e. its code is non-empty.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        !self.code.is_empty()
    }

    /// Returns the currency code.
    #[inline]
    #[must_use]
    pub fn code(&self) -> &str {
        self.code.as_str()
    }

    /// Returns the canonical minor-unit precision.
    #[inline]
    #[must_use]
    pub fn precision(&self) -> u8 {
        self.precision
    }
}

impl Default for Currency {
    /// The default currency is the invalid empty sentinel.
    fn default() -> Self {
        Self::empty()
    }
}

impl FromStr for Currency {
    type Err = ParseCurrencyError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::parse(value)
    }
}

impl Debug for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}(code='{}', precision={})",
            stringify!(Currency),
            self.code,
            self.precision
        )
    }
}

impl Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code)
    }
}

impl Serialize for Currency {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.code.as_str())
    }
}

impl<'de> Deserialize<'de> for Currency {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let code: String = Deserialize::deserialize(deserializer)?;
        Self::parse(&code).map_err(serde::de::Error::custom)
    }
}

////////////////////////////////////////////////////////////////////////////////
// Tests
////////////////////////////////////////////////////////////////////////////////
#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("IRR", 0)] // zero-decimal rial
    #[case("CNY", 1)]
    #[case("VND", 1)]
    #[case("BHD", 3)]
    #[case("IQD", 3)]
    #[case("JOD", 3)]
    #[case("KWD", 3)]
    #[case("LYD", 3)]
    #[case("OMR", 3)]
    #[case("TND", 3)]
    #[case("USD", 2)]
    #[case("EUR", 2)]
    #[case("BRL", 2)]
    #[case("usd", 2)] // case is not normalized; lowercase letters are letters
    #[case("irr", 2)] // table lookup misses, so the default applies
    fn test_parse_precision_assignment(#[case] code: &str, #[case] precision: u8) {
        let currency = Currency::parse(code).unwrap();
        assert_eq!(currency.code(), code);
        assert_eq!(currency.precision(), precision);
    }

    #[rstest]
    #[case("")]
    #[case("US")]
    #[case("USDX")]
    #[case("U1D")]
    #[case("US ")]
    #[case(" US")]
    #[case("U.S")]
    #[case("US$")]
    fn test_parse_invalid_code(#[case] code: &str) {
        assert_eq!(
            Currency::parse(code),
            Err(ParseCurrencyError(code.to_string()))
        );
    }

    #[rstest]
    fn test_parse_counts_characters_not_bytes() {
        // Three Unicode letters are a well-formed code even when multibyte.
        let currency = Currency::parse("ΩΩΩ").unwrap();
        assert_eq!(currency.precision(), 2);

        // Four letters stay invalid regardless of encoding width.
        assert!(Currency::parse("ΩΩΩΩ").is_err());
    }

    #[rstest]
    fn test_empty_sentinel() {
        let currency = Currency::empty();
        assert!(!currency.is_valid());
        assert_eq!(currency.code(), "");
        assert_eq!(currency.precision(), 0);
        assert_eq!(currency, Currency::default());
    }

    #[rstest]
    fn test_is_valid_after_parse() {
        assert!(Currency::parse("USD").unwrap().is_valid());
    }

    #[rstest]
    fn test_from_str() {
        let currency: Currency = "BHD".parse().unwrap();
        assert_eq!(currency.precision(), 3);
    }

    #[rstest]
    fn test_display_and_debug() {
        let currency = Currency::parse("USD").unwrap();
        assert_eq!(currency.to_string(), "USD");
        assert_eq!(format!("{currency:?}"), "Currency(code='USD', precision=2)");
    }

    #[rstest]
    fn test_serde_round_trip() {
        let currency = Currency::parse("JOD").unwrap();
        let json = serde_json::to_string(&currency).unwrap();
        assert_eq!(json, "\"JOD\"");
        let back: Currency = serde_json::from_str(&json).unwrap();
        assert_eq!(back, currency);
    }

    #[rstest]
    fn test_serde_rejects_invalid_code() {
        let result: Result<Currency, _> = serde_json::from_str("\"US\"");
        assert!(result.is_err());
    }
}
