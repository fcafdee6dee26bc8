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

//! The validation gate in front of currency conversion.
//!
//! Conversion rates come from an external collaborator that is not part of
//! this core, so [`convert`] validates both legs of a conversion and stops
//! there: the valid path deliberately yields the empty amount rather than
//! inventing rate arithmetic.

use thiserror::Error;

use crate::types::{Currency, Money};

/// The error type returned when a conversion request fails validation.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum ConversionError {
    /// The source amount is the invalid sentinel.
    #[error("invalid amount to be converted")]
    InvalidAmount,
    /// The target currency is the invalid sentinel.
    #[error("invalid currency to convert to")]
    InvalidCurrency,
}

/// Validates a conversion of `amount` into the `to` currency.
///
/// The source amount is checked before the target currency. On the valid
/// path this returns [`Money::empty`]; applying an actual conversion rate is
/// future external work.
///
/// # Errors
///
/// Returns an error if `amount` or `to` is invalid.
pub fn convert(amount: Money, to: Currency) -> Result<Money, ConversionError> {
    if !amount.is_valid() {
        return Err(ConversionError::InvalidAmount);
    }

    if !to.is_valid() {
        return Err(ConversionError::InvalidCurrency);
    }

    log::debug!("no conversion rate source wired, returning the empty amount");
    Ok(Money::empty())
}

////////////////////////////////////////////////////////////////////////////////
// Tests
////////////////////////////////////////////////////////////////////////////////
#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;
    use crate::types::stubs::money_usd;

    #[rstest]
    fn test_convert_from_invalid_amount() {
        let target = Currency::parse("BRL").unwrap();
        let result = convert(Money::empty(), target);
        assert_eq!(result, Err(ConversionError::InvalidAmount));
    }

    #[rstest]
    fn test_convert_to_invalid_currency(money_usd: Money) {
        let result = convert(money_usd, Currency::empty());
        assert_eq!(result, Err(ConversionError::InvalidCurrency));
    }

    #[rstest]
    fn test_convert_checks_amount_before_currency() {
        let result = convert(Money::empty(), Currency::empty());
        assert_eq!(result, Err(ConversionError::InvalidAmount));
    }

    #[rstest]
    fn test_convert_valid_path_returns_empty_stub(money_usd: Money) {
        let target = Currency::parse("EUR").unwrap();
        let converted = convert(money_usd, target).unwrap();
        assert_eq!(converted, Money::empty());
        assert!(!converted.is_valid());
    }
}
