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

//! Represents an amount of money in a specified currency denomination.

use std::fmt::{Debug, Display};

use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

use crate::types::{Currency, Decimal};

/// The error type returned when a [`Money`] amount cannot be constructed.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum MoneyError {
    /// The quantity carries more fractional digits than the currency allows,
    /// and rescaling down would silently round.
    #[error("quantity precision {quantity} exceeds currency precision {currency}")]
    WrongPrecision {
        /// The fractional digit count of the quantity.
        quantity: u8,
        /// The minor-unit count of the currency.
        currency: u8,
    },
}

/// Represents a quantity of money in a specific [`Currency`].
///
/// Construction reconciles the quantity's precision with the currency's
/// minor-unit count: a quantity that is too precise is rejected rather than
/// rounded, and one that is less precise is rescaled up without changing its
/// magnitude. The empty sentinel (see [`Money::empty`]) is the canonical
/// invalid amount.
#[repr(C)]
#[derive(Clone, Copy, Default, Hash, PartialEq, Eq)]
pub struct Money {
    quantity: Decimal,
    currency: Currency,
}

impl Money {
    /// Creates a new [`Money`] instance, upgrading the quantity to the
    /// currency's minor-unit precision.
    ///
    /// On success the quantity's subunits are multiplied by
    /// `10^(currency.precision - quantity.precision)` so the numeric value is
    /// preserved exactly.
    ///
    /// # Errors
    ///
    /// Returns an error if `quantity.precision()` exceeds
    /// `currency.precision()`, which cannot be reconciled without rounding.
    pub fn new(quantity: Decimal, currency: Currency) -> Result<Self, MoneyError> {
        if quantity.precision() > currency.precision() {
            return Err(MoneyError::WrongPrecision {
                quantity: quantity.precision(),
                currency: currency.precision(),
            });
        }

        Ok(Self {
            quantity: quantity.rescale_up(currency.precision()),
            currency,
        })
    }

    /// Returns the invalid sentinel amount: zero quantity, empty currency.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            quantity: Decimal::ZERO,
            currency: Currency::empty(),
        }
    }

    /// Returns `true` if the amount is valid, i.e. its currency is valid.
    ///
    /// A quantity is always structurally valid once constructed, so validity
    /// is driven entirely by the currency leg.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.currency.is_valid()
    }

    /// Returns the quantity, rescaled to the currency's precision.
    #[inline]
    #[must_use]
    pub fn quantity(&self) -> Decimal {
        self.quantity
    }

    /// Returns the currency denomination.
    #[inline]
    #[must_use]
    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// Returns `true` if the value of this instance is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.quantity.is_zero()
    }
}

impl Debug for Money {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}({}, {})",
            stringify!(Money),
            self.quantity,
            self.currency
        )
    }
}

impl Display for Money {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.quantity, self.currency)
    }
}

/// Wire shape for [`Money`] serialization.
#[derive(Serialize, Deserialize)]
struct MoneyParts {
    quantity: Decimal,
    currency: Currency,
}

impl Serialize for Money {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        MoneyParts {
            quantity: self.quantity,
            currency: self.currency,
        }
        .serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Money {
    /// Deserialization re-runs [`Money::new`], so a decoded amount satisfies
    /// the same precision reconciliation as a constructed one.
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let parts = MoneyParts::deserialize(deserializer)?;
        Self::new(parts.quantity, parts.currency).map_err(serde::de::Error::custom)
    }
}
