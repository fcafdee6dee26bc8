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

//! The monetary domain model for the moneta library.
//!
//! Parses decimal text into exact scaled integers, classifies currencies by
//! their minor-unit precision, binds the two into validated amounts, and
//! guards currency conversion behind a validation gate.
//!
//! The data flow through the model is:
//!
//! ```text
//! text -> Decimal (parse) -> + Currency (classify) -> Money (reconcile) -> convert (gate)
//! ```
//!
//! All types are immutable `Copy` value types with no shared state; every
//! operation is a pure function over its inputs and is safe to call from any
//! number of threads without coordination.

#![deny(unsafe_code)]
#![deny(missing_debug_implementations)]

pub mod conversion;
pub mod types;

// Re-exports
pub use conversion::{ConversionError, convert};
pub use types::{
    Currency, Decimal, Money, MoneyError, ParseCurrencyError, ParseDecimalError,
    fixed::{MAX_CURRENCY_PRECISION, MAX_DECIMAL_DIGITS},
};
