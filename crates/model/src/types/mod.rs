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

//! Value types for the monetary domain model.
//!
//! This module provides the immutable value types [`Decimal`], [`Currency`],
//! and [`Money`]. All use exact fixed-point representations internally so
//! that no floating-point drift can occur between parsing and use.
//!
//! # Immutability
//!
//! All value types are **immutable** - once constructed, their values cannot
//! change. Construction goes through validating entry points only:
//!
//! | Type       | Entry point        | Failure                                  |
//! |------------|--------------------|------------------------------------------|
//! | `Decimal`  | `str::parse`       | Malformed text, or over 12 digits.       |
//! | `Currency` | `Currency::parse`  | Not exactly three letters.               |
//! | `Money`    | `Money::new`       | Quantity more precise than the currency. |
//!
//! # Sentinels
//!
//! `Currency` and `Money` each have an explicit empty sentinel (see
//! [`Currency::empty`] and [`Money::empty`]) paired with an `is_valid`
//! predicate. The sentinel is a well-defined value, never an uninitialized
//! one, so callers branching on an error can still hold the zero result
//! safely.

pub mod currency;
pub mod decimal;
pub mod fixed;
pub mod money;

#[cfg(any(test, feature = "stubs"))]
pub mod stubs;

// Re-exports
pub use currency::{Currency, ParseCurrencyError};
pub use decimal::{Decimal, ParseDecimalError};
pub use money::{Money, MoneyError};
