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

//! Type stubs to facilitate testing.

use rstest::fixture;

use crate::types::{Currency, Money};

#[fixture]
pub fn currency_usd() -> Currency {
    Currency::parse("USD").unwrap()
}

#[fixture]
pub fn currency_bhd() -> Currency {
    Currency::parse("BHD").unwrap()
}

#[fixture]
pub fn money_usd() -> Money {
    Money::new("500".parse().unwrap(), currency_usd()).unwrap()
}
