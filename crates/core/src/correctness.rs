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

//! Functions for condition checks similar to the *design by contract* philosophy,
//! enabling logical correctness-checks of function arguments.
//!
//! The checks return an `anyhow::Result` so that callers can either propagate
//! the error or panic via `.expect(FAILED)` in infallible constructors.

/// Standard message prefix for failed correctness checks.
pub const FAILED: &str = "Condition failed";

/// Checks the `predicate` is true.
///
/// # Errors
///
/// Returns an error with `fail_msg` if `predicate` is false.
#[inline(always)]
pub fn check_predicate_true(predicate: bool, fail_msg: &str) -> anyhow::Result<()> {
    if !predicate {
        anyhow::bail!("{fail_msg}")
    }
    Ok(())
}

/// Checks the string `s` has semantic meaning and contains only ASCII characters.
///
/// # Errors
///
/// Returns an error if:
/// - `s` is an empty string.
/// - `s` consists solely of whitespace characters.
/// - `s` contains a non-ASCII character.
pub fn check_valid_string(s: &str, param: &str) -> anyhow::Result<()> {
    if s.is_empty() {
        anyhow::bail!("invalid string for '{param}', was empty")
    }
    if s.chars().all(char::is_whitespace) {
        anyhow::bail!("invalid string for '{param}', was all whitespace")
    }
    if !s.is_ascii() {
        anyhow::bail!("invalid string for '{param}' contained a non-ASCII char, was '{s}'")
    }
    Ok(())
}

////////////////////////////////////////////////////////////////////////////////
// Tests
////////////////////////////////////////////////////////////////////////////////
#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(true)]
    fn test_check_predicate_true_when_true(#[case] predicate: bool) {
        assert!(check_predicate_true(predicate, "the predicate was false").is_ok());
    }

    #[rstest]
    fn test_check_predicate_true_when_false() {
        let result = check_predicate_true(false, "the predicate was false");
        assert_eq!(result.unwrap_err().to_string(), "the predicate was false");
    }

    #[rstest]
    #[case("USD")]
    #[case("a")]
    #[case("a b c")]
    fn test_check_valid_string_ok(#[case] s: &str) {
        assert!(check_valid_string(s, "value").is_ok());
    }

    #[rstest]
    #[case("")] // empty
    #[case("   ")] // all whitespace
    #[case("abc\u{00e9}")] // non-ASCII
    fn test_check_valid_string_err(#[case] s: &str) {
        assert!(check_valid_string(s, "value").is_err());
    }
}
