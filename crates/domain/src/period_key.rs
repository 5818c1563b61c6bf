// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Period-key canonicalization.
//!
//! Upstream schedule sources are inconsistent about how they key periods:
//! a plain number ("3"), a parenthesized number with a time annotation
//! ("(3)10:20-11:00"), or a number embedded in surrounding text. Every key
//! comparison and union in the merger goes through the single function in
//! this module so the format messiness stays in one place.

/// Extracts the canonical period number from a possibly-decorated key.
///
/// The first run of ASCII digits in the key wins. Keys with no digits, a
/// zero value, or a number that does not fit a period are not canonical
/// and yield `None`; callers drop the associated entry rather than fail.
///
/// # Examples
///
/// ```
/// use timetable_domain::canonical_period;
///
/// assert_eq!(canonical_period("3"), Some(3));
/// assert_eq!(canonical_period("(3)10:20-11:00"), Some(3));
/// assert_eq!(canonical_period("lunch"), None);
/// ```
#[must_use]
pub fn canonical_period(raw: &str) -> Option<u8> {
    let digits: String = raw
        .chars()
        .skip_while(|c| !c.is_ascii_digit())
        .take_while(char::is_ascii_digit)
        .collect();

    digits.parse::<u8>().ok().filter(|period| *period >= 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_number() {
        assert_eq!(canonical_period("3"), Some(3));
        assert_eq!(canonical_period("8"), Some(8));
    }

    #[test]
    fn test_parenthesized_with_time_annotation() {
        assert_eq!(canonical_period("(3)10:20-11:00"), Some(3));
        assert_eq!(canonical_period("(18)"), Some(18));
    }

    #[test]
    fn test_number_embedded_in_text() {
        assert_eq!(canonical_period("period 5"), Some(5));
    }

    #[test]
    fn test_first_digit_run_wins() {
        assert_eq!(canonical_period("(3)10:20-11:00"), Some(3));
        assert_eq!(canonical_period("12:55 (7)"), Some(12));
    }

    #[test]
    fn test_no_digits_is_not_canonical() {
        assert_eq!(canonical_period("lunch"), None);
        assert_eq!(canonical_period(""), None);
    }

    #[test]
    fn test_zero_is_not_canonical() {
        assert_eq!(canonical_period("0"), None);
        assert_eq!(canonical_period("(0)08:00"), None);
    }

    #[test]
    fn test_oversized_number_is_not_canonical() {
        assert_eq!(canonical_period("999999"), None);
    }

    #[test]
    fn test_same_canonical_period_for_decorated_and_plain_keys() {
        assert_eq!(canonical_period("(3)10:20-11:00"), canonical_period("3"));
    }
}
