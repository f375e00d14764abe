// SPDX-FileCopyrightText: Copyright © 2025 Serpent OS Developers
//
// SPDX-License-Identifier: MPL-2.0

use crate::{Error, Suffix};

/// Parse a size string such as `10G`, `512M`, `2048k` or `1024` into bytes.
///
/// Leading whitespace and a sign are accepted before the numeral, but only
/// non-negative values are valid. At most one suffix character may follow the
/// numeral, with nothing after it. Suffixes are powers of two.
///
/// Trailing content is counted in characters rather than bytes, so a single
/// multi-byte character such as `é` is reported as an invalid suffix, not as
/// trailing characters. Either way the input is rejected.
///
/// # Arguments
/// * `input` - The size string
/// * `max_size` - Inclusive upper bound for the result
///
/// # Returns
/// The size in bytes, guaranteed to lie within `0..=max_size`
///
/// # Examples
///
/// ```
/// assert_eq!(units::parse_size("1K", 1500), Ok(1024));
/// assert!(units::parse_size("2K", 1500).is_err());
/// ```
pub fn parse_size(input: &str, max_size: i64) -> Result<i64, Error> {
    let (numeral, rest) = split_numeral(input).ok_or_else(|| Error::InvalidNumber {
        input: input.to_owned(),
    })?;

    let mut trailing = rest.chars();
    let size = match (trailing.next(), trailing.next()) {
        (None, _) => numeral,
        (Some(c), None) => {
            let suffix = Suffix::try_from(c)?;

            // Compare before shifting so the shift itself can never overflow
            if numeral > max_size >> suffix.shift() {
                return Err(Error::Overflow {
                    suffix,
                    input: input.to_owned(),
                });
            }

            numeral << suffix.shift()
        }
        (Some(_), Some(_)) => {
            return Err(Error::TrailingCharacters {
                trailing: rest.to_owned(),
            })
        }
    };

    if size > max_size {
        return Err(Error::ExceedsMaximum {
            value: size,
            max: max_size,
        });
    }

    Ok(size)
}

/// Parse a size string bounded only by the signed 64-bit range
pub fn parse_size_unbounded(input: &str) -> Result<i64, Error> {
    parse_size(input, i64::MAX)
}

/// Split the leading decimal numeral from `input`.
///
/// Returns `None` when there are no digits, the literal does not fit an `i64`,
/// or the value is negative.
fn split_numeral(input: &str) -> Option<(i64, &str)> {
    let trimmed = input.trim_start_matches(is_space);

    let (negative, unsigned) = if let Some(s) = trimmed.strip_prefix('-') {
        (true, s)
    } else if let Some(s) = trimmed.strip_prefix('+') {
        (false, s)
    } else {
        (false, trimmed)
    };

    let len = unsigned.bytes().take_while(u8::is_ascii_digit).count();
    if len == 0 {
        return None;
    }

    let (digits, rest) = unsigned.split_at(len);
    let value = digits.parse::<i64>().ok()?;

    // "-0" is still zero
    if negative && value != 0 {
        return None;
    }

    Some((value, rest))
}

/// Whitespace permitted ahead of the numeral
fn is_space(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\x0b' | '\x0c' | '\r')
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_log::test;

    const TINY_MAX: i64 = 1500;

    const SUFFIXES: [(char, u32); 5] = [('K', 10), ('M', 20), ('G', 30), ('T', 40), ('P', 50)];

    #[test]
    fn test_plain_numbers() {
        assert_eq!(parse_size_unbounded("1024"), Ok(1024));
        assert_eq!(parse_size_unbounded("1"), Ok(1));
        assert_eq!(parse_size("0", 0), Ok(0));
        assert_eq!(parse_size_unbounded("+3"), Ok(3));
        assert_eq!(parse_size_unbounded("+3M"), Ok(3 << 20));
        assert_eq!(parse_size_unbounded(" +7k"), Ok(7 << 10));
        assert_eq!(parse_size_unbounded("-0G"), Ok(0));
        assert_eq!(parse_size_unbounded("-0"), Ok(0));

        for n in [0i64, 7, 512, 4096, 1 << 40, i64::MAX] {
            assert_eq!(parse_size_unbounded(&n.to_string()), Ok(n));
        }
    }

    #[test]
    fn test_suffixes_both_cases() {
        for (upper, shift) in SUFFIXES {
            let lower = upper.to_ascii_lowercase();
            for n in [0i64, 1, 2, 5, 1000] {
                let expected = n << shift;
                assert_eq!(parse_size_unbounded(&format!("{n}{upper}")), Ok(expected));
                assert_eq!(parse_size_unbounded(&format!("{n}{lower}")), Ok(expected));
            }
        }
    }

    #[test]
    fn test_suffix_values() {
        assert_eq!(parse_size_unbounded("1k"), Ok(1 << 10));
        assert_eq!(parse_size_unbounded("2M"), Ok(2 << 20));
        assert_eq!(parse_size_unbounded("3g"), Ok(3 << 30));
        assert_eq!(parse_size_unbounded("4T"), Ok(4 << 40));
        assert_eq!(parse_size_unbounded("5P"), Ok(5 << 50));
    }

    #[test]
    fn test_tiny_maximum() {
        assert!(parse_size("2K", TINY_MAX).is_err());
        assert_eq!(parse_size("1K", TINY_MAX), Ok(1024));
        assert_eq!(parse_size("1400", TINY_MAX), Ok(1400));
        assert_eq!(parse_size("1500", TINY_MAX), Ok(1500));
        assert_eq!(
            parse_size("1600", TINY_MAX),
            Err(Error::ExceedsMaximum {
                value: 1600,
                max: TINY_MAX
            })
        );
    }

    #[test]
    fn test_shifted_beyond_maximum() {
        for (suffix, shift) in SUFFIXES {
            let max = 3i64 << shift;
            assert_eq!(parse_size(&format!("3{suffix}"), max), Ok(max));
            let err = parse_size(&format!("4{suffix}"), max).unwrap_err();
            assert!(matches!(err, Error::Overflow { .. } | Error::ExceedsMaximum { .. }));
        }
    }

    #[test]
    fn test_largest_with_suffix() {
        let largest = i64::MAX >> 50;
        assert_eq!(parse_size_unbounded(&format!("{largest}P")), Ok(largest << 50));

        let input = format!("{}P", largest + 1);
        assert_eq!(
            parse_size_unbounded(&input),
            Err(Error::Overflow {
                suffix: Suffix::Pebi,
                input: input.clone()
            })
        );

        let largest = i64::MAX >> 40;
        assert_eq!(parse_size_unbounded(&format!("{largest}t")), Ok(largest << 40));
        assert!(matches!(
            parse_size_unbounded(&format!("{}t", largest + 1)),
            Err(Error::Overflow { .. })
        ));
    }

    #[test]
    fn test_literal_overflow() {
        let too_large = format!("{}99", i64::MAX / 10);
        assert_eq!(
            parse_size_unbounded(&too_large),
            Err(Error::InvalidNumber { input: too_large.clone() })
        );
        assert!(parse_size_unbounded("9223372036854775808").is_err());
        assert!(parse_size_unbounded("99999999999999999999K").is_err());
    }

    #[test]
    fn test_leading_whitespace() {
        assert_eq!(parse_size_unbounded(" 10G"), Ok(10 << 30));
        assert_eq!(parse_size_unbounded("\t\n 7k"), Ok(7 << 10));
        assert!(matches!(parse_size_unbounded("   "), Err(Error::InvalidNumber { .. })));
    }

    #[test]
    fn test_invalid_numbers() {
        for input in ["", "-1", "-5K", "abc", "K", "+", "-", "+-1", "1.5G"] {
            let result = parse_size_unbounded(input);
            match input {
                // digits present, then two trailing characters
                "1.5G" => assert!(matches!(result, Err(Error::TrailingCharacters { .. }))),
                _ => assert!(
                    matches!(result, Err(Error::InvalidNumber { .. })),
                    "{input:?} gave {result:?}"
                ),
            }
        }
    }

    #[test]
    fn test_invalid_suffix() {
        assert_eq!(
            parse_size_unbounded("10X"),
            Err(Error::InvalidSuffix { suffix: 'X' })
        );
        assert_eq!(
            parse_size_unbounded("10 "),
            Err(Error::InvalidSuffix { suffix: ' ' })
        );
        assert_eq!(
            parse_size_unbounded("10é"),
            Err(Error::InvalidSuffix { suffix: 'é' })
        );
    }

    #[test]
    fn test_trailing_characters() {
        assert_eq!(
            parse_size_unbounded("10Gabc"),
            Err(Error::TrailingCharacters {
                trailing: "Gabc".into()
            })
        );
        assert_eq!(
            parse_size_unbounded("10 G"),
            Err(Error::TrailingCharacters { trailing: " G".into() })
        );
        assert!(matches!(
            parse_size_unbounded("0x10"),
            Err(Error::TrailingCharacters { .. })
        ));
    }

    #[test]
    fn test_negative_maximum() {
        assert!(matches!(parse_size("0", -1), Err(Error::ExceedsMaximum { .. })));
        assert!(matches!(parse_size("0K", -1), Err(Error::Overflow { .. })));
    }

    #[test]
    fn test_repeatable() {
        for input in ["1K", "2K", "junk", " 9m"] {
            assert_eq!(parse_size(input, TINY_MAX), parse_size(input, TINY_MAX));
        }
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;
        use proptest::test_runner::Config;
        use test_log::test;

        fn suffix_strategy() -> impl Strategy<Value = (char, u32)> {
            prop::sample::select(SUFFIXES.to_vec())
        }

        proptest! {
            #![proptest_config(Config {
                failure_persistence: None,
                ..Config::default()
            })]

            #[test]
            fn plain_numbers_round_trip(n in 0..=i64::MAX, slack in 0..=i64::MAX) {
                let max = n.saturating_add(slack);
                prop_assert_eq!(parse_size(&n.to_string(), max), Ok(n));
            }

            #[test]
            fn plain_numbers_above_maximum_rejected(max in 0..i64::MAX, excess in 1..=i64::MAX) {
                let n = max.saturating_add(excess);
                prop_assert_eq!(
                    parse_size(&n.to_string(), max),
                    Err(Error::ExceedsMaximum { value: n, max })
                );
            }

            #[test]
            fn suffixed_numbers_shift_or_fail(
                n in 0..=(i64::MAX >> 10),
                (suffix, shift) in suffix_strategy(),
                lower in any::<bool>(),
                max in 0..=i64::MAX,
            ) {
                let suffix = if lower { suffix.to_ascii_lowercase() } else { suffix };
                let result = parse_size(&format!("{n}{suffix}"), max);

                if n <= max >> shift {
                    prop_assert_eq!(result, Ok(n << shift));
                } else {
                    prop_assert!(
                        matches!(result, Err(Error::Overflow { .. }) | Err(Error::ExceedsMaximum { .. })),
                        "{}{} with max {} gave {:?}", n, suffix, max, result
                    );
                }
            }

            #[test]
            fn suffixed_within_maximum_accepted(
                n in 0..=(i64::MAX >> 50),
                (suffix, shift) in suffix_strategy(),
                lower in any::<bool>(),
            ) {
                let suffix = if lower { suffix.to_ascii_lowercase() } else { suffix };
                prop_assert_eq!(parse_size(&format!("{n}{suffix}"), n << shift), Ok(n << shift));
            }

            #[test]
            fn results_never_exceed_maximum(input in "\\PC{0,16}", max in any::<i64>()) {
                if let Ok(size) = parse_size(&input, max) {
                    prop_assert!(size >= 0 && size <= max);
                }
            }

            #[test]
            fn parsing_is_repeatable(input in "[ +\\-]?[0-9]{0,20}[kKmMgGtTpPxX ]{0,2}", max in any::<i64>()) {
                prop_assert_eq!(parse_size(&input, max), parse_size(&input, max));
            }
        }
    }
}
