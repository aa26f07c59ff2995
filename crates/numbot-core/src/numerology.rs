//! Digit-reduction numerology: Soul, Destiny and Purpose numbers from a birth date.
//!
//! Pipeline: `"DD.MM.YYYY"` → [`BirthDate`] → [`NumerologyResult`]. Every stage is
//! a pure function; only parsing can fail.

use std::{fmt, str::FromStr};

use chrono::NaiveDate;
use serde::Serialize;

use crate::errors::DateError;

/// Parse `DD.MM.YYYY` and derive all three numbers.
pub fn compute(date_text: &str) -> Result<NumerologyResult, DateError> {
    BirthDate::parse(date_text).map(|d| d.numerology())
}

/// Sum of the decimal digits of `n`, taken once.
pub fn digit_sum(mut n: u64) -> u64 {
    let mut sum = 0;
    while n > 0 {
        sum += n % 10;
        n /= 10;
    }
    sum
}

/// Digital root: sum the digits until a single digit remains.
///
/// Returns 0 only for 0.
pub fn digit_reduce(mut n: u64) -> u8 {
    while n > 9 {
        n = digit_sum(n);
    }
    n as u8
}

/// A validated calendar date (proleptic Gregorian, years 1..=9999).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct BirthDate {
    day: u32,
    month: u32,
    year: u32,
}

impl BirthDate {
    /// Strict `DD.MM.YYYY`: two digits, dot, two digits, dot, four digits.
    ///
    /// Surrounding whitespace is not tolerated; callers trim first.
    pub fn parse(text: &str) -> Result<Self, DateError> {
        const DIGIT_POSITIONS: [usize; 8] = [0, 1, 3, 4, 6, 7, 8, 9];

        let bytes = text.as_bytes();
        if bytes.len() != 10 || bytes[2] != b'.' || bytes[5] != b'.' {
            return Err(DateError::InvalidFormat);
        }
        if !DIGIT_POSITIONS.iter().all(|&i| bytes[i].is_ascii_digit()) {
            return Err(DateError::InvalidFormat);
        }

        let field = |digits: &[u8]| {
            digits
                .iter()
                .fold(0u32, |acc, b| acc * 10 + u32::from(b - b'0'))
        };

        Self::from_dmy(field(&bytes[0..2]), field(&bytes[3..5]), field(&bytes[6..10]))
    }

    /// Validate numeric fields against the calendar.
    pub fn from_dmy(day: u32, month: u32, year: u32) -> Result<Self, DateError> {
        let exists = (1..=9999).contains(&year)
            && NaiveDate::from_ymd_opt(year as i32, month, day).is_some();
        if !exists {
            return Err(DateError::InvalidDate { day, month, year });
        }
        Ok(Self { day, month, year })
    }

    pub fn day(&self) -> u32 {
        self.day
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn year(&self) -> u32 {
        self.year
    }

    /// The eight digits of the zero-padded `DDMMYYYY` string.
    ///
    /// Day 1 contributes `0, 1`, never just `1`.
    pub fn digits(&self) -> [u8; 8] {
        let mut out = [0u8; 8];
        let mut i = 0;
        for (value, width) in [(self.day, 2), (self.month, 2), (self.year, 4)] {
            for place in (0..width).rev() {
                out[i] = (value / 10u32.pow(place) % 10) as u8;
                i += 1;
            }
        }
        out
    }

    pub fn numerology(&self) -> NumerologyResult {
        NumerologyResult::from_date(self)
    }
}

impl FromStr for BirthDate {
    type Err = DateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for BirthDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}.{:02}.{:04}", self.day, self.month, self.year)
    }
}

/// The three life numbers, each in `1..=9`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct NumerologyResult {
    /// Digits of `DD`.
    pub soul: u8,
    /// All digits of `DDMMYYYY`.
    pub destiny: u8,
    /// Digits of `DDMM`.
    pub purpose: u8,
}

impl NumerologyResult {
    pub fn from_date(date: &BirthDate) -> Self {
        let digits = date.digits();
        let reduce = |ds: &[u8]| digit_reduce(ds.iter().map(|&d| u64::from(d)).sum());

        Self {
            soul: reduce(&digits[..2]),
            destiny: reduce(&digits[..]),
            purpose: reduce(&digits[..4]),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn closed_form(n: u64) -> u8 {
        if n == 0 {
            0
        } else {
            (1 + (n - 1) % 9) as u8
        }
    }

    #[test]
    fn reduce_keeps_single_digits() {
        for n in 0..=9u64 {
            assert_eq!(digit_reduce(n), n as u8);
        }
    }

    #[test]
    fn reduce_iterates_until_single_digit() {
        assert_eq!(digit_reduce(24), 6);
        assert_eq!(digit_reduce(29), 2);
        assert_eq!(digit_reduce(99_999_999_999), 9);
        assert_eq!(digit_reduce(u64::MAX), closed_form(u64::MAX));
    }

    #[test]
    fn reduce_matches_closed_form_up_to_ten_million() {
        for n in 0..=10_000_000u64 {
            assert_eq!(digit_reduce(n), closed_form(n), "n = {n}");
        }
    }

    #[test]
    fn golden_date() {
        let r = compute("15.05.1993").unwrap();
        assert_eq!(
            r,
            NumerologyResult {
                soul: 6,
                destiny: 6,
                purpose: 2
            }
        );
    }

    #[test]
    fn zero_padded_boundary_date() {
        let d = BirthDate::parse("01.01.2000").unwrap();
        assert_eq!(d.digits(), [0, 1, 0, 1, 2, 0, 0, 0]);

        let r = d.numerology();
        assert_eq!((r.soul, r.destiny, r.purpose), (1, 4, 2));
    }

    #[test]
    fn rejects_malformed_text() {
        for s in [
            "5.5.1993",
            "15-05-1993",
            "15.05.93",
            "abc",
            "",
            " 15.05.1993",
            "15.05.1993\n",
            "15.05.199x",
            "+5.05.1993",
            "15.05.199٣",
            "15..5.1993",
        ] {
            assert_eq!(BirthDate::parse(s), Err(DateError::InvalidFormat), "{s:?}");
        }
    }

    #[test]
    fn rejects_days_missing_from_calendar() {
        for s in [
            "31.04.2024",
            "29.02.2023",
            "29.02.1900",
            "00.01.2000",
            "32.01.2000",
            "01.00.2000",
            "01.13.2000",
            "01.01.0000",
        ] {
            assert!(
                matches!(BirthDate::parse(s), Err(DateError::InvalidDate { .. })),
                "{s:?}"
            );
        }

        assert_eq!(
            compute("31.04.2024"),
            Err(DateError::InvalidDate {
                day: 31,
                month: 4,
                year: 2024
            })
        );
    }

    #[test]
    fn accepts_leap_days() {
        assert!(compute("29.02.2024").is_ok());
        assert!(compute("29.02.2000").is_ok());
    }

    #[test]
    fn display_round_trips_through_from_str() {
        let d: BirthDate = "07.09.0815".parse().unwrap();
        assert_eq!((d.day(), d.month(), d.year()), (7, 9, 815));
        assert_eq!(d.to_string(), "07.09.0815");
    }

    #[test]
    fn repeated_calls_agree() {
        let first = compute("28.11.1987").unwrap();
        for _ in 0..100 {
            assert_eq!(compute("28.11.1987").unwrap(), first);
        }
    }

    #[test]
    fn every_day_from_1900_to_2100_is_in_range() {
        let mut day = NaiveDate::from_ymd_opt(1900, 1, 1).unwrap();
        let last = NaiveDate::from_ymd_opt(2100, 12, 31).unwrap();
        while day <= last {
            let text = day.format("%d.%m.%Y").to_string();
            let r = compute(&text).unwrap();
            for n in [r.soul, r.destiny, r.purpose] {
                assert!((1..=9).contains(&n), "{text}: {r:?}");
            }
            day = day.succ_opt().unwrap();
        }
    }

    #[test]
    fn serializes_as_plain_fields() {
        let r = compute("15.05.1993").unwrap();
        assert_eq!(
            serde_json::to_value(r).unwrap(),
            serde_json::json!({ "soul": 6, "destiny": 6, "purpose": 2 })
        );
    }

    proptest! {
        #[test]
        fn valid_dates_yield_single_nonzero_digits(
            day in 1u32..=31,
            month in 1u32..=12,
            year in 1u32..=9999,
        ) {
            let date = BirthDate::from_dmy(day, month, year);
            prop_assume!(date.is_ok());
            let date = date.unwrap();

            let r = compute(&date.to_string()).unwrap();
            prop_assert_eq!(r, date.numerology());
            for n in [r.soul, r.destiny, r.purpose] {
                prop_assert!((1..=9).contains(&n));
            }
        }
    }
}
