//! Vedic yearly forecast: one reduced number for a birthday in a target year.

use std::sync::OnceLock;

use chrono::{Datelike, NaiveDate, Weekday};
use regex::Regex;

use crate::{
    errors::DateError,
    numerology::{digit_reduce, digit_sum},
};

/// Planet number ruling a weekday.
pub fn planet_number(weekday: Weekday) -> u8 {
    match weekday {
        Weekday::Mon => 2, // Moon
        Weekday::Tue => 9, // Mars
        Weekday::Wed => 5, // Mercury
        Weekday::Thu => 3, // Jupiter
        Weekday::Fri => 6, // Venus
        Weekday::Sat => 8, // Saturn
        Weekday::Sun => 1, // Sun
    }
}

fn input_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    // `\d` would also accept non-ASCII digits, which `u32::from_str` rejects.
    RE.get_or_init(|| {
        Regex::new(r"^\s*([0-9]{1,2})\.([0-9]{1,2})\.([0-9]{4})\s*$").expect("valid regex")
    })
}

/// Forecast for the birthday `day.month` falling in `year`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VedicForecast {
    pub day: u32,
    pub month: u32,
    pub year: u32,
    pub year_last_two: u32,
    pub weekday: Weekday,
    pub planet_number: u8,
    /// `day + month + year_last_two + planet_number`
    pub sum_raw: u32,
    pub reduced: u8,
}

impl VedicForecast {
    /// Parse `D.M.YYYY` (one or two digit day and month, surrounding
    /// whitespace allowed) where the year is the forecast year.
    pub fn parse(text: &str) -> Result<Self, DateError> {
        let caps = input_re()
            .captures(text)
            .ok_or(DateError::InvalidFormat)?;

        let num = |i: usize| -> Result<u32, DateError> {
            caps[i].parse::<u32>().map_err(|_| DateError::InvalidFormat)
        };

        Self::for_year(num(1)?, num(2)?, num(3)?)
    }

    pub fn for_year(day: u32, month: u32, year: u32) -> Result<Self, DateError> {
        let date = (1..=9999)
            .contains(&year)
            .then(|| NaiveDate::from_ymd_opt(year as i32, month, day))
            .flatten()
            .ok_or(DateError::InvalidDate { day, month, year })?;

        let weekday = date.weekday();
        let planet_number = planet_number(weekday);
        let year_last_two = year % 100;
        let sum_raw = day + month + year_last_two + u32::from(planet_number);

        Ok(Self {
            day,
            month,
            year,
            year_last_two,
            weekday,
            planet_number,
            sum_raw,
            reduced: digit_reduce(u64::from(sum_raw)),
        })
    }

    /// Every value the reduction passes through, starting at `sum_raw` and
    /// ending at `reduced`.
    pub fn reduction_chain(&self) -> Vec<u64> {
        let mut chain = vec![u64::from(self.sum_raw)];
        let mut n = u64::from(self.sum_raw);
        while n > 9 {
            n = digit_sum(n);
            chain.push(n);
        }
        chain
    }
}
