//! User-facing message texts (Telegram HTML).
//!
//! The core only returns numbers and typed errors; every sentence the user
//! reads is produced here.

use numbot_core::{formatting::escape_html, DateError, NumerologyResult, VedicForecast};

pub const VEDIC_CALLBACK: &str = "vedic_start_button";
pub const VEDIC_BUTTON: &str = "Vedic year forecast";

const DATE_EXAMPLE: &str = "12.02.1992";
const VEDIC_EXAMPLE: &str = "12.05.2021";

const MEANINGS: [&str; 9] = [
    "Leadership and independence. You start things and carve your own road.",
    "Partnership and diplomacy. You sense other people and bring them together.",
    "Creativity and expression. Words and art come naturally to you.",
    "Stability and work. You build patiently on solid foundations.",
    "Freedom and change. New experience is what keeps you moving.",
    "Care and responsibility. Home and harmony matter most to you.",
    "Analysis and inner search. You look for the truth beneath the surface.",
    "Power and achievement. You handle resources and authority well.",
    "Compassion and completion. You serve a wider world and let go gracefully.",
];

/// Meaning of a reduced number; `None` outside `1..=9`.
pub fn meaning(n: u8) -> Option<&'static str> {
    MEANINGS.get(usize::from(n).checked_sub(1)?).copied()
}

pub fn greeting() -> String {
    "Hi! I'm a numerology assistant. Send me your birth date and I'll work out \
your Soul, Destiny and Purpose numbers."
        .to_string()
}

pub fn date_prompt() -> String {
    format!("Send your date of birth\n\nExample: <code>{DATE_EXAMPLE}</code>")
}

pub fn help() -> String {
    format!(
        "{}\n\n<b>Commands</b>\n/start - start over\n/vedic DD.MM.YYYY - vedic forecast for a year\n/help - this message",
        date_prompt()
    )
}

pub fn wrong_length() -> String {
    format!("The date was entered incorrectly! Please try again.\n\nExample: <code>{DATE_EXAMPLE}</code>")
}

pub fn date_error(err: &DateError) -> String {
    match err {
        DateError::InvalidFormat => format!(
            "Please use the DD.MM.YYYY format.\n\nExample: <code>{DATE_EXAMPLE}</code>"
        ),
        DateError::InvalidDate { day, month, year } => format!(
            "There is no such date: <code>{day:02}.{month:02}.{year:04}</code>. Check the day and month."
        ),
    }
}

pub fn unauthorized() -> String {
    "Unauthorized. Contact the bot owner for access.".to_string()
}

pub fn unknown_command(name: &str) -> String {
    format!("Unknown command: /{}\n\nSee /help", escape_html(name))
}

/// One message per number: Soul, Destiny, Purpose. `date` is echoed back.
pub fn numbers(date: &str, result: &NumerologyResult) -> Vec<String> {
    let date = escape_html(date);
    [
        ("Soul", "the digits of your birth day", result.soul),
        ("Destiny", "all digits of your birth date", result.destiny),
        ("Purpose", "the digits of your birth day and month", result.purpose),
    ]
    .into_iter()
    .map(|(label, source, n)| {
        format!(
            "<b>{label} number: {n}</b>\n<i>From {source} ({date})</i>\n\n{}",
            meaning(n).unwrap_or_default()
        )
    })
    .collect()
}

pub fn vedic_prompt() -> String {
    format!(
        "Send your birthday with the year you want a forecast for:\n<code>/vedic DD.MM.YYYY</code>\n\nExample: <code>/vedic {VEDIC_EXAMPLE}</code>"
    )
}

pub fn vedic_error(err: &DateError) -> String {
    match err {
        DateError::InvalidFormat => format!(
            "Wrong format. Use <code>/vedic DD.MM.YYYY</code>\n\nExample: <code>/vedic {VEDIC_EXAMPLE}</code>"
        ),
        DateError::InvalidDate { day, month, year } => format!(
            "Your birthday {day:02}.{month:02} does not occur in {year}."
        ),
    }
}

/// Caption of the PDF forecast.
pub fn vedic_caption(f: &VedicForecast) -> String {
    format!(
        "<b>Vedic forecast for {}</b>\nForecast number: {}",
        f.year, f.reduced
    )
}

pub fn vedic(f: &VedicForecast) -> String {
    let chain = f
        .reduction_chain()
        .iter()
        .map(u64::to_string)
        .collect::<Vec<_>>()
        .join(" → ");

    format!(
        "<b>Vedic forecast for {year}</b>\n\n\
Birthday: {day:02}.{month:02}\n\
Last two digits of the year: {yy:02}\n\
Weekday in {year}: {weekday}\n\
Planet number: {planet}\n\n\
<b>Calculation</b>\n\
{day} + {month} + {yy} + {planet} = {sum}\n\
Reduction: {chain}\n\n\
<b>Forecast number: {reduced}</b>\n\n{meaning}",
        year = f.year,
        day = f.day,
        month = f.month,
        yy = f.year_last_two,
        weekday = weekday_name(f.weekday),
        planet = f.planet_number,
        sum = f.sum_raw,
        reduced = f.reduced,
        meaning = meaning(f.reduced).unwrap_or_default(),
    )
}

pub fn weekday_name(w: chrono::Weekday) -> &'static str {
    use chrono::Weekday::*;
    match w {
        Mon => "Monday",
        Tue => "Tuesday",
        Wed => "Wednesday",
        Thu => "Thursday",
        Fri => "Friday",
        Sat => "Saturday",
        Sun => "Sunday",
    }
}
