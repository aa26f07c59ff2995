/// Why a date string was rejected.
///
/// Both kinds are detected at parse time; the calculator never returns a
/// partial result.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum DateError {
    /// The text does not match the expected `DD.MM.YYYY` shape.
    #[error("date must be in DD.MM.YYYY format")]
    InvalidFormat,

    /// Well-formed, but no such calendar day exists.
    #[error("no such calendar date: {day:02}.{month:02}.{year:04}")]
    InvalidDate { day: u32, month: u32, year: u32 },
}

/// Core error type.
///
/// Adapter crates map their specific errors into this type so the bot can
/// handle failures consistently. Date problems stay [`DateError`]: they are
/// answered to the user, never propagated.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("config error: {0}")]
    Config(String),

    #[error("external error: {0}")]
    External(String),
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_date_message_is_zero_padded() {
        let e = DateError::InvalidDate {
            day: 1,
            month: 4,
            year: 33,
        };
        assert_eq!(e.to_string(), "no such calendar date: 01.04.0033");
    }

    #[test]
    fn core_error_names_its_source() {
        let e = Error::External("telegram error: timed out".to_string());
        assert_eq!(e.to_string(), "external error: telegram error: timed out");
        assert!(Error::Config("x".to_string()).to_string().starts_with("config error"));
    }

    #[test]
    fn errors_are_send_and_sync() {
        fn assert_impl<T: Send + Sync + std::error::Error>() {}
        assert_impl::<DateError>();
        assert_impl::<Error>();
    }
}
