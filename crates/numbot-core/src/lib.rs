//! Core domain + application logic for the numerology bot.
//!
//! The calculator (`numerology`, `vedic`) is pure and framework-agnostic.
//! Telegram lives behind the messaging port, implemented in the adapter crate.

pub mod config;
pub mod domain;
pub mod errors;
pub mod formatting;
pub mod logging;
pub mod messaging;
pub mod numerology;
pub mod security;
pub mod vedic;

pub use errors::{DateError, Error, Result};
pub use numerology::{compute, BirthDate, NumerologyResult};
pub use vedic::VedicForecast;
