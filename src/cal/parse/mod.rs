//! Reading dates and times from text.
//!
//! Both parsers report malformed input as an `Err`, and never panic, so
//! checking whether a string held a valid date is a matter of calling
//! `is_ok()` on the result.

use std::error::Error as ErrorTrait;
use std::fmt;

use crate::cal::datetime::Error as DateTimeError;
use crate::cal::offset::{OffsetDateTime, Error as OffsetError};

mod iso;
mod rfc;

pub use self::iso::parse_iso8601;
pub use self::rfc::parse_rfc2822;


/// The furthest a parsed date may lie from the Unix epoch, in
/// milliseconds, in either direction: 100,000,000 days.
const EPOCH_MS_LIMIT: i64 = 8_640_000_000_000_000;

/// Rejects datetimes whose instant is too far from the epoch to be
/// counted in milliseconds.
fn within_range(datetime: OffsetDateTime) -> Result<OffsetDateTime, Error> {
    let instant = datetime.to_instant();
    let epoch_ms = instant.seconds().checked_mul(1000)
                          .and_then(|ms| ms.checked_add(instant.milliseconds() as i64));

    match epoch_ms {
        Some(ms) if ms.abs() <= EPOCH_MS_LIMIT  => Ok(datetime),
        _                                       => Err(Error::Date(DateTimeError::OutOfRange)),
    }
}

/// The reasons a string could not be read as a date.
#[derive(PartialEq, Debug, Clone)]
pub enum Error {

    /// The text did not follow the expected layout.
    Syntax(String),

    /// The text was well-formed, but a date or time field was out of
    /// range, such as the 30th of February.
    Date(DateTimeError),

    /// The text was well-formed, but its UTC offset was impossible.
    Offset(OffsetError),
}

impl From<DateTimeError> for Error {
    fn from(error: DateTimeError) -> Self {
        Error::Date(error)
    }
}

impl From<OffsetError> for Error {
    fn from(error: OffsetError) -> Self {
        Error::Offset(error)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Error::Syntax(ref string)  => write!(f, "parse error: {}", string),
            Error::Date(ref error)     => write!(f, "parsing resulted in an invalid date: {}", error),
            Error::Offset(ref error)   => write!(f, "parsing resulted in an invalid offset: {}", error),
        }
    }
}

impl ErrorTrait for Error {
    fn source(&self) -> Option<&(dyn ErrorTrait + 'static)> {
        match *self {
            Error::Syntax(_)          => None,
            Error::Date(ref error)    => Some(error),
            Error::Offset(ref error)  => Some(error),
        }
    }
}
