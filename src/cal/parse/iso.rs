use std::convert::TryFrom;
use std::str::FromStr;

use log::debug;

use crate::cal::datetime::{LocalDate, LocalTime, LocalDateTime, Month, Weekday, Error as DateTimeError};
use crate::cal::offset::{Offset, OffsetDateTime};
use super::{within_range, Error};


/// Parses an ISO 8601 date-time, such as `2016-01-19T16:07:37+00:00` or
/// `2016-01-19T08:07:37Z`, into the instant it names. The value keeps the
/// offset it was written in; a zero offset, or none at all, is UTC.
///
/// ### Examples
///
/// ```
/// use datecalc::{parse_iso8601, TimePiece};
///
/// let then = parse_iso8601("2016-01-19T16:07:37+08:00").unwrap();
/// assert_eq!(then.hour(), 16);
/// assert_eq!(then.utc().hour(), 8);
///
/// assert!(parse_iso8601("2016-02-30T00:00:00Z").is_err());
/// ```
pub fn parse_iso8601(input: &str) -> Result<OffsetDateTime, Error> {
    input.parse().map_err(|e| {
        debug!("Rejected ISO 8601 date {:?}: {}", input, e);
        e
    })
}


impl FromStr for LocalDate {
    type Err = Error;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let fields = iso8601::date(input).map_err(Error::Syntax)?;
        fields_to_date(fields)
    }
}

impl FromStr for LocalTime {
    type Err = Error;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let fields = iso8601::time(input).map_err(Error::Syntax)?;
        fields_to_time(fields)
    }
}

/// Reads the wall clock only; any offset in the input is ignored.
impl FromStr for LocalDateTime {
    type Err = Error;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let fields = iso8601::datetime(input).map_err(Error::Syntax)?;
        let date = fields_to_date(fields.date)?;
        let time = fields_to_time(fields.time)?;
        Ok(Self::new(date, time))
    }
}

impl FromStr for OffsetDateTime {
    type Err = Error;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let fields = iso8601::datetime(input).map_err(Error::Syntax)?;
        let offset_hours = fields.time.tz_offset_hours;
        let offset_minutes = if offset_hours < 0 { -fields.time.tz_offset_minutes.abs() }
                                              else { fields.time.tz_offset_minutes };

        let date = fields_to_date(fields.date)?;
        let time = fields_to_time(fields.time)?;
        let offset = if offset_hours == 0 && offset_minutes == 0 {
            Offset::utc()
        }
        else {
            Offset::of_hours_and_minutes(narrow(offset_hours)?, narrow(offset_minutes)?)?
        };

        within_range(offset.transform_date(LocalDateTime::new(date, time)))
    }
}


fn fields_to_date(fields: iso8601::Date) -> Result<LocalDate, Error> {
    let date = match fields {
        iso8601::Date::YMD { year, month, day } => {
            LocalDate::ymd(year as i64, Month::from_one(narrow(month)?)?, narrow(day)?)
        },
        iso8601::Date::Week { year, ww, d } => {
            LocalDate::ywd(year as i64, ww as i64, Weekday::from_one(narrow(d)?)?)
        },
        iso8601::Date::Ordinal { year, ddd } => {
            LocalDate::yd(year as i64, ddd as i64)
        },
    };

    Ok(date?)
}

fn fields_to_time(fields: iso8601::Time) -> Result<LocalTime, Error> {
    let time = LocalTime::hms_ms(narrow(fields.hour)?, narrow(fields.minute)?,
                                 narrow(fields.second)?, narrow(fields.millisecond)?)?;
    Ok(time)
}

/// Squeezes a parsed field into the width the calendar types use, treating
/// anything that doesn’t fit as out of range.
fn narrow<N, T: TryFrom<N>>(field: N) -> Result<T, DateTimeError> {
    T::try_from(field).map_err(|_| DateTimeError::OutOfRange)
}
