//! Datetimes with a fixed UTC offset.

use std::error::Error as ErrorTrait;
use std::fmt;

use crate::cal::{DatePiece, TimePiece};
use crate::cal::datetime::{LocalDateTime, Month, Weekday};
use crate::duration::Duration;
use crate::instant::Instant;
use crate::util::RangeExt;


/// A fixed offset from UTC. `Offset::utc()` is UTC itself, written `Z`;
/// any other offset is a signed number of seconds less than a day.
#[derive(PartialEq, Eq, Copy, Clone)]
pub struct Offset {
    offset_seconds: Option<i32>,
}

impl Offset {

    /// Turns a UTC date-time into the wall clock of this offset.
    fn adjust(self, utc: LocalDateTime) -> LocalDateTime {
        match self.offset_seconds {
            Some(s) => utc + Duration::of(s as i64),
            None    => utc,
        }
    }

    /// Turns a wall clock in this offset back into UTC.
    fn unadjust(self, local: LocalDateTime) -> LocalDateTime {
        match self.offset_seconds {
            Some(s) => local - Duration::of(s as i64),
            None    => local,
        }
    }

    pub fn utc() -> Self {
        Self { offset_seconds: None }
    }

    pub fn of_seconds(seconds: i32) -> Result<Self, Error> {
        if seconds.is_within(-86399 .. 86400) {
            Ok(Self { offset_seconds: Some(seconds) })
        }
        else {
            Err(Error::OutOfRange)
        }
    }

    /// Creates an offset from hours and minutes, which must share a sign:
    /// `-3, -45` is three and three quarter hours behind UTC.
    pub fn of_hours_and_minutes(hours: i8, minutes: i8) -> Result<Self, Error> {
        if (hours.is_positive() && minutes.is_negative())
        || (hours.is_negative() && minutes.is_positive()) {
            Err(Error::SignMismatch)
        }
        else if !hours.is_within(-23 .. 24) || !minutes.is_within(-59 .. 60) {
            Err(Error::OutOfRange)
        }
        else {
            Self::of_seconds(hours as i32 * (60 * 60) + minutes as i32 * 60)
        }
    }

    /// Pairs a wall-clock date-time, as read in this offset, with the
    /// offset itself.
    pub fn transform_date(self, local: LocalDateTime) -> OffsetDateTime {
        OffsetDateTime {
            utc: self.unadjust(local),
            offset: self,
        }
    }

    pub fn is_utc(self) -> bool {
        self.offset_seconds.is_none()
    }

    pub fn is_negative(self) -> bool {
        self.total_seconds() < 0
    }

    /// The whole offset in seconds, zero for UTC.
    pub fn total_seconds(self) -> i32 {
        self.offset_seconds.unwrap_or(0)
    }

    pub fn hours(self) -> i8 {
        (self.total_seconds() / 60 / 60) as i8
    }

    pub fn minutes(self) -> i8 {
        (self.total_seconds() / 60 % 60) as i8
    }

    pub fn seconds(self) -> i8 {
        (self.total_seconds() % 60) as i8
    }
}

impl fmt::Debug for Offset {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.offset_seconds {
            None    => write!(f, "Offset(Z)"),
            Some(s) => write!(f, "Offset({}s)", s),
        }
    }
}

#[derive(PartialEq, Debug, Copy, Clone)]
pub enum Error {
    OutOfRange,
    SignMismatch,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Error::OutOfRange    => write!(f, "offset field out of range"),
            Error::SignMismatch  => write!(f, "hours and minutes have different signs"),
        }
    }
}

impl ErrorTrait for Error {
}


/// An exact point on the timeline, as seen from a fixed UTC offset.
///
/// The `DatePiece` and `TimePiece` views read the wall clock in that
/// offset; `utc()` gives the same instant as read in UTC. Two values are
/// only equal if both the instant and the offset match; compare
/// `to_instant()` to check for the same instant.
#[derive(PartialEq, Copy, Clone)]
pub struct OffsetDateTime {
    utc: LocalDateTime,
    offset: Offset,
}

impl OffsetDateTime {

    /// Places the given instant in the given offset.
    pub fn from_instant(instant: Instant, offset: Offset) -> Self {
        Self { utc: LocalDateTime::from_instant(instant), offset }
    }

    /// Creates a UTC date-time from a number of milliseconds since the
    /// Unix epoch.
    pub fn at_epoch_ms(milliseconds: i64) -> Self {
        Self::from_instant(Instant::at_epoch_ms(milliseconds), Offset::utc())
    }

    /// The current time, in UTC.
    pub fn now() -> Self {
        Self::from_instant(Instant::now(), Offset::utc())
    }

    pub fn to_instant(&self) -> Instant {
        self.utc.to_instant()
    }

    /// The number of milliseconds since the Unix epoch.
    pub fn epoch_ms(&self) -> i64 {
        self.to_instant().epoch_ms()
    }

    pub fn offset(&self) -> Offset {
        self.offset
    }

    /// This instant, as read in UTC.
    pub fn utc(&self) -> LocalDateTime {
        self.utc
    }

    /// This instant, as read on a wall clock in its offset.
    pub fn local(&self) -> LocalDateTime {
        self.offset.adjust(self.utc)
    }

    /// The same instant, seen from another offset.
    pub fn with_offset(&self, offset: Offset) -> Self {
        Self { utc: self.utc, offset }
    }
}

impl DatePiece for OffsetDateTime {
    fn year(&self) -> i64 { self.local().year() }
    fn month(&self) -> Month { self.local().month() }
    fn day(&self) -> i8 { self.local().day() }
    fn weekday(&self) -> Weekday { self.local().weekday() }
}

impl TimePiece for OffsetDateTime {
    fn hour(&self) -> i8 { self.local().hour() }
    fn minute(&self) -> i8 { self.local().minute() }
    fn second(&self) -> i8 { self.local().second() }
    fn millisecond(&self) -> i16 { self.local().millisecond() }
}

impl fmt::Debug for OffsetDateTime {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "OffsetDateTime({:?}, {:?})", self.local(), self.offset)
    }
}
