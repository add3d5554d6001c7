use std::fmt;

use crate::cal::{DatePiece, TimePiece};
use crate::cal::datetime::{LocalDate, LocalTime, LocalDateTime};
use crate::cal::offset::{Offset, OffsetDateTime};
use crate::util::RangeExt;


/// Values that can be written in ISO 8601 format, through `value.iso()`.
pub trait ISO: Sized {
    fn iso(&self) -> ISOString<'_, Self> {
        ISOString(self)
    }

    fn iso_fmt(&self, f: &mut fmt::Formatter) -> fmt::Result;
}

/// A value borrowed for rendering in ISO 8601 format.
#[derive(Debug)]
pub struct ISOString<'a, T>(&'a T);

impl<'a, T: ISO> fmt::Display for ISOString<'a, T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.0.iso_fmt(f)
    }
}


impl ISO for LocalDate {
    fn iso_fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let year = self.year();
        if year.is_within(0 .. 10000) {
            write!(f, "{:04}-{:02}-{:02}", year, self.month() as i8, self.day())
        }
        else {
            write!(f, "{:+05}-{:02}-{:02}", year, self.month() as i8, self.day())
        }
    }
}

impl ISO for LocalTime {
    fn iso_fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:02}:{:02}:{:02}.{:03}", self.hour(), self.minute(), self.second(), self.millisecond())
    }
}

impl ISO for LocalDateTime {
    fn iso_fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}T{}", self.date().iso(), self.time().iso())
    }
}

impl ISO for Offset {
    fn iso_fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.is_utc() {
            return write!(f, "Z");
        }

        let sign = if self.is_negative() { '-' } else { '+' };
        write!(f, "{}{:02}:{:02}", sign, self.hours().abs(), self.minutes().abs())?;
        if self.seconds() != 0 {
            write!(f, ":{:02}", self.seconds().abs())?;
        }
        Ok(())
    }
}

impl ISO for OffsetDateTime {
    fn iso_fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}{}", self.local().iso(), self.offset().iso())
    }
}
