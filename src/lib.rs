#![crate_name = "datecalc"]
#![crate_type = "rlib"]

#![warn(missing_copy_implementations)]
#![warn(missing_debug_implementations)]

#![warn(trivial_casts, trivial_numeric_casts)]
#![warn(unused_qualifications)]
#![warn(unused_results)]

//! Small date and time calculations: parsing RFC 2822 and ISO 8601
//! strings, leap years, elapsed-time strings, and the angle between the
//! hands of a clock.
//!
//! # Examples
//!
//! ```
//! use datecalc::{parse_iso8601, parse_rfc2822, is_leap_year, format_time_span, clock_angle};
//!
//! let start = parse_iso8601("2016-01-19T08:07:37Z").unwrap();
//! let end = parse_rfc2822("Tue, 19 Jan 2016 10:07:38 GMT").unwrap();
//!
//! assert!(is_leap_year(&start));
//! assert_eq!(format_time_span(&start, &end), "02:00:01.000");
//! assert!(clock_angle(&end) <= std::f64::consts::PI);
//!
//! assert!(parse_iso8601("not-a-date").is_err());
//! ```

mod cal;
pub use crate::cal::{DatePiece, TimePiece};
pub use crate::cal::datetime::{Year, LocalDate, LocalTime, LocalDateTime, Month, Weekday, Error};
pub use crate::cal::offset::{Offset, OffsetDateTime, Error as OffsetError};
#[cfg(feature="format")] pub use crate::cal::fmt::{ISO, ISOString};
#[cfg(feature="parse")] pub use crate::cal::parse;
#[cfg(feature="parse")] pub use crate::cal::parse::{parse_iso8601, parse_rfc2822};

mod clock;
pub use crate::clock::clock_angle;

mod duration;
pub use crate::duration::Duration;

mod instant;
pub use crate::instant::Instant;

mod system;

#[cfg(feature="format")] mod timespan;
#[cfg(feature="format")] pub use crate::timespan::format_time_span;

mod util;


/// Returns whether the year of the given datetime, as seen in its own
/// offset, is a leap year.
///
/// ### Examples
///
/// ```
/// use datecalc::{is_leap_year, OffsetDateTime};
///
/// // 2000-06-01
/// assert!(is_leap_year(&OffsetDateTime::at_epoch_ms(959_817_600_000)));
/// ```
pub fn is_leap_year(datetime: &OffsetDateTime) -> bool {
    Year(datetime.year()).is_leap_year()
}
