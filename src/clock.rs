//! The angle between the hands of an analogue clock.

use std::f64::consts::PI;

use crate::cal::TimePiece;
use crate::cal::offset::OffsetDateTime;


/// Returns the smaller angle, in radians, between the hour and minute
/// hands of a twelve-hour clock showing the given time in UTC. The result
/// is always between 0 and π.
///
/// The hour hand moves continuously with the minutes; seconds are
/// ignored.
///
/// ### Examples
///
/// ```
/// use datecalc::{clock_angle, parse_iso8601};
/// use std::f64::consts::PI;
///
/// let six = parse_iso8601("2016-04-05T18:00:00Z").unwrap();
/// assert!((clock_angle(&six) - PI).abs() < 1e-12);
/// ```
pub fn clock_angle(datetime: &OffsetDateTime) -> f64 {
    let utc = datetime.utc();
    let hour = (utc.hour() % 12) as f64;
    let minute = utc.minute() as f64;

    let hour_angle = (hour + minute / 60.0) * 30.0;
    let minute_angle = minute * 6.0;

    let mut degrees = hour_angle - minute_angle;
    if degrees.abs() > 180.0 {
        degrees = degrees.abs() - 360.0;
    }

    degrees.abs() * PI / 180.0
}
