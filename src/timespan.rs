//! Rendering elapsed time as `HH:mm:ss.mmm`.

use pad::{Alignment, PadStr};

use crate::cal::offset::OffsetDateTime;
use crate::duration::Duration;


const MS_IN_HOUR: i64 = 3_600_000;
const MS_IN_MINUTE: i64 = 60_000;
const MS_IN_SECOND: i64 = 1000;


/// Formats the time between two date-times as hours, minutes, seconds,
/// and milliseconds, such as `05:20:10.453`. The order of the arguments
/// doesn’t matter.
///
/// The hours field is at least two digits wide, and grows as needed.
///
/// ### Examples
///
/// ```
/// use datecalc::{format_time_span, OffsetDateTime};
///
/// let start = OffsetDateTime::at_epoch_ms(0);
/// let end = OffsetDateTime::at_epoch_ms(100 * 3_600_000 + 5);
/// assert_eq!(format_time_span(&start, &end), "100:00:00.005");
/// assert_eq!(format_time_span(&end, &start), "100:00:00.005");
/// ```
pub fn format_time_span(start: &OffsetDateTime, end: &OffsetDateTime) -> String {
    (end.to_instant() - start.to_instant()).time_span()
}

impl Duration {

    /// Renders the length of this duration, ignoring its sign, as
    /// `HH:mm:ss.mmm`.
    pub fn time_span(&self) -> String {
        let ms = self.abs().milliseconds();

        format!("{}:{}:{}.{}",
                zero_pad(ms / MS_IN_HOUR, 2),
                zero_pad(ms % MS_IN_HOUR / MS_IN_MINUTE, 2),
                zero_pad(ms % MS_IN_MINUTE / MS_IN_SECOND, 2),
                zero_pad(ms % MS_IN_SECOND, 3))
    }
}

fn zero_pad(number: i64, width: usize) -> String {
    number.to_string().pad(width, '0', Alignment::Right, false)
}
