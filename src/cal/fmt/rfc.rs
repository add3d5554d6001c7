use std::fmt::Write;

use crate::cal::{DatePiece, TimePiece};
use crate::cal::offset::OffsetDateTime;


impl OffsetDateTime {

    /// Renders this date-time in RFC 2822 format, such as
    /// `Tue, 26 Jan 2016 13:48:02 GMT`. UTC values are written with `GMT`;
    /// anything else gets its wall clock and a numeric offset.
    ///
    /// ```
    /// use datecalc::{parse_iso8601, parse_rfc2822};
    ///
    /// let then = parse_iso8601("2016-01-26T14:48:02+01:00").unwrap();
    /// assert_eq!(then.rfc2822(), "Tue, 26 Jan 2016 14:48:02 +0100");
    /// assert_eq!(parse_rfc2822(&then.rfc2822()), Ok(then));
    /// ```
    pub fn rfc2822(&self) -> String {
        let english = locale::Time::english();
        let local = self.local();

        let mut out = format!("{}, {:02} {} {:04} {:02}:{:02}:{:02} ",
            english.short_day_name(local.weekday().days_from_sunday()),
            local.day(),
            english.short_month_name(local.month().months_from_january()),
            local.year(),
            local.hour(), local.minute(), local.second());

        let offset = self.offset();
        if offset.is_utc() {
            out.push_str("GMT");
        }
        else {
            let sign = if offset.is_negative() { '-' } else { '+' };
            let _ = write!(out, "{}{:02}{:02}", sign, offset.hours().abs(), offset.minutes().abs());
        }

        out
    }
}
