//! Years, dates, times, datetimes, months, and weekdays.

use std::error::Error as ErrorTrait;
use std::fmt;
use std::ops::{Add, Deref, Sub};

use crate::cal::{DatePiece, TimePiece};
use crate::duration::Duration;
use crate::instant::Instant;
use crate::util::RangeExt;

use self::Month::*;
use self::Weekday::*;


/// A single year.
///
/// This is just a wrapper around `i64` that performs year-related tests.
#[derive(PartialEq, Eq, PartialOrd, Ord, Debug, Copy, Clone)]
pub struct Year(pub i64);

impl Year {

    /// Returns whether this year is a leap year: divisible by four, and
    /// either not divisible by a hundred or divisible by four hundred.
    ///
    /// ### Examples
    ///
    /// ```
    /// use datecalc::Year;
    ///
    /// assert_eq!(Year(2000).is_leap_year(), true);
    /// assert_eq!(Year(1900).is_leap_year(), false);
    /// ```
    pub fn is_leap_year(self) -> bool {
        self.0 % 4 == 0 && (self.0 % 100 != 0 || self.0 % 400 == 0)
    }

    /// Returns the number of ISO weeks in this year: 53 if the year
    /// starts on a Thursday (or on a Wednesday in a leap year), otherwise
    /// 52.
    fn iso_weeks(self) -> i64 {
        let first = days_to_weekday(days_since_reference(self.0, January, 1));
        match first {
            Thursday                         => 53,
            Wednesday if self.is_leap_year() => 53,
            _                                => 52,
        }
    }
}

impl Deref for Year {
    type Target = i64;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}


/// Number of days guaranteed to be in four years.
const DAYS_IN_4Y:   i64 = 365 *   4 +  1;

/// Number of days guaranteed to be in a hundred years.
const DAYS_IN_100Y: i64 = 365 * 100 + 24;

/// Number of days guaranteed to be in four hundred years.
const DAYS_IN_400Y: i64 = 365 * 400 + 97;

/// Number of seconds in a day. Leap seconds are ignored.
const SECONDS_IN_DAY: i64 = 86400;

/// Number of days between the Unix epoch and **1st March, 2000**.
///
/// Day arithmetic is done relative to the first of March in a year that
/// starts a 400-year cycle, so that any leap day falls on the very last
/// day of a cycle, and the cycles split by plain division.
const EPOCH_DIFFERENCE: i64 = 30 * 365   // 30 years between 2000 and 1970...
                            + 7          // plus seven days for leap years...
                            + 31 + 29;   // plus all the days in January and February in 2000.


/// A **local date** is a day-long span on the timeline, *without a time
/// zone*.
#[derive(PartialEq, Eq, PartialOrd, Ord, Clone, Copy)]
pub struct LocalDate {
    year:    i64,
    month:   Month,
    day:     i8,
    weekday: Weekday,
}

/// A **local time** is a time on the timeline that recurs once a day,
/// *without a time zone*.
#[derive(PartialEq, Eq, PartialOrd, Ord, Clone, Copy)]
pub struct LocalTime {
    hour:        i8,
    minute:      i8,
    second:      i8,
    millisecond: i16,
}

/// A **local date-time** is an exact instant on the timeline, *without a
/// time zone*.
#[derive(PartialEq, Eq, PartialOrd, Ord, Clone, Copy)]
pub struct LocalDateTime {
    date: LocalDate,
    time: LocalTime,
}


impl LocalDate {

    /// Creates a new local date instance from the given year, month, and
    /// day fields, checking that the day exists in that month.
    ///
    /// ### Examples
    ///
    /// ```rust
    /// use datecalc::{LocalDate, Month, Weekday, DatePiece};
    ///
    /// let date = LocalDate::ymd(1969, Month::July, 20).unwrap();
    /// assert_eq!(date.weekday(), Weekday::Sunday);
    ///
    /// assert!(LocalDate::ymd(2100, Month::February, 29).is_err());
    /// ```
    pub fn ymd(year: i64, month: Month, day: i8) -> Result<Self, Error> {
        let leap_year = Year(year).is_leap_year();
        if !day.is_within(1 .. month.days_in_month(leap_year) + 1) {
            return Err(Error::OutOfRange);
        }

        Ok(Self::from_days_since_reference(days_since_reference(year, month, day)))
    }

    /// Creates a new local date instance from the given year and
    /// day-of-year (ordinal date), starting at 1 for the first of January.
    ///
    /// ```rust
    /// use datecalc::{LocalDate, Month, DatePiece};
    ///
    /// let date = LocalDate::yd(2015, 0x100).unwrap();
    /// assert_eq!(date.month(), Month::September);
    /// assert_eq!(date.day(), 13);
    /// ```
    pub fn yd(year: i64, yearday: i64) -> Result<Self, Error> {
        let days_in_year = if Year(year).is_leap_year() { 366 } else { 365 };
        if !yearday.is_within(1 .. days_in_year + 1) {
            return Err(Error::OutOfRange);
        }

        let first = days_since_reference(year, January, 1);
        Ok(Self::from_days_since_reference(first + yearday - 1))
    }

    /// Creates a new local date instance from the given ISO week-year,
    /// week number, and weekday. Week 1 is the week containing the fourth
    /// of January.
    ///
    /// ```rust
    /// use datecalc::{LocalDate, Month, Weekday, DatePiece};
    ///
    /// let date = LocalDate::ywd(2001, 5, Weekday::Saturday).unwrap();
    /// assert_eq!(date.month(), Month::February);
    /// assert_eq!(date.day(), 3);
    /// ```
    pub fn ywd(year: i64, week: i64, weekday: Weekday) -> Result<Self, Error> {
        if !week.is_within(1 .. Year(year).iso_weeks() + 1) {
            return Err(Error::OutOfRange);
        }

        let jan_4th = days_since_reference(year, January, 4);
        let week_1_monday = jan_4th - (days_to_weekday(jan_4th).days_from_monday_as_one() as i64 - 1);
        let days = week_1_monday + (week - 1) * 7 + (weekday.days_from_monday_as_one() as i64 - 1);
        Ok(Self::from_days_since_reference(days))
    }

    /// Computes a date from the number of days since **1st March, 2000**.
    fn from_days_since_reference(days: i64) -> Self {
        let (cycles_400y, mut remainder) = (days.div_euclid(DAYS_IN_400Y), days.rem_euclid(DAYS_IN_400Y));

        // The last century and the last year in each cycle carry the
        // extra leap day, so their counts get capped.
        let centuries = (remainder / DAYS_IN_100Y).min(3);
        remainder -= centuries * DAYS_IN_100Y;

        let cycles_4y = remainder / DAYS_IN_4Y;
        remainder -= cycles_4y * DAYS_IN_4Y;

        let years = (remainder / 365).min(3);
        remainder -= years * 365;

        // `remainder` is now the day of a year that begins in March.
        let months_from_march = (remainder * 5 + 2) / 153;
        let day = remainder - (months_from_march * 153 + 2) / 5 + 1;

        let mut year = 2000 + cycles_400y * 400 + centuries * 100 + cycles_4y * 4 + years;
        let month = if months_from_march < 10 {
            months_from_march + 3
        }
        else {
            year += 1;
            months_from_march - 9
        };

        Self {
            year,
            month: MONTHS[month as usize - 1],
            day: day as i8,
            weekday: days_to_weekday(days),
        }
    }

    /// The number of days between **1st March, 2000** and this date.
    fn days_since_reference(self) -> i64 {
        days_since_reference(self.year, self.month, self.day)
    }
}

impl DatePiece for LocalDate {
    fn year(&self) -> i64 { self.year }
    fn month(&self) -> Month { self.month }
    fn day(&self) -> i8 { self.day }
    fn weekday(&self) -> Weekday { self.weekday }
}

impl fmt::Debug for LocalDate {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "LocalDate({}-{:02}-{:02})", self.year, self.month as i8, self.day)
    }
}


impl LocalTime {

    /// Creates a new timestamp instance with the given number of seconds
    /// and milliseconds since midnight.
    pub fn from_seconds_and_milliseconds_since_midnight(seconds: i64, millisecond: i16) -> Self {
        Self {
            hour:   (seconds / 3600) as i8,
            minute: (seconds / 60 % 60) as i8,
            second: (seconds % 60) as i8,
            millisecond,
        }
    }

    /// Returns the time at midnight, with all fields initialised to 0.
    pub fn midnight() -> Self {
        Self { hour: 0, minute: 0, second: 0, millisecond: 0 }
    }

    /// Creates a new timestamp instance with the given hour and minute
    /// fields. The second and millisecond fields are set to 0.
    pub fn hm(hour: i8, minute: i8) -> Result<Self, Error> {
        Self::hms_ms(hour, minute, 0, 0)
    }

    /// Creates a new timestamp instance with the given hour, minute, and
    /// second fields. The millisecond field is set to 0.
    pub fn hms(hour: i8, minute: i8, second: i8) -> Result<Self, Error> {
        Self::hms_ms(hour, minute, second, 0)
    }

    /// Creates a new timestamp instance with the given hour, minute,
    /// second, and millisecond fields.
    ///
    /// The values are checked for validity before instantiation, and
    /// passing in values out of range will return an `Err`.
    pub fn hms_ms(hour: i8, minute: i8, second: i8, millisecond: i16) -> Result<Self, Error> {
        if hour.is_within(0 .. 24) && minute.is_within(0 .. 60)
        && second.is_within(0 .. 60) && millisecond.is_within(0 .. 1000)
        {
            Ok(Self { hour, minute, second, millisecond })
        }
        else {
            Err(Error::OutOfRange)
        }
    }

    /// Calculate the number of seconds since midnight this time is at,
    /// ignoring milliseconds.
    pub fn to_seconds(self) -> i64 {
        self.hour as i64 * 3600 + self.minute as i64 * 60 + self.second as i64
    }
}

impl TimePiece for LocalTime {
    fn hour(&self) -> i8 { self.hour }
    fn minute(&self) -> i8 { self.minute }
    fn second(&self) -> i8 { self.second }
    fn millisecond(&self) -> i16 { self.millisecond }
}

impl fmt::Debug for LocalTime {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "LocalTime({:02}:{:02}:{:02}.{:03})", self.hour, self.minute, self.second, self.millisecond)
    }
}


impl LocalDateTime {

    /// Computes a complete date-time based on the values in the given
    /// Instant parameter.
    pub fn from_instant(instant: Instant) -> Self {
        let seconds = instant.seconds();
        let days = seconds.div_euclid(SECONDS_IN_DAY);
        let seconds_of_day = seconds.rem_euclid(SECONDS_IN_DAY);

        Self {
            date: LocalDate::from_days_since_reference(days - EPOCH_DIFFERENCE),
            time: LocalTime::from_seconds_and_milliseconds_since_midnight(seconds_of_day, instant.milliseconds()),
        }
    }

    /// Creates a new local date time from a number of seconds since the
    /// Unix epoch.
    pub fn at(seconds_since_1970_epoch: i64) -> Self {
        Self::from_instant(Instant::at(seconds_since_1970_epoch))
    }

    /// Creates a new local date time from a number of seconds since the
    /// Unix epoch, along with the millisecond of that second.
    pub fn at_ms(seconds_since_1970_epoch: i64, millisecond_of_second: i16) -> Self {
        Self::from_instant(Instant::at_ms(seconds_since_1970_epoch, millisecond_of_second))
    }

    /// Creates a new date-time stamp from the given date and time
    /// components.
    pub fn new(date: LocalDate, time: LocalTime) -> Self {
        Self { date, time }
    }

    /// Returns the date portion of this date-time stamp.
    pub fn date(&self) -> LocalDate {
        self.date
    }

    /// Returns the time portion of this date-time stamp.
    pub fn time(&self) -> LocalTime {
        self.time
    }

    /// Creates a new date-time stamp set to the current time, in UTC.
    pub fn now() -> Self {
        Self::from_instant(Instant::now())
    }

    /// Converts this date-time into the instant it would be at, were it
    /// in UTC.
    pub fn to_instant(&self) -> Instant {
        let days = self.date.days_since_reference() + EPOCH_DIFFERENCE;
        Instant::at_ms(days * SECONDS_IN_DAY + self.time.to_seconds(), self.time.millisecond)
    }
}

impl DatePiece for LocalDateTime {
    fn year(&self) -> i64 { self.date.year }
    fn month(&self) -> Month { self.date.month }
    fn day(&self) -> i8 { self.date.day }
    fn weekday(&self) -> Weekday { self.date.weekday }
}

impl TimePiece for LocalDateTime {
    fn hour(&self) -> i8 { self.time.hour }
    fn minute(&self) -> i8 { self.time.minute }
    fn second(&self) -> i8 { self.time.second }
    fn millisecond(&self) -> i16 { self.time.millisecond }
}

impl fmt::Debug for LocalDateTime {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "LocalDateTime({:?}, {:?})", self.date, self.time)
    }
}

impl Add<Duration> for LocalDateTime {
    type Output = Self;

    fn add(self, duration: Duration) -> Self {
        Self::from_instant(self.to_instant() + duration)
    }
}

impl Sub<Duration> for LocalDateTime {
    type Output = Self;

    fn sub(self, duration: Duration) -> Self {
        Self::from_instant(self.to_instant() - duration)
    }
}


/// Counts the days between **1st March, 2000** and the given date, which
/// is assumed to be valid. Years are shifted to start in March so the
/// leap day comes last.
fn days_since_reference(year: i64, month: Month, day: i8) -> i64 {
    let month = month as i64;
    let (year, months_from_march) = if month <= 2 { (year - 1, month + 9) } else { (year, month - 3) };

    let (cycles_400y, years) = ((year - 2000).div_euclid(400), (year - 2000).rem_euclid(400));
    let day_of_year = (months_from_march * 153 + 2) / 5 + day as i64 - 1;

    cycles_400y * DAYS_IN_400Y
        + years * 365 + years / 4 - years / 100
        + day_of_year
}

/// Computes the weekday, given the number of days since **1st March,
/// 2000**, which was a Wednesday.
fn days_to_weekday(days: i64) -> Weekday {
    WEEKDAYS[(days + 3).rem_euclid(7) as usize]
}


#[derive(PartialEq, Debug, Copy, Clone)]
pub enum Error {
    OutOfRange,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "datetime field out of range")
    }
}

impl ErrorTrait for Error {
}


/// A month of the year, starting with January, and ending with December.
///
/// This is 1-indexed, so January becomes 1 when you use `as i8`.
#[derive(PartialEq, Eq, PartialOrd, Ord, Debug, Clone, Copy)]
pub enum Month {
    January =  1, February =  2, March     =  3,
    April   =  4, May      =  5, June      =  6,
    July    =  7, August   =  8, September =  9,
    October = 10, November = 11, December  = 12,
}

static MONTHS: [Month; 12] = [
    January,  February,  March,
    April,    May,       June,
    July,     August,    September,
    October,  November,  December,
];

impl Month {

    /// Returns the number of days in this month, depending on whether it’s
    /// a leap year or not.
    pub fn days_in_month(self, leap_year: bool) -> i8 {
        match self {
            February                               => if leap_year { 29 } else { 28 },
            April | June | September | November    => 30,
            _                                      => 31,
        }
    }

    /// The number of months between January and this month.
    pub fn months_from_january(self) -> usize {
        self as usize - 1
    }

    /// Returns the month based on a number, with January as **Month 1**.
    ///
    /// ```rust
    /// use datecalc::Month;
    /// assert_eq!(Month::from_one(5), Ok(Month::May));
    /// assert!(Month::from_one(0).is_err());
    /// ```
    pub fn from_one(month: i8) -> Result<Self, Error> {
        if month.is_within(1 .. 13) { Ok(MONTHS[month as usize - 1]) }
                               else { Err(Error::OutOfRange) }
    }

    /// Returns the month based on a number, with January as **Month 0**.
    pub fn from_zero(month: i8) -> Result<Self, Error> {
        if month.is_within(0 .. 12) { Ok(MONTHS[month as usize]) }
                               else { Err(Error::OutOfRange) }
    }
}


/// A named day of the week.
#[derive(PartialEq, Eq, PartialOrd, Ord, Debug, Clone, Copy)]
pub enum Weekday {
    Sunday, Monday, Tuesday, Wednesday, Thursday, Friday, Saturday,
}

static WEEKDAYS: [Weekday; 7] = [
    Sunday, Monday, Tuesday, Wednesday, Thursday, Friday, Saturday,
];

impl Weekday {

    /// ISO numbering: Monday is 1 and Sunday is 7.
    fn days_from_monday_as_one(self) -> i8 {
        match self {
            Sunday => 7,
            other  => other as i8,
        }
    }

    /// The number of days between Sunday and this weekday.
    pub fn days_from_sunday(self) -> usize {
        self as usize
    }

    /// Return the weekday based on a number, with Sunday as Day 0, Monday as
    /// Day 1, and so on.
    ///
    /// ```rust
    /// use datecalc::Weekday;
    /// assert_eq!(Weekday::from_zero(4), Ok(Weekday::Thursday));
    /// assert!(Weekday::from_zero(7).is_err());
    /// ```
    pub fn from_zero(weekday: i8) -> Result<Self, Error> {
        if weekday.is_within(0 .. 7) { Ok(WEEKDAYS[weekday as usize]) }
                                else { Err(Error::OutOfRange) }
    }

    /// Return the weekday based on an ISO number, with Monday as Day 1
    /// and Sunday as Day 7.
    pub fn from_one(weekday: i8) -> Result<Self, Error> {
        if weekday.is_within(1 .. 8) { Ok(WEEKDAYS[weekday as usize % 7]) }
                                else { Err(Error::OutOfRange) }
    }
}
