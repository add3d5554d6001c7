extern crate datecalc;
use datecalc::{format_time_span, LocalDate, LocalTime, LocalDateTime, Month, Offset, OffsetDateTime};


fn at(hour: i8, minute: i8, second: i8, millisecond: i16) -> OffsetDateTime {
    let local = LocalDateTime::new(
        LocalDate::ymd(2016, Month::January, 19).unwrap(),
        LocalTime::hms_ms(hour, minute, second, millisecond).unwrap());

    Offset::utc().transform_date(local)
}


#[test]
fn an_hour() {
    assert_eq!(format_time_span(&at(10, 0, 0, 0), &at(11, 0, 0, 0)), "01:00:00.000");
}

#[test]
fn half_an_hour() {
    assert_eq!(format_time_span(&at(10, 0, 0, 0), &at(10, 30, 0, 0)), "00:30:00.000");
}

#[test]
fn twenty_seconds() {
    assert_eq!(format_time_span(&at(10, 0, 0, 0), &at(10, 0, 20, 0)), "00:00:20.000");
}

#[test]
fn milliseconds() {
    assert_eq!(format_time_span(&at(10, 0, 0, 0), &at(10, 0, 0, 250)), "00:00:00.250");
}

#[test]
fn everything() {
    assert_eq!(format_time_span(&at(10, 0, 0, 0), &at(15, 20, 10, 453)), "05:20:10.453");
}

#[test]
fn nothing() {
    assert_eq!(format_time_span(&at(10, 0, 0, 0), &at(10, 0, 0, 0)), "00:00:00.000");
}

#[test]
fn symmetric() {
    let times = [at(0, 0, 0, 0), at(10, 0, 0, 0), at(10, 0, 0, 250), at(15, 20, 10, 453), at(23, 59, 59, 999)];

    for a in times.iter() {
        for b in times.iter() {
            assert_eq!(format_time_span(a, b), format_time_span(b, a));
        }
    }
}

#[test]
fn more_than_a_hundred_hours() {
    let start = OffsetDateTime::at_epoch_ms(0);
    let end = OffsetDateTime::at_epoch_ms(123 * 3_600_000 + 4 * 60_000 + 5_006);
    assert_eq!(format_time_span(&start, &end), "123:04:05.006");
}

#[test]
fn offsets_do_not_matter() {
    let utc = at(10, 0, 0, 0);
    let elsewhere = utc.with_offset(Offset::of_hours_and_minutes(9, 30).unwrap());
    assert_eq!(format_time_span(&utc, &elsewhere), "00:00:00.000");
}

#[test]
fn across_the_epoch() {
    let before = OffsetDateTime::at_epoch_ms(-1500);
    let after = OffsetDateTime::at_epoch_ms(1500);
    assert_eq!(format_time_span(&before, &after), "00:00:03.000");
}
