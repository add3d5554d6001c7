extern crate datecalc;
use datecalc::{LocalDateTime, Month};
use datecalc::{DatePiece, TimePiece};


#[test]
fn a_long_time_ago() {
    let date = LocalDateTime::at(-1_000_000_000);

    assert_eq!(date.year(),   1938);
    assert_eq!(date.month(),  Month::April);
    assert_eq!(date.day(),    24);
    assert_eq!(date.hour(),   22);
    assert_eq!(date.minute(), 13);
    assert_eq!(date.second(), 20);
}

#[test]
fn unix_epoch() {
    let date = LocalDateTime::at(0);

    assert_eq!(date.year(),   1970);
    assert_eq!(date.month(),  Month::January);
    assert_eq!(date.day(),    1);
    assert_eq!(date.hour(),   0);
    assert_eq!(date.minute(), 0);
    assert_eq!(date.second(), 0);
}

#[test]
fn billennium() {
    let date = LocalDateTime::at(1_000_000_000);

    assert_eq!(date.year(),   2001);
    assert_eq!(date.month(),  Month::September);
    assert_eq!(date.day(),    9);
    assert_eq!(date.hour(),   1);
    assert_eq!(date.minute(), 46);
    assert_eq!(date.second(), 40);
}

#[test]
fn numbers() {
    let date = LocalDateTime::at_ms(1_234_567_890, 250);

    assert_eq!(date.year(),        2009);
    assert_eq!(date.month(),       Month::February);
    assert_eq!(date.day(),         13);
    assert_eq!(date.hour(),        23);
    assert_eq!(date.minute(),      31);
    assert_eq!(date.second(),      30);
    assert_eq!(date.millisecond(), 250);
}

#[test]
fn leap_day() {
    let date = LocalDateTime::at(951_782_400);

    assert_eq!(date.year(),  2000);
    assert_eq!(date.month(), Month::February);
    assert_eq!(date.day(),   29);
}
