extern crate datecalc;
use datecalc::{LocalDate, Month, Weekday};
use datecalc::DatePiece;


#[test]
fn the_distant_past() {
    let date = LocalDate::ymd(7, Month::April, 1).unwrap();

    assert_eq!(date.year(),  7);
    assert_eq!(date.month(), Month::April);
    assert_eq!(date.day(),   1);
}

#[test]
fn the_distant_present() {
    let date = LocalDate::ymd(2015, Month::January, 16).unwrap();

    assert_eq!(date.year(),    2015);
    assert_eq!(date.month(),   Month::January);
    assert_eq!(date.day(),     16);
    assert_eq!(date.weekday(), Weekday::Friday);
}

#[test]
fn the_distant_future() {
    let date = LocalDate::ymd(1048576, Month::October, 13).unwrap();

    assert_eq!(date.year(),  1048576);
    assert_eq!(date.month(), Month::October);
    assert_eq!(date.day(),   13);
}

#[test]
fn day_start_of_year() {
    let date = LocalDate::yd(2015, 1).unwrap();
    assert_eq!(date, LocalDate::ymd(2015, Month::January, 1).unwrap());
}

#[test]
fn last_day_of_leap_year() {
    let date = LocalDate::yd(2000, 366).unwrap();
    assert_eq!(date, LocalDate::ymd(2000, Month::December, 31).unwrap());
}

#[test]
fn week_dates() {
    let date = LocalDate::ywd(2015, 26, Weekday::Friday).unwrap();
    assert_eq!(date, LocalDate::ymd(2015, Month::June, 26).unwrap());
}
