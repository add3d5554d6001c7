extern crate datecalc;
use datecalc::{is_leap_year, parse_iso8601, Year};


#[test]
fn year_1600() {
    assert!(Year(1600).is_leap_year());
}

#[test]
fn year_1900() {
    assert!(Year(1900).is_leap_year() == false);
}

#[test]
fn year_2000() {
    assert!(Year(2000).is_leap_year());
}

#[test]
fn year_2001() {
    assert!(Year(2001).is_leap_year() == false);
}

#[test]
fn year_2012() {
    assert!(Year(2012).is_leap_year());
}

#[test]
fn year_2015() {
    assert!(Year(2015).is_leap_year() == false);
}

#[test]
fn every_year_follows_the_rule() {
    for year in -2000 .. 3000 {
        let expected = (year % 4 == 0 && year % 100 != 0) || year % 400 == 0;
        assert_eq!(Year(year).is_leap_year(), expected, "year {}", year);
    }
}

#[test]
fn from_a_datetime() {
    assert!(is_leap_year(&parse_iso8601("2000-07-04T12:00:00Z").unwrap()));
    assert!(!is_leap_year(&parse_iso8601("1900-07-04T12:00:00Z").unwrap()));
}

#[test]
fn reads_the_local_year() {
    // Still 2015 at -05:00, although it is 2016 in UTC.
    let then = parse_iso8601("2015-12-31T22:00:00-05:00").unwrap();
    assert!(!is_leap_year(&then));
}
