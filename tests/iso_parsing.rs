extern crate datecalc;
use datecalc::{parse_iso8601, DatePiece, TimePiece, Month, ISO};


#[test]
fn explicit_offset() {
    let then = parse_iso8601("2016-01-19T16:07:37+00:00").unwrap();
    assert_eq!(then.epoch_ms(), 1_453_219_657_000);
}

#[test]
fn zulu() {
    let then = parse_iso8601("2016-01-19T08:07:37Z").unwrap();
    assert_eq!(then.epoch_ms(), 1_453_190_857_000);
}

#[test]
fn same_instant_from_different_offsets() {
    let east = parse_iso8601("2016-01-19T16:07:37+08:00").unwrap();
    let zulu = parse_iso8601("2016-01-19T08:07:37Z").unwrap();
    assert_eq!(east.to_instant(), zulu.to_instant());
}

#[test]
fn not_a_date() {
    assert!(parse_iso8601("not-a-date").is_err());
}

#[test]
fn empty() {
    assert!(parse_iso8601("").is_err());
}

#[test]
fn february_30th() {
    assert!(parse_iso8601("2016-02-30T00:00:00Z").is_err());
}

#[test]
fn round_trip() {
    for input in &["2016-01-19T16:07:37+00:00", "2016-01-19T08:07:37Z",
                   "2009-02-13T23:31:30.123-07:00", "1969-07-20T20:17:40+05:30"] {
        let then = parse_iso8601(input).unwrap();
        let again = parse_iso8601(&then.iso().to_string()).unwrap();
        assert_eq!(then.to_instant(), again.to_instant(), "{}", input);
        assert_eq!(then, again);
    }
}

#[test]
fn fields() {
    let strings = [
        ("2001-02-03T04:05:06+07:00",    (2001, Month::February, 3, 4, 5, 6, 0)),
        ("2001-02-03T04:05:06.123Z",     (2001, Month::February, 3, 4, 5, 6, 123)),
        ("2015-06-26T22:57:09+00:00",    (2015, Month::June, 26, 22, 57, 9, 0)),
        ("2015-06-26T22:57:09Z",         (2015, Month::June, 26, 22, 57, 9, 0)),
        ("2001-W05-6T04:05:06Z",         (2001, Month::February, 3, 4, 5, 6, 0)),
    ];

    for &(input, expected) in strings.iter() {
        let d = parse_iso8601(input).unwrap();
        let fields = (d.year(), d.month(), d.day(), d.hour(), d.minute(), d.second(), d.millisecond());
        assert_eq!(fields, expected, "{}", input);
    }
}
