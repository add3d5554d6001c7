extern crate datecalc;
pub use datecalc::ISO;
pub use std::string::ToString;

mod datetimes {
    use super::*;
    use datecalc::{LocalDate, LocalTime, LocalDateTime, Month};

    #[test]
    fn recently() {
        let date = LocalDate::ymd(1600, Month::February, 28).unwrap();
        assert_eq!(date.iso().to_string(), "1600-02-28");
    }

    #[test]
    fn just_then() {
        let date = LocalDate::ymd(-753, Month::December, 1).unwrap();
        assert_eq!(date.iso().to_string(), "-0753-12-01");
    }

    #[test]
    fn far_far_future() {
        let date = LocalDate::ymd(10601, Month::January, 31).unwrap();
        assert_eq!(date.iso().to_string(), "+10601-01-31");
    }

    #[test]
    fn midday() {
        let time = LocalTime::hms(12, 0, 0).unwrap();
        assert_eq!(time.iso().to_string(), "12:00:00.000");
    }

    #[test]
    fn ascending() {
        let then = LocalDateTime::new(
                    LocalDate::ymd(2009, Month::February, 13).unwrap(),
                    LocalTime::hms(23, 31, 30).unwrap());

        assert_eq!(then.iso().to_string(), "2009-02-13T23:31:30.000");
    }
}

mod offsets {
    use super::*;
    use datecalc::Offset;

    #[test]
    fn zulu() {
        assert_eq!(Offset::utc().iso().to_string(), "Z");
    }

    #[test]
    fn hours() {
        let offset = Offset::of_hours_and_minutes(1, 0).unwrap();
        assert_eq!(offset.iso().to_string(), "+01:00");
    }

    #[test]
    fn hours_minutes() {
        let offset = Offset::of_hours_and_minutes(-9, -30).unwrap();
        assert_eq!(offset.iso().to_string(), "-09:30");
    }

    #[test]
    fn dublin_mean_time() {
        let offset = Offset::of_seconds(-25 * 60 - 21).unwrap();
        assert_eq!(offset.iso().to_string(), "-00:25:21");
    }

    #[test]
    fn offset_date_time() {
        use datecalc::{LocalDate, LocalTime, LocalDateTime, Month};

        let offset = Offset::of_hours_and_minutes(5, 30).unwrap();

        let then = LocalDateTime::new(
                    LocalDate::ymd(2009, Month::February, 13).unwrap(),
                    LocalTime::hms(23, 31, 30).unwrap());

        assert_eq!(offset.transform_date(then).iso().to_string(), "2009-02-13T23:31:30.000+05:30");
    }
}
