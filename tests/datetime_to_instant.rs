extern crate datecalc;
use datecalc::{Instant, Duration, LocalDateTime, OffsetDateTime};


#[test]
fn test_1970() {
    assert_eq!(LocalDateTime::at(0).to_instant().seconds(), 0)
}

#[test]
fn test_1973() {
    let seconds = 86400 * (365 * 3 + 1);
    assert_eq!(LocalDateTime::at(seconds).to_instant().seconds(), seconds)
}

#[test]
fn far_far_future() {
    assert_eq!(LocalDateTime::at(54_321_234_567_890).to_instant().seconds(), 54_321_234_567_890)
}

#[test]
fn the_distant_past() {
    assert_eq!(LocalDateTime::at(-54_321_234_567_890).to_instant().seconds(), -54_321_234_567_890)
}

#[test]
fn epoch_milliseconds() {
    for &ms in &[0, 1, -1, 999, -999, 1_453_816_082_123, -1_000_000_000_001] {
        assert_eq!(OffsetDateTime::at_epoch_ms(ms).epoch_ms(), ms);
        assert_eq!(Instant::at_epoch_ms(ms).epoch_ms(), ms);
    }
}

#[test]
fn before_the_epoch() {
    let instant = Instant::at_epoch_ms(-1);
    assert_eq!((instant.seconds(), instant.milliseconds()), (-1, 999));
}

#[test]
fn arithmetic() {
    assert_eq!(Instant::at(10), Instant::at(3) + Duration::of(7));
    assert_eq!(Instant::at(20), Instant::at(50) - Duration::of(30));
    assert_eq!(Instant::at_ms(1, 500) - Instant::at_ms(0, 750), Duration::of_ms(0, 750));
}

#[test]
fn now() {
    assert!(Instant::now() > Instant::at(1_451_606_400));
    assert!(OffsetDateTime::now().offset().is_utc());
}
