use super::*;

fn t(hour: u8, minute: u8, is_24h: bool) -> ClockTime {
    ClockTime::new(hour, minute, is_24h).unwrap()
}

#[test]
fn rejects_out_of_range() {
    assert!(ClockTime::new(24, 0, true).is_err());
    assert!(ClockTime::new(0, 60, false).is_err());
    assert!(ClockTime::new(23, 59, true).is_ok());
}

#[test]
fn twelve_hour_remap() {
    assert_eq!(t(0, 0, false).display_hour(), 12);
    assert_eq!(t(12, 0, false).display_hour(), 12);
    assert_eq!(t(13, 5, false).display_hour(), 1);
    assert_eq!(t(9, 41, false).display_hour(), 9);
    assert_eq!(t(23, 59, false).display_hour(), 11);
}

#[test]
fn twenty_four_hour_is_identity() {
    assert_eq!(t(0, 0, true).display_hour(), 0);
    assert_eq!(t(23, 59, true).display_hour(), 23);
}

#[test]
fn digits_and_leading_zero_rule() {
    let d = t(9, 41, false).digits();
    assert_eq!(
        d,
        ClockDigits {
            hour_tens: 0,
            hour_ones: 9,
            minute_tens: 4,
            minute_ones: 1,
        }
    );
    assert!(!t(9, 41, false).shows_hour_tens());
    assert!(t(0, 0, false).shows_hour_tens());
    assert!(t(0, 0, true).shows_hour_tens());
    assert!(t(7, 5, true).shows_hour_tens());
}

#[test]
fn file_stems_match_store_naming() {
    assert_eq!(t(9, 41, false).file_stem(), "09-41-12h");
    assert_eq!(t(23, 59, true).file_stem(), "23-59-24h");
    assert_eq!(t(12, 0, false).file_stem(), "12-00-12h");
}

#[test]
fn parse_variants() {
    assert_eq!("09:41".parse::<ClockTime>().unwrap(), t(9, 41, false));
    assert_eq!("23:59/24h".parse::<ClockTime>().unwrap(), t(23, 59, true));
    assert_eq!("3:45/12h".parse::<ClockTime>().unwrap(), t(3, 45, false));
    assert!("25:00".parse::<ClockTime>().is_err());
    assert!("10-08".parse::<ClockTime>().is_err());
    assert!("10:08/48h".parse::<ClockTime>().is_err());
}

#[test]
fn display_shows_rendered_digits() {
    assert_eq!(t(0, 7, false).to_string(), "12:07 (12h)");
    assert_eq!(t(0, 7, true).to_string(), "00:07 (24h)");
}
