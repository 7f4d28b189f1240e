use std::sync::Arc;

use super::{is_olson_timezone, Timezone, TimezoneDefinition};
use crate::error::Error;

const BERLIN: &str = concat!(
    "BEGIN:VTIMEZONE\r\n",
    "TZID:Europe/Berlin\r\n",
    "BEGIN:DAYLIGHT\r\n",
    "TZOFFSETFROM:+0100\r\n",
    "TZOFFSETTO:+0200\r\n",
    "TZNAME:CEST\r\n",
    "DTSTART:19700329T020000\r\n",
    "RRULE:FREQ=YEARLY;BYMONTH=3;BYDAY=-1SU\r\n",
    "END:DAYLIGHT\r\n",
    "BEGIN:STANDARD\r\n",
    "TZOFFSETFROM:+0200\r\n",
    "TZOFFSETTO:+0100\r\n",
    "TZNAME:CET\r\n",
    "DTSTART:19701025T030000\r\n",
    "RRULE:FREQ=YEARLY;BYMONTH=10;BYDAY=-1SU\r\n",
    "END:STANDARD\r\n",
    "END:VTIMEZONE\r\n",
);

#[test]
fn test_from_ics() -> Result<(), Error> {
    let timezone = Timezone::from_ics("Europe/Berlin", BERLIN)?;
    assert_eq!(timezone.timezone_id(), "Europe/Berlin");
    assert!(!timezone.is_utc());
    assert!(!timezone.is_floating());

    let vtimezone = timezone.vtimezone().unwrap();
    assert_eq!(vtimezone.name(), "VTIMEZONE");
    assert_eq!(vtimezone.property("TZID"), Some("Europe/Berlin"));
    assert_eq!(vtimezone.properties().len(), 1);

    assert_eq!(vtimezone.components().len(), 2);
    assert_eq!(vtimezone.components()[0].name(), "DAYLIGHT");
    assert_eq!(vtimezone.components()[0].property("TZNAME"), Some("CEST"));
    assert_eq!(vtimezone.components()[1].name(), "STANDARD");
    assert_eq!(vtimezone.components()[1].property("TZOFFSETTO"), Some("+0100"));

    Ok(())
}

#[test]
fn test_from_ics_with_vcalendar_wrapper() -> Result<(), Error> {
    let ics = concat!(
        "BEGIN:VCALENDAR\r\n",
        "VERSION:2.0\r\n",
        "PRODID:-//Example//Calendar//EN\r\n",
        "BEGIN:VTIMEZONE\r\n",
        "TZID:America/New_York\r\n",
        "BEGIN:STANDARD\r\n",
        "DTSTART:20071104T020000\r\n",
        "TZOFFSETFROM:-0400\r\n",
        "TZOFFSETTO:-0500\r\n",
        "TZNAME:EST\r\n",
        "END:STANDARD\r\n",
        "END:VTIMEZONE\r\n",
        "END:VCALENDAR\r\n",
    );

    let timezone = Timezone::from_ics("America/New_York", ics)?;
    let vtimezone = timezone.vtimezone().unwrap();
    assert_eq!(vtimezone.name(), "VTIMEZONE");
    assert_eq!(vtimezone.property("TZID"), Some("America/New_York"));

    Ok(())
}

#[test]
fn test_from_ics_identifier_over_tzid() -> Result<(), Error> {
    let timezone = Timezone::from_ics("custom/Berlin", BERLIN)?;
    assert_eq!(timezone.timezone_id(), "custom/Berlin");
    assert_eq!(timezone.vtimezone().unwrap().property("TZID"), Some("Europe/Berlin"));

    Ok(())
}

#[test]
fn test_folded_content_lines() -> Result<(), Error> {
    // The RRULE value is folded over three lines, continued with a space and a tab
    let ics = "BEGIN:VTIMEZONE\nTZID:Europe/Berlin\nBEGIN:STANDARD\nDTSTART:19701025T030000\nRRULE:FREQ=YEARLY;\n BYMONTH=10;\n\tBYDAY=-1SU\nTZOFFSETFROM:+0200\nTZOFFSETTO:+0100\nEND:STANDARD\nEND:VTIMEZONE\n";

    let timezone = Timezone::from_ics("Europe/Berlin", ics)?;
    let standard = &timezone.vtimezone().unwrap().components()[0];
    assert_eq!(standard.property("RRULE"), Some("FREQ=YEARLY;BYMONTH=10;BYDAY=-1SU"));

    Ok(())
}

#[test]
fn test_case_insensitive_names() -> Result<(), Error> {
    let ics = "begin:vtimezone\ntzid:Europe/Berlin\nend:VTIMEZONE\n";

    let timezone = Timezone::from_ics("Europe/Berlin", ics)?;
    let vtimezone = timezone.vtimezone().unwrap();
    assert_eq!(vtimezone.name(), "vtimezone");
    assert_eq!(vtimezone.property("TZID"), Some("Europe/Berlin"));

    Ok(())
}

#[test]
fn test_parameters_and_values() -> Result<(), Error> {
    // A quoted parameter value may contain colons and semicolons
    let ics = concat!(
        "BEGIN:VTIMEZONE\r\n",
        "TZID;X-DISPLAY=\"Berlin; Germany: CET\":Europe/Berlin\r\n",
        "X-URL:http://example.com/tz\r\n",
        "X-EMPTY:\r\n",
        "END:VTIMEZONE\r\n",
    );

    let timezone = Timezone::from_ics("Europe/Berlin", ics)?;
    let vtimezone = timezone.vtimezone().unwrap();
    assert_eq!(vtimezone.property("TZID"), Some("Europe/Berlin"));
    assert_eq!(vtimezone.property("X-URL"), Some("http://example.com/tz"));
    assert_eq!(vtimezone.property("X-EMPTY"), Some(""));
    assert_eq!(vtimezone.property("X-MISSING"), None);

    Ok(())
}

#[test]
fn test_invalid_ics() -> Result<(), Error> {
    assert!(matches!(Timezone::from_ics("UTC", ""), Err(Error::InvalidComponent(_))));
    assert!(matches!(Timezone::from_ics("UTC", "\r\n\r\n"), Err(Error::InvalidComponent(_))));

    // Unterminated component
    assert!(matches!(
        Timezone::from_ics("UTC", "BEGIN:VTIMEZONE\r\n"),
        Err(Error::InvalidComponent(_))
    ));

    // END without matching BEGIN
    assert!(matches!(
        Timezone::from_ics("UTC", "END:VTIMEZONE\r\n"),
        Err(Error::InvalidComponent(_))
    ));

    // Mismatched END
    assert!(matches!(
        Timezone::from_ics("UTC", "BEGIN:VTIMEZONE\r\nEND:STANDARD\r\n"),
        Err(Error::InvalidComponent(_))
    ));

    // Property outside of a component
    assert!(matches!(
        Timezone::from_ics("UTC", "TZID:Europe/Berlin\r\n"),
        Err(Error::InvalidComponent(_))
    ));

    // Empty component name
    assert!(matches!(
        Timezone::from_ics("UTC", "BEGIN:\r\nEND:\r\n"),
        Err(Error::InvalidComponent(_))
    ));

    // Missing value separator
    assert!(matches!(
        Timezone::from_ics("UTC", "BEGIN:VTIMEZONE\r\nTZID\r\nEND:VTIMEZONE\r\n"),
        Err(Error::InvalidContentLine(_))
    ));

    // Empty property name
    assert!(matches!(
        Timezone::from_ics("UTC", "BEGIN:VTIMEZONE\r\n:value\r\nEND:VTIMEZONE\r\n"),
        Err(Error::InvalidContentLine(_))
    ));

    // Invalid character in property name
    assert!(matches!(
        Timezone::from_ics("UTC", "BEGIN:VTIMEZONE\r\nTZ ID:x\r\nEND:VTIMEZONE\r\n"),
        Err(Error::InvalidContentLine(_))
    ));

    // Unterminated quoted parameter value
    assert!(matches!(
        Timezone::from_ics("UTC", "BEGIN:VTIMEZONE\r\nTZID;X=\"oops\r\nEND:VTIMEZONE\r\n"),
        Err(Error::InvalidContentLine(_))
    ));

    // Well-formed data without a VTIMEZONE
    assert!(matches!(
        Timezone::from_ics("UTC", "BEGIN:VCALENDAR\r\nVERSION:2.0\r\nEND:VCALENDAR\r\n"),
        Err(Error::MissingVTimezone)
    ));

    Ok(())
}

#[test]
fn test_builtin_timezones() {
    let utc = Timezone::utc();
    assert_eq!(utc.timezone_id(), "UTC");
    assert!(utc.is_utc());
    assert!(!utc.is_floating());
    assert!(utc.vtimezone().is_none());
    assert!(Arc::ptr_eq(&utc, &Timezone::utc()));

    let floating = Timezone::floating();
    assert_eq!(floating.timezone_id(), "floating");
    assert!(floating.is_floating());
    assert!(!floating.is_utc());
    assert!(floating.vtimezone().is_none());
    assert!(Arc::ptr_eq(&floating, &Timezone::floating()));
}

#[test]
fn test_is_olson_timezone() {
    assert!(is_olson_timezone("Europe/Berlin"));
    assert!(is_olson_timezone("America/New_York"));
    assert!(is_olson_timezone("America/Argentina/Ushuaia"));

    assert!(!is_olson_timezone("UTC"));
    assert!(!is_olson_timezone("Etc/GMT+2"));
    assert!(!is_olson_timezone("Etcetera/Nowhere"));
    assert!(!is_olson_timezone("US/Pacific"));
    assert!(!is_olson_timezone("GMT Standard Time"));
    assert!(!is_olson_timezone("W. Europe Standard Time"));
    assert!(!is_olson_timezone("Custom Zone/1"));
}
