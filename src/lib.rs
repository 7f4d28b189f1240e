#![deny(missing_docs)]

//! This crate provides the `TimezoneRegistry` and `Timezone` types, which can be used to manage the set of time zone definitions needed when processing calendar data.
//!
//! Calendar documents carry their own time zone definitions as `VTIMEZONE` components, as described in [RFC 5545](https://datatracker.ietf.org/doc/html/rfc5545#section-3.6.5). The set of known time zones therefore depends on the processed documents and is managed at run time: definitions are registered under their identifier, looked up by identifier or by alias, and unregistered when no longer needed.
//!
//! A registry always contains the UTC time zone, the floating time zone and the aliases `GMT` and `Z` for UTC, including directly after a reset. Alias lookups resolve with a single hop: an alias targeting another alias does not resolve to a definition.
//!
//! # Usage
//!
//! ## Registry
//!
//! ```rust
//! # fn main() -> Result<(), ical_tz::Error> {
//! use ical_tz::{TimezoneDefinition, TimezoneRegistry};
//!
//! let registry = TimezoneRegistry::new();
//!
//! // The built-in entries are always available
//! assert!(registry.has_timezone_for_id("UTC"));
//! assert!(registry.is_alias("GMT"));
//!
//! // Register a definition from iCalendar data
//! let ics = concat!(
//!     "BEGIN:VTIMEZONE\r\n",
//!     "TZID:Europe/Berlin\r\n",
//!     "BEGIN:STANDARD\r\n",
//!     "DTSTART:19701025T030000\r\n",
//!     "RRULE:FREQ=YEARLY;BYMONTH=10;BYDAY=-1SU\r\n",
//!     "TZOFFSETFROM:+0200\r\n",
//!     "TZOFFSETTO:+0100\r\n",
//!     "END:STANDARD\r\n",
//!     "END:VTIMEZONE\r\n",
//! );
//! registry.register_timezone_from_ics("Europe/Berlin", ics)?;
//! assert!(registry.has_timezone_for_id("Europe/Berlin"));
//!
//! // Aliases resolve to the definition of their target
//! registry.register_alias("Europe/Busingen", "Europe/Berlin");
//! let busingen = registry.timezone_for_id("Europe/Busingen").unwrap();
//! assert_eq!(busingen.timezone_id(), "Europe/Berlin");
//!
//! // The built-in aliases work the same way
//! let utc = registry.timezone_for_id("Z").unwrap();
//! assert_eq!(utc.timezone_id(), "UTC");
//!
//! // Resetting the registry keeps the built-in entries
//! registry.clear_all_timezones();
//! assert!(!registry.has_timezone_for_id("Europe/Berlin"));
//! assert_eq!(registry.list_all_timezones(false), ["UTC", "floating"]);
//! # Ok(())
//! # }
//! ```
//!
//! ## Shared registry
//!
//! ```rust
//! use ical_tz::TimezoneRegistry;
//!
//! // All callers in the process see the same instance
//! let registry = TimezoneRegistry::global();
//! registry.register_alias("Europe/Kiev", "Europe/Kyiv");
//! assert!(TimezoneRegistry::global().is_alias("Europe/Kiev"));
//! ```
//!
//! ## Time zone definitions
//!
//! ```rust
//! # fn main() -> Result<(), ical_tz::Error> {
//! use ical_tz::{Timezone, TimezoneDefinition};
//!
//! // Built-in time zones are shared instances
//! let utc = Timezone::utc();
//! assert_eq!(utc.timezone_id(), "UTC");
//! assert!(utc.is_utc());
//!
//! // Definitions parsed from iCalendar data keep their VTIMEZONE component
//! let ics = concat!(
//!     "BEGIN:VCALENDAR\r\n",
//!     "PRODID:-//Example//Calendar//EN\r\n",
//!     "BEGIN:VTIMEZONE\r\n",
//!     "TZID:America/New_York\r\n",
//!     "BEGIN:STANDARD\r\n",
//!     "DTSTART:20071104T020000\r\n",
//!     "TZOFFSETFROM:-0400\r\n",
//!     "TZOFFSETTO:-0500\r\n",
//!     "TZNAME:EST\r\n",
//!     "END:STANDARD\r\n",
//!     "END:VTIMEZONE\r\n",
//!     "END:VCALENDAR\r\n",
//! );
//! let new_york = Timezone::from_ics("America/New_York", ics)?;
//! assert_eq!(new_york.timezone_id(), "America/New_York");
//!
//! let vtimezone = new_york.vtimezone().unwrap();
//! assert_eq!(vtimezone.property("TZID"), Some("America/New_York"));
//! assert_eq!(vtimezone.components()[0].name(), "STANDARD");
//! # Ok(())
//! # }
//! ```
//!
//! ## Identifier classification
//!
//! ```rust
//! use ical_tz::is_olson_timezone;
//!
//! assert!(is_olson_timezone("Europe/Berlin"));
//! assert!(!is_olson_timezone("Etc/GMT+2"));
//! assert!(!is_olson_timezone("GMT Standard Time"));
//! ```

#![warn(unreachable_pub)]

mod error;
pub use error::Error;

mod registry;
pub use registry::TimezoneRegistry;

mod timezone;
pub use timezone::{is_olson_timezone, Component, Property, Timezone, TimezoneDefinition};
