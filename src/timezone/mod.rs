//! Types related to a time zone definition.

use std::fmt;
use std::sync::{Arc, OnceLock};

use crate::Error;

mod parser;

#[cfg(test)]
mod tests;

/// Property of an iCalendar component
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Property {
    /// Property name, e.g. `TZID`
    name: String,
    /// Raw property value
    value: String,
}

impl Property {
    /// Construct an iCalendar property
    fn new(name: &str, value: &str) -> Self {
        Self { name: name.to_owned(), value: value.to_owned() }
    }

    /// Returns the property name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the raw property value
    pub fn value(&self) -> &str {
        &self.value
    }
}

/// Component of an iCalendar stream
///
/// Properties and nested components are kept in source order. Names are
/// matched ASCII case-insensitively, as iCalendar names are case-insensitive.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Component {
    /// Component name, e.g. `VTIMEZONE`
    name: String,
    /// List of properties
    properties: Vec<Property>,
    /// List of nested components
    components: Vec<Component>,
}

impl Component {
    /// Construct an empty iCalendar component
    fn new(name: &str) -> Self {
        Self { name: name.to_owned(), properties: Vec::new(), components: Vec::new() }
    }

    /// Returns the component name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the list of properties
    pub fn properties(&self) -> &[Property] {
        &self.properties
    }

    /// Returns the list of nested components
    pub fn components(&self) -> &[Component] {
        &self.components
    }

    /// Returns the value of the first property with the given name
    pub fn property(&self, name: &str) -> Option<&str> {
        let property =
            self.properties.iter().find(|property| property.name.eq_ignore_ascii_case(name))?;
        Some(&property.value)
    }
}

/// Named time zone definition
///
/// The registry stores definitions as shared trait objects, so definition
/// types from other crates can be registered alongside [`Timezone`].
pub trait TimezoneDefinition: fmt::Debug + Send + Sync {
    /// Returns the identifier the definition is known by, e.g. `Europe/Berlin`
    fn timezone_id(&self) -> &str;
}

/// Rule data backing a time zone definition
#[derive(Debug, Clone, Eq, PartialEq)]
enum ZoneData {
    /// Fixed zero offset from UTC
    Utc,
    /// No offset rules, date times are interpreted in the local time of the observer
    Floating,
    /// Offset rules from a `VTIMEZONE` component
    Ical(Component),
}

/// Time zone definition described by iCalendar data
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Timezone {
    /// Identifier the definition is known by
    id: String,
    /// Rule data backing the definition
    data: ZoneData,
}

impl Timezone {
    /// Construct a time zone definition from raw iCalendar data
    ///
    /// The data must contain a `VTIMEZONE` component, either standalone or
    /// nested in a `VCALENDAR`. The definition is known by the given
    /// identifier, regardless of any `TZID` property in the data.
    pub fn from_ics(timezone_id: &str, ics: &str) -> Result<Self, Error> {
        let vtimezone = parser::parse(ics)?;
        Ok(Self { id: timezone_id.to_owned(), data: ZoneData::Ical(vtimezone) })
    }

    /// Returns the shared time zone associated to UTC, identified as `UTC`
    pub fn utc() -> Arc<Self> {
        static UTC: OnceLock<Arc<Timezone>> = OnceLock::new();
        UTC.get_or_init(|| Arc::new(Self { id: "UTC".to_owned(), data: ZoneData::Utc })).clone()
    }

    /// Returns the shared floating time zone, identified as `floating`
    pub fn floating() -> Arc<Self> {
        static FLOATING: OnceLock<Arc<Timezone>> = OnceLock::new();
        FLOATING
            .get_or_init(|| Arc::new(Self { id: "floating".to_owned(), data: ZoneData::Floating }))
            .clone()
    }

    /// Check if this is the UTC time zone
    pub fn is_utc(&self) -> bool {
        matches!(self.data, ZoneData::Utc)
    }

    /// Check if this is the floating time zone
    pub fn is_floating(&self) -> bool {
        matches!(self.data, ZoneData::Floating)
    }

    /// Returns the `VTIMEZONE` component of a definition parsed from iCalendar data
    pub fn vtimezone(&self) -> Option<&Component> {
        match &self.data {
            ZoneData::Ical(component) => Some(component),
            ZoneData::Utc | ZoneData::Floating => None,
        }
    }
}

impl TimezoneDefinition for Timezone {
    fn timezone_id(&self) -> &str {
        &self.id
    }
}

/// Check if a time zone identifier is a geographic `Area/Location` name from
/// the IANA time zone database, e.g. `Europe/Berlin`
///
/// Fixed-offset names under `Etc/`, deprecated `US/` names, abbreviations and
/// display names containing spaces do not qualify.
pub fn is_olson_timezone(timezone_id: &str) -> bool {
    timezone_id.contains('/')
        && !timezone_id.contains(' ')
        && !timezone_id.starts_with("Etc")
        && !timezone_id.starts_with("US/")
}
