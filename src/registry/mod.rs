//! Registry of time zone definitions and aliases.

use std::sync::{Arc, OnceLock, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use indexmap::IndexMap;
use tracing::debug;

use crate::timezone::{Timezone, TimezoneDefinition};
use crate::Error;


/// Indices of a time zone registry
#[derive(Debug, Default)]
struct Indices {
    /// Definitions by identifier, in registration order
    timezones: IndexMap<String, Arc<dyn TimezoneDefinition>>,
    /// Target identifiers by alias, in registration order
    aliases: IndexMap<String, String>,
}

impl Indices {
    /// Construct indices holding exactly the built-in entries
    ///
    /// The built-in entries are the UTC and floating time zones and the
    /// aliases `GMT` and `Z` for UTC.
    fn bootstrapped() -> Self {
        let utc = Timezone::utc();
        let floating = Timezone::floating();

        let mut indices = Self::default();
        indices.aliases.insert("GMT".to_owned(), utc.timezone_id().to_owned());
        indices.aliases.insert("Z".to_owned(), utc.timezone_id().to_owned());
        indices.timezones.insert(utc.timezone_id().to_owned(), utc);
        indices.timezones.insert(floating.timezone_id().to_owned(), floating);
        indices
    }
}

/// Registry of time zone definitions, indexed by identifier and by alias
///
/// A registry always contains its built-in entries, and every operation is
/// usable from multiple threads. Identifiers and aliases are matched
/// case-sensitively.
#[derive(Debug)]
pub struct TimezoneRegistry {
    /// Both indices behind a single lock, so lookups see a consistent pair
    indices: RwLock<Indices>,
}

impl TimezoneRegistry {
    /// Construct a registry holding the built-in definitions and aliases
    pub fn new() -> Self {
        Self { indices: RwLock::new(Indices::bootstrapped()) }
    }

    /// Returns the process-wide shared registry, created on first access
    pub fn global() -> &'static Self {
        static GLOBAL: OnceLock<TimezoneRegistry> = OnceLock::new();
        GLOBAL.get_or_init(TimezoneRegistry::new)
    }

    /// Register a time zone definition under its own identifier
    ///
    /// A definition registered under the same identifier earlier is replaced,
    /// keeping its position in the registration order.
    pub fn register_timezone(&self, definition: Arc<dyn TimezoneDefinition>) {
        debug!(timezone_id = definition.timezone_id(), "registering time zone");
        self.write().timezones.insert(definition.timezone_id().to_owned(), definition);
    }

    /// Parse iCalendar data and register the resulting definition
    ///
    /// Nothing is registered when parsing fails.
    pub fn register_timezone_from_ics(&self, timezone_id: &str, ics: &str) -> Result<(), Error> {
        let timezone = Timezone::from_ics(timezone_id, ics)?;
        self.register_timezone(Arc::new(timezone));
        Ok(())
    }

    /// Register an alias for a time zone identifier
    ///
    /// The target does not need to be registered, neither when the alias is
    /// registered nor later. An alias registered under the same name earlier
    /// is retargeted, keeping its position in the registration order.
    pub fn register_alias(&self, alias_name: &str, timezone_id: &str) {
        debug!(alias_name, timezone_id, "registering alias");
        self.write().aliases.insert(alias_name.to_owned(), timezone_id.to_owned());
    }

    /// Remove the definition registered under the given identifier
    ///
    /// Unknown identifiers are ignored. Aliases targeting the removed
    /// identifier are kept and become dangling.
    pub fn unregister_timezone(&self, timezone_id: &str) {
        if self.write().timezones.shift_remove(timezone_id).is_some() {
            debug!(timezone_id, "unregistered time zone");
        }
    }

    /// Remove the alias registered under the given name
    ///
    /// Unknown names are ignored. The target definition is kept.
    pub fn unregister_alias(&self, alias_name: &str) {
        if self.write().aliases.shift_remove(alias_name).is_some() {
            debug!(alias_name, "unregistered alias");
        }
    }

    /// Returns the definition known by the given name
    ///
    /// A name without a definition of its own is resolved through the alias
    /// index, following a single alias hop. An alias targeting another alias
    /// does not resolve, and neither does an alias targeting an identifier
    /// that is not registered.
    pub fn timezone_for_id(&self, timezone_id: &str) -> Option<Arc<dyn TimezoneDefinition>> {
        let indices = self.read();

        if let Some(definition) = indices.timezones.get(timezone_id) {
            return Some(definition.clone());
        }

        let target = indices.aliases.get(timezone_id)?;
        indices.timezones.get(target).cloned()
    }

    /// Check if the given name is known, as an identifier or as an alias
    ///
    /// An alias whose target is not registered still counts as known, even
    /// though it does not resolve to a definition.
    pub fn has_timezone_for_id(&self, timezone_id: &str) -> bool {
        let indices = self.read();
        indices.timezones.contains_key(timezone_id) || indices.aliases.contains_key(timezone_id)
    }

    /// Check if the given name is known through the alias index only
    ///
    /// A name with a definition of its own is not an alias, even when an
    /// alias entry with the same name exists.
    pub fn is_alias(&self, timezone_id: &str) -> bool {
        let indices = self.read();
        !indices.timezones.contains_key(timezone_id) && indices.aliases.contains_key(timezone_id)
    }

    /// Returns the known time zone names, in registration order
    ///
    /// The identifiers of the registered definitions come first. Alias names
    /// are appended after them when `include_aliases` is true.
    pub fn list_all_timezones(&self, include_aliases: bool) -> Vec<String> {
        let indices = self.read();
        let mut names: Vec<String> = indices.timezones.keys().cloned().collect();

        if include_aliases {
            names.extend(indices.aliases.keys().cloned());
        }

        names
    }

    /// Reset the registry to its built-in entries
    ///
    /// The replacement indices are built completely before the write lock is
    /// taken, so concurrent lookups see either the old entries or the
    /// built-in entries, never an empty registry.
    pub fn clear_all_timezones(&self) {
        let indices = Indices::bootstrapped();
        *self.write() = indices;
        debug!("cleared time zone registry");
    }

    /// Returns the indices behind the read lock
    ///
    /// A panic cannot leave the indices partially updated, so the data behind
    /// a poisoned lock is still consistent and poisoning is ignored.
    fn read(&self) -> RwLockReadGuard<'_, Indices> {
        self.indices.read().unwrap_or_else(PoisonError::into_inner)
    }

    /// Returns the indices behind the write lock, ignoring poisoning
    fn write(&self) -> RwLockWriteGuard<'_, Indices> {
        self.indices.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for TimezoneRegistry {
    fn default() -> Self {
        Self::new()
    }
}
