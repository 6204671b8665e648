//! Distribution centers and their sub-sheet ids.

use serde::Serialize;

use crate::constants::DEFAULT_LOCATIONS;
use crate::error::{ConfigError, Result};

/// A named distribution center backed by one sub-sheet of the spreadsheet.
#[derive(Debug, Clone, Serialize, PartialEq, Eq, Hash)]
pub struct Location {
    pub name: String,
    /// Sub-sheet id (`gid` query parameter of the export URL).
    pub gid: String,
}

impl Location {
    pub fn new(name: impl Into<String>, gid: impl Into<String>) -> Self {
        Self { name: name.into(), gid: gid.into() }
    }
}

/// Ordered set of locations; the first entry is the default selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocationRegistry {
    locations: Vec<Location>,
}

impl LocationRegistry {
    pub fn new(locations: Vec<Location>) -> Result<Self> {
        if locations.is_empty() {
            return Err(ConfigError::NoLocations);
        }
        for (i, loc) in locations.iter().enumerate() {
            if locations.iter().take(i).any(|other| other.name.eq_ignore_ascii_case(&loc.name)) {
                return Err(ConfigError::DuplicateLocation(loc.name.clone()));
            }
        }
        Ok(Self { locations })
    }

    /// Parses `Name=gid` pairs separated by commas, e.g. `Enea=1200217273,Norte=42`.
    pub fn parse(raw: &str) -> Result<Self> {
        let locations = raw
            .split(',')
            .map(str::trim)
            .filter(|entry| !entry.is_empty())
            .map(|entry| {
                let (name, gid) = entry
                    .split_once('=')
                    .ok_or_else(|| ConfigError::InvalidLocation(entry.to_owned()))?;
                let (name, gid) = (name.trim(), gid.trim());
                if name.is_empty() || gid.is_empty() {
                    return Err(ConfigError::InvalidLocation(entry.to_owned()));
                }
                Ok(Location::new(name, gid))
            })
            .collect::<Result<Vec<_>>>()?;
        Self::new(locations)
    }

    /// Looks a location up by display name, ignoring ASCII case.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Location> {
        let name = name.trim();
        self.locations.iter().find(|loc| loc.name.eq_ignore_ascii_case(name))
    }

    #[must_use]
    pub fn by_gid(&self, gid: &str) -> Option<&Location> {
        self.locations.iter().find(|loc| loc.gid == gid)
    }

    #[must_use]
    pub fn default_location(&self) -> &Location {
        // Non-empty is enforced by the constructor.
        &self.locations[0]
    }

    #[must_use]
    pub fn all(&self) -> &[Location] {
        &self.locations
    }
}

impl Default for LocationRegistry {
    fn default() -> Self {
        Self {
            locations: DEFAULT_LOCATIONS
                .iter()
                .map(|(name, gid)| Location::new(*name, *gid))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_registry_keeps_order() {
        let registry = LocationRegistry::default();
        let names: Vec<_> = registry.all().iter().map(|l| l.name.as_str()).collect();
        assert_eq!(names, vec!["Santa Isabel", "Enea"]);
        assert_eq!(registry.default_location().gid, "1299544230");
    }

    #[test]
    fn lookup_is_case_insensitive() {
        let registry = LocationRegistry::default();
        assert_eq!(registry.get("enea").map(|l| l.gid.as_str()), Some("1200217273"));
        assert_eq!(registry.get(" SANTA ISABEL ").map(|l| l.gid.as_str()), Some("1299544230"));
        assert!(registry.get("Lima").is_none());
    }

    #[test]
    fn parses_pairs() {
        let registry = LocationRegistry::parse("Norte = 11, Sur=22 ,").expect("parse");
        assert_eq!(registry.all(), &[Location::new("Norte", "11"), Location::new("Sur", "22")]);
        assert_eq!(registry.by_gid("22").map(|l| l.name.as_str()), Some("Sur"));
    }

    #[test]
    fn rejects_malformed_entries() {
        assert_eq!(
            LocationRegistry::parse("Norte"),
            Err(ConfigError::InvalidLocation("Norte".to_owned()))
        );
        assert_eq!(
            LocationRegistry::parse("=11"),
            Err(ConfigError::InvalidLocation("=11".to_owned()))
        );
    }

    #[test]
    fn rejects_empty_and_duplicates() {
        assert_eq!(LocationRegistry::parse(" , "), Err(ConfigError::NoLocations));
        assert_eq!(
            LocationRegistry::parse("Enea=1,enea=2"),
            Err(ConfigError::DuplicateLocation("enea".to_owned()))
        );
    }
}
