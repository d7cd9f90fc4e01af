//! Arena owning every aircraft and airport of a simulation.
//!
//! Flights and the scheduler never hold references into the arena, only the
//! `Copy` handles it hands out. Hangar slots compare handles, so two aircraft
//! with identical attributes stay distinct.

use crate::aircraft::Aircraft;
use crate::airport::Airport;
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AircraftId(usize);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AirportId(usize);

impl fmt::Display for AircraftId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AC#{}", self.0)
    }
}

impl fmt::Display for AirportId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AP#{}", self.0)
    }
}

#[derive(Debug, Default)]
pub struct Registry {
    aircraft: Vec<Aircraft>,
    airports: Vec<Airport>,
}

impl Registry {
    pub fn new() -> Registry {
        Registry::default()
    }

    pub fn add_aircraft(&mut self, aircraft: Aircraft) -> AircraftId {
        self.aircraft.push(aircraft);
        AircraftId(self.aircraft.len() - 1)
    }

    pub fn add_airport(&mut self, airport: Airport) -> AirportId {
        self.airports.push(airport);
        AirportId(self.airports.len() - 1)
    }

    pub fn aircraft(&self, id: AircraftId) -> Option<&Aircraft> {
        self.aircraft.get(id.0)
    }

    pub fn aircraft_mut(&mut self, id: AircraftId) -> Option<&mut Aircraft> {
        self.aircraft.get_mut(id.0)
    }

    pub fn airport(&self, id: AirportId) -> Option<&Airport> {
        self.airports.get(id.0)
    }

    pub fn airport_mut(&mut self, id: AirportId) -> Option<&mut Airport> {
        self.airports.get_mut(id.0)
    }

    /// First aircraft registered under `name`.
    pub fn find_aircraft(&self, name: &str) -> Option<AircraftId> {
        self.aircraft
            .iter()
            .position(|a| &**a.name() == name)
            .map(AircraftId)
    }

    pub fn find_airport(&self, name: &str) -> Option<AirportId> {
        self.airports
            .iter()
            .position(|a| &**a.name() == name)
            .map(AirportId)
    }

    pub fn aircraft_iter(&self) -> impl Iterator<Item = (AircraftId, &Aircraft)> {
        self.aircraft
            .iter()
            .enumerate()
            .map(|(i, a)| (AircraftId(i), a))
    }

    pub fn airports_iter(&self) -> impl Iterator<Item = (AirportId, &Airport)> {
        self.airports
            .iter()
            .enumerate()
            .map(|(i, a)| (AirportId(i), a))
    }

    /// Airport currently holding `aircraft` in one of its hangars.
    pub fn locate(&self, aircraft: AircraftId) -> Option<AirportId> {
        self.airports_iter()
            .find(|(_, ap)| ap.is_parked(aircraft))
            .map(|(id, _)| id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_handles_are_distinct_for_identical_aircraft() {
        let mut registry = Registry::new();
        let first = registry.add_aircraft(Aircraft::new("TWIN", 100, 500).unwrap());
        let second = registry.add_aircraft(Aircraft::new("TWIN", 100, 500).unwrap());
        assert_ne!(first, second);
        assert_eq!(registry.aircraft(first), registry.aircraft(second));

        let airport = registry.add_airport(Airport::new("KRK", 2, 1));
        assert!(registry.airport_mut(airport).unwrap().park(second));
        assert!(!registry.airport_mut(airport).unwrap().remove(first));
        assert_eq!(Some(airport), registry.locate(second));
        assert_eq!(None, registry.locate(first));
    }

    #[test]
    fn test_lookup_by_name() {
        let mut registry = Registry::new();
        let krk = registry.add_airport(Airport::new("KRK", 1, 1));
        let waw = registry.add_airport(Airport::new("WAW", 1, 1));
        let plane = registry.add_aircraft(Aircraft::new("PLANE_1", 100, 500).unwrap());

        assert_eq!(Some(krk), registry.find_airport("KRK"));
        assert_eq!(Some(waw), registry.find_airport("WAW"));
        assert_eq!(None, registry.find_airport("GDN"));
        assert_eq!(Some(plane), registry.find_aircraft("PLANE_1"));
        assert_eq!(None, registry.find_aircraft("PLANE_2"));
    }

    #[test]
    fn test_unknown_handle() {
        let mut other = Registry::new();
        let foreign = other.add_aircraft(Aircraft::new("PLANE", 1, 1).unwrap());
        let registry = Registry::new();
        assert!(registry.aircraft(foreign).is_none());
    }
}
