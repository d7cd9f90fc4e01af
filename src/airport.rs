use crate::registry::AircraftId;
use std::fmt;
use std::fmt::Formatter;
use std::sync::Arc;

/// Fixed pools of hangar slots and runways.
///
/// Pool sizes never change after construction. A hangar slot holds a handle,
/// never the aircraft itself.
#[derive(Clone, Debug, PartialEq)]
pub struct Airport {
    name: Arc<str>,
    hangars: Vec<Option<AircraftId>>,
    runways: Vec<bool>,
}

impl Airport {
    pub fn new(name: impl Into<Arc<str>>, hangar_count: usize, runway_count: usize) -> Airport {
        Airport {
            name: name.into(),
            hangars: vec![None; hangar_count],
            runways: vec![true; runway_count],
        }
    }

    pub fn name(&self) -> &Arc<str> {
        &self.name
    }

    pub fn hangar_count(&self) -> usize {
        self.hangars.len()
    }

    pub fn runway_count(&self) -> usize {
        self.runways.len()
    }

    pub fn occupied_hangars(&self) -> usize {
        self.hangars.iter().filter(|h| h.is_some()).count()
    }

    pub fn is_parked(&self, aircraft: AircraftId) -> bool {
        self.hangars.contains(&Some(aircraft))
    }

    pub fn parked(&self) -> impl Iterator<Item = AircraftId> + '_ {
        self.hangars.iter().flatten().copied()
    }

    /// Puts `aircraft` in the first empty slot. Slots are not deduplicated,
    /// so parking an already parked aircraft takes a second slot.
    pub fn park(&mut self, aircraft: AircraftId) -> bool {
        match self.hangars.iter_mut().find(|h| h.is_none()) {
            Some(slot) => {
                *slot = Some(aircraft);
                true
            }
            None => false,
        }
    }

    pub fn remove(&mut self, aircraft: AircraftId) -> bool {
        match self.hangars.iter_mut().find(|h| **h == Some(aircraft)) {
            Some(slot) => {
                *slot = None;
                true
            }
            None => false,
        }
    }

    pub fn runway_available(&self) -> bool {
        self.runways.iter().any(|free| *free)
    }

    pub fn free_runways(&self) -> impl Iterator<Item = usize> + '_ {
        self.runways
            .iter()
            .enumerate()
            .filter(|(_, free)| **free)
            .map(|(i, _)| i)
    }

    /// Occupies the lowest free runway and returns its index.
    pub fn acquire_runway(&mut self) -> Option<usize> {
        let index = self.runways.iter().position(|free| *free)?;
        self.runways[index] = false;
        Some(index)
    }

    /// Frees runway `index`. Out of range indices are ignored.
    pub fn release_runway(&mut self, index: usize) {
        if let Some(runway) = self.runways.get_mut(index) {
            *runway = true;
        }
    }
}

impl fmt::Display for Airport {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let free = self.free_runways().collect::<Vec<_>>();
        write!(
            f,
            "Airport {} (hangars: {}/{}, free runways: {:?})",
            self.name,
            self.occupied_hangars(),
            self.hangar_count(),
            free
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aircraft::Aircraft;
    use crate::registry::Registry;
    use proptest::prelude::*;

    fn two_aircraft() -> (AircraftId, AircraftId) {
        let mut registry = Registry::new();
        (
            registry.add_aircraft(Aircraft::new("Boeing 777", 150, 1000).unwrap()),
            registry.add_aircraft(Aircraft::new("Airbus A330", 200, 800).unwrap()),
        )
    }

    #[test]
    fn test_park_and_remove() {
        let (first, second) = two_aircraft();
        let mut airport = Airport::new("SVO", 2, 1);

        assert!(airport.park(first));
        assert!(airport.park(second));
        assert!(!airport.park(first));

        assert!(airport.remove(first));
        assert!(!airport.is_parked(first));
        assert!(airport.park(first));
        assert!(airport.is_parked(first));
    }

    #[test]
    fn test_park_takes_lowest_slot() {
        let (first, second) = two_aircraft();
        let mut airport = Airport::new("SVO", 3, 1);
        assert!(airport.park(first));
        assert!(airport.park(second));
        assert!(airport.remove(first));
        assert!(airport.park(first));
        assert_eq!(vec![first, second], airport.parked().collect::<Vec<_>>());
    }

    #[test]
    fn test_park_same_aircraft_twice() {
        let (first, _) = two_aircraft();
        let mut airport = Airport::new("SVO", 2, 1);
        assert!(airport.park(first));
        assert!(airport.park(first));
        assert_eq!(2, airport.occupied_hangars());
        assert!(airport.remove(first));
        assert!(airport.is_parked(first));
    }

    #[test]
    fn test_remove_missing() {
        let (first, second) = two_aircraft();
        let mut airport = Airport::new("SVO", 2, 1);
        assert!(airport.park(first));
        assert!(!airport.remove(second));
        assert_eq!(1, airport.occupied_hangars());
    }

    #[test]
    fn test_no_hangars() {
        let (first, _) = two_aircraft();
        let mut airport = Airport::new("NIL", 0, 0);
        assert!(!airport.park(first));
        assert!(!airport.remove(first));
        assert!(!airport.runway_available());
        assert_eq!(None, airport.acquire_runway());
    }

    #[test]
    fn test_runway_availability() {
        assert!(Airport::new("JFK", 1, 2).runway_available());

        let mut airport = Airport::new("JFK", 1, 1);
        assert_eq!(Some(0), airport.acquire_runway());
        assert!(!airport.runway_available());
    }

    #[test]
    fn test_acquire_release_runway() {
        let mut airport = Airport::new("JFK", 1, 2);
        let runway = airport.acquire_runway();
        assert_eq!(Some(0), runway);
        airport.release_runway(0);
        assert!(airport.runway_available());
        assert_eq!(vec![0, 1], airport.free_runways().collect::<Vec<_>>());
    }

    #[test]
    fn test_acquire_all_runways() {
        let mut airport = Airport::new("JFK", 2, 3);
        assert_eq!(Some(0), airport.acquire_runway());
        assert_eq!(Some(1), airport.acquire_runway());
        assert_eq!(Some(2), airport.acquire_runway());
        assert!(!airport.runway_available());
        assert_eq!(None, airport.acquire_runway());

        airport.release_runway(1);
        assert_eq!(Some(1), airport.acquire_runway());
    }

    #[test]
    fn test_release_invalid_runway() {
        let mut airport = Airport::new("SVO", 1, 1);
        assert_eq!(Some(0), airport.acquire_runway());
        airport.release_runway(1);
        airport.release_runway(usize::MAX);
        assert!(!airport.runway_available());
    }

    #[test]
    fn test_display() {
        let (first, _) = two_aircraft();
        let mut airport = Airport::new("SVO", 2, 3);
        airport.park(first);
        airport.acquire_runway();
        assert_eq!(
            "Airport SVO (hangars: 1/2, free runways: [1, 2])",
            airport.to_string()
        );
    }

    proptest! {
        #[test]
        fn test_park_succeeds_iff_slot_free(hangars in 0..6usize, attempts in 0..10usize) {
            let (first, _) = two_aircraft();
            let mut airport = Airport::new("AP", hangars, 1);
            for _ in 0..attempts {
                let had_room = airport.occupied_hangars() < airport.hangar_count();
                prop_assert_eq!(had_room, airport.park(first));
            }
            prop_assert_eq!(hangars.min(attempts), airport.occupied_hangars());
        }
    }
}
