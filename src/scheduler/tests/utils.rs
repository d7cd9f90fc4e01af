use crate::aircraft::Aircraft;
use crate::airport::Airport;
use crate::flight::Flight;
use crate::registry::{AircraftId, AirportId, Registry};
use crate::time::Time;
use proptest::prelude::Strategy;

pub fn add_airport(
    registry: &mut Registry,
    name: &str,
    hangars: usize,
    runways: usize,
) -> AirportId {
    registry.add_airport(Airport::new(name, hangars, runways))
}

/// Registers a fuelled aircraft and parks it at `parked_at`.
pub fn add_aircraft(
    registry: &mut Registry,
    name: &str,
    fuel: i64,
    parked_at: AirportId,
) -> AircraftId {
    let mut aircraft = Aircraft::new(name, 100, 1000).unwrap();
    aircraft.refuel(fuel);
    let id = registry.add_aircraft(aircraft);
    assert!(registry.airport_mut(parked_at).unwrap().park(id));
    id
}

pub fn add_flight(
    flights: &mut Vec<Flight>,
    flight_id: &str,
    departure: AirportId,
    arrival: AirportId,
    distance: u32,
    aircraft: AircraftId,
) {
    flights.push(Flight::new(flight_id, departure, arrival, distance, aircraft, None));
}

pub fn departures(flights: &[Flight]) -> Vec<Option<Time>> {
    flights.iter().map(|f| f.scheduled_departure).collect()
}

pub fn ids(flights: &[Flight]) -> Vec<&str> {
    flights.iter().map(|f| &*f.id).collect()
}

pub fn arb_distances() -> impl Strategy<Value = Vec<u32>> {
    proptest::collection::vec(0..2000u32, 0..25)
}
