//! Greedy departure-time assignment.
//!
//! All flights of a batch share one runway timeline, however many runways
//! the airport actually has. Only timestamps are assigned here; runway and
//! hangar pools are checked later by `Flight::perform`.

use crate::airport::Airport;
use crate::flight::Flight;
use crate::time::Time;
use tracing::{debug, trace};

/// Runway occupancy added after every departure's flight time.
pub const TURNAROUND_BUFFER: Time = Time::from_minutes(30);
/// Minimum gap between two consecutive departures.
pub const DEPARTURE_SPACING: Time = Time::from_minutes(15);

/// Flight time for `distance`, at half a minute per unit of distance.
pub fn flight_duration(distance: u32) -> Time {
    Time(u64::from(distance) * 30)
}

/// Assigns `scheduled_departure` to every flight, longest distance first.
///
/// Ties keep their input order. The returned vector is in departure order.
/// A timeline running past `Time::MAX` pins every later departure there.
pub fn schedule_flights(
    mut flights: Vec<Flight>,
    airport: &Airport,
    start_time: Time,
) -> Vec<Flight> {
    flights.sort_by(|a, b| b.distance.cmp(&a.distance));

    let mut current_time = start_time;
    let mut runway_available_time = start_time;
    for flight in flights.iter_mut() {
        let departure = runway_available_time.max(current_time);
        flight.schedule_at(departure);
        runway_available_time = departure + flight_duration(flight.distance) + TURNAROUND_BUFFER;
        current_time += DEPARTURE_SPACING;
        trace!(flight = %flight.id, %departure, runway_free = %runway_available_time);
    }

    debug!(airport = %airport.name(), count = flights.len(), "Scheduled departures");
    flights
}

#[cfg(test)]
mod tests;
