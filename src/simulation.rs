use crate::aircraft::Aircraft;
use crate::airport::Airport;
use crate::error::{FlightError, ScenarioError};
use crate::flight::FlightStatus::{Arrived, Scheduled};
use crate::flight::{Flight, FlightId};
use crate::registry::{AirportId, Registry};
use crate::scheduler::schedule_flights;
use crate::time::Time;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Aircraft, airports and the flights moving between them.
pub struct Simulation {
    pub registry: Registry,
    pub flights: Vec<Flight>,
    flights_index: HashMap<FlightId, usize>,
}

#[derive(Deserialize)]
struct RawAircraft {
    name: Arc<str>,
    capacity: i64,
    fuel_capacity: i64,
    #[serde(default)]
    fuel: i64,
    parked_at: Option<Arc<str>>,
}

#[derive(Deserialize)]
struct RawAirport {
    name: Arc<str>,
    hangars: usize,
    runways: usize,
}

#[derive(Deserialize)]
struct RawFlight {
    id: FlightId,
    from: Arc<str>,
    to: Arc<str>,
    distance: u32,
    aircraft: Arc<str>,
    #[serde(default)]
    passengers: u64,
    /// Minutes.
    scheduled_departure: Option<u64>,
}

#[derive(Deserialize)]
struct RawData {
    airports: Vec<RawAirport>,
    aircraft: Vec<RawAircraft>,
    #[serde(default)]
    flights: Vec<RawFlight>,
}

impl Simulation {
    pub fn new(registry: Registry, flights: Vec<Flight>) -> Simulation {
        let mut simulation = Simulation {
            registry,
            flights,
            flights_index: HashMap::new(),
        };
        simulation.reindex();
        simulation
    }

    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, ScenarioError> {
        let data = std::fs::read_to_string(path)?;
        Self::from_json(&data)
    }

    pub fn from_json(data: &str) -> Result<Self, ScenarioError> {
        let raw: RawData = serde_json::from_str(data)?;
        let mut registry = Registry::new();

        for ap in raw.airports {
            if registry.find_airport(&ap.name).is_some() {
                return Err(ScenarioError::DuplicateAirport(ap.name));
            }
            registry.add_airport(Airport::new(ap.name, ap.hangars, ap.runways));
        }

        for ac in raw.aircraft {
            if registry.find_aircraft(&ac.name).is_some() {
                return Err(ScenarioError::DuplicateAircraft(ac.name));
            }
            let mut aircraft = Aircraft::new(ac.name.clone(), ac.capacity, ac.fuel_capacity)
                .map_err(|source| ScenarioError::InvalidAircraft {
                    name: ac.name.clone(),
                    source,
                })?;
            aircraft.refuel(ac.fuel);
            let id = registry.add_aircraft(aircraft);

            if let Some(location) = ac.parked_at {
                let airport = Self::resolve_airport(&registry, &location)?;
                let parked = registry
                    .airport_mut(airport)
                    .map(|ap| ap.park(id))
                    .unwrap_or(false);
                if !parked {
                    return Err(ScenarioError::HangarFull {
                        airport: location,
                        aircraft: ac.name,
                    });
                }
            }
        }

        let mut flights: Vec<Flight> = Vec::with_capacity(raw.flights.len());
        for fl in raw.flights {
            if flights.iter().any(|f| f.id == fl.id) {
                return Err(ScenarioError::DuplicateFlight(fl.id));
            }
            let departure = Self::resolve_airport(&registry, &fl.from)?;
            let arrival = Self::resolve_airport(&registry, &fl.to)?;
            let aircraft = registry
                .find_aircraft(&fl.aircraft)
                .ok_or_else(|| ScenarioError::UnknownAircraft(fl.aircraft.clone()))?;
            let mut flight = Flight::new(
                fl.id.clone(),
                departure,
                arrival,
                fl.distance,
                aircraft,
                fl.scheduled_departure.map(Time::from_minutes),
            );
            if fl.passengers > 0 {
                flight
                    .add_passengers(fl.passengers, &registry)
                    .map_err(|source| ScenarioError::Boarding {
                        flight: fl.id,
                        source,
                    })?;
            }
            flights.push(flight);
        }

        info!(
            airports = registry.airports_iter().count(),
            aircraft = registry.aircraft_iter().count(),
            flights = flights.len(),
            "Scenario loaded"
        );
        Ok(Simulation::new(registry, flights))
    }

    fn resolve_airport(registry: &Registry, name: &Arc<str>) -> Result<AirportId, ScenarioError> {
        registry
            .find_airport(name)
            .ok_or_else(|| ScenarioError::UnknownAirport(name.clone()))
    }

    fn reindex(&mut self) {
        self.flights_index = self
            .flights
            .iter()
            .enumerate()
            .map(|(i, v)| (v.id.clone(), i))
            .collect();
    }

    pub fn flight(&self, flight_id: &str) -> Option<&Flight> {
        self.flights_index.get(flight_id).map(|i| &self.flights[*i])
    }

    /// Assigns departures to every flight that has not arrived yet.
    ///
    /// Each departure airport gets its own runway timeline starting at
    /// `start_time`. Flights end up ordered by departure time.
    pub fn schedule(&mut self, start_time: Time) {
        let (done, pending): (Vec<Flight>, Vec<Flight>) =
            self.flights.drain(..).partition(|f| f.status == Arrived);

        let mut batches: Vec<(AirportId, Vec<Flight>)> = Vec::new();
        for flight in pending {
            match batches.iter_mut().find(|(ap, _)| *ap == flight.departure) {
                Some((_, batch)) => batch.push(flight),
                None => batches.push((flight.departure, vec![flight])),
            }
        }

        let mut flights = done;
        for (airport_id, batch) in batches {
            match self.registry.airport(airport_id) {
                Some(airport) => flights.extend(schedule_flights(batch, airport, start_time)),
                None => {
                    warn!(airport = %airport_id, "Unknown departure airport, batch not scheduled");
                    flights.extend(batch)
                }
            }
        }

        flights.sort_by_key(|f| f.scheduled_departure);
        self.flights = flights;
        self.reindex();
        debug!(flights = self.flights.len(), "Schedule rebuilt");
    }

    pub fn perform(&mut self, flight_id: &str) -> Option<Result<(), FlightError>> {
        let idx = *self.flights_index.get(flight_id)?;
        Some(self.flights[idx].perform(&mut self.registry))
    }

    /// Performs every flight still waiting for departure, in list order.
    pub fn perform_all(&mut self) -> Vec<(FlightId, Result<(), FlightError>)> {
        self.flights
            .iter_mut()
            .filter(|f| f.status == Scheduled)
            .map(|f| (f.id.clone(), f.perform(&mut self.registry)))
            .collect()
    }

    /// Refuels the named aircraft and returns its new fuel level.
    pub fn refuel(&mut self, aircraft: &str, amount: i64) -> Option<i64> {
        let id = self.registry.find_aircraft(aircraft)?;
        let aircraft = self.registry.aircraft_mut(id)?;
        aircraft.refuel(amount);
        Some(aircraft.fuel_level())
    }

    pub fn board(&mut self, flight_id: &str, count: u64) -> Option<Result<(), FlightError>> {
        let idx = *self.flights_index.get(flight_id)?;
        Some(self.flights[idx].add_passengers(count, &self.registry))
    }

    pub fn deboard(&mut self, flight_id: &str, count: u64) -> Option<Result<(), FlightError>> {
        let idx = *self.flights_index.get(flight_id)?;
        Some(self.flights[idx].remove_passengers(count))
    }
}
