use crate::aircraft::Aircraft;
use crate::airport::Airport;
use crate::error::FlightError;
use crate::registry::{AircraftId, AirportId, Registry};
use crate::time::Time;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, info, warn};

pub type FlightId = Arc<str>;

/// Reason a flight attempt ended without reaching its arrival airport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    NotScheduled,
    AircraftNotAtDeparture,
    InsufficientFuel,
    NoRunway,
    NoHangarAtArrival,
    UnknownReference,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlightStatus {
    Unscheduled,
    Scheduled,
    Arrived,
    Failed(FailureKind),
}

impl FlightStatus {
    pub fn is_unscheduled(&self) -> bool {
        matches!(self, FlightStatus::Unscheduled)
    }
}

impl fmt::Display for FlightStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FlightStatus::Unscheduled => write!(f, "Unscheduled"),
            FlightStatus::Scheduled => write!(f, "Scheduled"),
            FlightStatus::Arrived => write!(f, "Arrived"),
            FlightStatus::Failed(kind) => write!(f, "Failed ({:?})", kind),
        }
    }
}

impl From<&FlightError> for FailureKind {
    fn from(error: &FlightError) -> Self {
        match error {
            FlightError::NotScheduled => FailureKind::NotScheduled,
            FlightError::AircraftNotAtDeparture { .. } => FailureKind::AircraftNotAtDeparture,
            FlightError::InsufficientFuel { .. } => FailureKind::InsufficientFuel,
            FlightError::NoRunway { .. } => FailureKind::NoRunway,
            FlightError::NoHangarAtArrival { .. } => FailureKind::NoHangarAtArrival,
            FlightError::UnknownAircraft(_) | FlightError::UnknownAirport(_) => {
                FailureKind::UnknownReference
            }
            // passenger errors never come out of perform
            FlightError::FlightFull { .. } | FlightError::NotEnoughPassengers { .. } => {
                FailureKind::UnknownReference
            }
        }
    }
}

/// One planned movement of an aircraft between two airports.
///
/// A flight coordinates the registry's airports and aircraft through handles
/// and owns none of them.
#[derive(Debug, Clone, PartialEq)]
pub struct Flight {
    pub id: FlightId,
    pub departure: AirportId,
    pub arrival: AirportId,
    pub distance: u32,
    pub aircraft: AircraftId,
    pub passengers: u64,
    pub scheduled_departure: Option<Time>,
    pub status: FlightStatus,
}

impl Flight {
    pub fn new(
        id: impl Into<FlightId>,
        departure: AirportId,
        arrival: AirportId,
        distance: u32,
        aircraft: AircraftId,
        scheduled_departure: Option<Time>,
    ) -> Flight {
        let status = match scheduled_departure {
            Some(_) => FlightStatus::Scheduled,
            None => FlightStatus::Unscheduled,
        };
        Flight {
            id: id.into(),
            departure,
            arrival,
            distance,
            aircraft,
            passengers: 0,
            scheduled_departure,
            status,
        }
    }

    pub fn schedule_at(&mut self, departure: Time) {
        self.scheduled_departure = Some(departure);
        self.status = FlightStatus::Scheduled;
    }

    pub fn capacity(&self, registry: &Registry) -> Option<u64> {
        registry.aircraft(self.aircraft).map(|a| a.capacity())
    }

    pub fn add_passengers(&mut self, count: u64, registry: &Registry) -> Result<(), FlightError> {
        let capacity = self
            .capacity(registry)
            .ok_or(FlightError::UnknownAircraft(self.aircraft))?;
        match self.passengers.checked_add(count) {
            Some(total) if total <= capacity => {
                self.passengers = total;
                Ok(())
            }
            _ => {
                let error = FlightError::FlightFull {
                    boarded: self.passengers,
                    requested: count,
                    capacity,
                };
                warn!(flight = %self.id, "{}", error);
                Err(error)
            }
        }
    }

    pub fn remove_passengers(&mut self, count: u64) -> Result<(), FlightError> {
        match self.passengers.checked_sub(count) {
            Some(remaining) => {
                self.passengers = remaining;
                Ok(())
            }
            None => {
                let error = FlightError::NotEnoughPassengers {
                    boarded: self.passengers,
                    requested: count,
                };
                warn!(flight = %self.id, "{}", error);
                Err(error)
            }
        }
    }

    /// Moves the aircraft from the departure to the arrival airport.
    ///
    /// Every failure puts the aircraft back into a departure hangar. Fuel is
    /// deducted once a runway was acquired and stays deducted even when the
    /// arrival airport has no free hangar.
    pub fn perform(&mut self, registry: &mut Registry) -> Result<(), FlightError> {
        let result = self.execute(registry);
        self.status = match &result {
            Ok(()) => FlightStatus::Arrived,
            Err(e) => FlightStatus::Failed(FailureKind::from(e)),
        };
        match &result {
            Ok(()) => info!(flight = %self.id, "Flight arrived"),
            Err(e) => warn!(flight = %self.id, "{}", e),
        }
        result
    }

    fn execute(&self, registry: &mut Registry) -> Result<(), FlightError> {
        if self.scheduled_departure.is_none() {
            return Err(FlightError::NotScheduled);
        }

        let aircraft_name = registry
            .aircraft(self.aircraft)
            .map(|a| a.name().clone())
            .ok_or(FlightError::UnknownAircraft(self.aircraft))?;
        let departure_name = registry
            .airport(self.departure)
            .map(|a| a.name().clone())
            .ok_or(FlightError::UnknownAirport(self.departure))?;
        let arrival_name = registry
            .airport(self.arrival)
            .map(|a| a.name().clone())
            .ok_or(FlightError::UnknownAirport(self.arrival))?;

        if !self.departure_airport(registry)?.remove(self.aircraft) {
            return Err(FlightError::AircraftNotAtDeparture {
                aircraft: aircraft_name,
                airport: departure_name,
            });
        }

        let aircraft = registry
            .aircraft(self.aircraft)
            .ok_or(FlightError::UnknownAircraft(self.aircraft))?;
        if !aircraft.has_enough_fuel(self.distance) {
            let available = aircraft.fuel_level();
            self.repark(registry)?;
            return Err(FlightError::InsufficientFuel {
                required: self.distance,
                available,
            });
        }

        let Some(runway) = self.departure_airport(registry)?.acquire_runway() else {
            self.repark(registry)?;
            return Err(FlightError::NoRunway {
                airport: departure_name,
            });
        };

        // The runway is held for the takeoff instant only.
        debug!(flight = %self.id, runway, "Departing from {} to {}", departure_name, arrival_name);
        self.departure_airport(registry)?.release_runway(runway);
        self.aircraft_mut(registry)?.refuel(-i64::from(self.distance));

        let parked = registry
            .airport_mut(self.arrival)
            .ok_or(FlightError::UnknownAirport(self.arrival))?
            .park(self.aircraft);
        if !parked {
            // fuel burned on the attempt is not returned
            self.repark(registry)?;
            return Err(FlightError::NoHangarAtArrival {
                airport: arrival_name,
            });
        }
        Ok(())
    }

    fn departure_airport<'a>(
        &self,
        registry: &'a mut Registry,
    ) -> Result<&'a mut Airport, FlightError> {
        registry
            .airport_mut(self.departure)
            .ok_or(FlightError::UnknownAirport(self.departure))
    }

    fn aircraft_mut<'a>(
        &self,
        registry: &'a mut Registry,
    ) -> Result<&'a mut Aircraft, FlightError> {
        registry
            .aircraft_mut(self.aircraft)
            .ok_or(FlightError::UnknownAircraft(self.aircraft))
    }

    fn repark(&self, registry: &mut Registry) -> Result<(), FlightError> {
        if !self.departure_airport(registry)?.park(self.aircraft) {
            warn!(flight = %self.id, "Could not return aircraft to departure hangar");
        }
        Ok(())
    }

    pub fn describe(&self, registry: &Registry) -> String {
        let name = |id| {
            registry
                .airport(id)
                .map(|a| a.name().to_string())
                .unwrap_or_else(|| id.to_string())
        };
        let aircraft = registry.aircraft(self.aircraft);
        format!(
            "Flight {} (from: {}, to: {}, distance: {}, aircraft: {}, capacity: {})",
            self.id,
            name(self.departure),
            name(self.arrival),
            self.distance,
            aircraft
                .map(|a| a.name().to_string())
                .unwrap_or_else(|| self.aircraft.to_string()),
            aircraft.map(|a| a.capacity()).unwrap_or(0),
        )
    }
}
