use std::io;
use std::sync::Arc;

use thiserror::Error;

use crate::flight::FlightId;
use crate::registry::{AircraftId, AirportId};

/// Rejected aircraft construction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AircraftError {
    #[error("Aircraft capacity must be positive, got {0}")]
    InvalidCapacity(i64),
    #[error("Aircraft fuel capacity cannot be negative, got {0}")]
    NegativeFuelCapacity(i64),
}

/// Operational failure of a flight or passenger operation.
///
/// Nothing here is fatal; the caller decides whether to retry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FlightError {
    #[error("Flight not scheduled")]
    NotScheduled,
    #[error("Aircraft {aircraft} not found at departure airport {airport}")]
    AircraftNotAtDeparture { aircraft: Arc<str>, airport: Arc<str> },
    #[error("Not enough fuel for the flight: need {required}, have {available}")]
    InsufficientFuel { required: u32, available: i64 },
    #[error("No runway available at {airport}")]
    NoRunway { airport: Arc<str> },
    #[error("No hangar available at {airport}")]
    NoHangarAtArrival { airport: Arc<str> },
    #[error("Flight full: {boarded} boarded, {requested} more requested, capacity {capacity}")]
    FlightFull {
        boarded: u64,
        requested: u64,
        capacity: u64,
    },
    #[error("Cannot remove more passengers than boarded: {boarded} boarded, {requested} requested")]
    NotEnoughPassengers { boarded: u64, requested: u64 },
    #[error("Unknown aircraft handle {0}")]
    UnknownAircraft(AircraftId),
    #[error("Unknown airport handle {0}")]
    UnknownAirport(AirportId),
}

/// Failure while loading a scenario file.
#[derive(Debug, Error)]
pub enum ScenarioError {
    #[error("System input/output error: {0}")]
    Io(#[from] io::Error),
    #[error("Failed to parse scenario: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Invalid aircraft {name}: {source}")]
    InvalidAircraft {
        name: Arc<str>,
        #[source]
        source: AircraftError,
    },
    #[error("Duplicate aircraft name {0}")]
    DuplicateAircraft(Arc<str>),
    #[error("Duplicate airport name {0}")]
    DuplicateAirport(Arc<str>),
    #[error("Duplicate flight id {0}")]
    DuplicateFlight(FlightId),
    #[error("Unknown airport {0}")]
    UnknownAirport(Arc<str>),
    #[error("Unknown aircraft {0}")]
    UnknownAircraft(Arc<str>),
    #[error("No hangar available at {airport} for {aircraft}")]
    HangarFull { airport: Arc<str>, aircraft: Arc<str> },
    #[error("Flight {flight} cannot board passengers: {source}")]
    Boarding {
        flight: FlightId,
        #[source]
        source: FlightError,
    },
}
