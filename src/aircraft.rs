use crate::error::AircraftError;
use std::fmt;
use std::sync::Arc;

/// A fuel and seat bounded vehicle.
///
/// `fuel_level` never exceeds `fuel_capacity` after a refuel, but it has no
/// lower bound: a large negative refuel takes it below zero.
#[derive(Clone, Debug, PartialEq)]
pub struct Aircraft {
    name: Arc<str>,
    capacity: u64,
    fuel_level: i64,
    fuel_capacity: i64,
}

impl Aircraft {
    pub fn new(
        name: impl Into<Arc<str>>,
        capacity: i64,
        fuel_capacity: i64,
    ) -> Result<Aircraft, AircraftError> {
        if capacity <= 0 {
            return Err(AircraftError::InvalidCapacity(capacity));
        }
        if fuel_capacity < 0 {
            return Err(AircraftError::NegativeFuelCapacity(fuel_capacity));
        }
        Ok(Aircraft {
            name: name.into(),
            capacity: capacity as u64,
            fuel_level: 0,
            fuel_capacity,
        })
    }

    pub fn name(&self) -> &Arc<str> {
        &self.name
    }

    pub fn capacity(&self) -> u64 {
        self.capacity
    }

    pub fn fuel_level(&self) -> i64 {
        self.fuel_level
    }

    pub fn fuel_capacity(&self) -> i64 {
        self.fuel_capacity
    }

    /// Adds `amount` (possibly negative) and clamps at the fuel capacity.
    pub fn refuel(&mut self, amount: i64) {
        self.fuel_level = self
            .fuel_level
            .saturating_add(amount)
            .min(self.fuel_capacity);
    }

    pub fn has_enough_fuel(&self, distance: u32) -> bool {
        self.fuel_level >= i64::from(distance)
    }
}

impl fmt::Display for Aircraft {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Aircraft {} (capacity: {}, fuel: {}/{})",
            self.name, self.capacity, self.fuel_level, self.fuel_capacity
        )
    }
}
