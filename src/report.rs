use crate::flight::{Flight, FlightStatus};
use crate::registry::Registry;
use crate::simulation::Simulation;
use colored::Colorize;
use tabled::settings::{Alignment, Style};
use tabled::{Table, Tabled};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlightFilter {
    All,
    Unscheduled,
    Scheduled,
    Arrived,
    Failed,
}

impl FlightFilter {
    pub fn parse(arg: Option<&str>) -> FlightFilter {
        match arg {
            Some("u" | "unscheduled") => FlightFilter::Unscheduled,
            Some("s" | "scheduled") => FlightFilter::Scheduled,
            Some("d" | "arrived") => FlightFilter::Arrived,
            Some("f" | "failed") => FlightFilter::Failed,
            _ => FlightFilter::All,
        }
    }

    pub fn matches(&self, flight: &Flight) -> bool {
        match self {
            FlightFilter::All => true,
            FlightFilter::Unscheduled => flight.status.is_unscheduled(),
            FlightFilter::Scheduled => flight.status == FlightStatus::Scheduled,
            FlightFilter::Arrived => flight.status == FlightStatus::Arrived,
            FlightFilter::Failed => matches!(flight.status, FlightStatus::Failed(_)),
        }
    }
}

#[derive(Tabled)]
pub struct FlightRow {
    #[tabled(rename = "Flight")]
    pub id: String,
    #[tabled(rename = "From")]
    pub from: String,
    #[tabled(rename = "To")]
    pub to: String,
    #[tabled(rename = "Distance")]
    pub distance: u32,
    #[tabled(rename = "Aircraft")]
    pub aircraft: String,
    #[tabled(rename = "Pax")]
    pub passengers: String,
    #[tabled(rename = "Departure")]
    pub departure: String,
    #[tabled(rename = "Status")]
    pub status: String,
}

#[derive(Tabled)]
pub struct AircraftRow {
    #[tabled(rename = "Aircraft")]
    pub name: String,
    #[tabled(rename = "Seats")]
    pub capacity: u64,
    #[tabled(rename = "Fuel")]
    pub fuel: String,
    #[tabled(rename = "Parked at")]
    pub location: String,
}

#[derive(Tabled)]
pub struct AirportRow {
    #[tabled(rename = "Airport")]
    pub name: String,
    #[tabled(rename = "Hangars")]
    pub hangars: String,
    #[tabled(rename = "Free runways")]
    pub runways: String,
    #[tabled(rename = "Parked")]
    pub parked: String,
}

fn colored_status(status: &FlightStatus) -> String {
    let text = status.to_string();
    match status {
        FlightStatus::Unscheduled => text.dimmed().to_string(),
        FlightStatus::Scheduled => text.yellow().to_string(),
        FlightStatus::Arrived => text.green().to_string(),
        FlightStatus::Failed(_) => text.red().to_string(),
    }
}

pub fn flight_rows(simulation: &Simulation, filter: FlightFilter) -> Vec<FlightRow> {
    let registry = &simulation.registry;
    let airport_name = |id| {
        registry
            .airport(id)
            .map(|ap| ap.name().to_string())
            .unwrap_or_else(|| id.to_string())
    };
    simulation
        .flights
        .iter()
        .filter(|f| filter.matches(f))
        .map(|f| {
            let aircraft = registry.aircraft(f.aircraft);
            FlightRow {
                id: f.id.to_string(),
                from: airport_name(f.departure),
                to: airport_name(f.arrival),
                distance: f.distance,
                aircraft: aircraft
                    .map(|a| a.name().to_string())
                    .unwrap_or_else(|| f.aircraft.to_string()),
                passengers: format!(
                    "{}/{}",
                    f.passengers,
                    aircraft.map(|a| a.capacity()).unwrap_or(0)
                ),
                departure: f
                    .scheduled_departure
                    .map(|t| t.to_string())
                    .unwrap_or_else(|| "-".to_string()),
                status: colored_status(&f.status),
            }
        })
        .collect()
}

pub fn aircraft_rows(registry: &Registry) -> Vec<AircraftRow> {
    registry
        .aircraft_iter()
        .map(|(id, ac)| AircraftRow {
            name: ac.name().to_string(),
            capacity: ac.capacity(),
            fuel: format!("{}/{}", ac.fuel_level(), ac.fuel_capacity()),
            location: registry
                .locate(id)
                .and_then(|ap| registry.airport(ap))
                .map(|ap| ap.name().to_string())
                .unwrap_or_else(|| "-".to_string()),
        })
        .collect()
}

pub fn airport_rows(registry: &Registry) -> Vec<AirportRow> {
    registry
        .airports_iter()
        .map(|(_, ap)| AirportRow {
            name: ap.name().to_string(),
            hangars: format!("{}/{}", ap.occupied_hangars(), ap.hangar_count()),
            runways: format!("{}/{}", ap.free_runways().count(), ap.runway_count()),
            parked: ap
                .parked()
                .filter_map(|id| registry.aircraft(id))
                .map(|ac| ac.name().to_string())
                .collect::<Vec<_>>()
                .join(", "),
        })
        .collect()
}

pub fn render<T: Tabled>(rows: &[T]) -> String {
    let mut table = Table::new(rows);
    table.with(Style::rounded());
    table.with(Alignment::left());
    table.to_string()
}
