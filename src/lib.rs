pub mod aircraft;
pub mod airport;
pub mod error;
pub mod flight;
pub mod registry;
pub mod report;
pub mod scheduler;
pub mod simulation;
pub mod time;
