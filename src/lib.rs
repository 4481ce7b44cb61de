//! Constant-acceleration travel calculator.
//!
//! A vessel burns at constant acceleration to the midpoint of its trip and
//! decelerates at the same rate for the remainder, arriving at rest. This
//! crate ties the workspace together: look up the engine, run the flight
//! solver, render the travel time. Front-ends (CLI, services) should only
//! need [`plan`] and the re-exported crates.

pub mod report;

pub use accel_config as config;
pub use accel_core::{constants, time, units};
pub use accel_export as export;
pub use accel_flight as flight;
pub use accel_format as format;
pub use accel_precision as precision;
pub use accel_propulsion as propulsion;

pub use report::{FlightReport, FlightRequest, PlanError, engine_label, plan};
