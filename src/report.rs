//! Request/response facade over the flight solver.

use accel_config::FlightConfig;
use accel_flight::{FlightError, FlightParameters, FlightResult};
use accel_format::{format_duration, format_quantity, format_velocity};
use accel_propulsion::{Engine, EngineError};
use serde::Serialize;
use thiserror::Error;
use tracing::debug;

/// What the shell hands over: three scalars and an engine name.
#[derive(Debug, Clone, PartialEq)]
pub struct FlightRequest {
    pub name: Option<String>,
    pub distance_m: f64,
    pub dry_mass_kg: f64,
    pub acceleration_m_s2: f64,
    pub engine: String,
}

impl Default for FlightRequest {
    fn default() -> Self {
        Self::from(&FlightConfig::default())
    }
}

impl From<&FlightConfig> for FlightRequest {
    fn from(config: &FlightConfig) -> Self {
        Self {
            name: config.name.clone(),
            distance_m: config.distance_m,
            dry_mass_kg: config.dry_mass_kg,
            acceleration_m_s2: config.acceleration_m_s2,
            engine: config.engine.clone(),
        }
    }
}

/// Everything a front-end needs to present one calculation.
#[derive(Debug, Clone, Serialize)]
pub struct FlightReport {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub engine: Engine,
    pub parameters: FlightParameters,
    pub result: FlightResult,
    pub travel_time_text: String,
}

impl FlightReport {
    /// Labelled, display-ready result rows in presentation order.
    pub fn summary_lines(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Travel time", self.travel_time_text.clone()),
            (
                "Maximum velocity",
                format_velocity(self.result.max_velocity_m_s),
            ),
            (
                "Fuel mass required",
                format_quantity(self.result.fuel_mass_kg, "kg"),
            ),
            (
                "Total energy usage",
                format_quantity(self.result.total_energy_j, "J"),
            ),
            (
                "Liftoff power",
                format_quantity(self.result.liftoff_power_w, "W"),
            ),
        ]
    }
}

#[derive(Debug, Error)]
pub enum PlanError {
    #[error(transparent)]
    Engine(#[from] EngineError),
    #[error(transparent)]
    Flight(#[from] FlightError),
}

/// Resolve the engine, compute the flight and render the travel time.
pub fn plan(request: &FlightRequest) -> Result<FlightReport, PlanError> {
    let engine = accel_propulsion::find(&request.engine)?;
    let parameters = FlightParameters::with_engine(
        request.distance_m,
        request.dry_mass_kg,
        request.acceleration_m_s2,
        engine,
    );
    let result = parameters.compute()?;
    let travel_time_text = format_duration(result.travel_time_s);
    debug!(engine = engine.name, travel_time = %travel_time_text, "flight planned");

    Ok(FlightReport {
        name: request.name.clone(),
        engine: *engine,
        parameters,
        result,
        travel_time_text,
    })
}

/// `"LOX/LH2 (4,400 m/s effective exhaust velocity)"`.
pub fn engine_label(engine: &Engine) -> String {
    format!(
        "{} ({} m/s effective exhaust velocity)",
        engine.name,
        accel_format::group_thousands(engine.exhaust_velocity_m_s, 0)
    )
}
