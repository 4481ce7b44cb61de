//! Closed-form solver for a symmetric accelerate/decelerate trip.
//!
//! The vessel burns at constant acceleration to the midpoint, flips, and
//! burns at the same magnitude until it arrives at rest. Gravity, drag and
//! relativity are ignored. Propellant-derived quantities are carried as
//! [`Magnitude`] because the mass ratio routinely leaves the `f64` range.

mod profile;

use std::fmt;

use accel_core::constants::SPEED_OF_LIGHT_M_S;
use accel_core::units::fraction_of_light;
use accel_precision::{Magnitude, MagnitudeError};
use accel_propulsion::Engine;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

pub use profile::{MAX_PROFILE_STEPS, ProfileSample, sample_profile};

/// Inputs for a single flight calculation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FlightParameters {
    pub distance_m: f64,
    pub dry_mass_kg: f64,
    pub acceleration_m_s2: f64,
    pub exhaust_velocity_m_s: f64,
}

impl FlightParameters {
    /// Parameters using the exhaust velocity of a catalog engine.
    pub fn with_engine(
        distance_m: f64,
        dry_mass_kg: f64,
        acceleration_m_s2: f64,
        engine: &Engine,
    ) -> Self {
        Self {
            distance_m,
            dry_mass_kg,
            acceleration_m_s2,
            exhaust_velocity_m_s: engine.exhaust_velocity_m_s,
        }
    }

    pub fn compute(&self) -> Result<FlightResult, FlightError> {
        compute(
            self.distance_m,
            self.dry_mass_kg,
            self.acceleration_m_s2,
            self.exhaust_velocity_m_s,
        )
    }
}

/// Derived flight figures.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FlightResult {
    /// Whole trip, both burn phases.
    pub travel_time_s: f64,
    /// Speed at the turnover point.
    pub max_velocity_m_s: f64,
    /// Initial over final mass, `exp(Δv / v_e)`.
    pub mass_ratio: Magnitude,
    pub fuel_mass_kg: Magnitude,
    /// Dry mass plus fuel, i.e. the mass at liftoff.
    pub total_mass_kg: Magnitude,
    /// Kinetic energy carried away by all expelled propellant.
    pub total_energy_j: Magnitude,
    /// Jet power at t = 0, when thrust is highest.
    pub liftoff_power_w: Magnitude,
}

impl FlightResult {
    pub fn max_velocity_fraction_c(&self) -> f64 {
        fraction_of_light(self.max_velocity_m_s)
    }

    /// Accelerate plus decelerate.
    pub fn delta_v_total_m_s(&self) -> f64 {
        2.0 * self.max_velocity_m_s
    }
}

/// Input that failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    Acceleration,
    DryMass,
    Distance,
    ExhaustVelocity,
}

impl Field {
    pub fn label(&self) -> &'static str {
        match self {
            Field::Acceleration => "Acceleration",
            Field::DryMass => "Dry mass",
            Field::Distance => "Distance",
            Field::ExhaustVelocity => "Exhaust velocity",
        }
    }

    pub fn unit(&self) -> &'static str {
        match self {
            Field::Acceleration => "m/s²",
            Field::DryMass => "kg",
            Field::Distance => "m",
            Field::ExhaustVelocity => "m/s",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Field::Acceleration => "acceleration",
            Field::DryMass => "dry_mass",
            Field::Distance => "distance",
            Field::ExhaustVelocity => "exhaust_velocity",
        };
        f.write_str(name)
    }
}

/// Reasons a flight cannot be computed. No partial result accompanies any of them.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum FlightError {
    #[error("{} must be greater than 0 {}.", .field.label(), .field.unit())]
    Validation { field: Field, value: f64 },
    #[error("Maximum velocity exceeds the speed of light.")]
    PhysicalLimit { max_velocity_m_s: f64 },
    #[error("propellant mass is out of range: {0}")]
    MagnitudeOverflow(#[from] MagnitudeError),
    #[error("profile of {steps} steps exceeds the limit of {max}")]
    TooManySteps { steps: usize, max: usize },
}

/// Compute travel time, peak velocity and propellant figures for a trip of
/// `distance_m` at constant `acceleration_m_s2`.
///
/// Inputs are checked in the order acceleration, dry mass, distance, exhaust
/// velocity; the first non-positive (or non-finite) one is reported.
pub fn compute(
    distance_m: f64,
    dry_mass_kg: f64,
    acceleration_m_s2: f64,
    exhaust_velocity_m_s: f64,
) -> Result<FlightResult, FlightError> {
    require_positive(Field::Acceleration, acceleration_m_s2)?;
    require_positive(Field::DryMass, dry_mass_kg)?;
    require_positive(Field::Distance, distance_m)?;
    require_positive(Field::ExhaustVelocity, exhaust_velocity_m_s)?;

    // d/2 = ½·a·t_half² for each half of the trip
    let travel_time_s = 2.0 * (distance_m / acceleration_m_s2).sqrt();
    let max_velocity_m_s = acceleration_m_s2 * (travel_time_s / 2.0);

    // negated so an overflowed (inf/NaN) velocity is rejected too
    if !(max_velocity_m_s < SPEED_OF_LIGHT_M_S) {
        warn!(
            max_velocity_m_s,
            distance_m, acceleration_m_s2, "peak velocity reaches light speed"
        );
        return Err(FlightError::PhysicalLimit { max_velocity_m_s });
    }

    let exponent = 2.0 * max_velocity_m_s / exhaust_velocity_m_s;
    let dry_mass = Magnitude::from_f64(dry_mass_kg)?;
    let mass_ratio = Magnitude::exp(exponent)?;
    let fuel_mass_kg = dry_mass * Magnitude::exp_m1(exponent)?;
    let total_mass_kg = dry_mass + fuel_mass_kg;
    let total_energy_j = fuel_mass_kg
        .scaled(0.5 * exhaust_velocity_m_s)?
        .scaled(exhaust_velocity_m_s)?;
    let liftoff_power_w = total_mass_kg
        .scaled(0.5 * acceleration_m_s2)?
        .scaled(exhaust_velocity_m_s)?;

    debug!(
        travel_time_s,
        max_velocity_m_s,
        exponent,
        %fuel_mass_kg,
        %total_energy_j,
        %liftoff_power_w,
        "flight computed"
    );

    Ok(FlightResult {
        travel_time_s,
        max_velocity_m_s,
        mass_ratio,
        fuel_mass_kg,
        total_mass_kg,
        total_energy_j,
        liftoff_power_w,
    })
}

fn require_positive(field: Field, value: f64) -> Result<(), FlightError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(FlightError::Validation { field, value })
    }
}
