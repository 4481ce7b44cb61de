use accel_precision::Magnitude;
use serde::{Deserialize, Serialize};

use crate::{FlightError, FlightParameters, FlightResult};

/// Upper bound on the number of intervals [`sample_profile`] will produce.
pub const MAX_PROFILE_STEPS: usize = 1_000_000;

/// One point on the accelerate/decelerate trajectory.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProfileSample {
    pub time_s: f64,
    pub distance_m: f64,
    pub velocity_m_s: f64,
    pub mass_kg: Magnitude,
}

/// Sample the trajectory at `steps + 1` evenly spaced instants from launch to
/// arrival.
///
/// Mass follows `m(t) = m₀·exp(−a·t / v_e)`, the throttle schedule that holds
/// acceleration constant while propellant drains. The last sample is pinned to
/// the arrival state so rounding never leaves the vessel short of the target or
/// still moving. `steps == 0` is treated as one step; more than
/// [`MAX_PROFILE_STEPS`] is rejected.
pub fn sample_profile(
    params: &FlightParameters,
    result: &FlightResult,
    steps: usize,
) -> Result<Vec<ProfileSample>, FlightError> {
    if steps > MAX_PROFILE_STEPS {
        return Err(FlightError::TooManySteps {
            steps,
            max: MAX_PROFILE_STEPS,
        });
    }
    let steps = steps.max(1);
    let a = params.acceleration_m_s2;
    let total_time = result.travel_time_s;
    let t_half = total_time * 0.5;
    let half_distance = params.distance_m * 0.5;
    let decay_rate = a / params.exhaust_velocity_m_s;

    let mut samples = Vec::with_capacity(steps + 1);
    for step in 0..=steps {
        let time_s = total_time * step as f64 / steps as f64;
        let (distance_m, velocity_m_s) = if time_s <= t_half {
            (0.5 * a * time_s * time_s, a * time_s)
        } else {
            let tau = time_s - t_half;
            (
                half_distance + result.max_velocity_m_s * tau - 0.5 * a * tau * tau,
                (result.max_velocity_m_s - a * tau).max(0.0),
            )
        };
        let mass_kg = result.total_mass_kg * Magnitude::exp(-decay_rate * time_s)?;
        samples.push(ProfileSample {
            time_s,
            distance_m,
            velocity_m_s,
            mass_kg,
        });
    }

    if let Some(last) = samples.last_mut() {
        last.time_s = total_time;
        last.distance_m = params.distance_m;
        last.velocity_m_s = 0.0;
        last.mass_kg = Magnitude::from_f64(params.dry_mass_kg)?;
    }

    Ok(samples)
}
