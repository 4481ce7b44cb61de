//! Physical constants and shared primitives for the constant-acceleration travel calculator.

/// Physical constants expressed in SI units.
pub mod constants {
    /// Speed of light in vacuum (m/s).
    pub const SPEED_OF_LIGHT_M_S: f64 = 299_792_458.0;
    /// Standard gravity at Earth's surface (m/s²).
    pub const G0: f64 = 9.80665;
    /// Closest approach between Earth and Mars (m).
    pub const EARTH_MARS_MIN_DISTANCE_M: f64 = 55_760_000_000.0;
}

/// Calendar-free time spans used when breaking durations down.
pub mod time {
    pub const SECONDS_PER_MINUTE: f64 = 60.0;
    pub const SECONDS_PER_HOUR: f64 = 3_600.0;
    pub const SECONDS_PER_DAY: f64 = 86_400.0;
    /// A 365-day year; leap days are ignored.
    pub const SECONDS_PER_YEAR: f64 = 365.0 * SECONDS_PER_DAY;
}

/// Ratios against physical limits.
pub mod units {
    use super::constants::{G0, SPEED_OF_LIGHT_M_S};

    /// Fraction of the speed of light represented by `velocity_m_s`.
    #[inline]
    pub fn fraction_of_light(velocity_m_s: f64) -> f64 {
        velocity_m_s / SPEED_OF_LIGHT_M_S
    }

    /// Specific impulse (s) equivalent to an effective exhaust velocity.
    #[inline]
    pub fn exhaust_velocity_to_isp(exhaust_velocity_m_s: f64) -> f64 {
        exhaust_velocity_m_s / G0
    }
}
