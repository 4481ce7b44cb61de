//! Plain-text derivations printed by `--explain`.

const TRAVEL_TIME: &str = "\
x(t) = v0·t + ½·a·t², with v0 = 0 over the first half d/2:
d/2 = ½·a·t_half²  =>  t_half = sqrt(d / a)
t_total = 2·t_half = 2·sqrt(d / a)";

const MAX_VELOCITY: &str = "\
v(t) = v0 + a·t, peaking at turnover (t_half):
v_max = a·t_half = a·sqrt(d / a) = sqrt(a·d)";

const FUEL_MASS: &str = "\
Rocket equation: Δv = v_e·ln(m_initial / m_final)
Δv_total = 2·v_max (accelerate, then decelerate), m_final = m_dry
m_initial = m_dry·e^(2·v_max / v_e)
m_fuel = m_initial − m_dry = m_dry·(e^(2·v_max / v_e) − 1)";

const TOTAL_ENERGY: &str = "\
E = ½·m·v², all fuel leaves at the effective exhaust velocity:
E_total = ½·m_fuel·v_e²";

const LIFTOFF_POWER: &str = "\
P = ½·ṁ·v_e² and F = ṁ·v_e  =>  P = ½·F·v_e
Thrust holding acceleration a: F(t) = m(t)·a, largest at t = 0
P_0 = ½·(m_dry + m_fuel)·a·v_e";

/// Derivation text for a summary row label.
pub fn for_label(label: &str) -> Option<&'static str> {
    match label {
        "Travel time" => Some(TRAVEL_TIME),
        "Maximum velocity" => Some(MAX_VELOCITY),
        "Fuel mass required" => Some(FUEL_MASS),
        "Total energy usage" => Some(TOTAL_ENERGY),
        "Liftoff power" => Some(LIFTOFF_POWER),
        _ => None,
    }
}
