//! Engine descriptors and the fixed engine catalog.

use accel_core::units::exhaust_velocity_to_isp;
use serde::Serialize;
use thiserror::Error;

/// Catalog key selected when the caller names no engine.
pub const DEFAULT_ENGINE: &str = "LOX/LH2";

/// An engine characterised only by its effective exhaust velocity.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Engine {
    pub name: &'static str,
    pub exhaust_velocity_m_s: f64,
}

impl Engine {
    /// Specific impulse equivalent of the exhaust velocity.
    pub fn specific_impulse_s(&self) -> f64 {
        exhaust_velocity_to_isp(self.exhaust_velocity_m_s)
    }
}

static CATALOG: [Engine; 3] = [
    Engine {
        name: "LOX/LH2",
        exhaust_velocity_m_s: 4_400.0,
    },
    Engine {
        name: "NEXT Electrostatic Ion Thruster",
        exhaust_velocity_m_s: 40_000.0,
    },
    Engine {
        name: "DS4G Ion Thruster",
        exhaust_velocity_m_s: 210_000.0,
    },
];

/// Errors surfaced when selecting an engine.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum EngineError {
    #[error("engine '{0}' not found in catalog")]
    NotFound(String),
}

/// Every known engine, in presentation order.
pub fn catalog() -> &'static [Engine] {
    &CATALOG
}

/// Look up an engine by name, ignoring ASCII case and surrounding whitespace.
pub fn find(name: &str) -> Result<&'static Engine, EngineError> {
    let wanted = name.trim();
    CATALOG
        .iter()
        .find(|engine| engine.name.eq_ignore_ascii_case(wanted))
        .ok_or_else(|| EngineError::NotFound(name.to_string()))
}

/// The catalog entry for [`DEFAULT_ENGINE`].
pub fn default_engine() -> &'static Engine {
    &CATALOG[0]
}
