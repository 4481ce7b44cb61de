use accel_travel_calculator::flight::{Field, FlightError};
use accel_travel_calculator::propulsion::EngineError;
use accel_travel_calculator::{FlightRequest, PlanError, plan};

#[test]
fn default_request_is_earth_mars_chemical() {
    let report = plan(&FlightRequest::default()).expect("default plan");
    assert_eq!(report.engine.name, "LOX/LH2");
    assert_eq!(report.parameters.exhaust_velocity_m_s, 4_400.0);
    assert_eq!(report.travel_time_text, "1 day, 5 hours, 20 minutes, 3.03 seconds");

    let lines = report.summary_lines();
    let labels: Vec<_> = lines.iter().map(|(label, _)| *label).collect();
    assert_eq!(
        labels,
        [
            "Travel time",
            "Maximum velocity",
            "Fuel mass required",
            "Total energy usage",
            "Liftoff power"
        ]
    );
    assert_eq!(lines[1].1, "1,056,030.30 m/s (0.352254% c)");
    assert_eq!(lines[2].1, "2.93e+211 kg");
    assert_eq!(lines[3].1, "2.84e+218 J");
    assert_eq!(lines[4].1, "1.29e+216 W");
}

#[test]
fn ion_engine_gives_plain_fuel_mass_for_short_hop() {
    let request = FlightRequest {
        name: Some("lunar hop".to_string()),
        distance_m: 3.844e8,
        dry_mass_kg: 1_000.0,
        acceleration_m_s2: 0.01,
        engine: "ds4g ion thruster".to_string(),
    };
    let report = plan(&request).expect("ion plan");
    assert_eq!(report.name.as_deref(), Some("lunar hop"));
    assert_eq!(report.engine.name, "DS4G Ion Thruster");
    // v_max = sqrt(0.01 · 3.844e8) ≈ 1960.6 m/s, fuel ≈ 18.8 kg
    let fuel = report.result.fuel_mass_kg.to_f64();
    assert!(fuel > 18.0 && fuel < 19.5, "fuel {fuel}");
    assert!(report.summary_lines()[2].1.ends_with(" kg"));
    assert!(!report.summary_lines()[2].1.contains('e'));
}

#[test]
fn unknown_engine_fails_before_computing() {
    let request = FlightRequest {
        engine: "Warp Drive".to_string(),
        acceleration_m_s2: -1.0,
        ..FlightRequest::default()
    };
    match plan(&request) {
        Err(PlanError::Engine(EngineError::NotFound(name))) => assert_eq!(name, "Warp Drive"),
        other => panic!("expected unknown engine, got {other:?}"),
    }
}

#[test]
fn validation_errors_pass_through() {
    let request = FlightRequest {
        distance_m: 0.0,
        ..FlightRequest::default()
    };
    let err = plan(&request).unwrap_err();
    assert_eq!(err.to_string(), "Distance must be greater than 0 m.");
    assert!(matches!(
        err,
        PlanError::Flight(FlightError::Validation {
            field: Field::Distance,
            ..
        })
    ));
}

#[test]
fn superluminal_request_has_no_report() {
    let request = FlightRequest {
        distance_m: 1.0e17,
        ..FlightRequest::default()
    };
    assert!(matches!(
        plan(&request),
        Err(PlanError::Flight(FlightError::PhysicalLimit { .. }))
    ));
}
