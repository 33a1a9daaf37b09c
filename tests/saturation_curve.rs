//! CoolProp 포화곡선 샘플링 테스트.
use thermo_property_explorer::thermo::{sample, CoolPropDatabase, PropertyDatabase, DEFAULT_SAMPLE_COUNT};

#[test]
fn water_curve_spans_triple_point_to_critical() {
    let db = CoolPropDatabase::new();
    let t_min = db.min_temperature("Water").expect("Tmin");
    let t_crit = db.critical_temperature("Water").expect("Tcrit");
    assert!((t_crit - 647.096).abs() < 1e-3, "Tcrit {t_crit}");
    assert!(t_min < 274.0, "Tmin {t_min}");

    let curve = sample(&db, "Water", DEFAULT_SAMPLE_COUNT).expect("sample");
    assert!(curve.len() <= DEFAULT_SAMPLE_COUNT);
    assert!(curve.len() > DEFAULT_SAMPLE_COUNT / 2, "only {} points", curve.len());
    assert_eq!(curve.points()[0].temperature, t_min);

    for pair in curve.points().windows(2) {
        assert!(pair[0].temperature < pair[1].temperature);
    }
    for p in &curve {
        assert!(p.temperature >= t_min && p.temperature <= t_crit);
        assert!(p.liquid_enthalpy.is_finite() && p.vapor_enthalpy.is_finite());
        assert!(p.liquid_entropy.is_finite() && p.vapor_entropy.is_finite());
        assert!(p.vapor_entropy >= p.liquid_entropy);
    }
}

#[test]
fn nitrogen_curve_is_sampled() {
    let db = CoolPropDatabase::new();
    let curve = sample(&db, "Nitrogen", 50).expect("sample");
    assert!(!curve.is_empty());
    assert!(curve.len() <= 50);
}

#[test]
fn empty_request_gives_empty_curve() {
    let db = CoolPropDatabase::new();
    assert!(sample(&db, "Water", 0).expect("sample").is_empty());
}

#[test]
fn unknown_fluid_has_no_curve() {
    let db = CoolPropDatabase::new();
    let err = sample(&db, "Unobtainium", 10).unwrap_err();
    assert!(err.to_string().contains("Unobtainium"));
}
