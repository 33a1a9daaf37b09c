//! CoolProp 물(Water) 상태 해석 회귀 테스트. 단상 값은 IAPWS-IF97(seuif97)과 교차 검증한다.
use seuif97::{pt, OH, OS, OV};
use thermo_property_explorer::thermo::{
    from_pressure_quality, from_pressure_temperature, from_temperature_quality,
    saturation_temperature, CoolPropDatabase, Phase,
};

fn assert_close(label: &str, actual: f64, expected: f64, rel_tol: f64) {
    let denom = expected.abs().max(1.0);
    let diff = (actual - expected).abs();
    assert!(
        diff <= rel_tol * denom,
        "{label} expected {expected:.6} got {actual:.6} (diff {diff:.6}, tol {rel_tol})"
    );
}

const WATER: &str = "Water";

#[test]
fn superheated_vapor_at_one_bar() {
    let db = CoolPropDatabase::new();
    let st = from_pressure_temperature(&db, 1.0e5, 500.0, WATER).expect("PT");
    assert_eq!(st.phase(), Phase::Superheated);
    assert_eq!(st.quality(), None);
    assert_eq!(st.pressure(), 1.0e5);
    assert_eq!(st.temperature(), 500.0);
    assert!(st.specific_volume() > 1.0);
}

#[test]
fn compressed_liquid_at_ten_bar() {
    let db = CoolPropDatabase::new();
    // 10 bar에서 포화온도는 약 453 K이므로 373.15 K는 압축수다.
    let t_sat = saturation_temperature(&db, 10.0e5, WATER).expect("T_sat");
    assert_close("T_sat(10 bar)", t_sat, 453.03, 1e-3);
    let st = from_pressure_temperature(&db, 10.0e5, 373.15, WATER).expect("PT");
    assert_eq!(st.phase(), Phase::CompressedLiquid);
    assert_eq!(st.quality(), None);
    assert!(st.specific_volume() < 0.0011);
}

#[test]
fn phase_flips_across_saturation_temperature() {
    let db = CoolPropDatabase::new();
    let t_sat = saturation_temperature(&db, 5.0e5, WATER).expect("T_sat");
    // 1 K 떨어진 점은 허용오차 밖이고 CoolProp P-T 입력도 안정적이다.
    let below = from_pressure_temperature(&db, 5.0e5, t_sat - 1.0, WATER).expect("PT below");
    let above = from_pressure_temperature(&db, 5.0e5, t_sat + 1.0, WATER).expect("PT above");
    assert_eq!(below.phase(), Phase::CompressedLiquid);
    assert_eq!(above.phase(), Phase::Superheated);
    assert!(above.specific_enthalpy() > below.specific_enthalpy());
    assert!(above.specific_volume() > below.specific_volume());
}

#[test]
fn half_quality_at_one_bar() {
    let db = CoolPropDatabase::new();
    let st = from_pressure_quality(&db, 100.0e3, 0.5, WATER).expect("Px");
    assert_eq!(st.phase(), Phase::TwoPhase);
    assert_eq!(st.quality(), Some(0.5));
    assert_eq!(st.pressure(), 100.0e3);
    // 100 kPa 포화온도 99.61 °C
    assert_close("T", st.temperature(), 372.76, 1e-4);
    // h = (h_f + h_g) / 2
    let hf = 417_436.0;
    let hg = 2_674_950.0;
    assert_close("h", st.specific_enthalpy(), 0.5 * (hf + hg), 2e-3);

    // 1 atm에서는 100 °C 부근
    let atm = from_pressure_quality(&db, 101_325.0, 0.5, WATER).expect("Px");
    assert_close("T(1 atm)", atm.temperature(), 373.12, 1e-4);
}

#[test]
fn temperature_quality_matches_pressure_quality() {
    let db = CoolPropDatabase::new();
    let tx = from_temperature_quality(&db, 400.0, 0.3, WATER).expect("Tx");
    assert_eq!(tx.phase(), Phase::TwoPhase);
    assert_eq!(tx.quality(), Some(0.3));
    assert_close("T", tx.temperature(), 400.0, 1e-6);

    let px = from_pressure_quality(&db, tx.pressure(), 0.3, WATER).expect("Px");
    assert_close("h", px.specific_enthalpy(), tx.specific_enthalpy(), 1e-9);
    assert_close("s", px.specific_entropy(), tx.specific_entropy(), 1e-9);
    assert_close("v", px.specific_volume(), tx.specific_volume(), 1e-9);
}

#[test]
fn unknown_fluid_is_rejected_by_every_operation() {
    let db = CoolPropDatabase::new();
    let fluid = "Unobtainium";
    let errors = [
        from_pressure_temperature(&db, 1.0e5, 300.0, fluid).unwrap_err(),
        from_pressure_quality(&db, 1.0e5, 0.5, fluid).unwrap_err(),
        from_temperature_quality(&db, 300.0, 0.5, fluid).unwrap_err(),
    ];
    for err in errors {
        assert_eq!(err.fluid, fluid);
        assert!(err.to_string().contains(fluid), "{err}");
    }
}

#[test]
fn single_phase_agrees_with_if97() {
    let db = CoolPropDatabase::new();
    // (p [MPa], t [°C], IF97 영역)
    let cases = [(1.0, 26.85, 1), (0.1, 226.85, 2), (3.0, 150.0, 1), (0.5, 300.0, 2)];
    for (p_mpa, t_c, region) in cases {
        let st = from_pressure_temperature(&db, p_mpa * 1.0e6, t_c + 273.15, WATER).expect("PT");
        let h = pt(p_mpa, t_c, (OH, region)) * 1000.0;
        let s = pt(p_mpa, t_c, (OS, region)) * 1000.0;
        let v = pt(p_mpa, t_c, (OV, region));
        let label = format!("{p_mpa} MPa, {t_c} °C");
        assert_close(&format!("h @ {label}"), st.specific_enthalpy(), h, 1e-3);
        assert_close(&format!("s @ {label}"), st.specific_entropy(), s, 1e-3);
        assert_close(&format!("v @ {label}"), st.specific_volume(), v, 1e-3);
        let expected = if region == 1 {
            Phase::CompressedLiquid
        } else {
            Phase::Superheated
        };
        assert_eq!(st.phase(), expected, "{label}");
    }
}
