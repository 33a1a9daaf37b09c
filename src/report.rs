//! 상태를 사람이 읽는 텍스트 보고서로 만든다.

use std::fmt::Write;

use crate::config::DisplayUnits;
use crate::i18n::{keys, Translator};
use crate::thermo::State;
use crate::units::{pressure, specific_energy, temperature};

/// 상태 보고서를 렌더링한다. 건도가 없으면 `-`로 표시한다.
pub fn render(state: &State, fluid: &str, units: &DisplayUnits, tr: &Translator) -> String {
    let p = pressure::from_pascal(state.pressure(), units.pressure);
    let t = temperature::from_kelvin(state.temperature(), units.temperature);
    let h = specific_energy::enthalpy_from_si(state.specific_enthalpy(), units.specific_energy);
    let s = specific_energy::entropy_from_si(state.specific_entropy(), units.specific_energy);
    let x = state
        .quality()
        .map(|x| format!("{x:.4}"))
        .unwrap_or_else(|| "-".to_string());

    let mut out = String::new();
    // String에 쓰는 write!는 실패하지 않는다.
    let _ = writeln!(out, "{}", tr.fill(keys::REPORT_TITLE, &[("fluid", fluid)]));
    let _ = writeln!(out, "  {} = {p:.3} {}", tr.t(keys::REPORT_PRESSURE), units.pressure.symbol());
    let _ = writeln!(
        out,
        "  {} = {t:.3} {}",
        tr.t(keys::REPORT_TEMPERATURE),
        units.temperature.symbol()
    );
    let _ = writeln!(
        out,
        "  {} = {h:.3} {}",
        tr.t(keys::REPORT_ENTHALPY),
        units.specific_energy.enthalpy_symbol()
    );
    let _ = writeln!(
        out,
        "  {} = {s:.4} {}",
        tr.t(keys::REPORT_ENTROPY),
        units.specific_energy.entropy_symbol()
    );
    let _ = writeln!(
        out,
        "  {} = {:.6} m3/kg",
        tr.t(keys::REPORT_VOLUME),
        state.specific_volume()
    );
    let _ = writeln!(out, "  {} = {x}", tr.t(keys::REPORT_QUALITY));
    let _ = writeln!(out, "  {} = {}", tr.t(keys::REPORT_PHASE), state.phase());
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::thermo::testing::{FakeDatabase, FAKE_FLUID};
    use crate::thermo::{from_pressure_quality, from_pressure_temperature};

    #[test]
    fn single_phase_report_in_default_units() {
        let db = FakeDatabase::default();
        let st = from_pressure_temperature(&db, 1.0e6, 450.0, FAKE_FLUID).unwrap();
        let text = render(&st, FAKE_FLUID, &DisplayUnits::default(), &Translator::new("en"));
        let expected = "State for Testium:\n\
                        \x20 P = 1000.000 kPa\n\
                        \x20 T = 176.850 °C\n\
                        \x20 h = 450.000 kJ/kg\n\
                        \x20 s = 4.5000 kJ/kg-K\n\
                        \x20 v = 0.180000 m3/kg\n\
                        \x20 x = -\n\
                        \x20 phase = superheated\n";
        assert_eq!(text, expected);
    }

    #[test]
    fn two_phase_report_shows_quality() {
        let db = FakeDatabase::default();
        let st = from_pressure_quality(&db, 1.0e6, 0.5, FAKE_FLUID).unwrap();
        let text = render(&st, FAKE_FLUID, &DisplayUnits::default(), &Translator::new("en"));
        assert!(text.contains("  x = 0.5000\n"));
        assert!(text.ends_with("phase = two_phase\n"));
    }
}
