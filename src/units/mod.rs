//! 표시 단위 정의 및 변환 모듈 모음. 계산 내부 값은 항상 SI이다.

pub mod pressure;
pub mod specific_energy;
pub mod temperature;

pub use pressure::PressureUnit;
pub use specific_energy::SpecificEnergyUnit;
pub use temperature::TemperatureUnit;

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() <= 1e-9 * expected.abs().max(1.0),
            "expected {expected} got {actual}"
        );
    }

    #[test]
    fn pressure_units_roundtrip_through_pascal() {
        assert_close(pressure::from_pascal(101_325.0, PressureUnit::KiloPascal), 101.325);
        assert_close(pressure::to_pascal(10.0, PressureUnit::Bar), 1.0e6);
        assert_close(pressure::from_pascal(1.0e6, PressureUnit::Bar), 10.0);
        assert_close(pressure::from_pascal(6_894.757_293_168, PressureUnit::Psi), 1.0);
    }

    #[test]
    fn temperature_units() {
        assert_close(temperature::from_kelvin(373.15, TemperatureUnit::Celsius), 100.0);
        assert_close(temperature::to_kelvin(32.0, TemperatureUnit::Fahrenheit), 273.15);
        assert_close(temperature::from_kelvin(300.0, TemperatureUnit::Rankine), 540.0);
    }

    #[test]
    fn specific_energy_units() {
        assert_close(
            specific_energy::enthalpy_from_si(2_676_000.0, SpecificEnergyUnit::KjPerKg),
            2676.0,
        );
        assert_close(
            specific_energy::entropy_from_si(4_186.8, SpecificEnergyUnit::BtuPerPound),
            1.0,
        );
        assert_eq!(SpecificEnergyUnit::KjPerKg.entropy_symbol(), "kJ/kg-K");
    }
}
