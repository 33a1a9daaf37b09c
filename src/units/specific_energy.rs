use serde::{Deserialize, Serialize};

/// 비에너지(비엔탈피, 비엔트로피 분자) 단위. 내부 기준은 J/kg이다.
///
/// 비엔트로피는 같은 단위에 `/K`(BTU는 `/R`)를 붙여 표시한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpecificEnergyUnit {
    JPerKg,
    KjPerKg,
    BtuPerPound,
}

const J_PER_BTU_LB: f64 = 2_326.0;

impl SpecificEnergyUnit {
    pub fn enthalpy_symbol(self) -> &'static str {
        match self {
            SpecificEnergyUnit::JPerKg => "J/kg",
            SpecificEnergyUnit::KjPerKg => "kJ/kg",
            SpecificEnergyUnit::BtuPerPound => "BTU/lb",
        }
    }

    pub fn entropy_symbol(self) -> &'static str {
        match self {
            SpecificEnergyUnit::JPerKg => "J/kg-K",
            SpecificEnergyUnit::KjPerKg => "kJ/kg-K",
            SpecificEnergyUnit::BtuPerPound => "BTU/lb-R",
        }
    }
}

/// J/kg 값을 원하는 단위로 변환한다.
pub fn enthalpy_from_si(value: f64, unit: SpecificEnergyUnit) -> f64 {
    match unit {
        SpecificEnergyUnit::JPerKg => value,
        SpecificEnergyUnit::KjPerKg => value / 1_000.0,
        SpecificEnergyUnit::BtuPerPound => value / J_PER_BTU_LB,
    }
}

/// J/kg·K 값을 원하는 단위로 변환한다. BTU/lb·R은 온도 눈금 비(1.8)를 반영한다.
pub fn entropy_from_si(value: f64, unit: SpecificEnergyUnit) -> f64 {
    match unit {
        SpecificEnergyUnit::JPerKg => value,
        SpecificEnergyUnit::KjPerKg => value / 1_000.0,
        SpecificEnergyUnit::BtuPerPound => value / (J_PER_BTU_LB * 1.8),
    }
}
