use serde::{Deserialize, Serialize};

/// 표시용 압력 단위. 내부 기준은 항상 절대압 Pa이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PressureUnit {
    Pascal,
    KiloPascal,
    Bar,
    MegaPascal,
    Psi,
}

const PA_PER_BAR: f64 = 100_000.0;
const PA_PER_PSI: f64 = 6_894.757_293_168;

impl PressureUnit {
    /// 보고서/축 라벨에 쓰는 기호.
    pub fn symbol(self) -> &'static str {
        match self {
            PressureUnit::Pascal => "Pa",
            PressureUnit::KiloPascal => "kPa",
            PressureUnit::Bar => "bar",
            PressureUnit::MegaPascal => "MPa",
            PressureUnit::Psi => "psi",
        }
    }
}

/// 주어진 압력을 Pa로 변환한다.
pub fn to_pascal(value: f64, unit: PressureUnit) -> f64 {
    match unit {
        PressureUnit::Pascal => value,
        PressureUnit::KiloPascal => value * 1_000.0,
        PressureUnit::Bar => value * PA_PER_BAR,
        PressureUnit::MegaPascal => value * 1.0e6,
        PressureUnit::Psi => value * PA_PER_PSI,
    }
}

/// Pa 값을 원하는 단위로 변환한다.
pub fn from_pascal(value_pa: f64, unit: PressureUnit) -> f64 {
    match unit {
        PressureUnit::Pascal => value_pa,
        PressureUnit::KiloPascal => value_pa / 1_000.0,
        PressureUnit::Bar => value_pa / PA_PER_BAR,
        PressureUnit::MegaPascal => value_pa / 1.0e6,
        PressureUnit::Psi => value_pa / PA_PER_PSI,
    }
}
