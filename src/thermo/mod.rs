//! 열역학 물성 조회 모듈 모음.

pub mod database;
pub mod saturation;
pub mod state;
#[cfg(test)]
pub(crate) mod testing;

pub use database::{CoolPropDatabase, FluidConstant, Input, LookupError, Param, PropertyDatabase};
pub use saturation::{sample, SaturationCurve, SaturationPoint, DEFAULT_SAMPLE_COUNT};
pub use state::{
    from_pressure_quality, from_pressure_temperature, from_temperature_quality,
    saturation_pressure, saturation_temperature, Phase, State, SATURATION_TOLERANCE_K,
};

/// 유체 이름을 지정하지 않았을 때의 기본 유체.
pub const DEFAULT_FLUID: &str = "Water";

/// GUI 선택 목록에 노출하는 유체. CLI는 CoolProp이 아는 이름이면 무엇이든 받는다.
pub const FLUID_CHOICES: [&str; 4] = ["Water", "Nitrogen", "CO2", "Air"];
