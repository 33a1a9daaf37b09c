//! 외부 물성 데이터베이스(CoolProp) 접근 계층.
//! 입력/출력은 모두 SI 단위(Pa, K, J/kg, J/kg·K, kg/m³)이다.

use std::fmt;

use rfluids::native::CoolProp;
use thiserror::Error;

/// 조회 가능한 물성 기호.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Param {
    /// 압력 [Pa]
    Pressure,
    /// 온도 [K]
    Temperature,
    /// 비엔탈피 [J/kg]
    Enthalpy,
    /// 비엔트로피 [J/kg·K]
    Entropy,
    /// 밀도 [kg/m³]
    Density,
    /// 건도(0~1)
    Quality,
}

impl Param {
    /// 데이터베이스에 넘기는 짧은 기호.
    pub fn symbol(self) -> &'static str {
        match self {
            Param::Pressure => "P",
            Param::Temperature => "T",
            Param::Enthalpy => "H",
            Param::Entropy => "S",
            Param::Density => "D",
            Param::Quality => "Q",
        }
    }
}

impl fmt::Display for Param {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// 입력 하나(기호 + 값).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Input {
    pub param: Param,
    pub value: f64,
}

impl Input {
    pub fn pressure(value: f64) -> Self {
        Self { param: Param::Pressure, value }
    }

    pub fn temperature(value: f64) -> Self {
        Self { param: Param::Temperature, value }
    }

    pub fn quality(value: f64) -> Self {
        Self { param: Param::Quality, value }
    }
}

impl fmt::Display for Input {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.param, self.value)
    }
}

/// 입력이 필요 없는 유체 상수 조회.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FluidConstant {
    CriticalTemperature,
    MinTemperature,
}

impl FluidConstant {
    pub fn symbol(self) -> &'static str {
        match self {
            FluidConstant::CriticalTemperature => "Tcrit",
            FluidConstant::MinTemperature => "Tmin",
        }
    }
}

/// 데이터베이스 조회 실패. 어떤 유체의 어떤 출력을 어떤 입력으로 요청했는지 보존한다.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("property lookup failed for {fluid}: {output}{detail}: {reason}", detail = DisplayInputs(.inputs))]
pub struct LookupError {
    pub fluid: String,
    pub output: String,
    pub inputs: Option<(Input, Input)>,
    pub reason: String,
}

impl LookupError {
    pub fn new(
        fluid: &str,
        output: Param,
        input1: Input,
        input2: Input,
        reason: impl Into<String>,
    ) -> Self {
        Self {
            fluid: fluid.to_string(),
            output: output.symbol().to_string(),
            inputs: Some((input1, input2)),
            reason: reason.into(),
        }
    }

    pub fn constant(fluid: &str, constant: FluidConstant, reason: impl Into<String>) -> Self {
        Self {
            fluid: fluid.to_string(),
            output: constant.symbol().to_string(),
            inputs: None,
            reason: reason.into(),
        }
    }
}

struct DisplayInputs<'a>(&'a Option<(Input, Input)>);

impl fmt::Display for DisplayInputs<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some((a, b)) => write!(f, " with {a}, {b}"),
            None => Ok(()),
        }
    }
}

/// 물성 데이터베이스 경계. 상태 해석기와 포화곡선 샘플러는 이 trait만 본다.
pub trait PropertyDatabase {
    /// 두 입력으로 출력 물성 하나를 조회한다.
    fn lookup(
        &self,
        output: Param,
        input1: Input,
        input2: Input,
        fluid: &str,
    ) -> Result<f64, LookupError>;

    /// 유체 상수(임계온도, 최저온도)를 조회한다.
    fn constant(&self, constant: FluidConstant, fluid: &str) -> Result<f64, LookupError>;

    fn critical_temperature(&self, fluid: &str) -> Result<f64, LookupError> {
        self.constant(FluidConstant::CriticalTemperature, fluid)
    }

    fn min_temperature(&self, fluid: &str) -> Result<f64, LookupError> {
        self.constant(FluidConstant::MinTemperature, fluid)
    }
}

impl<D: PropertyDatabase + ?Sized> PropertyDatabase for &D {
    fn lookup(
        &self,
        output: Param,
        input1: Input,
        input2: Input,
        fluid: &str,
    ) -> Result<f64, LookupError> {
        (**self).lookup(output, input1, input2, fluid)
    }

    fn constant(&self, constant: FluidConstant, fluid: &str) -> Result<f64, LookupError> {
        (**self).constant(constant, fluid)
    }
}

/// CoolProp 고수준 API(PropsSI/Props1SI)를 rfluids로 위임한 구현.
#[derive(Debug, Clone, Copy, Default)]
pub struct CoolPropDatabase;

impl CoolPropDatabase {
    pub fn new() -> Self {
        Self
    }
}

impl PropertyDatabase for CoolPropDatabase {
    fn lookup(
        &self,
        output: Param,
        input1: Input,
        input2: Input,
        fluid: &str,
    ) -> Result<f64, LookupError> {
        log::trace!("PropsSI({output}, {input1}, {input2}, {fluid})");
        let value = CoolProp::props_si(
            output.symbol(),
            input1.param.symbol(),
            input1.value,
            input2.param.symbol(),
            input2.value,
            fluid,
        )
        .map_err(|e| LookupError::new(fluid, output, input1, input2, e.to_string()))?;
        // CoolProp은 실패 시 오류 대신 inf/NaN을 돌려주기도 한다.
        if !value.is_finite() {
            return Err(LookupError::new(
                fluid,
                output,
                input1,
                input2,
                format!("non-finite result {value}"),
            ));
        }
        Ok(value)
    }

    fn constant(&self, constant: FluidConstant, fluid: &str) -> Result<f64, LookupError> {
        log::trace!("Props1SI({}, {fluid})", constant.symbol());
        let value = CoolProp::props1_si(constant.symbol(), fluid)
            .map_err(|e| LookupError::constant(fluid, constant, e.to_string()))?;
        if !value.is_finite() {
            return Err(LookupError::constant(
                fluid,
                constant,
                format!("non-finite result {value}"),
            ));
        }
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_error_names_fluid_output_and_inputs() {
        let err = LookupError::new(
            "Unobtainium",
            Param::Enthalpy,
            Input::pressure(1.0e5),
            Input::temperature(300.0),
            "unknown fluid",
        );
        let msg = err.to_string();
        assert_eq!(
            msg,
            "property lookup failed for Unobtainium: H with P=100000, T=300: unknown fluid"
        );
    }

    #[test]
    fn constant_error_has_no_inputs() {
        let err = LookupError::constant("Unobtainium", FluidConstant::CriticalTemperature, "bad");
        assert_eq!(err.to_string(), "property lookup failed for Unobtainium: Tcrit: bad");
        assert!(err.inputs.is_none());
    }

    #[test]
    fn symbols_match_coolprop_keys() {
        let all = [
            Param::Pressure,
            Param::Temperature,
            Param::Enthalpy,
            Param::Entropy,
            Param::Density,
            Param::Quality,
        ];
        let joined: String = all.iter().map(|p| p.symbol()).collect();
        assert_eq!(joined, "PTHSDQ");
        assert_eq!(FluidConstant::MinTemperature.symbol(), "Tmin");
    }
}
