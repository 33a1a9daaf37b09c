//! 단위 테스트용 가짜 물성 데이터베이스.
//!
//! 가상의 유체 "Testium": Tsat(P) = 400·(P/1 MPa)^0.1, 임계온도 500 K, 최저온도 250 K.
//! 단상 영역은 h = 1000·T, s = 10·T 로 단순화한다.

use super::database::{FluidConstant, Input, LookupError, Param, PropertyDatabase};

pub const FAKE_FLUID: &str = "Testium";
pub const FAKE_T_CRIT: f64 = 500.0;
pub const FAKE_T_MIN: f64 = 250.0;

const LIQUID_DENSITY: f64 = 1000.0;

#[derive(Debug, Clone)]
pub struct FakeDatabase {
    /// (P,T)에서 건도 조회 시 돌려줄 값(단상이면 -1).
    pub pt_quality: f64,
    pub fail_quality_probe: bool,
    pub fail_saturation_probe: bool,
    pub zero_density: bool,
    /// 포화증기 엔트로피를 NaN으로 돌려준다.
    pub nan_vapor_entropy: bool,
    /// 이 온도 구간의 포화 조회는 실패시킨다.
    pub drop_band: Option<(f64, f64)>,
}

impl Default for FakeDatabase {
    fn default() -> Self {
        Self {
            pt_quality: -1.0,
            fail_quality_probe: false,
            fail_saturation_probe: false,
            zero_density: false,
            nan_vapor_entropy: false,
            drop_band: None,
        }
    }
}

fn t_sat(p: f64) -> f64 {
    400.0 * (p / 1.0e6).powf(0.1)
}

fn p_sat(t: f64) -> f64 {
    1.0e6 * (t / 400.0).powi(10)
}

impl FakeDatabase {
    fn saturated(&self, output: Param, t: f64, p: f64, x: f64) -> Result<f64, String> {
        if !(0.0..=1.0).contains(&x) {
            return Err(format!("quality {x} out of range"));
        }
        if t >= FAKE_T_CRIT - 0.5 {
            return Err("too close to the critical point".into());
        }
        if let Some((lo, hi)) = self.drop_band {
            if (lo..=hi).contains(&t) {
                return Err("solver did not converge".into());
            }
        }
        let h_liq = 1000.0 * t;
        let h_fg = 2.0e6 * (1.0 - t / FAKE_T_CRIT);
        let vapor_density = p / (400.0 * t);
        match output {
            Param::Temperature => Ok(t),
            Param::Pressure => Ok(p),
            Param::Enthalpy => Ok(h_liq + x * h_fg),
            Param::Entropy if self.nan_vapor_entropy && x == 1.0 => Ok(f64::NAN),
            Param::Entropy => Ok(10.0 * t + x * h_fg / t),
            Param::Density => Ok(1.0 / (x / vapor_density + (1.0 - x) / LIQUID_DENSITY)),
            Param::Quality => Ok(x),
        }
    }

    fn eval(&self, output: Param, input1: Input, input2: Input) -> Result<f64, String> {
        use Param::*;
        match (input1.param, input2.param) {
            (Pressure, Temperature) => {
                let (p, t) = (input1.value, input2.value);
                match output {
                    Enthalpy => Ok(1000.0 * t),
                    Entropy => Ok(10.0 * t),
                    Density if self.zero_density => Ok(0.0),
                    Density => Ok(p / (400.0 * t)),
                    Quality if self.fail_quality_probe => Err("quality undefined".into()),
                    Quality => Ok(self.pt_quality),
                    _ => Err(format!("{output} is not an output for P,T")),
                }
            }
            (Pressure, Quality) => {
                if output == Temperature && self.fail_saturation_probe {
                    return Err("saturation solver failed".into());
                }
                let p = input1.value;
                self.saturated(output, t_sat(p), p, input2.value)
            }
            (Temperature, Quality) => {
                let t = input1.value;
                self.saturated(output, t, p_sat(t), input2.value)
            }
            _ => Err("unsupported input pair".into()),
        }
    }
}

impl PropertyDatabase for FakeDatabase {
    fn lookup(
        &self,
        output: Param,
        input1: Input,
        input2: Input,
        fluid: &str,
    ) -> Result<f64, LookupError> {
        if fluid != FAKE_FLUID {
            return Err(LookupError::new(fluid, output, input1, input2, "unknown fluid"));
        }
        self.eval(output, input1, input2)
            .map_err(|reason| LookupError::new(fluid, output, input1, input2, reason))
    }

    fn constant(&self, constant: FluidConstant, fluid: &str) -> Result<f64, LookupError> {
        if fluid != FAKE_FLUID {
            return Err(LookupError::constant(fluid, constant, "unknown fluid"));
        }
        Ok(match constant {
            FluidConstant::CriticalTemperature => FAKE_T_CRIT,
            FluidConstant::MinTemperature => FAKE_T_MIN,
        })
    }
}
