//! 프런트엔드(CLI/GUI) 공통 입력 모델. 모드별 필수 입력을 검증한 뒤 상태를 해석한다.

use std::fmt;

use clap::ValueEnum;
use thiserror::Error;

use crate::thermo::{self, LookupError, PropertyDatabase, State};

/// 입력 모드.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Mode {
    /// 압력 + 온도
    #[default]
    #[value(name = "PT")]
    PT,
    /// 압력 + 건도
    #[value(name = "Px")]
    Px,
    /// 온도 + 건도
    #[value(name = "Tx")]
    Tx,
}

impl Mode {
    pub fn as_str(self) -> &'static str {
        match self {
            Mode::PT => "PT",
            Mode::Px => "Px",
            Mode::Tx => "Tx",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 모드에 필요한 입력이 빠졌을 때의 오류.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{mode} mode requires {}", .missing.join(" and "))]
pub struct InputError {
    pub mode: Mode,
    pub missing: Vec<&'static str>,
}

/// 검증 전 입력. 값은 모두 SI(Pa, K).
#[derive(Debug, Clone, PartialEq)]
pub struct StateRequest {
    pub mode: Mode,
    pub pressure: Option<f64>,
    pub temperature: Option<f64>,
    pub quality: Option<f64>,
    pub fluid: String,
}

/// 검증을 통과한 입력 조합.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StateQuery {
    PressureTemperature { pressure: f64, temperature: f64 },
    PressureQuality { pressure: f64, quality: f64 },
    TemperatureQuality { temperature: f64, quality: f64 },
}

impl StateRequest {
    /// 모드별 필수 입력을 확인한다.
    pub fn validate(&self) -> Result<StateQuery, InputError> {
        let missing = |pairs: &[(&'static str, Option<f64>)]| -> Vec<&'static str> {
            pairs
                .iter()
                .filter(|(_, v)| v.is_none())
                .map(|(name, _)| *name)
                .collect()
        };
        let (p, t, x) = (self.pressure, self.temperature, self.quality);
        let query = match (self.mode, p, t, x) {
            (Mode::PT, Some(pressure), Some(temperature), _) => {
                StateQuery::PressureTemperature { pressure, temperature }
            }
            (Mode::Px, Some(pressure), _, Some(quality)) => {
                StateQuery::PressureQuality { pressure, quality }
            }
            (Mode::Tx, _, Some(temperature), Some(quality)) => {
                StateQuery::TemperatureQuality { temperature, quality }
            }
            (Mode::PT, ..) => {
                return Err(InputError {
                    mode: self.mode,
                    missing: missing(&[("--P", p), ("--T", t)]),
                })
            }
            (Mode::Px, ..) => {
                return Err(InputError {
                    mode: self.mode,
                    missing: missing(&[("--P", p), ("--x", x)]),
                })
            }
            (Mode::Tx, ..) => {
                return Err(InputError {
                    mode: self.mode,
                    missing: missing(&[("--T", t), ("--x", x)]),
                })
            }
        };
        Ok(query)
    }
}

impl StateQuery {
    /// 해당 상태 해석 연산을 호출한다.
    pub fn resolve<D: PropertyDatabase + ?Sized>(
        self,
        db: &D,
        fluid: &str,
    ) -> Result<State, LookupError> {
        match self {
            StateQuery::PressureTemperature { pressure, temperature } => {
                thermo::from_pressure_temperature(db, pressure, temperature, fluid)
            }
            StateQuery::PressureQuality { pressure, quality } => {
                thermo::from_pressure_quality(db, pressure, quality, fluid)
            }
            StateQuery::TemperatureQuality { temperature, quality } => {
                thermo::from_temperature_quality(db, temperature, quality, fluid)
            }
        }
    }
}
