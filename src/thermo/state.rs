//! 두 독립 물성(P&T, P&x, T&x)으로 상태를 해석하고 상(phase)을 판정한다.

use std::fmt;

use super::database::{Input, LookupError, Param, PropertyDatabase};

/// 포화 판정 허용 오차 [K] (1 mK).
pub const SATURATION_TOLERANCE_K: f64 = 1e-3;

/// 상태의 상 분류.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// 압축수(과냉액)
    CompressedLiquid,
    /// 포화선 위(허용 오차 이내)
    Saturated,
    /// 2상 혼합물
    TwoPhase,
    /// 과열 증기
    Superheated,
    /// 판정 불가
    Unknown,
}

impl Phase {
    pub fn as_str(self) -> &'static str {
        match self {
            Phase::CompressedLiquid => "compressed_liquid",
            Phase::Saturated => "saturated",
            Phase::TwoPhase => "two_phase",
            Phase::Superheated => "superheated",
            Phase::Unknown => "unknown",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 유체 상태 스냅샷. 생성 이후 변경되지 않는다.
///
/// `quality`는 `phase == Phase::TwoPhase`일 때만 존재한다.
#[derive(Debug, Clone, PartialEq)]
pub struct State {
    pressure: f64,
    temperature: f64,
    specific_enthalpy: f64,
    specific_entropy: f64,
    specific_volume: f64,
    quality: Option<f64>,
    phase: Phase,
}

impl State {
    fn two_phase(p: f64, t: f64, h: f64, s: f64, v: f64, x: f64) -> Self {
        Self {
            pressure: p,
            temperature: t,
            specific_enthalpy: h,
            specific_entropy: s,
            specific_volume: v,
            quality: Some(x),
            phase: Phase::TwoPhase,
        }
    }

    fn single_phase(p: f64, t: f64, h: f64, s: f64, v: f64, phase: Phase) -> Self {
        debug_assert!(phase != Phase::TwoPhase);
        Self {
            pressure: p,
            temperature: t,
            specific_enthalpy: h,
            specific_entropy: s,
            specific_volume: v,
            quality: None,
            phase,
        }
    }

    /// 압력 [Pa]
    pub fn pressure(&self) -> f64 {
        self.pressure
    }

    /// 온도 [K]
    pub fn temperature(&self) -> f64 {
        self.temperature
    }

    /// 비엔탈피 [J/kg]
    pub fn specific_enthalpy(&self) -> f64 {
        self.specific_enthalpy
    }

    /// 비엔트로피 [J/kg·K]
    pub fn specific_entropy(&self) -> f64 {
        self.specific_entropy
    }

    /// 비체적 [m³/kg]. 밀도가 0이면 NaN.
    pub fn specific_volume(&self) -> f64 {
        self.specific_volume
    }

    pub fn quality(&self) -> Option<f64> {
        self.quality
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }
}

fn specific_volume_from_density(rho: f64) -> f64 {
    if rho != 0.0 {
        1.0 / rho
    } else {
        f64::NAN
    }
}

/// 압력 기준 포화온도 [K] (Q=0).
pub fn saturation_temperature<D: PropertyDatabase + ?Sized>(
    db: &D,
    pressure: f64,
    fluid: &str,
) -> Result<f64, LookupError> {
    db.lookup(
        Param::Temperature,
        Input::pressure(pressure),
        Input::quality(0.0),
        fluid,
    )
}

/// 온도 기준 포화압력 [Pa] (Q=0).
pub fn saturation_pressure<D: PropertyDatabase + ?Sized>(
    db: &D,
    temperature: f64,
    fluid: &str,
) -> Result<f64, LookupError> {
    db.lookup(
        Param::Pressure,
        Input::temperature(temperature),
        Input::quality(0.0),
        fluid,
    )
}

/// 압력 [Pa]·온도 [K]로 상태를 구한다.
///
/// 상 판정은 두 단계다. 먼저 (P,T)에서 건도를 조회해 0~1이면 2상으로 본다.
/// 아니면 포화온도와 비교해 포화/압축수/과열을 가른다. 두 조회가 실패하면
/// 상은 `Unknown`이 되고 h/s/v는 그대로 반환된다.
pub fn from_pressure_temperature<D: PropertyDatabase + ?Sized>(
    db: &D,
    pressure: f64,
    temperature: f64,
    fluid: &str,
) -> Result<State, LookupError> {
    let p = Input::pressure(pressure);
    let t = Input::temperature(temperature);
    let h = db.lookup(Param::Enthalpy, p, t, fluid)?;
    let s = db.lookup(Param::Entropy, p, t, fluid)?;
    let rho = db.lookup(Param::Density, p, t, fluid)?;
    let v = specific_volume_from_density(rho);

    match db.lookup(Param::Quality, p, t, fluid) {
        Ok(q) if (0.0..=1.0).contains(&q) => {
            return Ok(State::two_phase(pressure, temperature, h, s, v, q));
        }
        Ok(_) => {}
        Err(e) => log::debug!("quality probe failed, falling back to T_sat: {e}"),
    }

    let phase = match saturation_temperature(db, pressure, fluid) {
        Ok(t_sat) => classify_against_saturation(temperature, t_sat),
        Err(e) => {
            log::warn!("phase of {fluid} at {p}, {t} left unknown: {e}");
            Phase::Unknown
        }
    };
    Ok(State::single_phase(pressure, temperature, h, s, v, phase))
}

fn classify_against_saturation(temperature: f64, t_sat: f64) -> Phase {
    if (temperature - t_sat).abs() < SATURATION_TOLERANCE_K {
        Phase::Saturated
    } else if temperature < t_sat {
        Phase::CompressedLiquid
    } else {
        Phase::Superheated
    }
}

/// 압력 [Pa]·건도로 2상 상태를 구한다. 건도는 입력값 그대로 보존한다.
pub fn from_pressure_quality<D: PropertyDatabase + ?Sized>(
    db: &D,
    pressure: f64,
    quality: f64,
    fluid: &str,
) -> Result<State, LookupError> {
    let p = Input::pressure(pressure);
    let x = Input::quality(quality);
    let t = db.lookup(Param::Temperature, p, x, fluid)?;
    let h = db.lookup(Param::Enthalpy, p, x, fluid)?;
    let s = db.lookup(Param::Entropy, p, x, fluid)?;
    let rho = db.lookup(Param::Density, p, x, fluid)?;
    Ok(State::two_phase(
        pressure,
        t,
        h,
        s,
        specific_volume_from_density(rho),
        quality,
    ))
}

/// 온도 [K]·건도로 상태를 구한다. 포화압력으로 환산한 뒤 P&x 경로로 위임한다.
pub fn from_temperature_quality<D: PropertyDatabase + ?Sized>(
    db: &D,
    temperature: f64,
    quality: f64,
    fluid: &str,
) -> Result<State, LookupError> {
    let pressure = db.lookup(
        Param::Pressure,
        Input::temperature(temperature),
        Input::quality(quality),
        fluid,
    )?;
    from_pressure_quality(db, pressure, quality, fluid)
}
