//! 도표 오버레이용 포화곡선 샘플링.

use super::database::{Input, LookupError, Param, PropertyDatabase};

/// 기본 샘플 수.
pub const DEFAULT_SAMPLE_COUNT: usize = 200;

/// 포화곡선 위 한 점. 모두 SI 단위.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SaturationPoint {
    /// 온도 [K]
    pub temperature: f64,
    /// 포화액 비엔탈피 [J/kg]
    pub liquid_enthalpy: f64,
    /// 포화증기 비엔탈피 [J/kg]
    pub vapor_enthalpy: f64,
    /// 포화액 비엔트로피 [J/kg·K]
    pub liquid_entropy: f64,
    /// 포화증기 비엔트로피 [J/kg·K]
    pub vapor_entropy: f64,
}

/// 최저온도~임계온도 구간의 포화곡선. 온도 오름차순이 보장된다.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SaturationCurve {
    points: Vec<SaturationPoint>,
}

impl SaturationCurve {
    pub fn points(&self) -> &[SaturationPoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SaturationPoint> {
        self.points.iter()
    }
}

impl<'a> IntoIterator for &'a SaturationCurve {
    type Item = &'a SaturationPoint;
    type IntoIter = std::slice::Iter<'a, SaturationPoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

/// 닫힌 구간 [lo, hi]를 `count`개로 균등 분할한다.
fn linspace(lo: f64, hi: f64, count: usize) -> impl Iterator<Item = f64> {
    let span = if count > 1 {
        (hi - lo) / (count - 1) as f64
    } else {
        0.0
    };
    (0..count).map(move |i| {
        // 마지막 점은 누적 오차 없이 hi에 맞춘다.
        if count > 1 && i == count - 1 {
            hi
        } else {
            lo + span * i as f64
        }
    })
}

/// 포화 조회 한 건. 비유한 값은 해당 조회의 오류로 돌려준다.
fn saturated_lookup<D: PropertyDatabase + ?Sized>(
    db: &D,
    output: Param,
    t: Input,
    q: Input,
    fluid: &str,
) -> Result<f64, LookupError> {
    let value = db.lookup(output, t, q, fluid)?;
    if value.is_finite() {
        Ok(value)
    } else {
        Err(LookupError::new(
            fluid,
            output,
            t,
            q,
            format!("non-finite result {value}"),
        ))
    }
}

fn sample_point<D: PropertyDatabase + ?Sized>(
    db: &D,
    temperature: f64,
    fluid: &str,
) -> Result<SaturationPoint, LookupError> {
    let t = Input::temperature(temperature);
    let liquid = Input::quality(0.0);
    let vapor = Input::quality(1.0);
    Ok(SaturationPoint {
        temperature,
        liquid_enthalpy: saturated_lookup(db, Param::Enthalpy, t, liquid, fluid)?,
        vapor_enthalpy: saturated_lookup(db, Param::Enthalpy, t, vapor, fluid)?,
        liquid_entropy: saturated_lookup(db, Param::Entropy, t, liquid, fluid)?,
        vapor_entropy: saturated_lookup(db, Param::Entropy, t, vapor, fluid)?,
    })
}

/// 최저온도~임계온도를 `count`개 온도로 나눠 포화액/포화증기 h, s를 구한다.
///
/// 네 조회 중 하나라도 실패한 온도는 결과에서 빠진다(주로 임계점 부근).
/// 구간 경계(Tmin, Tcrit)를 구하지 못할 때만 오류를 반환한다.
pub fn sample<D: PropertyDatabase + ?Sized>(
    db: &D,
    fluid: &str,
    count: usize,
) -> Result<SaturationCurve, LookupError> {
    let t_crit = db.critical_temperature(fluid)?;
    let t_min = db.min_temperature(fluid)?;

    let mut points = Vec::with_capacity(count);
    let mut dropped = 0usize;
    for temperature in linspace(t_min, t_crit, count) {
        match sample_point(db, temperature, fluid) {
            Ok(point) => points.push(point),
            Err(e) => {
                dropped += 1;
                log::debug!("dropping saturation sample at T={temperature} K: {e}");
            }
        }
    }
    log::info!(
        "sampled {} saturation points for {fluid} ({dropped} dropped, T={t_min:.2}..{t_crit:.2} K)",
        points.len()
    );
    Ok(SaturationCurve { points })
}
