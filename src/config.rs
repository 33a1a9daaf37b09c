use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

use crate::thermo::{DEFAULT_FLUID, DEFAULT_SAMPLE_COUNT};
use crate::units::{PressureUnit, SpecificEnergyUnit, TemperatureUnit};

/// 기본 설정 파일 경로.
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// 보고서/도표에 쓰는 표시 단위.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayUnits {
    pub pressure: PressureUnit,
    pub temperature: TemperatureUnit,
    pub specific_energy: SpecificEnergyUnit,
}

impl Default for DisplayUnits {
    fn default() -> Self {
        Self {
            pressure: PressureUnit::KiloPascal,
            temperature: TemperatureUnit::Celsius,
            specific_energy: SpecificEnergyUnit::KjPerKg,
        }
    }
}

/// 애플리케이션 설정을 표현한다. 빠진 항목은 기본값으로 채운다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// `--fluid` 미지정 시 쓰는 유체
    pub default_fluid: String,
    /// 포화곡선 샘플 수
    pub sample_count: usize,
    /// 언어 코드(auto/en/ko)
    pub language: String,
    /// 외부 언어팩 디렉터리
    pub language_pack_dir: Option<String>,
    /// 한글 폰트 파일(.ttf/.ttc). 없으면 assets/fonts와 시스템 폰트를 찾는다.
    pub font_path: Option<String>,
    pub units: DisplayUnits,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_fluid: DEFAULT_FLUID.to_string(),
            sample_count: DEFAULT_SAMPLE_COUNT,
            language: "auto".to_string(),
            language_pack_dir: None,
            font_path: None,
            units: DisplayUnits::default(),
        }
    }
}

/// 설정 로드/저장 시 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("config parse failed: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("config serialization failed: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// config.toml을 로드하거나 없으면 기본 설정을 생성한다.
pub fn load_or_default() -> Result<Config, ConfigError> {
    load_or_create(Path::new(DEFAULT_CONFIG_PATH))
}

/// 지정 경로의 설정을 로드한다. 파일이 없으면 기본값으로 새로 만든다.
pub fn load_or_create(path: &Path) -> Result<Config, ConfigError> {
    if path.exists() {
        let content = fs::read_to_string(path)?;
        let cfg = Config::from_toml_str(&content)?;
        log::debug!("loaded config from {}", path.display());
        Ok(cfg)
    } else {
        let cfg = Config::default();
        cfg.save_to(path)?;
        log::info!("wrote default config to {}", path.display());
        Ok(cfg)
    }
}

impl Config {
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// 설정을 config.toml에 저장한다.
    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(Path::new(DEFAULT_CONFIG_PATH))
    }

    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        fs::write(path, self.to_toml_string()?)?;
        Ok(())
    }
}
