//! 명령줄 인자 정의. 모드별 필수 입력 검증은 `request` 모듈이 맡는다.

use std::path::PathBuf;

use clap::{ArgAction, Parser};

use crate::request::{Mode, StateRequest};

const EXAMPLES: &str = "Examples:
  thermo_property_explorer_cli --mode PT --P 10e5 --T 373.15 --fluid Water
  thermo_property_explorer_cli --mode Px --P 100e3 --x 0.5 --fluid Nitrogen --plot";

/// 열역학 물성 탐색기 CLI.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "thermo_property_explorer_cli",
    about = "Thermodynamic Property Explorer CLI",
    after_help = EXAMPLES
)]
pub struct Cli {
    /// Input mode
    #[arg(long, value_enum, default_value_t = Mode::PT)]
    pub mode: Mode,

    /// Pressure [Pa]
    #[arg(long = "P", value_name = "PA", visible_alias = "pressure")]
    pub pressure: Option<f64>,

    /// Temperature [K]
    #[arg(long = "T", value_name = "K", visible_alias = "temperature")]
    pub temperature: Option<f64>,

    /// Quality (0..1)
    #[arg(long = "x", value_name = "X", visible_alias = "quality")]
    pub quality: Option<f64>,

    /// Fluid name (Water, Nitrogen, CO2, Air, ...); defaults to the configured fluid
    #[arg(long)]
    pub fluid: Option<String>,

    /// Show T-s and h-s plots
    #[arg(long)]
    pub plot: bool,

    /// Config file (created with defaults when missing)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Report language: auto, en, ko
    #[arg(long)]
    pub lang: Option<String>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// 인자를 검증 전 요청으로 옮긴다. 유체 미지정 시 `default_fluid`를 쓴다.
    pub fn to_request(&self, default_fluid: &str) -> StateRequest {
        StateRequest {
            mode: self.mode,
            pressure: self.pressure,
            temperature: self.temperature,
            quality: self.quality,
            fluid: self
                .fluid
                .clone()
                .unwrap_or_else(|| default_fluid.to_string()),
        }
    }

    /// `-v` 횟수에 맞는 기본 로그 필터.
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}
