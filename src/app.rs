use std::path::Path;

use thiserror::Error;

use crate::charts;
use crate::cli::Cli;
use crate::config::{self, Config, ConfigError};
use crate::i18n::{self, Translator};
use crate::report;
use crate::request::InputError;
use crate::thermo::{self, CoolPropDatabase, LookupError, PropertyDatabase, State};

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum AppError {
    /// 설정 저장/로드 오류
    #[error("config error: {0}")]
    Config(#[from] ConfigError),
    /// 모드에 필요한 입력 누락
    #[error(transparent)]
    Input(#[from] InputError),
    /// 물성 조회 실패
    #[error(transparent)]
    Lookup(#[from] LookupError),
    /// 선도 창 실행 오류
    #[error("chart window failed: {0}")]
    Chart(#[from] eframe::Error),
}

/// 한 번의 CLI 실행 결과.
#[derive(Debug, Clone)]
pub struct Outcome {
    pub fluid: String,
    pub state: State,
    pub report: String,
}

/// 인자와 설정으로 상태를 해석하고 보고서를 만든다.
pub fn resolve<D: PropertyDatabase + ?Sized>(
    cli: &Cli,
    cfg: &Config,
    db: &D,
    tr: &Translator,
) -> Result<Outcome, AppError> {
    let request = cli.to_request(&cfg.default_fluid);
    let query = request.validate()?;
    log::info!("resolving {} state of {}", request.mode, request.fluid);
    let state = query.resolve(db, &request.fluid)?;
    let report = report::render(&state, &request.fluid, &cfg.units, tr);
    Ok(Outcome {
        fluid: request.fluid,
        state,
        report,
    })
}

/// 설정 파일 경로(`--config`)가 있으면 그것을, 없으면 기본 경로를 쓴다.
pub fn load_config(path: Option<&Path>) -> Result<Config, ConfigError> {
    match path {
        Some(p) => config::load_or_create(p),
        None => config::load_or_default(),
    }
}

/// CLI 애플리케이션을 실행한다.
pub fn run(cli: &Cli) -> Result<(), AppError> {
    let cfg = load_config(cli.config.as_deref())?;
    let lang = i18n::resolve_language(cli.lang.as_deref(), Some(cfg.language.as_str()));
    let tr = Translator::new_with_pack(&lang, cfg.language_pack_dir.as_deref());
    let db = CoolPropDatabase::new();

    let outcome = resolve(cli, &cfg, &db, &tr)?;
    println!("\n{}", outcome.report);

    if cli.plot {
        let curve = thermo::sample(&db, &outcome.fluid, cfg.sample_count)?;
        charts::show_window(&outcome.state, &curve, &outcome.fluid, &cfg.units, &tr)?;
    }
    Ok(())
}
