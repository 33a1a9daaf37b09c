use std::process::ExitCode;

use clap::{error::ErrorKind, CommandFactory, Parser};
use thermo_property_explorer::{
    app::{self, AppError},
    cli::Cli,
};

/// 프로그램의 엔트리 포인트. 인자를 해석한 뒤 CLI 애플리케이션을 실행한다.
fn main() -> ExitCode {
    let cli = Cli::parse();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(cli.log_level()))
        .init();

    match app::run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        // 모드별 필수 입력 누락은 clap 사용법 오류로 보고한다.
        Err(AppError::Input(e)) => Cli::command()
            .error(ErrorKind::MissingRequiredArgument, e)
            .exit(),
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
