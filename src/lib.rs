//! 물성 조회/상 판정/포화곡선 로직을 라이브러리로 분리하여 CLI와 GUI가 함께 쓴다.

pub mod app;
pub mod charts;
pub mod cli;
pub mod config;
pub mod fonts;
pub mod i18n;
pub mod report;
pub mod request;
pub mod thermo;
pub mod units;
