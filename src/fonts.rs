//! 한글 표시용 폰트 탐색과 egui 등록. egui 기본 폰트에는 한글 글리프가 없다.

use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use eframe::egui;
use thiserror::Error;

use crate::i18n::{Language, Translator};

/// egui에 등록하는 폰트 이름.
pub const KOREAN_FONT_NAME: &str = "korean_font";

/// 프로젝트 assets/fonts 아래에서 찾는 파일.
const ASSET_FONTS: [&str; 4] = [
    "malgun.ttf",
    "NanumGothic.ttf",
    "NotoSansKR-Regular.ttf",
    "NotoSansCJK-Regular.ttc",
];

const WINDOWS_FONTS: [&str; 3] = ["malgun.ttf", "gulim.ttc", "batang.ttc"];

const SYSTEM_FONTS: [&str; 6] = [
    "/System/Library/Fonts/AppleSDGothicNeo.ttc",
    "/Library/Fonts/NanumGothic.ttf",
    "/usr/share/fonts/truetype/nanum/NanumGothic.ttf",
    "/usr/share/fonts/opentype/noto/NotoSansCJK-Regular.ttc",
    "/usr/share/fonts/noto-cjk/NotoSansCJK-Regular.ttc",
    "/usr/share/fonts/google-noto-cjk/NotoSansCJK-Regular.ttc",
];

#[derive(Debug, Error)]
pub enum FontError {
    #[error("no Hangul font found; set font_path in config.toml")]
    NotFound,
    #[error("failed to read font file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// 탐색 순서: 사용자 지정 경로, assets/fonts, Windows 폰트 폴더, macOS/Linux 시스템 폰트.
pub fn candidate_paths(user_font: Option<&str>) -> Vec<PathBuf> {
    let mut out: Vec<PathBuf> = user_font.map(PathBuf::from).into_iter().collect();
    let assets = Path::new("assets").join("fonts");
    out.extend(ASSET_FONTS.iter().map(|name| assets.join(name)));
    if let Some(windir) = env::var_os("WINDIR") {
        let fonts = Path::new(&windir).join("Fonts");
        out.extend(WINDOWS_FONTS.iter().map(|name| fonts.join(name)));
    }
    out.extend(SYSTEM_FONTS.iter().map(PathBuf::from));
    out
}

/// 후보 중 처음으로 존재하는 파일을 읽는다.
pub fn load_first(candidates: &[PathBuf]) -> Result<(PathBuf, Vec<u8>), FontError> {
    let path = candidates
        .iter()
        .find(|p| p.is_file())
        .ok_or(FontError::NotFound)?;
    let bytes = fs::read(path).map_err(|source| FontError::Io {
        path: path.clone(),
        source,
    })?;
    Ok((path.clone(), bytes))
}

/// 폰트를 비례/고정폭 패밀리의 맨 앞에 넣는다. 기본 폰트는 라틴 문자용으로 남는다.
pub fn with_font(
    mut fonts: egui::FontDefinitions,
    name: &str,
    bytes: Vec<u8>,
) -> egui::FontDefinitions {
    fonts
        .font_data
        .insert(name.to_string(), egui::FontData::from_owned(bytes));
    for family in [egui::FontFamily::Proportional, egui::FontFamily::Monospace] {
        fonts
            .families
            .entry(family)
            .or_default()
            .insert(0, name.to_string());
    }
    fonts
}

/// 한글 폰트를 찾아 컨텍스트에 등록하고 사용한 경로를 돌려준다.
pub fn setup_fonts(
    ctx: &egui::Context,
    user_font: Option<&str>,
) -> Result<PathBuf, FontError> {
    let (path, bytes) = load_first(&candidate_paths(user_font))?;
    ctx.set_fonts(with_font(
        egui::FontDefinitions::default(),
        KOREAN_FONT_NAME,
        bytes,
    ));
    log::info!("using Hangul font {}", path.display());
    Ok(path)
}

/// 한글 폰트가 없으면 한국어 대신 영어 번역기를 만든다.
pub fn translator_for(lang: &str, pack_dir: Option<&str>, korean_glyphs: bool) -> Translator {
    let tr = Translator::new_with_pack(lang, pack_dir);
    if tr.language() == Language::Ko && !korean_glyphs {
        log::warn!("no Hangul font available, showing English labels");
        return Translator::new_with_pack("en", pack_dir);
    }
    tr
}
