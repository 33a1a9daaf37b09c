use std::collections::HashMap;
use std::fs;
use std::path::Path;
use sys_locale::get_locale;

/// 문자열 키를 모아두는 네임스페이스.
pub mod keys {
    pub const REPORT_TITLE: &str = "report.title";
    pub const REPORT_PRESSURE: &str = "report.pressure";
    pub const REPORT_TEMPERATURE: &str = "report.temperature";
    pub const REPORT_ENTHALPY: &str = "report.enthalpy";
    pub const REPORT_ENTROPY: &str = "report.entropy";
    pub const REPORT_VOLUME: &str = "report.volume";
    pub const REPORT_QUALITY: &str = "report.quality";
    pub const REPORT_PHASE: &str = "report.phase";

    pub const CHART_TS_TITLE: &str = "chart.ts_title";
    pub const CHART_HS_TITLE: &str = "chart.hs_title";
    pub const CHART_ENTROPY_AXIS: &str = "chart.entropy_axis";
    pub const CHART_TEMPERATURE_AXIS: &str = "chart.temperature_axis";
    pub const CHART_ENTHALPY_AXIS: &str = "chart.enthalpy_axis";
    pub const CHART_SAT_LIQUID: &str = "chart.sat_liquid";
    pub const CHART_SAT_VAPOR: &str = "chart.sat_vapor";
    pub const CHART_STATE_POINT: &str = "chart.state_point";
    pub const CHART_WINDOW_TITLE: &str = "chart.window_title";

    pub const GUI_APP_TITLE: &str = "gui.app_title";
    pub const GUI_FLUID: &str = "gui.fluid";
    pub const GUI_MODE: &str = "gui.mode";
    pub const GUI_MODE_PT: &str = "gui.mode_pt";
    pub const GUI_MODE_PX: &str = "gui.mode_px";
    pub const GUI_MODE_TX: &str = "gui.mode_tx";
    pub const GUI_PRESSURE: &str = "gui.pressure";
    pub const GUI_TEMPERATURE: &str = "gui.temperature";
    pub const GUI_QUALITY: &str = "gui.quality";
    pub const GUI_STATE_HEADING: &str = "gui.state_heading";
    pub const GUI_SAVE_REPORT: &str = "gui.save_report";
    pub const GUI_SAVED: &str = "gui.saved";
    pub const GUI_SAVE_FAILED: &str = "gui.save_failed";
    pub const GUI_CURVE_FAILED: &str = "gui.curve_failed";
    pub const GUI_LANGUAGE: &str = "gui.language";

    pub const ERROR_PREFIX: &str = "error.prefix";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    Ko,
    En,
}

impl Language {
    fn from_code(code: &str) -> Self {
        if code.to_lowercase().starts_with("ko") {
            Language::Ko
        } else {
            Language::En
        }
    }
}

/// 런타임 언어 번들을 제공한다.
#[derive(Debug, Clone)]
pub struct Translator {
    lang: Language,
    overrides: Option<HashMap<String, String>>,
    built_in: HashMap<String, String>,
    fallback: HashMap<String, String>,
}

impl Translator {
    /// 언어 코드(ko/en)에 따라 번역기를 생성한다. 알 수 없는 코드는 en으로 폴백한다.
    pub fn new(lang_code: &str) -> Self {
        Self::new_with_pack(lang_code, None)
    }

    /// 언어 코드 + 언어팩 디렉터리(locales/ 등)를 받아서 번역기를 생성한다.
    /// 디렉터리가 없거나 파일이 없으면 내장 문자열만 사용한다.
    pub fn new_with_pack(lang_code: &str, pack_dir: Option<&str>) -> Self {
        let lang = Language::from_code(lang_code);
        let overrides = pack_dir.and_then(|dir| load_overrides(dir, lang_code));
        Self {
            lang,
            overrides,
            built_in: built_in_pack(lang),
            fallback: built_in_pack(Language::En),
        }
    }

    pub fn language(&self) -> Language {
        self.lang
    }

    /// 키를 조회해 문자열을 반환한다. 언어팩 → 내장(해당 언어) → 내장(영어) 순이며,
    /// 어디에도 없으면 키 자체를 돌려준다.
    pub fn t(&self, key: &str) -> String {
        self.overrides
            .as_ref()
            .and_then(|m| m.get(key))
            .or_else(|| self.built_in.get(key))
            .or_else(|| self.fallback.get(key))
            .cloned()
            .unwrap_or_else(|| key.to_string())
    }

    /// `{name}` 자리표시자를 채운 번역을 반환한다.
    pub fn fill(&self, key: &str, vars: &[(&str, &str)]) -> String {
        let mut out = self.t(key);
        for (k, v) in vars {
            out = out.replace(&format!("{{{k}}}"), v);
        }
        out
    }
}

/// CLI 플래그/설정/시스템 순으로 언어 코드를 결정한다.
pub fn resolve_language(cli_arg: Option<&str>, config_lang: Option<&str>) -> String {
    cli_arg
        .and_then(normalize_lang)
        .or_else(|| config_lang.and_then(normalize_lang))
        .or_else(detect_system_language)
        .unwrap_or_else(|| "en".to_string())
}

fn normalize_lang(code: &str) -> Option<String> {
    let c = code.trim().to_lowercase();
    match c.as_str() {
        "auto" | "" => None,
        other if other.starts_with("ko") => Some("ko".into()),
        other if other.starts_with("en") => Some("en".into()),
        _ => None,
    }
}

fn normalize_locale_string(loc: &str) -> Option<String> {
    let lang = loc
        .split(['.', '_', '-'])
        .next()
        .unwrap_or_default()
        .to_lowercase();
    match lang.as_str() {
        "ko" => Some("ko".into()),
        "en" => Some("en".into()),
        _ => None,
    }
}

/// 시스템 로케일에서 언어를 추정한다.
pub fn detect_system_language() -> Option<String> {
    if let Some(lang) = get_locale().as_deref().and_then(normalize_locale_string) {
        return Some(lang);
    }
    ["LC_ALL", "LANG"]
        .iter()
        .filter_map(|var| std::env::var(var).ok())
        .find_map(|v| normalize_locale_string(&v))
}

/// TOML 기반 언어팩을 로드한다. 형식: key = "value" 로 구성된 (중첩 가능한) 맵.
fn load_overrides(dir: &str, lang: &str) -> Option<HashMap<String, String>> {
    let try_load = |code: &str| -> Option<HashMap<String, String>> {
        let path = Path::new(dir).join(format!("{code}.toml"));
        let content = fs::read_to_string(path).ok()?;
        parse_toml_to_map(&content)
    };

    // 1) full code (e.g., en-us)
    if let Some(map) = try_load(lang) {
        return Some(map);
    }
    // 2) base code (e.g., en)
    if let Some((base, _)) = lang.split_once(['-', '_']) {
        if let Some(map) = try_load(base) {
            return Some(map);
        }
    }
    None
}

fn parse_toml_to_map(src: &str) -> Option<HashMap<String, String>> {
    let value: toml::Value = toml::from_str(src).ok()?;
    let table = value.as_table()?;
    let mut map = HashMap::new();

    fn walk(prefix: &str, val: &toml::Value, out: &mut HashMap<String, String>) {
        match val {
            toml::Value::String(s) => {
                out.insert(prefix.to_string(), s.to_string());
            }
            toml::Value::Table(t) => {
                for (k, v) in t {
                    let key = if prefix.is_empty() {
                        k.clone()
                    } else {
                        format!("{prefix}.{k}")
                    };
                    walk(&key, v, out);
                }
            }
            _ => {}
        }
    }

    for (k, v) in table {
        walk(k, v, &mut map);
    }

    if map.is_empty() {
        None
    } else {
        Some(map)
    }
}

/// 내장 언어팩(파일이 없어도 동작하도록 빌드 시 포함).
fn built_in_pack(lang: Language) -> HashMap<String, String> {
    let src = match lang {
        Language::En => include_str!("../locales/en-us.toml"),
        Language::Ko => include_str!("../locales/ko-kr.toml"),
    };
    parse_toml_to_map(src).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn korean_pack_is_built_in() {
        let tr = Translator::new("ko-KR");
        assert_eq!(tr.language(), Language::Ko);
        assert_eq!(tr.t(keys::REPORT_PHASE), "상");
        assert_eq!(tr.fill(keys::REPORT_TITLE, &[("fluid", "Water")]), "Water 상태:");
    }

    #[test]
    fn unknown_key_falls_back_to_key() {
        let tr = Translator::new("en");
        assert_eq!(tr.t("no.such.key"), "no.such.key");
        assert_eq!(tr.fill(keys::CHART_SAT_VAPOR, &[("fluid", "CO2")]), "Sat. Vapor (CO2)");
    }

    #[test]
    fn cli_flag_wins_over_config() {
        assert_eq!(resolve_language(Some("ko"), Some("en")), "ko");
        assert_eq!(resolve_language(Some("auto"), Some("en-us")), "en");
    }

    #[test]
    fn locale_strings_are_normalized() {
        assert_eq!(normalize_locale_string("ko_KR.UTF-8").as_deref(), Some("ko"));
        assert_eq!(normalize_locale_string("fr-FR"), None);
    }

    #[test]
    fn nested_tables_flatten_to_dotted_keys() {
        let map = parse_toml_to_map("[a]\nb = \"c\"\n[a.d]\ne = \"f\"\n").unwrap();
        assert_eq!(map.get("a.b").map(String::as_str), Some("c"));
        assert_eq!(map.get("a.d.e").map(String::as_str), Some("f"));
    }
}
