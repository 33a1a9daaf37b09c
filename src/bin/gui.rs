#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

//! eframe/egui 기반 데스크톱 입력 폼. 유체/모드/입력을 바꾸면 상태와 선도를 다시 계산한다.

use eframe::{egui, App, Frame};
use image::GenericImageView;
use rfd::FileDialog;
use std::{env, fs, path::Path};
use thermo_property_explorer::{
    charts::{self, DiagramKind},
    config, fonts, i18n,
    i18n::keys,
    report,
    request::{Mode, StateRequest},
    thermo::{self, CoolPropDatabase, SaturationCurve, State, FLUID_CHOICES},
    units::{pressure, temperature, PressureUnit, TemperatureUnit},
};

fn main() -> Result<(), eframe::Error> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    // CLI 언어 옵션 처리: --lang xx 또는 --lang=xx (xx: auto/en/ko)
    let mut cli_lang: Option<String> = None;
    let args: Vec<String> = env::args().collect();
    let mut i = 1;
    while i < args.len() {
        let a = &args[i];
        if let Some(val) = a.strip_prefix("--lang=") {
            cli_lang = Some(val.to_string());
        } else if (a == "--lang" || a == "-L") && i + 1 < args.len() {
            cli_lang = Some(args[i + 1].clone());
            i += 1;
        }
        i += 1;
    }

    let app_cfg = match config::load_or_default() {
        Ok(cfg) => cfg,
        Err(e) => {
            log::warn!("using default config: {e}");
            config::Config::default()
        }
    };
    let lang = i18n::resolve_language(cli_lang.as_deref(), Some(app_cfg.language.as_str()));

    let mut viewport = egui::ViewportBuilder::default().with_inner_size([1200.0, 820.0]);
    if let Some(icon) = load_app_icon() {
        viewport = viewport.with_icon(icon);
    }
    let options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };
    let title = i18n::Translator::new(&lang).t(keys::GUI_APP_TITLE);
    eframe::run_native(
        &title,
        options,
        Box::new(move |cc| {
            let font = fonts::setup_fonts(&cc.egui_ctx, app_cfg.font_path.as_deref());
            let korean_glyphs = match font {
                Ok(_) => true,
                Err(e) => {
                    log::warn!("font error: {e}");
                    false
                }
            };
            Box::new(ExplorerApp::new(app_cfg, &lang, korean_glyphs))
        }),
    )
}

fn load_app_icon() -> Option<egui::IconData> {
    let search = ["icon.png", "assets/icon.png", "../assets/icon.png"];
    let path = search.iter().find(|p| Path::new(*p).exists())?;
    let bytes = fs::read(path).ok()?;
    let img = image::load_from_memory(&bytes).ok()?;
    let rgba = img.to_rgba8();
    let (w, h) = img.dimensions();
    Some(egui::IconData {
        rgba: rgba.into_raw(),
        width: w,
        height: h,
    })
}

struct ExplorerApp {
    config: config::Config,
    tr: i18n::Translator,
    lang_input: String,
    korean_glyphs: bool,
    db: CoolPropDatabase,
    // 입력 폼
    fluid: String,
    mode: Mode,
    pressure_kpa: f64,
    temperature_c: f64,
    quality: f64,
    // 계산 결과
    last_inputs: Option<StateRequest>,
    state: Option<Result<State, String>>,
    curve_fluid: Option<String>,
    curve: Result<SaturationCurve, String>,
    save_status: Option<String>,
}

impl ExplorerApp {
    fn new(config: config::Config, lang: &str, korean_glyphs: bool) -> Self {
        let tr = fonts::translator_for(lang, config.language_pack_dir.as_deref(), korean_glyphs);
        let fluid = config.default_fluid.clone();
        Self {
            lang_input: config.language.clone(),
            korean_glyphs,
            config,
            tr,
            db: CoolPropDatabase::new(),
            fluid,
            mode: Mode::PT,
            pressure_kpa: 101.325,
            temperature_c: 100.0,
            quality: 0.0,
            last_inputs: None,
            state: None,
            curve_fluid: None,
            curve: Ok(SaturationCurve::default()),
            save_status: None,
        }
    }

    /// 폼 값을 SI 요청으로 바꾼다. 모드에 쓰이지 않는 값은 비워 둔다.
    fn current_inputs(&self) -> StateRequest {
        let p = Some(pressure::to_pascal(self.pressure_kpa, PressureUnit::KiloPascal));
        let t = Some(temperature::to_kelvin(self.temperature_c, TemperatureUnit::Celsius));
        let x = Some(self.quality);
        let (pressure, temperature, quality) = match self.mode {
            Mode::PT => (p, t, None),
            Mode::Px => (p, None, x),
            Mode::Tx => (None, t, x),
        };
        StateRequest {
            mode: self.mode,
            pressure,
            temperature,
            quality,
            fluid: self.fluid.clone(),
        }
    }

    /// 입력이 바뀐 경우에만 상태/포화곡선을 다시 구한다.
    fn refresh(&mut self) {
        let inputs = self.current_inputs();
        if self.last_inputs.as_ref() != Some(&inputs) {
            let result = inputs
                .validate()
                .map_err(|e| e.to_string())
                .and_then(|q| q.resolve(&self.db, &inputs.fluid).map_err(|e| e.to_string()));
            if let Err(e) = &result {
                log::info!("state resolution failed: {e}");
            }
            self.state = Some(result);
            self.save_status = None;
            self.last_inputs = Some(inputs);
        }
        if self.curve_fluid.as_deref() != Some(self.fluid.as_str()) {
            self.curve = thermo::sample(&self.db, &self.fluid, self.config.sample_count)
                .map_err(|e| e.to_string());
            self.curve_fluid = Some(self.fluid.clone());
        }
    }

    fn ui_inputs(&mut self, ui: &mut egui::Ui) {
        let tr = self.tr.clone();
        egui::Frame::group(ui.style()).show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.label(tr.t(keys::GUI_FLUID));
                egui::ComboBox::from_id_source("fluid_choice")
                    .selected_text(self.fluid.as_str())
                    .show_ui(ui, |ui| {
                        for name in FLUID_CHOICES {
                            ui.selectable_value(&mut self.fluid, name.to_string(), name);
                        }
                    });
            });
            ui.horizontal(|ui| {
                ui.label(tr.t(keys::GUI_MODE));
                ui.radio_value(&mut self.mode, Mode::PT, tr.t(keys::GUI_MODE_PT));
                ui.radio_value(&mut self.mode, Mode::Px, tr.t(keys::GUI_MODE_PX));
                ui.radio_value(&mut self.mode, Mode::Tx, tr.t(keys::GUI_MODE_TX));
            });
            ui.add_space(6.0);
            if matches!(self.mode, Mode::PT | Mode::Px) {
                ui.horizontal(|ui| {
                    ui.label(tr.t(keys::GUI_PRESSURE));
                    ui.add(
                        egui::DragValue::new(&mut self.pressure_kpa)
                            .speed(1.0)
                            .clamp_range(0.0..=f64::MAX)
                            .max_decimals(3),
                    );
                });
            }
            if matches!(self.mode, Mode::PT | Mode::Tx) {
                ui.horizontal(|ui| {
                    ui.label(tr.t(keys::GUI_TEMPERATURE));
                    ui.add(
                        egui::DragValue::new(&mut self.temperature_c)
                            .speed(0.5)
                            .max_decimals(3),
                    );
                });
            }
            if matches!(self.mode, Mode::Px | Mode::Tx) {
                ui.horizontal(|ui| {
                    ui.label(tr.t(keys::GUI_QUALITY));
                    ui.add(egui::Slider::new(&mut self.quality, 0.0..=1.0));
                });
            }
        });
    }

    fn ui_results(&mut self, ui: &mut egui::Ui) {
        let tr = self.tr.clone();
        let state = match &self.state {
            Some(Ok(state)) => state.clone(),
            Some(Err(msg)) => {
                ui.colored_label(
                    egui::Color32::RED,
                    format!("{}: {msg}", tr.t(keys::ERROR_PREFIX)),
                );
                return;
            }
            None => return,
        };

        ui.heading(tr.fill(keys::GUI_STATE_HEADING, &[("fluid", self.fluid.as_str())]));
        let text = report::render(&state, &self.fluid, &self.config.units, &tr);
        ui.monospace(text.as_str());
        ui.horizontal(|ui| {
            if ui.button(tr.t(keys::GUI_SAVE_REPORT)).clicked() {
                self.save_status = save_report(&text, &tr);
            }
            if let Some(msg) = &self.save_status {
                ui.label(msg);
            }
        });
        ui.separator();

        match &self.curve {
            Ok(curve) => {
                let units = &self.config.units;
                let ts = charts::build_diagram(
                    DiagramKind::TemperatureEntropy,
                    curve,
                    Some(&state),
                    &self.fluid,
                    units,
                    &tr,
                );
                let hs = charts::build_diagram(
                    DiagramKind::EnthalpyEntropy,
                    curve,
                    Some(&state),
                    &self.fluid,
                    units,
                    &tr,
                );
                let height = (ui.available_height() - 30.0).max(280.0);
                charts::draw_pair(ui, &ts, &hs, height);
            }
            Err(msg) => {
                ui.colored_label(
                    egui::Color32::YELLOW,
                    tr.fill(keys::GUI_CURVE_FAILED, &[("error", msg.as_str())]),
                );
            }
        }
    }
}

/// 저장 대화상자를 띄워 보고서를 파일로 쓴다. 취소하면 None.
fn save_report(text: &str, tr: &i18n::Translator) -> Option<String> {
    let path = FileDialog::new()
        .set_file_name("state.txt")
        .add_filter("Text", &["txt"])
        .save_file()?;
    let shown = path.display().to_string();
    Some(match fs::write(&path, text) {
        Ok(()) => tr.fill(keys::GUI_SAVED, &[("path", shown.as_str())]),
        Err(e) => tr.fill(keys::GUI_SAVE_FAILED, &[("error", e.to_string().as_str())]),
    })
}

impl App for ExplorerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        let tr = self.tr.clone();

        // 상단 바
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading(tr.t(keys::GUI_APP_TITLE));
                ui.separator();
                ui.label(tr.t(keys::GUI_LANGUAGE));
                let before = self.lang_input.clone();
                egui::ComboBox::from_id_source("lang_choice")
                    .selected_text(self.lang_input.as_str())
                    .show_ui(ui, |ui| {
                        ui.selectable_value(&mut self.lang_input, "auto".into(), "auto");
                        ui.selectable_value(&mut self.lang_input, "en".into(), "English");
                        let korean = if self.korean_glyphs { "한국어" } else { "Korean" };
                        ui.selectable_value(&mut self.lang_input, "ko".into(), korean);
                    });
                if self.lang_input != before {
                    self.config.language = self.lang_input.clone();
                    let resolved = i18n::resolve_language(None, Some(self.config.language.as_str()));
                    self.tr = fonts::translator_for(
                        &resolved,
                        self.config.language_pack_dir.as_deref(),
                        self.korean_glyphs,
                    );
                    if let Err(e) = self.config.save() {
                        log::warn!("could not save language choice: {e}");
                    }
                }
            });
        });

        egui::SidePanel::left("inputs")
            .resizable(true)
            .min_width(260.0)
            .default_width(320.0)
            .show(ctx, |ui| {
                self.ui_inputs(ui);
            });

        self.refresh();

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false; 2])
                .show(ui, |ui| self.ui_results(ui));
        });
    }
}
