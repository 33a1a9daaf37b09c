//! T-s, h-s 선도. 데이터 준비(단위 환산/라벨)와 egui_plot 렌더링을 분리한다.

use eframe::egui;
use egui_plot::{Legend, Line, Plot, PlotPoint, PlotPoints, Points, Text};

use crate::config::DisplayUnits;
use crate::i18n::{keys, Translator};
use crate::thermo::{SaturationCurve, State};
use crate::units::{specific_energy, temperature};

/// 상태점 옆에 붙이는 주석.
pub const STATE_LABEL: &str = "state";

/// 선도 종류.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagramKind {
    /// 온도-엔트로피
    TemperatureEntropy,
    /// 엔탈피-엔트로피
    EnthalpyEntropy,
}

impl DiagramKind {
    fn plot_id(self) -> &'static str {
        match self {
            DiagramKind::TemperatureEntropy => "ts_diagram",
            DiagramKind::EnthalpyEntropy => "hs_diagram",
        }
    }
}

/// 렌더링 준비가 끝난 선도 데이터(표시 단위).
#[derive(Debug, Clone, PartialEq)]
pub struct Diagram {
    pub kind: DiagramKind,
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub liquid_label: String,
    pub vapor_label: String,
    pub point_label: String,
    pub liquid: Vec<[f64; 2]>,
    pub vapor: Vec<[f64; 2]>,
    pub point: Option<[f64; 2]>,
}

/// 포화곡선과 상태점을 표시 단위로 환산해 선도 데이터를 만든다.
pub fn build_diagram(
    kind: DiagramKind,
    curve: &SaturationCurve,
    state: Option<&State>,
    fluid: &str,
    units: &DisplayUnits,
    tr: &Translator,
) -> Diagram {
    let energy = units.specific_energy;
    let s = |v: f64| specific_energy::entropy_from_si(v, energy);
    let h = |v: f64| specific_energy::enthalpy_from_si(v, energy);
    let t = |v: f64| temperature::from_kelvin(v, units.temperature);

    let (liquid, vapor): (Vec<[f64; 2]>, Vec<[f64; 2]>) = match kind {
        DiagramKind::TemperatureEntropy => curve
            .iter()
            .map(|p| {
                (
                    [s(p.liquid_entropy), t(p.temperature)],
                    [s(p.vapor_entropy), t(p.temperature)],
                )
            })
            .unzip(),
        DiagramKind::EnthalpyEntropy => curve
            .iter()
            .map(|p| {
                (
                    [s(p.liquid_entropy), h(p.liquid_enthalpy)],
                    [s(p.vapor_entropy), h(p.vapor_enthalpy)],
                )
            })
            .unzip(),
    };
    let point = state.map(|st| match kind {
        DiagramKind::TemperatureEntropy => [s(st.specific_entropy()), t(st.temperature())],
        DiagramKind::EnthalpyEntropy => [s(st.specific_entropy()), h(st.specific_enthalpy())],
    });

    let fluid_var = [("fluid", fluid)];
    let (title_key, y_label) = match kind {
        DiagramKind::TemperatureEntropy => (
            keys::CHART_TS_TITLE,
            tr.fill(keys::CHART_TEMPERATURE_AXIS, &[("unit", units.temperature.symbol())]),
        ),
        DiagramKind::EnthalpyEntropy => (
            keys::CHART_HS_TITLE,
            tr.fill(keys::CHART_ENTHALPY_AXIS, &[("unit", energy.enthalpy_symbol())]),
        ),
    };

    Diagram {
        kind,
        title: tr.fill(title_key, &fluid_var),
        x_label: tr.fill(keys::CHART_ENTROPY_AXIS, &[("unit", energy.entropy_symbol())]),
        y_label,
        liquid_label: tr.fill(keys::CHART_SAT_LIQUID, &fluid_var),
        vapor_label: tr.fill(keys::CHART_SAT_VAPOR, &fluid_var),
        point_label: tr.fill(keys::CHART_STATE_POINT, &fluid_var),
        liquid,
        vapor,
        point,
    }
}

/// 선도 하나를 그린다. 제목, 범례, 격자, 상태점 주석을 포함한다.
pub fn draw_diagram(ui: &mut egui::Ui, diagram: &Diagram, height: f32) {
    ui.vertical(|ui| {
        ui.strong(diagram.title.as_str());
        Plot::new(diagram.kind.plot_id())
            .legend(Legend::default())
            .x_axis_label(diagram.x_label.clone())
            .y_axis_label(diagram.y_label.clone())
            .show_grid(true)
            .height(height)
            .show(ui, |plot_ui| {
                let liquid: PlotPoints = diagram.liquid.clone().into();
                plot_ui.line(Line::new(liquid).name(&diagram.liquid_label));
                let vapor: PlotPoints = diagram.vapor.clone().into();
                plot_ui.line(Line::new(vapor).name(&diagram.vapor_label));
                if let Some([x, y]) = diagram.point {
                    plot_ui.points(
                        Points::new(vec![[x, y]])
                            .radius(5.0)
                            .name(&diagram.point_label),
                    );
                    plot_ui.text(
                        Text::new(PlotPoint::new(x, y), format!("  {STATE_LABEL}"))
                            .anchor(egui::Align2::LEFT_CENTER),
                    );
                }
            });
    });
}

/// 두 선도를 좌우로 나란히 그린다.
pub fn draw_pair(ui: &mut egui::Ui, ts: &Diagram, hs: &Diagram, height: f32) {
    ui.columns(2, |cols| {
        draw_diagram(&mut cols[0], ts, height);
        draw_diagram(&mut cols[1], hs, height);
    });
}

/// CLI `--plot`에서 띄우는 선도 전용 창.
struct ChartWindow {
    ts: Diagram,
    hs: Diagram,
}

impl eframe::App for ChartWindow {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            let height = (ui.available_height() - 40.0).max(200.0);
            draw_pair(ui, &self.ts, &self.hs, height);
        });
    }
}

/// 상태와 포화곡선을 담은 선도 창을 띄우고 창이 닫힐 때까지 블록한다.
pub fn show_window(
    state: &State,
    curve: &SaturationCurve,
    fluid: &str,
    units: &DisplayUnits,
    tr: &Translator,
) -> Result<(), eframe::Error> {
    let ts = build_diagram(DiagramKind::TemperatureEntropy, curve, Some(state), fluid, units, tr);
    let hs = build_diagram(DiagramKind::EnthalpyEntropy, curve, Some(state), fluid, units, tr);
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([1100.0, 520.0]),
        ..Default::default()
    };
    eframe::run_native(
        &tr.t(keys::CHART_WINDOW_TITLE),
        options,
        Box::new(move |_cc| Box::new(ChartWindow { ts, hs })),
    )
}
