//! Visual tuning for the console window and result panels.

use eframe::egui;

pub const ACCENT: egui::Color32 = egui::Color32::from_rgb(64, 130, 180);

#[derive(Debug, Clone, Copy)]
pub struct PanelPalette {
    pub fill: egui::Color32,
    pub stroke: egui::Color32,
    pub heading: egui::Color32,
}

pub fn success_palette() -> PanelPalette {
    PanelPalette {
        fill: egui::Color32::from_rgb(36, 66, 44),
        stroke: egui::Color32::from_rgb(84, 140, 96),
        heading: egui::Color32::from_rgb(171, 226, 183),
    }
}

pub fn error_palette() -> PanelPalette {
    PanelPalette {
        fill: egui::Color32::from_rgb(111, 53, 53),
        stroke: egui::Color32::from_rgb(175, 96, 96),
        heading: egui::Color32::from_rgb(240, 180, 180),
    }
}

pub fn neutral_palette() -> PanelPalette {
    PanelPalette {
        fill: egui::Color32::from_rgb(32, 33, 38),
        stroke: egui::Color32::from_rgb(58, 60, 68),
        heading: egui::Color32::from_rgb(200, 202, 210),
    }
}

pub fn console_visuals() -> egui::Visuals {
    let mut visuals = egui::Visuals::dark();
    visuals.override_text_color = Some(egui::Color32::from_rgb(236, 237, 240));
    visuals.window_fill = egui::Color32::from_rgb(26, 26, 30);
    visuals.panel_fill = egui::Color32::from_rgb(26, 26, 30);
    visuals.faint_bg_color = egui::Color32::from_rgb(29, 29, 30);
    visuals.hyperlink_color = ACCENT;
    visuals.selection.bg_fill = ACCENT;
    visuals.widgets.active.bg_fill = ACCENT;
    visuals.widgets.hovered.bg_fill = ACCENT.gamma_multiply(0.85);

    let radius = 8.0;
    visuals.widgets.noninteractive.rounding = egui::Rounding::same(radius);
    visuals.widgets.inactive.rounding = egui::Rounding::same(radius);
    visuals.widgets.hovered.rounding = egui::Rounding::same(radius);
    visuals.widgets.active.rounding = egui::Rounding::same(radius);
    visuals.widgets.open.rounding = egui::Rounding::same(radius);

    visuals
}
