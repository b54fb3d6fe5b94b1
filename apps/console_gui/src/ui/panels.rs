//! Display regions: typed render state and panel drawing.

use eframe::egui;
use shared::protocol::SearchResults;

use crate::ui::theme::{self, PanelPalette};

const LOADING_TEXT: &str = "Making API request...";

const SEARCH_TROUBLESHOOTING: &[&str] = &[
    "Spreadsheet credentials file not found or unreadable",
    "No internet connection",
    "Invalid spreadsheet id or permissions",
    "No URLs present in the source column",
];

#[derive(Debug, Clone)]
pub enum ApiPanel {
    HelloSuccess {
        message: String,
        status: String,
        rendered_at: String,
    },
    EchoSuccess {
        status: String,
        received_pretty: String,
        rendered_at: String,
    },
    Failure {
        heading: &'static str,
        message: String,
        rendered_at: String,
    },
}

/// Render state of the shared hello/echo display region. Always neutral or
/// loading until a completion arrives, then exactly one panel.
#[derive(Debug, Clone, Default)]
pub enum ApiRegion {
    #[default]
    Idle,
    Loading,
    Showing(ApiPanel),
}

#[derive(Debug, Clone)]
pub struct SearchSuccessPanel {
    pub message: String,
    pub results: SearchResults,
    pub completed_at: String,
}

#[derive(Debug, Clone)]
pub enum SearchPanel {
    Success(SearchSuccessPanel),
    ValidationError { message: String },
    Failure { message: String, rendered_at: String },
}

#[derive(Debug, Clone, Default)]
pub enum SearchRegion {
    #[default]
    Idle,
    Loading,
    Showing(SearchPanel),
}

pub fn echo_received_pretty(received: &serde_json::Value) -> String {
    serde_json::to_string_pretty(received).unwrap_or_else(|_| received.to_string())
}

fn panel_frame(palette: PanelPalette) -> egui::Frame {
    egui::Frame::none()
        .fill(palette.fill)
        .stroke(egui::Stroke::new(1.0, palette.stroke))
        .rounding(8.0)
        .inner_margin(egui::Margin::symmetric(12.0, 10.0))
}

fn panel_heading(ui: &mut egui::Ui, palette: PanelPalette, text: &str) {
    ui.label(egui::RichText::new(text).strong().color(palette.heading));
}

fn labeled_line(ui: &mut egui::Ui, label: &str, value: &str) {
    ui.horizontal_wrapped(|ui| {
        ui.label(egui::RichText::new(label).strong());
        ui.label(value);
    });
}

fn badge(ui: &mut egui::Ui, label: &str, value: &str) {
    ui.vertical_centered(|ui| {
        ui.small(label);
        ui.label(egui::RichText::new(value).strong().size(16.0));
    });
}

pub fn show_api_region(ui: &mut egui::Ui, region: &ApiRegion) {
    match region {
        ApiRegion::Idle => {
            panel_frame(theme::neutral_palette()).show(ui, |ui| {
                ui.weak("Use the buttons above to exercise the backend API.");
            });
        }
        ApiRegion::Loading => {
            panel_frame(theme::neutral_palette()).show(ui, |ui| {
                ui.horizontal(|ui| {
                    ui.add(egui::Spinner::new());
                    ui.label(LOADING_TEXT);
                });
            });
        }
        ApiRegion::Showing(panel) => show_api_panel(ui, panel),
    }
}

fn show_api_panel(ui: &mut egui::Ui, panel: &ApiPanel) {
    match panel {
        ApiPanel::HelloSuccess {
            message,
            status,
            rendered_at,
        } => {
            let palette = theme::success_palette();
            panel_frame(palette).show(ui, |ui| {
                panel_heading(ui, palette, "Success");
                labeled_line(ui, "Message:", message);
                labeled_line(ui, "Status:", status);
                ui.small(format!("Response received at {rendered_at}"));
            });
        }
        ApiPanel::EchoSuccess {
            status,
            received_pretty,
            rendered_at,
        } => {
            let palette = theme::success_palette();
            panel_frame(palette).show(ui, |ui| {
                panel_heading(ui, palette, "Echo success");
                labeled_line(ui, "Status:", status);
                ui.label(egui::RichText::new("Received data:").strong());
                egui::Frame::none()
                    .fill(ui.visuals().extreme_bg_color)
                    .rounding(6.0)
                    .inner_margin(egui::Margin::symmetric(8.0, 6.0))
                    .show(ui, |ui| {
                        ui.monospace(received_pretty);
                    });
                ui.small(format!("Response received at {rendered_at}"));
            });
        }
        ApiPanel::Failure {
            heading,
            message,
            rendered_at,
        } => {
            let palette = theme::error_palette();
            panel_frame(palette).show(ui, |ui| {
                panel_heading(ui, palette, heading);
                labeled_line(ui, "Error:", message);
                ui.small(format!("Error occurred at {rendered_at}"));
            });
        }
    }
}

pub fn show_search_region(ui: &mut egui::Ui, region: &SearchRegion) {
    match region {
        // The progress indicator for an in-flight search is drawn by the
        // app next to the trigger, not inside the results region.
        SearchRegion::Idle | SearchRegion::Loading => {}
        SearchRegion::Showing(panel) => show_search_panel(ui, panel),
    }
}

fn show_search_panel(ui: &mut egui::Ui, panel: &SearchPanel) {
    match panel {
        SearchPanel::Success(success) => {
            let palette = theme::success_palette();
            panel_frame(palette).show(ui, |ui| {
                panel_heading(ui, palette, "Search completed");
                labeled_line(ui, "Message:", &success.message);
                ui.add_space(4.0);
                ui.columns(3, |columns| {
                    badge(&mut columns[0], "Keyword searched", &success.results.keyword);
                    badge(
                        &mut columns[1],
                        "Total URLs",
                        &success.results.total_urls.to_string(),
                    );
                    badge(
                        &mut columns[2],
                        "Matches found",
                        &success.results.matches_found.to_string(),
                    );
                });
                if let Some(rate) = success.results.success_rate {
                    ui.small(format!("Match rate: {rate:.1}%"));
                }
                if !success.results.urls_with_keyword.is_empty() {
                    ui.add_space(4.0);
                    ui.label(egui::RichText::new("URLs with keyword:").strong());
                    for url in &success.results.urls_with_keyword {
                        ui.hyperlink(url);
                    }
                }
                ui.add_space(4.0);
                ui.small(format!(
                    "Results have been written back to the spreadsheet. Search completed at {}",
                    success.completed_at
                ));
            });
        }
        SearchPanel::ValidationError { message } => {
            let palette = theme::error_palette();
            panel_frame(palette).show(ui, |ui| {
                panel_heading(ui, palette, "Validation error");
                ui.label(message);
            });
        }
        SearchPanel::Failure {
            message,
            rendered_at,
        } => {
            let palette = theme::error_palette();
            panel_frame(palette).show(ui, |ui| {
                panel_heading(ui, palette, "Search error");
                labeled_line(ui, "Error:", message);
                ui.add_space(4.0);
                ui.label(egui::RichText::new("Common issues:").strong());
                for hint in SEARCH_TROUBLESHOOTING {
                    ui.label(format!("• {hint}"));
                }
                ui.small(format!("Error occurred at {rendered_at}"));
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn echo_payload_is_pretty_printed_verbatim() {
        let received = json!({ "message": "hi", "randomNumber": 7 });
        let pretty = echo_received_pretty(&received);
        assert_eq!(
            pretty,
            serde_json::to_string_pretty(&received).expect("pretty")
        );
        assert!(pretty.contains("\"randomNumber\": 7"));
    }

    #[test]
    fn regions_start_idle() {
        assert!(matches!(ApiRegion::default(), ApiRegion::Idle));
        assert!(matches!(SearchRegion::default(), SearchRegion::Idle));
    }
}
