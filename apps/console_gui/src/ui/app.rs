//! App shell: control state, event drain, and per-frame composition.

use std::time::Duration;

use chrono::Local;
use crossbeam_channel::{Receiver, Sender};
use eframe::egui;

use client_core::build_search_request;
use shared::domain::KeywordSource;
use shared::protocol::SearchResults;

use crate::backend_bridge::commands::BackendCommand;
use crate::config::StartupConfig;
use crate::controller::events::{ConsoleAction, UiEvent};
use crate::controller::orchestration::dispatch_backend_command;
use crate::ui::notifications::{Notification, NotificationSeverity, NotificationStack};
use crate::ui::panels::{
    self, ApiPanel, ApiRegion, SearchPanel, SearchRegion, SearchSuccessPanel,
};
use crate::ui::theme;

fn local_timestamp() -> String {
    Local::now().format("%H:%M:%S").to_string()
}

fn search_success_notification(results: &SearchResults) -> String {
    format!(
        "Search completed! Found {} matches out of {} URLs.",
        results.matches_found, results.total_urls
    )
}

pub struct ConsoleApp {
    cmd_tx: Sender<BackendCommand>,
    ui_rx: Receiver<UiEvent>,

    server_url: String,
    status: String,

    keyword_source: KeywordSource,
    custom_keyword: String,
    focus_custom_keyword: bool,

    hello_in_flight: bool,
    echo_in_flight: bool,
    search_in_flight: bool,

    api_region: ApiRegion,
    search_region: SearchRegion,

    notifications: NotificationStack,
    theme_applied: bool,
}

impl ConsoleApp {
    pub fn new(
        startup: StartupConfig,
        cmd_tx: Sender<BackendCommand>,
        ui_rx: Receiver<UiEvent>,
    ) -> Self {
        Self {
            cmd_tx,
            ui_rx,
            server_url: startup.server_url,
            status: "Backend worker starting...".to_string(),
            keyword_source: KeywordSource::Sheet,
            custom_keyword: String::new(),
            focus_custom_keyword: false,
            hello_in_flight: false,
            echo_in_flight: false,
            search_in_flight: false,
            api_region: ApiRegion::default(),
            search_region: SearchRegion::default(),
            notifications: NotificationStack::default(),
            theme_applied: false,
        }
    }

    fn process_ui_events(&mut self) {
        while let Ok(event) = self.ui_rx.try_recv() {
            self.apply_event(event);
        }
    }

    fn apply_event(&mut self, event: UiEvent) {
        match event {
            UiEvent::WorkerReady => {
                self.status = "Ready".to_string();
            }
            UiEvent::WorkerFailed(message) => {
                self.hello_in_flight = false;
                self.echo_in_flight = false;
                self.search_in_flight = false;
                self.status = message.clone();
                self.notifications
                    .push(Notification::new(NotificationSeverity::Failure, message));
            }
            UiEvent::HelloSucceeded(body) => {
                self.hello_in_flight = false;
                self.status = "Hello check succeeded".to_string();
                self.api_region = ApiRegion::Showing(ApiPanel::HelloSuccess {
                    message: body.message,
                    status: body.status,
                    rendered_at: local_timestamp(),
                });
            }
            UiEvent::EchoSucceeded(body) => {
                self.echo_in_flight = false;
                self.status = "Echo check succeeded".to_string();
                self.api_region = ApiRegion::Showing(ApiPanel::EchoSuccess {
                    status: body.status,
                    received_pretty: panels::echo_received_pretty(&body.received),
                    rendered_at: local_timestamp(),
                });
            }
            UiEvent::SearchSucceeded(outcome) => {
                self.search_in_flight = false;
                self.status = "Search completed".to_string();
                self.notifications.push(Notification::new(
                    NotificationSeverity::Success,
                    search_success_notification(&outcome.results),
                ));
                self.search_region =
                    SearchRegion::Showing(SearchPanel::Success(SearchSuccessPanel {
                        message: outcome.message,
                        results: outcome.results,
                        completed_at: local_timestamp(),
                    }));
            }
            UiEvent::ActionFailed { action, error } => {
                self.status = format!("{} error: {}", error.kind().label(), error.message());
                match action {
                    ConsoleAction::Hello => {
                        self.hello_in_flight = false;
                        self.api_region = ApiRegion::Showing(ApiPanel::Failure {
                            heading: "Hello request failed",
                            message: error.message().to_string(),
                            rendered_at: local_timestamp(),
                        });
                    }
                    ConsoleAction::Echo => {
                        self.echo_in_flight = false;
                        self.api_region = ApiRegion::Showing(ApiPanel::Failure {
                            heading: "Echo request failed",
                            message: error.message().to_string(),
                            rendered_at: local_timestamp(),
                        });
                    }
                    ConsoleAction::Search => {
                        self.search_in_flight = false;
                        self.search_region = SearchRegion::Showing(SearchPanel::Failure {
                            message: error.message().to_string(),
                            rendered_at: local_timestamp(),
                        });
                        self.notifications.push(Notification::new(
                            NotificationSeverity::Failure,
                            "Search failed. Please check the error details in the results panel.",
                        ));
                    }
                }
            }
        }
    }

    fn start_hello(&mut self) {
        if dispatch_backend_command(&self.cmd_tx, BackendCommand::Hello, &mut self.status) {
            self.hello_in_flight = true;
            self.api_region = ApiRegion::Loading;
        }
    }

    fn start_echo(&mut self) {
        if dispatch_backend_command(&self.cmd_tx, BackendCommand::Echo, &mut self.status) {
            self.echo_in_flight = true;
            self.api_region = ApiRegion::Loading;
        }
    }

    fn start_search(&mut self) {
        let request = match build_search_request(self.keyword_source, &self.custom_keyword) {
            Ok(request) => request,
            Err(err) => {
                // Rejected before any network call; the trigger was never
                // disabled and the progress indicator never shown.
                self.search_region = SearchRegion::Showing(SearchPanel::ValidationError {
                    message: err.to_string(),
                });
                return;
            }
        };
        if dispatch_backend_command(
            &self.cmd_tx,
            BackendCommand::SearchKeyword { request },
            &mut self.status,
        ) {
            self.search_in_flight = true;
            self.search_region = SearchRegion::Loading;
        }
    }

    fn set_keyword_source(&mut self, source: KeywordSource) {
        if self.keyword_source == source {
            return;
        }
        self.keyword_source = source;
        match source {
            KeywordSource::Sheet => {
                self.custom_keyword.clear();
                self.focus_custom_keyword = false;
            }
            KeywordSource::Custom => {
                self.focus_custom_keyword = true;
            }
        }
    }

    fn apply_theme_if_needed(&mut self, ctx: &egui::Context) {
        if self.theme_applied {
            return;
        }
        let mut style = (*ctx.style()).clone();
        style.visuals = theme::console_visuals();
        ctx.set_style(style);
        self.theme_applied = true;
    }

    fn show_api_checks(&mut self, ui: &mut egui::Ui) {
        ui.label(egui::RichText::new("API checks").strong());
        ui.horizontal(|ui| {
            let hello_label = if self.hello_in_flight {
                "Testing..."
            } else {
                "Test API Hello"
            };
            if ui
                .add_enabled(!self.hello_in_flight, egui::Button::new(hello_label))
                .clicked()
            {
                self.start_hello();
            }

            let echo_label = if self.echo_in_flight {
                "Testing..."
            } else {
                "Test Echo API"
            };
            if ui
                .add_enabled(!self.echo_in_flight, egui::Button::new(echo_label))
                .clicked()
            {
                self.start_echo();
            }
        });
        ui.add_space(6.0);
        panels::show_api_region(ui, &self.api_region);
    }

    fn show_search_section(&mut self, ui: &mut egui::Ui) {
        ui.label(egui::RichText::new("Keyword search").strong());

        let mut source = self.keyword_source;
        ui.radio_value(
            &mut source,
            KeywordSource::Sheet,
            "Use keyword from the spreadsheet",
        );
        ui.radio_value(&mut source, KeywordSource::Custom, "Use custom keyword");
        if source != self.keyword_source {
            self.set_keyword_source(source);
        }

        let input = ui.add_enabled(
            self.keyword_source.use_custom(),
            egui::TextEdit::singleline(&mut self.custom_keyword)
                .hint_text("Enter a keyword")
                .desired_width(280.0),
        );
        if self.focus_custom_keyword {
            input.request_focus();
            self.focus_custom_keyword = false;
        }

        ui.add_space(4.0);
        let search_label = if self.search_in_flight {
            "Searching..."
        } else {
            "Start Search"
        };
        if ui
            .add_enabled(!self.search_in_flight, egui::Button::new(search_label))
            .clicked()
        {
            self.start_search();
        }

        if self.search_in_flight {
            ui.horizontal(|ui| {
                ui.add(egui::Spinner::new());
                ui.label("Searching URLs for the keyword...");
            });
        }

        ui.add_space(6.0);
        panels::show_search_region(ui, &self.search_region);
    }

    fn any_action_in_flight(&self) -> bool {
        self.hello_in_flight || self.echo_in_flight || self.search_in_flight
    }
}

impl eframe::App for ConsoleApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.process_ui_events();
        self.apply_theme_if_needed(ctx);

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    ui.heading("Keyword Search Console");
                    ui.horizontal_wrapped(|ui| {
                        ui.small("Backend:");
                        ui.small(egui::RichText::new(&self.server_url).weak());
                    });
                    ui.horizontal_wrapped(|ui| {
                        ui.small("Status:");
                        ui.small(egui::RichText::new(&self.status).weak());
                    });
                    ui.separator();

                    self.show_api_checks(ui);

                    ui.add_space(10.0);
                    ui.separator();

                    self.show_search_section(ui);
                });
        });

        self.notifications.show(ctx);

        // Keep frames coming while work is pending or banners count down.
        if self.any_action_in_flight() || !self.notifications.is_empty() {
            ctx.request_repaint_after(Duration::from_millis(100));
        } else {
            ctx.request_repaint_after(Duration::from_millis(500));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controller::events::UiError;
    use client_core::{ClientError, SearchOutcome};
    use crossbeam_channel::bounded;
    use serde_json::json;
    use shared::protocol::{EchoResponse, HelloResponse};

    fn test_app(cmd_capacity: usize) -> (ConsoleApp, Receiver<BackendCommand>) {
        let (cmd_tx, cmd_rx) = bounded::<BackendCommand>(cmd_capacity);
        let (_ui_tx, ui_rx) = bounded::<UiEvent>(16);
        let app = ConsoleApp::new(StartupConfig::default(), cmd_tx, ui_rx);
        (app, cmd_rx)
    }

    fn sample_results(urls: Vec<String>) -> SearchResults {
        SearchResults {
            keyword: "rust".to_string(),
            total_urls: 10,
            matches_found: 3,
            success_rate: Some(30.0),
            urls_with_keyword: urls,
        }
    }

    #[test]
    fn validation_short_circuits_without_queueing_a_command() {
        let (mut app, cmd_rx) = test_app(4);
        app.keyword_source = KeywordSource::Custom;
        app.custom_keyword = "   ".to_string();

        app.start_search();

        assert!(cmd_rx.try_recv().is_err(), "no command may be queued");
        assert!(!app.search_in_flight);
        assert!(matches!(
            app.search_region,
            SearchRegion::Showing(SearchPanel::ValidationError { .. })
        ));
    }

    #[test]
    fn completion_events_clear_in_flight_flags() {
        let (mut app, _cmd_rx) = test_app(4);
        app.hello_in_flight = true;
        app.echo_in_flight = true;
        app.search_in_flight = true;

        app.apply_event(UiEvent::HelloSucceeded(HelloResponse {
            message: "hi".to_string(),
            status: "success".to_string(),
        }));
        app.apply_event(UiEvent::EchoSucceeded(EchoResponse {
            status: "ok".to_string(),
            received: json!({}),
        }));
        app.apply_event(UiEvent::SearchSucceeded(SearchOutcome {
            message: "done".to_string(),
            results: sample_results(Vec::new()),
        }));

        assert!(!app.hello_in_flight);
        assert!(!app.echo_in_flight);
        assert!(!app.search_in_flight);
    }

    #[test]
    fn failure_events_also_restore_idle_control_state() {
        let (mut app, _cmd_rx) = test_app(4);
        app.hello_in_flight = true;
        app.echo_in_flight = true;
        app.search_in_flight = true;

        for action in [
            ConsoleAction::Hello,
            ConsoleAction::Echo,
            ConsoleAction::Search,
        ] {
            app.apply_event(UiEvent::ActionFailed {
                action,
                error: UiError::from_client_error(&ClientError::Http {
                    status: 503,
                    detail: "Service Unavailable".to_string(),
                }),
            });
        }

        assert!(!app.hello_in_flight);
        assert!(!app.echo_in_flight);
        assert!(!app.search_in_flight);
    }

    #[test]
    fn queue_full_leaves_control_idle_and_reports_status() {
        let (mut app, _cmd_rx) = test_app(1);
        app.cmd_tx
            .try_send(BackendCommand::Hello)
            .expect("fill queue");

        app.start_echo();

        assert!(!app.echo_in_flight);
        assert!(app.status.contains("full"), "status: {}", app.status);
    }

    #[test]
    fn starting_an_action_marks_it_busy_and_queues_its_command() {
        let (mut app, cmd_rx) = test_app(4);

        app.start_hello();

        assert!(app.hello_in_flight);
        assert!(matches!(app.api_region, ApiRegion::Loading));
        assert!(matches!(cmd_rx.try_recv(), Ok(BackendCommand::Hello)));
    }

    #[test]
    fn echo_success_renders_pretty_printed_payload_verbatim() {
        let (mut app, _cmd_rx) = test_app(4);
        let received = json!({ "message": "hi", "randomNumber": 7 });

        app.apply_event(UiEvent::EchoSucceeded(EchoResponse {
            status: "ok".to_string(),
            received: received.clone(),
        }));

        match &app.api_region {
            ApiRegion::Showing(ApiPanel::EchoSuccess {
                received_pretty, ..
            }) => {
                assert_eq!(
                    received_pretty,
                    &serde_json::to_string_pretty(&received).expect("pretty")
                );
            }
            other => panic!("unexpected region: {other:?}"),
        }
    }

    #[test]
    fn search_success_with_no_matches_keeps_badges_and_omits_url_list() {
        let (mut app, _cmd_rx) = test_app(4);

        app.apply_event(UiEvent::SearchSucceeded(SearchOutcome {
            message: "no matches".to_string(),
            results: sample_results(Vec::new()),
        }));

        match &app.search_region {
            SearchRegion::Showing(SearchPanel::Success(panel)) => {
                assert_eq!(panel.results.keyword, "rust");
                assert_eq!(panel.results.total_urls, 10);
                assert_eq!(panel.results.matches_found, 3);
                assert!(panel.results.urls_with_keyword.is_empty());
            }
            other => panic!("unexpected region: {other:?}"),
        }
    }

    #[test]
    fn search_notification_contains_both_counts() {
        let text = search_success_notification(&sample_results(Vec::new()));
        assert!(text.contains('3'), "notification: {text}");
        assert!(text.contains("10"), "notification: {text}");
    }

    #[test]
    fn keyword_source_toggle_is_mutually_exclusive_and_deterministic() {
        let (mut app, _cmd_rx) = test_app(4);

        // Custom enables and focuses the field.
        app.set_keyword_source(KeywordSource::Custom);
        assert_eq!(app.keyword_source, KeywordSource::Custom);
        assert!(app.focus_custom_keyword);

        app.focus_custom_keyword = false;
        app.custom_keyword = "rust".to_string();

        // Re-selecting the active source changes nothing.
        app.set_keyword_source(KeywordSource::Custom);
        assert_eq!(app.custom_keyword, "rust");
        assert!(!app.focus_custom_keyword);

        // Sheet clears and releases the field, from any prior state.
        app.set_keyword_source(KeywordSource::Sheet);
        assert_eq!(app.keyword_source, KeywordSource::Sheet);
        assert!(app.custom_keyword.is_empty());
        assert!(!app.focus_custom_keyword);

        app.set_keyword_source(KeywordSource::Sheet);
        assert!(app.custom_keyword.is_empty());
    }

    #[test]
    fn search_failure_raises_a_failure_notification_and_error_panel() {
        let (mut app, _cmd_rx) = test_app(4);
        app.search_in_flight = true;

        app.apply_event(UiEvent::ActionFailed {
            action: ConsoleAction::Search,
            error: UiError::from_client_error(&ClientError::Http {
                status: 400,
                detail: "Spreadsheet credentials file not found".to_string(),
            }),
        });

        assert!(!app.search_in_flight);
        assert!(!app.notifications.is_empty());
        match &app.search_region {
            SearchRegion::Showing(SearchPanel::Failure { message, .. }) => {
                assert!(message.contains("400"), "message: {message}");
            }
            other => panic!("unexpected region: {other:?}"),
        }
    }
}
