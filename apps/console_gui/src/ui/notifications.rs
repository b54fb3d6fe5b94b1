//! Transient notification banners with independent lifetimes.

use std::time::{Duration, Instant};

use eframe::egui;

use crate::ui::theme::{self, PanelPalette};

pub const NOTIFICATION_LIFETIME: Duration = Duration::from_millis(5000);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationSeverity {
    Success,
    Failure,
}

impl NotificationSeverity {
    fn palette(self) -> PanelPalette {
        match self {
            NotificationSeverity::Success => theme::success_palette(),
            NotificationSeverity::Failure => theme::error_palette(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Notification {
    message: String,
    severity: NotificationSeverity,
    raised_at: Instant,
}

impl Notification {
    pub fn new(severity: NotificationSeverity, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            severity,
            raised_at: Instant::now(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    fn expired(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.raised_at) >= NOTIFICATION_LIFETIME
    }
}

/// Stacked dismissible banners; each one lives for 5 seconds unless the
/// user removes it first.
#[derive(Default)]
pub struct NotificationStack {
    entries: Vec<Notification>,
}

impl NotificationStack {
    pub fn push(&mut self, notification: Notification) {
        self.entries.push(notification);
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn prune(&mut self, now: Instant) {
        self.entries.retain(|notification| !notification.expired(now));
    }

    pub fn show(&mut self, ctx: &egui::Context) {
        self.prune(Instant::now());
        if self.entries.is_empty() {
            return;
        }

        let mut dismissed = None;
        egui::Area::new(egui::Id::new("console_notifications"))
            .anchor(egui::Align2::RIGHT_TOP, egui::vec2(-16.0, 16.0))
            .order(egui::Order::Foreground)
            .show(ctx, |ui| {
                ui.set_max_width(340.0);
                for (index, notification) in self.entries.iter().enumerate() {
                    let palette = notification.severity.palette();
                    egui::Frame::none()
                        .fill(palette.fill)
                        .stroke(egui::Stroke::new(1.0, palette.stroke))
                        .rounding(8.0)
                        .inner_margin(egui::Margin::symmetric(10.0, 8.0))
                        .show(ui, |ui| {
                            ui.horizontal_wrapped(|ui| {
                                ui.label(
                                    egui::RichText::new(notification.message())
                                        .color(egui::Color32::WHITE),
                                );
                                ui.with_layout(
                                    egui::Layout::right_to_left(egui::Align::Center),
                                    |ui| {
                                        if ui.button("Dismiss").clicked() {
                                            dismissed = Some(index);
                                        }
                                    },
                                );
                            });
                        });
                    ui.add_space(6.0);
                }
            });

        if let Some(index) = dismissed {
            self.entries.remove(index);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notifications_expire_after_their_lifetime() {
        let notification = Notification::new(NotificationSeverity::Success, "done");
        let now = Instant::now();
        assert!(!notification.expired(now));
        assert!(notification.expired(now + Duration::from_secs(6)));
    }

    #[test]
    fn prune_keeps_live_banners_and_banners_coexist() {
        let mut stack = NotificationStack::default();
        stack.push(Notification::new(NotificationSeverity::Success, "first"));
        stack.push(Notification::new(NotificationSeverity::Failure, "second"));
        assert_eq!(stack.entries.len(), 2);

        stack.prune(Instant::now());
        assert_eq!(stack.entries.len(), 2);

        stack.prune(Instant::now() + Duration::from_secs(6));
        assert!(stack.is_empty());
    }
}
