use crate::domain::services::{Notifier, Severity};
use crate::presentation::style::severity_color;
use egui::{Align2, Color32, RichText};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

const TOAST_LIMIT: usize = 5;

#[derive(Debug, Clone)]
pub struct Toast {
    pub message: String,
    pub severity: Severity,
    pub expires_at: Instant,
}

/// Notification sink that shows stacked, self-dismissing toasts.
#[derive(Clone)]
pub struct ToastQueue {
    toasts: Arc<Mutex<VecDeque<Toast>>>,
    ttl: Duration,
}

impl ToastQueue {
    pub fn new(ttl: Duration) -> Self {
        Self {
            toasts: Arc::new(Mutex::new(VecDeque::new())),
            ttl,
        }
    }

    /// Drops toasts that expired at or before `now` and returns the rest, oldest first.
    pub fn active_at(&self, now: Instant) -> Vec<Toast> {
        let Ok(mut toasts) = self.toasts.lock() else {
            return Vec::new();
        };
        toasts.retain(|toast| toast.expires_at > now);
        toasts.iter().cloned().collect()
    }

    pub fn render(&self, ctx: &egui::Context) {
        let toasts = self.active_at(Instant::now());
        if toasts.is_empty() {
            return;
        }

        egui::Area::new(egui::Id::new("toasts"))
            .anchor(Align2::RIGHT_TOP, egui::vec2(-16.0, 56.0))
            .show(ctx, |ui| {
                for toast in &toasts {
                    egui::Frame::none()
                        .fill(severity_color(toast.severity))
                        .rounding(6.0)
                        .inner_margin(10.0)
                        .show(ui, |ui| {
                            ui.label(RichText::new(&toast.message).color(Color32::WHITE));
                        });
                    ui.add_space(6.0);
                }
            });
    }
}

impl Notifier for ToastQueue {
    fn notify(&self, message: &str, severity: Severity) {
        let Ok(mut toasts) = self.toasts.lock() else {
            return;
        };
        toasts.push_back(Toast {
            message: message.to_string(),
            severity,
            expires_at: Instant::now() + self.ttl,
        });
        while toasts.len() > TOAST_LIMIT {
            toasts.pop_front();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toasts_expire_after_ttl() {
        let queue = ToastQueue::new(Duration::from_millis(3000));
        queue.notify("Added to favorites", Severity::Success);

        let now = Instant::now();
        let active = queue.active_at(now);
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].severity, Severity::Success);

        assert!(queue.active_at(now + Duration::from_secs(4)).is_empty());
        assert!(queue.active_at(now).is_empty());
    }

    #[test]
    fn only_latest_toasts_are_kept() {
        let queue = ToastQueue::new(Duration::from_secs(60));
        for i in 0..TOAST_LIMIT + 2 {
            queue.notify(&format!("toast {i}"), Severity::Info);
        }

        let active = queue.active_at(Instant::now());
        assert_eq!(active.len(), TOAST_LIMIT);
        assert_eq!(active[0].message, "toast 2");
    }
}
