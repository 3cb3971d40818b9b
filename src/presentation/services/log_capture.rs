use crate::presentation::components::log_manager::LogEntry;
use anyhow::{Result, anyhow};
use std::sync::mpsc::{Receiver, Sender, channel};
use tracing_subscriber::Layer;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

const CAPTURED_TARGET: &str = "mealbook";

/// Installs the global subscriber: stderr output plus a channel feeding the in-app log.
pub fn init_log_capture() -> Result<Receiver<LogEntry>> {
    let (tx, rx) = channel();

    let capture_layer = CaptureLayer { sender: tx };

    #[cfg(feature = "verbose-logging")]
    let filter = LevelFilter::TRACE;

    #[cfg(all(not(feature = "verbose-logging"), debug_assertions))]
    let filter = LevelFilter::DEBUG;

    #[cfg(all(not(feature = "verbose-logging"), not(debug_assertions)))]
    let filter = LevelFilter::INFO;

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(capture_layer)
        .try_init()
        .map_err(|e| anyhow!("Failed to install log subscriber: {}", e))?;

    Ok(rx)
}

struct CaptureLayer {
    sender: Sender<LogEntry>,
}

impl<S> Layer<S> for CaptureLayer
where
    S: tracing::Subscriber,
{
    fn on_event(
        &self,
        event: &tracing::Event<'_>,
        _ctx: tracing_subscriber::layer::Context<'_, S>,
    ) {
        let metadata = event.metadata();

        if !metadata.target().starts_with(CAPTURED_TARGET) {
            return;
        }

        let mut visitor = LogVisitor {
            message: String::new(),
        };

        event.record(&mut visitor);

        if !visitor.message.is_empty() {
            let _ = self
                .sender
                .send(LogEntry::new(*metadata.level(), visitor.message));
        }
    }
}

struct LogVisitor {
    message: String,
}

impl tracing::field::Visit for LogVisitor {
    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
        if field.name() == "message" {
            self.message = format!("{:?}", value);
        }
    }

    fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
        if field.name() == "message" {
            self.message = value.to_string();
        }
    }
}
