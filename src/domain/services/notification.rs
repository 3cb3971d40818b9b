#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Warning,
    Danger,
    Info,
}

/// Fire-and-forget user notifications. Rendering and dismissal are the sink's business.
pub trait Notifier: Send + Sync {
    fn notify(&self, message: &str, severity: Severity);
}
