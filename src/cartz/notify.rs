//! The injected notification sink.
//!
//! The original design hung user-facing alerting off a process-wide
//! singleton holding a UI handle. Here it is a capability the composition
//! root passes in: the API facade reports outcomes through a [`Notifier`]
//! and never touches global state or a terminal directly.

/// Receives user-facing success and error notifications.
pub trait Notifier {
    fn error(&self, message: &str);
    fn success(&self, message: &str);
}

/// A sink that drops everything. Useful when embedding the library in a
/// host that handles its own messaging, and in tests.
#[derive(Debug, Default)]
pub struct SilentNotifier;

impl Notifier for SilentNotifier {
    fn error(&self, _message: &str) {}
    fn success(&self, _message: &str) {}
}
