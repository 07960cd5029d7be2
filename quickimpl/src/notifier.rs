use quickimpl_assist::{Notification, Notifier, Severity};

/// Shows notifications as lines on stderr.
#[derive(Debug, Default)]
pub struct TerminalNotifier;

impl Notifier for TerminalNotifier {
    fn notify(&self, notification: Notification) {
        match notification.severity {
            Severity::Info => eprintln!("{}", notification.message),
            Severity::Error | Severity::Warning => eprintln!("{}", notification),
        }
    }
}
