use tracing::{info, warn};

/// Outcome notifications surfaced to the operator after an action: the
/// dashboard's transient toasts. Rendering is the caller's concern; every
/// list/mutation handler reports through this port and nothing else.
pub trait Notifier: Send + Sync {
    fn success(&self, message: &str);
    fn error(&self, message: &str);
}

/// Default sink: structured log lines.
#[derive(Debug, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn success(&self, message: &str) {
        info!(target: "macc_admin::notify", "{message}");
    }

    fn error(&self, message: &str) {
        warn!(target: "macc_admin::notify", "{message}");
    }
}

#[cfg(test)]
pub mod testing {
    use super::Notifier;
    use std::sync::Mutex;

    /// Records every notification for assertions.
    #[derive(Debug, Default)]
    pub struct RecordingNotifier {
        pub successes: Mutex<Vec<String>>,
        pub errors: Mutex<Vec<String>>,
    }

    impl Notifier for RecordingNotifier {
        fn success(&self, message: &str) {
            self.successes.lock().unwrap().push(message.to_string());
        }

        fn error(&self, message: &str) {
            self.errors.lock().unwrap().push(message.to_string());
        }
    }
}
