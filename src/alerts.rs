use crate::config;
use crate::schedule::{Repeat, ScheduledTask, Scheduler};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertKind {
    Success,
    Error,
}

impl AlertKind {
    pub fn class(self) -> &'static str {
        match self {
            AlertKind::Success => "alert alert-success",
            AlertKind::Error => "alert alert-error",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            AlertKind::Success => "fas fa-check-circle",
            AlertKind::Error => "fas fa-exclamation-circle",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Alert {
    pub kind: AlertKind,
    pub message: String,
}

/// Single transient message slot. A new message replaces the old one and
/// gets the full display time.
pub struct AlertChannel<S: Scheduler> {
    scheduler: S,
    display_ms: u32,
    current: Option<Alert>,
    clear_task: Option<S::Task>,
}

impl<S: Scheduler> AlertChannel<S> {
    pub fn new(scheduler: S) -> Self {
        Self {
            scheduler,
            display_ms: config::ALERT_DISPLAY_MS,
            current: None,
            clear_task: None,
        }
    }

    pub fn success(&mut self, message: impl Into<String>) {
        self.show(AlertKind::Success, message.into());
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.show(AlertKind::Error, message.into());
    }

    fn show(&mut self, kind: AlertKind, message: String) {
        if let Some(task) = self.clear_task.take() {
            task.cancel();
        }
        self.current = Some(Alert { kind, message });
        self.clear_task = Some(self.scheduler.schedule(self.display_ms, Repeat::Once));
    }

    /// Clear timer fired.
    pub fn expire(&mut self) {
        self.clear_task = None;
        self.current = None;
    }

    pub fn current(&self) -> Option<&Alert> {
        self.current.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schedule::testing::ManualClock;

    fn run(alerts: &mut AlertChannel<ManualClock>, clock: &ManualClock, ms: u64) {
        for _ in 0..clock.advance(ms) {
            alerts.expire();
        }
    }

    #[test]
    fn message_clears_after_display_time() {
        let clock = ManualClock::new();
        let mut alerts = AlertChannel::new(clock.clone());
        alerts.success("Thank you! We'll contact you soon.");
        assert_eq!(alerts.current().map(|a| a.kind), Some(AlertKind::Success));
        run(&mut alerts, &clock, 4999);
        assert!(alerts.current().is_some());
        run(&mut alerts, &clock, 1);
        assert!(alerts.current().is_none());
        assert_eq!(clock.pending(), 0);
    }

    #[test]
    fn new_message_overwrites_and_restarts_the_clock() {
        let clock = ManualClock::new();
        let mut alerts = AlertChannel::new(clock.clone());
        alerts.success("sent");
        run(&mut alerts, &clock, 3000);
        alerts.error("failed");
        assert_eq!(clock.pending(), 1);
        run(&mut alerts, &clock, 3000);
        let alert = alerts.current().unwrap();
        assert_eq!(alert.kind, AlertKind::Error);
        assert_eq!(alert.message, "failed");
        run(&mut alerts, &clock, 2000);
        assert!(alerts.current().is_none());
    }
}
