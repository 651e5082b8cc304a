use gloo_timers::callback::{Interval, Timeout};
use yew::Callback;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Repeat {
    Once,
    Every,
}

/// A pending timer. Cancelling (or dropping) it guarantees it never fires again.
pub trait ScheduledTask {
    fn cancel(self);
}

/// Source of timers for the carousel and the alert channel.
///
/// Each scheduler is bound to one callback target, so a task only says *when*
/// to fire; what happens on fire is decided by whoever built the scheduler.
pub trait Scheduler {
    type Task: ScheduledTask;

    fn schedule(&self, delay_ms: u32, repeat: Repeat) -> Self::Task;
}

/// Browser timers that emit a Yew callback when they fire.
pub struct TimerScheduler {
    on_fire: Callback<()>,
}

impl TimerScheduler {
    pub fn new(on_fire: Callback<()>) -> Self {
        Self { on_fire }
    }
}

pub enum TimerTask {
    Interval(Interval),
    Timeout(Timeout),
}

impl ScheduledTask for TimerTask {
    fn cancel(self) {
        match self {
            TimerTask::Interval(interval) => {
                let _ = interval.cancel();
            }
            TimerTask::Timeout(timeout) => {
                let _ = timeout.cancel();
            }
        }
    }
}

impl Scheduler for TimerScheduler {
    type Task = TimerTask;

    fn schedule(&self, delay_ms: u32, repeat: Repeat) -> TimerTask {
        let on_fire = self.on_fire.clone();
        match repeat {
            Repeat::Every => TimerTask::Interval(Interval::new(delay_ms, move || on_fire.emit(()))),
            Repeat::Once => TimerTask::Timeout(Timeout::new(delay_ms, move || on_fire.emit(()))),
        }
    }
}
