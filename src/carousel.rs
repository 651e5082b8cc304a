use log::debug;

use crate::config;
use crate::schedule::{Repeat, ScheduledTask, Scheduler};

pub const TOPIC_ICONS: [&str; 6] = [
    "bi-shop",
    "bi-calculator",
    "bi-people",
    "bi-graph-up",
    "bi-camera-video",
    "bi-award",
];
pub const DEFAULT_TOPIC_ICON: &str = "bi-book";

#[derive(Debug, Clone, PartialEq)]
pub struct Slide {
    pub topic: String,
    pub icon: &'static str,
}

impl Slide {
    fn new(index: usize, topic: &str) -> Self {
        Self {
            topic: topic.to_string(),
            icon: TOPIC_ICONS.get(index).copied().unwrap_or(DEFAULT_TOPIC_ICON),
        }
    }
}

/// Topics slideshow: current slide, dots and the auto-advance timer.
///
/// Owns at most one auto-advance task. Every path that schedules a task
/// cancels the previous one first.
pub struct CarouselController<S: Scheduler> {
    scheduler: S,
    interval_ms: u32,
    slides: Vec<Slide>,
    current: Option<usize>,
    task: Option<S::Task>,
}

impl<S: Scheduler> CarouselController<S> {
    pub fn new(scheduler: S) -> Self {
        Self::with_interval(scheduler, config::SLIDE_INTERVAL_MS)
    }

    pub fn with_interval(scheduler: S, interval_ms: u32) -> Self {
        Self {
            scheduler,
            interval_ms,
            slides: Vec::new(),
            current: None,
            task: None,
        }
    }

    /// Replaces the deck with one slide per topic and restarts from the first slide.
    pub fn build<T: AsRef<str>>(&mut self, topics: &[T]) {
        self.stop_timer();
        self.slides = topics
            .iter()
            .enumerate()
            .map(|(i, topic)| Slide::new(i, topic.as_ref()))
            .collect();
        self.current = if self.slides.is_empty() { None } else { Some(0) };
        debug!("Built slideshow with {} slides", self.slides.len());
        self.restart_timer();
    }

    pub fn next(&mut self) {
        if self.advance() {
            self.restart_timer();
        }
    }

    pub fn prev(&mut self) {
        let len = self.slides.len();
        if let Some(current) = self.current {
            self.current = Some((current + len - 1) % len);
            self.restart_timer();
        }
    }

    /// Jumps straight to `index`. The caller keeps it below `len()`; it is not clamped.
    pub fn go_to(&mut self, index: usize) {
        if self.current.is_some() {
            self.current = Some(index);
            self.restart_timer();
        }
    }

    /// Auto-advance timer fired. Same move as `next` but the timer keeps running.
    pub fn tick(&mut self) {
        self.advance();
    }

    fn advance(&mut self) -> bool {
        let len = self.slides.len();
        match self.current {
            Some(current) => {
                self.current = Some((current + 1) % len);
                true
            }
            None => false,
        }
    }

    fn stop_timer(&mut self) {
        if let Some(task) = self.task.take() {
            task.cancel();
        }
    }

    fn restart_timer(&mut self) {
        self.stop_timer();
        if !self.slides.is_empty() {
            self.task = Some(self.scheduler.schedule(self.interval_ms, Repeat::Every));
        }
    }

    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn current_index(&self) -> Option<usize> {
        self.current
    }

    pub fn timer_active(&self) -> bool {
        self.task.is_some()
    }

    pub fn track_transform(&self) -> String {
        let offset = self.current.unwrap_or(0) as i64 * -100;
        format!("transform: translateX({}%);", offset)
    }

    /// One entry per dot, `true` for the active one.
    pub fn dot_states(&self) -> Vec<bool> {
        (0..self.slides.len()).map(|i| Some(i) == self.current).collect()
    }
}
