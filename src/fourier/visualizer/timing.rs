use std::time::{Duration, Instant};

use tracing::debug;

#[derive(Debug, Clone, PartialEq)]
pub struct StepTiming {
    pub name: &'static str,
    pub duration: Duration,
}

/// Step durations of the most recent reconstruction
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReconstructionTimings {
    steps: Vec<StepTiming>,
}

impl ReconstructionTimings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_step(&mut self, name: &'static str, duration: Duration) {
        self.steps.push(StepTiming { name, duration });
    }

    /// Runs `step` and records how long it took under `name`.
    pub fn record<T>(&mut self, name: &'static str, step: impl FnOnce() -> T) -> T {
        let timer = Timer::start(name);
        let value = step();
        let (name, duration) = timer.stop();
        self.add_step(name, duration);
        value
    }

    pub fn total_duration(&self) -> Duration {
        self.steps.iter().map(|s| s.duration).sum()
    }

    pub fn get_step(&self, name: &str) -> Option<Duration> {
        self.steps
            .iter()
            .filter(|s| s.name == name)
            .map(|s| s.duration)
            .reduce(|a, b| a + b)
    }

    pub fn steps(&self) -> &[StepTiming] {
        &self.steps
    }

    pub fn log_summary(&self) {
        let total = self.total_duration();
        for step in &self.steps {
            let share = if total.is_zero() {
                0.0
            } else {
                step.duration.as_secs_f64() / total.as_secs_f64() * 100.0
            };
            debug!(
                step = step.name,
                ms = step.duration.as_secs_f64() * 1000.0,
                share,
                "Reconstruction step"
            );
        }
        debug!(ms = total.as_secs_f64() * 1000.0, "Reconstruction total");
    }
}

pub struct Timer {
    start: Instant,
    name: &'static str,
}

impl Timer {
    pub fn start(name: &'static str) -> Self {
        Self {
            start: Instant::now(),
            name,
        }
    }

    pub fn stop(self) -> (&'static str, Duration) {
        (self.name, self.start.elapsed())
    }
}
