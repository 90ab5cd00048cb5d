//! Progress simulator for the CV analysis run.
//!
//! Time is injected: callers feed elapsed durations through [`Simulator::advance`]
//! and the simulator replays the progress and status events that fall due, in
//! chronological order. A started run always reaches 100 and cannot be
//! cancelled, only reset.
use std::time::Duration;

use crate::catalog::STATUS_MESSAGES;

/// Percentage added per progress step.
pub const PROGRESS_STEP: u8 = 10;
const PROGRESS_DONE: u8 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnalysisTiming {
    pub step_delay: Duration,
    pub message_interval: Duration,
}

impl Default for AnalysisTiming {
    fn default() -> Self {
        Self {
            step_delay: Duration::from_millis(500),
            message_interval: Duration::from_millis(1210),
        }
    }
}

impl AnalysisTiming {
    /// Zero intervals would never let the clock move past an event.
    fn normalized(self) -> Self {
        let floor = Duration::from_millis(1);
        Self {
            step_delay: self.step_delay.max(floor),
            message_interval: self.message_interval.max(floor),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Run {
    elapsed: Duration,
    progress: u8,
    next_value: u8,
    steps: u32,
    message_index: usize,
    next_step_at: Duration,
    next_message_at: Duration,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
enum Phase {
    #[default]
    Idle,
    Running(Run),
    Done {
        steps: u32,
        message_index: usize,
    },
}

/// What a call to [`Simulator::advance`] changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StepReport {
    pub progress_steps: u32,
    pub message_steps: u32,
    pub completed: bool,
}

impl StepReport {
    pub fn changed(&self) -> bool {
        self.progress_steps > 0 || self.message_steps > 0 || self.completed
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Simulator {
    timing: AnalysisTiming,
    phase: Phase,
}

impl Simulator {
    pub fn new(timing: AnalysisTiming) -> Self {
        Self {
            timing: timing.normalized(),
            phase: Phase::Idle,
        }
    }

    pub fn timing(&self) -> AnalysisTiming {
        self.timing
    }

    /// Begins a run at progress 0. Returns false if one is already in flight.
    pub fn start(&mut self) -> bool {
        if self.is_running() {
            return false;
        }
        self.phase = Phase::Running(Run {
            elapsed: Duration::ZERO,
            progress: 0,
            next_value: 0,
            steps: 0,
            message_index: 0,
            next_step_at: self.timing.step_delay,
            next_message_at: self.timing.message_interval,
        });
        true
    }

    /// Forces the simulator back to idle from any phase.
    pub fn reset(&mut self) {
        self.phase = Phase::Idle;
    }

    pub fn advance(&mut self, delta: Duration) -> StepReport {
        let mut report = StepReport::default();
        let Phase::Running(run) = &mut self.phase else {
            return report;
        };
        run.elapsed = run.elapsed.saturating_add(delta);

        loop {
            let due = run.next_step_at.min(run.next_message_at);
            if due > run.elapsed {
                break;
            }
            // Status fires first when both land on the same instant.
            if run.next_message_at <= run.next_step_at {
                if run.progress < PROGRESS_DONE {
                    run.message_index = (run.message_index + 1) % STATUS_MESSAGES.len();
                    report.message_steps += 1;
                }
                run.next_message_at += self.timing.message_interval;
                continue;
            }

            run.progress = run.next_value;
            run.next_value = run.next_value.saturating_add(PROGRESS_STEP);
            run.steps += 1;
            run.next_step_at += self.timing.step_delay;
            report.progress_steps += 1;

            if run.progress >= PROGRESS_DONE {
                self.phase = Phase::Done {
                    steps: run.steps,
                    message_index: run.message_index,
                };
                report.completed = true;
                break;
            }
        }
        report
    }

    pub fn is_idle(&self) -> bool {
        matches!(self.phase, Phase::Idle)
    }

    pub fn is_running(&self) -> bool {
        matches!(self.phase, Phase::Running(_))
    }

    pub fn is_done(&self) -> bool {
        matches!(self.phase, Phase::Done { .. })
    }

    pub fn progress(&self) -> u8 {
        match &self.phase {
            Phase::Idle => 0,
            Phase::Running(run) => run.progress,
            Phase::Done { .. } => PROGRESS_DONE,
        }
    }

    /// Progress steps applied so far in the current or finished run.
    pub fn steps(&self) -> u32 {
        match &self.phase {
            Phase::Idle => 0,
            Phase::Running(run) => run.steps,
            Phase::Done { steps, .. } => *steps,
        }
    }

    pub fn message_index(&self) -> usize {
        match &self.phase {
            Phase::Idle => 0,
            Phase::Running(run) => run.message_index,
            Phase::Done { message_index, .. } => *message_index,
        }
    }

    pub fn status_message(&self) -> Option<&'static str> {
        self.is_running()
            .then(|| STATUS_MESSAGES[self.message_index()])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    #[test]
    fn idle_simulator_ignores_time() {
        let mut sim = Simulator::new(AnalysisTiming::default());
        assert_eq!(sim.advance(ms(10_000)), StepReport::default());
        assert!(sim.is_idle());
    }

    #[test]
    fn start_is_rejected_while_running() {
        let mut sim = Simulator::new(AnalysisTiming::default());
        assert!(sim.start());
        sim.advance(ms(1_500));
        assert!(!sim.start());
        assert_eq!(sim.steps(), 3);
    }

    #[test]
    fn first_step_reports_zero_then_climbs_by_ten() {
        let mut sim = Simulator::new(AnalysisTiming::default());
        sim.start();
        sim.advance(ms(500));
        assert_eq!((sim.steps(), sim.progress()), (1, 0));
        sim.advance(ms(500));
        assert_eq!((sim.steps(), sim.progress()), (2, 10));
    }

    #[test]
    fn reference_timing_rotates_messages_slower_than_progress() {
        let mut sim = Simulator::new(AnalysisTiming::default());
        sim.start();
        let report = sim.advance(ms(2_500));
        assert_eq!(report.progress_steps, 5);
        assert_eq!(report.message_steps, 2);
        assert_eq!(sim.status_message(), Some(STATUS_MESSAGES[2]));
    }

    #[test]
    fn large_delta_finishes_in_one_call() {
        let mut sim = Simulator::new(AnalysisTiming::default());
        sim.start();
        let report = sim.advance(ms(60_000));
        assert!(report.completed);
        assert_eq!(report.progress_steps, 11);
        assert!(sim.is_done());
        assert_eq!(sim.progress(), 100);
        assert_eq!(sim.status_message(), None);
    }

    #[test]
    fn zero_intervals_are_normalized() {
        let mut sim = Simulator::new(AnalysisTiming {
            step_delay: Duration::ZERO,
            message_interval: Duration::ZERO,
        });
        sim.start();
        assert!(sim.advance(ms(20)).completed);
    }
}
