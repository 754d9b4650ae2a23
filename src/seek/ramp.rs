//! Ramp schedules and the scrub step arithmetic.
//!
//! A ramp schedule is the sequence of delays between repeat ticks while a
//! directional button is held, walked one tier per tick. The accelerating
//! schedule covers most of the timeline; a forward scrub switches to the
//! decelerating schedule for the final stretch of the media.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::Direction;

/// Fraction of the total duration covered by one repeat tick.
pub const DEFAULT_STEP_FRACTION: f64 = 0.03;

/// Past this fraction of the duration a forward scrub decelerates.
pub const DEFAULT_DECELERATION_THRESHOLD: f64 = 0.7;

/// Default tick delays (ms) for most of the timeline.
pub const DEFAULT_ACCELERATING_MS: &[u64] = &[100, 200, 300, 400, 500];

/// Default tick delays (ms) for the final stretch of a forward scrub.
pub const DEFAULT_DECELERATING_MS: &[u64] = &[500, 400, 300, 200, 100];

/// Errors raised while building ramp schedules.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RampError {
    #[error("Ramp schedule must contain at least one interval")]
    EmptySchedule,

    #[error("Ramp schedule interval at tier {tier} is zero")]
    ZeroInterval { tier: usize },

    #[error("Step fraction must be in (0, 1], got {0}")]
    InvalidStepFraction(f64),

    #[error("Deceleration threshold must be in [0, 1], got {0}")]
    InvalidThreshold(f64),
}

/// Which of the two schedules a tick runs on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ScheduleKind {
    Accelerating,
    Decelerating,
}

/// Ordered tick delays, indexed by speed tier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RampSchedule {
    intervals_ms: Vec<u64>,
}

impl RampSchedule {
    pub fn new(intervals_ms: Vec<u64>) -> Result<Self, RampError> {
        if intervals_ms.is_empty() {
            return Err(RampError::EmptySchedule);
        }
        if let Some(tier) = intervals_ms.iter().position(|ms| *ms == 0) {
            return Err(RampError::ZeroInterval { tier });
        }
        Ok(Self { intervals_ms })
    }

    /// Delay for a speed tier. Tiers past the end reuse the last entry.
    pub fn interval(&self, tier: usize) -> Duration {
        let idx = tier.min(self.last_tier());
        Duration::from_millis(self.intervals_ms[idx])
    }

    /// Highest meaningful tier index.
    pub fn last_tier(&self) -> usize {
        self.intervals_ms.len() - 1
    }

    pub fn intervals_ms(&self) -> &[u64] {
        &self.intervals_ms
    }
}

/// Both schedules plus the step and threshold that drive them.
#[derive(Debug, Clone, PartialEq)]
pub struct RampProfile {
    accelerating: RampSchedule,
    decelerating: RampSchedule,
    step_fraction: f64,
    deceleration_threshold: f64,
}

impl RampProfile {
    pub fn new(
        accelerating: RampSchedule,
        decelerating: RampSchedule,
        step_fraction: f64,
        deceleration_threshold: f64,
    ) -> Result<Self, RampError> {
        if !(step_fraction > 0.0 && step_fraction <= 1.0) {
            return Err(RampError::InvalidStepFraction(step_fraction));
        }
        if !(0.0..=1.0).contains(&deceleration_threshold) {
            return Err(RampError::InvalidThreshold(deceleration_threshold));
        }
        Ok(Self {
            accelerating,
            decelerating,
            step_fraction,
            deceleration_threshold,
        })
    }

    pub fn schedule(&self, kind: ScheduleKind) -> &RampSchedule {
        match kind {
            ScheduleKind::Accelerating => &self.accelerating,
            ScheduleKind::Decelerating => &self.decelerating,
        }
    }

    pub fn step_fraction(&self) -> f64 {
        self.step_fraction
    }

    pub fn deceleration_threshold(&self) -> f64 {
        self.deceleration_threshold
    }

    /// Schedule for a tick starting at `position`.
    ///
    /// Only forward scrubs inside the final stretch decelerate.
    pub fn select(&self, direction: Direction, position: f64, duration: f64) -> ScheduleKind {
        match direction {
            Direction::Forward if position > duration * self.deceleration_threshold => {
                ScheduleKind::Decelerating
            }
            _ => ScheduleKind::Accelerating,
        }
    }
}

impl Default for RampProfile {
    fn default() -> Self {
        Self {
            accelerating: RampSchedule {
                intervals_ms: DEFAULT_ACCELERATING_MS.to_vec(),
            },
            decelerating: RampSchedule {
                intervals_ms: DEFAULT_DECELERATING_MS.to_vec(),
            },
            step_fraction: DEFAULT_STEP_FRACTION,
            deceleration_threshold: DEFAULT_DECELERATION_THRESHOLD,
        }
    }
}

/// Virtual position after one repeat tick.
///
/// Forward ticks add `duration * step_fraction` and stop at `duration`.
/// Backward ticks subtract the same amount while more than one skip length
/// remains, then snap to zero. The result always lies in `[0, duration]`.
pub fn next_scrub_position(
    position: f64,
    duration: f64,
    direction: Direction,
    skip_length: f64,
    step_fraction: f64,
) -> f64 {
    let step = duration * step_fraction;
    match direction {
        Direction::Forward => {
            if position < duration {
                (position + step).min(duration)
            } else {
                duration
            }
        }
        Direction::Backward => {
            if position > skip_length {
                (position - step).max(0.0)
            } else {
                0.0
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn default_profile_schedules() {
        let profile = RampProfile::default();
        assert_eq!(
            profile.schedule(ScheduleKind::Accelerating).intervals_ms(),
            &[100, 200, 300, 400, 500]
        );
        assert_eq!(
            profile.schedule(ScheduleKind::Decelerating).intervals_ms(),
            &[500, 400, 300, 200, 100]
        );
        assert_eq!(profile.step_fraction(), 0.03);
        assert_eq!(profile.deceleration_threshold(), 0.7);
    }

    #[test]
    fn schedule_rejects_empty_and_zero() {
        assert_eq!(RampSchedule::new(vec![]), Err(RampError::EmptySchedule));
        assert_eq!(
            RampSchedule::new(vec![100, 0, 50]),
            Err(RampError::ZeroInterval { tier: 1 })
        );
    }

    #[test]
    fn schedule_interval_saturates_at_last_tier() {
        let schedule = RampSchedule::new(vec![300, 200, 100]).unwrap();
        assert_eq!(schedule.interval(0), Duration::from_millis(300));
        assert_eq!(schedule.interval(2), Duration::from_millis(100));
        assert_eq!(schedule.interval(99), Duration::from_millis(100));
        assert_eq!(schedule.last_tier(), 2);
    }

    #[test]
    fn profile_rejects_bad_fractions() {
        let acc = RampSchedule::new(vec![100]).unwrap();
        let dec = RampSchedule::new(vec![100]).unwrap();
        assert_eq!(
            RampProfile::new(acc.clone(), dec.clone(), 0.0, 0.7),
            Err(RampError::InvalidStepFraction(0.0))
        );
        assert_eq!(
            RampProfile::new(acc, dec, 0.03, 1.5),
            Err(RampError::InvalidThreshold(1.5))
        );
    }

    #[test]
    fn select_decelerates_only_forward_in_final_stretch() {
        let profile = RampProfile::default();
        assert_eq!(
            profile.select(Direction::Forward, 69.0, 100.0),
            ScheduleKind::Accelerating
        );
        assert_eq!(
            profile.select(Direction::Forward, 70.0, 100.0),
            ScheduleKind::Accelerating
        );
        assert_eq!(
            profile.select(Direction::Forward, 70.5, 100.0),
            ScheduleKind::Decelerating
        );
        assert_eq!(
            profile.select(Direction::Backward, 95.0, 100.0),
            ScheduleKind::Accelerating
        );
    }

    #[test]
    fn forward_steps_three_percent() {
        assert!(close(
            next_scrub_position(0.0, 100.0, Direction::Forward, 10.0, 0.03),
            3.0
        ));
        assert!(close(
            next_scrub_position(95.0, 100.0, Direction::Forward, 10.0, 0.03),
            98.0
        ));
    }

    #[test]
    fn forward_clamps_at_duration() {
        assert_eq!(
            next_scrub_position(98.0, 100.0, Direction::Forward, 10.0, 0.03),
            100.0
        );
        assert_eq!(
            next_scrub_position(100.0, 100.0, Direction::Forward, 10.0, 0.03),
            100.0
        );
    }

    #[test]
    fn backward_snaps_to_zero_within_one_skip() {
        assert!(close(
            next_scrub_position(50.0, 100.0, Direction::Backward, 10.0, 0.03),
            47.0
        ));
        assert_eq!(
            next_scrub_position(10.0, 100.0, Direction::Backward, 10.0, 0.03),
            0.0
        );
        assert_eq!(
            next_scrub_position(4.0, 100.0, Direction::Backward, 10.0, 0.03),
            0.0
        );
    }

    #[test]
    fn backward_never_goes_negative_with_small_skip() {
        // Step (30s) larger than the skip length (1s)
        assert_eq!(
            next_scrub_position(20.0, 1000.0, Direction::Backward, 1.0, 0.03),
            0.0
        );
    }

    #[test]
    fn forward_run_converges_monotonically() {
        for duration in [1.0, 7.5, 100.0, 3600.0] {
            let mut position = 0.0;
            let mut steps = 0;
            while position < duration {
                let next = next_scrub_position(position, duration, Direction::Forward, 10.0, 0.03);
                assert!(next > position);
                assert!(next <= duration);
                position = next;
                steps += 1;
                assert!(steps <= 34, "forward run did not converge for {}", duration);
            }
            assert_eq!(position, duration);
        }
    }

    #[test]
    fn backward_run_converges_monotonically() {
        for (duration, start) in [(1.0, 1.0), (100.0, 100.0), (100.0, 57.0), (3600.0, 1800.0)] {
            let mut position = start;
            let mut steps = 0;
            while position > 0.0 {
                let next = next_scrub_position(position, duration, Direction::Backward, 10.0, 0.03);
                assert!(next < position);
                assert!(next >= 0.0);
                position = next;
                steps += 1;
                assert!(steps <= 35, "backward run did not converge for {}", duration);
            }
        }
    }
}
