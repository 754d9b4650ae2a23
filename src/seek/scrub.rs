//! Scrub direction and the state of an active scrub.

use serde::{Deserialize, Serialize};

use super::ramp::{RampProfile, ScheduleKind};

/// Logical direction of a directional button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Backward,
    Forward,
}

impl Direction {
    /// `+1.0` forward, `-1.0` backward.
    pub fn sign(&self) -> f64 {
        match self {
            Self::Forward => 1.0,
            Self::Backward => -1.0,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Forward => "forward",
            Self::Backward => "backward",
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// State of a scrub in progress.
///
/// Created by the first repeat tick, dropped on release or cancellation.
#[derive(Debug, Clone, PartialEq)]
pub struct ScrubState {
    /// Position shown to the UI, in `[0, duration]`
    pub virtual_position: f64,
    pub direction: Direction,
    pub schedule: ScheduleKind,
    /// Index into the active schedule
    pub speed_tier: usize,
    /// Ticks applied so far
    pub ticks: u32,
}

impl ScrubState {
    pub fn begin(position: f64, direction: Direction) -> Self {
        Self {
            virtual_position: position,
            direction,
            schedule: ScheduleKind::Accelerating,
            speed_tier: 0,
            ticks: 0,
        }
    }

    /// Move to the schedule for the next tick and pick its speed tier.
    ///
    /// The first tick and any schedule switch start at tier 0; otherwise
    /// the tier climbs until the end of the schedule. Once decelerating,
    /// a run stays decelerating.
    pub fn step_schedule(&mut self, selected: ScheduleKind, profile: &RampProfile) {
        let next = match (self.schedule, selected) {
            (ScheduleKind::Decelerating, _) => ScheduleKind::Decelerating,
            (_, selected) => selected,
        };

        if self.ticks == 0 || next != self.schedule {
            self.speed_tier = 0;
        } else {
            let last = profile.schedule(next).last_tier();
            self.speed_tier = (self.speed_tier + 1).min(last);
        }
        self.schedule = next;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn begin_starts_accelerating_at_tier_zero() {
        let scrub = ScrubState::begin(12.0, Direction::Forward);
        assert_eq!(scrub.virtual_position, 12.0);
        assert_eq!(scrub.schedule, ScheduleKind::Accelerating);
        assert_eq!(scrub.speed_tier, 0);
        assert_eq!(scrub.ticks, 0);
    }

    #[test]
    fn tier_climbs_and_saturates() {
        let profile = RampProfile::default();
        let mut scrub = ScrubState::begin(0.0, Direction::Forward);
        let mut tiers = Vec::new();
        for _ in 0..7 {
            scrub.step_schedule(ScheduleKind::Accelerating, &profile);
            scrub.ticks += 1;
            tiers.push(scrub.speed_tier);
        }
        assert_eq!(tiers, vec![0, 1, 2, 3, 4, 4, 4]);
    }

    #[test]
    fn switch_to_decelerating_resets_tier() {
        let profile = RampProfile::default();
        let mut scrub = ScrubState::begin(0.0, Direction::Forward);
        for _ in 0..3 {
            scrub.step_schedule(ScheduleKind::Accelerating, &profile);
            scrub.ticks += 1;
        }
        assert_eq!(scrub.speed_tier, 2);

        scrub.step_schedule(ScheduleKind::Decelerating, &profile);
        assert_eq!(scrub.schedule, ScheduleKind::Decelerating);
        assert_eq!(scrub.speed_tier, 0);
    }

    #[test]
    fn decelerating_is_sticky() {
        let profile = RampProfile::default();
        let mut scrub = ScrubState::begin(80.0, Direction::Forward);
        scrub.step_schedule(ScheduleKind::Decelerating, &profile);
        scrub.ticks += 1;

        scrub.step_schedule(ScheduleKind::Accelerating, &profile);
        assert_eq!(scrub.schedule, ScheduleKind::Decelerating);
        assert_eq!(scrub.speed_tier, 1);
    }

    #[test]
    fn direction_sign_and_display() {
        assert_eq!(Direction::Forward.sign(), 1.0);
        assert_eq!(Direction::Backward.sign(), -1.0);
        assert_eq!(Direction::Backward.to_string(), "backward");
    }
}
