//! End-to-end button sequences against the controller

use seekramp::player::{PlayerEvent, PlayerHandle, SimulatedPlayer};
use seekramp::seek::ScheduleKind;
use seekramp::status::StatusPhase;
use seekramp::Direction;

use crate::helpers::{controller, status_log};

// ============================================================================
// Scrub Scenarios
// ============================================================================

#[test]
fn forward_scrub_from_start_commits_with_overshoot_correction() {
    let (mut ctl, recorder) = controller(SimulatedPlayer::new(100.0));

    for _ in 0..3 {
        ctl.on_repeat_tick(Direction::Forward).unwrap();
    }
    assert_eq!(ctl.on_release(), Some(0.0));

    insta::assert_snapshot!(status_log(&recorder.statuses()), @r"
    playing 0.000/100.000
    seeking 3.000/100.000
    playing 3.000/100.000
    seeking 6.000/100.000
    playing 6.000/100.000
    seeking 9.000/100.000
    playing 0.000/100.000
    seeking 0.000/100.000
    ");
    assert_eq!(ctl.player().seek_history(), &[0]);
}

#[test]
fn scrub_past_threshold_runs_on_decelerating_schedule() {
    let (mut ctl, recorder) = controller(SimulatedPlayer::new(100.0).starting_at(95.0));

    let tick = ctl.on_repeat_tick(Direction::Forward).unwrap();
    assert_eq!(tick.position, 98.0);
    assert_eq!(tick.schedule, ScheduleKind::Decelerating);
    assert_eq!(tick.interval.as_millis(), 500);

    assert_eq!(ctl.on_release(), Some(88.0));
    insta::assert_snapshot!(status_log(&recorder.statuses()), @r"
    playing 95.000/100.000
    seeking 98.000/100.000
    playing 88.000/100.000
    seeking 88.000/100.000
    ");
    assert_eq!(ctl.player().position(), 88.0);
}

#[test]
fn forward_scrub_that_reaches_the_end_commits_the_end() {
    let (mut ctl, _recorder) = controller(SimulatedPlayer::new(100.0).starting_at(95.0));

    ctl.on_repeat_tick(Direction::Forward).unwrap();
    let tick = ctl.on_repeat_tick(Direction::Forward).unwrap();
    assert_eq!(tick.position, 100.0);

    assert_eq!(ctl.on_release(), Some(100.0));
    assert_eq!(ctl.player().seek_history(), &[100_000]);
}

#[test]
fn backward_scrub_commits_one_skip_ahead() {
    let (mut ctl, _recorder) = controller(SimulatedPlayer::new(100.0).starting_at(50.0));

    ctl.on_repeat_tick(Direction::Backward).unwrap();
    let tick = ctl.on_repeat_tick(Direction::Backward).unwrap();
    assert_eq!(tick.position, 44.0);
    assert_eq!(tick.schedule, ScheduleKind::Accelerating);

    assert_eq!(ctl.on_release(), Some(54.0));
    assert_eq!(ctl.player().position(), 54.0);
}

#[test]
fn backward_scrub_inside_first_skip_snaps_to_start() {
    let (mut ctl, _recorder) = controller(SimulatedPlayer::new(100.0).starting_at(5.0));

    let tick = ctl.on_repeat_tick(Direction::Backward).unwrap();
    assert_eq!(tick.position, 0.0);
    assert_eq!(ctl.on_release(), Some(0.0));
}

#[test]
fn held_button_climbs_the_accelerating_ramp_and_saturates() {
    let (mut ctl, _recorder) = controller(SimulatedPlayer::new(1000.0));

    let intervals: Vec<u128> = (0..7)
        .map(|_| {
            ctl.on_repeat_tick(Direction::Forward)
                .unwrap()
                .interval
                .as_millis()
        })
        .collect();
    assert_eq!(intervals, vec![100, 200, 300, 400, 500, 500, 500]);
}

#[test]
fn crossing_the_threshold_restarts_the_tier_on_the_decelerating_schedule() {
    let (mut ctl, _recorder) = controller(SimulatedPlayer::new(100.0).starting_at(64.0));

    // Selection uses the pre-tick position, so the tick from 70 stays accelerating
    let first = ctl.on_repeat_tick(Direction::Forward).unwrap();
    assert_eq!(first.schedule, ScheduleKind::Accelerating);
    assert_eq!(first.speed_tier, 0);

    ctl.on_repeat_tick(Direction::Forward).unwrap();
    let third = ctl.on_repeat_tick(Direction::Forward).unwrap();
    assert_eq!(third.schedule, ScheduleKind::Accelerating);
    assert_eq!(third.speed_tier, 2);

    let fourth = ctl.on_repeat_tick(Direction::Forward).unwrap();
    assert_eq!(fourth.schedule, ScheduleKind::Decelerating);
    assert_eq!(fourth.speed_tier, 0);
    assert_eq!(fourth.interval.as_millis(), 500);

    let fifth = ctl.on_repeat_tick(Direction::Forward).unwrap();
    assert_eq!(fifth.speed_tier, 1);
    assert_eq!(fifth.interval.as_millis(), 400);
}

// ============================================================================
// Single Step And Toggle
// ============================================================================

#[test]
fn tap_seeks_one_skip_and_reports_current_position() {
    let (mut ctl, recorder) = controller(SimulatedPlayer::new(100.0).starting_at(20.0));

    assert!(ctl.on_directional_press(Direction::Forward));
    insta::assert_snapshot!(status_log(&recorder.statuses()), @r"
    playing 20.000/100.000
    seeking 20.000/100.000
    ");
    assert_eq!(ctl.player().seek_history(), &[30_000]);
    assert!(ctl.scrub().is_none());
}

#[test]
fn play_pause_still_works_during_an_ad() {
    let mut player = SimulatedPlayer::new(100.0).starting_at(10.0);
    player.start_ad_break(15.0);
    let (mut ctl, recorder) = controller(player);

    assert!(!ctl.on_directional_press(Direction::Forward));
    assert_eq!(ctl.toggle_play_pause(), Some(StatusPhase::Paused));
    assert!(ctl.player().is_ad_paused());
    assert!(!ctl.player().is_paused());
    assert!(recorder.statuses().is_empty());

    assert_eq!(ctl.toggle_play_pause(), Some(StatusPhase::Resumed));
    insta::assert_snapshot!(status_log(&recorder.statuses()), @"resumed 10.000/100.000");
    assert!(ctl.player().seek_history().is_empty());
}

// ============================================================================
// Guards
// ============================================================================

#[test]
fn live_stream_ignores_every_directional_operation() {
    let (mut ctl, recorder) = controller(SimulatedPlayer::new(100.0).live(true));

    assert!(!ctl.on_directional_press(Direction::Forward));
    assert!(ctl.on_repeat_tick(Direction::Forward).is_none());
    assert_eq!(ctl.on_release(), None);

    assert!(recorder.statuses().is_empty());
    assert!(ctl.player().seek_history().is_empty());
}

#[test]
fn unknown_duration_makes_the_press_a_no_op() {
    let (mut ctl, recorder) = controller(SimulatedPlayer::with_unknown_duration());

    assert!(!ctl.on_directional_press(Direction::Backward));
    assert!(recorder.statuses().is_empty());

    let event = ctl.player_mut().resolve_duration(120.0);
    ctl.handle_player_event(event);
    assert!(ctl.on_directional_press(Direction::Forward));
    assert_eq!(ctl.player().seek_history(), &[10_000]);
}

#[test]
fn reversing_mid_scrub_is_ignored_until_release() {
    let (mut ctl, _recorder) = controller(SimulatedPlayer::new(100.0).starting_at(40.0));

    ctl.on_repeat_tick(Direction::Forward).unwrap();
    assert!(ctl.on_repeat_tick(Direction::Backward).is_none());
    assert_eq!(ctl.scrub().unwrap().virtual_position, 43.0);

    assert_eq!(ctl.on_release(), Some(33.0));
    let tick = ctl.on_repeat_tick(Direction::Backward).unwrap();
    assert_eq!(tick.speed_tier, 0);
}

#[test]
fn ad_break_during_scrub_cancels_without_seeking() {
    let (mut ctl, recorder) = controller(SimulatedPlayer::new(100.0).starting_at(10.0));

    ctl.on_repeat_tick(Direction::Forward).unwrap();
    let event = ctl.player_mut().start_ad_break(20.0);
    ctl.handle_player_event(event);
    recorder.clear();

    assert_eq!(ctl.on_release(), None);
    assert!(recorder.statuses().is_empty());
    assert!(ctl.player().seek_history().is_empty());
}

#[test]
fn time_updates_are_hidden_while_scrubbing() {
    let (mut ctl, recorder) = controller(SimulatedPlayer::new(100.0));

    ctl.on_repeat_tick(Direction::Forward).unwrap();
    recorder.clear();
    ctl.handle_player_event(PlayerEvent::TimeUpdate);
    assert!(recorder.statuses().is_empty());

    ctl.on_release();
    recorder.clear();
    ctl.handle_player_event(PlayerEvent::TimeUpdate);
    assert_eq!(recorder.statuses().len(), 1);
}
