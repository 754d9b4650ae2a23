//! Scripted button sequences.
//!
//! Runs press / repeat / release against a simulated player and prints
//! every notification, seek and tick as one JSON object per line.

use std::cell::RefCell;
use std::io::{self, Write};
use std::rc::Rc;

use anyhow::Result;
use serde::Serialize;

use seekramp::cli::SimulateArgs;
use seekramp::player::{PlayerHandle, SimulatedPlayer};
use seekramp::seek::{Direction, ScheduleKind, SeekRampController};
use seekramp::status::{ErrorEvent, Listeners, VideoStatus};
use seekramp::Config;

/// Length of the ad break started by `--ad`.
const SIMULATED_AD_SECS: f64 = 30.0;

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "event", rename_all = "camelCase")]
enum Entry {
    VideoStatus(VideoStatus),
    Error(ErrorEvent),
    Seek {
        #[serde(rename = "positionMs")]
        position_ms: u64,
    },
    Tick {
        position: f64,
        schedule: ScheduleKind,
        #[serde(rename = "speedTier")]
        speed_tier: usize,
        #[serde(rename = "intervalMs")]
        interval_ms: u64,
    },
}

type Journal = Rc<RefCell<Vec<Entry>>>;

/// Player wrapper that journals seeks in order with the notifications.
struct JournaledPlayer<P> {
    inner: P,
    journal: Journal,
}

impl<P: PlayerHandle> PlayerHandle for JournaledPlayer<P> {
    fn current_time(&self) -> Option<f64> {
        self.inner.current_time()
    }

    fn duration(&self) -> Option<f64> {
        self.inner.duration()
    }

    fn seek_to(&mut self, position_ms: u64) {
        self.journal.borrow_mut().push(Entry::Seek { position_ms });
        self.inner.seek_to(position_ms);
    }

    fn play(&mut self) {
        self.inner.play();
    }

    fn pause(&mut self) {
        self.inner.pause();
    }

    fn is_paused(&self) -> bool {
        self.inner.is_paused()
    }

    fn is_ad_playing(&self) -> bool {
        self.inner.is_ad_playing()
    }

    fn is_ad_paused(&self) -> bool {
        self.inner.is_ad_paused()
    }

    fn is_live(&self) -> bool {
        self.inner.is_live()
    }
}

fn build_player(args: &SimulateArgs) -> SimulatedPlayer {
    let player = if args.unknown_duration {
        SimulatedPlayer::with_unknown_duration()
    } else {
        SimulatedPlayer::new(args.duration)
    };
    let mut player = player.starting_at(args.start).live(args.live);
    if args.ad {
        player.start_ad_break(SIMULATED_AD_SECS);
    }
    player
}

pub fn handle(args: &SimulateArgs, config: &Config) -> Result<()> {
    let mut seek = config.seek.clone();
    if let Some(skip) = args.skip {
        seek.skip_length_secs = skip;
    }
    let settings = seek.settings()?;

    let journal: Journal = Rc::default();
    let status_sink = Rc::clone(&journal);
    let error_sink = Rc::clone(&journal);
    let listeners = Listeners::new()
        .with_status(move |status: &VideoStatus| {
            status_sink.borrow_mut().push(Entry::VideoStatus(*status))
        })
        .with_error(move |event: &ErrorEvent| {
            error_sink.borrow_mut().push(Entry::Error(event.clone()))
        });

    let player = JournaledPlayer {
        inner: build_player(args),
        journal: Rc::clone(&journal),
    };
    let mut controller = SeekRampController::new(player, settings, listeners);
    let direction = Direction::from(args.direction);

    if args.press {
        controller.on_directional_press(direction);
    }
    for _ in 0..args.ticks {
        if let Some(outcome) = controller.on_repeat_tick(direction) {
            journal.borrow_mut().push(Entry::Tick {
                position: outcome.position,
                schedule: outcome.schedule,
                speed_tier: outcome.speed_tier,
                interval_ms: outcome.interval.as_millis() as u64,
            });
        }
    }
    if !args.no_release {
        controller.on_release();
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    for entry in journal.borrow().iter() {
        serde_json::to_writer(&mut out, entry)?;
        writeln!(out)?;
    }
    out.flush()?;

    Ok(())
}
