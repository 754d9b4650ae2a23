//! Interactive terminal remote.
//!
//! Arrow keys act as the d-pad of a TV remote against a simulated player.
//! Tapping skips, holding scrubs, releasing commits. Up and Down show and
//! hide the controls overlay, Back leaves the player.

use std::cell::{Cell, RefCell};
use std::io::{self, Write};
use std::rc::Rc;
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::{
    cursor::{Hide, Show},
    event::{
        self, Event, KeyEventKind, KeyboardEnhancementFlags, PopKeyboardEnhancementFlags,
        PushKeyboardEnhancementFlags,
    },
    execute,
    terminal::{self, EnterAlternateScreen, LeaveAlternateScreen},
};
use tracing::debug;

use seekramp::cli::PlayArgs;
use seekramp::input::{self, map_key, ButtonEvent, KeyCommand, RepeatTimer, RepeatTiming, Routed};
use seekramp::player::{known_seconds, PlayerHandle, SimulatedPlayer};
use seekramp::render::{
    render_header, render_help, render_progress_bar, render_status_bar, ControlsOverlay,
    MediaInfo, StatusLine,
};
use seekramp::session;
use seekramp::status::{ErrorEvent, Listeners, VideoStatus};
use seekramp::{Config, SeekRampController};

/// Upper bound on the time between redraws.
const FRAME: Duration = Duration::from_millis(100);

/// What the UI shows, fed by the controller's listeners.
#[derive(Default)]
struct UiFeed {
    status: Rc<Cell<Option<VideoStatus>>>,
    error: Rc<RefCell<Option<ErrorEvent>>>,
    exit: Rc<Cell<bool>>,
}

impl UiFeed {
    fn listeners(&self) -> Listeners {
        let status = Rc::clone(&self.status);
        let error = Rc::clone(&self.error);
        let exit = Rc::clone(&self.exit);
        Listeners::new()
            .with_status(move |s: &VideoStatus| status.set(Some(*s)))
            .with_error(move |e: &ErrorEvent| *error.borrow_mut() = Some(e.clone()))
            .with_exit(move || exit.set(true))
    }
}

/// Screen state owned by the loop.
struct Ui {
    info: MediaInfo,
    overlay: ControlsOverlay,
    show_help: bool,
}

#[cfg(not(tarpaulin_include))]
pub fn handle(args: &PlayArgs, config: &Config) -> Result<()> {
    let mut player = SimulatedPlayer::new(args.duration)
        .starting_at(args.start)
        .live(args.live);
    for at in &args.ad_at {
        player = player.with_ad_cue(*at, args.ad_length);
    }

    let feed = UiFeed::default();
    let mut controller = session::start(move || anyhow::Ok(player), config, feed.listeners())?;
    let mut timer = RepeatTimer::new(RepeatTiming::new(
        &config.input,
        &controller.settings().profile,
    ));
    let mut ui = Ui {
        info: MediaInfo::new(args.title.as_str(), args.description.as_str()),
        overlay: ControlsOverlay::new(config.controls.hide_after()),
        show_help: false,
    };
    ui.overlay.show_and_hide(Instant::now());

    let mut stdout = io::stdout();
    terminal::enable_raw_mode()?;
    execute!(stdout, EnterAlternateScreen, Hide)?;

    let enhanced = matches!(terminal::supports_keyboard_enhancement(), Ok(true));
    if enhanced {
        execute!(
            stdout,
            PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::REPORT_EVENT_TYPES)
        )?;
    }
    debug!(enhanced, "terminal keyboard mode");

    let result = run_loop(&mut stdout, &mut controller, &mut timer, &feed, &mut ui);

    // Restore the terminal even if the loop failed
    if enhanced {
        let _ = execute!(stdout, PopKeyboardEnhancementFlags);
    }
    let _ = execute!(stdout, Show, LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    result
}

/// Route one button event and update the overlay from the outcome.
#[cfg(not(tarpaulin_include))]
fn dispatch(
    event: ButtonEvent,
    controller: &mut SeekRampController<SimulatedPlayer>,
    timer: &mut RepeatTimer,
    overlay: &mut ControlsOverlay,
) {
    match input::route(event, controller, timer) {
        Routed::Applied | Routed::ShowControls => overlay.show_and_hide(Instant::now()),
        Routed::HideControls => overlay.hide(),
        Routed::Ignored | Routed::Exit => {}
    }
}

#[cfg(not(tarpaulin_include))]
fn run_loop(
    stdout: &mut io::Stdout,
    controller: &mut SeekRampController<SimulatedPlayer>,
    timer: &mut RepeatTimer,
    feed: &UiFeed,
    ui: &mut Ui,
) -> Result<()> {
    let mut last_frame = Instant::now();
    let mut needs_render = true;

    loop {
        let now = Instant::now();
        let elapsed = now.duration_since(last_frame).as_secs_f64();
        last_frame = now;

        let player_events = controller.player_mut().advance(elapsed);
        needs_render |= !player_events.is_empty();
        for event in player_events {
            controller.handle_player_event(event);
        }

        while let Some(event) = timer.poll(Instant::now()) {
            dispatch(event, controller, timer, &mut ui.overlay);
            needs_render = true;
        }

        if feed.exit.get() {
            return Ok(());
        }

        needs_render |= ui.overlay.expire(Instant::now());

        if needs_render && !ui.show_help {
            render_frame(stdout, controller, feed, ui)?;
            needs_render = false;
        }

        let timeout = [timer.next_deadline(), ui.overlay.next_deadline()]
            .into_iter()
            .flatten()
            .min()
            .map(|deadline| deadline.saturating_duration_since(Instant::now()))
            .unwrap_or(FRAME)
            .min(FRAME);

        if !event::poll(timeout)? {
            continue;
        }

        match event::read()? {
            Event::Key(key) => {
                if ui.show_help {
                    // Any key closes help
                    if key.kind != KeyEventKind::Release {
                        ui.show_help = false;
                        needs_render = true;
                    }
                    continue;
                }

                match map_key(&key) {
                    Some(KeyCommand::Quit) => return Ok(()),
                    Some(KeyCommand::ToggleHelp) => {
                        ui.show_help = true;
                        let (cols, rows) = terminal::size()?;
                        render_help(stdout, cols, rows)?;
                    }
                    Some(KeyCommand::ButtonDown(button)) => {
                        for event in timer.key_down(button, Instant::now()) {
                            dispatch(event, controller, timer, &mut ui.overlay);
                        }
                        needs_render = true;
                    }
                    Some(KeyCommand::ButtonUp(button)) => {
                        if let Some(event) = timer.key_up(button) {
                            dispatch(event, controller, timer, &mut ui.overlay);
                            needs_render = true;
                        }
                    }
                    None => {}
                }

                if feed.exit.get() {
                    return Ok(());
                }
            }
            Event::Resize(_, _) => needs_render = true,
            _ => {}
        }
    }
}

#[cfg(not(tarpaulin_include))]
fn render_frame(
    stdout: &mut io::Stdout,
    controller: &SeekRampController<SimulatedPlayer>,
    feed: &UiFeed,
    ui: &Ui,
) -> Result<()> {
    let (cols, rows) = terminal::size()?;
    let player = controller.player();

    let status = feed.status.get().unwrap_or_else(|| {
        VideoStatus::new(
            player.position(),
            known_seconds(player.duration()).unwrap_or(0.0),
            seekramp::status::StatusPhase::Playing,
        )
    });

    render_header(stdout, &ui.info, player.is_ad_playing(), player.has_ended())?;

    write!(stdout, "\x1b[3;1H\x1b[2K")?;
    if let Some(error) = feed.error.borrow().as_ref() {
        write!(stdout, "\x1b[31m error: {}\x1b[0m", error)?;
    }

    let progress_row = rows.saturating_sub(2);
    let status_row = rows.saturating_sub(1);
    let paused = player.is_paused() || player.is_ad_paused();
    if !ui.overlay.is_visible(Instant::now(), paused) {
        write!(
            stdout,
            "\x1b[{};1H\x1b[2K\x1b[{};1H\x1b[2K",
            progress_row + 1,
            status_row + 1
        )?;
        stdout.flush()?;
        return Ok(());
    }

    let cues: Vec<f64> = player.ad_cues().iter().map(|cue| cue.at).collect();
    render_progress_bar(stdout, cols, progress_row, &status, &cues)?;

    let line = StatusLine {
        phase: feed.status.get().map(|s| s.phase),
        paused,
        live: player.is_live(),
        ad_playing: player.is_ad_playing(),
        controller: controller.state(),
    };
    render_status_bar(stdout, cols, status_row, &line)?;

    stdout.flush()?;
    Ok(())
}
