//! Routing button events to the seek controller.

use tracing::trace;

use super::{Button, ButtonAction, ButtonEvent, RepeatTimer};
use crate::player::PlayerHandle;
use crate::seek::SeekRampController;

/// What routing one button event did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Routed {
    /// No effect
    Ignored,
    /// The controller acted on the event
    Applied,
    /// Show the controls overlay, then hide it after the configured delay
    ShowControls,
    /// Hide the controls overlay now
    HideControls,
    /// Exit listeners were notified
    Exit,
}

/// Forward one button event to the controller.
///
/// Accepted repeat ticks hand their interval back to `timer`, so the next
/// tick follows the ramp schedule. Up, Down and Back only act on press.
pub fn route<P: PlayerHandle>(
    event: ButtonEvent,
    controller: &mut SeekRampController<P>,
    timer: &mut RepeatTimer,
) -> Routed {
    trace!(?event, "button event");

    if let Some(direction) = event.button.direction() {
        let applied = match event.action {
            ButtonAction::Press => controller.on_directional_press(direction),
            ButtonAction::Repeat => match controller.on_repeat_tick(direction) {
                Some(outcome) => {
                    timer.set_interval(outcome.interval);
                    true
                }
                None => false,
            },
            ButtonAction::Release => controller.on_release().is_some(),
        };
        return if applied {
            Routed::Applied
        } else {
            Routed::Ignored
        };
    }

    if event.action != ButtonAction::Press {
        return Routed::Ignored;
    }

    match event.button {
        Button::Select | Button::PlayPause => match controller.toggle_play_pause() {
            Some(_) => Routed::Applied,
            None => Routed::Ignored,
        },
        Button::Back => {
            controller.request_exit();
            Routed::Exit
        }
        Button::Up => Routed::ShowControls,
        Button::Down => {
            // Controls stay up while paused
            let player = controller.player();
            if player.is_paused() || player.is_ad_paused() {
                Routed::Ignored
            } else {
                Routed::HideControls
            }
        }
        _ => Routed::Ignored,
    }
}
