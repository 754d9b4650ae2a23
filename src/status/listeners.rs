//! Listener registry.

use std::cell::RefCell;
use std::rc::Rc;

use super::{ErrorEvent, VideoStatus};

/// Receives `videoStatus` notifications.
pub trait StatusListener {
    fn on_status(&mut self, status: &VideoStatus);
}

impl<F> StatusListener for F
where
    F: FnMut(&VideoStatus),
{
    fn on_status(&mut self, status: &VideoStatus) {
        self(status)
    }
}

/// Receives `error` notifications.
pub trait ErrorListener {
    fn on_error(&mut self, event: &ErrorEvent);
}

impl<F> ErrorListener for F
where
    F: FnMut(&ErrorEvent),
{
    fn on_error(&mut self, event: &ErrorEvent) {
        self(event)
    }
}

/// Receives the `exit` notification (the viewer asked to leave playback).
pub trait ExitListener {
    fn on_exit(&mut self);
}

impl<F> ExitListener for F
where
    F: FnMut(),
{
    fn on_exit(&mut self) {
        self()
    }
}

/// Ordered collection of status, error and exit listeners.
///
/// Emission is synchronous: `emit_status` returns only after every
/// listener has seen the value, in registration order.
#[derive(Default)]
pub struct Listeners {
    status: Vec<Box<dyn StatusListener>>,
    errors: Vec<Box<dyn ErrorListener>>,
    exits: Vec<Box<dyn ExitListener>>,
}

impl Listeners {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a status listener. Builder-style for setup code.
    pub fn with_status(mut self, listener: impl StatusListener + 'static) -> Self {
        self.add_status(listener);
        self
    }

    /// Register an error listener. Builder-style for setup code.
    pub fn with_error(mut self, listener: impl ErrorListener + 'static) -> Self {
        self.add_error(listener);
        self
    }

    /// Register an exit listener. Builder-style for setup code.
    pub fn with_exit(mut self, listener: impl ExitListener + 'static) -> Self {
        self.add_exit(listener);
        self
    }

    pub fn add_status(&mut self, listener: impl StatusListener + 'static) {
        self.status.push(Box::new(listener));
    }

    pub fn add_error(&mut self, listener: impl ErrorListener + 'static) {
        self.errors.push(Box::new(listener));
    }

    pub fn add_exit(&mut self, listener: impl ExitListener + 'static) {
        self.exits.push(Box::new(listener));
    }

    pub fn emit_status(&mut self, status: &VideoStatus) {
        for listener in &mut self.status {
            listener.on_status(status);
        }
    }

    pub fn emit_error(&mut self, event: &ErrorEvent) {
        for listener in &mut self.errors {
            listener.on_error(event);
        }
    }

    pub fn emit_exit(&mut self) {
        for listener in &mut self.exits {
            listener.on_exit();
        }
    }

    pub fn status_count(&self) -> usize {
        self.status.len()
    }

    pub fn error_count(&self) -> usize {
        self.errors.len()
    }

    pub fn exit_count(&self) -> usize {
        self.exits.len()
    }
}

impl std::fmt::Debug for Listeners {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Listeners")
            .field("status", &self.status.len())
            .field("errors", &self.errors.len())
            .field("exits", &self.exits.len())
            .finish()
    }
}

/// Shared in-memory log of everything a session emitted.
///
/// Clones share the same log, so one clone can be registered with
/// [`Listeners`] while another is kept for inspection.
#[derive(Debug, Clone, Default)]
pub struct StatusRecorder {
    statuses: Rc<RefCell<Vec<VideoStatus>>>,
    errors: Rc<RefCell<Vec<ErrorEvent>>>,
    exits: Rc<RefCell<usize>>,
}

impl StatusRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with this recorder attached to every notification.
    pub fn listeners(&self) -> Listeners {
        Listeners::new()
            .with_status(self.clone())
            .with_error(self.clone())
            .with_exit(self.clone())
    }

    pub fn statuses(&self) -> Vec<VideoStatus> {
        self.statuses.borrow().clone()
    }

    pub fn errors(&self) -> Vec<ErrorEvent> {
        self.errors.borrow().clone()
    }

    /// How many `exit` notifications arrived.
    pub fn exits(&self) -> usize {
        *self.exits.borrow()
    }

    pub fn last(&self) -> Option<VideoStatus> {
        self.statuses.borrow().last().copied()
    }

    pub fn clear(&self) {
        self.statuses.borrow_mut().clear();
        self.errors.borrow_mut().clear();
        *self.exits.borrow_mut() = 0;
    }
}

impl StatusListener for StatusRecorder {
    fn on_status(&mut self, status: &VideoStatus) {
        self.statuses.borrow_mut().push(*status);
    }
}

impl ErrorListener for StatusRecorder {
    fn on_error(&mut self, event: &ErrorEvent) {
        self.errors.borrow_mut().push(event.clone());
    }
}

impl ExitListener for StatusRecorder {
    fn on_exit(&mut self) {
        *self.exits.borrow_mut() += 1;
    }
}
