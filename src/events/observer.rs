//! Observer seam between the board and its collaborators.
//!
//! Anything implementing [`BoardObserver`] can be subscribed to a board.
//! Closures, `mpsc::Sender`s and the shared [`EventLog`] work out of the box.

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::mpsc::Sender;

use super::event::{AudioCue, BoardEvent};

/// Receives board events after each operation completes.
pub trait BoardObserver {
    fn on_event(&mut self, event: &BoardEvent);
}

impl<F> BoardObserver for F
where
    F: FnMut(&BoardEvent),
{
    fn on_event(&mut self, event: &BoardEvent) {
        self(event);
    }
}

/// Forwards events over a channel, e.g. to a render loop.
///
/// A disconnected receiver is not an error: the board keeps working.
impl BoardObserver for Sender<BoardEvent> {
    fn on_event(&mut self, event: &BoardEvent) {
        if self.send(event.clone()).is_err() {
            tracing::trace!("event receiver dropped");
        }
    }
}

/// Shared, cloneable event recorder.
///
/// Subscribe one clone and keep the other to inspect what happened.
///
/// ```
/// use turtle_mahjong::board::Board;
/// use turtle_mahjong::events::EventLog;
///
/// let log = EventLog::new();
/// let mut board = Board::with_seed(3);
/// board.subscribe(log.clone());
///
/// board.generate_layout();
/// assert_eq!(log.inserted_count(), 144);
/// ```
#[derive(Clone, Debug, Default)]
pub struct EventLog {
    events: Rc<RefCell<Vec<BoardEvent>>>,
}

impl EventLog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of everything recorded so far.
    #[must_use]
    pub fn events(&self) -> Vec<BoardEvent> {
        self.events.borrow().clone()
    }

    /// Remove and return everything recorded so far.
    pub fn drain(&self) -> Vec<BoardEvent> {
        std::mem::take(&mut *self.events.borrow_mut())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.events.borrow().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.borrow().is_empty()
    }

    /// Audio cues in the order they were emitted.
    #[must_use]
    pub fn cues(&self) -> Vec<AudioCue> {
        self.events.borrow().iter().filter_map(BoardEvent::cue).collect()
    }

    #[must_use]
    pub fn inserted_count(&self) -> usize {
        self.count(|e| matches!(e, BoardEvent::TileInserted { .. }))
    }

    #[must_use]
    pub fn removed_count(&self) -> usize {
        self.count(|e| matches!(e, BoardEvent::TileRemoved { .. }))
    }

    fn count(&self, predicate: impl Fn(&BoardEvent) -> bool) -> usize {
        self.events.borrow().iter().filter(|e| predicate(e)).count()
    }
}

impl BoardObserver for EventLog {
    fn on_event(&mut self, event: &BoardEvent) {
        self.events.borrow_mut().push(event.clone());
    }
}
