//! Presentation-facing events.
//!
//! Every session operation returns the events it produced, in order, and
//! also pushes them to the session's [`Observer`]. These events are the
//! whole surface a UI needs; it never reads engine internals to learn
//! what changed.

use std::cell::RefCell;
use std::rc::Rc;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::Card;
use crate::core::{Team, TeamId};

/// Something the presentation layer may want to show or announce.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum SessionEvent {
    CardDrawn { card: Card },
    CardCleared,
    TeamAdded { team: Team },
    TeamMoved { team: TeamId, position: u32 },
    TurnChanged { team: TeamId },
    TimerTick { seconds: u32 },
    TimerExpired,
    SpecialSpaceLanded { team: TeamId, position: u32 },
    GameWon { team: Team },
    Reshuffled,
}

/// Events produced by one operation. Most operations emit a handful.
pub type Events = SmallVec<[SessionEvent; 4]>;

/// Receives events as the session produces them.
pub trait Observer {
    fn notify(&mut self, event: &SessionEvent);
}

impl<F> Observer for F
where
    F: FnMut(&SessionEvent),
{
    fn notify(&mut self, event: &SessionEvent) {
        self(event)
    }
}

/// Observer that ignores everything.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopObserver;

impl Observer for NoopObserver {
    fn notify(&mut self, _event: &SessionEvent) {}
}

/// Observer that records every event. Clones share the same log.
#[derive(Clone, Debug, Default)]
pub struct EventLog {
    events: Rc<RefCell<Vec<SessionEvent>>>,
}

impl EventLog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of every event seen so far.
    #[must_use]
    pub fn events(&self) -> Vec<SessionEvent> {
        self.events.borrow().clone()
    }

    /// Remove and return every event seen so far.
    pub fn drain(&self) -> Vec<SessionEvent> {
        std::mem::take(&mut *self.events.borrow_mut())
    }

    /// Count events matching a predicate.
    pub fn count<F>(&self, predicate: F) -> usize
    where
        F: Fn(&SessionEvent) -> bool,
    {
        self.events.borrow().iter().filter(|e| predicate(e)).count()
    }
}

impl Observer for EventLog {
    fn notify(&mut self, event: &SessionEvent) {
        self.events.borrow_mut().push(event.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_log_shares_state() {
        let log = EventLog::new();
        let mut handle = log.clone();

        handle.notify(&SessionEvent::Reshuffled);
        handle.notify(&SessionEvent::TimerTick { seconds: 59 });

        assert_eq!(log.events().len(), 2);
        assert_eq!(log.count(|e| matches!(e, SessionEvent::Reshuffled)), 1);
        assert_eq!(log.drain().len(), 2);
        assert!(log.events().is_empty());
    }

    #[test]
    fn test_closure_observer() {
        let mut seen = 0;
        {
            let mut observer = |_: &SessionEvent| seen += 1;
            observer.notify(&SessionEvent::CardCleared);
            observer.notify(&SessionEvent::TimerExpired);
        }
        assert_eq!(seen, 2);
    }

    #[test]
    fn test_event_serialization_is_tagged() {
        let event = SessionEvent::TeamMoved {
            team: TeamId::new(2),
            position: 13,
        };
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["type"], "teamMoved");
        assert_eq!(json["position"], 13);
    }
}
