//=========================================================================
// Menu Events
//=========================================================================
//
// Broadcast of stack transitions to registered listeners.
//
// Architecture:
//   MenuManager → EventHub::publish() → Sender<MenuEvent> (one per listener)
//                                              ↓
//                                   Receiver<MenuEvent> (listener side)
//
// Listeners that drop their receiver are pruned on the next publish.
//
//=========================================================================

//=== External Dependencies ===============================================

use crossbeam_channel::{unbounded, Receiver, Sender};
use log::debug;

//=== Internal Dependencies ===============================================

use crate::core::menu::{BackAction, MenuKey, PanelId};

//=== MenuEvent ===========================================================

/// A transition that happened on the menu stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuEvent<K: MenuKey> {
    /// A panel was pushed and is now the top of the stack.
    Opened { id: PanelId, kind: K },

    /// The top panel was popped. `destroyed` is false when it was retained.
    Closed { id: PanelId, kind: K, destroyed: bool },

    /// The top panel received a back signal and answered with `action`.
    Back { id: PanelId, kind: K, action: BackAction<K> },

    /// Quit was requested.
    QuitRequested,
}

//=== EventHub ============================================================

/// Fan-out of menu events to any number of listeners.
pub(crate) struct EventHub<K: MenuKey> {
    subscribers: Vec<Sender<MenuEvent<K>>>,
}

impl<K: MenuKey> EventHub<K> {
    pub(crate) fn new() -> Self {
        Self {
            subscribers: Vec::new(),
        }
    }

    /// Registers a listener and returns its receiving end.
    pub(crate) fn subscribe(&mut self) -> Receiver<MenuEvent<K>> {
        let (tx, rx) = unbounded();
        self.subscribers.push(tx);
        rx
    }

    /// Sends `event` to every live listener.
    pub(crate) fn publish(&mut self, event: MenuEvent<K>) {
        let before = self.subscribers.len();
        self.subscribers.retain(|tx| tx.send(event).is_ok());

        let pruned = before - self.subscribers.len();
        if pruned > 0 {
            debug!("Pruned {} disconnected menu listener(s)", pruned);
        }
    }

    pub(crate) fn listener_count(&self) -> usize {
        self.subscribers.len()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    enum TestMenu {
        Main,
    }

    impl MenuKey for TestMenu {}

    fn opened() -> MenuEvent<TestMenu> {
        MenuEvent::Opened {
            id: PanelId::from_raw(1),
            kind: TestMenu::Main,
        }
    }

    #[test]
    fn publish_without_listeners_is_noop() {
        let mut hub = EventHub::<TestMenu>::new();
        hub.publish(opened());
        assert_eq!(hub.listener_count(), 0);
    }

    #[test]
    fn every_listener_receives_every_event() {
        let mut hub = EventHub::new();
        let first = hub.subscribe();
        let second = hub.subscribe();

        hub.publish(opened());
        hub.publish(MenuEvent::QuitRequested);

        let first_events: Vec<_> = first.try_iter().collect();
        let second_events: Vec<_> = second.try_iter().collect();
        assert_eq!(first_events, vec![opened(), MenuEvent::QuitRequested]);
        assert_eq!(first_events, second_events);
    }

    #[test]
    fn dropped_listener_is_pruned() {
        let mut hub = EventHub::new();
        let kept = hub.subscribe();
        let dropped = hub.subscribe();
        drop(dropped);

        hub.publish(opened());

        assert_eq!(hub.listener_count(), 1);
        assert_eq!(kept.try_recv().unwrap(), opened());
    }
}
