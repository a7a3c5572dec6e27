//=========================================================================
// Navigation Collector
//=========================================================================
//
// Drains navigation input once per tick.
//
// Architecture:
//   Receiver<NavigationInput> → collect_tick() → TickInput { back, control }
//
// Polling is bounded so a flooded channel cannot stall a tick. Any number
// of back presses within one tick collapse into a single back signal.
//
//=========================================================================

//=== External Dependencies ===============================================

use crossbeam_channel::{Receiver, TryRecvError};
use log::{debug, warn};

//=== Internal Dependencies ===============================================

use super::NavigationInput;

//=== TickControl =========================================================

/// Update loop control signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickControl {
    Continue,
    Exit,
}

//=== TickInput ===========================================================

/// Navigation input gathered for one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickInput {
    /// At least one back press arrived this tick.
    pub back: bool,

    /// Whether the host loop should keep running.
    pub control: TickControl,
}

//=== NavigationCollector =================================================

/// Collects navigation input with bounded polling.
pub struct NavigationCollector {
    receiver: Receiver<NavigationInput>,
    max_events_per_tick: usize,
}

impl NavigationCollector {
    const DEFAULT_MAX_EVENTS_PER_TICK: usize = 100;

    pub fn new(receiver: Receiver<NavigationInput>) -> Self {
        Self {
            receiver,
            max_events_per_tick: Self::DEFAULT_MAX_EVENTS_PER_TICK,
        }
    }

    /// Caps how many events one tick drains.
    ///
    /// # Panics
    ///
    /// Panics if `max == 0`.
    pub fn with_max_events_per_tick(mut self, max: usize) -> Self {
        assert!(max > 0, "Max events per tick must be positive");
        self.max_events_per_tick = max;
        self
    }

    /// Drains pending input for this tick.
    pub fn collect_tick(&mut self) -> TickInput {
        let mut back_presses = 0;
        let mut drained = 0;

        while drained < self.max_events_per_tick {
            match self.receiver.try_recv() {
                Ok(NavigationInput::Back) => {
                    back_presses += 1;
                    drained += 1;
                }
                Ok(NavigationInput::WindowClosed) => {
                    return TickInput {
                        back: false,
                        control: TickControl::Exit,
                    };
                }
                Err(TryRecvError::Disconnected) => {
                    return TickInput {
                        back: back_presses > 0,
                        control: TickControl::Exit,
                    };
                }
                Err(TryRecvError::Empty) => break,
            }
        }

        if drained >= self.max_events_per_tick {
            warn!("Navigation input backlog: drained {} events this tick", drained);
        }

        if back_presses > 1 {
            debug!("Coalesced {} back presses into one", back_presses);
        }

        TickInput {
            back: back_presses > 0,
            control: TickControl::Continue,
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crossbeam_channel::unbounded;

    #[test]
    fn collect_handles_empty_queue() {
        let (_tx, rx) = unbounded::<NavigationInput>();
        let mut collector = NavigationCollector::new(rx);

        let input = collector.collect_tick();

        assert!(!input.back);
        assert_eq!(input.control, TickControl::Continue);
    }

    #[test]
    fn collect_coalesces_back_presses() {
        let (tx, rx) = unbounded();
        let mut collector = NavigationCollector::new(rx);

        tx.send(NavigationInput::Back).unwrap();
        tx.send(NavigationInput::Back).unwrap();
        tx.send(NavigationInput::Back).unwrap();

        let input = collector.collect_tick();
        assert!(input.back);
        assert_eq!(input.control, TickControl::Continue);

        let input = collector.collect_tick();
        assert!(!input.back);
    }

    #[test]
    fn collect_returns_exit_on_window_closed() {
        let (tx, rx) = unbounded();
        let mut collector = NavigationCollector::new(rx);

        tx.send(NavigationInput::Back).unwrap();
        tx.send(NavigationInput::WindowClosed).unwrap();

        let input = collector.collect_tick();
        assert_eq!(input.control, TickControl::Exit);
        assert!(!input.back);
    }

    #[test]
    fn collect_returns_exit_on_disconnect() {
        let (tx, rx) = unbounded::<NavigationInput>();
        let mut collector = NavigationCollector::new(rx);

        drop(tx);

        assert_eq!(collector.collect_tick().control, TickControl::Exit);
    }

    #[test]
    fn collect_is_bounded_per_tick() {
        let (tx, rx) = unbounded();
        let mut collector = NavigationCollector::new(rx).with_max_events_per_tick(2);

        for _ in 0..5 {
            tx.send(NavigationInput::Back).unwrap();
        }

        assert!(collector.collect_tick().back);
        assert_eq!(tx.len(), 3);
    }

    #[test]
    #[should_panic(expected = "Max events per tick must be positive")]
    fn zero_max_events_panics() {
        let (_tx, rx) = unbounded::<NavigationInput>();
        let _ = NavigationCollector::new(rx).with_max_events_per_tick(0);
    }
}
