// src/watch/debounce.rs

use std::time::Duration;

use tokio::time::Instant;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Idle,
    Pending { until: Instant },
}

/// Leading-edge debounce state machine.
///
/// `idle` + event: fire immediately and open a window. `pending` + event:
/// suppressed, and the window is not extended. Once the window has fully
/// elapsed the machine is `idle` again and the next event fires.
///
/// Clock-explicit (`now` is always passed in) so behaviour is testable
/// without real waiting.
#[derive(Debug, Clone)]
pub struct Debouncer {
    window: Duration,
    state: State,
}

impl Debouncer {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            state: State::Idle,
        }
    }

    /// Record an event at `now`. Returns true when the event should fire.
    pub fn on_event(&mut self, now: Instant) -> bool {
        match self.state {
            State::Idle => {
                self.state = State::Pending {
                    until: now + self.window,
                };
                true
            }
            // the timer may not have run yet even though the window is over
            State::Pending { until } if now >= until => {
                self.state = State::Pending {
                    until: now + self.window,
                };
                true
            }
            State::Pending { .. } => false,
        }
    }

    /// Instant at which the open window closes, if one is open.
    pub fn deadline(&self) -> Option<Instant> {
        match self.state {
            State::Pending { until } => Some(until),
            State::Idle => None,
        }
    }

    /// Timer expiry at `now`: close the window once it has fully elapsed.
    pub fn on_timer(&mut self, now: Instant) {
        if let State::Pending { until } = self.state {
            if now >= until {
                self.state = State::Idle;
            }
        }
    }
}
