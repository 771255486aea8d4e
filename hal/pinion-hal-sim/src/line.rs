//! Shared state of one simulated signal

use std::sync::{Arc, Condvar, Mutex, MutexGuard, PoisonError};

use heapless::HistoryBuffer;
use pinion_hal::{Direction, Edge, EdgeSensitivity, Value};

use crate::config::{Pull, SimConfig};
use crate::pin::SimPin;

/// Number of edges remembered per line
///
/// Waiters that fall further behind than this miss the oldest edges, the
/// same way a hardware edge latch overflows.
pub const EDGE_HISTORY: usize = 64;

pub(crate) struct LineState {
    pub(crate) label: &'static str,
    pub(crate) direction: Direction,
    /// Output latch, kept while the pin is an input
    pub(crate) latch: Value,
    /// Value an external device drives, if any
    pub(crate) external: Option<Value>,
    pub(crate) pull: Pull,
    /// Resolved electrical level
    pub(crate) level: Value,
    pub(crate) connected: bool,
    edges: HistoryBuffer<Edge, EDGE_HISTORY>,
    /// Total edges recorded since creation
    pub(crate) edge_count: u64,
}

impl LineState {
    fn new(config: SimConfig) -> Self {
        let mut state = Self {
            label: config.label,
            direction: config.direction,
            latch: config.initial_level,
            external: None,
            pull: config.pull,
            level: config.initial_level,
            connected: true,
            edges: HistoryBuffer::new(),
            edge_count: 0,
        };
        // Settle without recording an edge
        state.level = state.resolve();
        state
    }

    fn resolve(&self) -> Value {
        if self.direction == Direction::Out {
            return self.latch;
        }
        self.external
            .or_else(|| self.pull.bias())
            .unwrap_or(self.level)
    }

    /// Recompute the level after a change, recording any edge
    ///
    /// Returns true if the level changed.
    pub(crate) fn settle(&mut self) -> bool {
        let next = self.resolve();
        let Some(edge) = Edge::between(self.level, next) else {
            return false;
        };
        log::trace!("{}: {} -> {}", self.label, self.level, next);
        self.level = next;
        self.edges.write(edge);
        self.edge_count += 1;
        true
    }

    /// Consume the first edge at or after `cursor` that `sensitivity`
    /// reacts to
    ///
    /// On a match `cursor` moves past that edge and true is returned.
    /// Otherwise `cursor` moves past every recorded edge, since none of them
    /// can match later.
    pub(crate) fn take_match(&self, cursor: &mut u64, sensitivity: EdgeSensitivity) -> bool {
        let first = self.edge_count - self.edges.len() as u64;
        if *cursor < first {
            log::warn!(
                "{}: waiter fell behind, {} edges dropped",
                self.label,
                first - *cursor
            );
            *cursor = first;
        }
        let found = self
            .edges
            .oldest_ordered()
            .zip(first..)
            .find(|(edge, seq)| *seq >= *cursor && sensitivity.matches(**edge));
        match found {
            Some((_, seq)) => {
                *cursor = seq + 1;
                true
            }
            None => {
                *cursor = self.edge_count;
                false
            }
        }
    }
}

pub(crate) struct Shared {
    pub(crate) state: Mutex<LineState>,
    pub(crate) changed: Condvar,
}

impl Shared {
    pub(crate) fn lock(&self) -> MutexGuard<'_, LineState> {
        // State stays consistent across a panicking holder
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// One simulated electrical signal
///
/// Cloning gives another handle to the same signal.
#[derive(Clone)]
pub struct SimLine {
    pub(crate) shared: Arc<Shared>,
}

impl Default for SimLine {
    fn default() -> Self {
        Self::new()
    }
}

impl SimLine {
    /// Create a floating input line idling low
    pub fn new() -> Self {
        Self::with_config(SimConfig::default())
    }

    /// Create a line with the given initial state
    pub fn with_config(config: SimConfig) -> Self {
        Self {
            shared: Arc::new(Shared {
                state: Mutex::new(LineState::new(config)),
                changed: Condvar::new(),
            }),
        }
    }

    /// Take a new pin handle on this line
    ///
    /// Every handle sees the same direction, pull and level. Each handle
    /// has its own edge sensitivity, initially `NoEdges`.
    pub fn pin(&self) -> SimPin {
        SimPin::new(self.clone())
    }

    fn update(&self, f: impl FnOnce(&mut LineState)) {
        let mut state = self.shared.lock();
        f(&mut *state);
        if state.settle() {
            self.shared.changed.notify_all();
        }
    }

    /// Drive the line from an external device
    ///
    /// Has no effect on the level while the pin is an output; the output
    /// latch wins.
    pub fn drive(&self, value: Value) {
        self.update(|state| state.external = Some(value));
    }

    /// Stop driving the line externally
    pub fn release(&self) {
        self.update(|state| state.external = None);
    }

    /// Current electrical level
    pub fn level(&self) -> Value {
        self.shared.lock().level
    }

    /// Current pin direction
    pub fn direction(&self) -> Direction {
        self.shared.lock().direction
    }

    /// Current pull resistor state
    pub fn pull(&self) -> Pull {
        self.shared.lock().pull
    }

    /// Total number of edges seen on this line
    pub fn edge_count(&self) -> u64 {
        self.shared.lock().edge_count
    }

    /// Make every pin operation fail with [`crate::SimError::Disconnected`]
    ///
    /// Blocked waiters wake up and fail.
    pub fn disconnect(&self) {
        let mut state = self.shared.lock();
        log::warn!("{}: disconnected", state.label);
        state.connected = false;
        self.shared.changed.notify_all();
    }

    /// Undo [`SimLine::disconnect`]
    pub fn reconnect(&self) {
        let mut state = self.shared.lock();
        log::debug!("{}: reconnected", state.label);
        state.connected = true;
    }

    /// Check if the line is connected
    pub fn is_connected(&self) -> bool {
        self.shared.lock().connected
    }
}
