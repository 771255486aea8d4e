//! Pin handles on a simulated line

use std::time::{Duration, Instant};

use pinion_hal::{
    Direction, DirectionSetter, DownPuller, EdgeSensitivity, EdgeWaiter, ErrorType, PullStopper,
    UpPuller, Value, ValueGetter, ValueSetter,
};

use crate::config::Pull;
use crate::error::SimError;
use crate::line::{LineState, SimLine};

/// Handle implementing every capability on a [`SimLine`]
///
/// Direction, pull and level belong to the line and are shared by all its
/// handles. Edge sensitivity belongs to the handle.
///
/// # Behaviour
///
/// - Writing while the line is an input fails with
///   [`SimError::WrongDirection`]. The output latch is kept across
///   direction changes.
/// - Pull-up and pull-down are exclusive: enabling one replaces the other.
/// - A new handle starts disarmed (`NoEdges`). Arming starts watching from
///   the moment of the call; earlier edges are ignored.
/// - `wait_for_edge` with `NoEdges` blocks until the line is disconnected.
pub struct SimPin {
    line: SimLine,
    sensitivity: EdgeSensitivity,
    /// Sequence number of the next edge this handle has not consumed
    cursor: u64,
}

impl SimPin {
    pub(crate) fn new(line: SimLine) -> Self {
        let cursor = line.edge_count();
        Self {
            line,
            sensitivity: EdgeSensitivity::NoEdges,
            cursor,
        }
    }

    /// Line this handle belongs to
    pub fn line(&self) -> &SimLine {
        &self.line
    }

    /// Currently armed sensitivity
    pub fn sensitivity(&self) -> EdgeSensitivity {
        self.sensitivity
    }

    /// Current direction of the line
    pub fn direction(&self) -> Direction {
        self.line.direction()
    }

    /// Apply `f` to the line state and settle it, failing if disconnected
    fn modify<T>(
        &self,
        f: impl FnOnce(&mut LineState) -> Result<T, SimError>,
    ) -> Result<T, SimError> {
        let shared = &self.line.shared;
        let mut state = shared.lock();
        if !state.connected {
            return Err(SimError::Disconnected);
        }
        let out = f(&mut *state)?;
        if state.settle() {
            shared.changed.notify_all();
        }
        Ok(out)
    }

    fn set_pull(&mut self, pull: Pull) -> Result<(), SimError> {
        self.modify(|state| {
            log::debug!("{}: pull {:?} -> {:?}", state.label, state.pull, pull);
            state.pull = pull;
            Ok(())
        })
    }

    /// Wait for a matching edge, giving up after `timeout`
    ///
    /// Returns `Ok(true)` if an edge was consumed and `Ok(false)` on timeout.
    /// This bounded wait is specific to the simulator; generic code only has
    /// [`EdgeWaiter::wait_for_edge`]. A timeout too large to represent as a
    /// deadline waits without bound.
    pub fn wait_for_edge_timeout(&mut self, timeout: Duration) -> Result<bool, SimError> {
        let Some(deadline) = Instant::now().checked_add(timeout) else {
            self.wait_for_edge()?;
            return Ok(true);
        };
        let shared = &self.line.shared;
        let mut state = shared.lock();
        loop {
            if !state.connected {
                return Err(SimError::Disconnected);
            }
            if state.take_match(&mut self.cursor, self.sensitivity) {
                return Ok(true);
            }
            let now = Instant::now();
            if now >= deadline {
                return Ok(false);
            }
            state = shared
                .changed
                .wait_timeout(state, deadline - now)
                .unwrap_or_else(|poisoned| poisoned.into_inner())
                .0;
        }
    }
}

impl ErrorType for SimPin {
    type Error = SimError;
}

impl ValueGetter for SimPin {
    fn value(&mut self) -> Result<Value, SimError> {
        self.modify(|state| Ok(state.level))
    }
}

impl ValueSetter for SimPin {
    fn set_value(&mut self, value: Value) -> Result<(), SimError> {
        self.modify(|state| {
            if state.direction != Direction::Out {
                return Err(SimError::WrongDirection);
            }
            state.latch = value;
            Ok(())
        })
    }
}

impl DirectionSetter for SimPin {
    fn set_direction(&mut self, direction: Direction) -> Result<(), SimError> {
        self.modify(|state| {
            log::debug!("{}: direction {}", state.label, direction);
            state.direction = direction;
            Ok(())
        })
    }
}

impl UpPuller for SimPin {
    fn pull_up(&mut self) -> Result<(), SimError> {
        self.set_pull(Pull::Up)
    }
}

impl DownPuller for SimPin {
    fn pull_down(&mut self) -> Result<(), SimError> {
        self.set_pull(Pull::Down)
    }
}

impl PullStopper for SimPin {
    fn stop_pulling(&mut self) -> Result<(), SimError> {
        self.set_pull(Pull::None)
    }
}

impl EdgeWaiter for SimPin {
    fn set_sensitivity(&mut self, sensitivity: EdgeSensitivity) -> Result<(), SimError> {
        let cursor = self.modify(|state| Ok(state.edge_count))?;
        self.sensitivity = sensitivity;
        self.cursor = cursor;
        Ok(())
    }

    fn wait_for_edge(&mut self) -> Result<(), SimError> {
        let shared = &self.line.shared;
        let mut state = shared.lock();
        loop {
            if !state.connected {
                return Err(SimError::Disconnected);
            }
            if state.take_match(&mut self.cursor, self.sensitivity) {
                return Ok(());
            }
            state = shared
                .changed
                .wait(state)
                .unwrap_or_else(|poisoned| poisoned.into_inner());
        }
    }
}
