//! Simulated line configuration

use pinion_hal::{Direction, Value};

/// Pull resistor state of a simulated line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Pull {
    /// No pull resistor; an undriven input holds its last level
    #[default]
    None,
    /// Pulled toward High
    Up,
    /// Pulled toward Low
    Down,
}

impl Pull {
    /// Level an undriven input settles at, if any
    pub fn bias(self) -> Option<Value> {
        match self {
            Pull::None => None,
            Pull::Up => Some(Value::High),
            Pull::Down => Some(Value::Low),
        }
    }
}

/// Initial state of a simulated line
#[derive(Debug, Clone, Copy)]
pub struct SimConfig {
    /// Name used in log output
    pub label: &'static str,
    /// Level before anything drives or pulls the line
    pub initial_level: Value,
    /// Initial pin direction
    pub direction: Direction,
    /// Initial pull resistor state
    pub pull: Pull,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self::FLOATING_INPUT
    }
}

impl SimConfig {
    /// Floating input, idling low
    pub const FLOATING_INPUT: Self = Self {
        label: "sim",
        initial_level: Value::Low,
        direction: Direction::In,
        pull: Pull::None,
    };

    /// Input with pull-up, the usual wiring for an active-low button
    pub const PULLED_UP_INPUT: Self = Self {
        label: "sim",
        initial_level: Value::High,
        direction: Direction::In,
        pull: Pull::Up,
    };

    /// Output driving low
    pub const OUTPUT_LOW: Self = Self {
        label: "sim",
        initial_level: Value::Low,
        direction: Direction::Out,
        pull: Pull::None,
    };

    /// Same configuration with a different log label
    pub const fn with_label(mut self, label: &'static str) -> Self {
        self.label = label;
        self
    }
}
