//! Edge sensitivity domain and the edge waiting capability
//!
//! An [`EdgeWaiter`] is armed with an [`EdgeSensitivity`] and then blocks in
//! [`EdgeWaiter::wait_for_edge`] until a matching transition occurs:
//!
//! ```text
//!                 set_sensitivity(..)
//!   ┌──────────┐ ────────────────────► ┌───────────────────────────┐
//!   │ Disarmed │                       │ ArmedRising / ArmedFalling│
//!   │ (NoEdges)│ ◄──────────────────── │ ArmedBoth                 │
//!   └──────────┘  set_sensitivity(     └───────────────────────────┘
//!                   NoEdges)                 │   ▲
//!                                            └───┘ wait_for_edge returns,
//!                                                  stays armed
//! ```

use core::fmt;
use core::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{invalid_tag, Domain, ErrorType, ParseError};
use crate::value::Value;

/// A transition between logic levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Edge {
    /// Low to High
    Rising,
    /// High to Low
    Falling,
}

impl Edge {
    /// Classify the change from `from` to `to`
    ///
    /// Returns `None` when the level did not change.
    pub fn between(from: Value, to: Value) -> Option<Self> {
        match (from, to) {
            (Value::Low, Value::High) => Some(Edge::Rising),
            (Value::High, Value::Low) => Some(Edge::Falling),
            _ => None,
        }
    }

    /// Level the signal settles at after this edge
    pub fn level_after(self) -> Value {
        match self {
            Edge::Rising => Value::High,
            Edge::Falling => Value::Low,
        }
    }
}

/// Which transitions an [`EdgeWaiter`] reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(u8)]
pub enum EdgeSensitivity {
    /// No triggers; a wait never returns
    #[default]
    NoEdges = 0,
    /// Changes from Low to High
    RisingEdge = 1,
    /// Changes from High to Low
    FallingEdge = 2,
    /// Changes in either direction
    BothEdges = 3,
}

impl EdgeSensitivity {
    /// All sensitivities, in tag order
    pub const ALL: [EdgeSensitivity; 4] = [
        EdgeSensitivity::NoEdges,
        EdgeSensitivity::RisingEdge,
        EdgeSensitivity::FallingEdge,
        EdgeSensitivity::BothEdges,
    ];

    /// Get the raw tag
    pub fn as_u8(self) -> u8 {
        self as u8
    }

    /// Create a sensitivity from a raw tag
    pub fn from_u8(tag: u8) -> Option<Self> {
        match tag {
            0 => Some(EdgeSensitivity::NoEdges),
            1 => Some(EdgeSensitivity::RisingEdge),
            2 => Some(EdgeSensitivity::FallingEdge),
            3 => Some(EdgeSensitivity::BothEdges),
            _ => None,
        }
    }

    /// Textual form, identical to the variant name
    pub fn as_str(self) -> &'static str {
        match self {
            EdgeSensitivity::NoEdges => "NoEdges",
            EdgeSensitivity::RisingEdge => "RisingEdge",
            EdgeSensitivity::FallingEdge => "FallingEdge",
            EdgeSensitivity::BothEdges => "BothEdges",
        }
    }

    /// Textual form of a raw tag
    ///
    /// # Panics
    ///
    /// Panics if `tag` is not an `EdgeSensitivity` tag.
    #[track_caller]
    pub fn name_of(tag: u8) -> &'static str {
        match Self::from_u8(tag) {
            Some(sensitivity) => sensitivity.as_str(),
            None => invalid_tag(Domain::EdgeSensitivity, tag),
        }
    }

    /// Build a sensitivity from the two edge flags
    pub fn from_edges(rising: bool, falling: bool) -> Self {
        match (rising, falling) {
            (false, false) => EdgeSensitivity::NoEdges,
            (true, false) => EdgeSensitivity::RisingEdge,
            (false, true) => EdgeSensitivity::FallingEdge,
            (true, true) => EdgeSensitivity::BothEdges,
        }
    }

    /// Check if any edge would wake a waiter
    pub fn is_armed(self) -> bool {
        self != EdgeSensitivity::NoEdges
    }

    /// Check if `edge` wakes a waiter armed with this sensitivity
    pub fn matches(self, edge: Edge) -> bool {
        matches!(
            (self, edge),
            (EdgeSensitivity::RisingEdge, Edge::Rising)
                | (EdgeSensitivity::FallingEdge, Edge::Falling)
                | (EdgeSensitivity::BothEdges, _)
        )
    }
}

impl fmt::Display for EdgeSensitivity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for EdgeSensitivity {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|e| e.as_str() == s)
            .ok_or(ParseError::new(Domain::EdgeSensitivity))
    }
}

/// Pin that can block until its level changes
///
/// # Contract for implementers
///
/// - Until `set_sensitivity` is first called the waiter behaves as if armed
///   with [`EdgeSensitivity::NoEdges`], unless the implementation documents
///   another initial state.
/// - With `NoEdges` selected, `wait_for_edge` blocks forever. It must not
///   fail or return early because nothing is armed.
/// - The sensitivity stays armed after `wait_for_edge` returns; the next call
///   waits for the next matching transition.
/// - The error channel carries backend failures only. An edge occurring is
///   never an error.
///
/// There is no timeout or cancellation in this contract. Backends may offer
/// one as an inherent method, but generic callers cannot rely on it.
pub trait EdgeWaiter: ErrorType {
    /// Select which transitions [`wait_for_edge`](Self::wait_for_edge) watches for
    ///
    /// May be called at any time to re-arm. Set this to something other than
    /// `NoEdges` before waiting, or the wait never returns.
    fn set_sensitivity(&mut self, sensitivity: EdgeSensitivity) -> Result<(), Self::Error>;

    /// Block until a transition matching the armed sensitivity has occurred
    fn wait_for_edge(&mut self) -> Result<(), Self::Error>;
}

impl<T: EdgeWaiter + ?Sized> EdgeWaiter for &mut T {
    #[inline]
    fn set_sensitivity(&mut self, sensitivity: EdgeSensitivity) -> Result<(), Self::Error> {
        T::set_sensitivity(self, sensitivity)
    }

    #[inline]
    fn wait_for_edge(&mut self) -> Result<(), Self::Error> {
        T::wait_for_edge(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{Error, ErrorKind};

    /// Waiter replaying a recorded level trace
    ///
    /// Running off the end of the trace stands in for blocking forever.
    struct TraceWaiter<'a> {
        trace: &'a [Value],
        pos: usize,
        sensitivity: EdgeSensitivity,
    }

    #[derive(Debug, PartialEq)]
    struct WouldBlock;

    impl Error for WouldBlock {
        fn kind(&self) -> ErrorKind {
            ErrorKind::Other
        }
    }

    impl<'a> TraceWaiter<'a> {
        fn new(trace: &'a [Value]) -> Self {
            Self {
                trace,
                pos: 0,
                sensitivity: EdgeSensitivity::default(),
            }
        }
    }

    impl ErrorType for TraceWaiter<'_> {
        type Error = WouldBlock;
    }

    impl EdgeWaiter for TraceWaiter<'_> {
        fn set_sensitivity(&mut self, sensitivity: EdgeSensitivity) -> Result<(), WouldBlock> {
            self.sensitivity = sensitivity;
            Ok(())
        }

        fn wait_for_edge(&mut self) -> Result<(), WouldBlock> {
            while self.pos + 1 < self.trace.len() {
                let edge = Edge::between(self.trace[self.pos], self.trace[self.pos + 1]);
                self.pos += 1;
                if edge.is_some_and(|e| self.sensitivity.matches(e)) {
                    return Ok(());
                }
            }
            Err(WouldBlock)
        }
    }

    fn count_wakeups(trace: &[Value], sensitivity: EdgeSensitivity) -> usize {
        let mut waiter = TraceWaiter::new(trace);
        waiter.set_sensitivity(sensitivity).unwrap();
        let mut n = 0;
        while waiter.wait_for_edge().is_ok() {
            n += 1;
        }
        n
    }

    const TRACE: [Value; 7] = [
        Value::Low,
        Value::High,
        Value::High,
        Value::Low,
        Value::High,
        Value::Low,
        Value::Low,
    ];

    #[test]
    fn test_names() {
        assert_eq!(EdgeSensitivity::NoEdges.as_str(), "NoEdges");
        assert_eq!(EdgeSensitivity::RisingEdge.as_str(), "RisingEdge");
        assert_eq!(EdgeSensitivity::FallingEdge.as_str(), "FallingEdge");
        assert_eq!(EdgeSensitivity::BothEdges.as_str(), "BothEdges");
    }

    #[test]
    fn test_name_parse_roundtrip() {
        for sensitivity in EdgeSensitivity::ALL {
            assert_eq!(sensitivity.as_str().parse::<EdgeSensitivity>(), Ok(sensitivity));
            assert_eq!(
                EdgeSensitivity::name_of(sensitivity.as_u8()),
                sensitivity.as_str()
            );
        }
        assert!("Rising".parse::<EdgeSensitivity>().is_err());
    }

    #[test]
    #[should_panic(expected = "cannot name invalid EdgeSensitivity tag 4")]
    fn test_name_of_out_of_range_tag_panics() {
        EdgeSensitivity::name_of(4);
    }

    #[test]
    fn test_default_is_disarmed() {
        assert_eq!(EdgeSensitivity::default(), EdgeSensitivity::NoEdges);
        assert!(!EdgeSensitivity::NoEdges.is_armed());
        assert!(EdgeSensitivity::BothEdges.is_armed());
    }

    #[test]
    fn test_edge_between() {
        assert_eq!(Edge::between(Value::Low, Value::High), Some(Edge::Rising));
        assert_eq!(Edge::between(Value::High, Value::Low), Some(Edge::Falling));
        assert_eq!(Edge::between(Value::High, Value::High), None);
        assert_eq!(Edge::Rising.level_after(), Value::High);
    }

    #[test]
    fn test_from_edges_agrees_with_matches() {
        for sensitivity in EdgeSensitivity::ALL {
            let rebuilt = EdgeSensitivity::from_edges(
                sensitivity.matches(Edge::Rising),
                sensitivity.matches(Edge::Falling),
            );
            assert_eq!(rebuilt, sensitivity);
        }
    }

    #[test]
    fn test_no_edges_never_wakes() {
        assert_eq!(count_wakeups(&TRACE, EdgeSensitivity::NoEdges), 0);
    }

    #[test]
    fn test_rising_wakes_once_per_rising_edge() {
        assert_eq!(count_wakeups(&TRACE, EdgeSensitivity::RisingEdge), 2);
    }

    #[test]
    fn test_falling_wakes_once_per_falling_edge() {
        assert_eq!(count_wakeups(&TRACE, EdgeSensitivity::FallingEdge), 2);
    }

    #[test]
    fn test_both_wakes_on_every_edge_and_rearms() {
        assert_eq!(count_wakeups(&TRACE, EdgeSensitivity::BothEdges), 4);
    }

    #[test]
    fn test_waiter_usable_through_mut_ref() {
        fn first_falling<W: EdgeWaiter>(mut waiter: W) -> Result<(), W::Error> {
            waiter.set_sensitivity(EdgeSensitivity::FallingEdge)?;
            waiter.wait_for_edge()
        }

        let mut waiter = TraceWaiter::new(&TRACE);
        first_falling(&mut waiter).unwrap();
        // First falling edge lands on index 3
        assert_eq!(waiter.pos, 3);
        assert_eq!(waiter.sensitivity, EdgeSensitivity::FallingEdge);
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;
    use serde::de::value::{Error as DeError, StrDeserializer};
    use serde::de::IntoDeserializer;
    use serde::Deserialize;

    fn from_name(name: &str) -> Result<EdgeSensitivity, DeError> {
        let de: StrDeserializer<'_, DeError> = name.into_deserializer();
        EdgeSensitivity::deserialize(de)
    }

    #[test]
    fn test_deserializes_from_tag_names() {
        for tag in EdgeSensitivity::ALL {
            assert_eq!(from_name(tag.as_str()), Ok(tag));
        }
    }

    #[test]
    fn test_rejects_unknown_names() {
        assert!(from_name("Rising").is_err());
        assert!(from_name("bothedges").is_err());
        assert!(from_name("NoEdge").is_err());
    }
}
