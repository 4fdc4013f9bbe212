//! Time zones whose offset changes at known instants.

use super::FixedOffset;
use crate::datetime::Posix;
use crate::error::timezone::TimeZoneError;

use std::sync::Arc;

/// Change of offset from UTC, taking effect at an instant
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Transition {
    /// First instant observed with the new offset
    pub at: Posix,
    /// Offset in effect from the transition instant until the next transition
    pub offset: FixedOffset,
}

impl Transition {
    /// Construct a transition
    pub const fn new(at: Posix, offset: FixedOffset) -> Self {
        Self { at, offset }
    }
}

/// Time zone with an initial offset, followed by offset changes at known instants.
///
/// This is enough to observe Daylight Saving Time over a known period, for example the transitions of a few years
/// copied from a time zone database by the caller. The schedule is cheap to clone.
///
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct OffsetSchedule {
    /// Offset in effect before the first transition
    initial: FixedOffset,
    /// Transitions, with strictly increasing instants
    transitions: Arc<[Transition]>,
}

impl OffsetSchedule {
    /// Construct an offset schedule from transitions in strictly increasing order of instants
    pub fn new(initial: FixedOffset, transitions: Vec<Transition>) -> Result<Self, TimeZoneError> {
        if transitions.windows(2).any(|pair| pair[0].at >= pair[1].at) {
            return Err(TimeZoneError::UnsortedTransitions);
        }

        Ok(Self { initial, transitions: transitions.into() })
    }

    /// Returns the offset in effect before the first transition
    pub fn initial(&self) -> FixedOffset {
        self.initial
    }

    /// Returns the transitions
    pub fn transitions(&self) -> &[Transition] {
        &self.transitions
    }

    /// Returns the offset in effect at the specified instant
    pub fn offset_at(&self, posix: Posix) -> FixedOffset {
        let applied = self.transitions.partition_point(|transition| transition.at <= posix);

        let offset = match applied.checked_sub(1).and_then(|index| self.transitions.get(index)) {
            Some(transition) => transition.offset,
            None => self.initial,
        };

        trace!("Unix time {} ms is at offset {} s, after {} transitions", posix.millis(), offset.seconds(), applied);
        offset
    }
}
