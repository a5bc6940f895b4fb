//! Strongly typed, zero-cost identifier wrappers.
//!
//! All IDs are `Copy + Ord + Hash` so they can be used as set members and map
//! keys without ceremony.  None of them carry meaning beyond identity: an
//! `AgentHandle` is whatever the host hands back from `create`, and the core
//! never indexes anything with it.

use std::fmt;

/// Generate a typed ID wrapper around a primitive integer.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty);) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis struct $name(pub $inner);

        impl $name {
            /// Sentinel meaning "no valid ID".
            pub const INVALID: $name = $name(<$inner>::MAX);
        }

        impl Default for $name {
            /// Returns the `INVALID` sentinel so uninitialized IDs are visibly invalid.
            #[inline(always)]
            fn default() -> Self {
                Self::INVALID
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }
    };
}

typed_id! {
    /// Opaque reference to an agent entity created by the host.
    pub struct AgentHandle(u64);
}

typed_id! {
    /// Identity of a live participant (a player-controlled entity).
    pub struct ParticipantId(u64);
}

typed_id! {
    /// Sequence number of a raid event, starting at 1 for the first one.
    pub struct EventId(u32);
}

impl EventId {
    /// The id following `self`.
    #[inline]
    pub fn next(self) -> EventId {
        EventId(self.0.wrapping_add(1))
    }
}
