//! Errors of checked alternative access.

use thiserror::Error;

use crate::storage::Storage;

const UNKNOWN_TYPE: &str = "<out of range>";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AccessError {
    #[error("variant is valueless: constructing its last assigned value panicked")]
    Valueless,
    #[error(
        "alternative {requested} (`{requested_type}`) requested, but alternative {active} (`{active_type}`) is active"
    )]
    Inactive {
        requested: usize,
        requested_type: &'static str,
        active: usize,
        active_type: &'static str,
    },
}

impl AccessError {
    /// Mismatch between the `requested` position and the `active` one of list `L`.
    #[must_use]
    pub fn inactive<L: Storage>(requested: usize, active: usize) -> Self {
        let name = |position| L::describe(position).map_or(UNKNOWN_TYPE, |info| info.type_name);
        Self::Inactive {
            requested,
            requested_type: name(requested),
            active,
            active_type: name(active),
        }
    }

    #[must_use]
    pub const fn is_valueless(&self) -> bool {
        matches!(self, AccessError::Valueless)
    }
}
