//! House mutation outcomes.

use crate::keys::Key;

/// Outcome of locking a house's entry door.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryLockOutcome {
    /// The door was locked and a key cut for it.
    Locked {
        key: Key,
        /// The door stood open and was closed before locking.
        closed_entry_door: bool,
        /// Positions of windows that were left open.
        open_windows: Vec<usize>,
    },
    /// The door was already locked; no key is handed out.
    AlreadyLocked,
}

impl EntryLockOutcome {
    pub fn key(&self) -> Option<&Key> {
        match self {
            Self::Locked { key, .. } => Some(key),
            Self::AlreadyLocked => None,
        }
    }

    pub fn into_key(self) -> Option<Key> {
        match self {
            Self::Locked { key, .. } => Some(key),
            Self::AlreadyLocked => None,
        }
    }

    pub fn open_windows(&self) -> &[usize] {
        match self {
            Self::Locked { open_windows, .. } => open_windows,
            Self::AlreadyLocked => &[],
        }
    }
}
