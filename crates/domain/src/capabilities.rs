//! Capabilities an opening can have.

use crate::error::DomainError;
use crate::keys::Key;
use crate::value_objects::Address;

/// Something with a two-state opened/closed model.
pub trait Openable {
    fn open(&mut self);

    fn close(&mut self);

    fn is_opened(&self) -> bool;
}

/// Something that can be locked with a key.
pub trait Lockable {
    /// Lock and return the key for this lock as installed in the house at
    /// `owner`. Locking an already locked item leaves it locked.
    ///
    /// # Errors
    ///
    /// Fails only when no key can be minted for the pair (see
    /// [`crate::KeyGenerator::generate`]); the state is then unchanged.
    fn lock(&mut self, owner: &Address) -> Result<Key, DomainError>;

    /// Unlock with `key`. Returns `false`, leaving the state as is, when the
    /// item is not locked or the key was cut for another house or lock.
    fn unlock(&mut self, owner: &Address, key: &Key) -> bool;

    fn is_locked(&self) -> bool;
}
