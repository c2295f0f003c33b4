//! Shared ownership of the session's pet.
//!
//! The decay ticker and the input loop run as separate tasks; both go
//! through the same lock, so a decay tick, a cooldown release and a user
//! action never interleave mid-update.

use std::sync::Arc;

use parking_lot::{Mutex, MutexGuard};
use tamago_core::Pet;

/// Cloneable handle to one pet.
#[derive(Clone, Debug)]
pub struct PetHandle {
    inner: Arc<Mutex<Pet>>,
}

impl PetHandle {
    /// Take ownership of `pet`.
    #[must_use]
    pub fn new(pet: Pet) -> Self {
        Self {
            inner: Arc::new(Mutex::new(pet)),
        }
    }

    /// Lock the pet for the duration of the guard.
    pub fn lock(&self) -> MutexGuard<'_, Pet> {
        self.inner.lock()
    }

    /// Swap in a new pet, dropping the old one and any pending cooldown.
    pub fn replace(&self, pet: Pet) {
        *self.inner.lock() = pet;
    }
}
