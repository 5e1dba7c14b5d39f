use std::cell::RefCell;
use std::rc::Rc;

use crate::domain::contact::Contact;
use crate::errors::AppError;
use crate::store::ContactStore;

/// In-process slot used by tests. Clones share the same slot, so a
/// clone stands in for "a fresh session over the same storage".
#[derive(Clone, Default)]
pub struct MemStore {
    slot: Rc<RefCell<Vec<Contact>>>,
}

impl MemStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ContactStore for MemStore {
    fn load(&self) -> Result<Vec<Contact>, AppError> {
        Ok(self.slot.borrow().clone())
    }

    fn save(&self, contacts: &[Contact]) -> Result<(), AppError> {
        *self.slot.borrow_mut() = contacts.to_vec();
        Ok(())
    }
}
