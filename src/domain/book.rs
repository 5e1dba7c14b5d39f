use uuid::Uuid;

use crate::domain::contact::{Contact, ContactFields};
use crate::errors::AppError;
use crate::store::ContactStore;

/// The single owner of the in-memory collection. Every mutation is
/// written through to the backing store before it returns, so the
/// durable slot never silently diverges from memory.
pub struct ContactBook<S: ContactStore> {
    store: S,
    contacts: Vec<Contact>,
    degraded: bool,
}

impl<S: ContactStore> ContactBook<S> {
    /// Read the persisted collection. A missing or empty slot yields an
    /// empty book; an undecodable slot yields an empty book with the
    /// `degraded` flag set rather than a crash. I/O failures propagate.
    pub fn load(store: S) -> Result<Self, AppError> {
        let (contacts, degraded) = match store.load() {
            Ok(contacts) => (contacts, false),
            Err(AppError::Serde(e)) => {
                eprintln!(
                    "Warning: stored contacts are unreadable ({}); starting with an empty list",
                    e
                );
                (Vec::new(), true)
            }
            Err(e) => return Err(e),
        };

        Ok(ContactBook {
            store,
            contacts,
            degraded,
        })
    }

    pub fn contacts(&self) -> &[Contact] {
        &self.contacts
    }

    /// True when the last load discarded an undecodable slot.
    pub fn degraded(&self) -> bool {
        self.degraded
    }

    /// Append a new contact with a fresh id and persist. Returns the id.
    pub fn add(&mut self, fields: ContactFields) -> Result<Uuid, AppError> {
        let contact = Contact::new(fields);
        let id = contact.id;

        self.contacts.push(contact);
        self.store.save(&self.contacts)?;

        Ok(id)
    }

    /// Replace all fields except the id on the matching contact and
    /// persist. A missing id is a no-op; nothing is saved and `false`
    /// comes back.
    pub fn update(&mut self, id: Uuid, fields: ContactFields) -> Result<bool, AppError> {
        match self.contacts.iter_mut().find(|cont| cont.id == id) {
            Some(contact) => {
                contact.replace_fields(fields);
                self.store.save(&self.contacts)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Remove the matching contact, keeping the relative order of the
    /// rest, and persist. A missing id is a no-op.
    pub fn remove(&mut self, id: Uuid) -> Result<bool, AppError> {
        let before = self.contacts.len();
        self.contacts.retain(|cont| cont.id != id);

        if self.contacts.len() == before {
            return Ok(false);
        }

        self.store.save(&self.contacts)?;
        Ok(true)
    }
}
