pub mod json;
pub mod memory;
pub mod storage_port;

pub use json::JsonStore;
pub use memory::MemStore;

use crate::domain::contact::Contact;
use crate::errors::AppError;

/// Where the collection lives when nothing overrides it. The slot is a
/// single JSON file; `--store-path` / `PHONEBOOK_PATH` point elsewhere.
pub const DEFAULT_STORAGE_PATH: &str = "./.instance/contacts.json";

pub trait ContactStore {
    fn load(&self) -> Result<Vec<Contact>, AppError>;

    fn save(&self, contacts: &[Contact]) -> Result<(), AppError>;
}
