use std::fs::{self, OpenOptions};
use std::io::{Read, Write};
use std::path::Path;

use crate::domain::contact::Contact;
use crate::errors::AppError;
use crate::store::ContactStore;

/// The durable slot: one JSON file holding the whole collection as an
/// array of `{id, name, phoneNum, gender?, mail?, relative}` records.
pub struct JsonStore {
    path: String,
}

impl JsonStore {
    pub fn new(path: &str) -> Result<Self, AppError> {
        create_file_parent(path)?;

        Ok(JsonStore {
            path: path.to_string(),
        })
    }

    pub fn path(&self) -> &str {
        &self.path
    }
}

impl ContactStore for JsonStore {
    fn load(&self) -> Result<Vec<Contact>, AppError> {
        let mut file = OpenOptions::new()
            .read(true)
            .write(true)
            .truncate(false)
            .create(true)
            .open(&self.path)?;

        let mut data = String::new();
        file.read_to_string(&mut data)?;

        // serde_json will give an error if data is empty
        if data.is_empty() {
            return Ok(Vec::new());
        }

        Ok(serde_json::from_str(&data)?)
    }

    /// Full-collection overwrite; last write wins.
    fn save(&self, contacts: &[Contact]) -> Result<(), AppError> {
        let json_contacts = serde_json::to_string(contacts)?;

        let mut file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&self.path)?;

        file.write_all(json_contacts.as_bytes())?;

        Ok(())
    }
}

fn create_file_parent(path: &str) -> Result<(), AppError> {
    let path = Path::new(path);

    if let Some(parent) = path.parent() {
        if !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}
