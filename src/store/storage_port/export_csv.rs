use std::fs;
use std::path::PathBuf;

use csv::Writer;
use serde::Serialize;
use uuid::Uuid;

use crate::domain::contact::{Contact, Gender, Relation};
use crate::errors::AppError;

const EXPORT_PATH: &str = "./import_export/exported.csv";

/// CSV needs every row to carry the same columns, so absent optionals
/// become empty fields here instead of being skipped like in JSON.
#[derive(Debug, Serialize)]
struct CsvRecord<'a> {
    id: Uuid,
    name: &'a str,
    #[serde(rename = "phoneNum")]
    phone_num: &'a str,
    gender: Option<Gender>,
    mail: Option<&'a str>,
    relative: Relation,
}

pub fn export_contacts_to_csv(
    contacts: &[Contact],
    des: Option<&str>,
) -> Result<(PathBuf, u64), AppError> {
    let mut file_path = PathBuf::from(EXPORT_PATH);

    if let Some(path) = des {
        file_path = PathBuf::from(path);

        if file_path.is_dir() {
            file_path = file_path.join("exported.csv");
        } else if file_path.extension().is_some_and(|ext| ext != "csv") {
            return Err(AppError::Validation(
                "Export file must be a .csv file".to_string(),
            ));
        }
    }

    if let Some(parent) = file_path.parent() {
        if !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }

    let mut writer = Writer::from_path(&file_path)?;

    let mut counter: u64 = 0;
    for contact in contacts {
        writer.serialize(CsvRecord {
            id: contact.id,
            name: &contact.name,
            phone_num: &contact.phone_num,
            gender: contact.gender,
            mail: contact.mail.as_deref(),
            relative: contact.relative,
        })?;
        counter += 1;
    }

    writer.flush()?;

    Ok((file_path, counter))
}
