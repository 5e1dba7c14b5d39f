use std::path::PathBuf;

use csv::Reader;
use serde::Deserialize;

use crate::domain::book::ContactBook;
use crate::domain::contact::{ContactFields, Gender, Relation};
use crate::errors::AppError;
use crate::store::ContactStore;
use crate::validation::{validate_mail, validate_name, validate_number};

const IMPORT_PATH: &str = "./import_export/contacts.csv";

/// Imported rows carry the contact fields only; ids are assigned by the
/// book on insert, so an exported `id` column is ignored.
#[derive(Debug, Deserialize)]
struct CsvRow {
    name: String,
    #[serde(rename = "phoneNum")]
    phone_num: String,
    #[serde(default)]
    gender: Option<Gender>,
    #[serde(default)]
    mail: Option<String>,
    #[serde(default)]
    relative: Option<Relation>,
}

pub fn import_contacts_from_csv<S: ContactStore>(
    book: &mut ContactBook<S>,
    src: Option<&str>,
) -> Result<(PathBuf, u64), AppError> {
    let mut file_path: PathBuf = PathBuf::from(IMPORT_PATH);

    if let Some(path) = src {
        file_path = PathBuf::from(path);
    }

    if !file_path.exists() {
        return Err(AppError::NotFound("CSV file".to_string()));
    }

    if file_path.extension().is_some_and(|ext| ext != "csv") {
        return Err(AppError::Validation("File not .csv".to_string()));
    }

    let mut reader = Reader::from_path(&file_path)?;

    let mut counter: u64 = 0;
    for result in reader.deserialize() {
        let row: CsvRow = result?;

        if !validate_name(&row.name) {
            return Err(AppError::Validation(format!(
                "Row {}: name must not be empty",
                counter + 1
            )));
        }

        if !validate_number(&row.phone_num)? {
            return Err(AppError::Validation(format!(
                "Row {}: phone number must be digits only",
                counter + 1
            )));
        }

        let mail = row.mail.filter(|m| !m.is_empty());
        if let Some(mail) = &mail {
            if !validate_mail(mail)? {
                return Err(AppError::Validation(format!(
                    "Row {}: mail address is not valid",
                    counter + 1
                )));
            }
        }

        book.add(ContactFields {
            name: row.name,
            phone_num: row.phone_num,
            gender: row.gender,
            mail,
            relative: row.relative.unwrap_or_default(),
        })?;

        counter += 1;
    }

    Ok((file_path, counter))
}
