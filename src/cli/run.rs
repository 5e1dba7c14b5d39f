use clap::Parser;
use dotenv::dotenv;

use crate::cli::command::{Cli, Commands};
use crate::domain::book::ContactBook;
use crate::domain::contact::{ContactFields, Gender, Relation};
use crate::domain::search::filter_and_sort;
use crate::errors::AppError;
use crate::store::storage_port::{export_contacts_to_csv, import_contacts_from_csv};
use crate::store::JsonStore;
use crate::validation::{validate_mail, validate_name, validate_number};

pub fn run_app() -> Result<(), AppError> {
    dotenv().ok();

    let cli = Cli::parse();

    let store = JsonStore::new(&cli.store_path)?;
    let mut book = ContactBook::load(store)?;

    match cli.command {
        Commands::Add {
            name,
            phone,
            gender,
            mail,
            relative,
        } => {
            let fields = validated_fields(name, phone, gender, mail, relative)?;

            book.add(fields)?;

            println!("Contact added successfully");
            Ok(())
        }

        Commands::List { search } => {
            let term = search.unwrap_or_default();
            let visible = filter_and_sort(book.contacts(), &term);

            if visible.is_empty() {
                println!("No contacts match your search!");
                return Ok(());
            }

            for (mut i, c) in visible.iter().enumerate() {
                i += 1;
                println!(
                    "{i:>3}. {:<20} {:<15} {:<8} {:^30} {:<12} {}",
                    c.name,
                    c.phone_num,
                    c.gender.map(|g| g.to_string()).unwrap_or_default(),
                    c.mail.as_deref().unwrap_or_default(),
                    c.relative.to_string(),
                    c.id
                );
            }
            Ok(())
        }

        Commands::Edit {
            id,
            name,
            phone,
            gender,
            mail,
            relative,
        } => {
            let fields = validated_fields(name, phone, gender, mail, relative)?;

            if book.update(id, fields)? {
                println!("Contact updated successfully");
            } else {
                println!("No contact with id {id}");
            }
            Ok(())
        }

        Commands::Delete { id } => {
            if book.remove(id)? {
                println!("Contact deleted successfully");
            } else {
                println!("No contact with id {id}");
            }
            Ok(())
        }

        Commands::Import { src } => {
            let (path, total) = import_contacts_from_csv(&mut book, src.as_deref())?;

            println!("Successfully imported {} contacts from {:?}.", total, path);
            Ok(())
        }

        Commands::Export { des } => {
            let (path, total) = export_contacts_to_csv(book.contacts(), des.as_deref())?;

            println!("Successfully exported {} contacts to {:?}.", total, path);
            Ok(())
        }
    }
}

/// Boundary check: reject bad field values before the book is touched.
fn validated_fields(
    name: String,
    phone: String,
    gender: Option<Gender>,
    mail: Option<String>,
    relative: Option<Relation>,
) -> Result<ContactFields, AppError> {
    if !validate_name(&name) {
        return Err(AppError::Validation("Name must not be empty".to_string()));
    }

    if !validate_number(&phone)? {
        return Err(AppError::Validation(
            "Phone number must contain only digits and must not be empty".to_string(),
        ));
    }

    // An explicitly empty --mail means "not provided".
    let mail = mail.filter(|m| !m.is_empty());
    if let Some(mail) = &mail {
        if !validate_mail(mail)? {
            return Err(AppError::Validation(
                "Mail must be a valid address like name@example.com".to_string(),
            ));
        }
    }

    Ok(ContactFields {
        name,
        phone_num: phone,
        gender,
        mail,
        relative: relative.unwrap_or_default(),
    })
}
