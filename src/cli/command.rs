use clap::{Parser, Subcommand};
use uuid::Uuid;

use crate::domain::contact::{Gender, Relation};
use crate::store::DEFAULT_STORAGE_PATH;

#[derive(Parser, Debug)]
#[command(name = "phonebook", version, about = "Contact book with durable JSON storage")]
pub struct Cli {
    /// Path of the JSON storage file
    #[arg(long, env = "PHONEBOOK_PATH", default_value = DEFAULT_STORAGE_PATH)]
    pub store_path: String,

    #[command(subcommand)]
    pub command: Commands,
}

/// Subcommands and their flags
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a new contact
    Add {
        /// Contact name
        #[arg(long)]
        name: String,

        /// Contact phone number (digits only, country code included)
        #[arg(long)]
        phone: String,

        /// Contact gender
        #[arg(long, value_enum)]
        gender: Option<Gender>,

        /// Contact mail address
        #[arg(long)]
        mail: Option<String>,

        /// Relationship to the contact (defaults to others)
        #[arg(long, value_enum)]
        relative: Option<Relation>,
    },

    /// List contacts sorted by name, optionally filtered
    List {
        /// Name or phone substring to filter by
        #[arg(long)]
        search: Option<String>,
    },

    /// Replace the fields of an existing contact
    /// Provide the contact id and the full new field set
    Edit {
        /// Id of the contact to edit
        #[arg(long)]
        id: Uuid,

        /// New contact name
        #[arg(long)]
        name: String,

        /// New contact phone number
        #[arg(long)]
        phone: String,

        /// New contact gender
        #[arg(long, value_enum)]
        gender: Option<Gender>,

        /// New contact mail address
        #[arg(long)]
        mail: Option<String>,

        /// New relationship (defaults to others)
        #[arg(long, value_enum)]
        relative: Option<Relation>,
    },

    /// Delete a contact by id
    Delete {
        /// Id of the contact to delete
        #[arg(long)]
        id: Uuid,
    },

    /// Import contacts from a .csv file
    Import {
        /// File path to the source .csv file
        #[arg(short, long)]
        src: Option<String>,
    },

    /// Export contacts to a .csv file
    Export {
        /// File path to the destination location for export file
        #[arg(short, long)]
        des: Option<String>,
    },
}
