pub mod cli;
pub mod domain;
pub mod errors;
pub mod store;
pub mod validation;

pub mod prelude {
    pub use crate::cli::{command, run_app};
    pub use crate::domain::{
        book::ContactBook,
        contact::{Contact, ContactFields, Gender, Relation},
        search::filter_and_sort,
    };
    pub use crate::errors::AppError;
    pub use crate::store::{self, ContactStore, JsonStore, MemStore};
}
