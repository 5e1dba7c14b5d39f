use core::fmt;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
pub use uuid::Uuid;

/// One directory entry. The serialized field names (`phoneNum`, `mail`,
/// `relative`) are the storage contract; other tooling reading the
/// storage slot directly depends on them.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone)]
pub struct Contact {
    pub id: Uuid,

    pub name: String,

    #[serde(rename = "phoneNum")]
    pub phone_num: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<Gender>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mail: Option<String>,

    #[serde(default)]
    pub relative: Relation,
}

/// The fields a form submission carries. Everything on a `Contact`
/// except its id, which the book assigns and never replaces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactFields {
    pub name: String,
    pub phone_num: String,
    pub gender: Option<Gender>,
    pub mail: Option<String>,
    pub relative: Relation,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone, Copy, ValueEnum)]
pub enum Gender {
    Male,
    Female,
    Others,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone, Copy, ValueEnum, Default)]
pub enum Relation {
    #[default]
    Others,
    Family,
    Relatives,
    Friends,
    Colleagues,
    Partners,
}

impl Contact {
    pub fn new(fields: ContactFields) -> Self {
        Contact {
            id: Uuid::new_v4(),
            name: fields.name,
            phone_num: fields.phone_num,
            gender: fields.gender,
            mail: fields.mail,
            relative: fields.relative,
        }
    }

    /// Replace every field except the id.
    pub fn replace_fields(&mut self, fields: ContactFields) {
        self.name = fields.name;
        self.phone_num = fields.phone_num;
        self.gender = fields.gender;
        self.mail = fields.mail;
        self.relative = fields.relative;
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Gender::Male => write!(f, "Male"),
            Gender::Female => write!(f, "Female"),
            Gender::Others => write!(f, "Others"),
        }
    }
}

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Relation::Others => write!(f, "Others"),
            Relation::Family => write!(f, "Family"),
            Relation::Relatives => write!(f, "Relatives"),
            Relation::Friends => write!(f, "Friends"),
            Relation::Colleagues => write!(f, "Colleagues"),
            Relation::Partners => write!(f, "Partners"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(name: &str, phone: &str) -> ContactFields {
        ContactFields {
            name: name.to_string(),
            phone_num: phone.to_string(),
            gender: None,
            mail: None,
            relative: Relation::default(),
        }
    }

    #[test]
    fn new_contact_defaults_relative_to_others() {
        let contact = Contact::new(fields("Jo", "84123456789"));

        assert_eq!(contact.relative, Relation::Others);
        assert_eq!(contact.gender, None);
        assert_eq!(contact.mail, None);
    }

    #[test]
    fn replace_fields_keeps_id() {
        let mut contact = Contact::new(fields("Jo", "84123456789"));
        let id = contact.id;

        contact.replace_fields(ContactFields {
            name: "Joanna".to_string(),
            phone_num: "84987654321".to_string(),
            gender: Some(Gender::Female),
            mail: Some("joanna@example.com".to_string()),
            relative: Relation::Friends,
        });

        assert_eq!(contact.id, id);
        assert_eq!(contact.name, "Joanna");
        assert_eq!(contact.relative, Relation::Friends);
    }

    #[test]
    fn serialized_field_names_follow_storage_contract() -> Result<(), serde_json::Error> {
        let contact = Contact {
            id: Uuid::new_v4(),
            name: "Jo".to_string(),
            phone_num: "84123456789".to_string(),
            gender: Some(Gender::Female),
            mail: Some("jo@example.com".to_string()),
            relative: Relation::Family,
        };

        let json = serde_json::to_value(&contact)?;

        assert!(json.get("phoneNum").is_some());
        assert!(json.get("mail").is_some());
        assert!(json.get("relative").is_some());
        assert_eq!(json["gender"], "Female");
        Ok(())
    }

    #[test]
    fn absent_optionals_are_omitted_and_defaulted() -> Result<(), serde_json::Error> {
        let contact = Contact::new(fields("Jo", "84123456789"));

        let json = serde_json::to_value(&contact)?;
        assert!(json.get("gender").is_none());
        assert!(json.get("mail").is_none());

        // A record written before `relative` existed still decodes.
        let decoded: Contact = serde_json::from_str(
            r#"{"id":"67e55044-10b1-426f-9247-bb680e5fe0c8","name":"Jo","phoneNum":"84123456789"}"#,
        )?;
        assert_eq!(decoded.relative, Relation::Others);
        Ok(())
    }
}
