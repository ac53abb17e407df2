//! Contact records.

use serde::{Deserialize, Serialize};

use crate::validation::registry::RegistryBuilder;
use crate::validation::{ConstraintSpec, Predicate, Record};

pub const CONTACT_TYPE_PHONE_NUMBER: &str = "PHONE_NUMBER";
pub const CONTACT_TYPE_EMAIL: &str = "EMAIL";

/// All valid contact type strings.
pub const VALID_CONTACT_TYPES: &[&str] = &[CONTACT_TYPE_PHONE_NUMBER, CONTACT_TYPE_EMAIL];

/// Maximum length of a contact uid.
pub const MAX_UID_LENGTH: u64 = 64;

/// Maximum length of a contact value (phone number, address, ...).
pub const MAX_CONTACT_LENGTH: u64 = 1_600;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ContactType {
    PhoneNumber,
    Email,
}

impl ContactType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::PhoneNumber => CONTACT_TYPE_PHONE_NUMBER,
            Self::Email => CONTACT_TYPE_EMAIL,
        }
    }
}

/// Request to register a single contact.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateContact {
    pub uid: Option<String>,
    pub contact_type: Option<ContactType>,
    pub contact: Option<String>,
}

impl Record for CreateContact {
    const RECORD_TYPE: &'static str = "CreateContact";
}

/// Request to delete contacts by uid.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteContacts {
    pub uids: Option<Vec<Option<String>>>,
}

impl Record for DeleteContacts {
    const RECORD_TYPE: &'static str = "DeleteContacts";
}

pub(super) fn register(builder: &mut RegistryBuilder) {
    let create = CreateContact::RECORD_TYPE;
    builder
        .register(create, "uid", Predicate::NoEmoji, &[])
        .register(create, "uid", Predicate::max_len(MAX_UID_LENGTH), &[])
        .register(create, "uid", Predicate::NotBlank, &[])
        .register(create, "contactType", Predicate::NotNull, &[])
        .register(
            create,
            "contactType",
            Predicate::OneOf(VALID_CONTACT_TYPES),
            &[],
        )
        .register(create, "contact", Predicate::max_len(MAX_CONTACT_LENGTH), &[]);

    let delete = DeleteContacts::RECORD_TYPE;
    builder
        .register(delete, "uids", Predicate::NotNull, &[])
        .register_spec(
            delete,
            ConstraintSpec::new("uids", Predicate::min_len(1)).with_message("must not be empty"),
        )
        .register_elements(delete, "uids", Predicate::max_len(MAX_UID_LENGTH), &[])
        .register_elements(delete, "uids", Predicate::NotBlank, &[]);
}
