use crate::error::CoreError;
use crate::models::{ContactType, CreateContact, DeleteContacts};
use crate::validation::Validator;

#[derive(Debug, Clone, Copy)]
pub struct ContactService {
    validator: Validator<'static>,
}

impl ContactService {
    pub fn new(validator: Validator<'static>) -> Self {
        Self { validator }
    }

    pub fn create_contact(&self, request: &CreateContact) -> Result<(), CoreError> {
        self.validator.check(request, &[])?;

        tracing::info!(
            uid = request.uid.as_deref().unwrap_or_default(),
            contact_type = request.contact_type.as_ref().map(ContactType::as_str),
            "Contact created"
        );
        Ok(())
    }

    /// Returns the number of uids accepted for deletion.
    pub fn delete_contacts(&self, request: &DeleteContacts) -> Result<usize, CoreError> {
        self.validator.check(request, &[])?;

        let count = request.uids.as_ref().map_or(0, Vec::len);
        tracing::info!(count, "Contacts deleted");
        Ok(count)
    }
}
