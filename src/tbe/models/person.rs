use crate::ids::PersonId;

/// A bank customer. Identity is the generated id, name and contact info
/// may be corrected in place after creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    id: PersonId,
    name: String,
    contact_info: String,
}

impl Person {
    pub fn new(name: String, contact_info: String) -> Self {
        return Self {
            id: PersonId::generate(),
            name,
            contact_info,
        };
    }

    /// Builds a person with an explicit id, useful for data imports and tests.
    pub fn with_id(id: PersonId, name: String, contact_info: String) -> Self {
        return Self {
            id,
            name,
            contact_info,
        };
    }

    pub fn id(&self) -> PersonId {
        return self.id;
    }

    pub fn name(&self) -> &str {
        return &self.name;
    }

    pub fn set_name(&mut self, name: String) {
        self.name = name;
    }

    pub fn contact_info(&self) -> &str {
        return &self.contact_info;
    }

    pub fn set_contact_info(&mut self, contact_info: String) {
        self.contact_info = contact_info;
    }
}
